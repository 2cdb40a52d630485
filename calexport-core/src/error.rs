//! Error types for calendar export.

use thiserror::Error;

/// Errors that can occur while building calendar links or documents.
#[derive(Error, Debug)]
pub enum CalExportError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Event has no end date (required by Outlook links)")]
    MissingEndDate,

    #[error("Event title is empty")]
    MissingTitle,

    #[error("Unknown calendar vendor '{0}'. Expected one of: google, ical, outlook-office, outlook-live")]
    UnknownVendor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calendar export operations.
pub type CalExportResult<T> = Result<T, CalExportError>;
