//! Add-to-calendar export for events.
//!
//! This crate turns a `CalendarEvent` into links that add it to a personal
//! calendar:
//! - `links` builds Google Calendar, Outlook (Live and Office) and webcal links
//! - `ics` writes a standalone `.ics` document
//! - `datetime` normalizes event times to the UTC tokens vendors expect

pub mod config;
pub mod datetime;
pub mod error;
pub mod event;
pub mod ics;
pub mod links;

pub use crate::config::ExportConfig;
pub use datetime::DateTimeFormatter;
pub use error::{CalExportError, CalExportResult};
pub use event::{CalendarEvent, EventTime};
pub use links::{CalendarUrlBuilder, Vendor};
