pub mod config;
pub mod ics;
pub mod links;
pub mod open;
pub mod url;

use std::path::Path;

use anyhow::{Context, Result};
use calexport_core::{CalendarUrlBuilder, ExportConfig};

/// Load config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ExportConfig> {
    let config = match path {
        Some(path) => ExportConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ExportConfig::load().context("Failed to load config")?,
    };
    Ok(config)
}

pub fn load_builder(path: Option<&Path>) -> Result<CalendarUrlBuilder> {
    let config = load_config(path)?;
    Ok(CalendarUrlBuilder::from_config(&config)?)
}
