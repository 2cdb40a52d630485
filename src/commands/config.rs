use std::path::Path;

use anyhow::{Context, Result};
use calexport_core::ExportConfig;
use owo_colors::OwoColorize;

use super::load_config;

pub fn run(config_path: Option<&Path>, init: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => ExportConfig::config_path()?,
    };

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            ExportConfig::create_default_config(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            println!("{}", format!("Created {}", path.display()).green());
        }
    }

    let config = load_config(Some(&path))?;
    let timezone = config.local_timezone()?;

    println!("{}", "Paths".bold());
    println!(
        "  Config:    {}{}",
        path.display(),
        if path.exists() { "" } else { " (not found, using defaults)" }
    );
    println!();
    println!("{}", "Settings".bold());
    println!("  Webcal host: {}", config.webcal_host);
    println!(
        "  Timezone:    {}{}",
        timezone.name(),
        if config.timezone.is_some() { "" } else { " (system)" }
    );

    Ok(())
}
