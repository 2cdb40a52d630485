use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calexport_core::ics::{generate_ics, ics_data_uri};
use chrono::Utc;
use owo_colors::OwoColorize;

use super::load_config;
use crate::event_args::EventArgs;

pub fn run(
    config_path: Option<&Path>,
    args: EventArgs,
    output: Option<PathBuf>,
    data_uri: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let formatter = config.formatter()?;
    let event = args.into_event()?;

    let uid = format!("{}@calexport", uuid::Uuid::new_v4());
    let ics = generate_ics(&event, &formatter, &uid, Utc::now())?;

    if data_uri {
        println!("{}", ics_data_uri(&ics));
        return Ok(());
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{}", format!("Wrote {}", path.display()).green());
        }
        None => print!("{}", ics),
    }

    Ok(())
}
