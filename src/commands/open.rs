use std::path::Path;

use anyhow::Result;
use calexport_core::Vendor;
use owo_colors::OwoColorize;

use super::load_builder;
use crate::event_args::EventArgs;

pub fn run(config_path: Option<&Path>, vendor: Vendor, args: EventArgs) -> Result<()> {
    let builder = load_builder(config_path)?;
    let event = args.into_event()?;
    let url = builder.build(vendor, &event)?;

    println!("Opening {} for \"{}\"", vendor.label().bold(), event.title);

    if let Err(e) = ::open::that(&url) {
        tracing::warn!(error = %e, "could not open browser");
        println!("(Could not open browser automatically, please open this link)");
        println!("{}", url);
    }

    Ok(())
}
