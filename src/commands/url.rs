use std::path::Path;

use anyhow::Result;
use calexport_core::Vendor;

use super::load_builder;
use crate::event_args::EventArgs;

pub fn run(config_path: Option<&Path>, vendor: Vendor, args: EventArgs) -> Result<()> {
    let builder = load_builder(config_path)?;
    let event = args.into_event()?;

    println!("{}", builder.build(vendor, &event)?);

    Ok(())
}
