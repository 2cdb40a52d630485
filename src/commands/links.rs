use std::path::Path;

use anyhow::Result;
use calexport_core::{CalExportResult, CalendarEvent, CalendarUrlBuilder, Vendor};
use owo_colors::OwoColorize;
use serde_json::{Map, Value, json};

use super::load_builder;
use crate::event_args::EventArgs;
use crate::render::{Render, render_date_range};

pub fn run(config_path: Option<&Path>, args: EventArgs, as_json: bool) -> Result<()> {
    let builder = load_builder(config_path)?;
    let event = args.into_event()?;
    let links = builder.build_all(&event);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&links_to_json(&links))?);
        return Ok(());
    }

    println!("{}", render_links(&builder, &event, &links));
    Ok(())
}

/// `{"google": "https://...", "outlook-live": {"error": "..."}}`
pub fn links_to_json(links: &[(Vendor, CalExportResult<String>)]) -> Value {
    let mut map = Map::new();
    for (vendor, result) in links {
        let value = match result {
            Ok(url) => Value::String(url.clone()),
            Err(e) => json!({ "error": e.to_string() }),
        };
        map.insert(vendor.name().to_string(), value);
    }
    Value::Object(map)
}

fn render_links(
    builder: &CalendarUrlBuilder,
    event: &CalendarEvent,
    links: &[(Vendor, CalExportResult<String>)],
) -> String {
    // A bad date still lists every vendor
    let dates = render_date_range(event, builder.formatter())
        .unwrap_or_else(|e| format!("(dates unavailable: {})", e));

    let mut lines = vec![event.title.bold().to_string(), dates.dimmed().to_string()];
    if let Some(location) = event.display_location() {
        lines.push(location.dimmed().to_string());
    }
    lines.push(String::new());

    for (vendor, result) in links {
        match result {
            Ok(url) => lines.push(format!("  {} {}", vendor.render(), url)),
            Err(e) => lines.push(format!("  {} {}", vendor.render(), e.to_string().red())),
        }
    }

    lines.join("\n")
}
