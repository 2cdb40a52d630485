use std::path::PathBuf;

use anyhow::{Context, Result};
use calexport_core::{CalendarEvent, EventTime};
use clap::Args;

/// Event given on the command line, either as flags or as a file.
#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Event title
    pub title: Option<String>,

    /// Start (e.g. "2024-05-01T14:00:00Z", "2024-05-01T09:00", "2024-05-01")
    #[arg(short, long)]
    pub start: Option<String>,

    /// End, same formats as --start
    #[arg(short, long)]
    pub end: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Only used for .ics export
    #[arg(long)]
    pub description: Option<String>,

    /// Read the event from a .toml or .json file. Other flags override
    /// values from the file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl EventArgs {
    pub fn into_event(self) -> Result<CalendarEvent> {
        let mut event = match self.file {
            Some(ref path) => CalendarEvent::from_file(path)
                .with_context(|| format!("Failed to load event from {}", path.display()))?,
            None => {
                let title = self.title.clone().ok_or_else(|| {
                    anyhow::anyhow!("Missing event title. Pass a title or --file <path>")
                })?;
                let start = self.start.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("Missing start time. Pass --start or --file <path>")
                })?;
                CalendarEvent::new(title, parse_time("--start", start)?)
            }
        };

        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(ref start) = self.start {
            event.event_start_date = parse_time("--start", start)?;
        }
        if let Some(ref end) = self.end {
            event.event_end_date = Some(parse_time("--end", end)?);
        }

        override_field(&mut event.address, self.address);
        override_field(&mut event.city, self.city);
        override_field(&mut event.state, self.state);
        override_field(&mut event.zip, self.zip);
        override_field(&mut event.country, self.country);
        override_field(&mut event.description, self.description);

        Ok(event)
    }
}

fn parse_time(flag: &str, value: &str) -> Result<EventTime> {
    EventTime::parse(value).with_context(|| format!("Invalid {} value", flag))
}

fn override_field(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = value;
    }
}
