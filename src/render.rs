//! Terminal rendering for calexport types.

use anyhow::Result;
use calexport_core::{CalendarEvent, DateTimeFormatter, EventTime, Vendor};
use owo_colors::OwoColorize;

/// Width of the vendor label column in `links` output
const LABEL_WIDTH: usize = 16;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Vendor {
    fn render(&self) -> String {
        let label = format!("{:<width$}", self.label(), width = LABEL_WIDTH);
        match self {
            Vendor::Google => label.blue().to_string(),
            Vendor::ICalendar => label.magenta().to_string(),
            Vendor::OutlookOffice | Vendor::OutlookLive => label.cyan().to_string(),
        }
    }
}

/// "May 1, 2024 - May 2, 2024" in the local timezone, or just the start date
/// when the event has no end.
pub fn render_date_range(event: &CalendarEvent, formatter: &DateTimeFormatter) -> Result<String> {
    let start = local_date(&event.event_start_date, formatter)?;

    match event.event_end_date {
        Some(ref end) => Ok(format!("{} - {}", start, local_date(end, formatter)?)),
        None => Ok(start),
    }
}

fn local_date(time: &EventTime, formatter: &DateTimeFormatter) -> Result<String> {
    // Date-only values are already calendar dates; converting through UTC
    // could shift them a day
    if let EventTime::Date(d) = time {
        return Ok(d.format("%B %-d, %Y").to_string());
    }

    let local = formatter
        .to_utc(time)?
        .with_timezone(&formatter.local_timezone());
    Ok(local.format("%B %-d, %Y").to_string())
}
