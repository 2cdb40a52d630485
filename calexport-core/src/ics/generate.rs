//! Inline ICS generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use crate::datetime::{DateTimeFormatter, format_utc_token};
use crate::error::{CalExportError, CalExportResult};
use crate::event::CalendarEvent;
use crate::links::encode_uri_component;

/// Generate a single-event `VCALENDAR` document.
///
/// `uid` identifies the event across re-exports; `dtstamp` is the creation
/// time of this document. Times are written as UTC with a `Z` suffix.
pub fn generate_ics(
    event: &CalendarEvent,
    formatter: &DateTimeFormatter,
    uid: &str,
    dtstamp: DateTime<Utc>,
) -> CalExportResult<String> {
    if event.title.is_empty() {
        return Err(CalExportError::MissingTitle);
    }
    if uid.trim().is_empty() {
        return Err(CalExportError::IcsGenerate("UID must not be empty".into()));
    }

    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "REQUEST"));

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(uid);
    ics_event.summary(&event.title);
    ics_event.add_property("SEQUENCE", "0");
    ics_event.add_property("DTSTAMP", format!("{}Z", format_utc_token(&dtstamp)));

    let start = formatter.to_calendar_utc_string(&event.event_start_date)?;
    ics_event.add_property("DTSTART", format!("{}Z", start));

    if let Some(ref end_date) = event.event_end_date {
        let end = formatter.to_calendar_utc_string(end_date)?;
        ics_event.add_property("DTEND", format!("{}Z", end));
    }

    // DESCRIPTION falls back to the title so calendar apps show something
    let description = event
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(event.title.as_str());
    ics_event.description(description);

    if let Some(location) = event.display_location() {
        ics_event.location(&location);
    }

    ics_event.add_property("STATUS", "CONFIRMED");

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    let output = strip_ics_bloat(&cal.to_string());
    tracing::debug!(uid, title = %event.title, bytes = output.len(), "generated ics");

    Ok(output)
}

/// `data:` URI carrying an ICS document, for clients that cannot follow
/// webcal links.
pub fn ics_data_uri(ics: &str) -> String {
    format!("data:text/calendar;charset=utf8,{}", encode_uri_component(ics))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with CALEXPORT
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:CALEXPORT\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
