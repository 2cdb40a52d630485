//! Event input types.
//!
//! A `CalendarEvent` is the value the link builders read from. It is usually
//! assembled from form state (title, start/end pickers, address fields) right
//! before a link is built, or loaded from a TOML/JSON file by the CLI.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalExportError, CalExportResult};

/// Naive date-time layouts accepted by [`EventTime::parse`], tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A point in time as supplied by the caller.
///
/// Only `DateTimeUtc` and `DateTimeOffset` name an absolute instant on their
/// own; the other variants are resolved against a timezone by
/// [`DateTimeFormatter`](crate::DateTimeFormatter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventTime {
    /// Date-only source, interpreted as local midnight
    Date(NaiveDate),
    /// Absolute UTC instant
    DateTimeUtc(DateTime<Utc>),
    /// Instant with an explicit UTC offset (e.g. `-05:00`)
    DateTimeOffset(DateTime<FixedOffset>),
    /// Wall-clock time with no zone, interpreted in the local timezone
    DateTimeFloating(NaiveDateTime),
    /// Wall-clock time in a named IANA timezone
    DateTimeZoned { datetime: NaiveDateTime, tzid: String },
}

impl EventTime {
    /// Parse a timestamp string.
    ///
    /// Accepted forms:
    /// - RFC 3339: `2024-03-20T08:00:00Z`, `2024-03-20T03:00:00-05:00`
    /// - floating: `2024-03-20T15:00`, `2024-03-20 15:00:30`
    /// - zoned: `2024-03-20T15:00[Europe/Berlin]`
    /// - date only: `2024-03-20`
    pub fn parse(input: &str) -> CalExportResult<Self> {
        let s = input.trim();

        if let Some((datetime, tzid)) = s.strip_suffix(']').and_then(|rest| rest.split_once('[')) {
            let datetime = parse_naive_datetime(datetime).ok_or_else(|| invalid(input))?;
            if tzid.is_empty() {
                return Err(invalid(input));
            }
            return Ok(EventTime::DateTimeZoned {
                datetime,
                tzid: tzid.to_string(),
            });
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            if s.ends_with(['Z', 'z']) {
                return Ok(EventTime::DateTimeUtc(dt.with_timezone(&Utc)));
            }
            return Ok(EventTime::DateTimeOffset(dt));
        }

        if let Some(dt) = parse_naive_datetime(s) {
            return Ok(EventTime::DateTimeFloating(dt));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(EventTime::Date)
            .map_err(|_| invalid(input))
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn invalid(input: &str) -> CalExportError {
    CalExportError::InvalidTimestamp(format!(
        "could not parse '{}'. Expected RFC 3339, YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD",
        input
    ))
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::DateTimeUtc(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            EventTime::DateTimeOffset(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%:z")),
            EventTime::DateTimeFloating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            EventTime::DateTimeZoned { datetime, tzid } => {
                write!(f, "{}[{}]", datetime.format("%Y-%m-%dT%H:%M:%S"), tzid)
            }
        }
    }
}

impl TryFrom<String> for EventTime {
    type Error = CalExportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EventTime::parse(&value)
    }
}

impl From<EventTime> for String {
    fn from(value: EventTime) -> Self {
        value.to_string()
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(value: DateTime<Utc>) -> Self {
        EventTime::DateTimeUtc(value)
    }
}

/// An event to export to a personal calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    #[serde(alias = "start")]
    pub event_start_date: EventTime,
    #[serde(default, alias = "end", skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<EventTime>,

    // Free-text location, joined verbatim into vendor URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Not used by the link builders; carried into ICS exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start: EventTime) -> Self {
        CalendarEvent {
            title: title.into(),
            event_start_date: start,
            event_end_date: None,
            address: None,
            city: None,
            state: None,
            zip: None,
            country: None,
            description: None,
        }
    }

    /// Load an event from a `.toml` or `.json` file.
    pub fn from_file(path: &Path) -> CalExportResult<Self> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                CalExportError::Serialization(format!("{}: {}", path.display(), e))
            }),
            Some("toml") => toml::from_str(&content).map_err(|e| {
                CalExportError::Serialization(format!("{}: {}", path.display(), e))
            }),
            _ => Err(CalExportError::Serialization(format!(
                "Unsupported event file '{}'. Use a .toml or .json file",
                path.display()
            ))),
        }
    }

    /// Address fields in URL order: address, city, state, zip, country.
    /// Missing fields come back as empty strings so callers can join them
    /// positionally.
    pub fn location_fields(&self) -> [&str; 5] {
        [
            &self.address,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .map(|field| field.as_deref().unwrap_or(""))
    }

    /// Human-readable location with blank fields dropped, or `None` if every
    /// field is blank.
    pub fn display_location(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .location_fields()
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
