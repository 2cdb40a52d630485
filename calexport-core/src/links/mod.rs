//! "Add to calendar" deep links.
//!
//! Each vendor has its own URL scheme with its own quirks in timezone
//! handling, escaping and field order. The output is matched byte-for-byte
//! against links already published, so the quirks are kept as they are:
//!
//! - Google ends every event 30 minutes after it starts and encodes the title
//!   only in `details`.
//! - Outlook uses hour granularity, joins the address fields positionally
//!   without encoding, and the Office variant has an extra leading `%20`.
//! - iCalendar redirects to a hosted `.ics` keyed by the raw title.

mod encode;
mod google;
mod outlook;
mod webcal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::datetime::DateTimeFormatter;
use crate::error::{CalExportError, CalExportResult};
use crate::event::CalendarEvent;

pub use encode::encode_uri_component;
pub use google::GOOGLE_EVENT_DURATION_MINUTES;

/// Calendar services an event can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vendor {
    Google,
    #[serde(rename = "ical")]
    ICalendar,
    OutlookOffice,
    OutlookLive,
}

impl Vendor {
    /// All vendors, in the order the export menu lists them.
    pub const ALL: [Vendor; 4] = [
        Vendor::Google,
        Vendor::ICalendar,
        Vendor::OutlookOffice,
        Vendor::OutlookLive,
    ];

    /// Short name used on the command line and as JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Google => "google",
            Vendor::ICalendar => "ical",
            Vendor::OutlookOffice => "outlook-office",
            Vendor::OutlookLive => "outlook-live",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Vendor::Google => "Google Calendar",
            Vendor::ICalendar => "iCalendar",
            Vendor::OutlookOffice => "Outlook 365",
            Vendor::OutlookLive => "Outlook Live",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vendor {
    type Err = CalExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" | "gcal" => Ok(Vendor::Google),
            "ical" | "icalendar" | "webcal" | "apple" => Ok(Vendor::ICalendar),
            "outlook-office" | "office" | "outlook365" | "outlook-365" => {
                Ok(Vendor::OutlookOffice)
            }
            "outlook-live" | "live" | "outlook" => Ok(Vendor::OutlookLive),
            _ => Err(CalExportError::UnknownVendor(s.to_string())),
        }
    }
}

/// Builds vendor links for events.
///
/// Holds the formatter (local timezone) and the webcal host; every build
/// call is otherwise independent and leaves the event untouched.
#[derive(Debug, Clone)]
pub struct CalendarUrlBuilder {
    formatter: DateTimeFormatter,
    webcal_host: String,
}

impl CalendarUrlBuilder {
    pub fn new(formatter: DateTimeFormatter, webcal_host: impl Into<String>) -> Self {
        CalendarUrlBuilder {
            formatter,
            webcal_host: webcal_host.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> CalExportResult<Self> {
        Ok(Self::new(config.formatter()?, config.webcal_host.clone()))
    }

    pub fn formatter(&self) -> &DateTimeFormatter {
        &self.formatter
    }

    pub fn webcal_host(&self) -> &str {
        &self.webcal_host
    }

    /// Build the link for a single vendor.
    pub fn build(&self, vendor: Vendor, event: &CalendarEvent) -> CalExportResult<String> {
        let url = match vendor {
            Vendor::Google => self.google_calendar_url(event),
            Vendor::ICalendar => self.icalendar_uri(event),
            Vendor::OutlookOffice => self.outlook_office_calendar_url(event),
            Vendor::OutlookLive => self.outlook_live_calendar_url(event),
        }?;

        tracing::debug!(vendor = %vendor, title = %event.title, "built calendar link");
        Ok(url)
    }

    /// Build every vendor's link. A failure for one vendor does not stop the
    /// others.
    pub fn build_all(&self, event: &CalendarEvent) -> Vec<(Vendor, CalExportResult<String>)> {
        Vendor::ALL
            .into_iter()
            .map(|vendor| (vendor, self.build(vendor, event)))
            .collect()
    }
}
