use chrono::Duration;

use super::{CalendarUrlBuilder, encode_uri_component};
use crate::datetime::format_utc_token;
use crate::error::{CalExportError, CalExportResult};
use crate::event::CalendarEvent;

/// Length given to every Google Calendar event. The event's own end date is
/// not consulted.
pub const GOOGLE_EVENT_DURATION_MINUTES: i64 = 30;

const GOOGLE_RENDER_URL: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

impl CalendarUrlBuilder {
    /// Google Calendar "render" link.
    ///
    /// `dates` is `{start}Z%2F{end}Z` with `end = start + 30 minutes`.
    /// The title is encoded in `details` but left raw in `text`.
    pub fn google_calendar_url(&self, event: &CalendarEvent) -> CalExportResult<String> {
        let start = self.formatter().to_utc(&event.event_start_date)?;
        let end = start
            .checked_add_signed(Duration::minutes(GOOGLE_EVENT_DURATION_MINUTES))
            .ok_or_else(|| {
                CalExportError::InvalidTimestamp(format!(
                    "{} is too late to add a {} minute duration",
                    event.event_start_date, GOOGLE_EVENT_DURATION_MINUTES
                ))
            })?;

        Ok(format!(
            "{}&dates={}Z%2F{}Z&details={}&text={}",
            GOOGLE_RENDER_URL,
            format_utc_token(&start),
            format_utc_token(&end),
            encode_uri_component(&event.title),
            event.title
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{builder, spring_meetup};
    use super::*;
    use crate::event::EventTime;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_google_full_url() {
        let url = builder().google_calendar_url(&spring_meetup()).unwrap();
        assert_eq!(
            url,
            "https://calendar.google.com/calendar/render?action=TEMPLATE\
             &dates=20240501T140000Z%2F20240501T143000Z\
             &details=Spring%20Meetup&text=Spring Meetup"
        );
    }

    #[test]
    fn test_google_ignores_end_date() {
        let builder = builder();
        let mut event = spring_meetup();

        let with_end = builder.google_calendar_url(&event).unwrap();

        event.event_end_date = None;
        let without_end = builder.google_calendar_url(&event).unwrap();

        // End before start changes nothing either
        event.event_end_date = Some(EventTime::parse("2024-04-01T09:00:00Z").unwrap());
        let earlier_end = builder.google_calendar_url(&event).unwrap();

        assert_eq!(with_end, without_end);
        assert_eq!(with_end, earlier_end);
    }

    #[test]
    fn test_google_end_crosses_midnight() {
        let builder = builder();
        let mut event = spring_meetup();
        event.event_start_date = EventTime::parse("2024-12-31T23:45:00Z").unwrap();

        let url = builder.google_calendar_url(&event).unwrap();
        assert!(
            url.contains("dates=20241231T234500Z%2F20250101T001500Z"),
            "Got: {}",
            url
        );
    }

    #[test]
    fn test_google_encodes_details_only() {
        let builder = builder();
        let mut event = spring_meetup();
        event.title = "Q&A night".into();

        let url = builder.google_calendar_url(&event).unwrap();
        assert!(url.ends_with("&details=Q%26A%20night&text=Q&A night"), "Got: {}", url);
    }

    #[test]
    fn test_google_accepts_empty_title() {
        let builder = builder();
        let mut event = spring_meetup();
        event.title = String::new();

        let url = builder.google_calendar_url(&event).unwrap();
        assert!(url.ends_with("&details=&text="), "Got: {}", url);
    }

    #[test]
    fn test_google_end_past_max_date_is_error() {
        let builder = builder();
        let mut event = spring_meetup();
        event.event_start_date = EventTime::from(DateTime::<Utc>::MAX_UTC - Duration::minutes(10));

        let err = builder.google_calendar_url(&event).unwrap_err();
        assert!(matches!(err, CalExportError::InvalidTimestamp(_)), "got {:?}", err);
    }
}
