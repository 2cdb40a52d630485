use super::CalendarUrlBuilder;
use crate::error::{CalExportError, CalExportResult};
use crate::event::CalendarEvent;

const OUTLOOK_LIVE_HOST: &str = "outlook.live.com";
const OUTLOOK_OFFICE_HOST: &str = "outlook.office.com";

/// Separator between location fields: a comma and an encoded space.
const LOCATION_SEPARATOR: &str = ",%20";

impl CalendarUrlBuilder {
    /// Outlook.com compose link. Requires an end date.
    pub fn outlook_live_calendar_url(&self, event: &CalendarEvent) -> CalExportResult<String> {
        self.outlook_compose_url(OUTLOOK_LIVE_HOST, "", event)
    }

    /// Outlook 365 compose link. Same as Live apart from the host and a `%20`
    /// in front of the address.
    pub fn outlook_office_calendar_url(&self, event: &CalendarEvent) -> CalExportResult<String> {
        self.outlook_compose_url(OUTLOOK_OFFICE_HOST, "%20", event)
    }

    fn outlook_compose_url(
        &self,
        host: &str,
        location_prefix: &str,
        event: &CalendarEvent,
    ) -> CalExportResult<String> {
        let end_date = event
            .event_end_date
            .as_ref()
            .ok_or(CalExportError::MissingEndDate)?;

        let start = self
            .formatter()
            .to_calendar_utc_date_hour_string(&event.event_start_date)?;
        let end = self.formatter().to_calendar_utc_date_hour_string(end_date)?;

        // Blank fields are kept so the positions stay fixed
        let location = event.location_fields().join(LOCATION_SEPARATOR);

        Ok(format!(
            "https://{}/owa/?path=/calendar/action/compose&rrv=addevent\
             &startdt={}&enddt={}&location={}{}&subject={}&body",
            host, start, end, location_prefix, location, event.title
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{builder, spring_meetup};
    use crate::error::CalExportError;
    use crate::event::EventTime;

    #[test]
    fn test_outlook_live_full_url() {
        let url = builder().outlook_live_calendar_url(&spring_meetup()).unwrap();
        assert_eq!(
            url,
            "https://outlook.live.com/owa/?path=/calendar/action/compose&rrv=addevent\
             &startdt=2024-05-01T14&enddt=2024-05-01T16\
             &location=123 Main St,%20Springfield,%20IL,%2062701,%20USA\
             &subject=Spring Meetup&body"
        );
    }

    #[test]
    fn test_outlook_office_full_url() {
        let url = builder().outlook_office_calendar_url(&spring_meetup()).unwrap();
        assert_eq!(
            url,
            "https://outlook.office.com/owa/?path=/calendar/action/compose&rrv=addevent\
             &startdt=2024-05-01T14&enddt=2024-05-01T16\
             &location=%20123 Main St,%20Springfield,%20IL,%2062701,%20USA\
             &subject=Spring Meetup&body"
        );
    }

    #[test]
    fn test_live_and_office_differ_only_in_host_and_prefix() {
        let builder = builder();
        let mut event = spring_meetup();
        event.state = None;
        event.title = "Board & Budget".into();

        let live = builder.outlook_live_calendar_url(&event).unwrap();
        let office = builder.outlook_office_calendar_url(&event).unwrap();

        let normalized = office
            .replacen("outlook.office.com", "outlook.live.com", 1)
            .replacen("&location=%20", "&location=", 1);
        assert_eq!(normalized, live);
    }

    #[test]
    fn test_blank_location_fields_still_joined() {
        let builder = builder();
        let mut event = spring_meetup();
        event.address = None;
        event.city = Some(String::new());
        event.state = None;
        event.zip = None;
        event.country = None;

        let url = builder.outlook_live_calendar_url(&event).unwrap();
        assert!(
            url.contains("&location=,%20,%20,%20,%20&subject="),
            "Got: {}",
            url
        );
    }

    #[test]
    fn test_missing_end_date() {
        let builder = builder();
        let mut event = spring_meetup();
        event.event_end_date = None;

        assert!(matches!(
            builder.outlook_live_calendar_url(&event),
            Err(CalExportError::MissingEndDate)
        ));
        assert!(matches!(
            builder.outlook_office_calendar_url(&event),
            Err(CalExportError::MissingEndDate)
        ));
    }

    #[test]
    fn test_hour_granularity_truncates_minutes() {
        let builder = builder();
        let mut event = spring_meetup();
        event.event_start_date = EventTime::parse("2024-05-01T09:45:00-05:00").unwrap();
        event.event_end_date = Some(EventTime::parse("2024-05-01T10:59:00-05:00").unwrap());

        let url = builder.outlook_live_calendar_url(&event).unwrap();
        assert!(url.contains("startdt=2024-05-01T14&enddt=2024-05-01T15"), "Got: {}", url);
    }
}
