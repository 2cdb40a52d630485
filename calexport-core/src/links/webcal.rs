use super::CalendarUrlBuilder;
use crate::error::{CalExportError, CalExportResult};
use crate::event::CalendarEvent;

impl CalendarUrlBuilder {
    /// `webcal://{host}/blogs/events/{title}/?ical=1`.
    ///
    /// The title goes into the path as-is (no slugging, no encoding). The
    /// hosted `.ics` endpoint is looked up by that exact string.
    pub fn icalendar_uri(&self, event: &CalendarEvent) -> CalExportResult<String> {
        if event.title.is_empty() {
            return Err(CalExportError::MissingTitle);
        }

        Ok(format!(
            "webcal://{}/blogs/events/{}/?ical=1",
            self.webcal_host(),
            event.title
        ))
    }
}
