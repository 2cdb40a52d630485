//! UTC normalization and calendar token formatting.

use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
pub use chrono_tz::Tz;

use crate::error::{CalExportError, CalExportResult};
use crate::event::EventTime;

/// `YYYYMMDDTHHmmss`, the fixed-width token used in calendar deep links.
/// No trailing `Z`; vendors that need it append it themselves.
pub const CALENDAR_UTC_FORMAT: &str = "%Y%m%dT%H%M%S";

/// `YYYY-MM-DDTHH`, hour granularity used by Outlook deep links.
pub const CALENDAR_UTC_DATE_HOUR_FORMAT: &str = "%Y-%m-%dT%H";

/// Converts [`EventTime`] values to UTC and renders calendar tokens.
///
/// Date-only and floating values are resolved in `local_tz`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeFormatter {
    local_tz: Tz,
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        DateTimeFormatter::utc()
    }
}

impl DateTimeFormatter {
    pub fn new(local_tz: Tz) -> Self {
        DateTimeFormatter { local_tz }
    }

    /// Formatter that treats floating and date-only values as UTC.
    pub fn utc() -> Self {
        DateTimeFormatter { local_tz: Tz::UTC }
    }

    pub fn local_timezone(&self) -> Tz {
        self.local_tz
    }

    /// Resolve a time to an absolute UTC instant.
    ///
    /// Fails with `InvalidTimestamp` for an unknown TZID or a wall-clock time
    /// that falls in a DST gap. Times in a DST fold take the earlier instant.
    pub fn to_utc(&self, time: &EventTime) -> CalExportResult<DateTime<Utc>> {
        let utc = match time {
            EventTime::DateTimeUtc(dt) => *dt,
            EventTime::DateTimeOffset(dt) => dt.with_timezone(&Utc),
            EventTime::DateTimeFloating(dt) => resolve_local(&self.local_tz, dt)?,
            EventTime::Date(d) => resolve_local(&self.local_tz, &d.and_time(NaiveTime::MIN))?,
            EventTime::DateTimeZoned { datetime, tzid } => {
                let tz = Tz::from_str(tzid).map_err(|_| {
                    CalExportError::InvalidTimestamp(format!("unknown timezone '{}'", tzid))
                })?;
                resolve_local(&tz, datetime)?
            }
        };

        tracing::trace!(input = %time, utc = %utc, "resolved event time");
        Ok(utc)
    }

    /// `YYYYMMDDTHHmmss` in UTC, without `Z`.
    pub fn to_calendar_utc_string(&self, time: &EventTime) -> CalExportResult<String> {
        Ok(format_utc_token(&self.to_utc(time)?))
    }

    /// `YYYY-MM-DDTHH` in UTC.
    pub fn to_calendar_utc_date_hour_string(&self, time: &EventTime) -> CalExportResult<String> {
        Ok(self
            .to_utc(time)?
            .format(CALENDAR_UTC_DATE_HOUR_FORMAT)
            .to_string())
    }
}

/// Render an instant as a `YYYYMMDDTHHmmss` token.
pub fn format_utc_token(dt: &DateTime<Utc>) -> String {
    dt.format(CALENDAR_UTC_FORMAT).to_string()
}

fn resolve_local(tz: &Tz, local: &NaiveDateTime) -> CalExportResult<DateTime<Utc>> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(CalExportError::InvalidTimestamp(format!(
            "{} does not exist in timezone {}",
            local,
            tz.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> EventTime {
        EventTime::parse(s).unwrap()
    }

    #[test]
    fn test_utc_instant_token() {
        let fmt = DateTimeFormatter::utc();
        assert_eq!(
            fmt.to_calendar_utc_string(&parse("2024-03-20T08:00:00Z")).unwrap(),
            "20240320T080000"
        );
    }

    #[test]
    fn test_offset_instant_normalizes_to_utc() {
        let fmt = DateTimeFormatter::utc();
        assert_eq!(
            fmt.to_calendar_utc_string(&parse("2024-03-20T03:00:00-05:00")).unwrap(),
            "20240320T080000"
        );
    }

    #[test]
    fn test_floating_time_uses_local_zone() {
        let fmt = DateTimeFormatter::new(chrono_tz::America::Chicago);
        // CDT is UTC-5 in late March
        assert_eq!(
            fmt.to_calendar_utc_string(&parse("2024-03-20T03:00")).unwrap(),
            "20240320T080000"
        );
    }

    #[test]
    fn test_zoned_time_ignores_local_zone() {
        let fmt = DateTimeFormatter::new(chrono_tz::Asia::Tokyo);
        assert_eq!(
            fmt.to_calendar_utc_string(&parse("2024-07-01T12:00[Europe/London]"))
                .unwrap(),
            "20240701T110000"
        );
    }

    #[test]
    fn test_date_only_is_local_midnight() {
        let fmt = DateTimeFormatter::new(chrono_tz::Europe::Berlin);
        assert_eq!(
            fmt.to_calendar_utc_string(&parse("2024-01-15")).unwrap(),
            "20240114T230000"
        );
    }

    #[test]
    fn test_date_hour_string() {
        let fmt = DateTimeFormatter::utc();
        assert_eq!(
            fmt.to_calendar_utc_date_hour_string(&parse("2024-05-01T14:59:59Z"))
                .unwrap(),
            "2024-05-01T14"
        );
    }

    #[test]
    fn test_unknown_tzid_is_invalid() {
        let fmt = DateTimeFormatter::utc();
        let err = fmt
            .to_utc(&parse("2024-05-01T14:00[Mars/Olympus_Mons]"))
            .unwrap_err();
        assert!(matches!(err, CalExportError::InvalidTimestamp(_)), "got {:?}", err);
    }

    #[test]
    fn test_dst_gap_is_invalid() {
        // 02:30 on 2024-03-10 never happens in New York
        let fmt = DateTimeFormatter::new(chrono_tz::America::New_York);
        let err = fmt.to_utc(&parse("2024-03-10T02:30")).unwrap_err();
        assert!(matches!(err, CalExportError::InvalidTimestamp(_)), "got {:?}", err);
    }

    #[test]
    fn test_dst_fold_takes_earlier_instant() {
        // 01:30 on 2024-11-03 happens twice in New York (EDT then EST)
        let fmt = DateTimeFormatter::new(chrono_tz::America::New_York);
        assert_eq!(
            fmt.to_calendar_utc_string(&parse("2024-11-03T01:30")).unwrap(),
            "20241103T053000"
        );
    }
}
