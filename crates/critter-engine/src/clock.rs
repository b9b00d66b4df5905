//! Current local month and hour in a named time zone.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{CritterError, Result};

/// Time zone the catalog's hours are written in.
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// A wall-clock instant reduced to the indices the engine works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    /// Month index, January = 0.
    pub month: u8,
    /// Hour of the day, `0..24`.
    pub hour: u8,
}

impl LocalTime {
    pub fn from_datetime<T: TimeZone>(dt: &DateTime<T>) -> Self {
        Self {
            month: dt.month0() as u8,
            hour: dt.hour() as u8,
        }
    }
}

/// Parse an IANA time zone name such as `"America/Los_Angeles"`.
///
/// # Errors
/// Returns `CritterError::InvalidTimezone` if the name is not recognized.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| CritterError::InvalidTimezone(timezone.to_string()))
}

/// The current month and hour in `timezone`.
///
/// # Errors
/// Returns `CritterError::InvalidTimezone` if the name is not recognized.
pub fn local_now(timezone: &str) -> Result<LocalTime> {
    local_at(Utc::now(), timezone)
}

/// The month and hour of the UTC instant `at` as seen in `timezone`.
///
/// # Errors
/// Returns `CritterError::InvalidTimezone` if the name is not recognized.
pub fn local_at(at: DateTime<Utc>, timezone: &str) -> Result<LocalTime> {
    let tz = parse_timezone(timezone)?;
    Ok(LocalTime::from_datetime(&at.with_timezone(&tz)))
}
