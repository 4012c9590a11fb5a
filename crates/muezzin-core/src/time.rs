//! Civil-time normalization for upstream date and clock strings.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{MuezzinError, Result};

/// Civil zone all upstream clock strings are read in.
pub const CIVIL_TZ: Tz = chrono_tz::Asia::Kuala_Lumpur;

/// Upstream Gregorian date layout, e.g. `21-Jan-2026`.
pub const DATE_FMT: &str = "%d-%b-%Y";
/// Upstream clock layout, e.g. `06:15:00`.
pub const CLOCK_FMT: &str = "%H:%M:%S";

/// Resolve a date string plus a bare clock string into the instant they
/// name in `tz`.
///
/// The result keeps the zone's UTC offset attached (`+08:00` for the
/// default zone) rather than normalizing to UTC, so the receiver can
/// delay until the exact local second. Ambiguous or skipped wall-clock
/// times are rejected, not guessed; Kuala Lumpur has no transitions,
/// but a swapped-in zone might.
pub fn civil_instant(date: &str, clock: &str, tz: Tz) -> Result<DateTime<FixedOffset>> {
    let d = NaiveDate::parse_from_str(date, DATE_FMT)
        .map_err(|e| MuezzinError::MalformedTime(format!("bad date {date:?}: {e}")))?;
    let t = NaiveTime::parse_from_str(clock, CLOCK_FMT)
        .map_err(|e| MuezzinError::MalformedTime(format!("bad clock {clock:?}: {e}")))?;

    match tz.from_local_datetime(&d.and_time(t)) {
        LocalResult::Single(instant) => Ok(instant.fixed_offset()),
        LocalResult::Ambiguous(..) => Err(MuezzinError::MalformedTime(format!(
            "{date} {clock} is ambiguous in {tz}"
        ))),
        LocalResult::None => Err(MuezzinError::MalformedTime(format!(
            "{date} {clock} does not exist in {tz}"
        ))),
    }
}

/// 12-hour display form with meridiem, e.g. `06:15 AM`.
pub fn display_time(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%I:%M %p").to_string()
}
