// Date utility functions
// Week arithmetic, instant parsing and canonical serialization

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
    Utc,
};
use chrono_tz::Tz;

/// Offset-less date-time layouts accepted on ingestion.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Layouts with a numeric offset (`+02:00` or `+0200`) that RFC 3339 rejects.
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

pub fn is_same_day<A: TimeZone, B: TimeZone>(date1: &DateTime<A>, date2: &DateTime<B>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
///
/// In the first days of the calendar range, where the week start does not
/// exist, the start of the following week is returned.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date.checked_sub_signed(Duration::days(offset))
        .or_else(|| date.checked_add_signed(Duration::days(7 - offset)))
        .unwrap_or(date)
}

/// Resolve a wall-clock time in `tz`.
///
/// Times skipped by a DST change move forward by whole hours until they
/// exist, so `02:30` on a spring-forward night becomes `03:30`. Ambiguous
/// times take the earlier instant.
pub fn from_wall_clock(wall: NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    let mut wall = wall;
    for _ in 0..24 {
        if let Some(dt) = tz.from_local_datetime(&wall).earliest() {
            return Some(dt);
        }
        wall = wall.checked_add_signed(Duration::hours(1))?;
    }
    None
}

/// Midnight of `date` in `tz`.
///
/// Zones that skip midnight on a DST change get the first valid instant of
/// the day instead.
pub fn start_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    // No zone has a 24 hour gap; treat the wall clock as UTC.
    from_wall_clock(midnight, tz).unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// Parse an ISO-8601 value into an absolute instant.
///
/// Values with a `Z` suffix or a numeric offset are absolute, with or
/// without seconds. Offset-less date-times are read as wall-clock time in
/// `tz`; bare dates are UTC midnight. Returns `None` for anything
/// unparseable.
pub fn parse_instant(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(wall) = value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        return parse_naive(wall).map(|naive| Utc.from_utc_datetime(&naive));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Some(naive) = parse_naive(value) {
        return from_wall_clock(naive, tz).map(|dt| dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Canonical instant string: UTC with millisecond precision, e.g.
/// `2024-01-15T00:00:00.000Z`.
pub fn to_iso_string<T: TimeZone>(instant: &DateTime<T>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
