//! Week window construction.
//!
//! Turns a reference instant into the seven labelled day columns of the
//! displayed week. Day boundaries are taken in the display timezone, the
//! same zone events are bucketed in, so the header row and the event cells
//! always agree on where midnight falls.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::models::date_format::DateFormat;
use crate::utils::date::{get_week_start, start_of_day};

pub const DAYS_PER_WEEK: usize = 7;

/// One column of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    /// Calendar day in the display timezone.
    pub date: NaiveDate,
    /// Midnight of `date` in the display timezone.
    pub start: DateTime<Tz>,
    pub formatted_date: String,
    pub is_today: bool,
}

/// The seven consecutive days of the displayed week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekWindow {
    days: [DayCell; DAYS_PER_WEEK],
}

impl WeekWindow {
    pub fn days(&self) -> &[DayCell; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&DayCell> {
        self.days.get(index)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1].date
    }

    /// Column index of `date`, if the week covers it.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first_date()).num_days();
        usize::try_from(offset).ok().filter(|index| *index < DAYS_PER_WEEK)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter()
    }
}

/// Inputs of a week window computation.
#[derive(Debug, Clone, Copy)]
pub struct WeekOptions {
    pub tz: Tz,
    /// 0 = Sunday .. 6 = Saturday
    pub week_starts_on: u8,
    pub date_format: DateFormat,
}

/// Build the week containing `reference`, flagging the column that matches
/// `now`.
///
/// Weeks that would run past either end of the calendar range are replaced
/// by the nearest complete week, so the window may not contain `reference`
/// there.
pub fn build_week_window(
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
    options: &WeekOptions,
) -> WeekWindow {
    let tz = options.tz;
    let reference_date = reference.with_timezone(&tz).date_naive();
    let today = now.with_timezone(&tz).date_naive();
    let mut first = get_week_start(reference_date, options.week_starts_on);
    if first.checked_add_signed(Duration::days(DAYS_PER_WEEK as i64 - 1)).is_none() {
        first = first.checked_sub_signed(Duration::days(7)).unwrap_or(first);
    }

    let days = std::array::from_fn(|offset| {
        let date = first
            .checked_add_signed(Duration::days(offset as i64))
            .unwrap_or(NaiveDate::MAX);
        let start = start_of_day(date, &tz);
        DayCell {
            date,
            formatted_date: options.date_format.format(&start),
            is_today: date == today,
            start,
        }
    });

    WeekWindow { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Weekday};
    use test_case::test_case;

    fn options(week_starts_on: u8) -> WeekOptions {
        WeekOptions {
            tz: Tz::UTC,
            week_starts_on,
            date_format: DateFormat::default(),
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_monday_week_labels() {
        let reference = utc(2024, 1, 17, 12);
        let window = build_week_window(reference, reference, &options(1));

        let labels: Vec<&str> = window.iter().map(|d| d.formatted_date.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Monday 15/01",
                "Tuesday 16/01",
                "Wednesday 17/01",
                "Thursday 18/01",
                "Friday 19/01",
                "Saturday 20/01",
                "Sunday 21/01",
            ]
        );
    }

    #[test_case(0, Weekday::Sun)]
    #[test_case(1, Weekday::Mon)]
    #[test_case(5, Weekday::Fri)]
    #[test_case(6, Weekday::Sat)]
    fn test_first_day_matches_week_start(week_starts_on: u8, expected: Weekday) {
        let reference = utc(2024, 1, 17, 12);
        let window = build_week_window(reference, reference, &options(week_starts_on));
        assert_eq!(window.first_date().weekday(), expected);
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()));
    }

    #[test]
    fn test_reference_on_week_start_is_first_day() {
        let reference = utc(2024, 1, 15, 0);
        let window = build_week_window(reference, reference, &options(1));
        assert_eq!(window.first_date(), reference.date_naive());
        assert!(window.days()[0].is_today);
    }

    #[test]
    fn test_sunday_start_shifts_window() {
        // Monday 2024-01-15: Sunday-start week begins the day before
        let reference = utc(2024, 1, 15, 9);
        let monday = build_week_window(reference, reference, &options(1));
        let sunday = build_week_window(reference, reference, &options(0));

        assert_eq!(monday.first_date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(sunday.first_date(), NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert_eq!(sunday.index_of(reference.date_naive()), Some(1));
    }

    #[test]
    fn test_today_outside_week() {
        let window = build_week_window(utc(2024, 1, 17, 12), utc(2024, 3, 1, 12), &options(1));
        assert!(window.iter().all(|day| !day.is_today));
    }

    #[test]
    fn test_reference_projected_into_display_zone() {
        // Sunday 23:00 UTC is already Monday in Tokyo
        let reference = utc(2024, 1, 14, 23);
        let tokyo = WeekOptions {
            tz: "Asia/Tokyo".parse().unwrap(),
            ..options(1)
        };
        let window = build_week_window(reference, reference, &tokyo);

        assert_eq!(window.first_date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(window.days()[0].is_today);
        assert_eq!(window.days()[0].start.to_rfc3339(), "2024-01-15T00:00:00+09:00");
    }

    #[test]
    fn test_time_patterns_render_midnight() {
        let timed = WeekOptions {
            date_format: DateFormat::YearDayMonthTime,
            ..options(1)
        };
        let window = build_week_window(utc(2024, 1, 17, 12), utc(2024, 1, 17, 12), &timed);
        assert_eq!(window.days()[0].formatted_date, "2024/15/01 00:00:00");
    }

    #[test_case(DateTime::<Utc>::MAX_UTC ; "latest instant")]
    #[test_case(DateTime::<Utc>::MIN_UTC ; "earliest instant")]
    fn test_calendar_limits_keep_a_full_week(reference: DateTime<Utc>) {
        let window = build_week_window(reference, reference, &options(1));
        let days = window.days();

        assert_eq!(days[0].date.weekday(), Weekday::Mon);
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!((days[6].date - reference.date_naive()).num_days().abs() < 14);
    }

    #[test]
    fn test_index_of_outside_week() {
        let window = build_week_window(utc(2024, 1, 17, 12), utc(2024, 1, 17, 12), &options(1));
        assert_eq!(window.index_of(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()), None);
        assert_eq!(window.index_of(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()), None);
        assert_eq!(window.index_of(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap()), Some(6));
    }
}
