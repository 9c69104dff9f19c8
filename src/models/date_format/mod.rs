// Date format module
// Label patterns for the day header row

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Supported day label patterns, written in the Unicode (LDML) style the
/// scheduler is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "dd/MM/yyyy")]
    DayMonthYear,
    #[serde(rename = "MM/dd/yyyy")]
    MonthDayYear,
    #[serde(rename = "yyyy/MM/dd")]
    YearMonthDay,
    #[serde(rename = "yyyy/dd/MM")]
    YearDayMonth,
    #[serde(rename = "dd/MM/yyyy HH:mm:ss")]
    DayMonthYearTime,
    #[serde(rename = "MM/dd/yyyy HH:mm:ss")]
    MonthDayYearTime,
    #[serde(rename = "yyyy/MM/dd HH:mm:ss")]
    YearMonthDayTime,
    #[serde(rename = "yyyy/dd/MM HH:mm:ss")]
    YearDayMonthTime,
    #[serde(rename = "dd/MM")]
    DayMonth,
    #[serde(rename = "MM/dd")]
    MonthDay,
    #[serde(rename = "yyyy/MM")]
    YearMonth,
    #[serde(rename = "yyyy/dd")]
    YearDay,
    #[serde(rename = "dd/MM HH:mm:ss")]
    DayMonthTime,
    #[serde(rename = "MM/dd HH:mm:ss")]
    MonthDayTime,
    #[serde(rename = "yyyy/MM HH:mm:ss")]
    YearMonthTime,
    #[serde(rename = "yyyy/dd HH:mm:ss")]
    YearDayTime,
    #[default]
    #[serde(rename = "EEEE dd/MM")]
    WeekdayDayMonth,
}

impl DateFormat {
    pub fn all() -> [DateFormat; 17] {
        use DateFormat::*;
        [
            DayMonthYear,
            MonthDayYear,
            YearMonthDay,
            YearDayMonth,
            DayMonthYearTime,
            MonthDayYearTime,
            YearMonthDayTime,
            YearDayMonthTime,
            DayMonth,
            MonthDay,
            YearMonth,
            YearDay,
            DayMonthTime,
            MonthDayTime,
            YearMonthTime,
            YearDayTime,
            WeekdayDayMonth,
        ]
    }

    /// The literal pattern, e.g. `"EEEE dd/MM"`.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "dd/MM/yyyy",
            DateFormat::MonthDayYear => "MM/dd/yyyy",
            DateFormat::YearMonthDay => "yyyy/MM/dd",
            DateFormat::YearDayMonth => "yyyy/dd/MM",
            DateFormat::DayMonthYearTime => "dd/MM/yyyy HH:mm:ss",
            DateFormat::MonthDayYearTime => "MM/dd/yyyy HH:mm:ss",
            DateFormat::YearMonthDayTime => "yyyy/MM/dd HH:mm:ss",
            DateFormat::YearDayMonthTime => "yyyy/dd/MM HH:mm:ss",
            DateFormat::DayMonth => "dd/MM",
            DateFormat::MonthDay => "MM/dd",
            DateFormat::YearMonth => "yyyy/MM",
            DateFormat::YearDay => "yyyy/dd",
            DateFormat::DayMonthTime => "dd/MM HH:mm:ss",
            DateFormat::MonthDayTime => "MM/dd HH:mm:ss",
            DateFormat::YearMonthTime => "yyyy/MM HH:mm:ss",
            DateFormat::YearDayTime => "yyyy/dd HH:mm:ss",
            DateFormat::WeekdayDayMonth => "EEEE dd/MM",
        }
    }

    /// Equivalent chrono strftime string.
    fn strftime(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::YearMonthDay => "%Y/%m/%d",
            DateFormat::YearDayMonth => "%Y/%d/%m",
            DateFormat::DayMonthYearTime => "%d/%m/%Y %H:%M:%S",
            DateFormat::MonthDayYearTime => "%m/%d/%Y %H:%M:%S",
            DateFormat::YearMonthDayTime => "%Y/%m/%d %H:%M:%S",
            DateFormat::YearDayMonthTime => "%Y/%d/%m %H:%M:%S",
            DateFormat::DayMonth => "%d/%m",
            DateFormat::MonthDay => "%m/%d",
            DateFormat::YearMonth => "%Y/%m",
            DateFormat::YearDay => "%Y/%d",
            DateFormat::DayMonthTime => "%d/%m %H:%M:%S",
            DateFormat::MonthDayTime => "%m/%d %H:%M:%S",
            DateFormat::YearMonthTime => "%Y/%m %H:%M:%S",
            DateFormat::YearDayTime => "%Y/%d %H:%M:%S",
            DateFormat::WeekdayDayMonth => "%A %d/%m",
        }
    }

    pub fn format<T>(&self, date: &DateTime<T>) -> String
    where
        T: TimeZone,
        T::Offset: fmt::Display,
    {
        date.format(self.strftime()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::all()
            .into_iter()
            .find(|format| format.pattern() == s.trim())
            .ok_or_else(|| SchedulerError::UnknownDateFormat(s.to_string()))
    }
}
