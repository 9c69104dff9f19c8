// Settings module
// Display configuration for the week grid

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::date_format::DateFormat;

pub const DEFAULT_TIME_ZONE: &str = "UTC";
pub const DEFAULT_WEEK_STARTS_ON: u8 = 1; // Monday
pub const DEFAULT_ROW_HEIGHT: u32 = 60;
pub const DEFAULT_COL_WIDTH: u32 = 213;
pub const DEFAULT_HEADER_HEIGHT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// IANA zone every day boundary is computed in.
    pub timezone: String,
    /// 0 = Sunday .. 6 = Saturday
    pub week_starts_on: u8,
    pub date_format: DateFormat,
    pub row_height: u32,
    pub col_width: u32,
    pub header_height: u32,
    pub show_side_bar: bool,
    pub show_footer: bool,
    pub show_notes_badge: bool,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIME_ZONE.to_string(),
            week_starts_on: DEFAULT_WEEK_STARTS_ON,
            date_format: DateFormat::default(),
            row_height: DEFAULT_ROW_HEIGHT,
            col_width: DEFAULT_COL_WIDTH,
            header_height: DEFAULT_HEADER_HEIGHT,
            show_side_bar: false,
            show_footer: false,
            show_notes_badge: true,
        }
    }
}

impl SchedulerSettings {
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.week_starts_on > 6 {
            return Err(SchedulerError::InvalidWeekStart(self.week_starts_on));
        }

        if self.timezone.parse::<Tz>().is_err() {
            return Err(SchedulerError::UnknownTimezone(self.timezone.clone()));
        }

        for (field, value) in [
            ("row_height", self.row_height),
            ("col_width", self.col_width),
            ("header_height", self.header_height),
        ] {
            if value == 0 {
                return Err(SchedulerError::InvalidLayout { field });
            }
        }

        Ok(())
    }

    /// The display zone, falling back to UTC when the name is not a known
    /// IANA zone.
    pub fn time_zone(&self) -> Tz {
        match self.timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                log::warn!("Unknown timezone {:?}, falling back to UTC", self.timezone);
                Tz::UTC
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SchedulerSettings::default();
        assert_eq!(settings.timezone, "UTC");
        assert_eq!(settings.week_starts_on, 1);
        assert_eq!(settings.date_format, DateFormat::WeekdayDayMonth);
        assert_eq!(
            (settings.row_height, settings.col_width, settings.header_height),
            (60, 213, 30)
        );
        assert!(!settings.show_side_bar);
        assert!(!settings.show_footer);
        assert!(settings.show_notes_badge);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_week_start() {
        let settings = SchedulerSettings {
            week_starts_on: 7,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SchedulerError::InvalidWeekStart(7)));
    }

    #[test]
    fn test_validate_timezone() {
        let settings = SchedulerSettings {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SchedulerError::UnknownTimezone(_))));
        assert_eq!(settings.time_zone(), Tz::UTC);
    }

    #[test]
    fn test_validate_layout() {
        let settings = SchedulerSettings {
            col_width: 0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SchedulerError::InvalidLayout { field: "col_width" })
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: SchedulerSettings = toml::from_str(
            r#"
            timezone = "Europe/Paris"
            date_format = "dd/MM/yyyy"
            show_footer = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.time_zone(), chrono_tz::Europe::Paris);
        assert_eq!(settings.date_format, DateFormat::DayMonthYear);
        assert!(settings.show_footer);
        assert_eq!(settings.week_starts_on, 1);
        assert_eq!(settings.row_height, 60);
    }
}
