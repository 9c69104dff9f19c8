// Error types
// Typed validation failures for scheduler configuration

use thiserror::Error;

/// Configuration problems detected before a render pass.
///
/// The resolver itself never fails: bad dates and orphaned events simply
/// render nowhere. These errors only surface when loading or validating
/// settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("week start day must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidWeekStart(u8),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("layout size `{field}` must be greater than zero")]
    InvalidLayout { field: &'static str },

    #[error("unsupported date format: {0}")]
    UnknownDateFormat(String),
}
