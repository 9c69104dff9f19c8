// Test fixtures - reusable test data
// Provides consistent resources, events and dates across test files
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday Jan 15, 2024 at midnight UTC
    pub fn monday_2024_01_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    /// Wednesday Jan 17, 2024 at noon UTC
    pub fn midweek_2024_01_17() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 17, 12, 0, 0).unwrap()
    }

    /// Thursday Feb 29, 2024 at noon UTC (leap day)
    pub fn leap_day_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }
}

/// Sample resources for testing
pub mod resources {
    use time_scheduler::Resource;

    pub fn team() -> Vec<Resource> {
        vec![
            Resource::new("1", "Alice Johnson", "#2196f3").with_organization("acme"),
            Resource::new("2", "Bob Smith", "#4caf50"),
            Resource::new("3", "Carol White", "#ff9800"),
        ]
    }
}

/// Sample events for testing
pub mod events {
    use time_scheduler::Event;

    /// A regular 9-to-5 shift on Monday 2024-01-15
    pub fn monday_shift() -> Event {
        Event::new("1", "1", "2024-01-15T09:00:00Z", "2024-01-15T17:00:00Z", "Regular Shift")
    }

    /// Week of 2024-01-15 with an orphan and a malformed event mixed in
    pub fn busy_week() -> Vec<Event> {
        let mut review = Event::new(
            "2",
            "2",
            "2024-01-15T18:00:00Z",
            "2024-01-15T22:00:00Z",
            "Overtime",
        );
        review.notes = Some("Approved by Carol".to_string());
        vec![
            monday_shift(),
            review,
            Event::new(
                "3",
                "3",
                "2024-01-16T08:00:00Z",
                "2024-01-16T16:00:00Z",
                "Holiday Coverage",
            ),
            Event::new("4", "1", "2024-01-19T23:30:00Z", "2024-01-20T07:30:00Z", "Night Shift"),
            Event::new("5", "42", "2024-01-17T09:00:00Z", "2024-01-17T17:00:00Z", "Orphan"),
            Event::new("6", "2", "sometime next week", "2024-01-18T17:00:00Z", "Malformed"),
        ]
    }
}
