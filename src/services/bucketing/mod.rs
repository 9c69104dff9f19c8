//! Event timezone normalization and day bucketing.
//!
//! Every event is parsed to an absolute instant and projected into the
//! display timezone, then assigned to the (resource, day) cell its start
//! falls on. Only the start decides the bucket: an event running past
//! midnight is still shown once, on its first day.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::models::event::BaseEvent;
use crate::models::resource::BaseResource;
use crate::services::week::{WeekWindow, DAYS_PER_WEEK};

/// An event with its boundaries projected into the display timezone.
///
/// A boundary that failed to parse is `None` and never matches any day.
#[derive(Debug)]
pub struct NormalizedEvent<'e, E> {
    pub event: &'e E,
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
}

impl<'e, E> NormalizedEvent<'e, E> {
    /// Local calendar day of the start.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.as_ref().map(DateTime::date_naive)
    }

    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.start_date() == Some(date)
    }
}

/// Parse and project every event. Malformed values are kept, not dropped.
pub fn normalize_events<'e, E: BaseEvent>(events: &'e [E], tz: &Tz) -> Vec<NormalizedEvent<'e, E>> {
    events
        .iter()
        .map(|event| NormalizedEvent {
            event,
            start: event.start().to_instant(tz).map(|dt| dt.with_timezone(tz)),
            end: event.end().to_instant(tz).map(|dt| dt.with_timezone(tz)),
        })
        .collect()
}

type DayBuckets<'e, E> = [Vec<NormalizedEvent<'e, E>>; DAYS_PER_WEEK];

/// Events of one displayed week, keyed by resource and day column.
#[derive(Debug)]
pub struct WeekBuckets<'e, E> {
    cells: HashMap<String, DayBuckets<'e, E>>,
}

impl<'e, E> WeekBuckets<'e, E> {
    /// Events in a cell, earliest start first. Ties keep input order.
    pub fn cell(&self, resource_id: &str, day_index: usize) -> &[NormalizedEvent<'e, E>] {
        self.cells
            .get(resource_id)
            .and_then(|days| days.get(day_index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The event a click on this cell resolves to.
    pub fn first_in_cell(
        &self,
        resource_id: &str,
        day_index: usize,
    ) -> Option<&NormalizedEvent<'e, E>> {
        self.cell(resource_id, day_index).first()
    }

    /// Bucketed events on a day across all resources.
    pub fn day_count(&self, day_index: usize) -> usize {
        self.cells
            .values()
            .filter_map(|days| days.get(day_index))
            .map(Vec::len)
            .sum()
    }

    /// Bucketed events of a resource over the whole week.
    pub fn resource_count(&self, resource_id: &str) -> usize {
        self.cells
            .get(resource_id)
            .map(|days| days.iter().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn events_for_resource(
        &self,
        resource_id: &str,
    ) -> impl Iterator<Item = &NormalizedEvent<'e, E>> {
        self.cells
            .get(resource_id)
            .into_iter()
            .flat_map(|days| days.iter().flatten())
    }

    pub fn len(&self) -> usize {
        self.cells.values().flat_map(|days| days.iter()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assign events to the cells of `window`.
///
/// An event lands in cell (r, d) when its resource id equals `r`'s and its
/// normalized start falls on `d`. Events for unknown resources, outside the
/// week, or with an unparseable start are left out.
pub fn bucket_events<'e, R, E>(
    resources: &[R],
    events: &'e [E],
    window: &WeekWindow,
    tz: &Tz,
) -> WeekBuckets<'e, E>
where
    R: BaseResource,
    E: BaseEvent,
{
    let mut cells: HashMap<String, DayBuckets<'e, E>> = resources
        .iter()
        .map(|resource| (resource.id().to_string(), std::array::from_fn(|_| Vec::new())))
        .collect();

    for normalized in normalize_events(events, tz) {
        let Some(days) = cells.get_mut(normalized.event.resource_id()) else {
            log::debug!(
                "Event {} references unknown resource {}",
                normalized.event.id(),
                normalized.event.resource_id()
            );
            continue;
        };

        let Some(index) = normalized.start_date().and_then(|date| window.index_of(date)) else {
            continue;
        };

        days[index].push(normalized);
    }

    for days in cells.values_mut() {
        for bucket in days.iter_mut() {
            bucket.sort_by_key(|normalized| normalized.start);
        }
    }

    WeekBuckets { cells }
}
