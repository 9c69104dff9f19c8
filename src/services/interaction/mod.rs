//! Cell interaction resolution.
//!
//! A click on a (resource, day) cell resolves to the event occupying it or,
//! when the cell is free, to a placeholder describing the empty slot. Either
//! way the caller's click handler receives one uniform value.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::models::event::{BaseEvent, EventTime};
use crate::models::resource::BaseResource;
use crate::services::bucketing::WeekBuckets;
use crate::services::week::WeekWindow;
use crate::utils::date::to_iso_string;

pub const DEFAULT_BREAK_MINUTES: u32 = 30;

/// Event-shaped stand-in for a free cell. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptySlotPlaceholder {
    pub resource_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub start: String,
    pub end: String,
    pub title: String,
    pub break_minutes: u32,
}

impl EmptySlotPlaceholder {
    pub fn for_slot<R: BaseResource>(resource: &R, slot: &DateTime<Tz>) -> Self {
        let anchor = to_iso_string(slot);
        Self {
            resource_id: resource.id().to_string(),
            organization_id: resource.organization_id().map(str::to_string),
            start: anchor.clone(),
            end: anchor,
            title: String::new(),
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

/// What a cell click resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellSelection<E> {
    /// The occupying event, with start/end re-serialized as instant strings.
    Event(E),
    Empty(EmptySlotPlaceholder),
}

impl<E> CellSelection<E> {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellSelection::Empty(_))
    }

    pub fn event(&self) -> Option<&E> {
        match self {
            CellSelection::Event(event) => Some(event),
            CellSelection::Empty(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&EmptySlotPlaceholder> {
        match self {
            CellSelection::Event(_) => None,
            CellSelection::Empty(placeholder) => Some(placeholder),
        }
    }
}

/// Receives the resolved selection and the anchor of the clicked day.
pub trait EventClickHandler<E> {
    fn on_event_click(&mut self, selection: &CellSelection<E>, slot: DateTime<Tz>);
}

impl<E, F> EventClickHandler<E> for F
where
    F: FnMut(&CellSelection<E>, DateTime<Tz>),
{
    fn on_event_click(&mut self, selection: &CellSelection<E>, slot: DateTime<Tz>) {
        self(selection, slot)
    }
}

/// Resolve the cell without notifying anyone.
///
/// Returns `None` only when `day_index` is outside the week.
pub fn resolve_cell<R, E>(
    resource: &R,
    day_index: usize,
    window: &WeekWindow,
    buckets: &WeekBuckets<'_, E>,
) -> Option<CellSelection<E>>
where
    R: BaseResource,
    E: BaseEvent,
{
    let day = window.day(day_index)?;

    let selection = match buckets.first_in_cell(resource.id(), day_index) {
        Some(occupant) => {
            let mut event = occupant.event.clone();
            let start = occupant
                .start
                .as_ref()
                .map(EventTime::iso)
                .unwrap_or_else(|| event.start().clone());
            let end = occupant
                .end
                .as_ref()
                .map(EventTime::iso)
                .unwrap_or_else(|| event.end().clone());
            event.set_span(start, end);
            CellSelection::Event(event)
        }
        None => CellSelection::Empty(EmptySlotPlaceholder::for_slot(resource, &day.start)),
    };

    Some(selection)
}

/// Resolve the cell and hand the result to `handler`.
pub fn click_cell<R, E, H>(
    resource: &R,
    day_index: usize,
    window: &WeekWindow,
    buckets: &WeekBuckets<'_, E>,
    handler: &mut H,
) -> Option<CellSelection<E>>
where
    R: BaseResource,
    E: BaseEvent,
    H: EventClickHandler<E> + ?Sized,
{
    let Some(selection) = resolve_cell(resource, day_index, window, buckets) else {
        log::warn!(
            "Ignoring click on resource {} for day index {} outside the week",
            resource.id(),
            day_index
        );
        return None;
    };

    let slot = window.day(day_index)?.start;
    handler.on_event_click(&selection, slot);
    Some(selection)
}
