// Event module
// Time-bounded occupancy of one resource

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::utils::date::{parse_instant, to_iso_string};

/// An event boundary as supplied by the caller: either an ISO-8601 string or
/// an instant that is already parsed.
///
/// JSON input always lands in `Text`; parsing is deferred to normalization so
/// a malformed value never fails deserialization of the whole schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    Text(String),
    Instant(DateTime<Utc>),
}

impl EventTime {
    /// Resolve to an absolute instant. Offset-less text is read in `tz`.
    ///
    /// Returns `None` for malformed text; such values never match a day.
    pub fn to_instant(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        match self {
            EventTime::Instant(instant) => Some(*instant),
            EventTime::Text(text) => {
                let parsed = parse_instant(text, tz);
                if parsed.is_none() {
                    log::debug!("Unparseable event time {:?}", text);
                }
                parsed
            }
        }
    }

    /// Canonical string form of an instant.
    pub fn iso<T: chrono::TimeZone>(instant: &DateTime<T>) -> Self {
        EventTime::Text(to_iso_string(instant))
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(instant: DateTime<Utc>) -> Self {
        EventTime::Instant(instant)
    }
}

impl From<&str> for EventTime {
    fn from(text: &str) -> Self {
        EventTime::Text(text.to_string())
    }
}

impl From<String> for EventTime {
    fn from(text: String) -> Self {
        EventTime::Text(text)
    }
}

/// Fields every event type must expose to be bucketed onto the grid.
pub trait BaseEvent: Clone {
    fn id(&self) -> &str;
    fn resource_id(&self) -> &str;
    fn start(&self) -> &EventTime;
    fn end(&self) -> &EventTime;
    fn title(&self) -> &str;

    fn organization_id(&self) -> Option<&str> {
        None
    }

    fn notes(&self) -> Option<&str> {
        None
    }

    /// Replace both boundaries; used when handing a selection back to the
    /// caller with re-serialized instants.
    fn set_span(&mut self, start: EventTime, end: EventTime);

    fn has_notes(&self) -> bool {
        self.notes().is_some_and(|notes| !notes.trim().is_empty())
    }
}

/// A scheduled occupancy of one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unavailable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Caller-specific fields carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use time_scheduler::models::event::Event;
    ///
    /// let event = Event::new("1", "r1", "2024-01-15T09:00:00Z", "2024-01-15T17:00:00Z", "Shift");
    /// assert_eq!(event.resource_id, "r1");
    /// ```
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        start: impl Into<EventTime>,
        end: impl Into<EventTime>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            organization_id: None,
            start: start.into(),
            end: end.into(),
            title: title.into(),
            break_minutes: None,
            is_unavailable: None,
            notes: None,
            extra: BTreeMap::new(),
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Length of the event, when both boundaries parse.
    pub fn duration(&self, tz: &Tz) -> Option<chrono::Duration> {
        let start = self.start.to_instant(tz)?;
        let end = self.end.to_instant(tz)?;
        Some(end - start)
    }
}

impl BaseEvent for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_id(&self) -> &str {
        &self.resource_id
    }

    fn start(&self) -> &EventTime {
        &self.start
    }

    fn end(&self) -> &EventTime {
        &self.end
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    fn set_span(&mut self, start: EventTime, end: EventTime) {
        self.start = start;
        self.end = end;
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    resource_id: Option<String>,
    organization_id: Option<String>,
    start: Option<EventTime>,
    end: Option<EventTime>,
    title: String,
    break_minutes: Option<u32>,
    is_unavailable: Option<bool>,
    notes: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn start(mut self, start: impl Into<EventTime>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<EventTime>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = Some(minutes);
        self
    }

    pub fn unavailable(mut self, is_unavailable: bool) -> Self {
        self.is_unavailable = Some(is_unavailable);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.filter(|id| !id.trim().is_empty()).ok_or("Event id is required")?;
        let resource_id = self
            .resource_id
            .filter(|id| !id.trim().is_empty())
            .ok_or("Event resource id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        Ok(Event {
            id,
            resource_id,
            organization_id: self.organization_id,
            start,
            end,
            title: self.title,
            break_minutes: self.break_minutes,
            is_unavailable: self.is_unavailable,
            notes: self.notes,
            extra: BTreeMap::new(),
        })
    }
}
