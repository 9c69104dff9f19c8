//! Render slot strategy.
//!
//! Each slot of the grid (headers, resource labels, side bar, footer, event
//! chips) is filled by one method of [`SchedulerRenderer`]. Every method has
//! a built-in default, so a caller overrides only the slots it cares about.

use std::marker::PhantomData;

use crate::models::event::BaseEvent;
use crate::models::resource::BaseResource;
use crate::services::week::DayCell;

pub trait SchedulerRenderer<R: BaseResource, E: BaseEvent> {
    fn header(&self) -> String {
        "Time Scheduler".to_string()
    }

    fn resources_header(&self) -> String {
        "Resources".to_string()
    }

    fn resource_label(&self, resource: &R) -> String {
        resource.name().to_string()
    }

    fn side_bar_header(&self) -> String {
        "Side Bar Header".to_string()
    }

    /// Also receives the number of events bucketed for the resource.
    fn side_bar(&self, resource: &R, _weekly_count: usize) -> String {
        resource.name().to_string()
    }

    fn footer_header(&self) -> String {
        "Wages".to_string()
    }

    /// `day_count` is the number of events bucketed on the day across all
    /// resources.
    fn footer_cell(&self, _day: &DayCell, day_count: usize) -> String {
        day_count.to_string()
    }

    fn side_bar_footer(&self) -> String {
        "Total".to_string()
    }

    fn event_label(&self, event: &E) -> String {
        event.title().to_string()
    }
}

/// Renderer using every built-in slot.
pub struct DefaultRenderer<R, E> {
    _marker: PhantomData<fn(&R, &E)>,
}

impl<R, E> DefaultRenderer<R, E> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<R, E> Default for DefaultRenderer<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BaseResource, E: BaseEvent> SchedulerRenderer<R, E> for DefaultRenderer<R, E> {}
