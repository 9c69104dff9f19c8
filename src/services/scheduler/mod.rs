//! Scheduler view model.
//!
//! [`TimeScheduler`] ties the week window, bucketing, render slots and
//! click resolution together for one render pass. It holds only the
//! settings; resources, events and dates are supplied fresh on every call.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::models::event::BaseEvent;
use crate::models::resource::BaseResource;
use crate::models::settings::SchedulerSettings;
use crate::services::bucketing::{bucket_events, WeekBuckets};
use crate::services::interaction::{click_cell, CellSelection, EventClickHandler};
use crate::services::render::SchedulerRenderer;
use crate::services::week::{build_week_window, WeekOptions, WeekWindow, DAYS_PER_WEEK};

/// Pixel sizes passed through to whatever draws the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub row_height: u32,
    pub col_width: u32,
    pub header_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventChip {
    pub event_id: String,
    pub label: String,
    /// The owning resource's colour.
    pub color: String,
    pub show_notes_badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CellView {
    pub events: Vec<EventChip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRow {
    pub resource_id: String,
    pub label: String,
    pub color: String,
    pub cells: Vec<CellView>,
    pub side_bar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterRow {
    pub header: String,
    pub cells: Vec<String>,
    pub side_bar_footer: Option<String>,
}

/// Everything needed to draw one week of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulerView {
    /// Resources or events have not been supplied yet.
    pub loading: bool,
    pub header: String,
    pub resources_header: String,
    pub side_bar_header: Option<String>,
    pub days: WeekWindow,
    pub rows: Vec<ResourceRow>,
    pub footer: Option<FooterRow>,
    pub layout: Layout,
}

pub struct TimeScheduler {
    settings: SchedulerSettings,
    tz: Tz,
}

impl TimeScheduler {
    pub fn new(settings: SchedulerSettings) -> Self {
        let tz = settings.time_zone();
        Self { settings, tz }
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    fn week_options(&self) -> WeekOptions {
        WeekOptions {
            tz: self.tz,
            week_starts_on: self.settings.week_starts_on,
            date_format: self.settings.date_format,
        }
    }

    pub fn week_window(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> WeekWindow {
        build_week_window(reference, now, &self.week_options())
    }

    pub fn bucket<'e, R, E>(
        &self,
        resources: &[R],
        events: &'e [E],
        window: &WeekWindow,
    ) -> WeekBuckets<'e, E>
    where
        R: BaseResource,
        E: BaseEvent,
    {
        bucket_events(resources, events, window, &self.tz)
    }

    /// Build the view for the week containing `reference`.
    ///
    /// A missing resource or event list puts the view in the loading state:
    /// rows are still laid out for any known resources, but no events are
    /// placed.
    pub fn render<R, E, V>(
        &self,
        resources: Option<&[R]>,
        events: Option<&[E]>,
        reference: DateTime<Utc>,
        now: DateTime<Utc>,
        renderer: &V,
    ) -> SchedulerView
    where
        R: BaseResource,
        E: BaseEvent,
        V: SchedulerRenderer<R, E> + ?Sized,
    {
        let loading = resources.is_none() || events.is_none();
        let resources = resources.unwrap_or(&[]);
        let events: &[E] = if loading { &[] } else { events.unwrap_or(&[]) };

        let days = self.week_window(reference, now);
        let buckets = self.bucket(resources, events, &days);

        let rows = resources
            .iter()
            .map(|resource| self.resource_row(resource, &buckets, renderer))
            .collect();

        let footer = self.settings.show_footer.then(|| FooterRow {
            header: renderer.footer_header(),
            cells: days
                .iter()
                .enumerate()
                .map(|(index, day)| renderer.footer_cell(day, buckets.day_count(index)))
                .collect(),
            side_bar_footer: self.settings.show_side_bar.then(|| renderer.side_bar_footer()),
        });

        SchedulerView {
            loading,
            header: renderer.header(),
            resources_header: renderer.resources_header(),
            side_bar_header: self.settings.show_side_bar.then(|| renderer.side_bar_header()),
            days,
            rows,
            footer,
            layout: Layout {
                row_height: self.settings.row_height,
                col_width: self.settings.col_width,
                header_height: self.settings.header_height,
            },
        }
    }

    fn resource_row<R, E, V>(
        &self,
        resource: &R,
        buckets: &WeekBuckets<'_, E>,
        renderer: &V,
    ) -> ResourceRow
    where
        R: BaseResource,
        E: BaseEvent,
        V: SchedulerRenderer<R, E> + ?Sized,
    {
        let cells = (0..DAYS_PER_WEEK)
            .map(|day_index| CellView {
                events: buckets
                    .cell(resource.id(), day_index)
                    .iter()
                    .map(|normalized| EventChip {
                        event_id: normalized.event.id().to_string(),
                        label: renderer.event_label(normalized.event),
                        color: resource.color().to_string(),
                        show_notes_badge: self.settings.show_notes_badge
                            && normalized.event.has_notes(),
                    })
                    .collect(),
            })
            .collect();

        ResourceRow {
            resource_id: resource.id().to_string(),
            label: renderer.resource_label(resource),
            color: resource.color().to_string(),
            cells,
            side_bar: self
                .settings
                .show_side_bar
                .then(|| renderer.side_bar(resource, buckets.resource_count(resource.id()))),
        }
    }

    /// Resolve a click on (`resource`, `day_index`) of the week containing
    /// `reference` and notify `handler`.
    pub fn click<R, E, H>(
        &self,
        resource: &R,
        day_index: usize,
        resources: &[R],
        events: &[E],
        reference: DateTime<Utc>,
        handler: &mut H,
    ) -> Option<CellSelection<E>>
    where
        R: BaseResource,
        E: BaseEvent,
        H: EventClickHandler<E> + ?Sized,
    {
        let window = self.week_window(reference, reference);
        let buckets = self.bucket(resources, events, &window);
        click_cell(resource, day_index, &window, &buckets, handler)
    }
}

impl Default for TimeScheduler {
    fn default() -> Self {
        Self::new(SchedulerSettings::default())
    }
}
