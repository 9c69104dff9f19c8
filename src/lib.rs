// Time Scheduler Library
// Weekly resource/event grid: week windows, bucketing and cell interaction

pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

pub use error::SchedulerError;
pub use models::event::{BaseEvent, Event, EventTime};
pub use models::resource::{BaseResource, Resource};
pub use models::settings::SchedulerSettings;
pub use services::interaction::{CellSelection, EmptySlotPlaceholder, EventClickHandler};
pub use services::render::{DefaultRenderer, SchedulerRenderer};
pub use services::scheduler::{SchedulerView, TimeScheduler};
pub use services::week::{DayCell, WeekWindow};
