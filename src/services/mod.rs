// Service module exports

pub mod bucketing;
pub mod interaction;
pub mod render;
pub mod schedule_file;
pub mod scheduler;
pub mod settings;
pub mod week;
