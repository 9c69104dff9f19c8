// Module exports for models

pub mod date_format;
pub mod event;
pub mod resource;
pub mod settings;
