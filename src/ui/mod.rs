// Text presentation of the scheduler view

pub mod text_grid;

pub use text_grid::render_text;
