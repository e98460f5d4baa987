//! Charts module - Chart rendering

mod renderer;

pub use renderer::{output_path, render_bar_chart, render_pie_chart, show_chart, RenderError};
