//! Charts module - Figure styling and layout helpers

mod figure;
mod heatmap;
mod style;

pub use figure::{base_layout, hidden_axis, titled_axis, xy_layout};
pub use heatmap::annotated_heatmap;
pub use style::{category_color, generate_palette, ramp_color, CATEGORY10, VIRIDIS_STOPS};
