//! Figure Configuration Module
//! Shared Plotly layout construction. Every gallery figure starts from the
//! same title / axis-label / pixel-size call shape.

use plotly::common::Title;
use plotly::layout::{Axis, Layout};

/// Layout with a title and fixed pixel size.
pub fn base_layout(title: &str, width: usize, height: usize) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .width(width)
        .height(height)
}

/// Axis carrying a title.
pub fn titled_axis(label: &str) -> Axis {
    Axis::new().title(Title::with_text(label))
}

/// Layout with title, both axis labels and pixel size.
pub fn xy_layout(title: &str, x_label: &str, y_label: &str, width: usize, height: usize) -> Layout {
    base_layout(title, width, height)
        .x_axis(titled_axis(x_label))
        .y_axis(titled_axis(y_label))
}

/// Axis with ticks, grid and zero line hidden, for figures that are pure
/// canvas (network graphs).
pub fn hidden_axis() -> Axis {
    Axis::new().visible(false)
}
