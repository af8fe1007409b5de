//! Annotated correlation heatmap builder, shared by the dashboard and
//! advanced pages.

use plotly::common::color::NamedColor;
use plotly::common::{ColorBar, ColorScale, ColorScalePalette, Font, Title};
use plotly::layout::Annotation;
use plotly::{HeatMap, Plot};

use crate::charts::figure::base_layout;

/// Correlation heatmap on a fixed [-1, 1] scale with one in-cell value
/// annotation per coefficient. Annotation text switches to white over
/// strongly colored cells. `slanted_ticks` rotates the x labels 45 degrees.
pub fn annotated_heatmap(
    title: &str,
    variables: &[&str],
    corr: &[Vec<f64>],
    width: usize,
    height: usize,
    slanted_ticks: bool,
) -> Plot {
    let labels: Vec<String> = variables.iter().map(|v| v.to_string()).collect();

    let mut annotations = Vec::new();
    for (i, row) in corr.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let text_color = if value.abs() > 0.5 {
                NamedColor::White
            } else {
                NamedColor::Black
            };
            annotations.push(
                Annotation::new()
                    .x(labels[j].clone())
                    .y(labels[i].clone())
                    .text(format!("{value:.2}"))
                    .show_arrow(false)
                    .font(Font::new().size(10).color(text_color)),
            );
        }
    }

    let mut plot = Plot::new();
    plot.add_trace(
        HeatMap::new(labels.clone(), labels, corr.to_vec())
            .color_scale(ColorScale::Palette(ColorScalePalette::RdBu))
            .zmin(-1.0)
            .zmax(1.0)
            .color_bar(ColorBar::new().title(Title::with_text("Correlation Coefficient")))
            .hover_template("%{x}, %{y}<br>Correlation: %{z:.2f}"),
    );

    let mut layout = base_layout(title, width, height).annotations(annotations);
    if slanted_ticks {
        layout = layout.x_axis(plotly::layout::Axis::new().tick_angle(45.0));
    }
    plot.set_layout(layout);
    plot
}
