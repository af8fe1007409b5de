//! Basic Plots Page
//! Fundamental chart types: multi-line, scatter with hover, bar and area,
//! arranged in a two-by-two grid.

use std::f64::consts::PI;

use plotly::common::color::{NamedColor, Rgb, Rgba};
use plotly::common::{DashType, Fill, Line, Marker, Mode};
use plotly::{Bar, Plot, Scatter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::charts::{base_layout, category_color, titled_axis, xy_layout};
use crate::data::sampler;
use crate::page::{Item, Page};

const PAGE_SEED: u64 = 11;

/// Basic line plot with two series, one dashed.
fn line_plot() -> Plot {
    let x = sampler::linspace(0.0, 4.0 * PI, 100);
    let sin = sampler::sine_wave(&x, 1.0, 1.0, 0.0);
    let cos = sampler::cosine_wave(&x, 1.0, 1.0);

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x.clone(), sin)
            .mode(Mode::Lines)
            .name("sin(x)")
            .line(Line::new().color(NamedColor::Blue).width(2.0)),
    );
    plot.add_trace(
        Scatter::new(x, cos)
            .mode(Mode::Lines)
            .name("cos(x)")
            .line(
                Line::new()
                    .color(NamedColor::Red)
                    .width(2.0)
                    .dash(DashType::Dash),
            ),
    );
    plot.set_layout(xy_layout("Line Plot Example", "x", "y", 600, 400).show_legend(true));
    plot
}

/// Scatter plot with random point sizes, palette colors and hover tooltips.
fn scatter_plot(rng: &mut StdRng) -> Plot {
    let n = 100;
    let x = sampler::uniform_series(rng, n, 0.0, 100.0);
    let y = sampler::uniform_series(rng, n, 0.0, 100.0);
    let sizes: Vec<usize> = sampler::integer_series(rng, n, 10, 30)
        .into_iter()
        .map(|s| s as usize)
        .collect();
    let palette: Vec<Rgb> = (0..5).map(category_color).collect();
    let point_colors = sampler::pick_series(rng, n, &palette);

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x, y)
            .mode(Mode::Markers)
            .marker(
                Marker::new()
                    .size_array(sizes)
                    .color_array(point_colors)
                    .opacity(0.6),
            )
            .hover_template("(%{x:.1f}, %{y:.1f})<br>size: %{marker.size}"),
    );
    plot.set_layout(
        xy_layout("Scatter Plot with Hover", "X Value", "Y Value", 600, 400).show_legend(false),
    );
    plot
}

/// Bar chart over categories with rotated tick labels.
fn bar_chart() -> Plot {
    let categories = vec!["A", "B", "C", "D", "E"];
    let values = vec![20, 35, 30, 25, 40];

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(categories, values)
            .marker(Marker::new().color(NamedColor::Navy).opacity(0.7)),
    );
    plot.set_layout(
        base_layout("Bar Chart Example", 600, 400)
            .x_axis(titled_axis("Categories").tick_angle(45.0))
            .y_axis(titled_axis("Values")),
    );
    plot
}

/// Area plot: the band between sin(x) and sin(x) + 1, with both boundary
/// lines drawn on top of the fill.
fn area_plot() -> Plot {
    let x = sampler::linspace(0.0, 2.0 * PI, 50);
    let lower = sampler::sine_wave(&x, 1.0, 1.0, 0.0);
    let upper: Vec<f64> = lower.iter().map(|y| y + 1.0).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x.clone(), lower)
            .mode(Mode::Lines)
            .name("sin(x)")
            .line(Line::new().color(NamedColor::Blue).width(2.0)),
    );
    plot.add_trace(
        Scatter::new(x, upper)
            .mode(Mode::Lines)
            .name("sin(x) + 1")
            .line(Line::new().color(NamedColor::Red).width(2.0))
            .fill(Fill::ToNextY)
            .fill_color(Rgba::new(173, 216, 230, 0.5)),
    );
    plot.set_layout(xy_layout("Area Plot Example", "x", "y", 600, 400).show_legend(false));
    plot
}

/// The basic plots page: line, scatter, bar and area in a 2x2 grid.
pub fn build_page() -> Page {
    let mut rng = StdRng::seed_from_u64(PAGE_SEED);

    let grid = Item::column(vec![
        Item::row(vec![
            Item::figure(line_plot()),
            Item::figure(scatter_plot(&mut rng)),
        ]),
        Item::row(vec![Item::figure(bar_chart()), Item::figure(area_plot())]),
    ]);

    Page::new("Basic Plots", grid)
}
