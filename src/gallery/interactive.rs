//! Interactive Plots Page
//! Client-side behavior baked into the generated HTML: preset restyling via
//! a dropdown, box/lasso selection, hover detail and a linked data table.
//! Everything runs in the browser after this process has exited.

use std::f64::consts::{FRAC_PI_2, PI};

use plotly::common::color::{NamedColor, Rgb};
use plotly::common::{Line, Marker, Mode};
use plotly::layout::update_menu::{Button, ButtonMethod, UpdateMenu};
use plotly::layout::DragMode;
use plotly::traces::table::{Cells, Header};
use plotly::{Histogram, Plot, Scatter, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use crate::charts::{base_layout, category_color, generate_palette, xy_layout};
use crate::data::sampler;
use crate::page::{Item, Page};

const PAGE_SEED: u64 = 23;

/// Sine wave whose frequency, amplitude and phase switch client-side
/// through a restyle dropdown of precomputed presets.
fn interactive_sine_wave() -> Plot {
    let x = sampler::linspace(0.0, 4.0 * PI, 100);
    let presets: Vec<(&str, Vec<f64>)> = vec![
        ("sin(x)", sampler::sine_wave(&x, 1.0, 1.0, 0.0)),
        ("sin(2x)", sampler::sine_wave(&x, 1.0, 2.0, 0.0)),
        ("sin(3x)", sampler::sine_wave(&x, 1.0, 3.0, 0.0)),
        ("2 sin(x)", sampler::sine_wave(&x, 2.0, 1.0, 0.0)),
        ("0.5 sin(2x)", sampler::sine_wave(&x, 0.5, 2.0, 0.0)),
        ("sin(x + pi/2)", sampler::sine_wave(&x, 1.0, 1.0, FRAC_PI_2)),
    ];

    let buttons: Vec<Button> = presets
        .iter()
        .map(|(label, y)| {
            Button::new()
                .label(*label)
                .method(ButtonMethod::Restyle)
                .args(json!([{ "y": [y] }, [0]]))
        })
        .collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x, presets[0].1.clone())
            .mode(Mode::Lines)
            .name("wave")
            .line(Line::new().color(NamedColor::Blue).width(2.0)),
    );
    plot.set_layout(
        xy_layout("Interactive Sine Wave", "x", "y", 700, 400)
            .show_legend(false)
            .update_menus(vec![UpdateMenu::new().buttons(buttons).x(0.0).y(1.15)]),
    );
    plot
}

/// Scatter with box/lasso selection as the default drag tools.
fn selection_plot(rng: &mut StdRng) -> Plot {
    let n = 200;
    let x = sampler::uniform_series(rng, n, 0.0, 100.0);
    let y = sampler::uniform_series(rng, n, 0.0, 100.0);
    let palette = generate_palette(4);
    let point_colors = sampler::pick_series(rng, n, &palette);

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x, y)
            .mode(Mode::Markers)
            .marker(
                Marker::new()
                    .size(15)
                    .color_array(point_colors)
                    .opacity(0.6),
            )
            .hover_template("(%{x:.1f}, %{y:.1f})"),
    );
    plot.set_layout(
        base_layout("Selection and Highlighting", 600, 400)
            .drag_mode(DragMode::Select)
            .show_legend(false),
    );
    plot
}

/// GDP vs population scatter with per-country hover, paired with a data
/// table carrying the same source columns plus derived GDP per capita.
fn data_table_plot() -> Item {
    let countries: Vec<String> = [
        "USA", "China", "Japan", "Germany", "India", "UK", "France", "Brazil",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    let gdp = vec![21.43, 14.34, 4.94, 3.85, 2.87, 2.83, 2.72, 1.87]; // trillions
    let population = vec![331.0, 1439.0, 126.0, 83.0, 1380.0, 67.0, 65.0, 213.0]; // millions
    let gdp_per_capita: Vec<f64> = gdp
        .iter()
        .zip(population.iter())
        .map(|(g, p)| g * 1_000_000.0 / p)
        .collect();

    let mut scatter = Plot::new();
    scatter.add_trace(
        Scatter::new(population.clone(), gdp.clone())
            .mode(Mode::Markers)
            .marker(Marker::new().size(20).color(NamedColor::Navy).opacity(0.6))
            .text_array(countries.clone())
            .hover_template(
                "%{text}<br>GDP: $%{y:.2f} trillion<br>Population: %{x:.0f} million",
            ),
    );
    scatter.set_layout(
        xy_layout(
            "GDP vs Population",
            "Population (millions)",
            "GDP (trillions USD)",
            600,
            400,
        )
        .show_legend(false),
    );

    let header = Header::new(vec![
        "Country".to_string(),
        "GDP (Trillions)".to_string(),
        "Population (Millions)".to_string(),
        "GDP per Capita".to_string(),
    ]);
    let cells = Cells::new(vec![
        countries.clone(),
        gdp.iter().map(|g| format!("{g:.2}")).collect(),
        population.iter().map(|p| format!("{p:.0}")).collect(),
        gdp_per_capita.iter().map(|g| format!("{g:.0}")).collect(),
    ]);

    let mut table = Plot::new();
    table.add_trace(Table::new(header, cells));
    table.set_layout(base_layout("", 600, 250));

    Item::column(vec![Item::figure(scatter), Item::figure(table)])
}

/// Selectable scatter next to a histogram of its x values.
fn scatter_histogram_pair(rng: &mut StdRng) -> Item {
    let n = 300;
    let x = sampler::normal_series(rng, n, 0.0, 1.0);
    let y = sampler::normal_series(rng, n, 0.0, 1.0);
    let palette: Vec<Rgb> = (0..3).map(category_color).collect();
    let point_colors = sampler::pick_series(rng, n, &palette);

    let mut scatter = Plot::new();
    scatter.add_trace(
        Scatter::new(x.clone(), y)
            .mode(Mode::Markers)
            .marker(
                Marker::new()
                    .size(8)
                    .color_array(point_colors)
                    .opacity(0.6),
            ),
    );
    scatter.set_layout(
        base_layout("Plot 1: X vs Y", 400, 300)
            .drag_mode(DragMode::Select)
            .show_legend(false),
    );

    let mut histogram = Plot::new();
    histogram.add_trace(
        Histogram::new(x)
            .n_bins_x(20)
            .marker(Marker::new().color(NamedColor::Navy).opacity(0.7)),
    );
    histogram.set_layout(base_layout("Plot 2: Histogram of X", 400, 300).show_legend(false));

    Item::row(vec![Item::figure(scatter), Item::figure(histogram)])
}

/// The interactive plots page.
pub fn build_page() -> Page {
    let mut rng = StdRng::seed_from_u64(PAGE_SEED);

    let root = Item::column(vec![
        Item::heading(1, "Interactive Visualizations"),
        Item::figure(interactive_sine_wave()),
        Item::row(vec![
            Item::figure(selection_plot(&mut rng)),
            data_table_plot(),
        ]),
        scatter_histogram_pair(&mut rng),
    ]);

    Page::new("Interactive Plots", root)
}
