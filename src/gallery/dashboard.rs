//! Dashboard Layouts Page
//! Three dashboards: a financial panel (price, moving average, volume,
//! distribution, summary table), a sales panel (trend, bars, pie, heatmap)
//! and a tabbed panel (overview, time series, correlations).

use chrono::NaiveDate;
use plotly::common::color::{NamedColor, Rgb};
use plotly::common::{ColorScale, ColorScalePalette, DashType, Line, Marker, Mode};
use plotly::layout::RangeMode;
use plotly::traces::table::{Cells, Header};
use plotly::{Bar, HeatMap, Histogram, Pie, Plot, Scatter, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::charts::{annotated_heatmap, base_layout, category_color, titled_axis};
use crate::data::sampler;
use crate::page::{Item, Page, Tab};
use crate::stats::StatsCalculator;

const PAGE_SEED: u64 = 37;
const MOVING_AVERAGE_WINDOW: usize = 10;

/// Financial dashboard: dated price walk with moving average, volume bars,
/// price distribution and a summary table.
fn financial_dashboard(rng: &mut StdRng) -> Item {
    let days = 100;
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid start date");
    let dates = sampler::date_labels(&sampler::date_range(start, days));
    let prices = sampler::random_walk(rng, days, 100.0, 0.5);
    let volumes: Vec<u32> = sampler::integer_series(rng, days, 1000, 10000);
    let moving_avg = StatsCalculator::moving_average(&prices, MOVING_AVERAGE_WINDOW);

    let mut price_chart = Plot::new();
    price_chart.add_trace(
        Scatter::new(dates.clone(), prices.clone())
            .mode(Mode::LinesMarkers)
            .name("Price")
            .line(Line::new().color(NamedColor::Blue).width(2.0))
            .marker(Marker::new().size(3).opacity(0.5)),
    );
    price_chart.add_trace(
        Scatter::new(dates.clone(), moving_avg)
            .mode(Mode::Lines)
            .name(&format!("{MOVING_AVERAGE_WINDOW}-day MA"))
            .line(
                Line::new()
                    .color(NamedColor::Red)
                    .width(2.0)
                    .dash(DashType::Dash),
            ),
    );
    price_chart.set_layout(base_layout("Stock Price", 800, 300).show_legend(true));

    let mut volume_chart = Plot::new();
    volume_chart.add_trace(
        Bar::new(dates, volumes.clone()).marker(Marker::new().color(NamedColor::Green).opacity(0.7)),
    );
    volume_chart.set_layout(base_layout("Trading Volume", 800, 200).show_legend(false));

    let histogram = StatsCalculator::histogram(&prices, 20);
    let mut distribution = Plot::new();
    distribution.add_trace(
        Bar::new(
            histogram.centers(),
            histogram.counts.clone(),
        )
        .marker(Marker::new().color(NamedColor::Navy).opacity(0.7)),
    );
    distribution.set_layout(
        base_layout("Price Distribution", 300, 300)
            .bar_gap(0.05)
            .show_legend(false),
    );

    let price_summary = StatsCalculator::summarize(&prices);
    let avg_volume = StatsCalculator::mean(
        &volumes.iter().map(|&v| v as f64).collect::<Vec<f64>>(),
    );
    let current_price = prices.last().copied().unwrap_or(f64::NAN);

    let header = Header::new(vec!["Metric".to_string(), "Value".to_string()]);
    let cells = Cells::new(vec![
        vec![
            "Current Price".to_string(),
            "Max Price".to_string(),
            "Min Price".to_string(),
            "Avg Volume".to_string(),
        ],
        vec![
            format!("${current_price:.2}"),
            format!("${:.2}", price_summary.max),
            format!("${:.2}", price_summary.min),
            format!("{avg_volume:.0}"),
        ],
    ]);
    let mut summary = Plot::new();
    summary.add_trace(Table::new(header, cells));
    summary.set_layout(base_layout("", 300, 200));

    Item::row(vec![
        Item::column(vec![
            Item::figure(price_chart),
            Item::figure(volume_chart),
        ]),
        Item::column(vec![Item::figure(distribution), Item::figure(summary)]),
    ])
}

/// Sales dashboard: monthly trend, per-product bars, product share pie and
/// a month-by-product heatmap.
fn sales_dashboard(rng: &mut StdRng) -> Item {
    let months = vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    let products = vec!["Product A", "Product B", "Product C", "Product D"];
    let sales_by_month = vec![120, 150, 180, 160, 200, 220];
    let product_sales = vec![450, 320, 280, 150];

    let mut trend = Plot::new();
    trend.add_trace(
        Scatter::new(months.clone(), sales_by_month)
            .mode(Mode::LinesMarkers)
            .line(Line::new().color(NamedColor::Blue).width(3.0))
            .marker(Marker::new().size(8)),
    );
    trend.set_layout(
        base_layout("Monthly Sales Trend", 400, 300)
            .y_axis(titled_axis("Sales").range_mode(RangeMode::ToZero))
            .show_legend(false),
    );

    let bar_colors: Vec<Rgb> = (0..products.len()).map(category_color).collect();
    let mut by_product = Plot::new();
    by_product.add_trace(
        Bar::new(products.clone(), product_sales.clone())
            .marker(Marker::new().color_array(bar_colors).opacity(0.8)),
    );
    by_product.set_layout(
        base_layout("Sales by Product", 400, 300)
            .x_axis(titled_axis("").tick_angle(45.0))
            .show_legend(false),
    );

    let product_labels: Vec<String> = products.iter().map(|p| p.to_string()).collect();
    let mut share = Plot::new();
    share.add_trace(Pie::new(product_sales).labels(product_labels));
    share.set_layout(base_layout("Product Sales Distribution", 400, 300));

    // Random month-by-product sales, one heatmap row per product.
    let z: Vec<Vec<f64>> = (0..products.len())
        .map(|_| {
            sampler::integer_series(rng, months.len(), 20, 100)
                .into_iter()
                .map(f64::from)
                .collect()
        })
        .collect();
    let mut heatmap = Plot::new();
    heatmap.add_trace(
        HeatMap::new(
            months.iter().map(|m| m.to_string()).collect(),
            products.iter().map(|p| p.to_string()).collect(),
            z,
        )
        .color_scale(ColorScale::Palette(ColorScalePalette::Portland))
        .hover_template("%{x} / %{y}<br>Sales: %{z}"),
    );
    heatmap.set_layout(base_layout("Sales Heatmap", 400, 300));

    Item::column(vec![
        Item::row(vec![Item::figure(trend), Item::figure(by_product)]),
        Item::row(vec![Item::figure(share), Item::figure(heatmap)]),
    ])
}

/// Tabbed dashboard: distribution overview, a year-long cumulative series
/// and a small correlation matrix.
fn tabbed_dashboard(rng: &mut StdRng) -> Item {
    let mut overview = Plot::new();
    overview.add_trace(
        Histogram::new(sampler::normal_series(rng, 1000, 0.0, 1.0))
            .n_bins_x(50)
            .marker(Marker::new().color(NamedColor::SkyBlue).opacity(0.7)),
    );
    overview.set_layout(base_layout("Data Overview", 600, 400).show_legend(false));

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid start date");
    let dates = sampler::date_labels(&sampler::date_range(start, 365));
    let values = StatsCalculator::cumulative_sum(&sampler::normal_series(rng, 365, 0.0, 1.0));
    let mut timeseries = Plot::new();
    timeseries.add_trace(
        Scatter::new(dates, values)
            .mode(Mode::Lines)
            .line(Line::new().color(NamedColor::Green).width(2.0)),
    );
    timeseries.set_layout(base_layout("Time Series Data", 600, 400).show_legend(false));

    let variables = vec!["Var1", "Var2", "Var3", "Var4"];
    let series: Vec<Vec<f64>> = (0..variables.len())
        .map(|_| sampler::normal_series(rng, 100, 0.0, 1.0))
        .collect();
    let corr = StatsCalculator::correlation_matrix(&series);
    let correlations = annotated_heatmap("Correlation Matrix", &variables, &corr, 400, 400, false);

    Item::tabs(vec![
        Tab::new("Overview", Item::figure(overview)),
        Tab::new("Time Series", Item::figure(timeseries)),
        Tab::new("Correlations", Item::figure(correlations)),
    ])
}

/// The dashboard layouts page.
pub fn build_page() -> Page {
    let mut rng = StdRng::seed_from_u64(PAGE_SEED);

    let root = Item::column(vec![
        Item::heading(1, "Dashboard Examples"),
        Item::heading(2, "Financial Dashboard"),
        financial_dashboard(&mut rng),
        Item::heading(2, "Sales Dashboard"),
        sales_dashboard(&mut rng),
        Item::heading(2, "Tabbed Dashboard"),
        tabbed_dashboard(&mut rng),
    ]);

    Page::new("Dashboard Layouts", root)
}
