//! Advanced Plots Page
//! A business-metric correlation heatmap with in-cell annotations, and a
//! force-laid-out social network colored by betweenness centrality.

use plotly::common::color::{NamedColor, Rgb, Rgba};
use plotly::common::{HoverInfo, Line, Marker, Mode, Position};
use plotly::{Plot, Scatter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::charts::{annotated_heatmap, base_layout, hidden_axis, ramp_color, VIRIDIS_STOPS};
use crate::data::network::{karate_club, Network};
use crate::data::sampler;
use crate::page::{Item, Page};
use crate::stats::StatsCalculator;

const PAGE_SEED: u64 = 42;
const LAYOUT_ITERATIONS: usize = 50;

const BUSINESS_METRICS: [&str; 8] = [
    "Revenue",
    "Profit",
    "Employees",
    "R&D Spend",
    "Marketing",
    "Customer Sat",
    "Market Share",
    "Innovation Index",
];

/// Correlations planted on top of the random base matrix so the heatmap
/// shows recognisable structure: (row, column, coefficient).
const PLANTED_CORRELATIONS: [(usize, usize, f64); 3] = [
    (0, 1, 0.85), // Revenue / Profit
    (0, 6, 0.72), // Revenue / Market Share
    (3, 7, 0.68), // R&D Spend / Innovation Index
];

/// Eight-metric correlation heatmap with planted strong pairs.
fn business_correlation_heatmap(rng: &mut StdRng) -> Plot {
    let series: Vec<Vec<f64>> = (0..BUSINESS_METRICS.len())
        .map(|_| sampler::normal_series(rng, 40, 0.0, 1.0))
        .collect();
    let mut corr = StatsCalculator::correlation_matrix(&series);
    for &(i, j, value) in &PLANTED_CORRELATIONS {
        corr[i][j] = value;
        corr[j][i] = value;
    }

    annotated_heatmap(
        "Business Metrics Correlation Heatmap",
        &BUSINESS_METRICS,
        &corr,
        700,
        600,
        true,
    )
}

/// Karate club network: spring layout, degree-driven node size,
/// betweenness-driven node color, hover metrics per node.
fn network_graph(rng: &mut StdRng) -> Plot {
    let net = karate_club();
    let positions = net.spring_layout(LAYOUT_ITERATIONS, rng);
    let degree = net.degree_centrality();
    let betweenness = net.betweenness_centrality();
    let clustering = net.clustering_coefficients();

    let mut plot = Plot::new();
    plot.add_trace(edge_trace(&net, &positions));
    plot.add_trace(node_trace(&positions, &degree, &betweenness, &clustering));
    plot.set_layout(
        base_layout("Social Network Analysis - Karate Club", 800, 600)
            .x_axis(hidden_axis())
            .y_axis(hidden_axis())
            .show_legend(false),
    );
    plot
}

/// All edges as one line trace, segments separated by NaN gaps.
fn edge_trace(net: &Network, positions: &[(f64, f64)]) -> Box<Scatter<f64, f64>> {
    let mut xs = Vec::with_capacity(net.edge_count() * 3);
    let mut ys = Vec::with_capacity(net.edge_count() * 3);
    for &(u, v) in net.edges() {
        xs.extend([positions[u].0, positions[v].0, f64::NAN]);
        ys.extend([positions[u].1, positions[v].1, f64::NAN]);
    }

    Scatter::new(xs, ys)
        .mode(Mode::Lines)
        .line(Line::new().color(Rgba::new(128, 128, 128, 0.5)).width(1.0))
        .hover_info(HoverInfo::Skip)
}

fn node_trace(
    positions: &[(f64, f64)],
    degree: &[f64],
    betweenness: &[f64],
    clustering: &[f64],
) -> Box<Scatter<f64, f64>> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = positions.iter().copied().unzip();

    let sizes: Vec<usize> = degree.iter().map(|d| (d * 100.0) as usize + 10).collect();
    let (_, max_betweenness) = StatsCalculator::minmax(betweenness);
    let node_colors: Vec<Rgb> = betweenness
        .iter()
        .map(|&b| ramp_color(&VIRIDIS_STOPS, b, 0.0, max_betweenness))
        .collect();

    let labels: Vec<String> = (0..positions.len()).map(|i| i.to_string()).collect();
    let hover: Vec<String> = (0..positions.len())
        .map(|i| {
            format!(
                "Node {i}<br>Degree centrality: {:.3}<br>Betweenness: {:.3}<br>Clustering: {:.3}",
                degree[i], betweenness[i], clustering[i]
            )
        })
        .collect();

    Scatter::new(xs, ys)
        .mode(Mode::MarkersText)
        .text_array(labels)
        .text_position(Position::TopCenter)
        .marker(
            Marker::new()
                .size_array(sizes)
                .color_array(node_colors)
                .opacity(0.8)
                .line(Line::new().color(NamedColor::Black).width(1.0)),
        )
        .hover_text_array(hover)
        .hover_info(HoverInfo::Text)
}

/// The advanced plots page.
pub fn build_page() -> Page {
    let mut rng = StdRng::seed_from_u64(PAGE_SEED);

    let root = Item::column(vec![
        Item::heading(1, "Advanced Visualizations"),
        Item::heading(3, "Correlation Heatmap"),
        Item::text(
            "Correlations between business metrics with color-coded values and \
             annotations. Hover over cells to see exact coefficients; strong \
             pairs such as Revenue/Profit stand out against the random noise.",
        ),
        Item::figure(business_correlation_heatmap(&mut rng)),
        Item::heading(3, "Network Graph"),
        Item::text(
            "The karate club friendship network. Node size tracks degree \
             centrality, node color tracks betweenness centrality, and \
             hovering over a node shows its metrics. Pan and zoom to explore.",
        ),
        Item::figure(network_graph(&mut rng)),
    ]);

    Page::new("Advanced Plots", root)
}
