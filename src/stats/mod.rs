//! Stats module - Simple aggregates behind the dashboard and heatmap figures

mod calculator;

pub use calculator::{HistogramBins, SeriesSummary, StatsCalculator};
