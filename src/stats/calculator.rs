//! Statistics Calculator Module
//! Descriptive summaries, histogram binning, moving averages and
//! correlation matrices for the sample datasets.

use crate::data::sampler;

/// Summary row for the dashboard statistic tables.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Bin counts plus `bins + 1` uniform edges over the value range.
#[derive(Debug, Clone)]
pub struct HistogramBins {
    pub counts: Vec<usize>,
    pub edges: Vec<f64>,
}

impl HistogramBins {
    /// Midpoints of the bins, for plotting counts as bars.
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .collect()
    }
}

/// Handles the elementary statistical computations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Arithmetic mean; NaN for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Sample standard deviation (n - 1); NaN below two values.
    pub fn std_dev(values: &[f64]) -> f64 {
        let n = values.len();
        if n < 2 {
            return f64::NAN;
        }
        let mean = Self::mean(values);
        let variance =
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    }

    /// Smallest and largest value; `(NaN, NaN)` for an empty slice.
    pub fn minmax(values: &[f64]) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_infinite() {
            (f64::NAN, f64::NAN)
        } else {
            (min, max)
        }
    }

    /// Count, mean and range in one pass-friendly bundle.
    pub fn summarize(values: &[f64]) -> SeriesSummary {
        let (min, max) = Self::minmax(values);
        SeriesSummary {
            count: values.len(),
            mean: Self::mean(values),
            min,
            max,
        }
    }

    /// Running totals.
    pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
        let mut total = 0.0;
        values
            .iter()
            .map(|v| {
                total += v;
                total
            })
            .collect()
    }

    /// Trailing moving average. The first `window - 1` slots are NaN, which
    /// serializes to `null` and renders as a gap, matching a rolling mean
    /// with a warm-up prefix.
    pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
        let window = window.max(1);
        let mut running = 0.0;
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                running += v;
                if i + 1 < window {
                    return f64::NAN;
                }
                if i + 1 > window {
                    running -= values[i - window];
                }
                running / window as f64
            })
            .collect()
    }

    /// Uniform-width histogram over the observed range. Values equal to the
    /// upper edge land in the last bin. An empty input yields zero counts
    /// over `[0, 1]`.
    pub fn histogram(values: &[f64], bins: usize) -> HistogramBins {
        let bins = bins.max(1);
        let (min, max) = Self::minmax(values);
        if values.is_empty() || min.is_nan() {
            return HistogramBins {
                counts: vec![0; bins],
                edges: sampler::linspace(0.0, 1.0, bins + 1),
            };
        }

        let edges = sampler::linspace(min, max, bins + 1);
        let span = max - min;
        let mut counts = vec![0usize; bins];
        for &v in values {
            if v.is_nan() {
                continue;
            }
            let idx = if span > 0.0 {
                (((v - min) / span * bins as f64) as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }
        HistogramBins { counts, edges }
    }

    /// Pearson correlation coefficient; NaN for mismatched lengths, fewer
    /// than two observations, or a constant series.
    pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() || a.len() < 2 {
            return f64::NAN;
        }
        let mean_a = Self::mean(a);
        let mean_b = Self::mean(b);

        let mut cov = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for (&x, &y) in a.iter().zip(b.iter()) {
            let dx = x - mean_a;
            let dy = y - mean_b;
            cov += dx * dy;
            var_a += dx * dx;
            var_b += dy * dy;
        }
        if var_a == 0.0 || var_b == 0.0 {
            return f64::NAN;
        }
        cov / (var_a.sqrt() * var_b.sqrt())
    }

    /// Symmetric correlation matrix with a unit diagonal.
    pub fn correlation_matrix(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let m = series.len();
        let mut matrix = vec![vec![0.0; m]; m];
        for i in 0..m {
            matrix[i][i] = 1.0;
            for j in (i + 1)..m {
                let r = Self::pearson(&series[i], &series[j]);
                matrix[i][j] = r;
                matrix[j][i] = r;
            }
        }
        matrix
    }
}
