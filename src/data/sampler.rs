//! Sample Data Generator Module
//! Synthesizes the in-memory numeric, categorical and date series the
//! gallery pages plot.

use chrono::{Duration, NaiveDate};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::Rng;
use statrs::distribution::Normal;

/// Evenly spaced grid of `n` points covering `[start, stop]` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// `amplitude * sin(frequency * x + phase)` over the grid.
pub fn sine_wave(grid: &[f64], amplitude: f64, frequency: f64, phase: f64) -> Vec<f64> {
    grid.iter()
        .map(|&x| amplitude * (frequency * x + phase).sin())
        .collect()
}

/// `amplitude * cos(frequency * x)` over the grid.
pub fn cosine_wave(grid: &[f64], amplitude: f64, frequency: f64) -> Vec<f64> {
    grid.iter()
        .map(|&x| amplitude * (frequency * x).cos())
        .collect()
}

/// Uniform draws in `[lo, hi)`.
pub fn uniform_series(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Normal draws. A non-positive standard deviation degenerates to the mean.
pub fn normal_series(rng: &mut StdRng, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    match Normal::new(mean, std_dev) {
        Ok(dist) => (0..n).map(|_| dist.sample(rng)).collect(),
        Err(_) => vec![mean; n],
    }
}

/// Random integers in `[lo, hi)`.
pub fn integer_series(rng: &mut StdRng, n: usize, lo: u32, hi: u32) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Random choice with replacement. `options` must be non-empty.
pub fn pick_series<T: Clone>(rng: &mut StdRng, n: usize, options: &[T]) -> Vec<T> {
    assert!(!options.is_empty(), "pick_series requires at least one option");
    (0..n)
        .map(|_| options[rng.gen_range(0..options.len())].clone())
        .collect()
}

/// Random walk: `start` plus the cumulative sum of normal steps.
pub fn random_walk(rng: &mut StdRng, n: usize, start: f64, step_std: f64) -> Vec<f64> {
    let steps = normal_series(rng, n, 0.0, step_std);
    let mut level = start;
    steps
        .iter()
        .map(|s| {
            level += s;
            level
        })
        .collect()
}

/// `days` consecutive calendar days starting at `start`.
pub fn date_range(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days)
        .map(|i| start + Duration::days(i as i64))
        .collect()
}

/// ISO-formatted labels Plotly parses as a date axis.
pub fn date_labels(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}
