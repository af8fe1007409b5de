//! Sample data generators: length consistency, ranges and determinism.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_gallery::data::sampler;

#[test]
fn linspace_covers_endpoints_evenly() {
    let grid = sampler::linspace(0.0, 10.0, 11);
    assert_eq!(grid.len(), 11);
    assert!((grid[0] - 0.0).abs() < 1e-12);
    assert!((grid[10] - 10.0).abs() < 1e-12);
    for w in grid.windows(2) {
        assert!((w[1] - w[0] - 1.0).abs() < 1e-12);
    }

    assert!(sampler::linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(sampler::linspace(3.0, 9.0, 1), vec![3.0]);
}

#[test]
fn wave_series_match_grid_length_and_amplitude() {
    let grid = sampler::linspace(0.0, 20.0, 200);
    let sin = sampler::sine_wave(&grid, 2.0, 1.5, 0.3);
    let cos = sampler::cosine_wave(&grid, 1.0, 1.0);

    assert_eq!(sin.len(), grid.len());
    assert_eq!(cos.len(), grid.len());
    assert!(sin.iter().all(|y| y.abs() <= 2.0 + 1e-12));
    assert!(cos.iter().all(|y| y.abs() <= 1.0 + 1e-12));
}

#[test]
fn random_series_have_requested_length_and_range() {
    let mut rng = StdRng::seed_from_u64(7);

    let uniform = sampler::uniform_series(&mut rng, 500, 10.0, 20.0);
    assert_eq!(uniform.len(), 500);
    assert!(uniform.iter().all(|&v| (10.0..20.0).contains(&v)));

    let ints = sampler::integer_series(&mut rng, 500, 5, 30);
    assert_eq!(ints.len(), 500);
    assert!(ints.iter().all(|&v| (5..30).contains(&v)));

    let normal = sampler::normal_series(&mut rng, 500, 0.0, 1.0);
    assert_eq!(normal.len(), 500);
    assert!(normal.iter().all(|v| v.is_finite()));

    let walk = sampler::random_walk(&mut rng, 100, 100.0, 0.5);
    assert_eq!(walk.len(), 100);
    assert!(walk.iter().all(|v| v.is_finite()));
}

#[test]
fn degenerate_normal_collapses_to_mean() {
    let mut rng = StdRng::seed_from_u64(7);
    let series = sampler::normal_series(&mut rng, 10, 3.5, 0.0);
    assert_eq!(series, vec![3.5; 10]);
}

#[test]
fn pick_series_draws_only_from_options() {
    let mut rng = StdRng::seed_from_u64(7);
    let options = ["red", "green", "blue"];
    let picks = sampler::pick_series(&mut rng, 200, &options);
    assert_eq!(picks.len(), 200);
    assert!(picks.iter().all(|p| options.contains(p)));
}

#[test]
fn same_seed_reproduces_series() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    assert_eq!(
        sampler::uniform_series(&mut a, 50, 0.0, 1.0),
        sampler::uniform_series(&mut b, 50, 0.0, 1.0)
    );
    assert_eq!(
        sampler::normal_series(&mut a, 50, 0.0, 1.0),
        sampler::normal_series(&mut b, 50, 0.0, 1.0)
    );
}

#[test]
fn date_range_is_consecutive() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let dates = sampler::date_range(start, 90);
    assert_eq!(dates.len(), 90);
    assert_eq!(dates[0], start);
    for w in dates.windows(2) {
        assert_eq!((w[1] - w[0]).num_days(), 1);
    }

    let labels = sampler::date_labels(&dates);
    assert_eq!(labels[0], "2023-01-01");
    assert_eq!(labels[31], "2023-02-01");
}
