//! Aggregate computations: histograms, moving averages, correlations.

use viz_gallery::stats::StatsCalculator;

#[test]
fn histogram_counts_every_value_once() {
    let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let hist = StatsCalculator::histogram(&values, 20);

    assert_eq!(hist.counts.len(), 20);
    assert_eq!(hist.edges.len(), 21);
    assert_eq!(hist.counts.iter().sum::<usize>(), 100);
    assert_eq!(hist.centers().len(), 20);

    // The maximum lands in the last bin, not past it.
    assert!(hist.counts[19] >= 1);
    assert!((hist.edges[0] - 0.0).abs() < 1e-12);
    assert!((hist.edges[20] - 99.0).abs() < 1e-12);
}

#[test]
fn histogram_handles_constant_and_empty_input() {
    let constant = StatsCalculator::histogram(&[5.0; 12], 4);
    assert_eq!(constant.counts.iter().sum::<usize>(), 12);
    assert_eq!(constant.counts[0], 12);

    let empty = StatsCalculator::histogram(&[], 4);
    assert_eq!(empty.counts, vec![0; 4]);
    assert_eq!(empty.edges.len(), 5);
}

#[test]
fn moving_average_warms_up_with_nans() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ma = StatsCalculator::moving_average(&values, 3);

    assert_eq!(ma.len(), 5);
    assert!(ma[0].is_nan());
    assert!(ma[1].is_nan());
    assert!((ma[2] - 2.0).abs() < 1e-12);
    assert!((ma[3] - 3.0).abs() < 1e-12);
    assert!((ma[4] - 4.0).abs() < 1e-12);
}

#[test]
fn cumulative_sum_accumulates() {
    let sums = StatsCalculator::cumulative_sum(&[1.0, 2.0, 3.0, -1.0]);
    assert_eq!(sums, vec![1.0, 3.0, 6.0, 5.0]);
}

#[test]
fn pearson_detects_perfect_relationships() {
    let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let double: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let negated: Vec<f64> = x.iter().map(|v| -v).collect();

    assert!((StatsCalculator::pearson(&x, &double) - 1.0).abs() < 1e-12);
    assert!((StatsCalculator::pearson(&x, &negated) + 1.0).abs() < 1e-12);
    assert!(StatsCalculator::pearson(&x, &x[..10]).is_nan());
    assert!(StatsCalculator::pearson(&x, &vec![3.0; 50]).is_nan());
}

#[test]
fn correlation_matrix_is_symmetric_with_unit_diagonal() {
    let series = vec![
        (0..30).map(|i| i as f64).collect::<Vec<f64>>(),
        (0..30).map(|i| (i * i) as f64).collect(),
        (0..30).map(|i| (30 - i) as f64).collect(),
    ];
    let corr = StatsCalculator::correlation_matrix(&series);

    assert_eq!(corr.len(), 3);
    for (i, row) in corr.iter().enumerate() {
        assert_eq!(row.len(), 3);
        assert!((corr[i][i] - 1.0).abs() < 1e-12);
        for (j, &value) in row.iter().enumerate() {
            assert!((value - corr[j][i]).abs() < 1e-12);
            assert!(value.abs() <= 1.0 + 1e-12);
        }
    }
    // First and third series move in exactly opposite directions.
    assert!((corr[0][2] + 1.0).abs() < 1e-12);
}

#[test]
fn summaries_ignore_nothing_and_report_range() {
    let summary = StatsCalculator::summarize(&[2.0, 8.0, 4.0, 6.0]);
    assert_eq!(summary.count, 4);
    assert!((summary.mean - 5.0).abs() < 1e-12);
    assert_eq!(summary.min, 2.0);
    assert_eq!(summary.max, 8.0);

    let (min, max) = StatsCalculator::minmax(&[f64::NAN, 1.0, 3.0]);
    assert_eq!((min, max), (1.0, 3.0));
    assert!(StatsCalculator::mean(&[]).is_nan());
    assert!(StatsCalculator::std_dev(&[1.0]).is_nan());
}
