//! End-to-end pipeline tests on small synthetic series.

use chrono::NaiveDate;

use rt_series::app::pipeline::run_estimate;
use rt_series::data::{OutbreakSpec, generate_outbreak};
use rt_series::domain::{DailyCases, EstimatorConfig};

fn cases(counts: &[u32]) -> DailyCases {
    let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    let dates = (0..counts.len() as i64)
        .map(|i| start + chrono::Duration::days(i))
        .collect();
    DailyCases::new(dates, counts.to_vec()).unwrap()
}

#[test]
fn posterior_columns_are_normalized() {
    let run = run_estimate(&cases(&[4, 8, 16, 32, 64, 128, 256]), &EstimatorConfig::default())
        .unwrap();
    for day in 0..run.posterior.n_days() {
        let sum: f64 = run.posterior.column(day).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "day {day} sums to {sum}");
    }
}

#[test]
fn interval_bounds_are_ordered() {
    let run = run_estimate(&cases(&[10, 14, 12, 18, 25, 21, 30, 28]), &EstimatorConfig::default())
        .unwrap();
    for est in &run.estimates {
        assert!(est.low <= est.high, "{}: [{}, {}]", est.date, est.low, est.high);
    }
}

#[test]
fn constant_counts_settle_at_rt_one() {
    let run = run_estimate(&cases(&[10; 8]), &EstimatorConfig::default()).unwrap();
    assert_eq!(run.estimates.len(), 8);
    let day8 = run.estimates.last().unwrap();
    assert!(
        (day8.ml - 1.0).abs() <= 0.05,
        "expected ML near 1.0 for a flat epidemic, got {}",
        day8.ml
    );
}

#[test]
fn doubling_counts_are_supercritical_from_day_two() {
    let run =
        run_estimate(&cases(&[4, 8, 16, 32, 64, 128, 256]), &EstimatorConfig::default()).unwrap();
    assert_eq!(run.estimates.len(), 7);
    for est in &run.estimates[1..] {
        assert!(est.ml > 1.0, "{}: ML {} not supercritical", est.date, est.ml);
    }
}

#[test]
fn onset_zeros_are_trimmed_before_estimation() {
    let run =
        run_estimate(&cases(&[0, 0, 0, 5, 7, 9, 12, 15]), &EstimatorConfig::default()).unwrap();
    assert_eq!(run.prepared.len(), 5);
    assert_eq!(
        run.prepared.dates[0],
        NaiveDate::from_ymd_opt(2020, 3, 4).unwrap()
    );
    assert_eq!(run.prepared.original[0], 5);
    assert!(run.prepared.smoothed[0] > 0.0);
    assert_eq!(run.estimates.len(), 5);
    assert_eq!(run.estimates[0].date, run.prepared.dates[0]);
}

#[test]
fn identical_runs_produce_identical_output() {
    let config = EstimatorConfig::default();
    let sample = generate_outbreak(
        &OutbreakSpec::demo(42, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()),
        config.gamma,
    )
    .unwrap();

    let a = run_estimate(&sample.cases, &config).unwrap();
    let b = run_estimate(&sample.cases, &config).unwrap();

    assert_eq!(a.estimates.len(), b.estimates.len());
    for (x, y) in a.estimates.iter().zip(&b.estimates) {
        assert_eq!(x, y);
    }
    for day in 0..a.posterior.n_days() {
        assert_eq!(a.posterior.column(day), b.posterior.column(day));
    }
}

#[test]
fn estimator_tracks_a_known_trajectory() {
    // Simulate the renewal model the estimator assumes; after three weeks of
    // suppression (true Rt = 0.8) with case counts in the hundreds, the
    // estimate must sit near the truth.
    let config = EstimatorConfig::default();
    let sample = generate_outbreak(
        &OutbreakSpec::demo(7, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()),
        config.gamma,
    )
    .unwrap();

    let run = run_estimate(&sample.cases, &config).unwrap();
    let latest = run.estimates.last().unwrap();
    assert!(
        (latest.ml - 0.8).abs() < 0.25,
        "expected ML near 0.8 at the end of the suppression phase, got {}",
        latest.ml
    );
    assert!(latest.ml < 1.0);
}
