//! End-to-end tests: lag analysis of a seasonal series and forecast scoring.

use chrono::{Duration, TimeZone, Utc};
use kl_evolution::prelude::*;

const PERIOD: usize = 24;

/// Hourly temperature-like series with a daily cycle.
fn hourly_temperature(days: usize) -> Serie {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let n = days * PERIOD;
    let timestamps: Vec<_> = (0..n).map(|i| base + Duration::hours(i as i64)).collect();
    let values: Vec<f64> = (0..n)
        .map(|i| {
            15.0 + 5.0 * (2.0 * std::f64::consts::PI * i as f64 / PERIOD as f64).sin()
                + 0.3 * (i as f64 * 0.7).cos()
        })
        .collect();
    Serie::from_column("Temperature", values, timestamps).unwrap()
}

#[test]
fn lag_profile_over_a_week_of_hours() {
    let serie = hourly_temperature(14);
    let analyzer = ShiftedSerieAnalyzer::with_config(AnalyzerConfig::new(7 * PERIOD).with_seed(42));
    let profile = analyzer.compute(&serie).unwrap();

    assert_eq!(profile.len(), 7 * PERIOD);
    assert_eq!(profile.identifier(), Some("KL divergences over shifts"));
    assert!(profile.values().iter().all(|v| v.is_finite()));
    assert!(profile.mean().is_finite());
}

#[test]
fn divergence_dips_at_the_seasonal_lag() {
    let serie = hourly_temperature(10);
    let profile = ShiftedSerieAnalyzer::new(PERIOD, false).compute(&serie).unwrap();
    let values = profile.values();

    // Half a cycle apart the series is most dissimilar; a full cycle apart it
    // nearly repeats.
    assert!(values[PERIOD - 1] < values[PERIOD / 2 - 1]);
}

#[test]
fn deseasonalized_serie_is_left_untouched() {
    let raw = hourly_temperature(5);
    let mean = raw.mean();
    let centered: Vec<f64> = raw.values().iter().map(|v| v - mean).collect();
    let serie = Serie::builder()
        .values(centered.clone())
        .identifier("Temperature")
        .deseasonalize(true)
        .seasonal_period(PERIOD)
        .build()
        .unwrap();

    let profile = ShiftedSerieAnalyzer::with_config(AnalyzerConfig::new(PERIOD).with_seed(1))
        .compute(&serie)
        .unwrap();

    assert_eq!(serie.values(), centered.as_slice());
    assert!(profile.values().iter().all(|v| v.is_finite()));
}

#[test]
fn seasonal_forecast_beats_naive_baseline() {
    let full = hourly_temperature(8);
    let split = full.len() - 2 * PERIOD;
    let train = Serie::new(full.values()[..split].to_vec()).with_identifier("train");
    let test = Serie::new(full.values()[split..].to_vec()).with_identifier("test");

    // Repeat the last training day: close to the truth for a daily cycle.
    let last_day = &train.values()[split - PERIOD..];
    let seasonal_forecast =
        Serie::new((0..test.len()).map(|i| last_day[i % PERIOD])).with_identifier("last_day");
    let flat_forecast = Serie::new(vec![full.mean(); test.len()]).with_identifier("flat");

    let config = EvaluationConfig::new()
        .with_seasonal_period(PERIOD)
        .with_normalization(true)
        .with_seed(2024);
    let report = evaluate_forecast(
        &train,
        &test,
        &[seasonal_forecast, flat_forecast],
        &config,
    )
    .unwrap();

    let labels: Vec<&str> = report.labels().collect();
    assert_eq!(
        labels,
        vec![
            "uniform",
            "white_noise",
            "random_walk",
            "naive",
            "seasonal_naive",
            "last_day",
            "flat"
        ]
    );
    assert_eq!(report.get("uniform"), Some(1.0));
    assert!(report.get("last_day").unwrap() < report.get("naive").unwrap());

    let ranking = report.ranking();
    assert_eq!(ranking.len(), report.len());
    assert!(ranking.windows(2).all(|w| w[0].1 <= w[1].1));
}

#[test]
fn errors_surface_to_the_caller() {
    let analyzer = ShiftedSerieAnalyzer::new(3, true);
    assert!(matches!(
        analyzer.compute(&Serie::new(Vec::<f64>::new())),
        Err(KlError::Validation(_))
    ));

    let result = Serie::builder().values([1, 2, 3]).index(vec![1_i64, 2, 3, 4]).build();
    assert!(matches!(result, Err(KlError::Validation(_))));
}
