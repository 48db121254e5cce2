use sentiment_dashboard::anomaly::{
    DEFAULT_DEVIATION_THRESHOLD, PolarityStats, flag_anomalies, polarity_of,
};

use crate::common::article;

#[test]
fn outlier_polarity_is_flagged() {
    let mut articles: Vec<_> = (0..8)
        .map(|i| article(i, i, false, "General News", (0.5, 0.3, 0.2)))
        .collect();
    articles.push(article(99, 99, false, "General News", (0.0, 0.05, 0.95)));

    let flags = flag_anomalies(&articles, DEFAULT_DEVIATION_THRESHOLD);
    assert_eq!(flags.len(), 9);
    assert!(flags[8]);
    assert!(flags[..8].iter().all(|f| !f));
}

#[test]
fn constant_polarity_has_no_anomalies() {
    let articles: Vec<_> = (0..5)
        .map(|i| article(i, i, false, "x", (0.1, 0.8, 0.1)))
        .collect();
    assert!(flag_anomalies(&articles, 1.5).iter().all(|f| !f));
}

#[test]
fn empty_set_has_no_stats() {
    assert!(PolarityStats::compute(&[], 1.5).is_none());
    assert!(flag_anomalies(&[], 1.5).is_empty());
}

#[test]
fn stats_use_population_standard_deviation() {
    let stats = PolarityStats::compute(&[1.0, -1.0], 1.5).unwrap();
    assert!((stats.mean - 0.0).abs() < 1e-12);
    assert!((stats.std_dev - 1.0).abs() < 1e-12);
    assert_eq!(stats.band(), (-1.5, 1.5));
    assert!(!stats.is_outlier(1.5));
    assert!(stats.is_outlier(1.6));
}

#[test]
fn upstream_flags_take_precedence() {
    let mut a = article(1, 1, false, "x", (0.5, 0.5, 0.0));
    a.is_anomaly = Some(true);
    let b = article(2, 2, false, "x", (0.5, 0.5, 0.0));

    let flags = flag_anomalies(&[a, b], 1.5);
    assert_eq!(flags, [true, false]);
}

#[test]
fn upstream_polarity_score_is_preferred() {
    let mut a = article(1, 1, false, "x", (0.9, 0.0, 0.1));
    assert!((polarity_of(&a) - 0.8).abs() < 1e-12);
    a.polarity_score = Some(-0.25);
    assert_eq!(polarity_of(&a), -0.25);
}
