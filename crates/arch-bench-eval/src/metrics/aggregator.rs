//! Metric aggregation
//!
//! Pure functions: the same inputs always produce the same metric list.

use super::types::{GEVAL_METRIC, Metric, RELEVANCE_METRIC};

/// Relevance for an exact match
pub const RELEVANCE_MATCH: f64 = 100.0;
/// Relevance for any mismatch
pub const RELEVANCE_MISMATCH: f64 = 50.0;

/// Metric set for one test case: `geval` then `relevance`
pub fn aggregate(judge_score: f64, expected: &str, actual: &str) -> Vec<Metric> {
    vec![
        Metric::new(GEVAL_METRIC, judge_score),
        Metric::new(RELEVANCE_METRIC, relevance(expected, actual)),
    ]
}

/// Exact string equality. Not a semantic similarity measure.
pub fn relevance(expected: &str, actual: &str) -> f64 {
    if expected == actual {
        RELEVANCE_MATCH
    } else {
        RELEVANCE_MISMATCH
    }
}

/// Mean of the rated metrics (everything except `duration` and `cost`).
/// An empty or fully unrated list averages 0.
pub fn average_rating(metrics: &[Metric]) -> f64 {
    let (sum, count) = metrics
        .iter()
        .filter(|m| m.is_rated())
        .fold((0.0, 0usize), |(sum, count), m| (sum + m.value, count + 1));

    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
