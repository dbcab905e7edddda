//! Result types built bottom-up by the orchestrator
//!
//! `TestResult` → `TestCase` → `TestSuite` → `Benchmark`. Reports read these
//! and never mutate them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregator::average_rating;

/// Judge metric name
pub const GEVAL_METRIC: &str = "geval";
/// Exact-match metric name
pub const RELEVANCE_METRIC: &str = "relevance";
/// Metric names left out of the average rating
pub const UNRATED_METRICS: &[&str] = &["duration", "cost"];

/// A named numeric metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Whether this metric counts toward the average rating
    pub fn is_rated(&self) -> bool {
        !UNRATED_METRICS.contains(&self.name.as_str())
    }
}

/// The judge's verdict for one (expected, output) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationResult {
    /// Score in 0..=100
    pub score: f64,
    /// Judge spend for this verdict, in USD
    pub cost: f64,
}

/// Outcome of one subject invocation plus its scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub output: String,
    pub metrics: Vec<Metric>,
    /// Wall time of the subject call only
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    /// Subject call cost in USD
    pub cost: f64,
    /// Judge calls cost in USD
    #[serde(default)]
    pub evaluation_cost: f64,
}

impl TestResult {
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.metrics)
    }

    /// Metric value by name
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.value)
    }
}

/// A test case together with its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expected: String,
    pub result: Option<TestResult>,
}

impl TestCase {
    /// Average rating of the result; 0 when there is none
    pub fn average_rating(&self) -> f64 {
        self.result.as_ref().map_or(0.0, TestResult::average_rating)
    }

    pub fn duration(&self) -> Duration {
        self.result.as_ref().map_or(Duration::ZERO, |r| r.duration)
    }

    pub fn cost(&self) -> f64 {
        self.result.as_ref().map_or(0.0, |r| r.cost)
    }

    pub fn evaluation_cost(&self) -> f64 {
        self.result.as_ref().map_or(0.0, |r| r.evaluation_cost)
    }
}

/// A completed suite; cases keep the definition order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    pub name: String,
    /// Subject provider
    pub provider: String,
    /// Subject model
    pub model: String,
    pub test_cases: Vec<TestCase>,
}

/// A completed benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub name: String,
    pub eval_provider: String,
    pub eval_model: String,
    pub test_suites: Vec<TestSuite>,
    pub completed_at: DateTime<Utc>,
}

impl Benchmark {
    pub fn case_count(&self) -> usize {
        self.test_suites.iter().map(|s| s.test_cases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.test_suites.is_empty()
    }
}

/// Serialize durations as fractional seconds
pub(crate) mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(metrics: Vec<Metric>) -> TestResult {
        TestResult {
            output: "out".to_string(),
            metrics,
            duration: Duration::from_millis(1500),
            cost: 0.01,
            evaluation_cost: 0.002,
        }
    }

    #[test]
    fn test_average_rating_excludes_cost() {
        let result = result(vec![
            Metric::new(GEVAL_METRIC, 80.0),
            Metric::new(RELEVANCE_METRIC, 50.0),
            Metric::new("cost", 0.01),
        ]);
        assert_eq!(result.average_rating(), 65.0);
        assert_eq!(result.metric(GEVAL_METRIC), Some(80.0));
    }

    #[test]
    fn test_case_without_result_rates_zero() {
        let case = TestCase {
            name: "c".to_string(),
            input: String::new(),
            expected: String::new(),
            result: None,
        };
        assert_eq!(case.average_rating(), 0.0);
        assert_eq!(case.duration(), Duration::ZERO);
        assert_eq!(case.cost(), 0.0);
    }

    #[test]
    fn test_duration_serializes_as_seconds() {
        let json = serde_json::to_value(result(vec![])).unwrap();
        assert_eq!(json["duration"], 1.5);

        let back: TestResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.duration, Duration::from_millis(1500));
    }
}
