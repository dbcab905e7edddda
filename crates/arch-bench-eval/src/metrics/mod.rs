//! Metrics and result types

mod aggregator;
mod types;

pub use aggregator::{RELEVANCE_MATCH, RELEVANCE_MISMATCH, aggregate, average_rating, relevance};
pub(crate) use types::duration_secs;
pub use types::{
    Benchmark, EvaluationResult, GEVAL_METRIC, Metric, RELEVANCE_METRIC, TestCase, TestResult,
    TestSuite, UNRATED_METRICS,
};
