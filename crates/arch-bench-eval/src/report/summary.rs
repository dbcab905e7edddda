//! Report data contract
//!
//! One [`CaseSummary`] per completed case, rolled up per suite and per
//! benchmark. Ratings are case-weighted at every level; an empty suite or
//! benchmark averages 0.

use std::time::Duration;

use serde::Serialize;

use crate::metrics::{Benchmark, TestSuite, duration_secs};

/// Per-case report row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseSummary {
    pub suite_name: String,
    pub case_name: String,
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    pub cost: f64,
    pub average_rating: f64,
}

/// Per-suite roll-up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteSummary {
    pub name: String,
    pub model: String,
    #[serde(with = "duration_secs")]
    pub total_duration: Duration,
    pub total_cost: f64,
    pub evaluation_cost: f64,
    pub average_rating: f64,
    pub cases: Vec<CaseSummary>,
}

impl SuiteSummary {
    pub fn from_suite(suite: &TestSuite) -> Self {
        let cases: Vec<CaseSummary> = suite
            .test_cases
            .iter()
            .map(|case| CaseSummary {
                suite_name: suite.name.clone(),
                case_name: case.name.clone(),
                duration: case.duration(),
                cost: case.cost(),
                average_rating: case.average_rating(),
            })
            .collect();

        Self {
            name: suite.name.clone(),
            model: suite.model.clone(),
            total_duration: cases.iter().map(|c| c.duration).sum(),
            total_cost: cases.iter().map(|c| c.cost).sum(),
            evaluation_cost: suite.test_cases.iter().map(|c| c.evaluation_cost()).sum(),
            average_rating: mean(cases.iter().map(|c| c.average_rating)),
            cases,
        }
    }

    fn rating_sum(&self) -> f64 {
        self.cases.iter().map(|c| c.average_rating).sum()
    }
}

/// Benchmark roll-up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub name: String,
    pub eval_provider: String,
    pub eval_model: String,
    #[serde(with = "duration_secs")]
    pub total_duration: Duration,
    pub total_cost: f64,
    pub evaluation_cost: f64,
    /// Mean over every case of every suite
    pub average_rating: f64,
    pub case_count: usize,
    pub suites: Vec<SuiteSummary>,
}

impl BenchmarkSummary {
    pub fn from_benchmark(benchmark: &Benchmark) -> Self {
        let suites: Vec<SuiteSummary> = benchmark.test_suites.iter().map(SuiteSummary::from_suite).collect();
        let case_count: usize = suites.iter().map(|s| s.cases.len()).sum();
        let rating_sum: f64 = suites.iter().map(SuiteSummary::rating_sum).sum();

        Self {
            name: benchmark.name.clone(),
            eval_provider: benchmark.eval_provider.clone(),
            eval_model: benchmark.eval_model.clone(),
            total_duration: suites.iter().map(|s| s.total_duration).sum(),
            total_cost: suites.iter().map(|s| s.total_cost).sum(),
            evaluation_cost: suites.iter().map(|s| s.evaluation_cost).sum(),
            average_rating: if case_count == 0 {
                0.0
            } else {
                rating_sum / case_count as f64
            },
            case_count,
            suites,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
