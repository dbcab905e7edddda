//! Benchmark definitions and their on-disk loader

mod benchmark;
mod loader;

pub use benchmark::{
    BenchmarkConfig, EvaluatorConfig, MeasurementConfig, MetricConfig, TestCaseConfig,
    TestSuiteConfig,
};
pub use loader::{BenchmarkLoader, list_benchmarks, list_test_suites};
