//! Arch Bench evaluation engine
//!
//! Loads benchmark definitions from disk, drives the subject model through
//! every test case, scores each output with a G-Eval judge and renders the
//! results.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use arch_bench_core::{DefaultProviderFactory, Settings};
//! use arch_bench_eval::{BenchmarkLoader, BenchmarkRunner, ConsoleEmitter, EvaluatorConfig};
//!
//! let settings = Settings::from_env()?;
//! let evaluator = EvaluatorConfig::new(&settings.eval_provider, &settings.eval_model);
//! let config = BenchmarkLoader::new(&settings.benchmarks_dir, "architecture")?.load(evaluator)?;
//! let factory = Arc::new(DefaultProviderFactory::new(settings)?);
//! let mut runner = BenchmarkRunner::new(config, factory, Arc::new(ConsoleEmitter::default()))?;
//! let benchmark = runner.run_benchmark(None).await?;
//! ```

mod deadline;
pub mod definition;
pub mod judge;
pub mod metrics;
pub mod report;
pub mod runner;

pub use definition::{
    BenchmarkConfig, BenchmarkLoader, EvaluatorConfig, TestCaseConfig, TestSuiteConfig,
    list_benchmarks, list_test_suites,
};
pub use judge::GEval;
pub use metrics::{
    Benchmark, Metric, TestCase, TestResult, TestSuite, aggregate, average_rating, relevance,
};
pub use report::{
    ConsoleEmitter, ReportEmitter, ReportFormat, generate_benchmark_report, generate_suite_report,
    save_results,
};
pub use runner::{BenchmarkProgress, BenchmarkRunner, ProgressCallback, RunPhase};
