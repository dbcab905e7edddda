//! Report generation for benchmark results
//!
//! Renders suite and benchmark summaries as a console table, JSON or
//! Markdown. Emitters receive completed results and never mutate them.

mod json;
mod markdown;
mod summary;
mod table;

pub use json::{JsonReporter, save_results};
pub use markdown::MarkdownReporter;
pub use summary::{BenchmarkSummary, CaseSummary, SuiteSummary};
pub use table::{TableReporter, format_duration};

use std::fmt;
use std::str::FromStr;

use arch_bench_core::BenchResult;

use crate::metrics::{Benchmark, TestSuite};

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Markdown,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => Err(format!(
                "unknown report format '{}' (expected table, json or markdown)",
                other
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "markdown",
        };
        write!(f, "{}", name)
    }
}

/// Render the per-suite report
pub fn generate_suite_report(suite: &TestSuite, format: ReportFormat) -> BenchResult<String> {
    let summary = SuiteSummary::from_suite(suite);
    match format {
        ReportFormat::Table => Ok(TableReporter::suite(&summary)),
        ReportFormat::Json => JsonReporter::generate(&summary),
        ReportFormat::Markdown => Ok(MarkdownReporter::suite(&summary)),
    }
}

/// Render the benchmark-level report
pub fn generate_benchmark_report(benchmark: &Benchmark, format: ReportFormat) -> BenchResult<String> {
    let summary = BenchmarkSummary::from_benchmark(benchmark);
    match format {
        ReportFormat::Table => Ok(TableReporter::benchmark(&summary)),
        ReportFormat::Json => JsonReporter::generate(&summary),
        ReportFormat::Markdown => Ok(MarkdownReporter::benchmark(&summary)),
    }
}

/// Receives results as the orchestrator completes them
pub trait ReportEmitter: Send + Sync {
    /// Called once after each suite completes
    fn emit_suite(&self, suite: &TestSuite) -> BenchResult<()>;

    /// Called once after every suite has completed
    fn emit_benchmark(&self, benchmark: &Benchmark) -> BenchResult<()>;
}

/// Prints reports to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmitter {
    format: ReportFormat,
}

impl ConsoleEmitter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

impl ReportEmitter for ConsoleEmitter {
    fn emit_suite(&self, suite: &TestSuite) -> BenchResult<()> {
        print!("{}", generate_suite_report(suite, self.format)?);
        if self.format == ReportFormat::Json {
            println!();
        }
        Ok(())
    }

    fn emit_benchmark(&self, benchmark: &Benchmark) -> BenchResult<()> {
        print!("{}", generate_benchmark_report(benchmark, self.format)?);
        if self.format == ReportFormat::Json {
            println!();
        }
        Ok(())
    }
}
