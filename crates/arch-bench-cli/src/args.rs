//! CLI argument definitions using clap
//!
//! - arch-bench run <benchmark>               # Run every suite of a benchmark
//! - arch-bench run <benchmark> -s <suite>    # Run a single suite
//! - arch-bench list benchmarks|test-suites|providers

use arch_bench_eval::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arch-bench")]
#[command(about = "Arch Bench - LLM-as-judge benchmark harness for language and vision models")]
#[command(
    long_about = r#"Arch Bench - LLM-as-judge benchmark harness for language and vision models

USAGE:
  arch-bench run <benchmark>                     # Run all test suites
  arch-bench run <benchmark> --test-suite <name> # Run one test suite
  arch-bench list benchmarks                     # Available benchmarks
  arch-bench list test-suites <benchmark>        # Suites of a benchmark
  arch-bench list providers                      # Providers and priced models

Settings are read from the environment and a local .env file:
  EVAL_PROVIDER, EVAL_MODEL, EVAL_API_KEY, OPENAI_API_KEY,
  ARCH_BENCH_BENCHMARKS_DIR, ARCH_BENCH_CALL_TIMEOUT_SECS, OPENAI_BASE_URL"#
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Directory holding benchmark definitions
    #[arg(long, global = true, env = "ARCH_BENCH_BENCHMARKS_DIR")]
    pub benchmarks_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a benchmark and print its reports
    Run {
        /// Benchmark name (directory under the benchmarks dir)
        benchmark: String,

        /// Only run the test suite with this name
        #[arg(long, short = 's')]
        test_suite: Option<String>,

        /// Report format: table, json or markdown
        #[arg(long, short, default_value = "table")]
        format: ReportFormat,

        /// Save the full results as JSON into this directory
        #[arg(long, short)]
        output_dir: Option<PathBuf>,

        /// Judge provider
        #[arg(long, env = "EVAL_PROVIDER")]
        eval_provider: Option<String>,

        /// Judge model
        #[arg(long, env = "EVAL_MODEL")]
        eval_model: Option<String>,

        /// Deadline for each model call, in seconds
        #[arg(long, env = "ARCH_BENCH_CALL_TIMEOUT_SECS")]
        timeout: Option<u64>,
    },

    /// List benchmarks, test suites or providers
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
}

#[derive(Subcommand, Clone)]
pub enum ListTarget {
    /// Benchmarks found in the benchmarks directory
    Benchmarks,

    /// Test suites of one benchmark
    TestSuites {
        /// Benchmark name
        benchmark: String,
    },

    /// Supported providers with their priced models
    Providers,
}
