//! JSON report generation and result files

use std::path::{Path, PathBuf};

use arch_bench_core::{BenchError, BenchResult};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::metrics::Benchmark;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    pub fn generate<T: Serialize>(value: &T) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Write the complete benchmark as `benchmark_results_<UTC timestamp>.json`
/// under `dir`, creating it if needed
pub fn save_results(benchmark: &Benchmark, dir: &Path) -> BenchResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| BenchError::io_at(e.to_string(), dir.display().to_string()))?;

    let file_name = format!(
        "benchmark_results_{}.json",
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(file_name);

    let json = JsonReporter::generate(benchmark)?;
    std::fs::write(&path, json)
        .map_err(|e| BenchError::io_at(e.to_string(), path.display().to_string()))?;

    info!("benchmark results saved to {}", path.display());
    Ok(path)
}
