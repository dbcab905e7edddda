//! Benchmark loading from a directory tree
//!
//! Layout:
//!
//! ```text
//! <benchmarks_dir>/<benchmark>/config.json          name, description, version
//! <benchmarks_dir>/<benchmark>/<suite>/config.json  provider, model, metrics, ...
//! <benchmarks_dir>/<benchmark>/<suite>/<case>/config.json  input, expected, attachments
//! ```
//!
//! Suites and cases are the immediate subdirectories of their parent, taken
//! in lexical order. Their names are the directory names.

use std::path::{Path, PathBuf};

use arch_bench_core::{BenchError, BenchResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use walkdir::WalkDir;

use super::{
    BenchmarkConfig, EvaluatorConfig, MetricConfig, TestCaseConfig, TestSuiteConfig,
};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize)]
struct BenchmarkFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    version: String,
}

#[derive(Debug, Deserialize)]
struct SuiteFile {
    #[serde(default)]
    description: String,
    #[serde(default)]
    metrics: Vec<MetricConfig>,
    provider: String,
    model: String,
    #[serde(default)]
    system_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    input: String,
    expected: String,
    #[serde(default, alias = "images")]
    attachments: Vec<PathBuf>,
}

/// Loader for one named benchmark
pub struct BenchmarkLoader {
    root: PathBuf,
    name: String,
}

impl BenchmarkLoader {
    /// Fails if `<benchmarks_dir>/<name>` is not a directory
    pub fn new(benchmarks_dir: impl AsRef<Path>, name: &str) -> BenchResult<Self> {
        let root = benchmarks_dir.as_ref().join(name);
        if !root.is_dir() {
            return Err(BenchError::config_at(
                format!("benchmark directory does not exist: {}", root.display()),
                root.display().to_string(),
            ));
        }

        Ok(Self {
            root,
            name: name.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the full definition tree
    pub fn load(&self, evaluator: EvaluatorConfig) -> BenchResult<BenchmarkConfig> {
        let file: BenchmarkFile = read_config(&self.root.join(CONFIG_FILE))?;

        let mut test_suites = Vec::new();
        for suite_dir in subdirectories(&self.root)? {
            test_suites.push(self.load_suite(&suite_dir)?);
        }

        debug!(
            benchmark = %self.name,
            suites = test_suites.len(),
            "benchmark definition loaded"
        );

        Ok(BenchmarkConfig {
            name: file.name.unwrap_or_else(|| self.name.clone()),
            description: file.description,
            version: file.version,
            evaluator,
            test_suites,
        })
    }

    fn load_suite(&self, dir: &Path) -> BenchResult<TestSuiteConfig> {
        let file: SuiteFile = read_config(&dir.join(CONFIG_FILE))?;

        let mut test_cases = Vec::new();
        for case_dir in subdirectories(dir)? {
            test_cases.push(load_case(&case_dir)?);
        }

        Ok(TestSuiteConfig {
            name: dir_name(dir),
            description: file.description,
            metrics: file.metrics,
            provider: file.provider,
            model: file.model,
            system_prompt: file.system_prompt,
            test_cases,
        })
    }
}

fn load_case(dir: &Path) -> BenchResult<TestCaseConfig> {
    let file: CaseFile = read_config(&dir.join(CONFIG_FILE))?;

    Ok(TestCaseConfig {
        name: dir_name(dir),
        input: read_text(&dir.join(&file.input))?,
        expected: read_text(&dir.join(&file.expected))?,
        attachments: file.attachments,
        base_dir: dir.to_path_buf(),
    })
}

/// Benchmark names under `benchmarks_dir`, in lexical order
pub fn list_benchmarks(benchmarks_dir: impl AsRef<Path>) -> BenchResult<Vec<String>> {
    let dir = benchmarks_dir.as_ref();
    if !dir.is_dir() {
        return Err(BenchError::config_at(
            format!("benchmarks directory does not exist: {}", dir.display()),
            dir.display().to_string(),
        ));
    }
    Ok(subdirectories(dir)?.iter().map(|d| dir_name(d)).collect())
}

/// Suite names of a benchmark, in lexical order
pub fn list_test_suites(benchmarks_dir: impl AsRef<Path>, name: &str) -> BenchResult<Vec<String>> {
    let loader = BenchmarkLoader::new(benchmarks_dir, name)?;
    Ok(subdirectories(loader.root())?
        .iter()
        .map(|d| dir_name(d))
        .collect())
}

fn subdirectories(dir: &Path) -> BenchResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            BenchError::config_at(
                format!("failed to read directory: {}", e),
                dir.display().to_string(),
            )
        })?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_text(path: &Path) -> BenchResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        BenchError::config_at(
            format!("failed to read {}: {}", path.display(), e),
            path.display().to_string(),
        )
    })
}

fn read_config<T: DeserializeOwned>(path: &Path) -> BenchResult<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| {
        BenchError::config_at(
            format!("failed to parse {}: {}", path.display(), e),
            path.display().to_string(),
        )
    })
}
