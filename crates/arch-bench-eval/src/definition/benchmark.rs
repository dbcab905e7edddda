//! Benchmark definition types
//!
//! Definitions are loaded once and never mutated during a run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Judge provider and model for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub provider: String,
    pub model: String,
}

impl EvaluatorConfig {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

/// One measurement inside a metric definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConfig {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub weight: f64,
}

/// Metric declared by a suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    pub name: String,
    #[serde(default)]
    pub measurements: Vec<MeasurementConfig>,
}

/// A single test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseConfig {
    pub name: String,
    /// Query sent to the subject model
    pub input: String,
    /// Reference answer handed to the judge
    pub expected: String,
    /// Attachment paths, relative to `base_dir` unless absolute
    #[serde(default)]
    pub attachments: Vec<PathBuf>,
    /// Directory the case was loaded from
    #[serde(default)]
    pub base_dir: PathBuf,
}

impl TestCaseConfig {
    pub fn new(name: impl Into<String>, input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expected: expected.into(),
            attachments: Vec::new(),
            base_dir: PathBuf::new(),
        }
    }

    pub fn with_attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(path.into());
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Attachment paths resolved against the case directory, in declared order
    pub fn resolved_attachments(&self) -> Vec<PathBuf> {
        self.attachments
            .iter()
            .map(|p| {
                if p.is_absolute() {
                    p.clone()
                } else {
                    self.base_dir.join(p)
                }
            })
            .collect()
    }
}

/// A suite of test cases run against one subject model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuiteConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<MetricConfig>,
    /// Subject provider identifier
    pub provider: String,
    /// Subject model identifier
    pub model: String,
    /// System prompt for the subject call (empty when absent)
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub test_cases: Vec<TestCaseConfig>,
}

impl TestSuiteConfig {
    pub fn new(name: impl Into<String>, provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            metrics: Vec::new(),
            provider: provider.into(),
            model: model.into(),
            system_prompt: None,
            test_cases: Vec::new(),
        }
    }

    pub fn with_case(mut self, case: TestCaseConfig) -> Self {
        self.test_cases.push(case);
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

/// Complete benchmark definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub test_suites: Vec<TestSuiteConfig>,
}

impl BenchmarkConfig {
    pub fn new(name: impl Into<String>, evaluator: EvaluatorConfig) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: String::new(),
            evaluator,
            test_suites: Vec::new(),
        }
    }

    pub fn with_suite(mut self, suite: TestSuiteConfig) -> Self {
        self.test_suites.push(suite);
        self
    }

    /// Total number of cases across all suites
    pub fn case_count(&self) -> usize {
        self.test_suites.iter().map(|s| s.test_cases.len()).sum()
    }
}
