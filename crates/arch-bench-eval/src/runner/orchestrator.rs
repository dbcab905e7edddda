//! Benchmark orchestrator
//!
//! Walks Benchmark → TestSuite → TestCase in definition order, one call at a
//! time. It is the failure boundary: the first failing case aborts its suite
//! and the first failing suite aborts the run. No partial suite is ever
//! returned or reported.

use std::sync::Arc;
use std::time::Duration;

use arch_bench_core::config::settings::DEFAULT_CALL_TIMEOUT_SECS;
use arch_bench_core::{BenchError, BenchResult, ProviderFactory};
use chrono::Utc;
use tracing::{debug, info};

use super::invocation::invoke;
use super::progress::{BenchmarkProgress, ProgressCallback, RunPhase};
use crate::definition::{BenchmarkConfig, TestCaseConfig, TestSuiteConfig};
use crate::judge::GEval;
use crate::metrics::{Benchmark, TestCase, TestResult, TestSuite, aggregate};
use crate::report::ReportEmitter;

/// Runs one benchmark definition
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    factory: Arc<dyn ProviderFactory>,
    emitter: Arc<dyn ReportEmitter>,
    judge: GEval,
    call_timeout: Duration,
    progress_callback: Option<ProgressCallback>,
    phase: RunPhase,
}

impl BenchmarkRunner {
    /// Resolves the evaluator gateway up front; a missing judge credential
    /// fails here, before any suite runs
    pub fn new(
        config: BenchmarkConfig,
        factory: Arc<dyn ProviderFactory>,
        emitter: Arc<dyn ReportEmitter>,
    ) -> BenchResult<Self> {
        let evaluator = factory.create_evaluator(&config.evaluator.provider, &config.evaluator.model)?;
        let call_timeout = Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS);

        Ok(Self {
            judge: GEval::new(evaluator, call_timeout),
            config,
            factory,
            emitter,
            call_timeout,
            progress_callback: None,
            phase: RunPhase::Init,
        })
    }

    /// Deadline applied to every subject and judge call
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self.judge = self.judge.with_call_timeout(call_timeout);
        self
    }

    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Current state of the run
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    fn notify(&self, event: BenchmarkProgress) {
        if let Some(callback) = &self.progress_callback {
            callback(event);
        }
    }

    fn fail(&mut self, err: BenchError) -> BenchError {
        let phase = self.phase;
        self.phase = RunPhase::Failed;
        debug!(%phase, "benchmark run failed: {}", err);
        self.notify(BenchmarkProgress::Failed {
            phase,
            error: err.to_string(),
        });
        err
    }

    /// Run every suite whose name matches `filter`; `None` or an empty filter
    /// runs all of them. A filter matching nothing yields an empty benchmark.
    pub async fn run_benchmark(&mut self, filter: Option<&str>) -> BenchResult<Benchmark> {
        self.phase = RunPhase::Init;
        let filter = filter.filter(|f| !f.is_empty());

        let selected: Vec<TestSuiteConfig> = self
            .config
            .test_suites
            .iter()
            .filter(|s| filter.is_none_or(|f| s.name == f))
            .cloned()
            .collect();

        info!(
            benchmark = %self.config.name,
            suites = selected.len(),
            "starting benchmark"
        );

        let total = selected.len();
        let mut test_suites = Vec::with_capacity(total);
        for (index, suite_config) in selected.iter().enumerate() {
            self.phase = RunPhase::RunningSuite { suite: index };
            self.notify(BenchmarkProgress::SuiteStarted {
                suite: suite_config.name.clone(),
                index,
                total,
            });

            let suite = match self.run_suite_at(index, suite_config).await {
                Ok(suite) => suite,
                Err(err) => return Err(self.fail(err)),
            };

            if let Err(err) = self.emitter.emit_suite(&suite) {
                return Err(self.fail(err));
            }
            self.notify(BenchmarkProgress::SuiteCompleted {
                suite: suite.name.clone(),
                cases: suite.test_cases.len(),
            });
            test_suites.push(suite);
        }

        self.phase = RunPhase::Aggregating;
        let benchmark = Benchmark {
            name: self.config.name.clone(),
            eval_provider: self.config.evaluator.provider.clone(),
            eval_model: self.config.evaluator.model.clone(),
            test_suites,
            completed_at: Utc::now(),
        };

        self.phase = RunPhase::Reporting;
        if let Err(err) = self.emitter.emit_benchmark(&benchmark) {
            return Err(self.fail(err));
        }

        self.phase = RunPhase::Done;
        info!(
            benchmark = %benchmark.name,
            cases = benchmark.case_count(),
            "benchmark completed"
        );
        Ok(benchmark)
    }

    /// Run every case of one suite, in order
    ///
    /// The suite keeps its position in the benchmark definition for phase
    /// reporting; a suite not part of the definition is treated as the first.
    pub async fn run_test_suite(&mut self, suite_config: &TestSuiteConfig) -> BenchResult<TestSuite> {
        let index = self
            .config
            .test_suites
            .iter()
            .position(|s| s.name == suite_config.name)
            .unwrap_or(0);

        self.phase = RunPhase::RunningSuite { suite: index };
        match self.run_suite_at(index, suite_config).await {
            Ok(suite) => {
                self.phase = RunPhase::Done;
                Ok(suite)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn run_suite_at(
        &mut self,
        suite_index: usize,
        suite_config: &TestSuiteConfig,
    ) -> BenchResult<TestSuite> {
        info!(suite = %suite_config.name, cases = suite_config.test_cases.len(), "running test suite");

        let total = suite_config.test_cases.len();
        let mut test_cases = Vec::with_capacity(total);
        for (index, case_config) in suite_config.test_cases.iter().enumerate() {
            self.phase = RunPhase::RunningCase {
                suite: suite_index,
                case: index,
            };
            self.notify(BenchmarkProgress::CaseStarted {
                suite: suite_config.name.clone(),
                case: case_config.name.clone(),
                index,
                total,
            });

            let case = self
                .run_test_case(suite_config, case_config)
                .await
                .map_err(|e| e.in_suite(&suite_config.name))?;

            self.notify(BenchmarkProgress::CaseCompleted {
                suite: suite_config.name.clone(),
                case: case.name.clone(),
                duration: case.duration(),
                cost: case.cost(),
                average_rating: case.average_rating(),
            });
            test_cases.push(case);
        }

        Ok(TestSuite {
            name: suite_config.name.clone(),
            provider: suite_config.provider.clone(),
            model: suite_config.model.clone(),
            test_cases,
        })
    }

    /// Invoke the subject, judge its output and assemble the case result
    pub async fn run_test_case(
        &self,
        suite_config: &TestSuiteConfig,
        case_config: &TestCaseConfig,
    ) -> BenchResult<TestCase> {
        self.execute_case(suite_config, case_config)
            .await
            .map_err(|e| e.in_case(&suite_config.name, &case_config.name))
    }

    async fn execute_case(
        &self,
        suite_config: &TestSuiteConfig,
        case_config: &TestCaseConfig,
    ) -> BenchResult<TestCase> {
        let subject = self
            .factory
            .create_subject(&suite_config.provider, &suite_config.model)?;
        let system_prompt = suite_config.system_prompt.as_deref().unwrap_or("");

        let invocation = invoke(subject.as_ref(), system_prompt, case_config, self.call_timeout).await?;
        let evaluation = self.judge.evaluate(&case_config.expected, &invocation.output).await?;
        let metrics = aggregate(evaluation.score, &case_config.expected, &invocation.output);

        info!(
            suite = %suite_config.name,
            case = %case_config.name,
            score = evaluation.score,
            "test case scored"
        );

        Ok(TestCase {
            name: case_config.name.clone(),
            input: case_config.input.clone(),
            expected: case_config.expected.clone(),
            result: Some(TestResult {
                output: invocation.output,
                metrics,
                duration: invocation.duration,
                cost: invocation.cost,
                evaluation_cost: evaluation.cost,
            }),
        })
    }
}
