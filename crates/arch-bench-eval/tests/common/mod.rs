//! Shared helpers for orchestrator integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use arch_bench_core::{
    Attachment, BenchError, BenchResult, Generation, ProviderFactory, ProviderGateway,
    StructuredGeneration, StructuredSchema, TokenUsage,
};
use arch_bench_eval::metrics::{Benchmark, TestSuite};
use arch_bench_eval::report::ReportEmitter;
use arch_bench_eval::{
    BenchmarkConfig, BenchmarkProgress, EvaluatorConfig, TestCaseConfig, TestSuiteConfig,
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};

pub const SUBJECT_MODEL: &str = "gpt-4o";
pub const JUDGE_MODEL: &str = "gpt-4o-mini";

/// Answers a query or fails
pub type Responder = Arc<dyn Fn(&str) -> BenchResult<String> + Send + Sync>;
/// Produces the structured fields for a scoring query
pub type Scorer = Arc<dyn Fn(&str) -> BenchResult<Value> + Send + Sync>;

/// One recorded gateway call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub role: &'static str,
    pub kind: &'static str,
    pub system_prompt: String,
    pub query: String,
    pub attachments: usize,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// In-memory gateway driven by closures
pub struct ScriptedGateway {
    role: &'static str,
    model: String,
    responder: Responder,
    scorer: Scorer,
    delay: Duration,
    log: CallLog,
}

#[async_trait]
impl ProviderGateway for ScriptedGateway {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        system_prompt: &str,
        query: &str,
        attachments: &[Attachment],
    ) -> BenchResult<Generation> {
        self.log.lock().unwrap().push(Call {
            role: self.role,
            kind: "generate",
            system_prompt: system_prompt.to_string(),
            query: query.to_string(),
            attachments: attachments.len(),
        });
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let text = (self.responder)(query)?;
        Ok(Generation {
            text,
            usage: TokenUsage::new(1_000, 500),
        })
    }

    async fn generate_structured(
        &self,
        system_prompt: &str,
        query: &str,
        schema: &StructuredSchema,
    ) -> BenchResult<StructuredGeneration> {
        self.log.lock().unwrap().push(Call {
            role: self.role,
            kind: "structured",
            system_prompt: system_prompt.to_string(),
            query: query.to_string(),
            attachments: 0,
        });
        let value = (self.scorer)(query)?;
        let fields: Map<String, Value> = match value {
            Value::Object(fields) => fields,
            other => return Err(BenchError::malformed(format!("not an object: {}", other))),
        };
        if let Some(missing) = schema.required.iter().find(|f| !fields.contains_key(f.as_str())) {
            return Err(BenchError::malformed(format!("missing {}", missing)));
        }
        Ok(StructuredGeneration {
            fields,
            usage: TokenUsage::new(2_000, 100),
        })
    }

    fn list_models(&self) -> Vec<String> {
        vec![self.model.clone()]
    }
}

/// Factory handing out scripted gateways that share one call log
pub struct ScriptedFactory {
    pub subject: Responder,
    pub reasoning: Responder,
    pub scorer: Scorer,
    pub subject_delay: Duration,
    pub evaluator_available: bool,
    pub log: CallLog,
}

impl ScriptedFactory {
    /// Subject echoes `answer: <input>`, judge always scores 80
    pub fn new() -> Self {
        Self {
            subject: Arc::new(|query| Ok(format!("answer: {}", query))),
            reasoning: Arc::new(|_| Ok("1. Compare with the context.".to_string())),
            scorer: Arc::new(|_| Ok(json!({ "score": 80 }))),
            subject_delay: Duration::ZERO,
            evaluator_available: true,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_subject<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> BenchResult<String> + Send + Sync + 'static,
    {
        self.subject = Arc::new(f);
        self
    }

    pub fn with_reasoning<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> BenchResult<String> + Send + Sync + 'static,
    {
        self.reasoning = Arc::new(f);
        self
    }

    pub fn with_scorer<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> BenchResult<Value> + Send + Sync + 'static,
    {
        self.scorer = Arc::new(f);
        self
    }

    pub fn with_subject_delay(mut self, delay: Duration) -> Self {
        self.subject_delay = delay;
        self
    }

    pub fn without_evaluator(mut self) -> Self {
        self.evaluator_available = false;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    fn check_provider(provider: &str) -> BenchResult<()> {
        if provider.eq_ignore_ascii_case("openai") {
            Ok(())
        } else {
            Err(BenchError::UnsupportedProvider {
                provider: provider.to_string(),
            })
        }
    }
}

impl ProviderFactory for ScriptedFactory {
    fn create_subject(&self, provider: &str, model: &str) -> BenchResult<Arc<dyn ProviderGateway>> {
        Self::check_provider(provider)?;
        Ok(Arc::new(ScriptedGateway {
            role: "subject",
            model: model.to_string(),
            responder: self.subject.clone(),
            scorer: Arc::new(|_| Err(BenchError::malformed("subject is not scored"))),
            delay: self.subject_delay,
            log: self.log.clone(),
        }))
    }

    fn create_evaluator(
        &self,
        provider: &str,
        model: &str,
    ) -> BenchResult<Arc<dyn ProviderGateway>> {
        Self::check_provider(provider)?;
        if !self.evaluator_available {
            return Err(BenchError::MissingCredential {
                provider: provider.to_string(),
                hint: "EVAL_API_KEY".to_string(),
            });
        }
        Ok(Arc::new(ScriptedGateway {
            role: "judge",
            model: model.to_string(),
            responder: self.reasoning.clone(),
            scorer: self.scorer.clone(),
            delay: Duration::ZERO,
            log: self.log.clone(),
        }))
    }
}

/// Emitter remembering what it was asked to report
#[derive(Default)]
pub struct RecordingEmitter {
    pub suites: Mutex<Vec<TestSuite>>,
    pub benchmarks: Mutex<Vec<Benchmark>>,
}

impl RecordingEmitter {
    pub fn suite_names(&self) -> Vec<String> {
        self.suites.lock().unwrap().iter().map(|s| s.name.clone()).collect()
    }

    pub fn benchmark_count(&self) -> usize {
        self.benchmarks.lock().unwrap().len()
    }
}

impl ReportEmitter for RecordingEmitter {
    fn emit_suite(&self, suite: &TestSuite) -> BenchResult<()> {
        self.suites.lock().unwrap().push(suite.clone());
        Ok(())
    }

    fn emit_benchmark(&self, benchmark: &Benchmark) -> BenchResult<()> {
        self.benchmarks.lock().unwrap().push(benchmark.clone());
        Ok(())
    }
}

/// Collects progress events
pub fn progress_recorder() -> (Arc<Mutex<Vec<BenchmarkProgress>>>, Box<dyn Fn(BenchmarkProgress) + Send + Sync>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    (events, Box::new(move |event| sink.lock().unwrap().push(event)))
}

pub fn case(name: &str, input: &str, expected: &str) -> TestCaseConfig {
    TestCaseConfig::new(name, input, expected)
}

pub fn suite(name: &str, cases: Vec<TestCaseConfig>) -> TestSuiteConfig {
    cases
        .into_iter()
        .fold(TestSuiteConfig::new(name, "openai", SUBJECT_MODEL), |s, c| s.with_case(c))
}

pub fn benchmark(suites: Vec<TestSuiteConfig>) -> BenchmarkConfig {
    suites.into_iter().fold(
        BenchmarkConfig::new("architecture", EvaluatorConfig::new("openai", JUDGE_MODEL)),
        |b, s| b.with_suite(s),
    )
}
