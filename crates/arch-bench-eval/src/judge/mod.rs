//! G-Eval judge
//!
//! Two sequential calls against the evaluator model: a chain-of-thought call
//! that produces evaluation steps, then a structured-output call that commits
//! to a numeric score given those steps. A failed chain-of-thought call aborts
//! the evaluation.

pub mod prompt;

use std::sync::Arc;
use std::time::Duration;

use arch_bench_core::{BenchError, BenchResult, ProviderGateway, StructuredSchema};
use tracing::{debug, warn};

use crate::deadline::with_deadline;
use crate::metrics::EvaluationResult;

/// Score bounds enforced on the judge's answer
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Evaluation steps produced by the chain-of-thought call
#[derive(Debug, Clone, PartialEq)]
pub struct Reasoning {
    pub text: String,
    pub cost: f64,
}

/// G-Eval judge bound to one evaluator gateway
pub struct GEval {
    gateway: Arc<dyn ProviderGateway>,
    task: String,
    criteria: String,
    call_timeout: Duration,
    schema: StructuredSchema,
}

impl GEval {
    pub fn new(gateway: Arc<dyn ProviderGateway>, call_timeout: Duration) -> Self {
        Self {
            gateway,
            task: prompt::DEFAULT_TASK.to_string(),
            criteria: prompt::DEFAULT_CRITERIA.to_string(),
            call_timeout,
            schema: StructuredSchema::score(),
        }
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.criteria = criteria.into();
        self
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn evaluator_model(&self) -> &str {
        self.gateway.model()
    }

    /// Chain-of-thought phase
    pub async fn reason(&self) -> BenchResult<Reasoning> {
        let query = prompt::chain_of_thought(&self.task, &self.criteria);
        let generation = with_deadline(self.call_timeout, self.gateway.generate("", &query, &[]))
            .await
            .map_err(BenchError::reasoning)?;

        let cost = self.gateway.cost(generation.usage, self.gateway.model())?;
        debug!(
            chars = generation.text.len(),
            cost, "judge reasoning generated"
        );

        Ok(Reasoning {
            text: generation.text,
            cost,
        })
    }

    /// Scoring phase. `context` is the expected answer, `target` the output under test.
    pub async fn score(&self, reasoning: &Reasoning, context: &str, target: &str) -> BenchResult<EvaluationResult> {
        let query = prompt::scoring(&self.task, &self.criteria, &reasoning.text, context, target);
        let structured = with_deadline(
            self.call_timeout,
            self.gateway
                .generate_structured(prompt::JUDGE_SYSTEM_PROMPT, &query, &self.schema),
        )
        .await?;

        let raw = structured
            .fields
            .get("score")
            .ok_or_else(|| BenchError::score_missing("judge response has no 'score' field"))?;
        let raw = raw.as_f64().ok_or_else(|| {
            BenchError::score_missing(format!("judge 'score' is not numeric: {}", raw))
        })?;

        let score = raw.clamp(MIN_SCORE, MAX_SCORE);
        if score != raw {
            warn!(raw, score, "judge score outside 0..=100, clamped");
        }

        let cost = self.gateway.cost(structured.usage, self.gateway.model())?;
        Ok(EvaluationResult {
            score,
            cost: reasoning.cost + cost,
        })
    }

    /// Run both phases for one (expected, output) pair
    pub async fn evaluate(&self, context: &str, target: &str) -> BenchResult<EvaluationResult> {
        let reasoning = self.reason().await?;
        self.score(&reasoning, context, target).await
    }
}
