//! Provider gateway contract

use async_trait::async_trait;

use super::pricing::PricingTable;
use super::schema::StructuredSchema;
use super::types::{Attachment, Generation, StructuredGeneration, TokenUsage};
use crate::error::BenchResult;

/// Uniform capability over heterogeneous model backends
///
/// One implementation exists per backend. Calls are single round-trips with
/// no retries; any backend failure surfaces as
/// [`BenchError::ProviderUnavailable`](crate::error::BenchError::ProviderUnavailable).
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Provider identifier, e.g. `openai`
    fn provider_name(&self) -> &str;

    /// Model this gateway talks to
    fn model(&self) -> &str;

    /// Free-text completion. `system_prompt` may be empty.
    async fn generate(
        &self,
        system_prompt: &str,
        query: &str,
        attachments: &[Attachment],
    ) -> BenchResult<Generation>;

    /// Completion constrained to `schema`
    async fn generate_structured(
        &self,
        system_prompt: &str,
        query: &str,
        schema: &StructuredSchema,
    ) -> BenchResult<StructuredGeneration>;

    /// Model identifiers this backend can serve
    fn list_models(&self) -> Vec<String>;

    /// Cost in USD of `usage` on `model`
    fn cost(&self, usage: TokenUsage, model: &str) -> BenchResult<f64> {
        PricingTable::global().cost(model, usage.prompt_tokens, usage.completion_tokens)
    }
}
