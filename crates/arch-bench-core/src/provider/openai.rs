//! OpenAI chat-completions backend

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

use super::gateway::ProviderGateway;
use super::pricing::PricingTable;
use super::schema::StructuredSchema;
use super::types::{Attachment, Generation, StructuredGeneration, TokenUsage};
use crate::config::ProviderConfig;
use crate::error::{BenchError, BenchResult, sanitize_error_body};

const PROVIDER: &str = "openai";

/// OpenAI provider handler
pub struct OpenAiProvider {
    config: ProviderConfig,
    model: String,
    http_client: Client,
}

impl OpenAiProvider {
    pub fn new(config: ProviderConfig, model: impl Into<String>, http_client: Client) -> Self {
        Self {
            config,
            model: model.into(),
            http_client,
        }
    }

    fn build_messages(system_prompt: &str, query: &str, attachments: &[Attachment]) -> Value {
        let mut messages = Vec::with_capacity(2);
        if !system_prompt.is_empty() {
            messages.push(json!({ "role": "system", "content": system_prompt }));
        }

        if attachments.is_empty() {
            messages.push(json!({ "role": "user", "content": query }));
        } else {
            let mut parts = vec![json!({ "type": "text", "text": query })];
            parts.extend(attachments.iter().map(|a| {
                json!({ "type": "image_url", "image_url": { "url": a.data_url() } })
            }));
            messages.push(json!({ "role": "user", "content": parts }));
        }

        Value::Array(messages)
    }

    async fn send(&self, body: &Value) -> BenchResult<Value> {
        let url = format!("{}/chat/completions", self.config.get_base_url());
        let mut request = self.http_client.post(&url).json(body);

        if let Some(api_key) = self.config.get_api_key() {
            request = request.bearer_auth(api_key);
        }
        if let Some(org) = &self.config.organization {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BenchError::provider(PROVIDER, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BenchError::provider_status(
                PROVIDER,
                status.as_u16(),
                format!("API error (status {}): {}", status, sanitize_error_body(&body)),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BenchError::provider(PROVIDER, format!("unreadable response body: {}", e)))
    }

    /// First choice's message content plus usage
    fn parse_completion(response: &Value) -> BenchResult<(String, TokenUsage)> {
        let content = response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| BenchError::provider(PROVIDER, "response contained no message content"))?;

        let usage = response
            .get("usage")
            .map(|u| {
                TokenUsage::new(
                    u["prompt_tokens"].as_u64().unwrap_or(0),
                    u["completion_tokens"].as_u64().unwrap_or(0),
                )
            })
            .unwrap_or_default();

        Ok((content.to_string(), usage))
    }
}

#[async_trait]
impl ProviderGateway for OpenAiProvider {
    fn provider_name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, system_prompt, query, attachments), fields(model = %self.model, attachments = attachments.len()), level = "debug")]
    async fn generate(
        &self,
        system_prompt: &str,
        query: &str,
        attachments: &[Attachment],
    ) -> BenchResult<Generation> {
        let body = json!({
            "model": self.model,
            "messages": Self::build_messages(system_prompt, query, attachments),
        });

        let response = self.send(&body).await?;
        let (text, usage) = Self::parse_completion(&response)?;
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "openai completion received"
        );
        Ok(Generation { text, usage })
    }

    #[instrument(skip(self, system_prompt, query, schema), fields(model = %self.model, schema = %schema.name), level = "debug")]
    async fn generate_structured(
        &self,
        system_prompt: &str,
        query: &str,
        schema: &StructuredSchema,
    ) -> BenchResult<StructuredGeneration> {
        let body = json!({
            "model": self.model,
            "messages": Self::build_messages(system_prompt, query, &[]),
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "description": schema.description,
                    "schema": schema.to_json(),
                    "strict": true,
                },
            },
        });

        let response = self.send(&body).await?;
        let (content, usage) = Self::parse_completion(&response)?;
        let fields = schema.parse_fields(&content)?;
        Ok(StructuredGeneration { fields, usage })
    }

    fn list_models(&self) -> Vec<String> {
        PricingTable::global().models_for(PROVIDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(base_url: &str) -> OpenAiProvider {
        let config = ProviderConfig::new("openai")
            .with_api_key("test-api-key")
            .with_base_url(base_url);
        let http_client = Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");
        OpenAiProvider::new(config, "gpt-4o-mini", http_client)
    }

    fn mock_completion(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46 }
        })
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "Be brief." },
                    { "role": "user", "content": "Describe a monolith." }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("One deployable unit.")))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let generation = provider
            .generate("Be brief.", "Describe a monolith.", &[])
            .await
            .unwrap();

        assert_eq!(generation.text, "One deployable unit.");
        assert_eq!(generation.usage, TokenUsage::new(12, 34));
    }

    #[tokio::test]
    async fn test_generate_without_system_prompt_sends_only_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [{ "role": "user", "content": "hi" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("hello")))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let generation = provider.generate("", "hi", &[]).await.unwrap();
        assert_eq!(generation.text, "hello");
    }

    #[tokio::test]
    async fn test_generate_with_image_parts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "What is shown?" },
                        { "type": "image_url", "image_url": { "url": "data:image/png;base64,AAAA" } }
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("A diagram.")))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let attachments = vec![Attachment::new("image/png", "AAAA")];
        let generation = provider
            .generate("", "What is shown?", &attachments)
            .await
            .unwrap();
        assert_eq!(generation.text, "A diagram.");
    }

    #[tokio::test]
    async fn test_generate_structured_requests_json_schema() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {
                        "name": "GEvalEvaluationScore",
                        "strict": true,
                        "schema": { "type": "object", "required": ["score"] }
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion(r#"{"score": 72.5}"#)))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let structured = provider
            .generate_structured("judge", "evaluate", &StructuredSchema::score())
            .await
            .unwrap();

        assert_eq!(structured.fields["score"].as_f64(), Some(72.5));
        assert_eq!(structured.usage.total(), 46);
    }

    #[tokio::test]
    async fn test_generate_structured_malformed_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("Score: 4/5")))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider
            .generate_structured("judge", "evaluate", &StructuredSchema::score())
            .await
            .unwrap_err();
        assert!(matches!(err, BenchError::MalformedStructuredOutput { .. }));
    }

    #[tokio::test]
    async fn test_api_error_401() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "Invalid API key"}})),
            )
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("", "Hello!", &[]).await.unwrap_err();
        match err {
            BenchError::ProviderUnavailable {
                status_code,
                message,
                ..
            } => {
                assert_eq!(status_code, Some(401));
                assert!(message.contains("Invalid API key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_429_rate_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "message": "Rate limit exceeded", "type": "rate_limit_error" }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("", "Hello!", &[]).await.unwrap_err();
        assert!(err.is_transient());
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[tokio::test]
    async fn test_api_error_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("", "Hello!", &[]).await.unwrap_err();
        assert_eq!(err.error_code(), "BENCH_PROVIDER_UNAVAILABLE");
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_missing_choices_is_provider_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("", "Hello!", &[]).await.unwrap_err();
        assert!(err.to_string().contains("no message content"));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let provider = create_test_provider("http://127.0.0.1:1");
        let err = provider.generate("", "Hello!", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            BenchError::ProviderUnavailable { status_code: None, .. }
        ));
    }

    #[test]
    fn test_list_models_comes_from_pricing_table() {
        let provider = create_test_provider("http://localhost");
        let models = provider.list_models();
        assert!(models.contains(&"gpt-4o".to_string()));
        assert!(models.contains(&"o1".to_string()));
    }

    #[test]
    fn test_cost_uses_requested_model() {
        let provider = create_test_provider("http://localhost");
        let cost = provider.cost(TokenUsage::new(1_000_000, 0), "gpt-4").unwrap();
        assert!((cost - 30.0).abs() < 1e-9);
        assert!(provider.cost(TokenUsage::new(1, 1), "mystery").is_err());
    }
}
