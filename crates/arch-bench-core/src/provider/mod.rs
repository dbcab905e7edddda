//! Provider gateway contract and backends

pub mod gateway;
pub mod openai;
pub mod pricing;
pub mod schema;
pub mod types;

pub use gateway::ProviderGateway;
pub use openai::OpenAiProvider;
pub use pricing::{ModelPricing, PricingTable, TokenPrice};
pub use schema::{PropertyType, SchemaProperty, StructuredSchema};
pub use types::{Attachment, Generation, StructuredGeneration, TokenUsage};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::config::{ApiKeyInfo, ProviderConfig, Settings, standard_env_vars};
use crate::error::{BenchError, BenchResult};

/// Provider identifiers with a concrete backend
pub const SUPPORTED_PROVIDERS: &[&str] = &["openai"];

/// Backend selected by a runtime identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
        }
    }

    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::OpenAi]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            _ => Err(BenchError::UnsupportedProvider {
                provider: s.to_string(),
            }),
        }
    }
}

/// Builds gateways for the subject and judge roles
pub trait ProviderFactory: Send + Sync {
    /// Gateway for the model under test
    fn create_subject(&self, provider: &str, model: &str) -> BenchResult<Arc<dyn ProviderGateway>>;

    /// Gateway for the judge model
    fn create_evaluator(
        &self,
        provider: &str,
        model: &str,
    ) -> BenchResult<Arc<dyn ProviderGateway>>;
}

/// Factory backed by [`Settings`] and a shared HTTP client
pub struct DefaultProviderFactory {
    settings: Settings,
    http_client: Client,
}

impl DefaultProviderFactory {
    pub fn new(settings: Settings) -> BenchResult<Self> {
        // The call deadline is enforced by the caller; the client only bounds connects.
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| BenchError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            settings,
            http_client,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Gateway used only to enumerate a provider's models; no credential needed
    pub fn catalogue(&self, provider: &str) -> BenchResult<Arc<dyn ProviderGateway>> {
        let kind: ProviderKind = provider.parse()?;
        Ok(self.gateway(kind, "", self.settings.provider_config(kind.name())))
    }

    fn build(
        &self,
        provider: &str,
        model: &str,
        key: ApiKeyInfo,
    ) -> BenchResult<Arc<dyn ProviderGateway>> {
        let kind: ProviderKind = provider.parse()?;
        let api_key = key.key.ok_or_else(|| BenchError::MissingCredential {
            provider: kind.name().to_string(),
            hint: standard_env_vars(kind.name()).join(" or "),
        })?;

        let config = self.settings.provider_config(kind.name()).with_api_key(api_key);
        debug!(
            provider = kind.name(),
            model,
            base_url = %config.get_base_url(),
            "creating provider gateway"
        );
        Ok(self.gateway(kind, model, config))
    }

    fn gateway(
        &self,
        kind: ProviderKind,
        model: &str,
        config: ProviderConfig,
    ) -> Arc<dyn ProviderGateway> {
        match kind {
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
                config,
                model,
                self.http_client.clone(),
            )),
        }
    }
}

impl ProviderFactory for DefaultProviderFactory {
    fn create_subject(&self, provider: &str, model: &str) -> BenchResult<Arc<dyn ProviderGateway>> {
        let key = self.settings.provider_key(provider.trim().to_lowercase().as_str());
        self.build(provider, model, key)
    }

    fn create_evaluator(
        &self,
        provider: &str,
        model: &str,
    ) -> BenchResult<Arc<dyn ProviderGateway>> {
        let key = match self.settings.eval_api_key.as_deref() {
            Some(_) => self.settings.evaluator_key(),
            None => self.settings.provider_key(provider.trim().to_lowercase().as_str()),
        };
        self.build(provider, model, key)
    }
}
