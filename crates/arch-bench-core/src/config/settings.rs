//! Environment-backed run settings

use std::path::PathBuf;
use std::time::Duration;

use super::api_key::{ApiKeyInfo, ApiKeySource, resolve_standard_key};
use super::provider::ProviderConfig;
use crate::error::{BenchError, BenchResult};

pub const DEFAULT_EVAL_PROVIDER: &str = "openai";
pub const DEFAULT_EVAL_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BENCHMARKS_DIR: &str = "benchmarks";
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 120;

/// Settings resolved once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Judge provider identifier
    pub eval_provider: String,
    /// Judge model identifier
    pub eval_model: String,
    /// Explicit judge credential (EVAL_API_KEY)
    pub eval_api_key: Option<String>,
    /// Root holding one directory per benchmark
    pub benchmarks_dir: PathBuf,
    /// Deadline applied to every gateway call
    pub call_timeout: Duration,
    /// OPENAI_BASE_URL override
    pub openai_base_url: Option<String>,
    /// OPENAI_ORG_ID header value
    pub openai_organization: Option<String>,
    /// Standard provider keys, captured at load time
    provider_keys: Vec<(String, ApiKeyInfo)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            eval_provider: DEFAULT_EVAL_PROVIDER.to_string(),
            eval_model: DEFAULT_EVAL_MODEL.to_string(),
            eval_api_key: None,
            benchmarks_dir: PathBuf::from(DEFAULT_BENCHMARKS_DIR),
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
            openai_base_url: None,
            openai_organization: None,
            provider_keys: Vec::new(),
        }
    }
}

impl Settings {
    /// Load `.env` (if present) then resolve from the process environment
    pub fn from_env() -> BenchResult<Self> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> BenchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let call_timeout_secs = match non_empty("ARCH_BENCH_CALL_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                BenchError::config(format!(
                    "invalid ARCH_BENCH_CALL_TIMEOUT_SECS value: {}",
                    raw
                ))
            })?,
            None => DEFAULT_CALL_TIMEOUT_SECS,
        };
        if call_timeout_secs == 0 {
            return Err(BenchError::config(
                "ARCH_BENCH_CALL_TIMEOUT_SECS must be greater than zero",
            ));
        }

        let provider_keys = crate::provider::SUPPORTED_PROVIDERS
            .iter()
            .map(|p| (p.to_string(), resolve_standard_key(p, &non_empty)))
            .collect();

        Ok(Self {
            eval_provider: non_empty("EVAL_PROVIDER")
                .map(|p| p.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_EVAL_PROVIDER.to_string()),
            eval_model: non_empty("EVAL_MODEL")
                .unwrap_or_else(|| DEFAULT_EVAL_MODEL.to_string()),
            eval_api_key: non_empty("EVAL_API_KEY"),
            benchmarks_dir: non_empty("ARCH_BENCH_BENCHMARKS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BENCHMARKS_DIR)),
            call_timeout: Duration::from_secs(call_timeout_secs),
            openai_base_url: non_empty("OPENAI_BASE_URL"),
            openai_organization: non_empty("OPENAI_ORG_ID"),
            provider_keys,
        })
    }

    /// Key info for a subject provider
    pub fn provider_key(&self, provider: &str) -> ApiKeyInfo {
        self.provider_keys
            .iter()
            .find(|(name, _)| name == provider)
            .map(|(_, info)| info.clone())
            .unwrap_or_else(ApiKeyInfo::not_found)
    }

    /// Key info for the judge: EVAL_API_KEY first, then the standard variable
    pub fn evaluator_key(&self) -> ApiKeyInfo {
        match &self.eval_api_key {
            Some(key) => ApiKeyInfo {
                key: Some(key.clone()),
                source: ApiKeySource::EvalEnvVar,
                env_var_name: Some("EVAL_API_KEY".to_string()),
            },
            None => self.provider_key(&self.eval_provider),
        }
    }

    /// Connection settings for `provider`, without a credential
    pub fn provider_config(&self, provider: &str) -> ProviderConfig {
        let mut config = ProviderConfig::new(provider);
        if provider == "openai" {
            config.base_url = self.openai_base_url.clone();
            config.organization = self.openai_organization.clone();
        }
        config
    }

    /// Override the credential used for `provider`
    pub fn with_provider_key(mut self, provider: &str, key: impl Into<String>) -> Self {
        let info = ApiKeyInfo {
            key: Some(key.into()),
            source: ApiKeySource::StandardEnvVar,
            env_var_name: None,
        };
        self.provider_keys.retain(|(name, _)| name != provider);
        self.provider_keys.push((provider.to_string(), info));
        self
    }
}
