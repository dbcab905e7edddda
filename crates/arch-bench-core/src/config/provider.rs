//! Per-provider connection settings

use serde::{Deserialize, Serialize};

/// Connection settings for one provider backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identifier
    pub name: String,
    /// API key for bearer authentication
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API endpoint base URL (overrides the provider default)
    pub base_url: Option<String>,
    /// Organization header (OpenAI)
    pub organization: Option<String>,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Base URL with any trailing slash removed
    pub fn get_base_url(&self) -> String {
        let url = match &self.base_url {
            Some(url) => url.as_str(),
            None => default_base_url(&self.name),
        };
        url.trim_end_matches('/').to_string()
    }

    pub fn get_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

fn default_base_url(provider: &str) -> &'static str {
    match provider {
        "openai" => "https://api.openai.com/v1",
        _ => "http://localhost:8080/v1",
    }
}
