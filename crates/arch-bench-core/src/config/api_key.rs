//! API key resolution

/// Where a resolved key came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// From EVAL_API_KEY (evaluator only)
    EvalEnvVar,
    /// From the provider's standard variable, e.g. OPENAI_API_KEY
    StandardEnvVar,
    /// No key found
    NotFound,
}

impl std::fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeySource::EvalEnvVar => write!(f, "EVAL_API_KEY"),
            ApiKeySource::StandardEnvVar => write!(f, "env variable"),
            ApiKeySource::NotFound => write!(f, "not found"),
        }
    }
}

/// Resolved key with its source
#[derive(Debug, Clone)]
pub struct ApiKeyInfo {
    pub key: Option<String>,
    pub source: ApiKeySource,
    /// Variable the key was read from
    pub env_var_name: Option<String>,
}

impl ApiKeyInfo {
    pub fn not_found() -> Self {
        Self {
            key: None,
            source: ApiKeySource::NotFound,
            env_var_name: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.key.is_some()
    }

    pub fn masked_key(&self) -> Option<String> {
        self.key.as_ref().map(|k| mask_api_key(k))
    }
}

/// Standard environment variable names for a provider
pub fn standard_env_vars(provider: &str) -> Vec<String> {
    match provider {
        "openai" => vec!["OPENAI_API_KEY".to_string()],
        _ => vec![format!("{}_API_KEY", provider.to_uppercase())],
    }
}

/// Look up the first non-empty standard key for `provider`
pub fn resolve_standard_key<F>(provider: &str, lookup: F) -> ApiKeyInfo
where
    F: Fn(&str) -> Option<String>,
{
    for var in standard_env_vars(provider) {
        if let Some(key) = lookup(&var).filter(|k| !k.is_empty()) {
            return ApiKeyInfo {
                key: Some(key),
                source: ApiKeySource::StandardEnvVar,
                env_var_name: Some(var),
            };
        }
    }
    ApiKeyInfo::not_found()
}

/// Mask an API key for safe display
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..8].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    format!("{}{}...{}", prefix, "*".repeat((len - 12).min(8)), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_standard_env_vars() {
        assert_eq!(standard_env_vars("openai"), vec!["OPENAI_API_KEY"]);
        assert_eq!(standard_env_vars("mistral"), vec!["MISTRAL_API_KEY"]);
    }

    #[test]
    fn test_resolve_standard_key() {
        let env: HashMap<&str, &str> = [("OPENAI_API_KEY", "sk-abc")].into();
        let info = resolve_standard_key("openai", |k| env.get(k).map(|v| v.to_string()));
        assert!(info.is_valid());
        assert_eq!(info.source, ApiKeySource::StandardEnvVar);
        assert_eq!(info.env_var_name.as_deref(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn test_resolve_ignores_empty_values() {
        let info = resolve_standard_key("openai", |_| Some(String::new()));
        assert!(!info.is_valid());
        assert_eq!(info.source, ApiKeySource::NotFound);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key("sk-proj-1234567890abcd"), "sk-proj-********...abcd");
    }
}
