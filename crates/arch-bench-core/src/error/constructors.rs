//! Constructor methods for BenchError

use super::types::BenchError;

impl BenchError {
    /// Create a config load error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigLoad {
            message: message.into(),
            path: None,
        }
    }

    /// Create a config load error naming the offending path
    pub fn config_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ConfigLoad {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a provider unavailable error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a provider unavailable error carrying the HTTP status
    pub fn provider_status(
        provider: impl Into<String>,
        status_code: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create an attachment error
    pub fn attachment(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AttachmentUnreadable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap a failed chain-of-thought call
    pub fn reasoning(source: BenchError) -> Self {
        Self::ReasoningGenerationFailed {
            source: Box::new(source),
        }
    }

    /// Create a missing score error
    pub fn score_missing(message: impl Into<String>) -> Self {
        Self::ScoreFieldMissing {
            message: message.into(),
        }
    }

    /// Create a pricing error
    pub fn pricing_unknown(model: impl Into<String>) -> Self {
        Self::PricingUnknown {
            model: model.into(),
        }
    }

    /// Create a malformed structured output error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedStructuredOutput {
            message: message.into(),
        }
    }

    /// Create an IO error for a path
    pub fn io_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Wrap with the enclosing test case
    pub fn in_case(self, suite: impl Into<String>, case: impl Into<String>) -> Self {
        Self::TestCase {
            suite: suite.into(),
            case: case.into(),
            source: Box::new(self),
        }
    }

    /// Wrap with the enclosing test suite
    pub fn in_suite(self, suite: impl Into<String>) -> Self {
        Self::TestSuite {
            suite: suite.into(),
            source: Box::new(self),
        }
    }
}
