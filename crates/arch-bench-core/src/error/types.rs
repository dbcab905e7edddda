//! Core error types for Arch Bench

use thiserror::Error;

/// Result type alias for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Main error type for the benchmark pipeline
///
/// Errors raised by the gateway, invocation service, judge and aggregator are
/// wrapped by the orchestrator in [`BenchError::TestCase`] and
/// [`BenchError::TestSuite`] so the failing suite and case are always named.
/// The original error stays reachable through `source()` and
/// [`BenchError::root_cause`].
#[derive(Error, Debug)]
pub enum BenchError {
    /// Benchmark definition or settings could not be loaded
    #[error("Config load error: {message}")]
    ConfigLoad {
        message: String,
        path: Option<String>,
    },

    /// The provider identifier does not name a known backend
    #[error("Unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    /// No credential was found for a provider that requires one
    #[error("Missing API key for provider {provider} (set {hint})")]
    MissingCredential { provider: String, hint: String },

    /// The backend call failed (network, auth, rate limit, bad status)
    #[error("Provider {provider} unavailable: {message}")]
    ProviderUnavailable {
        provider: String,
        message: String,
        status_code: Option<u16>,
    },

    /// An attachment could not be resolved or read
    #[error("Attachment unreadable: {path}: {message}")]
    AttachmentUnreadable { path: String, message: String },

    /// The judge's chain-of-thought call failed
    #[error("Reasoning generation failed: {source}")]
    ReasoningGenerationFailed {
        #[source]
        source: Box<BenchError>,
    },

    /// The judge's structured response had no usable `score`
    #[error("Score field missing: {message}")]
    ScoreFieldMissing { message: String },

    /// No price is registered for the model identifier
    #[error("Pricing unknown for model: {model}")]
    PricingUnknown { model: String },

    /// A structured response did not match the requested schema
    #[error("Malformed structured output: {message}")]
    MalformedStructuredOutput { message: String },

    /// A provider call exceeded its deadline
    #[error("Provider call timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String, path: Option<String> },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// A test case failed; carries the enclosing suite and case names
    #[error("test case {suite}/{case} failed: {source}")]
    TestCase {
        suite: String,
        case: String,
        #[source]
        source: Box<BenchError>,
    },

    /// A test suite failed
    #[error("test suite {suite} failed: {source}")]
    TestSuite {
        suite: String,
        #[source]
        source: Box<BenchError>,
    },
}

impl BenchError {
    /// Stable identifier for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigLoad { .. } => "BENCH_CONFIG_LOAD",
            Self::UnsupportedProvider { .. } => "BENCH_UNSUPPORTED_PROVIDER",
            Self::MissingCredential { .. } => "BENCH_MISSING_CREDENTIAL",
            Self::ProviderUnavailable { .. } => "BENCH_PROVIDER_UNAVAILABLE",
            Self::AttachmentUnreadable { .. } => "BENCH_ATTACHMENT_UNREADABLE",
            Self::ReasoningGenerationFailed { .. } => "BENCH_REASONING_FAILED",
            Self::ScoreFieldMissing { .. } => "BENCH_SCORE_FIELD_MISSING",
            Self::PricingUnknown { .. } => "BENCH_PRICING_UNKNOWN",
            Self::MalformedStructuredOutput { .. } => "BENCH_MALFORMED_STRUCTURED_OUTPUT",
            Self::Timeout { .. } => "BENCH_TIMEOUT",
            Self::Io { .. } => "BENCH_IO",
            Self::Json { .. } => "BENCH_JSON",
            Self::TestCase { .. } => "BENCH_TEST_CASE",
            Self::TestSuite { .. } => "BENCH_TEST_SUITE",
        }
    }

    /// Innermost error, looking through the suite/case wrappers
    ///
    /// `ReasoningGenerationFailed` is a taxonomy member of its own and is not
    /// unwrapped.
    pub fn root_cause(&self) -> &BenchError {
        match self {
            Self::TestCase { source, .. } | Self::TestSuite { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether a later attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self.root_cause() {
            Self::Timeout { .. } => true,
            Self::ProviderUnavailable { status_code, .. } => {
                matches!(status_code, None | Some(429) | Some(500..=599))
            }
            _ => false,
        }
    }
}
