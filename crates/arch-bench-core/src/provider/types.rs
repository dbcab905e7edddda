//! Request and response types shared by all backends

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A binary attachment already encoded for transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Base64 (standard alphabet, padded) payload
    pub data: String,
}

impl Attachment {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// `data:` URL form used by chat-completion image parts
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Token counts reported by a backend for one call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }

    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Free-text completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    pub usage: TokenUsage,
}

/// Structured completion, already validated against the requested schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredGeneration {
    pub fields: Map<String, Value>,
    pub usage: TokenUsage,
}
