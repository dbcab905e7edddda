//! Typed structured-output schema
//!
//! The judge and the gateway agree on field names through this type instead
//! of a free-form JSON string. It serializes to a strict JSON Schema object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BenchError, BenchResult};

/// JSON type of a schema property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Number,
    Integer,
    String,
    Boolean,
}

/// One property of a structured-output object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub description: String,
}

/// Object schema requested from a structured-output call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredSchema {
    /// Name reported to the backend
    #[serde(skip)]
    pub name: String,
    /// Description reported to the backend
    #[serde(skip)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl StructuredSchema {
    /// Start an empty object schema
    pub fn object(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: "object".to_string(),
            properties: Map::new(),
            required: Vec::new(),
            additional_properties: false,
        }
    }

    /// Add a required property
    pub fn with_required(mut self, field: &str, property: SchemaProperty) -> Self {
        let value = serde_json::to_value(&property).unwrap_or(Value::Null);
        self.properties.insert(field.to_string(), value);
        self.required.push(field.to_string());
        self
    }

    /// Schema for the judge verdict: `{score: number}` in 0..=100
    pub fn score() -> Self {
        Self::object(
            "GEvalEvaluationScore",
            "Reasons about the evaluation score of a LLM or LVM completion",
        )
        .with_required(
            "score",
            SchemaProperty {
                kind: PropertyType::Number,
                description: "Evaluation score from 0 (worst) to 100 (best)".to_string(),
            },
        )
    }

    /// Schema body as sent in `response_format.json_schema.schema`
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Parse a response body and check every required field is present
    pub fn parse_fields(&self, content: &str) -> BenchResult<Map<String, Value>> {
        let value: Value = serde_json::from_str(content.trim()).map_err(|e| {
            BenchError::malformed(format!("response is not valid JSON: {}", e))
        })?;

        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(BenchError::malformed(format!(
                    "expected a JSON object for schema {}, got {}",
                    self.name, other
                )));
            }
        };

        if let Some(missing) = self.required.iter().find(|f| !fields.contains_key(f.as_str())) {
            return Err(BenchError::malformed(format!(
                "required field '{}' absent from {} response",
                missing, self.name
            )));
        }

        Ok(fields)
    }
}
