//! Model pricing table
//!
//! The table is built once on first use and is read-only afterwards. Lookups
//! are exact: an identifier that is neither registered nor an alias is a
//! [`BenchError::PricingUnknown`], never a silent zero.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Price per 1M tokens in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    /// Price per 1M prompt tokens
    pub input: f64,
    /// Price per 1M completion tokens
    pub output: f64,
}

impl TokenPrice {
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }

    /// Calculate cost for given token counts
    pub fn calculate(&self, prompt_tokens: u64, completion_tokens: u64) -> f64 {
        let prompt_cost = (prompt_tokens as f64 / 1_000_000.0) * self.input;
        let completion_cost = (completion_tokens as f64 / 1_000_000.0) * self.output;
        prompt_cost + completion_cost
    }
}

/// Pricing entry for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPricing {
    pub model_id: String,
    pub provider: String,
    pub price: TokenPrice,
}

/// Model identifier to price lookup
#[derive(Debug, Clone, Default)]
pub struct PricingTable {
    models: HashMap<String, ModelPricing>,
    aliases: HashMap<String, String>,
}

static DEFAULT_TABLE: Lazy<PricingTable> = Lazy::new(PricingTable::with_defaults);

impl PricingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide table with the built-in prices
    pub fn global() -> &'static PricingTable {
        &DEFAULT_TABLE
    }

    /// Create a table populated with the built-in prices
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register_defaults();
        table
    }

    /// Register a model price
    pub fn register(&mut self, provider: &str, model_id: &str, price: TokenPrice) {
        self.models.insert(
            model_id.to_string(),
            ModelPricing {
                model_id: model_id.to_string(),
                provider: provider.to_string(),
                price,
            },
        );
    }

    /// Register an alternative name for a registered model
    pub fn register_alias(&mut self, alias: &str, model_id: &str) {
        self.aliases.insert(alias.to_string(), model_id.to_string());
    }

    /// Look up pricing by exact identifier or alias
    pub fn get(&self, model_id: &str) -> Option<&ModelPricing> {
        self.models.get(model_id).or_else(|| {
            self.aliases
                .get(model_id)
                .and_then(|actual| self.models.get(actual))
        })
    }

    /// Cost in USD of one call
    pub fn cost(&self, model_id: &str, prompt_tokens: u64, completion_tokens: u64) -> BenchResult<f64> {
        self.get(model_id)
            .map(|p| p.price.calculate(prompt_tokens, completion_tokens))
            .ok_or_else(|| BenchError::pricing_unknown(model_id))
    }

    /// Model identifiers registered for a provider, sorted
    pub fn models_for(&self, provider: &str) -> Vec<String> {
        let mut models: Vec<String> = self
            .models
            .values()
            .filter(|p| p.provider.eq_ignore_ascii_case(provider))
            .map(|p| p.model_id.clone())
            .collect();
        models.sort();
        models
    }

    fn register_defaults(&mut self) {
        const OPENAI: &[(&str, f64, f64)] = &[
            ("gpt-4", 30.0, 60.0),
            ("gpt-4-32k", 60.0, 120.0),
            ("gpt-4-turbo", 10.0, 30.0),
            ("gpt-4-turbo-2024-04-09", 10.0, 30.0),
            ("gpt-4-0125-preview", 10.0, 30.0),
            ("gpt-4-1106-preview", 10.0, 30.0),
            ("gpt-4-vision-preview", 10.0, 30.0),
            ("gpt-4o", 2.5, 10.0),
            ("gpt-4o-2024-11-20", 2.5, 10.0),
            ("gpt-4o-2024-08-06", 2.5, 10.0),
            ("gpt-4o-2024-05-13", 5.0, 15.0),
            ("gpt-4o-mini", 0.15, 0.6),
            ("gpt-4o-mini-2024-07-18", 0.15, 0.6),
            ("o1", 15.0, 60.0),
            ("o1-2024-12-17", 15.0, 60.0),
            ("o1-preview", 15.0, 60.0),
            ("o1-preview-2024-09-12", 15.0, 60.0),
            ("o1-mini", 3.0, 12.0),
            ("o1-mini-2024-09-12", 3.0, 12.0),
        ];

        for (model, input, output) in OPENAI {
            self.register("openai", model, TokenPrice::new(*input, *output));
        }
        self.register_alias("chatgpt-4o-latest", "gpt-4o");
    }
}
