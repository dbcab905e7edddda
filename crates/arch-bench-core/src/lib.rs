//! Arch Bench core
//!
//! Error taxonomy, settings and the provider gateway shared by the evaluation
//! engine and the command line tool.

pub mod config;
pub mod error;
pub mod provider;

pub use config::{ProviderConfig, Settings};
pub use error::{BenchError, BenchResult};
pub use provider::{
    Attachment, DefaultProviderFactory, Generation, PricingTable, ProviderFactory,
    ProviderGateway, ProviderKind, StructuredGeneration, StructuredSchema, TokenUsage,
};
