//! Settings and provider connection configuration

pub mod api_key;
pub mod provider;
pub mod settings;

pub use api_key::{ApiKeyInfo, ApiKeySource, mask_api_key, resolve_standard_key, standard_env_vars};
pub use provider::ProviderConfig;
pub use settings::Settings;
