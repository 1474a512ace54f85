//! Configuration file and credential resolution.

mod credentials;
mod manager;

pub use credentials::{
    API_KEY_VAR, ApiKey, KeySource, MissingApiKey, SecretsStore, load_api_key, resolve_api_key,
};
pub use manager::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, TemploConfig, resolve_config,
};
