use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::credentials::ApiKey;
use crate::completion::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::paths;
use crate::session::Language;

/// Settings in the `[templo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemploConfig {
    /// OpenAI-compatible endpoint base URL.
    pub endpoint: Option<String>,
    /// Model identifier. Defaults to the fixed production model; set it only
    /// when a deployment serves that model under another name.
    pub model: Option<String>,
    /// Starting language (`English` or `Español`).
    pub language: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/templo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub templo: TemploConfig,
}

/// Settings a chat session runs with after all sources are merged.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub language: Language,
    pub api_key: ApiKey,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub language: Option<Language>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

/// Merges CLI options, the config file and built-in defaults, in that order.
///
/// # Errors
///
/// Returns an error if the config file names a language that does not exist.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
    api_key: ApiKey,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.templo.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .to_string();

    let model = options
        .model
        .as_ref()
        .or(config_file.templo.model.as_ref())
        .map_or(DEFAULT_MODEL, String::as_str)
        .to_string();

    let language = match (options.language, &config_file.templo.language) {
        (Some(language), _) => language,
        (None, Some(name)) => name
            .parse::<Language>()
            .context("Invalid 'language' in ~/.config/templo/config.toml")?,
        (None, None) => Language::default(),
    };

    Ok(ResolvedConfig {
        endpoint,
        model,
        language,
        api_key,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/templo/config.toml`
    /// or `~/.config/templo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_file()?,
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the file if there is one; a missing file means defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
