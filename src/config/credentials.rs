//! API key resolution: managed secrets store first, environment second.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Name of the API key in both the secrets store and the environment.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    SecretsStore,
    Environment,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretsStore => f.write_str("secrets store"),
            Self::Environment => f.write_str("environment"),
        }
    }
}

/// A non-empty API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
    source: KeySource,
}

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.value
    }

    pub const fn source(&self) -> KeySource {
        self.source
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// No usable API key in either tier. Startup cannot continue.
#[derive(Debug, thiserror::Error)]
#[error("GROQ_API_KEY not found / GROQ_API_KEY no encontrada")]
pub struct MissingApiKey {
    pub secrets_path: PathBuf,
}

impl MissingApiKey {
    /// Step-by-step instructions for providing the key.
    pub fn remediation(&self) -> String {
        format!(
            "1. Add the key to the secrets store / Agrega la clave al almacén de secretos:\n     \
             {path}\n     \
             {API_KEY_VAR} = \"gsk_your-full-key\"\n\
             2. Or, locally, create .env with / O, en local, crea .env con:\n     \
             {API_KEY_VAR}=gsk_your-key-without-quotes\n\
             3. Or export it / O expórtala:\n     \
             export {API_KEY_VAR}=\"gsk_your-key\"\n\
             Then start templo again / Luego vuelve a iniciar templo.",
            path = self.secrets_path.display()
        )
    }
}

/// Picks the key by precedence.
///
/// A value present in the secrets store wins even when the environment holds a
/// different one; the environment is consulted only when the store has nothing.
/// An empty winner counts as missing.
pub fn resolve_api_key(secret: Option<String>, env: Option<String>) -> Option<ApiKey> {
    let (value, source) = match secret {
        Some(value) => (value, KeySource::SecretsStore),
        None => (env?, KeySource::Environment),
    };

    if value.trim().is_empty() {
        return None;
    }

    Some(ApiKey { value, source })
}

/// The managed secrets store: a TOML file of `NAME = "value"` entries.
#[derive(Debug, Clone)]
pub struct SecretsStore {
    path: PathBuf,
}

impl SecretsStore {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The store at `$XDG_CONFIG_HOME/templo/secrets.toml`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(paths::secrets_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a secret. A missing file means no secrets.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read secrets file: {}", self.path.display()))?;
        let table: toml::Table = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse secrets file: {}", self.path.display()))?;

        match table.get(name) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => anyhow::bail!(
                "Secret '{name}' in {} must be a string",
                self.path.display()
            ),
        }
    }
}

/// Resolves the API key from `store`, falling back to the environment.
///
/// The environment tier includes a `.env` file in the working directory, which
/// never overrides variables that are already set.
pub fn load_api_key(store: &SecretsStore) -> Result<ApiKey> {
    let secret = store.get(API_KEY_VAR)?;

    if secret.is_none() {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env"),
        }
    }
    let env = std::env::var(API_KEY_VAR).ok();

    let key = resolve_api_key(secret, env).ok_or_else(|| MissingApiKey {
        secrets_path: store.path().to_path_buf(),
    })?;
    tracing::debug!(source = %key.source(), "API key resolved");
    Ok(key)
}
