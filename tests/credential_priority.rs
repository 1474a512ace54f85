#![allow(clippy::unwrap_used)]
//! Credential priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. Managed secrets store (`secrets.toml`)
//! 2. Environment variable (including a local `.env`)
//!
//! Both absent is fatal.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use templo_cli::config::{
    API_KEY_VAR, ConfigFile, KeySource, MissingApiKey, ResolveOptions, SecretsStore, TemploConfig,
    load_api_key, resolve_config,
};
use templo_cli::session::Language;

/// Sets or clears `GROQ_API_KEY` for the duration of a test.
struct EnvGuard {
    original: Option<String>,
}

impl EnvGuard {
    fn set(value: Option<&str>) -> Self {
        let original = std::env::var(API_KEY_VAR).ok();
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe {
            match value {
                Some(v) => std::env::set_var(API_KEY_VAR, v),
                None => std::env::remove_var(API_KEY_VAR),
            }
        }
        Self { original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe {
            match &self.original {
                Some(v) => std::env::set_var(API_KEY_VAR, v),
                None => std::env::remove_var(API_KEY_VAR),
            }
        }
    }
}

fn store_with(temp_dir: &TempDir, contents: Option<&str>) -> SecretsStore {
    let path = temp_dir.path().join("secrets.toml");
    if let Some(contents) = contents {
        fs::write(&path, contents).unwrap();
    }
    SecretsStore::new(path)
}

#[test]
#[serial]
fn test_secrets_store_overrides_environment() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some("GROQ_API_KEY = \"gsk_from_secrets\"\n"));
    let _env = EnvGuard::set(Some("gsk_from_env"));

    let key = load_api_key(&store).unwrap();

    assert_eq!(key.expose(), "gsk_from_secrets");
    assert_eq!(key.source(), KeySource::SecretsStore);
}

#[test]
#[serial]
fn test_environment_used_without_secrets_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, None);
    let _env = EnvGuard::set(Some("gsk_from_env"));

    let key = load_api_key(&store).unwrap();

    assert_eq!(key.expose(), "gsk_from_env");
    assert_eq!(key.source(), KeySource::Environment);
}

#[test]
#[serial]
fn test_environment_used_when_secrets_file_lacks_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some("OTHER_SERVICE_KEY = \"x\"\n"));
    let _env = EnvGuard::set(Some("gsk_from_env"));

    let key = load_api_key(&store).unwrap();

    assert_eq!(key.source(), KeySource::Environment);
}

#[test]
#[serial]
fn test_both_absent_is_missing_api_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, None);
    let _env = EnvGuard::set(None);

    let err = load_api_key(&store).unwrap_err();
    let missing = err.downcast_ref::<MissingApiKey>().unwrap();

    assert_eq!(missing.secrets_path, temp_dir.path().join("secrets.toml"));
}

#[test]
#[serial]
fn test_resolved_config_carries_key_and_cli_language() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some("GROQ_API_KEY = \"gsk_from_secrets\"\n"));
    let _env = EnvGuard::set(None);

    let config = ConfigFile {
        templo: TemploConfig {
            endpoint: None,
            model: None,
            language: Some("English".to_string()),
        },
    };
    let options = ResolveOptions {
        language: Some(Language::Spanish),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config, load_api_key(&store).unwrap()).unwrap();

    assert_eq!(resolved.language, Language::Spanish);
    assert_eq!(resolved.api_key.expose(), "gsk_from_secrets");
}
