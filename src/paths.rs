//! XDG-style locations of the configuration and secrets files.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations so
//! the files live in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "templo";

/// Returns the configuration directory for templo.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/templo` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/templo` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }
    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}

/// `config.toml` inside [`config_dir`].
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// `secrets.toml` inside [`config_dir`]: the managed secrets store.
pub fn secrets_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("secrets.toml"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/templo"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_xdg_override_applies_to_files() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/templo"));
        assert_eq!(
            config_file().unwrap(),
            PathBuf::from("/custom/config/templo/config.toml")
        );
        assert_eq!(
            secrets_file().unwrap(),
            PathBuf::from("/custom/config/templo/secrets.toml")
        );

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}
