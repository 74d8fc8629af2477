//! Configuration management for Ember.
//!
//! Loads configuration from ${EMBER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Ember configuration and data directories.
    //!
    //! EMBER_HOME resolution order:
    //! 1. EMBER_HOME environment variable (if set)
    //! 2. ~/.config/ember (default)

    use std::path::PathBuf;

    /// Environment variable that overrides the Ember home directory.
    pub const EMBER_HOME_ENV: &str = "EMBER_HOME";

    /// Returns the Ember home directory.
    ///
    /// Checks EMBER_HOME env var first, falls back to ~/.config/ember
    /// (or `./.ember` when no home directory can be determined).
    pub fn ember_home() -> PathBuf {
        if let Ok(home) = std::env::var(EMBER_HOME_ENV)
            && !home.is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".ember"),
            |h| h.join(".config").join("ember"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ember_home().join("config.toml")
    }

    /// Returns the directory holding diagnostic logs.
    pub fn logs_dir() -> PathBuf {
        ember_home().join("logs")
    }
}

/// Authentication endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the Ember API.
    pub base_url: String,
    /// Path of the sign-in endpoint, joined onto `base_url`.
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: Config::DEFAULT_BASE_URL.to_string(),
            login_path: Config::DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

/// Sign-in screen behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Close the screen once sign-in succeeds.
    pub exit_on_success: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            exit_on_success: true,
        }
    }
}

/// Diagnostic log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives used when `EMBER_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Config::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "https://api.ember.tv";
    const DEFAULT_LOGIN_PATH: &str = "/v1/auth/login";
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.auth.base_url, "https://api.ember.tv");
        assert!(config.ui.exit_on_success);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[auth]\nbase_url = \"http://localhost:8080\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.auth.base_url, "http://localhost:8080");
        assert_eq!(config.auth.login_path, "/v1/auth/login");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[auth\nbase_url = ").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    /// Config init: creates file, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("https://api.ember.tv"));
        assert!(contents.contains("# Log filter"));
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    /// The shipped template must parse back to the Rust defaults.
    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
