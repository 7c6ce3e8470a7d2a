//! Client configuration.
//!
//! Values are layered with the `config` crate: built-in defaults, then an
//! optional TOML file (`mdd.toml` unless told otherwise), then environment
//! variables prefixed with `MDD__`, e.g. `MDD__BASE_URL=https://mdd.example.com`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

use crate::persistence::FileStorage;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mdd.toml";

const ENV_PREFIX: &str = "MDD";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong shape.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A value was read but is unusable.
    #[error("invalid configuration value for {key}: {message}")]
    Invalid {
        /// Offending key.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Settings for talking to the MDD backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Backend root; request paths such as `api/articles` are joined to it.
    pub base_url: Url,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Local storage file. Falls back to the platform data directory.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL should parse"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
            storage_path: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("mdd-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Loads the configuration from `mdd.toml` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads the configuration from `file` and the process environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        Self::build(file, None)
    }

    fn build(file: &Path, env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS)?
            .set_default("user_agent", default_user_agent())?
            .add_source(
                File::from(file.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "timeout_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                key: "base_url",
                message: format!("{} cannot be used as a base URL", self.base_url),
            });
        }
        Ok(())
    }

    /// Returns the local storage file to use, if one can be determined.
    #[must_use]
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path
            .clone()
            .or_else(FileStorage::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = TempDir::new().expect("temp dir");
        let config = ClientConfig::build(&dir.path().join("absent.toml"), env(&[]))
            .expect("defaults load");

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_file_then_environment() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("mdd.toml");
        fs::write(
            &file,
            "base_url = \"https://mdd.example.com/backend\"\ntimeout_ms = 5000\n",
        )
        .expect("write config");

        let config = ClientConfig::build(&file, env(&[("MDD__TIMEOUT_MS", "750")]))
            .expect("config loads");

        assert_eq!(config.base_url.as_str(), "https://mdd.example.com/backend");
        assert_eq!(config.timeout_ms, 750);
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn test_storage_path_override() {
        let dir = TempDir::new().expect("temp dir");
        let config = ClientConfig::build(
            &dir.path().join("absent.toml"),
            env(&[("MDD__STORAGE_PATH", "/tmp/mdd/storage.json")]),
        )
        .expect("config loads");

        assert_eq!(
            config.resolved_storage_path(),
            Some(PathBuf::from("/tmp/mdd/storage.json"))
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let result =
            ClientConfig::build(&dir.path().join("absent.toml"), env(&[("MDD__TIMEOUT_MS", "0")]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "timeout_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_url_is_a_load_error() {
        let dir = TempDir::new().expect("temp dir");
        let result =
            ClientConfig::build(&dir.path().join("absent.toml"), env(&[("MDD__BASE_URL", "not a url")]));

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
