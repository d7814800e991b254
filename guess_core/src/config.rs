//! Configuration loading and store path resolution.

use guess_rules::ResponseVocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

/// Environment variable overriding the store path.
pub const STORE_ENV_VAR: &str = "GUESS_STORE";

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "guess.toml";

/// Store file used when nothing else names one.
pub const DEFAULT_STORE_FILE: &str = "subjects.json";

/// Engine configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessConfig {
    /// Location of the knowledge store.
    pub store_path: PathBuf,

    /// Tokens accepted at prompts.
    pub vocabulary: ResponseVocabulary,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            vocabulary: ResponseVocabulary::default(),
        }
    }
}

impl GuessConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicitly named file must exist and parse. Without one,
    /// `guess.toml` in the working directory is used if present, otherwise
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Check the configured values.
    pub fn validate(&self) -> Result<()> {
        self.vocabulary
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        if self.store_path.as_os_str().is_empty() {
            return Err(Error::Config("store_path is empty".to_string()));
        }
        Ok(())
    }

    /// Resolve the store path.
    ///
    /// Priority: command-line argument, then the `GUESS_STORE` environment
    /// variable, then the configured `store_path`.
    pub fn resolve_store_path(&self, cli_arg: Option<&Path>) -> PathBuf {
        self.resolve_store_path_with(
            cli_arg,
            std::env::var_os(STORE_ENV_VAR).map(PathBuf::from),
        )
    }

    fn resolve_store_path_with(
        &self,
        cli_arg: Option<&Path>,
        env_value: Option<PathBuf>,
    ) -> PathBuf {
        if let Some(path) = cli_arg {
            return path.to_path_buf();
        }
        if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
            return path;
        }
        self.store_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuessConfig::default();
        assert_eq!(config.store_path, PathBuf::from("subjects.json"));
        assert_eq!(config.vocabulary, ResponseVocabulary::english());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = GuessConfig::from_toml_str(
            r#"
            store_path = "/tmp/personajes.json"

            [vocabulary]
            yes = "si"
            no = "no"
            unknown = "nose"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_path, PathBuf::from("/tmp/personajes.json"));
        assert_eq!(config.vocabulary, ResponseVocabulary::spanish());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = GuessConfig::from_toml_str("store_path = \"kb.json\"").unwrap();
        assert_eq!(config.store_path, PathBuf::from("kb.json"));
        assert_eq!(config.vocabulary, ResponseVocabulary::english());

        let config = GuessConfig::from_toml_str("[vocabulary]\nunknown = \"dunno\"").unwrap();
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.vocabulary.unknown, "dunno");
        assert_eq!(config.vocabulary.yes, "yes");
    }

    #[test]
    fn test_invalid_vocabulary_rejected() {
        let result = GuessConfig::from_toml_str("[vocabulary]\nyes = \"no\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = GuessConfig::from_toml_str("store_path = ");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = GuessConfig::load(Some(Path::new("/definitely/not/here/guess.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_store_path_priority() {
        let config = GuessConfig {
            store_path: PathBuf::from("from_config.json"),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_store_path_with(
                Some(Path::new("from_cli.json")),
                Some(PathBuf::from("from_env.json"))
            ),
            PathBuf::from("from_cli.json")
        );
        assert_eq!(
            config.resolve_store_path_with(None, Some(PathBuf::from("from_env.json"))),
            PathBuf::from("from_env.json")
        );
        assert_eq!(
            config.resolve_store_path_with(None, Some(PathBuf::new())),
            PathBuf::from("from_config.json")
        );
        assert_eq!(
            config.resolve_store_path_with(None, None),
            PathBuf::from("from_config.json")
        );
    }
}
