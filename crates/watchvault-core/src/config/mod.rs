//! Watchvault configuration
//!
//! Layering is defaults → TOML file → `WATCHVAULT_*` environment variables,
//! followed by validation. A missing file is not an error.
//!
//! ```toml
//! log_level = "info"
//! wordlist_path = "/usr/share/watchvault/english.txt"
//!
//! [ordering]
//! renormalize_stride = 1000.0
//! min_gap = 1e-9
//! ```

mod validation;

pub use validation::{ConfigValidator, FieldError};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "WATCHVAULT_";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Failed to read config file {path}: {message}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// The file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// An environment override could not be parsed
    #[error("Invalid value for {var}: {value:?}")]
    Env {
        /// Variable name
        var: String,
        /// Raw value
        value: String,
    },

    /// One or more validation rules failed
    #[error("Invalid configuration: {}", format_field_errors(.0))]
    Invalid(Vec<FieldError>),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ordering section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderingConfig {
    /// Spacing between positions after a renormalization
    pub renormalize_stride: f64,
    /// Adjacent gap below which a container is flagged for renormalization
    pub min_gap: f64,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            renormalize_stride: 1000.0,
            min_gap: 1e-9,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchvaultConfig {
    /// Default tracing level when `RUST_LOG` is unset
    pub log_level: String,
    /// One-word-per-line wordlist used for phrase generation
    pub wordlist_path: Option<PathBuf>,
    /// Fractional ordering tuning
    pub ordering: OrderingConfig,
}

impl Default for WatchvaultConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            wordlist_path: None,
            ordering: OrderingConfig::default(),
        }
    }
}

impl WatchvaultConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text, path)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply `WATCHVAULT_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        self.merge_from_vars(std::env::vars())
    }

    /// Apply overrides from explicit `(name, value)` pairs.
    pub fn merge_from_vars<I, K, V>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref());
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            match name {
                "LOG_LEVEL" => self.log_level = value.to_string(),
                "WORDLIST_PATH" => self.wordlist_path = Some(PathBuf::from(value)),
                "ORDERING_RENORMALIZE_STRIDE" => {
                    self.ordering.renormalize_stride = parse_env_f64(key, value)?;
                }
                "ORDERING_MIN_GAP" => {
                    self.ordering.min_gap = parse_env_f64(key, value)?;
                }
                _ => {
                    tracing::warn!(var = key, "Ignoring unknown configuration variable");
                }
            }
        }
        Ok(())
    }

    /// Check every rule and report all failures together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut validator = ConfigValidator::new();
        validator.one_of("log_level", &self.log_level, LOG_LEVELS);

        let mut ordering = validator.for_field("ordering");
        ordering
            .finite_range(
                "renormalize_stride",
                self.ordering.renormalize_stride,
                Some(0.0),
                true,
                None,
            )
            .finite_range("min_gap", self.ordering.min_gap, Some(0.0), false, None);
        validator.merge(ordering);

        let errors = validator.into_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Defaults, then file, then environment, then validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from_file(path)?;
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_env_f64(var: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var: var.to_string(),
        value: value.to_string(),
    })
}
