//! Convertor configuration.
//!
//! Loaded through `figment`: built-in defaults, then an optional YAML file,
//! then `ODATA_JPA_*` environment variables.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides, e.g. `ODATA_JPA_MAX_INHERITANCE_DEPTH`.
pub const ENV_PREFIX: &str = "ODATA_JPA_";

/// Name of the generic root type that ends every superclass walk.
pub const DEFAULT_ROOT_TYPE: &str = "java.lang.Object";

const DEFAULT_MAX_INHERITANCE_DEPTH: usize = 64;

/// Keys read from the environment; other `ODATA_JPA_*` variables are ignored.
const ENV_KEYS: [&str; 2] = ["max_inheritance_depth", "root_type"];

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file '{0}' not found")]
    FileNotFound(String),

    #[error("invalid convertor config: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertorConfig {
    /// Upper bound on superclasses visited while resolving a temporal annotation.
    /// The declaring type itself is not counted.
    pub max_inheritance_depth: usize,
    /// Type at which the superclass walk stops without probing.
    pub root_type: String,
}

impl Default for ConvertorConfig {
    fn default() -> Self {
        Self {
            max_inheritance_depth: DEFAULT_MAX_INHERITANCE_DEPTH,
            root_type: DEFAULT_ROOT_TYPE.to_owned(),
        }
    }
}

impl ConvertorConfig {
    /// Extract and validate the config from an assembled figment.
    ///
    /// # Errors
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overlaid with the YAML file at `path`, overlaid with the environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file is missing or the merged config is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));
        let config = Self::from_figment(&figment)?;
        tracing::debug!(
            path = %path.display(),
            max_inheritance_depth = config.max_inheritance_depth,
            root_type = %config.root_type,
            "convertor config loaded"
        );
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidValue` for a zero depth or an empty root type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_inheritance_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_inheritance_depth",
                reason: "must be greater than zero".to_owned(),
            });
        }
        if self.root_type.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "root_type",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}
