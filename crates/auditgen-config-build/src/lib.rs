//! Build-time configuration for auditgen, read from `auditgen.toml`.
//!
//! Every key is optional; an absent file or section yields the defaults
//! (`Audit` suffix, the fixed audit package, no output directory override).

use auditgen_schema::{AuditNaming, PACKAGE, SUFFIX};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Default config file name, looked up next to the crate manifest.
pub const CONFIG_FILE: &str = "auditgen.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("config key 'generator.{key}' must not be empty")]
    Empty { key: &'static str },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
}

impl Config {
    /// Parse config text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Load config from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: display,
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.package.trim().is_empty() {
            return Err(ConfigError::Empty { key: "package" });
        }
        if self.generator.suffix.trim().is_empty() {
            return Err(ConfigError::Empty { key: "suffix" });
        }

        Ok(())
    }
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub package: String,
    pub suffix: String,

    /// Root directory for written artifacts; build scripts default to `OUT_DIR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Also write the `AuditInterface` contract once per pass.
    pub emit_interface: bool,
}

impl GeneratorConfig {
    #[must_use]
    pub fn naming(&self) -> AuditNaming {
        AuditNaming::new(self.package.clone(), self.suffix.clone())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: PACKAGE.to_string(),
            suffix: SUFFIX.to_string(),
            out_dir: None,
            emit_interface: false,
        }
    }
}

///
/// TESTS
///
