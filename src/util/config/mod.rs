//! dongbei configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. `--config <path>`
//! 2. Project-level (dongbei.toml in the current directory)
//! 3. Default values
//! ```
//!
//! # Example
//!
//! ```toml
//! [codegen]
//! indent = "    "
//! output_var = "_db_output"
//! var_prefix = "_db_var"
//!
//! [run]
//! show_code = true
//!
//! [log]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::interpreter::parser::{is_name, is_reserved};
use crate::middle::codegen::CodegenOptions;
use crate::util::logger::LogLevel;

/// Project config file name
pub const CONFIG_FILE_NAME: &str = "dongbei.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Code generation settings
    #[serde(default)]
    pub codegen: CodegenOptions,
    /// Run settings
    #[serde(default)]
    pub run: RunConfig,
    /// Log settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Print the generated host script before running it
    #[serde(default)]
    pub show_code: bool,
}

/// Log configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the `[codegen]` settings produce a runnable host script
    pub fn validate(&self) -> Result<(), ConfigError> {
        let CodegenOptions {
            indent,
            output_var,
            var_prefix,
        } = &self.codegen;

        if indent.is_empty() || !indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::Invalid(format!(
                "codegen.indent must be one or more spaces or tabs, got {:?}",
                indent
            )));
        }
        if !is_name(var_prefix) {
            return Err(ConfigError::Invalid(format!(
                "codegen.var_prefix {:?} is not a valid host name",
                var_prefix
            )));
        }
        if !is_name(output_var) || is_reserved(output_var) {
            return Err(ConfigError::Invalid(format!(
                "codegen.output_var {:?} is not a valid host name",
                output_var
            )));
        }
        // Generated names are the prefix followed by a counter
        if let Some(rest) = output_var.strip_prefix(var_prefix.as_str()) {
            if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::Invalid(format!(
                    "codegen.output_var {:?} collides with names generated from prefix {:?}",
                    output_var, var_prefix
                )));
            }
        }
        Ok(())
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }
}

/// Load configuration
///
/// An explicit path must exist. Without one, `dongbei.toml` in the current
/// directory is used when present, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_from(path),
        None => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            if path.exists() {
                load_from(&path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn load_from(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!("loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(ConfigError::IoError)?;
    Config::from_toml(&content)
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Config serialize error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            ConfigError::SerializeError(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
