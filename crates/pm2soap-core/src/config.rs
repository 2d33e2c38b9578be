//! Configuration management for the converter
//!
//! Loads configuration with priority:
//! 1. Specified config file (TOML)
//! 2. `${VAR_NAME}` references resolved from the environment
//! 3. Defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Converter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub request: RequestConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Attributes written on the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Tool version recorded in the `soapui-version` attribute
    #[serde(default = "default_soapui_version")]
    pub soapui_version: String,

    /// Test run mode recorded in the `runType` attribute
    #[serde(default = "default_run_type")]
    pub run_type: String,

    #[serde(default)]
    pub abort_on_error: bool,
}

/// Per-request defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Media type used when a request carries no Content-Type header
    #[serde(default = "default_media_type")]
    pub default_media_type: String,
}

/// Serialization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            soapui_version: default_soapui_version(),
            run_type: default_run_type(),
            abort_on_error: false,
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            default_media_type: default_media_type(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration from a file, or fall back to defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading configuration from: {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text and resolve environment references.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: ConvertConfig = toml::from_str(contents)
            .map_err(|e| Error::config_error(format!("Failed to parse config: {}", e)))?;

        config.resolve_env_vars()?;
        Ok(config)
    }

    fn resolve_env_vars(&mut self) -> Result<()> {
        self.project.soapui_version = Self::resolve_required(&self.project.soapui_version)?;
        self.project.run_type = Self::resolve_required(&self.project.run_type)?;
        self.request.default_media_type =
            Self::resolve_required(&self.request.default_media_type)?;
        Ok(())
    }

    fn resolve_required(value: &str) -> Result<String> {
        Self::resolve_env_var(value).ok_or_else(|| {
            Error::config_error(format!("Environment variable for '{}' is not set", value))
        })
    }

    /// Resolve a single ${VAR_NAME} reference
    fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }
}

fn default_soapui_version() -> String {
    "5.7.0".to_string()
}

fn default_run_type() -> String {
    "SEQUENTIAL".to_string()
}

fn default_media_type() -> String {
    "application/json".to_string()
}

fn default_indent() -> bool {
    true
}
