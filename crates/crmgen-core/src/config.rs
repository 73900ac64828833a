//! Generator configuration (`crmgen.toml`)

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Token replaced by the rendered module content inside the template.
pub const DEFAULT_PLACEHOLDER: &str = "{#rendered_content#}";

/// Accepted values of `log_level`, matched case-insensitively.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Generator configuration
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Namespace wrapping the generated classes
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// File name of the generated class file
    #[serde(default = "default_class_file")]
    pub class_file: String,

    /// File name of the generated client module
    #[serde(default = "default_module_file")]
    pub module_file: String,

    /// Template used for the client module (default: the built-in template)
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Placeholder token inside the template
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_namespace() -> String {
    "Crm.Entities".to_string()
}

fn default_class_file() -> String {
    "Entities.cs".to_string()
}

fn default_module_file() -> String {
    "entities.ts".to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            class_file: default_class_file(),
            module_file: default_module_file(),
            template_path: None,
            placeholder: default_placeholder(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from TOML
    pub fn from_toml(content: &str) -> CodegenResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `template_path` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut config = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            config.template_path = config
                .template_path
                .take()
                .map(|template| {
                    if template.is_relative() {
                        base.join(template)
                    } else {
                        template
                    }
                });
        }
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if self.namespace.trim().is_empty() {
            return Err(CodegenError::ConfigError(
                "namespace cannot be empty".to_string(),
            ));
        }
        if self.placeholder.is_empty() {
            return Err(CodegenError::ConfigError(
                "placeholder cannot be empty".to_string(),
            ));
        }
        if self.class_file.trim().is_empty() || self.module_file.trim().is_empty() {
            return Err(CodegenError::ConfigError(
                "output file names cannot be empty".to_string(),
            ));
        }
        if !LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.log_level))
        {
            return Err(CodegenError::ConfigError(format!(
                "unknown log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
