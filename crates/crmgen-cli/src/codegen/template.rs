//! Template assembly for the client module.
//!
//! The template is an opaque string containing a placeholder token. Rendering
//! replaces the first occurrence of the token with the generated content.

use crmgen_core::{CodegenError, CodegenResult, DEFAULT_PLACEHOLDER, GeneratorConfig};
use std::path::Path;

/// Built-in module template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/module.ts.tmpl");

/// Result of substituting content into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The placeholder was found and replaced.
    Replaced(String),

    /// The template has no placeholder; the template is returned unchanged and
    /// the content is dropped.
    PlaceholderMissing(String),
}

impl Substitution {
    /// The resulting text, whatever the outcome.
    pub fn text(&self) -> &str {
        match self {
            Substitution::Replaced(text) | Substitution::PlaceholderMissing(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Substitution::Replaced(text) | Substitution::PlaceholderMissing(text) => text,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, Substitution::Replaced(_))
    }
}

/// A module template and its placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    body: String,
    placeholder: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_PLACEHOLDER)
    }
}

impl Template {
    pub fn new(body: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Load a template body from a file.
    pub fn from_file(
        path: impl AsRef<Path>,
        placeholder: impl Into<String>,
    ) -> CodegenResult<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::TemplateError(format!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Self::new(body, placeholder))
    }

    /// Template named by the configuration, or the built-in one.
    pub fn from_config(config: &GeneratorConfig) -> CodegenResult<Self> {
        match &config.template_path {
            Some(path) => Self::from_file(path, config.placeholder.as_str()),
            None => Ok(Self::new(DEFAULT_TEMPLATE, config.placeholder.as_str())),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Number of placeholder occurrences in the body.
    pub fn placeholder_count(&self) -> usize {
        if self.placeholder.is_empty() {
            return 0;
        }
        self.body.matches(self.placeholder.as_str()).count()
    }

    /// Check that the placeholder appears exactly once.
    pub fn validate(&self) -> CodegenResult<()> {
        match self.placeholder_count() {
            1 => Ok(()),
            0 => Err(CodegenError::TemplateError(format!(
                "placeholder '{}' not found",
                self.placeholder
            ))),
            n => Err(CodegenError::TemplateError(format!(
                "placeholder '{}' appears {n} times",
                self.placeholder
            ))),
        }
    }

    /// Replace the first placeholder occurrence with `content`.
    pub fn render(&self, content: &str) -> Substitution {
        match self.placeholder_count() {
            0 => {
                tracing::warn!(
                    placeholder = %self.placeholder,
                    "Template has no placeholder, rendered content dropped"
                );
                Substitution::PlaceholderMissing(self.body.clone())
            }
            count => {
                if count > 1 {
                    tracing::warn!(
                        placeholder = %self.placeholder,
                        count,
                        "Template placeholder appears more than once, replacing the first"
                    );
                }
                Substitution::Replaced(self.body.replacen(self.placeholder.as_str(), content, 1))
            }
        }
    }
}
