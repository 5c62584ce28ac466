//! Prompt template configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PromptConfig {
    /// File holding a custom prompt template. Empty means built-in.
    #[serde(default)]
    pub template_path: String,
}

impl PromptConfig {
    /// Returns `true` if a custom template is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.template_path.trim().is_empty()
    }

    /// Read the custom template, or `None` when the built-in one applies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TemplateRead`] if the file cannot be read and
    /// [`ConfigError::InvalidValue`] if it is blank.
    pub fn load_template(&self) -> Result<Option<String>, ConfigError> {
        if !self.is_configured() {
            return Ok(None);
        }

        let path = PathBuf::from(self.template_path.trim());
        let template = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::TemplateRead { path, source })?;
        if template.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prompt.template_path".to_string(),
                reason: "template file is empty".to_string(),
            });
        }
        Ok(Some(template))
    }
}
