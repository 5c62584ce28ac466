//! # act-config
//!
//! Layered configuration loading for Action Mill using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ACT_*` prefix, `__` as separator)
//! 2. Project-level `.act/config.toml`
//! 3. User-level `~/.config/act/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ACT_GENERAL__KEEP_BY_DEFAULT` -> `general.keep_by_default`,
//! `ACT_PROMPT__TEMPLATE_PATH` -> `prompt.template_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use act_config::ActConfig;
//!
//! let config = ActConfig::load_with_dotenv().expect("config");
//! let options = config.load_options();
//! assert!(options.keep_by_default || !config.general.keep_by_default);
//! ```

mod error;
mod general;
mod prompt;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use prompt::PromptConfig;

use act_core::LoadOptions;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".act/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ActConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl ActConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ACT_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("act").join("config.toml"))
    }

    /// Reconciler options derived from `[general]`.
    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            keep_by_default: self.general.keep_by_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ActConfig::default();
        assert!(config.general.keep_by_default);
        assert!(!config.prompt.is_configured());
    }

    #[test]
    fn load_options_follow_general_section() {
        let mut config = ActConfig::default();
        assert!(config.load_options().keep_by_default);
        config.general.keep_by_default = false;
        assert!(!config.load_options().keep_by_default);
    }
}
