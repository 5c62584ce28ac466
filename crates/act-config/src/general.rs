//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_keep() -> bool {
    true
}

/// Default file written by `export` when no path is given.
fn default_export_path() -> String {
    "actions_filtrees.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether freshly loaded items start out kept.
    #[serde(default = "default_keep")]
    pub keep_by_default: bool,

    /// Default export target for the review loop.
    #[serde(default = "default_export_path")]
    pub export_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            keep_by_default: default_keep(),
            export_path: default_export_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.keep_by_default);
        assert_eq!(config.export_path, "actions_filtrees.json");
    }
}
