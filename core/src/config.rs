//! Application configuration.
//!
//! Persisted through `confy` in the platform config directory. Missing or
//! unreadable config falls back to defaults so the app always starts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_NAME: &str = "breathe";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory scanned for user-created pattern TOML files.
    pub custom_pattern_dir: Option<PathBuf>,

    /// Where session history is persisted.
    pub history_path: Option<PathBuf>,

    /// Pattern selected when the app starts.
    pub default_pattern: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            custom_pattern_dir: crate::pattern::default_custom_dir(),
            history_path: crate::session::default_history_path(),
            default_pattern: "Box Breathing".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config, falling back to defaults on any error.
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the config. Failures are logged, not propagated.
    pub fn save(&self) {
        if let Err(e) = confy::store(APP_NAME, None, self) {
            tracing::warn!(error = %e, "failed to save config");
        }
    }
}
