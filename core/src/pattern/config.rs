//! Configuration loading for user-defined patterns.
//!
//! Custom patterns live in TOML files in the user's config directory, one
//! or more `[[pattern]]` entries per file. Built-in patterns are compiled
//! in; custom files are layered on top of them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use breathe_types::Pattern;

use super::registry::PatternRegistry;

/// Root structure for a pattern config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternFile {
    /// Pattern definitions in this file
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<Pattern>,
}

/// Errors that can occur during pattern config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

/// Build the active pattern set: built-in catalog first, then any custom
/// TOML files from `custom_dir`.
///
/// Individual bad files or bad definitions are logged and skipped so one
/// broken custom pattern can't take the whole set down; only a failure to
/// read the directory itself is fatal.
pub fn load_patterns(custom_dir: Option<&Path>) -> Result<PatternRegistry, ConfigError> {
    let mut registry = PatternRegistry::with_builtins();

    if let Some(dir) = custom_dir
        && dir.exists()
    {
        load_directory(&mut registry, dir)?;
    }

    Ok(registry)
}

/// Load all TOML files from a directory into the registry.
fn load_directory(registry: &mut PatternRegistry, dir: &Path) -> Result<(), ConfigError> {
    let entries = fs::read_dir(dir).map_err(|e| ConfigError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "toml") {
            match load_file(&path) {
                Ok(file) => {
                    for pattern in file.patterns {
                        let name = pattern.name.clone();
                        if let Err(e) = registry.register(pattern) {
                            tracing::warn!(
                                pattern = %name,
                                file = ?path.file_name(),
                                error = %e,
                                "skipping custom pattern"
                            );
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(file = ?path.file_name(), error = %e, "failed to load pattern file");
                }
            }
        }
    }

    Ok(())
}

/// Load a single TOML pattern file.
pub fn load_file(path: &Path) -> Result<PatternFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a pattern file to disk (used when the user creates a new pattern).
pub fn save_file(path: &Path, file: &PatternFile) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(file).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Default directory for user-created pattern files.
pub fn default_custom_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("breathe").join("patterns"))
}
