//! Breathing pattern management
//!
//! This module provides:
//! - **Catalog**: The built-in pattern set shipped with the application
//! - **Registry**: The active pattern set (built-in + user-defined),
//!   validated on registration and looked up by name
//! - **Config loading**: TOML-based storage for user-created patterns
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Pattern (catalog / TOML)                     │
//! │  "Box Breathing: inhale 4s, hold 4s, exhale 4s, hold 4s"        │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                    SessionController::change_pattern
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   PhaseEngine (runtime state)                    │
//! │  "Phase: inhale, 2.3s remaining, running"                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  Visual / audio feedback layers
//! ```

mod catalog;
mod config;
mod registry;

pub use catalog::builtin_patterns;
pub use config::{
    ConfigError, PatternFile, default_custom_dir, load_file, load_patterns, save_file,
};
pub use registry::{PatternError, PatternRegistry, validate};
