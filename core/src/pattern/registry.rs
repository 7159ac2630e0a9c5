//! The active pattern set.
//!
//! The registry is an explicit value owned by whichever layer assembles the
//! application and handed to the session controller, not ambient global
//! state. Patterns are validated when registered, so downstream code can
//! rely on every registered pattern being well-formed.

use breathe_types::{Pattern, PatternTiming};
use thiserror::Error;

use super::catalog::builtin_patterns;

/// Rejection reasons for a malformed or conflicting pattern.
///
/// Validation happens at registration and selection time so a bad pattern
/// never reaches the phase engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("pattern name is empty")]
    EmptyName,

    #[error("pattern `{0}` has an empty sequence")]
    EmptySequence(String),

    #[error("pattern `{pattern}` has a non-positive sequence entry ({value})")]
    BadSequenceEntry { pattern: String, value: f64 },

    #[error("pattern `{pattern}` has an invalid `{field}` duration ({value})")]
    BadDuration {
        pattern: String,
        field: &'static str,
        value: f64,
    },

    #[error("pattern `{0}` has all-zero phase durations")]
    AllZeroDurations(String),

    #[error("a pattern named `{0}` is already registered")]
    DuplicateName(String),

    #[error("no pattern named `{0}` is registered")]
    UnknownPattern(String),
}

/// Check that a pattern is well-formed enough to drive the phase engine.
///
/// Fixed-phase durations may be zero (a zero-duration phase is skipped on
/// the next tick) but not negative or non-finite, and not all zero.
/// Sequence entries must be strictly positive.
pub fn validate(pattern: &Pattern) -> Result<(), PatternError> {
    if pattern.name.trim().is_empty() {
        return Err(PatternError::EmptyName);
    }

    match &pattern.timing {
        PatternTiming::FixedPhase {
            inhale,
            hold,
            exhale,
            hold_after_exhale,
        } => {
            let fields = [
                ("inhale", *inhale),
                ("hold", *hold),
                ("exhale", *exhale),
                ("hold_after_exhale", *hold_after_exhale),
            ];
            for (field, value) in fields {
                if !value.is_finite() || value < 0.0 {
                    return Err(PatternError::BadDuration {
                        pattern: pattern.name.clone(),
                        field,
                        value,
                    });
                }
            }
            if fields.iter().all(|(_, value)| *value == 0.0) {
                return Err(PatternError::AllZeroDurations(pattern.name.clone()));
            }
        }
        PatternTiming::AlternatingSequence {
            sequence,
            hold_after_exhale,
        } => {
            if sequence.is_empty() {
                return Err(PatternError::EmptySequence(pattern.name.clone()));
            }
            for value in sequence {
                if !value.is_finite() || *value <= 0.0 {
                    return Err(PatternError::BadSequenceEntry {
                        pattern: pattern.name.clone(),
                        value: *value,
                    });
                }
            }
            if !hold_after_exhale.is_finite() || *hold_after_exhale < 0.0 {
                return Err(PatternError::BadDuration {
                    pattern: pattern.name.clone(),
                    field: "hold_after_exhale",
                    value: *hold_after_exhale,
                });
            }
        }
    }

    Ok(())
}

/// The active pattern set, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

impl PatternRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for pattern in builtin_patterns() {
            // Builtins are validated by tests; a failure here is a bug.
            if let Err(e) = registry.register(pattern) {
                tracing::error!(error = %e, "built-in pattern rejected");
            }
        }
        registry
    }

    /// Validate and append a pattern. Names must be unique within the set.
    pub fn register(&mut self, pattern: Pattern) -> Result<(), PatternError> {
        validate(&pattern)?;
        if self.find_by_name(&pattern.name).is_some() {
            return Err(PatternError::DuplicateName(pattern.name));
        }
        self.patterns.push(pattern);
        Ok(())
    }

    /// Look up a pattern by its unique name.
    pub fn find_by_name(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Remove a pattern by name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.patterns.len();
        self.patterns.retain(|p| p.name != name);
        self.patterns.len() != before
    }

    /// All registered patterns, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
