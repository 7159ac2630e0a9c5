//! Breathing pattern data types.
//!
//! A `Pattern` is an immutable description of one breathing technique.
//! Timing comes in two shapes: four fixed phase durations, or an ordered
//! sequence of durations that alternate between inhale and exhale. The two
//! shapes are a tagged union so the engine's transition logic is an
//! exhaustive match rather than a set of presence checks.

use serde::{Deserialize, Serialize};

/// Fallback phase duration in seconds, applied when a custom pattern file
/// omits a breathing duration.
pub const DEFAULT_PHASE_SECS: f64 = 4.0;

/// One stage of a breath cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Inhale,
    Hold,
    Exhale,
    HoldAfterExhale,
}

impl Phase {
    /// User-facing label. Both hold phases read as "hold".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inhale => "inhale",
            Self::Hold => "hold",
            Self::Exhale => "exhale",
            Self::HoldAfterExhale => "hold",
        }
    }
}

/// How a pattern's phase durations are described.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PatternTiming {
    /// Four named phase durations, cycled in order.
    FixedPhase {
        #[serde(default = "default_phase_secs")]
        inhale: f64,
        #[serde(default)]
        hold: f64,
        #[serde(default = "default_phase_secs")]
        exhale: f64,
        #[serde(default)]
        hold_after_exhale: f64,
    },

    /// Ordered durations that alternate inhale/exhale (each entry is used
    /// for one inhale and the mirroring exhale), with a single hold applied
    /// after the final exhale of a pass.
    AlternatingSequence {
        sequence: Vec<f64>,
        #[serde(default)]
        hold_after_exhale: f64,
    },
}

/// A named, immutable breathing exercise definition.
///
/// Patterns are never mutated after creation; user-defined patterns are new
/// values appended to the registry, not edits of existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique display name, also used as the lookup key.
    pub name: String,

    /// Human-readable instructions, conventionally segmented by `;` into
    /// ordered steps. Presentation-only; the engine never parses it.
    #[serde(default)]
    pub description: String,

    pub timing: PatternTiming,
}

impl Pattern {
    /// Build a fixed-phase pattern.
    pub fn fixed(
        name: impl Into<String>,
        description: impl Into<String>,
        inhale: f64,
        hold: f64,
        exhale: f64,
        hold_after_exhale: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            timing: PatternTiming::FixedPhase {
                inhale,
                hold,
                exhale,
                hold_after_exhale,
            },
        }
    }

    /// Build an alternating-sequence pattern.
    pub fn sequence(
        name: impl Into<String>,
        description: impl Into<String>,
        sequence: Vec<f64>,
        hold_after_exhale: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            timing: PatternTiming::AlternatingSequence {
                sequence,
                hold_after_exhale,
            },
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.timing, PatternTiming::AlternatingSequence { .. })
    }

    /// Duration of the phase a fresh session opens with: the first sequence
    /// entry, or the inhale duration for fixed-phase patterns.
    pub fn initial_duration(&self) -> f64 {
        match &self.timing {
            PatternTiming::FixedPhase { inhale, .. } => *inhale,
            PatternTiming::AlternatingSequence { sequence, .. } => {
                sequence.first().copied().unwrap_or(DEFAULT_PHASE_SECS)
            }
        }
    }

    /// Planned duration of one full pass through the pattern, in seconds.
    /// Used for session reporting only.
    pub fn total_duration(&self) -> f64 {
        match &self.timing {
            PatternTiming::FixedPhase {
                inhale,
                hold,
                exhale,
                hold_after_exhale,
            } => inhale + hold + exhale + hold_after_exhale,
            PatternTiming::AlternatingSequence {
                sequence,
                hold_after_exhale: _,
            } => sequence.iter().sum(),
        }
    }

    /// Instruction steps, split on the `;` convention used by the built-in
    /// catalog. Empty segments are dropped.
    pub fn description_steps(&self) -> impl Iterator<Item = &str> {
        self.description
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn default_phase_secs() -> f64 {
    DEFAULT_PHASE_SECS
}
