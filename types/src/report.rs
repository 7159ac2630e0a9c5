//! Engine state snapshot and session report types.

use serde::{Deserialize, Serialize};

use crate::Phase;

/// Read-only snapshot of the phase engine, polled once per tick by
/// presentation layers. Phase changes are detected by diffing the `phase`
/// field between successive snapshots; there is no event bus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PhaseState {
    pub phase: Phase,

    /// Seconds left in the current phase. Never negative.
    pub time_remaining: f64,

    /// Cursor into a sequence-shaped pattern's duration list. Always 0 for
    /// fixed-phase patterns.
    pub sequence_index: usize,

    pub is_running: bool,
}

/// Summary handed to stats collaborators when a session stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionReport {
    pub pattern_name: String,

    /// Planned duration of one full pass through the pattern, in seconds.
    pub duration_seconds: f64,

    /// Whether at least one full breath cycle finished before the stop.
    pub completed: bool,
}
