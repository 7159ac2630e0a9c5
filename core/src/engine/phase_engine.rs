//! The breathing phase state machine.

use breathe_types::{Pattern, PatternTiming, Phase, PhaseState};

use crate::pattern::{PatternError, validate};

/// Length of one engine tick in seconds. The tick driver fires at this
/// interval, and the same value doubles as the phase-completion epsilon so
/// float drift in the countdown never pushes a transition late.
pub const TICK_SECS: f64 = 0.1;

/// Slack added to the completion comparison. Durations that are exact
/// multiples of the tick would otherwise sit right on the threshold, where
/// accumulated rounding error (well under 1e-12 for any plausible session)
/// could push the transition one tick late.
const DRIFT_SLACK: f64 = 1e-9;

/// Drives a breathing pattern through its phases, one fixed-size tick at a
/// time.
///
/// The engine is synchronous and performs no I/O; it has exactly one writer
/// (the tick callback) and any number of read-only observers polling
/// [`PhaseEngine::state`]. Each phase is visited for at least one tick,
/// including zero-duration phases, which is a deliberate consequence of
/// fixed-step polling.
#[derive(Debug, Clone)]
pub struct PhaseEngine {
    pattern: Pattern,
    phase: Phase,
    time_remaining: f64,
    sequence_index: usize,
    is_running: bool,
    ticks_elapsed: u64,
    cycles_completed: u32,
}

impl PhaseEngine {
    /// Create an engine for the given pattern.
    ///
    /// The pattern is validated here so the tick path can index into the
    /// sequence without checks.
    pub fn new(pattern: Pattern) -> Result<Self, PatternError> {
        validate(&pattern)?;
        let time_remaining = pattern.initial_duration();
        Ok(Self {
            pattern,
            phase: Phase::Inhale,
            time_remaining,
            sequence_index: 0,
            is_running: false,
            ticks_elapsed: 0,
            cycles_completed: 0,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    /// Wall-clock time this engine has been ticked while running.
    pub fn elapsed_seconds(&self) -> f64 {
        self.ticks_elapsed as f64 * TICK_SECS
    }

    /// Full breath cycles finished since the last rewind.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// Read-only snapshot for presentation layers, taken once per tick.
    pub fn state(&self) -> PhaseState {
        PhaseState {
            phase: self.phase,
            time_remaining: self.time_remaining,
            sequence_index: self.sequence_index,
            is_running: self.is_running,
        }
    }

    /// Return to the initial state: inhale phase, sequence cursor at 0,
    /// countdown at the pattern's initial duration, not running.
    pub fn rewind(&mut self) {
        self.phase = Phase::Inhale;
        self.sequence_index = 0;
        self.time_remaining = self.pattern.initial_duration();
        self.is_running = false;
        self.ticks_elapsed = 0;
        self.cycles_completed = 0;
    }

    /// Advance the session by one fixed-size time step.
    ///
    /// No-op while paused. The completion test is `time_remaining <=
    /// TICK_SECS` rather than `<= 0`, checked before subtracting, so the
    /// countdown never goes negative and accumulated float drift is
    /// absorbed by the step-sized epsilon.
    pub fn tick(&mut self) {
        if !self.is_running {
            return;
        }
        self.ticks_elapsed += 1;

        if self.time_remaining <= TICK_SECS + DRIFT_SLACK {
            self.advance_phase();
        } else {
            self.time_remaining -= TICK_SECS;
        }
    }

    /// Move to the next phase and load its duration.
    fn advance_phase(&mut self) {
        let (next, duration) = match &self.pattern.timing {
            PatternTiming::FixedPhase {
                inhale,
                hold,
                exhale,
                hold_after_exhale,
            } => match self.phase {
                Phase::Inhale => (Phase::Hold, *hold),
                Phase::Hold => (Phase::Exhale, *exhale),
                Phase::Exhale => (Phase::HoldAfterExhale, *hold_after_exhale),
                Phase::HoldAfterExhale => (Phase::Inhale, *inhale),
            },
            PatternTiming::AlternatingSequence {
                sequence,
                hold_after_exhale,
            } => match self.phase {
                // The exhale mirrors the just-completed inhale's duration.
                // Hold is unreachable for sequence patterns; treated as an
                // inhale completion to keep the match total.
                Phase::Inhale | Phase::Hold => (Phase::Exhale, sequence[self.sequence_index]),
                Phase::Exhale => {
                    if self.sequence_index + 1 >= sequence.len() {
                        (Phase::HoldAfterExhale, *hold_after_exhale)
                    } else {
                        self.sequence_index += 1;
                        (Phase::Inhale, sequence[self.sequence_index])
                    }
                }
                Phase::HoldAfterExhale => {
                    self.sequence_index = 0;
                    (Phase::Inhale, sequence[0])
                }
            },
        };

        if self.phase == Phase::HoldAfterExhale && next == Phase::Inhale {
            self.cycles_completed += 1;
            tracing::debug!(
                pattern = %self.pattern.name,
                cycles = self.cycles_completed,
                "breath cycle completed"
            );
        }

        self.phase = next;
        self.time_remaining = duration;
    }
}
