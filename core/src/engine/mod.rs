//! Phase engine
//!
//! The state machine that drives a breathing session: it owns the current
//! phase, the countdown within that phase, and (for sequence-shaped
//! patterns) the cursor into the duration sequence, advancing all three on
//! each fixed-size tick.

mod phase_engine;


pub use phase_engine::{PhaseEngine, TICK_SECS};
