//! Session lifecycle
//!
//! This module provides:
//! - **Controller**: start/stop/reset lifecycle wrapping the phase engine,
//!   with fire-and-forget reporting to stats collaborators
//! - **History**: persistent record of finished sessions plus the stats
//!   derived from it (totals, daily streak, favorite pattern, CSV export)
//! - **Programs**: multi-day guided programs that select a pattern per day

mod controller;
mod history;
mod program;

pub use controller::{ReportSink, SessionController, SinkError};
pub use history::{HistoryError, SessionHistory, SessionRecord, default_history_path};
pub use program::{Program, ProgramProgress, builtin_programs};
