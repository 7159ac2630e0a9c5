pub mod config;
pub mod engine;
pub mod pattern;
pub mod session;
pub mod ticker;

// Re-exports for convenience
pub use config::AppConfig;
pub use engine::{PhaseEngine, TICK_SECS};
pub use pattern::{PatternError, PatternRegistry};
pub use session::{ReportSink, SessionController, SessionHistory};
pub use ticker::TickDriver;
