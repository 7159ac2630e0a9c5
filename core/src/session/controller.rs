//! Session controller: lifecycle wrapper around the phase engine.

use breathe_types::{Pattern, PhaseState, SessionReport};

use crate::engine::PhaseEngine;
use crate::pattern::{PatternError, PatternRegistry};

/// Errors a report sink may surface. They are logged and dropped by the
/// controller; a failing stats collaborator never affects engine state.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Receives a summary when a session stops.
///
/// Dispatch is fire-and-forget: the controller catches and logs errors and
/// carries on with its own state transition.
pub trait ReportSink {
    fn record_session(&mut self, report: &SessionReport) -> Result<(), SinkError>;
}

/// Owns one phase engine at a time and exposes the session lifecycle to
/// the outside world.
///
/// The pattern registry is injected at construction and patterns are
/// selected by name. Changing patterns tears the engine down and builds a
/// fresh one; two engines never run concurrently.
pub struct SessionController {
    registry: PatternRegistry,
    engine: PhaseEngine,
    report_sinks: Vec<Box<dyn ReportSink + Send + Sync>>,
}

impl SessionController {
    /// Create a controller over the given registry, selecting the named
    /// pattern. Fails fast if the name is unknown.
    pub fn new(registry: PatternRegistry, pattern_name: &str) -> Result<Self, PatternError> {
        let pattern = Self::lookup(&registry, pattern_name)?;
        Ok(Self {
            registry,
            engine: PhaseEngine::new(pattern)?,
            report_sinks: Vec::new(),
        })
    }

    fn lookup(registry: &PatternRegistry, name: &str) -> Result<Pattern, PatternError> {
        registry
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
    }

    /// Register a sink to receive session reports on stop.
    pub fn add_report_sink(&mut self, sink: Box<dyn ReportSink + Send + Sync>) {
        self.report_sinks.push(sink);
    }

    /// Add a user-created pattern to the active set.
    pub fn register_pattern(&mut self, pattern: Pattern) -> Result<(), PatternError> {
        self.registry.register(pattern)
    }

    /// The active pattern set.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Begin (or resume) advancing on ticks. No-op if already running.
    pub fn start(&mut self) {
        if self.engine.is_running() {
            return;
        }
        tracing::info!(pattern = %self.engine.pattern().name, "session started");
        self.engine.set_running(true);
    }

    /// Stop the session and return to the initial state.
    ///
    /// A running session is reported to the registered sinks before the
    /// reset; stopping an already-stopped session just resets.
    pub fn stop(&mut self) {
        if self.engine.is_running() {
            let report = self.build_report();
            tracing::info!(
                pattern = %report.pattern_name,
                completed = report.completed,
                elapsed_secs = self.engine.elapsed_seconds(),
                "session stopped"
            );
            self.dispatch(&report);
        }
        self.engine.rewind();
    }

    /// Return to the initial state without reporting. Used on pattern
    /// changes.
    pub fn reset(&mut self) {
        self.engine.rewind();
    }

    /// Stop the current session (no report) and adopt the named pattern.
    ///
    /// The lookup happens first; on an unknown name the current session is
    /// left untouched.
    pub fn change_pattern(&mut self, name: &str) -> Result<(), PatternError> {
        let pattern = Self::lookup(&self.registry, name)?;
        self.engine = PhaseEngine::new(pattern)?;
        tracing::info!(pattern = %name, "pattern changed");
        Ok(())
    }

    /// Advance the session by one tick. Driven by the tick source.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    /// Read-only snapshot for presentation layers.
    pub fn state(&self) -> PhaseState {
        self.engine.state()
    }

    pub fn pattern(&self) -> &Pattern {
        self.engine.pattern()
    }

    /// Seconds this session has been ticked while running.
    pub fn elapsed_seconds(&self) -> f64 {
        self.engine.elapsed_seconds()
    }

    /// Full breath cycles finished this session.
    pub fn cycles_completed(&self) -> u32 {
        self.engine.cycles_completed()
    }

    fn build_report(&self) -> SessionReport {
        let pattern = self.engine.pattern();
        SessionReport {
            pattern_name: pattern.name.clone(),
            duration_seconds: pattern.total_duration(),
            completed: self.engine.cycles_completed() > 0,
        }
    }

    fn dispatch(&mut self, report: &SessionReport) {
        for sink in &mut self.report_sinks {
            if let Err(e) = sink.record_session(report) {
                tracing::warn!(error = %e, "session report sink failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use breathe_types::Phase;

    use super::*;

    /// Sink that collects reports for inspection.
    #[derive(Default, Clone)]
    struct CollectingSink {
        reports: Arc<Mutex<Vec<SessionReport>>>,
    }

    impl ReportSink for CollectingSink {
        fn record_session(&mut self, report: &SessionReport) -> Result<(), SinkError> {
            self.reports.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    /// Sink that always fails.
    struct BrokenSink;

    impl ReportSink for BrokenSink {
        fn record_session(&mut self, _report: &SessionReport) -> Result<(), SinkError> {
            Err("storage unavailable".into())
        }
    }

    fn box_controller() -> SessionController {
        SessionController::new(PatternRegistry::with_builtins(), "Box Breathing").unwrap()
    }

    fn run_ticks(controller: &mut SessionController, n: u32) {
        for _ in 0..n {
            controller.tick();
        }
    }

    #[test]
    fn test_unknown_pattern_rejected_at_construction() {
        let err = SessionController::new(PatternRegistry::with_builtins(), "Nope").unwrap_err();
        assert_eq!(err, PatternError::UnknownPattern("Nope".into()));
    }

    #[test]
    fn test_start_sets_running() {
        let mut controller = box_controller();
        assert!(!controller.state().is_running);
        controller.start();
        assert!(controller.state().is_running);

        // Starting again is a no-op
        controller.start();
        assert!(controller.state().is_running);
    }

    #[test]
    fn test_stop_mid_cycle_resets_state() {
        let mut controller = box_controller();
        controller.start();
        run_ticks(&mut controller, 25);
        assert!((controller.state().time_remaining - 1.5).abs() < 1e-9);

        controller.stop();
        let state = controller.state();
        assert_eq!(state.phase, Phase::Inhale);
        assert_eq!(state.time_remaining, 4.0);
        assert_eq!(state.sequence_index, 0);
        assert!(!state.is_running);
    }

    #[test]
    fn test_stop_reports_incomplete_session() {
        let sink = CollectingSink::default();
        let mut controller = box_controller();
        controller.add_report_sink(Box::new(sink.clone()));

        controller.start();
        run_ticks(&mut controller, 25);
        controller.stop();

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].pattern_name, "Box Breathing");
        assert_eq!(reports[0].duration_seconds, 16.0);
        assert!(!reports[0].completed);
    }

    #[test]
    fn test_stop_reports_completed_after_full_cycle() {
        let sink = CollectingSink::default();
        let mut controller = box_controller();
        controller.add_report_sink(Box::new(sink.clone()));

        controller.start();
        run_ticks(&mut controller, 160);
        controller.stop();

        let reports = sink.reports.lock().unwrap();
        assert!(reports[0].completed);
    }

    #[test]
    fn test_stop_when_not_running_does_not_report() {
        let sink = CollectingSink::default();
        let mut controller = box_controller();
        controller.add_report_sink(Box::new(sink.clone()));

        controller.stop();
        assert!(sink.reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sink_failure_does_not_affect_stop() {
        let sink = CollectingSink::default();
        let mut controller = box_controller();
        controller.add_report_sink(Box::new(BrokenSink));
        controller.add_report_sink(Box::new(sink.clone()));

        controller.start();
        run_ticks(&mut controller, 10);
        controller.stop();

        // State transition completed and later sinks still ran
        assert!(!controller.state().is_running);
        assert_eq!(controller.state().time_remaining, 4.0);
        assert_eq!(sink.reports.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_change_pattern_while_running_resets() {
        let mut controller = box_controller();
        controller.start();
        run_ticks(&mut controller, 70);

        controller.change_pattern("Spiral Breathing").unwrap();

        let state = controller.state();
        assert!(!state.is_running);
        assert_eq!(state.phase, Phase::Inhale);
        assert_eq!(state.sequence_index, 0);
        assert_eq!(state.time_remaining, 13.0);
    }

    #[test]
    fn test_change_pattern_unknown_name_keeps_current() {
        let mut controller = box_controller();
        controller.start();

        let err = controller.change_pattern("Nope").unwrap_err();
        assert_eq!(err, PatternError::UnknownPattern("Nope".into()));
        assert_eq!(controller.pattern().name, "Box Breathing");
        assert!(controller.state().is_running);
    }

    #[test]
    fn test_register_then_select_custom_pattern() {
        let mut controller = box_controller();
        controller
            .register_pattern(Pattern::fixed("Coherent Breathing", "", 5.0, 0.0, 5.0, 0.0))
            .unwrap();

        controller.change_pattern("Coherent Breathing").unwrap();
        assert_eq!(controller.state().time_remaining, 5.0);
    }

    #[test]
    fn test_reset_does_not_report() {
        let sink = CollectingSink::default();
        let mut controller = box_controller();
        controller.add_report_sink(Box::new(sink.clone()));

        controller.start();
        run_ticks(&mut controller, 50);
        controller.reset();

        assert!(sink.reports.lock().unwrap().is_empty());
        assert!(!controller.state().is_running);
    }
}
