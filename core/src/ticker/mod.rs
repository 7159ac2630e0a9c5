//! Fixed-interval tick driver.
//!
//! A background task that delivers ticks to a shared session controller at
//! the engine's fixed step. Ticks come from a single task, so they are
//! strictly ordered and at most one is in flight at a time; a slow consumer
//! causes missed intervals to be skipped, never replayed in a burst.
//! Deterministic tests bypass the driver and call
//! [`SessionController::tick`] directly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::TICK_SECS;
use crate::session::SessionController;

/// Wall-clock interval between ticks, matching the engine step.
pub const TICK_INTERVAL: Duration = Duration::from_millis((TICK_SECS * 1000.0) as u64);

/// Handle to the background tick task.
///
/// Dropping the driver (or calling [`TickDriver::stop`]) aborts the task
/// immediately, leaving no scheduled invocation behind.
#[derive(Debug)]
pub struct TickDriver {
    task: JoinHandle<()>,
}

impl TickDriver {
    /// Spawn the tick loop on the current tokio runtime.
    pub fn spawn(controller: Arc<RwLock<SessionController>>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                controller.write().await.tick();
            }
        });
        Self { task }
    }

    /// Cancel the tick loop. Takes effect before the next scheduled tick.
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.task.abort();
    }
}
