//! Debounced auto-save: a cancellable deferred task.
//!
//! The editing surface saves automatically a fixed delay after the last form
//! change. Each new change cancels the pending save and schedules a fresh
//! one, so only the last schedule inside a window actually runs.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default delay between the last scheduled change and the save firing,
/// in milliseconds.
pub const AUTO_SAVE_DEBOUNCE_MS: u64 = 1000;

/// Schedules at most one deferred task at a time.
///
/// Single-owner: the consuming surface runs on one logical thread, so
/// scheduling takes `&mut self` and needs no locking.
pub struct AutoSave {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for AutoSave {
    fn default() -> Self {
        Self::new(Duration::from_millis(AUTO_SAVE_DEBOUNCE_MS))
    }
}

impl AutoSave {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the configured delay, cancelling any
    /// previously scheduled action that has not fired yet.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Cancel the pending action, if any. A task whose delay has already
    /// elapsed may still complete; one still sleeping never runs.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a scheduled action has neither fired nor been cancelled.
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for AutoSave {
    fn drop(&mut self) {
        self.cancel();
    }
}
