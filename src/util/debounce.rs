//! Trailing-edge debouncer.
//!
//! Epistemic foundation:
//! - K_i: At most one timer is pending per debouncer instance
//! - K_i: Re-invocation is the only cancellation mechanism
//! - B_i: The wrapped work runs exactly once per quiet period, with the
//!   latest arguments

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays work until a quiet period with no new calls.
///
/// Each [`call`](Debouncer::call) aborts the pending timer (if any) and
/// schedules the new future to run after `wait` of quiescence. If no
/// further calls arrive, the last future runs exactly once.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence window.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `work` to run after the quiescence window, replacing any
    /// previously scheduled work.
    pub fn call<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.pending.lock().expect("debounce slot lock poisoned");
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        let wait = self.wait;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            work.await;
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.pending.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}
