//! Cooperative cancellation for long-running searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// The controller thread calls [`cancel`](Context::cancel); the search
/// worker polls [`is_done`](Context::is_done) once at the top of each main
/// loop iteration and exits with an empty path when it observes the flag.
/// Cancellation is never preemptive — the worker always finishes the
/// iteration it is in, so its frontier and score tables stay consistent.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation. Non-blocking; observed at loop-iteration
    /// granularity by the worker.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
