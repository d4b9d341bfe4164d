//! Deterministic probes for observing closure invocations in tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared invocation counter for asserting how often a closure ran.
///
/// Clones share the same underlying counter, so a test can hand one clone to
/// the code under observation and keep another to read the tally. Backed by
/// an atomic, which keeps captures unwind-safe for panic-capture tests.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicU32>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn bump(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of invocations recorded so far.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

/// Ordered label recorder for asserting evaluation order and strictness.
///
/// Clones share the same log. A recorded label list is the observable trace
/// of which expressions actually ran, and in what order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label to the log.
    pub fn record(&self, label: impl Into<String>) {
        self.lock().push(label.into());
    }

    /// Snapshot of all labels recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
