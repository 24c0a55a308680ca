//! Diagnostic emission for resolution fallbacks.
//!
//! Resolution never fails; when it reverts to its fallback it reports the
//! reason through a [`DiagnosticSink`] instead. The sink is injected so
//! callers (and tests) can substitute their own collector for the default
//! `tracing`-backed one.

use parking_lot::Mutex;

/// A sink for warning diagnostics emitted during strategy resolution.
///
/// Implementations must be safe to share across threads; resolution may run
/// concurrently from any number of callers.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a warning-level diagnostic.
    fn warn(&self, message: &str);
}

/// The default sink, forwarding to [`tracing::warn!`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// A sink that records diagnostics in memory.
///
/// Intended for tests asserting on emitted warnings.
///
/// ```
/// use strata_multitenancy::diagnostics::{CapturingSink, DiagnosticSink};
///
/// let sink = CapturingSink::new();
/// sink.warn("something odd");
/// assert_eq!(sink.messages(), vec!["something odd".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: Mutex<Vec<String>>,
}

impl CapturingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        CapturingSink::default()
    }

    /// Returns a copy of the recorded messages, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl DiagnosticSink for CapturingSink {
    fn warn(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
