//! Reporter trait for dependency injection
//!
//! Discovery and removal report what they do through this trait instead of
//! logging globally, so tests can capture the messages and the binary can
//! route them to `tracing`.

/// Sink for human-readable progress and status messages.
pub trait Reporter: Send + Sync {
    /// Log a diagnostic message, shown only at debug verbosity.
    fn debug(&self, msg: &str);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a success message.
    fn success(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);
}

/// Forwards every message to the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }
    fn success(&self, msg: &str) {
        tracing::info!("{msg}");
    }
    fn warning(&self, msg: &str) {
        tracing::warn!("{msg}");
    }
    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

/// A no-op reporter for silent operations (e.g., scripting, testing).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn debug(&self, _: &str) {}
    fn info(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn error(&self, _: &str) {}
}
