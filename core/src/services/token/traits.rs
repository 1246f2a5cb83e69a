//! Collaborator traits for the token service

/// Trait for failure log sink integration
///
/// The token service reports every failed operation through this trait with
/// a fixed message and the underlying cause. Successful operations emit
/// nothing.
pub trait FailureLoggerTrait: Send + Sync {
    /// Record an operation failure and its underlying cause
    fn error(&self, message: &str, cause: &str);
}

/// Failure logger backed by the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureLogger;

impl FailureLoggerTrait for TracingFailureLogger {
    fn error(&self, message: &str, cause: &str) {
        tracing::error!(error = cause, "{}", message);
    }
}

// Also implement for () to allow discarding failure logs in simple setups
impl FailureLoggerTrait for () {
    fn error(&self, _message: &str, _cause: &str) {}
}
