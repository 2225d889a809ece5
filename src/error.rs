//! Error types for focusguard.

use thiserror::Error;

/// Errors that can occur in focusguard.
#[derive(Debug, Error)]
pub enum FocusGuardError {
    /// Configuration error (invalid durations, unreadable config).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Desktop notification could not be delivered.
    ///
    /// Recoverable: the session timer logs this and proceeds.
    #[error("notification failed: {0}")]
    Notify(String),

    /// Screen lock invocation failed.
    ///
    /// Recoverable: the session timer logs this and starts the next cycle.
    #[error("screen lock failed: {0}")]
    Lock(String),

    /// Startup registration with the OS service manager failed.
    #[error("service error: {0}")]
    Service(String),

    /// Signal handler installation failed.
    #[error("signal handler error: {0}")]
    Signal(String),
}
