//! Error reporting through an injected notifier.
//!
//! Callers hand in the reporting client explicitly; nothing here reaches for a
//! process-wide handle.

use std::error::Error;
use std::fmt;

/// Severity attached to a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error-reporting sink, e.g. a crash reporting client.
pub trait Notifier {
    fn notify(&self, error: &dyn Error, severity: Severity);
}

/// Reports through `tracing` at the level matching the severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, error: &dyn Error, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!(severity = %severity, "{}", error),
            Severity::Warn => tracing::warn!(severity = %severity, "{}", error),
            Severity::Info => tracing::info!(severity = %severity, "{}", error),
        }
    }
}

pub fn error(notifier: &dyn Notifier, err: &dyn Error) {
    notifier.notify(err, Severity::Error);
}

pub fn warn(notifier: &dyn Notifier, err: &dyn Error) {
    notifier.notify(err, Severity::Warn);
}

pub fn info(notifier: &dyn Notifier, err: &dyn Error) {
    notifier.notify(err, Severity::Info);
}
