// Fault Types
// "What the callback sees when things go wrong"

use thiserror::Error;

use crate::runtime::code::severity_name;

/// A recoverable-error occurrence promoted into uncaught-failure handling.
///
/// The exception-like failure raised when [`classify_raw`] says Fatal.
/// `code` is always 0 (internal); `runtime_code` carries the original raw
/// runtime code so the uncaught path can resolve its severity name.
///
/// [`classify_raw`]: crate::runtime::classify_raw
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} in {file} on line {line}")]
pub struct RuntimeFault {
    pub message: String,
    pub code: u32,
    pub runtime_code: u32,
    pub file: String,
    pub line: u32,
}

impl RuntimeFault {
    pub fn new(
        message: impl Into<String>,
        runtime_code: u32,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            message: message.into(),
            code: 0,
            runtime_code,
            file: file.into(),
            line,
        }
    }

    /// Severity name from the mapping table, `"Unknown"` when unmapped.
    pub fn severity_name(&self) -> &'static str {
        severity_name(self.runtime_code)
    }
}

/// A classified failure handed to critical logging and the error callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Originated from recoverable-error escalation; carries a runtime code.
    Escalated(RuntimeFault),
    /// A genuine uncaught failure not tagged with a runtime code.
    Uncaught {
        kind: String,
        message: String,
        file: String,
        line: u32,
        trace: String,
    },
}

impl Fault {
    pub fn message(&self) -> &str {
        match self {
            Self::Escalated(fault) => &fault.message,
            Self::Uncaught { message, .. } => message,
        }
    }

    pub fn is_escalated(&self) -> bool {
        matches!(self, Self::Escalated(_))
    }
}

/// The last error the runtime recorded before shutdown, if any.
///
/// Queried through [`RuntimeBridge::last_error`] so tests can substitute it
/// deterministically.
///
/// [`RuntimeBridge::last_error`]: crate::interceptor::RuntimeBridge::last_error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    pub code: u32,
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl LastError {
    pub fn new(code: u32, message: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            code,
            message: message.into(),
            file: file.into(),
            line,
        }
    }
}
