// Error Handling Module
// "A logging crate cannot afford to lose its own failures"

mod classification;
mod macros;

use thiserror::Error;

use crate::runtime::RuntimeFault;

/// Crate-wide error type for the interception and dispatch pipeline.
#[derive(Error, Debug, Clone)]
pub enum SentinelError {
    /// A recoverable-error occurrence promoted into uncaught-failure handling.
    #[error(transparent)]
    Escalated(RuntimeFault),

    #[error("Sink write failed: {message}")]
    Sink { message: String },

    #[error("Mail transport failed: {message}")]
    MailTransport { message: String },

    #[error("Hook installation refused: {message}")]
    HookInstallation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SentinelError {
    /// Create an escalated fault error
    pub fn escalated(fault: RuntimeFault) -> Self {
        Self::Escalated(fault)
    }

    /// Create a sink write error
    pub fn sink<S: Into<String>>(message: S) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Create a mail transport error
    pub fn mail_transport<S: Into<String>>(message: S) -> Self {
        Self::MailTransport {
            message: message.into(),
        }
    }

    /// Create a hook installation error
    pub fn hook_installation<S: Into<String>>(message: S) -> Self {
        Self::HookInstallation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The escalated fault, if this error carries one.
    pub fn as_fault(&self) -> Option<&RuntimeFault> {
        match self {
            Self::Escalated(fault) => Some(fault),
            _ => None,
        }
    }
}

/// Convert std::io::Error to SentinelError
impl From<std::io::Error> for SentinelError {
    fn from(error: std::io::Error) -> Self {
        SentinelError::sink(error.to_string())
    }
}

/// Convert anyhow::Error to SentinelError
impl From<anyhow::Error> for SentinelError {
    fn from(error: anyhow::Error) -> Self {
        SentinelError::internal(error.to_string())
    }
}

/// Result type alias for convenience
pub type SentinelResult<T> = Result<T, SentinelError>;
