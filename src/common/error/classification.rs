// Error Classification and Analysis
// "Knowing which failures matter, and how much"

use crate::common::error::SentinelError;

impl SentinelError {
    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Escalated(_) => "escalation",
            Self::Sink { .. } => "sink",
            Self::MailTransport { .. } => "mail",
            Self::HookInstallation { .. } => "hook",
            Self::Configuration { .. } | Self::InvalidConfigValue { .. } => "configuration",
            Self::Internal { .. } => "general",
        }
    }

    /// Get severity level for internal diagnostics
    pub fn severity(&self) -> tracing::Level {
        match self {
            // An escalated fault or a refused hook means the pipeline itself
            // cannot do its job
            Self::Escalated(_) | Self::HookInstallation { .. } => tracing::Level::ERROR,

            // A failing sink loses records but the pipeline keeps running
            Self::Sink { .. } | Self::MailTransport { .. } => tracing::Level::WARN,

            Self::Configuration { .. } | Self::InvalidConfigValue { .. } | Self::Internal { .. } => {
                tracing::Level::DEBUG
            }
        }
    }
}
