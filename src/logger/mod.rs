// Logger Dispatch Core
// "One default sink always, level-matched sinks after"

mod context;
mod handler;
pub mod handlers;
mod level;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub use context::LogContext;
pub use handler::Handler;
pub use level::Severity;

use crate::common::error::{SentinelError, SentinelResult};

/// Multicast log dispatcher.
///
/// Every record reaches the default handler; handlers registered for the
/// record's exact level are then invoked in registration order. Levels are
/// opaque tokens here — there is no hierarchy, and a handler registered for
/// `warning` never sees `critical` records. Classification is the
/// interception core's job, not the logger's.
pub struct Logger {
    default_handler: RwLock<Arc<dyn Handler>>,
    handlers: RwLock<HashMap<String, Vec<Arc<dyn Handler>>>>,
}

impl Logger {
    pub fn new(default_handler: Arc<dyn Handler>) -> Self {
        Self {
            default_handler: RwLock::new(default_handler),
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Dispatch a record to the default handler, then to every handler
    /// registered for this exact level. A failing handler propagates —
    /// callers wanting isolation wrap their handlers.
    pub fn log(&self, level: &str, message: &str, context: &LogContext) -> SentinelResult<()> {
        let default = self
            .default_handler
            .read()
            .map_err(|_| SentinelError::internal("default handler lock poisoned"))?
            .clone();
        default.log(level, message, context)?;

        let level_handlers = {
            let table = self
                .handlers
                .read()
                .map_err(|_| SentinelError::internal("handler table lock poisoned"))?;
            table.get(level).cloned()
        };

        if let Some(handlers) = level_handlers {
            for handler in handlers {
                handler.log(level, message, context)?;
            }
        }

        Ok(())
    }

    /// Append a supplementary handler for one exact level. No deduplication;
    /// repeated additions accumulate in order.
    pub fn add_handler<L: Into<String>>(&self, level: L, handler: Arc<dyn Handler>) {
        if let Ok(mut table) = self.handlers.write() {
            table.entry(level.into()).or_default().push(handler);
        }
    }

    /// Replace the always-invoked default handler.
    pub fn set_default_handler(&self, handler: Arc<dyn Handler>) {
        if let Ok(mut default) = self.default_handler.write() {
            *default = handler;
        }
    }

    pub fn default_handler(&self) -> Arc<dyn Handler> {
        match self.default_handler.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn log_at(
        &self,
        severity: Severity,
        message: &str,
        context: &LogContext,
    ) -> SentinelResult<()> {
        self.log(severity.as_str(), message, context)
    }

    pub fn notice(&self, message: &str, context: &LogContext) -> SentinelResult<()> {
        self.log_at(Severity::Notice, message, context)
    }

    pub fn warning(&self, message: &str, context: &LogContext) -> SentinelResult<()> {
        self.log_at(Severity::Warning, message, context)
    }

    pub fn critical(&self, message: &str, context: &LogContext) -> SentinelResult<()> {
        self.log_at(Severity::Critical, message, context)
    }
}
