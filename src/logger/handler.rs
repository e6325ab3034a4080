// Handler Contract
// "A destination that durably records a formatted line"

use crate::common::error::SentinelResult;
use crate::logger::LogContext;

/// A log sink. Side-effecting; failures propagate to the logger's caller
/// rather than being swallowed.
pub trait Handler: Send + Sync {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> SentinelResult<()>;
}
