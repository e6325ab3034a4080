// Formatter Contract
// "Pure transform from record to display string"

mod default;

pub use default::{time_format_is_valid, DefaultFormatter, DEFAULT_TIME_FORMAT};

use crate::logger::LogContext;

/// Pure transformer from `(level, message, context)` to a display string.
pub trait Formatter: Send + Sync {
    fn format(&self, level: &str, message: &str, context: &LogContext) -> String;
}
