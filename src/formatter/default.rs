use std::sync::RwLock;

use chrono::format::{Item, StrftimeItems};
use chrono::Utc;

use crate::common::error::SentinelResult;
use crate::formatter::Formatter;
use crate::logger::LogContext;

/// Default strftime pattern, UTC with a literal zone suffix.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Check a strftime pattern against chrono's parser. An unrecognized
/// specifier would otherwise only surface as a render failure inside the log
/// path, so patterns are rejected at the boundary instead.
pub fn time_format_is_valid(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats records as `[<timestamp>] [<level>] <message>` plus a trailing
/// newline, then the rendered context when one is present.
pub struct DefaultFormatter {
    time_format: RwLock<String>,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self {
            time_format: RwLock::new(DEFAULT_TIME_FORMAT.to_string()),
        }
    }

    /// Replace the timestamp pattern. Only the timestamp segment changes
    /// shape; the rest of the layout is fixed. A pattern chrono cannot render
    /// is refused and the current pattern stays in effect.
    pub fn set_time_format<S: Into<String>>(&self, pattern: S) -> SentinelResult<()> {
        let pattern = pattern.into();
        if !time_format_is_valid(&pattern) {
            crate::sentinel_bail!(crate::sentinel_error!(
                configuration,
                format!("Invalid time format pattern: {pattern}")
            ));
        }

        if let Ok(mut format) = self.time_format.write() {
            *format = pattern;
        }
        Ok(())
    }

    pub fn time_format(&self) -> String {
        match self.time_format.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, level: &str, message: &str, context: &LogContext) -> String {
        let pattern = self.time_format();
        let timestamp = Utc::now().format(&pattern);

        let mut line = format!("[{timestamp}] [{level}] {message}\n");
        if !context.is_empty() {
            line.push_str(&format!("{context}\n"));
        }
        line
    }
}
