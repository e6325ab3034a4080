use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::common::error::{SentinelError, SentinelResult};
use crate::formatter::Formatter;
use crate::logger::{Handler, LogContext};

/// Appends formatted records to a file.
///
/// The file is opened per record so the handler stays usable across log
/// rotation done by external tooling.
pub struct FileHandler {
    formatter: Arc<dyn Formatter>,
    destination: PathBuf,
}

impl FileHandler {
    pub fn new<P: AsRef<Path>>(formatter: Arc<dyn Formatter>, destination: P) -> Self {
        Self {
            formatter,
            destination: destination.as_ref().to_path_buf(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

impl Handler for FileHandler {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> SentinelResult<()> {
        let formatted = self.formatter.format(level, message, context);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.destination)
            .map_err(|e| {
                SentinelError::sink(format!(
                    "Failed to open {}: {e}",
                    self.destination.display()
                ))
            })?;

        file.write_all(formatted.as_bytes())?;

        Ok(())
    }
}
