use std::collections::HashMap;
use std::sync::Mutex;

use crate::common::error::SentinelResult;
use crate::logger::{Handler, LogContext};

/// Captures records in memory, keyed by level. Used by tests and embedders
/// that inspect log output programmatically.
#[derive(Debug, Default)]
pub struct MemoryHandler {
    records: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded for one exact level, in arrival order.
    pub fn records_for(&self, level: &str) -> Vec<String> {
        match self.records.lock() {
            Ok(guard) => guard.get(level).cloned().unwrap_or_default(),
            Err(poisoned) => poisoned.into_inner().get(level).cloned().unwrap_or_default(),
        }
    }

    pub fn has_records_for(&self, level: &str) -> bool {
        !self.records_for(level).is_empty()
    }

    pub fn total(&self) -> usize {
        match self.records.lock() {
            Ok(guard) => guard.values().map(Vec::len).sum(),
            Err(poisoned) => poisoned.into_inner().values().map(Vec::len).sum(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.records.lock() {
            guard.clear();
        }
    }
}

impl Handler for MemoryHandler {
    fn log(&self, level: &str, message: &str, _context: &LogContext) -> SentinelResult<()> {
        if let Ok(mut guard) = self.records.lock() {
            guard
                .entry(level.to_string())
                .or_default()
                .push(message.to_string());
        }
        Ok(())
    }
}
