use serde::{Deserialize, Serialize};

use crate::common::config::validation::ConfigSection;
use crate::common::error::SentinelResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptorConfig {
    /// Memory pre-allocated at installation and released on the fatal pass,
    /// so logging still works after the process exhausts the heap.
    pub reserved_kilobytes: usize,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            reserved_kilobytes: 16,
        }
    }
}

impl ConfigSection for InterceptorConfig {
    const KEY: &'static str = "interceptor";

    fn validate(&self) -> SentinelResult<()> {
        if self.reserved_kilobytes == 0 {
            crate::sentinel_bail!(crate::sentinel_error!(
                invalid_config_value,
                "interceptor.reserved_kilobytes",
                self.reserved_kilobytes.to_string(),
            ));
        }

        Ok(())
    }
}
