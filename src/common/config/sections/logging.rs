use serde::{Deserialize, Serialize};

use crate::common::config::validation::ConfigSection;
use crate::common::error::SentinelResult;
use crate::formatter::{time_format_is_valid, DEFAULT_TIME_FORMAT};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// chrono strftime pattern for the default formatter timestamp
    pub time_format: String,
    /// Destination for a file sink, if one should be attached
    pub file_path: Option<String>,
    /// Recipient for an email sink, if one should be attached
    pub email_recipient: Option<String>,
    /// Extra headers passed to the mail transport
    pub email_extra_headers: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            file_path: None,
            email_recipient: None,
            email_extra_headers: None,
        }
    }
}

impl ConfigSection for LoggingConfig {
    const KEY: &'static str = "logging";

    fn validate(&self) -> SentinelResult<()> {
        // Covers the empty pattern as well as unrecognized specifiers.
        if !time_format_is_valid(&self.time_format) {
            crate::sentinel_bail!(crate::sentinel_error!(
                invalid_config_value,
                "logging.time_format",
                self.time_format.clone(),
            ));
        }

        if self.email_extra_headers.is_some() && self.email_recipient.is_none() {
            crate::sentinel_bail!(crate::sentinel_error!(
                configuration,
                "logging.email_extra_headers set without logging.email_recipient",
            ));
        }

        Ok(())
    }
}
