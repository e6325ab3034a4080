use std::collections::HashMap;

use serde::Serialize;

use crate::common::config::loader::ConfigLoader;
use crate::common::config::sections::{InterceptorConfig, LoggingConfig};
use crate::common::config::validation::ConfigSection;
use crate::common::error::SentinelResult;

#[derive(Debug, Clone, Serialize, Default)]
pub struct RuntimeConfig {
    pub interceptor: InterceptorConfig,
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    pub fn load() -> SentinelResult<Self> {
        Self::load_with_loader(&ConfigLoader::new())
    }

    pub fn load_with_loader(loader: &ConfigLoader) -> SentinelResult<Self> {
        let interceptor = loader.load_section::<InterceptorConfig>()?;
        let logging = loader.load_section::<LoggingConfig>()?;

        let config = RuntimeConfig {
            interceptor,
            logging,
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> SentinelResult<()> {
        self.interceptor.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        vars.insert(
            "SENTINEL_INTERCEPTOR__RESERVED_KILOBYTES".to_string(),
            self.interceptor.reserved_kilobytes.to_string(),
        );

        vars.insert(
            "SENTINEL_LOGGING__TIME_FORMAT".to_string(),
            self.logging.time_format.clone(),
        );
        if let Some(path) = &self.logging.file_path {
            vars.insert("SENTINEL_LOGGING__FILE_PATH".to_string(), path.clone());
        }
        if let Some(recipient) = &self.logging.email_recipient {
            vars.insert(
                "SENTINEL_LOGGING__EMAIL_RECIPIENT".to_string(),
                recipient.clone(),
            );
        }

        vars
    }
}
