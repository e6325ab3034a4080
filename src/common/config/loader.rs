use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;

use crate::common::config::validation::ConfigSection;
use crate::common::error::{SentinelError, SentinelResult};

/// Loads configuration sections from an optional file plus the environment.
///
/// File sources are optional so a bare process still gets section defaults.
/// Environment variables use the `SENTINEL` prefix with `__` separating the
/// section from the key, e.g. `SENTINEL_INTERCEPTOR__RESERVED_KILOBYTES=32`.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: std::env::var("SENTINEL_CONFIG").ok().map(PathBuf::from),
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn load_section<T>(&self) -> SentinelResult<T>
    where
        T: ConfigSection + DeserializeOwned + Default,
    {
        let mut builder = Config::builder();

        if let Some(path) = &self.config_path {
            builder = builder.add_source(File::from(path.clone()).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("SENTINEL").separator("__"))
            .build()
            .map_err(|e| {
                SentinelError::configuration(format!("Failed to build configuration: {e}"))
            })?;

        match settings.get::<T>(T::KEY) {
            Ok(section) => Ok(section),
            Err(config::ConfigError::NotFound(_)) => Ok(T::default()),
            Err(e) => Err(SentinelError::configuration(format!(
                "Failed to load section '{}': {e}",
                T::KEY
            ))),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
