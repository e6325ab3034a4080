mod loader;
mod runtime_config;
pub mod sections;
pub mod validation;

pub use loader::ConfigLoader;
pub use runtime_config::RuntimeConfig;
pub use sections::*;
pub use validation::ConfigSection;
