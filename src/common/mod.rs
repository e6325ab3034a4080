pub mod config;
pub mod error;

pub use config::{ConfigLoader, RuntimeConfig};
pub use error::{SentinelError, SentinelResult};
