// Project Sentinel - Core Library
// "The watcher on the walls of the process"
//
// Intercepts recoverable runtime errors, uncaught failures, and fatal
// shutdown conditions, classifies them by severity, and fans structured log
// records out to a default sink plus per-level supplementary sinks. A
// user-supplied callback can render a fallback response before the process
// gives up.

pub mod common;
pub mod formatter;
pub mod interceptor;
pub mod logger;
pub mod runtime;

// Re-export commonly used types
pub use common::config::{ConfigLoader, InterceptorConfig, LoggingConfig, RuntimeConfig};
pub use common::error::{SentinelError, SentinelResult};
pub use formatter::{time_format_is_valid, DefaultFormatter, Formatter, DEFAULT_TIME_FORMAT};
pub use interceptor::{
    FaultCallback, Interceptor, NullResponseChannel, ResponseChannel, RuntimeBridge,
    ShutdownGuard, StdRuntimeBridge, DEFAULT_RESERVED_KILOBYTES,
};
pub use logger::handlers::{EmailHandler, FileHandler, MailTransport, MemoryHandler};
pub use logger::{Handler, LogContext, Logger, Severity};
pub use runtime::{ErrorCode, Fault, LastError, RuntimeFault, SeverityClass};
