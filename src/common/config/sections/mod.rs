mod interceptor;
mod logging;

pub use interceptor::InterceptorConfig;
pub use logging::LoggingConfig;
