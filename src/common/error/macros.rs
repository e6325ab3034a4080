// Error Macros
// "Standardized error construction and early returns"

/// Macro for creating errors from constructor helpers
#[macro_export]
macro_rules! sentinel_error {
    ($variant:ident $(, $arg:expr)* $(,)?) => {
        $crate::common::error::SentinelError::$variant($($arg),*)
    };
}

/// Macro for early return with error logging
#[macro_export]
macro_rules! sentinel_bail {
    ($error:expr) => {{
        let error = $error;
        match error.severity() {
            tracing::Level::ERROR => tracing::error!(error = %error, "Operation failed"),
            tracing::Level::WARN => tracing::warn!(error = %error, "Operation failed"),
            tracing::Level::INFO => tracing::info!(error = %error, "Operation failed"),
            tracing::Level::DEBUG => tracing::debug!(error = %error, "Operation failed"),
            tracing::Level::TRACE => tracing::trace!(error = %error, "Operation failed"),
        }
        return Err(error);
    }};
}
