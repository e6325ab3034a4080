// Error Interception Core
// "Catch it, classify it, log it, then let someone render the apology"

mod bridge;
mod reserved;
mod response;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

pub use bridge::{fault_from_panic, RuntimeBridge, StdRuntimeBridge};
pub use reserved::ReservedMemory;
pub use response::{NullResponseChannel, ResponseChannel};

use crate::common::error::{SentinelError, SentinelResult};
use crate::logger::{LogContext, Logger};
use crate::runtime::{
    classify_raw, raw_is_shutdown_fatal, severity_name, Fault, RuntimeFault, SeverityClass,
};

/// Protocol used for the failure status line when the channel reports none.
const DEFAULT_PROTOCOL: &str = "HTTP/1.1";

/// Default reserved-memory size, in kilobytes.
pub const DEFAULT_RESERVED_KILOBYTES: usize = 16;

/// Callback invoked with the classified failure before the process would
/// otherwise leak a raw diagnostic. Typically renders a fallback view.
pub type FaultCallback = Box<dyn Fn(&Fault) + Send + Sync>;

/// The interception core.
///
/// Owns the three runtime hooks for the lifetime of its registration flag:
/// recoverable errors, uncaught failures, and the fatal-shutdown pass.
/// Classifies every occurrence against the closed code table and routes it
/// into the [`Logger`]; fatal conditions additionally reach the error
/// callback after the response status has been marked 500.
pub struct Interceptor {
    logger: Arc<Logger>,
    bridge: Arc<dyn RuntimeBridge>,
    response: Arc<dyn ResponseChannel>,
    registered: AtomicBool,
    reserved: ReservedMemory,
    callback: RwLock<Option<FaultCallback>>,
}

impl Interceptor {
    /// Install with the default reserved-memory size.
    pub fn install(
        logger: Arc<Logger>,
        bridge: Arc<dyn RuntimeBridge>,
        response: Arc<dyn ResponseChannel>,
    ) -> SentinelResult<Arc<Self>> {
        Self::install_with_reserve(logger, bridge, response, DEFAULT_RESERVED_KILOBYTES)
    }

    /// Suppress the runtime's native diagnostics, pre-allocate the reserved
    /// buffer, and install all three hooks. A refused hook installation
    /// propagates — construction either fully owns error output or fails.
    pub fn install_with_reserve(
        logger: Arc<Logger>,
        bridge: Arc<dyn RuntimeBridge>,
        response: Arc<dyn ResponseChannel>,
        reserved_kilobytes: usize,
    ) -> SentinelResult<Arc<Self>> {
        bridge.suppress_native_diagnostics();

        let interceptor = Arc::new(Self {
            logger,
            bridge,
            response,
            registered: AtomicBool::new(false),
            reserved: ReservedMemory::allocate(reserved_kilobytes),
            callback: RwLock::new(None),
        });

        interceptor.register()?;

        Ok(interceptor)
    }

    /// Idempotent hook installation. A second call while installed is a
    /// no-op, not an error.
    pub fn register(self: &Arc<Self>) -> SentinelResult<()> {
        if self.registered.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        if let Err(error) = self.bridge.install_hooks(Arc::downgrade(self)) {
            self.registered.store(false, Ordering::SeqCst);
            return Err(error);
        }

        tracing::debug!("runtime hooks installed");
        Ok(())
    }

    /// Idempotent removal; restores whatever handlers were active before.
    pub fn unregister(&self) {
        if self.registered.swap(false, Ordering::SeqCst) {
            self.bridge.restore_hooks();
            tracing::debug!("runtime hooks restored");
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }

    /// Handle a recoverable runtime error occurrence.
    ///
    /// Notice- and warning-class codes are logged and fully recovered; the
    /// returned `true` tells the runtime to suppress its own default output.
    /// Fatal-class and unknown codes do not log here — they come back as
    /// [`SentinelError::Escalated`] so the occurrence flows into
    /// uncaught-failure handling instead.
    pub fn handle_recoverable_error(
        &self,
        code: u32,
        message: &str,
        file: &str,
        line: u32,
        context: &LogContext,
    ) -> SentinelResult<bool> {
        let record = format!("{message} in {file} on line {line}");

        match classify_raw(code) {
            SeverityClass::Notice => {
                self.logger.notice(&record, context)?;
                Ok(true)
            }
            SeverityClass::Warning => {
                self.logger.warning(&record, context)?;
                Ok(true)
            }
            SeverityClass::Fatal => {
                tracing::debug!(code, file, line, "recoverable error escalated");
                Err(SentinelError::escalated(RuntimeFault::new(
                    message, code, file, line,
                )))
            }
        }
    }

    /// Handle an uncaught failure: log at `critical`, mark the response as an
    /// internal server error, then hand the failure to the callback if one is
    /// registered.
    pub fn handle_uncaught_failure(&self, fault: &Fault) -> SentinelResult<()> {
        let correlation_id = Uuid::new_v4();

        match fault {
            Fault::Escalated(runtime_fault) => {
                tracing::error!(
                    correlation_id = %correlation_id,
                    runtime_code = runtime_fault.runtime_code,
                    "escalated runtime error intercepted"
                );
                self.logger.critical(
                    &format!(
                        "Error ({}): {} in {} on line {}",
                        runtime_fault.severity_name(),
                        runtime_fault.message,
                        runtime_fault.file,
                        runtime_fault.line
                    ),
                    &LogContext::new(),
                )?;
            }
            Fault::Uncaught {
                kind,
                message,
                file,
                line,
                trace,
            } => {
                tracing::error!(
                    correlation_id = %correlation_id,
                    kind = %kind,
                    "uncaught failure intercepted"
                );
                self.logger.critical(
                    &format!(
                        "Uncaught exception \"{kind}\" with message \"{message}\" in \
                         {file}:{line}\nStack trace:\n{trace}"
                    ),
                    &LogContext::new(),
                )?;
            }
        }

        self.invoke_error_callback(fault);
        Ok(())
    }

    /// The unconditional end-of-life pass.
    ///
    /// Releases the reserved buffer before anything else — this pass is
    /// commonly entered because memory ran out. A clean shutdown (no recorded
    /// error, or one outside the shutdown-fatal set) does nothing.
    pub fn handle_fatal_shutdown(&self) -> SentinelResult<()> {
        if self.reserved.release() {
            tracing::debug!("reserved memory released for fatal pass");
        }

        let Some(error) = self.bridge.last_error() else {
            return Ok(());
        };

        if !raw_is_shutdown_fatal(error.code) {
            return Ok(());
        }

        let correlation_id = Uuid::new_v4();
        tracing::error!(
            correlation_id = %correlation_id,
            code = error.code,
            "fatal condition detected at shutdown"
        );

        self.logger.critical(
            &format!(
                "Fatal Error ({}): {} in {} on line {}",
                severity_name(error.code),
                error.message,
                error.file,
                error.line
            ),
            &LogContext::new(),
        )?;

        if self.has_error_callback() {
            let fault = Fault::Escalated(RuntimeFault::new(
                error.message,
                error.code,
                error.file,
                error.line,
            ));
            self.invoke_error_callback(&fault);
        }

        Ok(())
    }

    /// Register the callback used to render an alternate response. There is
    /// no default callback.
    pub fn set_error_callback<F>(&self, callback: F)
    where
        F: Fn(&Fault) + Send + Sync + 'static,
    {
        if let Ok(mut slot) = self.callback.write() {
            *slot = Some(Box::new(callback));
        }
    }

    pub fn has_error_callback(&self) -> bool {
        match self.callback.read() {
            Ok(guard) => guard.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }

    /// Bytes still held by the reserved buffer.
    pub fn reserved_bytes(&self) -> usize {
        self.reserved.remaining_bytes()
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Guard whose drop runs the fatal-shutdown pass, the analog of a
    /// registered shutdown function.
    pub fn shutdown_guard(self: &Arc<Self>) -> ShutdownGuard {
        ShutdownGuard {
            interceptor: Arc::clone(self),
        }
    }

    /// Mark the outward response as an internal server error, then invoke
    /// the callback if one is set. The status is signaled exactly once per
    /// failure event, before the callback, so the callback can replace the
    /// body while the code already reflects the failure.
    fn invoke_error_callback(&self, fault: &Fault) {
        let protocol = self
            .response
            .protocol_version()
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());
        self.response
            .set_status(500, &format!("{protocol} 500 Internal Server Error"));

        let guard = match self.callback.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(callback) = guard.as_ref() {
            callback(fault);
        }
    }
}

impl Drop for Interceptor {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// Runs the fatal-shutdown pass when dropped.
#[must_use = "the fatal-shutdown pass runs when this guard is dropped"]
pub struct ShutdownGuard {
    interceptor: Arc<Interceptor>,
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        if let Err(error) = self.interceptor.handle_fatal_shutdown() {
            tracing::error!(error = %error, "fatal-shutdown pass failed");
        }
    }
}
