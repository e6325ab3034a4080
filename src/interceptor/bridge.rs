// Runtime Bridge
// "The only file that touches process-global hook state"

use std::panic::PanicHookInfo;
use std::sync::{Mutex, Weak};

use crate::common::error::{SentinelError, SentinelResult};
use crate::interceptor::Interceptor;
use crate::runtime::{Fault, LastError};

/// Platform abstraction over the runtime's hook surface.
///
/// The interceptor never installs process-global state itself; it goes
/// through this trait so tests can substitute a recording implementation and
/// the shutdown side channel stays deterministic.
pub trait RuntimeBridge: Send + Sync {
    /// Silence the runtime's own error display so output is fully owned by
    /// the interception pipeline.
    fn suppress_native_diagnostics(&self) {}

    /// Install the hooks, routing intercepted failures into `target`. May
    /// refuse, which is a fatal construction error for the interceptor.
    fn install_hooks(&self, target: Weak<Interceptor>) -> SentinelResult<()>;

    /// Restore whatever handlers were active before installation.
    fn restore_hooks(&self);

    /// The last error the runtime recorded, queried by the fatal pass.
    fn last_error(&self) -> Option<LastError>;
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Bridge backed by the std panic hook.
///
/// Installation swaps the process panic hook for one that converts the panic
/// into [`Fault::Uncaught`] and dispatches it synchronously on the panicking
/// thread; the previous hook is kept for restoration. Replacing the default
/// hook is also what suppresses the runtime's own stderr report.
pub struct StdRuntimeBridge {
    previous_hook: Mutex<Option<PanicHook>>,
    last_error: Mutex<Option<LastError>>,
}

impl StdRuntimeBridge {
    pub fn new() -> Self {
        Self {
            previous_hook: Mutex::new(None),
            last_error: Mutex::new(None),
        }
    }

    /// Feed the shutdown side channel. Embedders call this from allocation
    /// failure or abort paths so the fatal pass has something to report.
    pub fn record_last_error(&self, error: LastError) {
        if let Ok(mut slot) = self.last_error.lock() {
            *slot = Some(error);
        }
    }
}

impl Default for StdRuntimeBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeBridge for StdRuntimeBridge {
    fn install_hooks(&self, target: Weak<Interceptor>) -> SentinelResult<()> {
        let mut previous = self
            .previous_hook
            .lock()
            .map_err(|_| SentinelError::hook_installation("previous-hook slot poisoned"))?;

        if previous.is_some() {
            return Ok(());
        }

        *previous = Some(std::panic::take_hook());
        std::panic::set_hook(Box::new(move |info| {
            let Some(core) = target.upgrade() else {
                return;
            };
            let fault = fault_from_panic(info);
            if let Err(error) = core.handle_uncaught_failure(&fault) {
                tracing::error!(error = %error, "failed to dispatch intercepted panic");
            }
        }));

        Ok(())
    }

    fn restore_hooks(&self) {
        if let Ok(mut previous) = self.previous_hook.lock() {
            if let Some(hook) = previous.take() {
                std::panic::set_hook(hook);
            }
        }
    }

    fn last_error(&self) -> Option<LastError> {
        match self.last_error.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Convert panic hook info into an uncaught fault, capturing location,
/// payload message, and a full backtrace.
pub fn fault_from_panic(info: &PanicHookInfo<'_>) -> Fault {
    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    };

    let (file, line) = info
        .location()
        .map(|location| (location.file().to_string(), location.line()))
        .unwrap_or_else(|| ("unknown".to_string(), 0));

    Fault::Uncaught {
        kind: "panic".to_string(),
        message,
        file,
        line,
        trace: std::backtrace::Backtrace::force_capture().to_string(),
    }
}
