// Runtime Error Model
// "The closed table of legacy error codes and the faults built from them"

mod code;
mod fault;

pub use code::{classify_raw, raw_is_shutdown_fatal, severity_name, ErrorCode, SeverityClass};
pub use fault::{Fault, LastError, RuntimeFault};
