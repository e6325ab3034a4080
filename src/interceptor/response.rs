// Response Channel
// "Tell the caller something went wrong before rendering anything"

/// Outward-facing response status surface.
///
/// Before the error callback runs, the core marks the active response as an
/// internal server error so the callback can override the body while the
/// status code already reflects the failure. Outside a request context this
/// is a no-op.
pub trait ResponseChannel: Send + Sync {
    /// Active protocol version (e.g. `"HTTP/1.0"`), if one is known.
    fn protocol_version(&self) -> Option<String> {
        None
    }

    fn set_status(&self, code: u16, status_line: &str);
}

/// No active request context; status signaling does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResponseChannel;

impl ResponseChannel for NullResponseChannel {
    fn set_status(&self, _code: u16, _status_line: &str) {}
}
