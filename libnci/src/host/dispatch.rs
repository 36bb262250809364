// libnci/src/host/dispatch.rs

use crate::host::traits::DeviceHostListener;
use crate::protocol::decode_polling_frame;

/// Bridges raw polling-loop callbacks from the controller driver to a
/// [`DeviceHostListener`].
///
/// One native callback maps to at most one listener notification: a buffer
/// that reaches the minimum TLV size notifies exactly once, even when the
/// decoded event carries no fields; shorter buffers are dropped silently.
/// The raw buffer is only borrowed for the duration of the call.
pub struct PollingLoopDispatcher<L> {
    listener: L,
}

impl<L: DeviceHostListener> PollingLoopDispatcher<L> {
    /// Create a dispatcher that delivers events to `listener`.
    pub fn new(listener: L) -> Self {
        Self { listener }
    }

    /// Entry point for the native polling-loop callback.
    pub fn notify_polling_loop_frame(&mut self, data: &[u8]) {
        if let Some(event) = decode_polling_frame(data) {
            self.listener.on_polling_loop_detected(event);
        }
    }

    /// Borrow the wrapped listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutably borrow the wrapped listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the dispatcher and return the listener.
    pub fn into_inner(self) -> L {
        self.listener
    }
}
