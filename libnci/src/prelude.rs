// libnci/src/prelude.rs

pub use crate::host::{DeviceHostListener, MockListener, PollingLoopDispatcher};
pub use crate::protocol::{FrameCursor, decode_polling_frame};
pub use crate::{Error, PollingFrameType, PollingLoopEvent, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex};
