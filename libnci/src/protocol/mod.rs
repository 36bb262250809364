// libnci/src/protocol/mod.rs

pub mod cursor;
pub mod frame;

pub use cursor::FrameCursor;
pub use frame::decode_polling_frame;
