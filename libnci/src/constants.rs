// libnci/src/constants.rs
//! Common protocol constants used across the crate

/// Smallest buffer the controller can hand us that still counts as a
/// polling-loop TLV frame. Anything shorter is dropped without notice.
pub const MIN_POLLING_FRAME_TLV_SIZE: usize = 5;

/// Fixed frame header length; the header bytes are never interpreted.
pub const POLLING_FRAME_HEADER_LEN: usize = 2;

/// Offset of the one-byte record length, relative to the record start.
pub const TLV_LEN_OFFSET: usize = 0;
/// Offset of the one-byte record type code.
pub const TLV_TYPE_OFFSET: usize = 2;
/// Offset of the four-byte little-endian timestamp.
pub const TLV_TIMESTAMP_OFFSET: usize = 3;
/// Offset of the one-byte signed gain value.
pub const TLV_GAIN_OFFSET: usize = 7;
/// Offset of the type-dependent data bytes.
pub const TLV_DATA_OFFSET: usize = 8;

/// Record type: remote field state change (data byte carries on/off).
pub const TAG_FIELD_CHANGE: u8 = 0;
/// Record type: NFC-A technology poll.
pub const TAG_NFC_A: u8 = 1;
/// Record type: NFC-B technology poll.
pub const TAG_NFC_B: u8 = 2;
/// Record type: NFC-F technology poll.
pub const TAG_NFC_F: u8 = 3;
/// Record type: poll of a technology the controller did not classify.
pub const TAG_NFC_UNKNOWN: u8 = 7;
