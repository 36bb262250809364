//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build syntactically valid polling-loop frames so tests
//! across the crate and the tests/ directory share a single encoder instead
//! of each hand-rolling byte layouts.

use crate::constants::{TAG_NFC_UNKNOWN, TLV_DATA_OFFSET, TLV_TIMESTAMP_OFFSET};
use crate::{Error, Result};

/// Serialize one TLV record with the given tag, timestamp, gain and data
/// bytes. The record is emitted at full stride (declared length plus two),
/// so consecutive records laid end to end decode back to back.
#[doc(hidden)]
pub fn encode_typed_record(tag: u8, timestamp: u32, gain: i8, data: &[u8]) -> Result<Vec<u8>> {
    // Data sits at offset 8 and the record footprint is length + 1, so the
    // declared length is data length + 7. It must fit in one byte.
    let length = data.len() + TLV_DATA_OFFSET - 1;
    if length > u8::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u8::MAX as usize - (TLV_DATA_OFFSET - 1),
            actual: data.len(),
        });
    }

    let mut out = Vec::with_capacity(length + 2);
    out.push(length as u8);
    out.push(0x00);
    out.push(tag);
    out.extend_from_slice(&timestamp.to_le_bytes());
    out.push(gain as u8);
    out.extend_from_slice(data);
    out.push(0x00); // stride padding
    Ok(out)
}

/// Serialize an unclassified-technology record whose payload the decoder
/// reproduces exactly. The decoder's data range for this tag runs past the
/// record stride, so a record built here only round-trips as the final
/// record of a frame.
#[doc(hidden)]
pub fn encode_unknown_record(timestamp: u32, gain: i8, payload: &[u8]) -> Result<Vec<u8>> {
    // The decoder copies [record+8, record+3+length), so the declared
    // length is payload length + 5.
    let length = payload.len() + TLV_DATA_OFFSET - TLV_TIMESTAMP_OFFSET;
    if length > u8::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u8::MAX as usize - (TLV_DATA_OFFSET - TLV_TIMESTAMP_OFFSET),
            actual: payload.len(),
        });
    }

    let mut out = Vec::with_capacity(payload.len() + 8);
    out.push(length as u8);
    out.push(0x00);
    out.push(TAG_NFC_UNKNOWN);
    out.extend_from_slice(&timestamp.to_le_bytes());
    out.push(gain as u8);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Concatenate encoded records behind the two-byte frame header.
#[doc(hidden)]
pub fn polling_frame(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0x00, 0x00];
    for record in records {
        out.extend_from_slice(record);
    }
    out
}
