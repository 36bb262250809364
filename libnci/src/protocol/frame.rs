// libnci/src/protocol/frame.rs

use log::warn;

use crate::constants::{
    MIN_POLLING_FRAME_TLV_SIZE, POLLING_FRAME_HEADER_LEN, TAG_FIELD_CHANGE, TAG_NFC_A, TAG_NFC_B,
    TAG_NFC_F, TAG_NFC_UNKNOWN, TLV_DATA_OFFSET, TLV_GAIN_OFFSET, TLV_LEN_OFFSET,
    TLV_TIMESTAMP_OFFSET, TLV_TYPE_OFFSET,
};
use crate::protocol::cursor::FrameCursor;
use crate::types::{PollingFrameType, PollingLoopEvent};

/// Decode one raw polling-loop telemetry buffer into a [`PollingLoopEvent`].
///
/// Frame format: a two-byte header (never interpreted) followed by TLV
/// records. Each record carries its length at offset 0, its type code at
/// offset 2, a little-endian timestamp at offsets 3..7, a signed gain byte
/// at offset 7 and type-dependent data from offset 8.
///
/// Records write into shared event fields, so a later record overwrites the
/// values an earlier record stored. Returns `None` when the buffer is
/// shorter than [`MIN_POLLING_FRAME_TLV_SIZE`]; every other input yields
/// `Some`, even when no record could be decoded.
///
/// The buffer originates from uncontrolled firmware and declared record
/// lengths are never trusted: a record whose footprint does not fit in the
/// buffer stops decoding, and whatever accumulated so far is still returned.
pub fn decode_polling_frame(data: &[u8]) -> Option<PollingLoopEvent> {
    if data.len() < MIN_POLLING_FRAME_TLV_SIZE {
        return None;
    }

    let mut event = PollingLoopEvent::default();
    let mut cursor = FrameCursor::new(data, POLLING_FRAME_HEADER_LEN);

    while cursor.has_more() {
        // A record too short to hold even its length and type bytes is
        // treated the same as one whose declared footprint overruns.
        let Ok(length) = cursor.byte_at(TLV_LEN_OFFSET) else {
            break;
        };
        let Ok(tag) = cursor.byte_at(TLV_TYPE_OFFSET) else {
            break;
        };

        if cursor.pos() + length as usize + 1 > cursor.len() {
            warn!(
                "polling frame record at offset {} overruns the {}-byte buffer",
                cursor.pos(),
                cursor.len()
            );
            break;
        }

        match tag {
            TAG_FIELD_CHANGE => {
                if let Ok(state) = cursor.byte_at(TLV_DATA_OFFSET) {
                    event.frame_type = Some(if state != 0x00 {
                        PollingFrameType::FieldOn
                    } else {
                        PollingFrameType::FieldOff
                    });
                }
            }
            TAG_NFC_A => event.frame_type = Some(PollingFrameType::NfcA),
            TAG_NFC_B => event.frame_type = Some(PollingFrameType::NfcB),
            TAG_NFC_F => event.frame_type = Some(PollingFrameType::NfcF),
            TAG_NFC_UNKNOWN => {
                event.frame_type = Some(PollingFrameType::Unknown);
                // Data spans [record+8, record+3+length).
                let end = TLV_TIMESTAMP_OFFSET + length as usize;
                if let Some(count) = end.checked_sub(TLV_DATA_OFFSET) {
                    if let Ok(bytes) = cursor.slice_at(TLV_DATA_OFFSET, count) {
                        event.payload = Some(bytes.to_vec());
                    }
                }
            }
            other => warn!("unknown polling loop tag type {:#04x}", other),
        }

        // Gain and timestamp are attempted for every record type.
        if let Ok(gain) = cursor.i8_at(TLV_GAIN_OFFSET) {
            event.gain = Some(gain);
        }
        if let Ok(timestamp) = cursor.le_u32_at(TLV_TIMESTAMP_OFFSET) {
            event.timestamp = Some(timestamp);
        }

        cursor.advance(length as usize + 2);
    }

    Some(event)
}
