// libnci/src/types.rs

use std::fmt;

use derive_more::Display;

/// Technology or field state reported by a single polling-loop TLV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PollingFrameType {
    /// The remote RF field switched on.
    #[display(fmt = "ON")]
    FieldOn,
    /// The remote RF field switched off.
    #[display(fmt = "OFF")]
    FieldOff,
    /// NFC-A technology poll.
    #[display(fmt = "A")]
    NfcA,
    /// NFC-B technology poll.
    #[display(fmt = "B")]
    NfcB,
    /// NFC-F technology poll.
    #[display(fmt = "F")]
    NfcF,
    /// Poll of an unclassified technology; the raw bytes travel in the
    /// event payload.
    #[display(fmt = "U")]
    Unknown,
}

/// One decoded polling-loop telemetry event.
///
/// Every field is optional: each TLV record in the source buffer fills in
/// the subset it carries, and because records share the field keys, a later
/// record overwrites whatever an earlier record stored under the same key.
/// An event is built fresh for each decoded buffer and owns all its data;
/// nothing borrows from the raw buffer after the decode call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollingLoopEvent {
    /// Technology or field-state marker from the most recent typed record.
    pub frame_type: Option<PollingFrameType>,
    /// Raw data bytes attached to an [`PollingFrameType::Unknown`] record.
    pub payload: Option<Vec<u8>>,
    /// RF front-end gain reported by the controller.
    pub gain: Option<i8>,
    /// Controller-side timestamp; the unit is firmware-defined.
    pub timestamp: Option<u32>,
}

impl PollingLoopEvent {
    /// True when no record contributed any field.
    pub fn is_empty(&self) -> bool {
        self.frame_type.is_none()
            && self.payload.is_none()
            && self.gain.is_none()
            && self.timestamp.is_none()
    }
}

impl fmt::Display for PollingLoopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frame_type {
            Some(t) => write!(f, "type={}", t)?,
            None => write!(f, "type=-")?,
        }
        if let Some(gain) = self.gain {
            write!(f, " gain={}", gain)?;
        }
        if let Some(ts) = self.timestamp {
            write!(f, " timestamp={}", ts)?;
        }
        if let Some(ref payload) = self.payload {
            write!(f, " payload={}", crate::utils::bytes_to_hex(payload))?;
        }
        Ok(())
    }
}
