#[path = "../common/mod.rs"]
mod common;

use libnci::PollingFrameType;
use libnci::protocol::decode_polling_frame;

#[test]
fn buffers_below_minimum_yield_nothing() {
    for len in 0..5 {
        let data = vec![0xa5u8; len];
        assert!(
            decode_polling_frame(&data).is_none(),
            "length {} must not decode",
            len
        );
    }
}

#[test]
fn captured_field_on_frame_decodes() {
    let event = decode_polling_frame(&common::fixtures::field_on_frame()).unwrap();
    assert_eq!(event.frame_type, Some(PollingFrameType::FieldOn));
    assert_eq!(event.gain, Some(4));
    assert_eq!(event.timestamp, Some(0x0302_0100));
    assert_eq!(event.payload, None);
}

#[test]
fn captured_field_off_frame_decodes() {
    let event = decode_polling_frame(&common::fixtures::field_off_frame()).unwrap();
    assert_eq!(event.frame_type, Some(PollingFrameType::FieldOff));
}

#[test]
fn second_record_wins_shared_fields() {
    let event = decode_polling_frame(&common::fixtures::two_technology_frame()).unwrap();
    assert_eq!(event.frame_type, Some(PollingFrameType::NfcB));
    assert_eq!(event.gain, Some(2));
    assert_eq!(event.timestamp, Some(200));
}

#[test]
fn overrunning_record_still_emits_an_event() {
    let event = decode_polling_frame(&common::fixtures::overrunning_frame()).unwrap();
    assert!(event.is_empty());
}

#[test]
fn overrun_after_valid_record_keeps_its_fields() {
    let mut data = common::fixtures::field_change_frame(0x01, 42, 3);
    data.extend_from_slice(&common::fixtures::overrunning_frame()[2..]);
    let event = decode_polling_frame(&data).unwrap();
    assert_eq!(event.frame_type, Some(PollingFrameType::FieldOn));
    assert_eq!(event.gain, Some(3));
    assert_eq!(event.timestamp, Some(42));
}

#[test]
fn unknown_technology_frame_carries_payload() {
    let event =
        decode_polling_frame(&common::fixtures::unknown_technology_frame(&[0x11, 0x22])).unwrap();
    assert_eq!(event.frame_type, Some(PollingFrameType::Unknown));
    assert_eq!(event.payload, Some(vec![0x11, 0x22]));
    assert_eq!(event.gain, Some(6));
    assert_eq!(event.timestamp, Some(900));
}
