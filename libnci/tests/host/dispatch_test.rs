#[path = "../common/mod.rs"]
mod common;

use libnci::host::{MockListener, PollingLoopDispatcher};
use libnci::types::PollingFrameType;

#[test]
fn short_buffers_never_notify() {
    let mut dispatcher = PollingLoopDispatcher::new(MockListener::new());
    for len in 0..5 {
        dispatcher.notify_polling_loop_frame(&vec![0xffu8; len]);
    }
    assert_eq!(dispatcher.listener().notification_count(), 0);
}

#[test]
fn garbage_at_minimum_size_notifies_with_empty_event() {
    let mut dispatcher = PollingLoopDispatcher::new(MockListener::new());
    dispatcher.notify_polling_loop_frame(&common::fixtures::overrunning_frame());
    assert_eq!(dispatcher.listener().notification_count(), 1);
    assert!(dispatcher.listener().last_event().unwrap().is_empty());
}

#[test]
fn decoded_fields_reach_the_listener() {
    let mut dispatcher = PollingLoopDispatcher::new(MockListener::new());
    dispatcher.notify_polling_loop_frame(&common::fixtures::field_on_frame());

    let listener = dispatcher.into_inner();
    let event = &listener.events[0];
    assert_eq!(event.frame_type, Some(PollingFrameType::FieldOn));
    assert_eq!(event.gain, Some(4));
    assert_eq!(event.timestamp, Some(0x0302_0100));
}

#[test]
fn one_notification_per_eligible_buffer() {
    let mut dispatcher = PollingLoopDispatcher::new(MockListener::new());
    dispatcher.notify_polling_loop_frame(&common::fixtures::field_on_frame());
    dispatcher.notify_polling_loop_frame(&[0x00, 0x00]);
    dispatcher.notify_polling_loop_frame(&common::fixtures::two_technology_frame());
    dispatcher.notify_polling_loop_frame(&[]);
    dispatcher.notify_polling_loop_frame(&common::fixtures::field_off_frame());

    let listener = dispatcher.into_inner();
    assert_eq!(listener.notification_count(), 3);
    assert_eq!(
        listener.events[1].frame_type,
        Some(PollingFrameType::NfcB)
    );
    assert_eq!(
        listener.events[2].frame_type,
        Some(PollingFrameType::FieldOff)
    );
}
