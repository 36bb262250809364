// Polling-loop telemetry decoding example

// This example feeds two captured telemetry frames through the dispatcher
// and prints every event the listener receives. Run with RUST_LOG=warn to
// see decode warnings for malformed input.

use anyhow::Result;
use libnci::prelude::*;

struct PrintListener;

impl DeviceHostListener for PrintListener {
    fn on_polling_loop_detected(&mut self, event: PollingLoopEvent) {
        println!("  event: {}", event);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // A field-on report and a two-record technology sweep (NFC-A then
    // NFC-B; the second record's shared fields win).
    let frames = [
        "00 00 08 00 00 00 01 02 03 04 01",
        "00 00 07 00 01 64 00 00 00 01 00 07 00 02 c8 00 00 00 02 00",
    ];

    let mut dispatcher = PollingLoopDispatcher::new(PrintListener);
    for hex in frames {
        println!("frame: {}", hex);
        let data = parse_hex(hex).map_err(anyhow::Error::msg)?;
        dispatcher.notify_polling_loop_frame(&data);
    }

    Ok(())
}
