//! Fuzz target for input record decoding.
//!
//! Any tag and payload the OS could hand back must decode without panicking,
//! and known events must survive re-encoding.

#![no_main]

use arbitrary::Arbitrary;
use ergonomic_console::input::{event_type, InputRecord, RawInputRecord};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    event_type: u16,
    payload: [u8; 16],
}

fuzz_target!(|input: Input| {
    let raw = RawInputRecord::from_parts(input.event_type, input.payload);
    let decoded = raw.decode();

    assert_eq!(decoded.event_type(), input.event_type);

    let known = matches!(
        input.event_type,
        event_type::KEY
            | event_type::MOUSE
            | event_type::WINDOW_BUFFER_SIZE
            | event_type::MENU
            | event_type::FOCUS
    );
    assert_eq!(known, !matches!(decoded, InputRecord::Unknown(_)));

    // Re-encoding a decoded event yields the same event.
    let again = RawInputRecord::from(decoded).decode();
    assert_eq!(again, decoded);

    if let Some(key) = decoded.key_down() {
        assert!(key.is_key_down());
    }
});
