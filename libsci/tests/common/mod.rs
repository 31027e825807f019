// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use libsci::atr::{AtrBuffer, AtrReader};
use libsci::control::MockControl;
use libsci::transport::MockByteTransport;
use libsci::{ClockClass, Result};

/// Run acquisition alone against a mock line seeded with `line_bytes`.
/// Returns the buffer and the line so tests can check what was left unread.
pub fn acquire(mhz: u32, line_bytes: &[u8]) -> (Result<AtrBuffer>, MockByteTransport) {
    let mut control = MockControl::new();
    let line = MockByteTransport::with_bytes(line_bytes);
    let mut handle = line.clone();
    let res = AtrReader::new("it", ClockClass::new(mhz), &mut control, &mut handle).acquire();
    (res, line)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
