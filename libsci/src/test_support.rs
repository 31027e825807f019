//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock setup so tests across the crate
//! and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::atr::Iso7816Validator;
use crate::control::MockControl;
use crate::device::{ReaderConfig, SciReader};
use crate::transport::MockByteTransport;
use crate::types::HardwareVariant;

/// Build a SciReader backed by mocks. The returned mock handles share
/// state with the ones owned by the reader, so tests can seed more bytes
/// and inspect recorded commands afterwards.
#[doc(hidden)]
pub fn mock_reader(
    mhz: u32,
    variant: HardwareVariant,
    atr: &[u8],
) -> (SciReader, MockControl, MockByteTransport) {
    let control = MockControl::new();
    let line = MockByteTransport::with_bytes(atr);
    let mut config = ReaderConfig::new("mock", mhz);
    config.variant = variant;
    let reader = SciReader::new(
        config,
        Box::new(control.clone()),
        Box::new(line.clone()),
        Box::new(Iso7816Validator),
    );
    (reader, control, line)
}

/// Encode a decoded ATR the way an inverse convention card puts it on the
/// SCI line (the complement of every character, TS as 0x03).
#[doc(hidden)]
pub fn inverse_line_bytes(decoded_after_ts: &[u8]) -> Vec<u8> {
    let mut out = vec![crate::constants::TS_INVERSE_RAW];
    out.extend(decoded_after_ts.iter().map(|b| !b));
    out
}
