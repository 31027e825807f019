//! ATR character timeout selection.
//!
//! Nominal readers take the timeout in milliseconds; PLL readers take it in
//! microseconds, so the same wall-clock budget is scaled by 1000.

use crate::constants::ATR_TIMEOUT;
use crate::types::ClockClass;

/// Per-character timeout used while reading the ATR, in the reader's unit.
pub fn atr_read_timeout(clock: ClockClass) -> u32 {
    if clock.is_pll() {
        ATR_TIMEOUT * 1000
    } else {
        ATR_TIMEOUT
    }
}
