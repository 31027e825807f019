// libsci/src/transport/traits.rs

use crate::Result;

/// Timed single-character transport abstracting the reader's serial line.
pub trait ByteTransport {
    /// Read one character. `timeout` is in the reader's native unit
    /// (milliseconds for nominal readers, microseconds for PLL readers).
    /// Implementations return `Error::Timeout` when nothing arrives.
    fn read_byte(&mut self, timeout: u32) -> Result<u8>;
}
