// libsci/src/atr/buffer.rs

use crate::constants::MAX_ATR_SIZE;
use crate::{Error, Result};

/// Fixed-capacity ATR buffer filled character by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtrBuffer {
    bytes: [u8; MAX_ATR_SIZE],
    len: usize,
}

impl AtrBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0u8; MAX_ATR_SIZE],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        MAX_ATR_SIZE
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= MAX_ATR_SIZE
    }

    /// Append one character; a full buffer is an error, never an overwrite.
    pub fn push(&mut self, b: u8) -> Result<()> {
        if self.is_full() {
            return Err(Error::AtrBufferFull {
                capacity: MAX_ATR_SIZE,
            });
        }
        self.bytes[self.len] = b;
        self.len += 1;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn first(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }

    /// Overwrite TS. No-op on an empty buffer.
    pub fn set_first(&mut self, b: u8) {
        if self.len > 0 {
            self.bytes[0] = b;
        }
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_slice())
    }
}

impl Default for AtrBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[u8]> for AtrBuffer {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let mut buf = Self::new();
        for &b in bytes {
            buf.push(b)?;
        }
        Ok(buf)
    }
}
