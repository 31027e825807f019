// libsci/src/types.rs

use derive_more::{Display, From, Into};

use crate::constants::{DM7025_CLOCK, PLL_CLOCK_THRESHOLD, TS_INVERSE_RAW};

/// Reader clock class - Newtype Pattern
///
/// Nominal readers report the card clock in MHz (e.g. `357` for 3.57 MHz on
/// some drivers, `1000` on others); PLL readers report hundredths of a MHz
/// and always land above `PLL_CLOCK_THRESHOLD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockClass(u32);

impl ClockClass {
    pub const fn new(mhz: u32) -> Self {
        Self(mhz)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// PLL readers take their timings in microseconds and their divisor
    /// from the clock value.
    pub fn is_pll(&self) -> bool {
        self.0 > PLL_CLOCK_THRESHOLD
    }

    pub fn is_dm7025(&self) -> bool {
        self.0 == DM7025_CLOCK
    }
}

/// Bit convention used by the card for every ATR character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    #[default]
    Direct,
    Inverse,
}

impl Convention {
    /// Detect the convention from the raw TS character.
    pub fn from_raw_ts(ts: u8) -> Self {
        if ts == TS_INVERSE_RAW {
            Self::Inverse
        } else {
            Self::Direct
        }
    }

    /// Normalize one raw character read from the line.
    pub fn decode(&self, raw: u8) -> u8 {
        match self {
            Self::Direct => raw,
            Self::Inverse => !raw,
        }
    }
}

/// Receiver hardware family, selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HardwareVariant {
    /// Drivers with a dedicated "is card activated" query
    Generic,
    /// SH4 drivers answer activation through the presence query
    Sh4,
}

impl Default for HardwareVariant {
    fn default() -> Self {
        if cfg!(feature = "sh4") {
            HardwareVariant::Sh4
        } else {
            HardwareVariant::Generic
        }
    }
}

/// Physical card presence as reported by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Absent,
    Present,
}

impl CardStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

impl From<bool> for CardStatus {
    fn from(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}
