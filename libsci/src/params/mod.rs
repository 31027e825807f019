// libsci/src/params/mod.rs
//! Electrical session parameters held by the reader.

pub mod divisor;
mod update;

pub use update::ParameterUpdate;

use crate::constants::{DEFAULT_EGT, DEFAULT_ETU, DEFAULT_FS, DM7025_FS, PLL_EGT};
use crate::types::ClockClass;

/// Parameter block exchanged with the SCI driver.
///
/// `clock_stop_polarity`, `check` and `u` belong to the reader; this crate
/// carries them through a read-modify-write but never chooses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionParameters {
    /// Protocol type (T=0, T=1, T=14 ...)
    pub t: u8,
    /// Clock rate conversion / PLL divisor
    pub fs: u32,
    pub etu: u32,
    pub egt: u32,
    pub wwt: u32,
    pub bwt: u32,
    pub cwt: u32,
    /// Parity mode
    pub p: u8,
    /// Inversion mode
    pub i: u8,
    pub clock_stop_polarity: u8,
    pub check: u8,
    pub u: u8,
}

impl SessionParameters {
    /// Defaults pushed to the reader before a cold reset.
    ///
    /// Branches are evaluated in order and later ones win: nominal readers
    /// first, then any PLL reader, then the DM7025 which uses a fixed entry
    /// of its divisor table for 1 MHz.
    pub fn for_clock(clock: ClockClass) -> Self {
        let mut params = Self {
            t: 0,
            etu: DEFAULT_ETU,
            egt: DEFAULT_EGT,
            fs: DEFAULT_FS,
            ..Self::default()
        };

        if clock.is_pll() {
            params.etu = DEFAULT_ETU;
            params.egt = PLL_EGT;
            // divider for 1 MHz, rounded to nearest
            params.fs = clock.as_u32().saturating_add(50) / 100;
            params.t = 0;
        }

        if clock.is_dm7025() {
            params.etu = DEFAULT_ETU;
            params.egt = PLL_EGT;
            params.fs = DM7025_FS;
            params.t = 0;
        }

        params
    }
}
