// libsci/src/device/config.rs
//! Reader configuration as it appears in a receiver's reader list.

use crate::types::{ClockClass, HardwareVariant};
use crate::{Error, Result};

/// Static description of one internal reader.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Name used in diagnostics
    pub label: String,
    /// Clock class: MHz for nominal readers, hundredths of MHz for PLL
    /// readers (e.g. `8300` for the DM7025)
    pub mhz: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variant: HardwareVariant,
}

impl ReaderConfig {
    pub fn new(label: impl Into<String>, mhz: u32) -> Self {
        Self {
            label: label.into(),
            mhz,
            variant: HardwareVariant::default(),
        }
    }

    pub fn clock(&self) -> ClockClass {
        ClockClass::new(self.mhz)
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::InvalidConfig("reader label is empty".to_string()));
        }
        if self.mhz == 0 {
            return Err(Error::InvalidConfig(format!(
                "reader {}: clock class must be non-zero",
                self.label
            )));
        }
        Ok(())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new("sci0", 357)
    }
}
