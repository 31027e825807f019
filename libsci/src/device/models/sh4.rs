// libsci/src/device/models/sh4.rs

use crate::Result;
use crate::control::ControlChannel;

/// SH4 drivers have no activation query; the presence query activates.
pub struct Sh4Model;

impl Sh4Model {
    pub fn new() -> Self {
        Self
    }
}

impl crate::device::models::ReaderModel for Sh4Model {
    fn activate(&self, control: &mut dyn ControlChannel) -> Result<bool> {
        control.card_present()?;
        control.card_present()
    }
}
