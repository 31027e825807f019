// libsci/src/device/models/generic.rs

use crate::Result;
use crate::control::ControlChannel;

/// Drivers exposing a dedicated "is card activated" query.
pub struct GenericModel;

impl GenericModel {
    pub fn new() -> Self {
        Self
    }
}

impl crate::device::models::ReaderModel for GenericModel {
    fn activate(&self, control: &mut dyn ControlChannel) -> Result<bool> {
        control.card_present()?;
        control.card_activated()
    }
}
