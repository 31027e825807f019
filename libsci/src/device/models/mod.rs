// libsci/src/device/models/mod.rs

use crate::Result;
use crate::control::ControlChannel;
use crate::types::HardwareVariant;

/// Hardware specific behaviour of an SCI receiver family.
pub trait ReaderModel {
    /// Issue the activation sequence. Returns what the driver's final
    /// status query reported.
    fn activate(&self, control: &mut dyn ControlChannel) -> Result<bool>;
}

mod generic;
mod sh4;

pub use generic::GenericModel;
pub use sh4::Sh4Model;

/// Factory to create a model implementation for a hardware variant.
pub fn create_model_for(variant: HardwareVariant) -> Box<dyn ReaderModel> {
    match variant {
        HardwareVariant::Generic => Box::new(GenericModel::new()),
        HardwareVariant::Sh4 => Box::new(Sh4Model::new()),
    }
}
