// libsci/src/prelude.rs

pub use crate::atr::{Atr, AtrStatus, AtrValidator, Iso7816Validator, Validation};
pub use crate::control::ControlChannel;
pub use crate::device::{ReaderBuilder, ReaderConfig, SciReader};
pub use crate::params::{ParameterUpdate, SessionParameters};
pub use crate::transport::ByteTransport;
pub use crate::{CardStatus, ClockClass, Convention, Error, HardwareVariant, Result};

pub use crate::utils::{atr_read_timeout, bytes_to_hex_spaced};
