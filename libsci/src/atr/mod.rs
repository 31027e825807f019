// libsci/src/atr/mod.rs
//! Answer-To-Reset acquisition and structural validation.

mod buffer;
mod chain;
mod reader;
mod record;
mod validator;

pub use buffer::AtrBuffer;
pub use chain::{InterfaceByte, InterfaceChain};
pub use reader::{AtrReader, normalize_irdeto_ts};
pub use record::{Atr, InterfaceGroup, Iso7816Validator};
pub use validator::{AtrStatus, AtrValidator, Validation};
