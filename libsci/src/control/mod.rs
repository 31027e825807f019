// libsci/src/control/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockControl;
pub use traits::{ControlChannel, ControlCommand};
