// libsci/src/lib.rs

//! libsci
//!
//! Pure Rust ATR acquisition and session parameter handling for SCI
//! internal smart card readers.
#![warn(missing_docs)]

pub mod atr;
pub mod constants;
pub mod control;
pub mod device;
pub mod error;
pub mod params;
pub mod prelude;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
