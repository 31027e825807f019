//! Utilities for libsci: small helpers shared by the ATR engine and the
//! session controller.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
