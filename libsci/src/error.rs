// libsci/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// No control channel or byte transport was supplied.
    #[error("device not found")]
    DeviceNotFound,

    /// The card did not send TS within the ATR timeout.
    #[error("no characters found in ATR")]
    NoAtrData,

    /// TS arrived but T0 did not.
    #[error("only 1 character found in ATR")]
    InsufficientAtrData,

    /// The validator rejected the ATR outright.
    #[error("ATR is invalid")]
    InvalidAtr,

    /// An append would exceed the ATR buffer.
    #[error("ATR buffer full: capacity {capacity} bytes")]
    AtrBufferFull {
        /// Buffer size in bytes
        capacity: usize,
    },

    /// A transport read saw no character in time.
    #[error("operation timed out")]
    Timeout,

    /// Byte transport failure reported by the line driver.
    #[error("transport error: {0}")]
    Transport(String),

    /// Device control command failed.
    #[error("control channel error: {0}")]
    Control(String),

    /// Reader configuration rejected by `ReaderConfig::validate`.
    #[error("invalid reader configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for libsci operations
pub type Result<T> = std::result::Result<T, Error>;
