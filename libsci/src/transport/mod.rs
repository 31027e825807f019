// libsci/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockByteTransport;
pub use traits::ByteTransport;
