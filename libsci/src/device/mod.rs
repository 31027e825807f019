// libsci/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod models;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{ReaderContext, SciReader};
