// libsci/src/device/builder.rs

use crate::atr::{AtrValidator, Iso7816Validator};
use crate::control::ControlChannel;
use crate::device::config::ReaderConfig;
use crate::device::handle::SciReader;
use crate::transport::ByteTransport;
use crate::types::HardwareVariant;
use crate::{Error, Result};

/// Helper to construct a SciReader with optional configuration.
pub struct ReaderBuilder {
    config: ReaderConfig,
    control: Option<Box<dyn ControlChannel>>,
    transport: Option<Box<dyn ByteTransport>>,
    validator: Option<Box<dyn AtrValidator>>,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
            control: None,
            transport: None,
            validator: None,
        }
    }

    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    pub fn mhz(mut self, mhz: u32) -> Self {
        self.config.mhz = mhz;
        self
    }

    /// Override the build-time hardware variant.
    pub fn variant(mut self, variant: HardwareVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn with_control(mut self, control: Box<dyn ControlChannel>) -> Self {
        self.control = Some(control);
        self
    }

    pub fn with_transport(mut self, transport: Box<dyn ByteTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the default ISO 7816-3 validator.
    pub fn with_validator(mut self, validator: Box<dyn AtrValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Consume the builder and return a reader.
    /// Requires a control channel and a transport; otherwise returns
    /// DeviceNotFound.
    pub fn build(self) -> Result<SciReader> {
        self.config.validate()?;
        let (control, transport) = match (self.control, self.transport) {
            (Some(c), Some(t)) => (c, t),
            _ => return Err(Error::DeviceNotFound),
        };
        let validator = self
            .validator
            .unwrap_or_else(|| Box::new(Iso7816Validator));
        Ok(SciReader::new(self.config, control, transport, validator))
    }
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
