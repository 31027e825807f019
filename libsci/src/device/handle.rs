// libsci/src/device/handle.rs

use log::{debug, info, warn};

use crate::atr::{AtrReader, AtrStatus, AtrValidator};
use crate::control::ControlChannel;
use crate::device::config::ReaderConfig;
use crate::device::models::{self, ReaderModel};
use crate::params::{ParameterUpdate, SessionParameters};
use crate::transport::ByteTransport;
use crate::types::{CardStatus, ClockClass, HardwareVariant};
use crate::Result;

/// Identity of one physical reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderContext {
    label: String,
    clock: ClockClass,
    variant: HardwareVariant,
}

impl ReaderContext {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn clock(&self) -> ClockClass {
        self.clock
    }

    pub fn variant(&self) -> HardwareVariant {
        self.variant
    }
}

impl From<ReaderConfig> for ReaderContext {
    fn from(cfg: ReaderConfig) -> Self {
        Self {
            clock: cfg.clock(),
            label: cfg.label,
            variant: cfg.variant,
        }
    }
}

/// Session controller for an SCI internal reader.
///
/// Every operation blocks until done. Resets busy-wait for the driver to
/// collect the ATR without a deadline; run them where blocking is allowed.
pub struct SciReader {
    context: ReaderContext,
    control: Box<dyn ControlChannel>,
    transport: Box<dyn ByteTransport>,
    validator: Box<dyn AtrValidator>,
    model: Box<dyn ReaderModel>,
}

impl SciReader {
    pub fn new(
        config: ReaderConfig,
        control: Box<dyn ControlChannel>,
        transport: Box<dyn ByteTransport>,
        validator: Box<dyn AtrValidator>,
    ) -> Self {
        let model = models::create_model_for(config.variant);
        Self {
            context: config.into(),
            control,
            transport,
            validator,
            model,
        }
    }

    pub fn context(&self) -> &ReaderContext {
        &self.context
    }

    /// Cold reset: push clock-class defaults, reset the card and read its
    /// ATR. The driver is told the ATR was consumed even when reading failed.
    pub fn cold_reset(&mut self) -> Result<AtrStatus> {
        info!("reader {}: reset internal cardreader", self.context.label);
        let params = SessionParameters::for_clock(self.context.clock);
        debug!("reader {}: default parameters {:?}", self.context.label, params);
        self.control.set_parameters(&params)?;
        self.reset_and_read()
    }

    /// Warm reset with the parameters already held by the reader.
    pub fn fast_reset(&mut self) -> Result<AtrStatus> {
        info!("reader {}: fast reset", self.context.label);
        self.reset_and_read()
    }

    /// Read an ATR that is already pending, without touching the reset line.
    pub fn read_atr(&mut self) -> Result<AtrStatus> {
        let mut reader = AtrReader::new(
            &self.context.label,
            self.context.clock,
            &mut *self.control,
            &mut *self.transport,
        );
        reader.read(&*self.validator)
    }

    fn reset_and_read(&mut self) -> Result<AtrStatus> {
        self.control.set_reset()?;
        let result = self.read_atr();
        if let Err(e) = self.control.set_atr_ready() {
            warn!("reader {}: failed to signal ATR ready: {}", self.context.label, e);
        }
        result
    }

    /// Activate the card. No ATR is read.
    pub fn activate(&mut self) -> Result<()> {
        info!("reader {}: activating card", self.context.label);
        debug!("reader {}: is card activated?", self.context.label);
        let activated = self.model.activate(&mut *self.control)?;
        debug!("reader {}: activation query returned {}", self.context.label, activated);
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<()> {
        info!("reader {}: deactivating card", self.context.label);
        self.control.deactivate()
    }

    /// Physical card presence
    pub fn status(&mut self) -> Result<CardStatus> {
        let present = self.control.card_present()?;
        Ok(CardStatus::from(present))
    }

    /// Parameter set currently held by the reader.
    pub fn parameters(&mut self) -> Result<SessionParameters> {
        self.control.get_parameters()
    }

    /// Read-modify-write of the reader parameters; see `ParameterUpdate`
    /// for which zero fields are left alone.
    pub fn write_settings(&mut self, update: &ParameterUpdate) -> Result<()> {
        let current = self.control.get_parameters()?;
        let p = update.apply_to(&current);
        debug!(
            "reader {}: setting T={} fs={} ETU={} WWT={} CWT={} BWT={} EGT={} clock={} check={} P={} I={} U={}",
            self.context.label,
            p.t,
            p.fs,
            p.etu,
            p.wwt,
            p.cwt,
            p.bwt,
            p.egt,
            p.clock_stop_polarity,
            p.check,
            p.p,
            p.i,
            p.u
        );
        self.control.set_parameters(&p)
    }
}
