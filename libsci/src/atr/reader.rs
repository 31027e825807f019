// libsci/src/atr/reader.rs

use log::{debug, warn};

use super::buffer::AtrBuffer;
use super::chain::InterfaceChain;
use super::validator::{AtrStatus, AtrValidator, Validation};
use crate::constants::{
    IRDETO_TAG, IRDETO_TAG_OFFSET, LOW_NIBBLE, TS_DIRECT, TS_INVERSE, TS_INVERSE_STORED,
};
use crate::control::ControlChannel;
use crate::transport::ByteTransport;
use crate::types::{ClockClass, Convention};
use crate::utils::atr_read_timeout;
use crate::{Error, Result};

/// ATR acquisition engine.
///
/// Reads the ATR on the fly: characters are decoded and the interface
/// chain is walked while they arrive, so the engine knows how many to wait
/// for. The reader must just have been reset (or otherwise have an ATR
/// pending).
pub struct AtrReader<'a> {
    label: &'a str,
    clock: ClockClass,
    control: &'a mut dyn ControlChannel,
    transport: &'a mut dyn ByteTransport,
}

impl<'a> AtrReader<'a> {
    pub fn new(
        label: &'a str,
        clock: ClockClass,
        control: &'a mut dyn ControlChannel,
        transport: &'a mut dyn ByteTransport,
    ) -> Self {
        Self {
            label,
            clock,
            control,
            transport,
        }
    }

    /// Acquire the ATR and hand it to `validator`.
    ///
    /// A malformed ATR is still a success (`AtrStatus::Malformed`); an
    /// invalid one is `Error::InvalidAtr`.
    pub fn read(&mut self, validator: &dyn AtrValidator) -> Result<AtrStatus> {
        let buf = self.acquire()?;

        match validator.validate(buf.as_slice()) {
            Validation::Valid(atr) => Ok(AtrStatus::Valid(atr)),
            Validation::Malformed(atr) => {
                warn!(
                    "reader {}: ATR is malformed, inspect it with debug logging: {}",
                    self.label,
                    buf.to_hex()
                );
                Ok(AtrStatus::Malformed(atr))
            }
            Validation::Invalid => {
                warn!("reader {}: ATR is invalid: {}", self.label, buf.to_hex());
                Err(Error::InvalidAtr)
            }
        }
    }

    /// Collect the raw ATR characters without validating them.
    pub fn acquire(&mut self) -> Result<AtrBuffer> {
        self.wait_for_atr()?;

        let timeout = atr_read_timeout(self.clock);
        let mut buf = AtrBuffer::new();

        let raw_ts = self.transport.read_byte(timeout).map_err(|e| {
            debug!("reader {}: no characters found in ATR ({})", self.label, e);
            Error::NoAtrData
        })?;
        let convention = Convention::from_raw_ts(raw_ts);
        if convention == Convention::Inverse {
            debug!("reader {}: card uses inverse convention", self.label);
        }
        buf.push(convention.decode(raw_ts))?;

        let raw_t0 = self.transport.read_byte(timeout).map_err(|e| {
            debug!("reader {}: only 1 character found in ATR ({})", self.label, e);
            Error::InsufficientAtrData
        })?;
        let t0 = convention.decode(raw_t0);
        buf.push(t0)?;
        let historical = (t0 & LOW_NIBBLE) as usize;
        debug!(
            "reader {}: ATR historical bytes should be: {}",
            self.label, historical
        );

        let chain = self.walk_interface_bytes(&mut buf, t0, convention, timeout);

        let expected = buf.len() + historical;
        debug!(
            "reader {}: total ATR length including {} historical bytes should be: {} ({} interface bytes)",
            self.label,
            historical,
            expected,
            chain.interface_bytes()
        );

        self.read_historical_bytes(&mut buf, expected, convention, timeout);

        if buf.len() != expected {
            warn!(
                "reader {}: total ATR characters received is: {} instead of expected {}",
                self.label,
                buf.len(),
                expected
            );
        }

        if normalize_irdeto_ts(&mut buf) {
            debug!("reader {}: rewrote Irdeto TS to {:#04x}", self.label, TS_DIRECT);
        }

        Ok(buf)
    }

    /// Busy-poll the driver until it has the ATR. There is deliberately no
    /// deadline here; callers that need one must wrap the whole reset.
    fn wait_for_atr(&mut self) -> Result<()> {
        loop {
            let pending = self.control.atr_pending()?;
            debug!("reader {}: waiting for card ATR response...", self.label);
            if !pending {
                return Ok(());
            }
        }
    }

    /// Walk TA/TB/TC/TD groups until a TDi without its TD bit, a read
    /// failure, or a full buffer. Failures here are soft.
    fn walk_interface_bytes(
        &mut self,
        buf: &mut AtrBuffer,
        t0: u8,
        convention: Convention,
        timeout: u32,
    ) -> InterfaceChain {
        let mut chain = InterfaceChain::new(t0);

        'walk: while chain.has_more() && !buf.is_full() {
            for kind in chain.open_group() {
                let b = match self.transport.read_byte(timeout) {
                    Ok(raw) => convention.decode(raw),
                    Err(e) => {
                        debug!("reader {}: {} missing ({})", self.label, kind.name(), e);
                        chain.abort();
                        break 'walk;
                    }
                };
                if let Err(e) = buf.push(b) {
                    debug!("reader {}: {} dropped: {}", self.label, kind.name(), e);
                    chain.abort();
                    break 'walk;
                }
                debug!("reader {}: {}: {:02X}", self.label, kind.name(), b);
                chain.record(kind, b);
            }
        }

        chain
    }

    /// Read historical characters up to `expected` total length. Stops early,
    /// without error, on a read failure or a full buffer.
    fn read_historical_bytes(
        &mut self,
        buf: &mut AtrBuffer,
        expected: usize,
        convention: Convention,
        timeout: u32,
    ) {
        while buf.len() < expected {
            match self.transport.read_byte(timeout) {
                Ok(raw) => {
                    if let Err(e) = buf.push(convention.decode(raw)) {
                        debug!("reader {}: historical bytes dropped: {}", self.label, e);
                        break;
                    }
                }
                Err(e) => {
                    debug!(
                        "reader {}: historical byte {} missing ({})",
                        self.label,
                        buf.len(),
                        e
                    );
                    break;
                }
            }
        }
    }
}

/// Irdeto S02 cards on some SCI drivers report a bogus TS (0xFD on the
/// dreambox). When TS is not a standard value (direct, inverse, or the
/// stored complement of the raw inverse TS) and the Irdeto tag sits at
/// bytes 4..10, force TS to the direct convention. Returns true when TS was
/// rewritten.
pub fn normalize_irdeto_ts(buf: &mut AtrBuffer) -> bool {
    let bytes = buf.as_slice();
    let ts = match bytes.first() {
        Some(&ts) => ts,
        None => return false,
    };
    let tag_end = IRDETO_TAG_OFFSET + IRDETO_TAG.len();
    if matches!(ts, TS_DIRECT | TS_INVERSE | TS_INVERSE_STORED) || bytes.len() < tag_end {
        return false;
    }
    if bytes[IRDETO_TAG_OFFSET..tag_end] != IRDETO_TAG[..] {
        return false;
    }
    buf.set_first(TS_DIRECT);
    true
}
