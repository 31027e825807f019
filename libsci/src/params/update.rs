// libsci/src/params/update.rs

use super::SessionParameters;

/// Partial parameter write.
///
/// `etu`, `p` and `i` follow the driver's zero contract: `0` keeps whatever
/// the reader currently holds (Irdeto T=14 cards rely on the ETU surviving a
/// settings write). All other fields are always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterUpdate {
    pub t: u8,
    pub fs: u32,
    pub etu: u32,
    pub wwt: u32,
    pub bwt: u32,
    pub cwt: u32,
    pub egt: u32,
    pub p: u8,
    pub i: u8,
}

impl ParameterUpdate {
    pub fn new(t: u8, fs: u32) -> Self {
        Self {
            t,
            fs,
            ..Self::default()
        }
    }

    pub fn etu(mut self, etu: u32) -> Self {
        self.etu = etu;
        self
    }

    pub fn waiting_times(mut self, wwt: u32, bwt: u32, cwt: u32) -> Self {
        self.wwt = wwt;
        self.bwt = bwt;
        self.cwt = cwt;
        self
    }

    pub fn egt(mut self, egt: u32) -> Self {
        self.egt = egt;
        self
    }

    pub fn parity(mut self, p: u8) -> Self {
        self.p = p;
        self
    }

    pub fn inversion(mut self, i: u8) -> Self {
        self.i = i;
        self
    }

    /// Overlay this update on the parameters currently held by the reader.
    pub fn apply_to(&self, current: &SessionParameters) -> SessionParameters {
        let mut merged = *current;
        merged.t = self.t;
        merged.fs = self.fs;
        if self.etu != 0 {
            merged.etu = self.etu;
        }
        merged.egt = self.egt;
        merged.wwt = self.wwt;
        merged.bwt = self.bwt;
        merged.cwt = self.cwt;
        if self.p != 0 {
            merged.p = self.p;
        }
        if self.i != 0 {
            merged.i = self.i;
        }
        merged
    }
}
