// libsci/src/atr/chain.rs

use crate::constants::{TA_PRESENT, TB_PRESENT, TC_PRESENT, TD_PRESENT};

/// Interface character kinds, in transmission order within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceByte {
    Ta,
    Tb,
    Tc,
    Td,
}

impl InterfaceByte {
    pub const ALL: [InterfaceByte; 4] = [Self::Ta, Self::Tb, Self::Tc, Self::Td];

    pub const fn mask(&self) -> u8 {
        match self {
            Self::Ta => TA_PRESENT,
            Self::Tb => TB_PRESENT,
            Self::Tc => TC_PRESENT,
            Self::Td => TD_PRESENT,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ta => "TA",
            Self::Tb => "TB",
            Self::Tc => "TC",
            Self::Td => "TDi",
        }
    }
}

/// Walk state over the TDi chain of one ATR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceChain {
    tdi: u8,
    interface_bytes: usize,
    more: bool,
}

impl InterfaceChain {
    /// Start a walk from T0, which plays the role of the first TDi.
    pub fn new(t0: u8) -> Self {
        Self {
            tdi: t0,
            interface_bytes: 0,
            more: true,
        }
    }

    pub fn tdi(&self) -> u8 {
        self.tdi
    }

    pub fn interface_bytes(&self) -> usize {
        self.interface_bytes
    }

    pub fn has_more(&self) -> bool {
        self.more
    }

    /// Interface characters announced by the current TDi, in read order.
    /// Opening a group ends the chain unless its TD is later recorded.
    pub fn open_group(&mut self) -> Vec<InterfaceByte> {
        self.more = false;
        InterfaceByte::ALL
            .into_iter()
            .filter(|kind| self.tdi & kind.mask() != 0)
            .collect()
    }

    /// Account for a character read from the current group.
    pub fn record(&mut self, kind: InterfaceByte, value: u8) {
        self.interface_bytes += 1;
        if kind == InterfaceByte::Td {
            self.tdi = value;
            self.more = true;
        }
    }

    /// Stop the walk early (read failure or buffer exhaustion).
    pub fn abort(&mut self) {
        self.more = false;
    }
}
