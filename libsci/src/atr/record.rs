// libsci/src/atr/record.rs

use log::debug;

use super::chain::InterfaceByte;
use super::validator::{AtrValidator, Validation};
use crate::constants::{LOW_NIBBLE, MAX_PROTOCOL_GROUPS, TS_DIRECT, TS_INVERSE, TS_INVERSE_STORED};
use crate::types::Convention;

/// Clock rate conversion factor Fi indexed by the high nibble of TA1 (0 = RFU)
const FI_TABLE: [u16; 16] = [
    372, 372, 558, 744, 1116, 1488, 1860, 0, 0, 512, 768, 1024, 1536, 2048, 0, 0,
];

/// Baud rate adjustment factor Di indexed by the low nibble of TA1 (0 = RFU)
const DI_TABLE: [u8; 16] = [0, 1, 2, 4, 8, 16, 32, 64, 12, 20, 0, 0, 0, 0, 0, 0];

/// One TAi/TBi/TCi/TDi group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceGroup {
    pub ta: Option<u8>,
    pub tb: Option<u8>,
    pub tc: Option<u8>,
    pub td: Option<u8>,
}

impl InterfaceGroup {
    /// Protocol type announced by this group's TD
    pub fn protocol(&self) -> Option<u8> {
        self.td.map(|td| td & LOW_NIBBLE)
    }

    fn slot(&mut self, kind: InterfaceByte) -> &mut Option<u8> {
        match kind {
            InterfaceByte::Ta => &mut self.ta,
            InterfaceByte::Tb => &mut self.tb,
            InterfaceByte::Tc => &mut self.tc,
            InterfaceByte::Td => &mut self.td,
        }
    }
}

/// Structured Answer-To-Reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atr {
    raw: Vec<u8>,
    convention: Convention,
    groups: Vec<InterfaceGroup>,
    historical: Vec<u8>,
    tck: Option<u8>,
}

impl Atr {
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Interface groups; index 0 holds TA1..TD1.
    pub fn groups(&self) -> &[InterfaceGroup] {
        &self.groups
    }

    pub fn historical_bytes(&self) -> &[u8] {
        &self.historical
    }

    pub fn tck(&self) -> Option<u8> {
        self.tck
    }

    /// Protocols offered by the card in announcement order. A card that
    /// announces none speaks T=0.
    pub fn protocols(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        for t in self.groups.iter().filter_map(InterfaceGroup::protocol) {
            if !out.contains(&t) {
                out.push(t);
            }
        }
        if out.is_empty() {
            out.push(0);
        }
        out
    }

    /// (Fi, Di) from TA1, if present and not RFU.
    pub fn fi_di(&self) -> Option<(u16, u8)> {
        let ta1 = self.groups.first()?.ta?;
        let fi = FI_TABLE[(ta1 >> 4) as usize];
        let di = DI_TABLE[(ta1 & LOW_NIBBLE) as usize];
        if fi == 0 || di == 0 {
            return None;
        }
        Some((fi, di))
    }

    /// Extra guard time N from TC1
    pub fn extra_guard_time(&self) -> Option<u8> {
        self.groups.first()?.tc
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.raw)
    }
}

/// ISO/IEC 7816-3 structural validator.
///
/// Rejects (`Invalid`) buffers shorter than TS+T0 and unknown TS values.
/// Everything else parses; truncated interface or historical characters,
/// excess interface groups, a wrong TCK and stray trailing bytes make the
/// result `Malformed`. The acquisition engine never reads TCK, so a missing
/// TCK is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso7816Validator;

impl AtrValidator for Iso7816Validator {
    fn validate(&self, bytes: &[u8]) -> Validation {
        if bytes.len() < 2 {
            return Validation::Invalid;
        }
        let convention = match bytes[0] {
            TS_DIRECT => Convention::Direct,
            TS_INVERSE | TS_INVERSE_STORED => Convention::Inverse,
            ts => {
                debug!("unknown TS {:#04x}", ts);
                return Validation::Invalid;
            }
        };

        let t0 = bytes[1];
        let k = (t0 & LOW_NIBBLE) as usize;
        let mut pointer = 2usize;
        let mut tdi = t0;
        let mut groups: Vec<InterfaceGroup> = Vec::new();
        let mut problem: Option<&'static str> = None;

        'groups: loop {
            if groups.len() == MAX_PROTOCOL_GROUPS {
                problem = Some("too many interface groups");
                break;
            }
            let mut group = InterfaceGroup::default();
            for kind in InterfaceByte::ALL {
                if tdi & kind.mask() == 0 {
                    continue;
                }
                match bytes.get(pointer) {
                    Some(&b) => {
                        *group.slot(kind) = Some(b);
                        pointer += 1;
                    }
                    None => {
                        problem = Some("interface characters truncated");
                        groups.push(group);
                        break 'groups;
                    }
                }
            }
            groups.push(group);
            match group.td {
                Some(td) => tdi = td,
                None => break,
            }
        }

        let available = bytes.len().saturating_sub(pointer).min(k);
        let historical = bytes[pointer..pointer + available].to_vec();
        pointer += available;
        if available < k && problem.is_none() {
            problem = Some("historical characters truncated");
        }

        let mut tck = None;
        if problem.is_none() && pointer < bytes.len() {
            let needs_tck = groups
                .iter()
                .filter_map(InterfaceGroup::protocol)
                .any(|t| t != 0);
            if needs_tck {
                tck = Some(bytes[pointer]);
                pointer += 1;
                let check = bytes[1..pointer].iter().fold(0u8, |acc, &b| acc ^ b);
                if check != 0 {
                    problem = Some("TCK mismatch");
                }
            }
            if problem.is_none() && pointer < bytes.len() {
                problem = Some("trailing characters after ATR");
            }
        }

        let atr = Atr {
            raw: bytes.to_vec(),
            convention,
            groups,
            historical,
            tck,
        };

        match problem {
            Some(reason) => {
                debug!("ATR {} is malformed: {}", atr.to_hex(), reason);
                Validation::Malformed(atr)
            }
            None => Validation::Valid(atr),
        }
    }
}
