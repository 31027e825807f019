// libsci/src/atr/validator.rs

use super::record::Atr;

/// Outcome of structural ATR validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(Atr),
    /// Usable but not ISO conformant
    Malformed(Atr),
    Invalid,
}

/// Structural validator fed with the raw acquired ATR.
pub trait AtrValidator {
    fn validate(&self, bytes: &[u8]) -> Validation;
}

/// Successful acquisition result. A malformed ATR still counts as a reset
/// success, but the session should be treated as degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtrStatus {
    Valid(Atr),
    Malformed(Atr),
}

impl AtrStatus {
    pub fn atr(&self) -> &Atr {
        match self {
            Self::Valid(atr) | Self::Malformed(atr) => atr,
        }
    }

    pub fn into_atr(self) -> Atr {
        match self {
            Self::Valid(atr) | Self::Malformed(atr) => atr,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
