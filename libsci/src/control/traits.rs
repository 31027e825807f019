// libsci/src/control/traits.rs

use crate::Result;
use crate::params::SessionParameters;

/// Discrete commands understood by the SCI device control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    SetParameters(SessionParameters),
    GetParameters,
    SetReset,
    GetCardPresent,
    GetCardActivated,
    GetAtrStatus,
    SetAtrReady,
    SetDeactivate,
}

/// Control channel abstracts the driver's command interface (ioctl on the
/// receivers this crate targets) away from the session logic.
pub trait ControlChannel {
    /// Apply a full electrical parameter set
    fn set_parameters(&mut self, params: &SessionParameters) -> Result<()>;

    /// Read back the parameter set currently held by the reader
    fn get_parameters(&mut self) -> Result<SessionParameters>;

    /// Pulse the reset line; the card answers with its ATR
    fn set_reset(&mut self) -> Result<()>;

    fn card_present(&mut self) -> Result<bool>;

    /// Query (and on most drivers trigger) card activation
    fn card_activated(&mut self) -> Result<bool>;

    /// True while the driver is still collecting the ATR
    fn atr_pending(&mut self) -> Result<bool>;

    /// Tell the driver the ATR has been consumed
    fn set_atr_ready(&mut self) -> Result<()>;

    fn deactivate(&mut self) -> Result<()>;
}
