// libsci/src/control/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::control::traits::{ControlChannel, ControlCommand};
use crate::params::SessionParameters;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockDriver {
    params: SessionParameters,
    present: bool,
    activated: bool,
    pending_polls: usize,
    failures: usize,
    rejected: Option<ControlCommand>,
    commands: Vec<ControlCommand>,
}

/// Mock control channel for unit tests. It holds a parameter block like the
/// real driver, answers status queries from configurable flags and records
/// every command. Clones share state so tests can inspect a channel after
/// handing it to a reader.
#[derive(Debug, Clone, Default)]
pub struct MockControl {
    driver: Rc<RefCell<MockDriver>>,
}

impl MockControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_card_present(&self, present: bool) {
        self.driver.borrow_mut().present = present;
    }

    pub fn set_card_activated(&self, activated: bool) {
        self.driver.borrow_mut().activated = activated;
    }

    /// Number of `atr_pending` polls that report "still pending"
    pub fn set_pending_polls(&self, n: usize) {
        self.driver.borrow_mut().pending_polls = n;
    }

    /// Set how many subsequent commands should fail (for tests).
    pub fn set_failures(&self, n: usize) {
        self.driver.borrow_mut().failures = n;
    }

    /// Make every `cmd` fail while other commands keep working.
    pub fn reject(&self, cmd: ControlCommand) {
        self.driver.borrow_mut().rejected = Some(cmd);
    }

    /// Seed the parameter block the driver currently holds.
    pub fn set_held_parameters(&self, params: SessionParameters) {
        self.driver.borrow_mut().params = params;
    }

    pub fn held_parameters(&self) -> SessionParameters {
        self.driver.borrow().params
    }

    pub fn commands(&self) -> Vec<ControlCommand> {
        self.driver.borrow().commands.clone()
    }

    pub fn count(&self, cmd: ControlCommand) -> usize {
        self.driver
            .borrow()
            .commands
            .iter()
            .filter(|c| **c == cmd)
            .count()
    }

    fn record(&self, cmd: ControlCommand) -> Result<()> {
        let mut d = self.driver.borrow_mut();
        d.commands.push(cmd);
        if d.rejected == Some(cmd) {
            return Err(Error::Control(format!("{:?} rejected", cmd)));
        }
        if d.failures > 0 {
            d.failures -= 1;
            return Err(Error::Control(format!("{:?} rejected", cmd)));
        }
        Ok(())
    }
}

impl ControlChannel for MockControl {
    fn set_parameters(&mut self, params: &SessionParameters) -> Result<()> {
        self.record(ControlCommand::SetParameters(*params))?;
        self.driver.borrow_mut().params = *params;
        Ok(())
    }

    fn get_parameters(&mut self) -> Result<SessionParameters> {
        self.record(ControlCommand::GetParameters)?;
        Ok(self.driver.borrow().params)
    }

    fn set_reset(&mut self) -> Result<()> {
        self.record(ControlCommand::SetReset)
    }

    fn card_present(&mut self) -> Result<bool> {
        self.record(ControlCommand::GetCardPresent)?;
        Ok(self.driver.borrow().present)
    }

    fn card_activated(&mut self) -> Result<bool> {
        self.record(ControlCommand::GetCardActivated)?;
        Ok(self.driver.borrow().activated)
    }

    fn atr_pending(&mut self) -> Result<bool> {
        self.record(ControlCommand::GetAtrStatus)?;
        let mut d = self.driver.borrow_mut();
        if d.pending_polls > 0 {
            d.pending_polls -= 1;
            return Ok(true);
        }
        Ok(false)
    }

    fn set_atr_ready(&mut self) -> Result<()> {
        self.record(ControlCommand::SetAtrReady)
    }

    fn deactivate(&mut self) -> Result<()> {
        self.record(ControlCommand::SetDeactivate)
    }
}
