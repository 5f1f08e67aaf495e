//! Core capabilities for early-stopping triggers
//!
//! Two independent contracts:
//! - `Trigger` - evaluate one value per step and decide whether to stop
//! - `StatefulTrigger` - clear the memory a trigger carries between steps
//!
//! Stateless triggers implement only `Trigger`. Code holding a
//! `dyn Trigger` feature-detects the reset capability through
//! [`Trigger::as_stateful_mut`] or [`Trigger::try_reset`] instead of assuming
//! every trigger can be reset.

use crate::error::{Result, TriggerError};

/// Decides, once per step, whether the monitored process should halt.
pub trait Trigger: Send {
    /// Consume the value for the current step.
    ///
    /// Returns `true` iff the stopping condition has been met.
    fn should_stop(&mut self, value: f64) -> bool;

    /// Trigger name for logging
    fn name(&self) -> &'static str;

    /// Access the reset capability, if this trigger has memory
    fn as_stateful_mut(&mut self) -> Option<&mut dyn StatefulTrigger> {
        None
    }

    /// Reset through the stateful capability.
    ///
    /// Fails with [`TriggerError::UnsupportedOperation`] for triggers
    /// without memory rather than doing nothing.
    fn try_reset(&mut self) -> Result<()> {
        let name = self.name();
        match self.as_stateful_mut() {
            Some(stateful) => {
                stateful.reset();
                Ok(())
            }
            None => Err(TriggerError::reset_unsupported(name)),
        }
    }
}

/// Trigger with memory that can be restored to its initial state.
pub trait StatefulTrigger {
    /// Forget everything observed since construction or the last reset
    fn reset(&mut self);
}
