//! Stop monitor for driving several triggers from one training loop

use super::traits::Trigger;
use crate::error::{Result, TriggerError};

/// Outcome of one monitored step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonitorAction {
    /// No trigger fired
    Continue,
    /// At least one trigger fired
    Stop {
        /// Names of the triggers that fired this step
        triggered: Vec<&'static str>,
    },
}

impl MonitorAction {
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop { .. })
    }
}

/// Feeds each step's value to every registered trigger.
///
/// Every trigger sees every value, even after another one has fired, so
/// stateful triggers keep an unbroken history.
///
/// # Example
///
/// ```rust
/// use detener::trigger::{Bounds, PatienceEarlyStopping, StopMonitor, ThresholdEarlyStopping};
///
/// let mut monitor = StopMonitor::new();
/// monitor.add(ThresholdEarlyStopping::new(Bounds::at_most(0.99)));
/// monitor.add(PatienceEarlyStopping::new(3));
///
/// for accuracy in [0.5, 0.7, 0.995] {
///     if monitor.observe(accuracy).should_stop() {
///         break;
///     }
/// }
/// assert_eq!(monitor.steps(), 3);
/// ```
#[derive(Default)]
pub struct StopMonitor {
    triggers: Vec<Box<dyn Trigger>>,
    steps: usize,
}

impl StopMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger
    pub fn add<T: Trigger + 'static>(&mut self, trigger: T) {
        self.triggers.push(Box::new(trigger));
    }

    /// Register an already boxed trigger
    pub fn add_boxed(&mut self, trigger: Box<dyn Trigger>) {
        self.triggers.push(trigger);
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Steps observed since construction or the last reset
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Names of the registered triggers, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.triggers.iter().map(|t| t.name()).collect()
    }

    /// Evaluate every trigger on this step's value
    pub fn observe(&mut self, value: f64) -> MonitorAction {
        self.steps += 1;

        let mut triggered = Vec::new();
        for trigger in &mut self.triggers {
            if trigger.should_stop(value) {
                triggered.push(trigger.name());
            }
        }

        if triggered.is_empty() {
            return MonitorAction::Continue;
        }

        tracing::info!(step = self.steps, value, ?triggered, "early stopping requested");
        MonitorAction::Stop { triggered }
    }

    /// Reset every trigger with memory, skipping stateless ones.
    ///
    /// Returns how many triggers were reset.
    pub fn reset(&mut self) -> usize {
        self.steps = 0;
        let mut count = 0;
        for trigger in &mut self.triggers {
            if let Some(stateful) = trigger.as_stateful_mut() {
                stateful.reset();
                count += 1;
            }
        }
        tracing::debug!(reset = count, skipped = self.triggers.len() - count, "monitor reset");
        count
    }

    /// Reset every trigger, failing if any of them cannot be reset.
    ///
    /// Nothing is reset when the check fails.
    pub fn reset_all(&mut self) -> Result<()> {
        if let Some(i) = self.triggers.iter_mut().position(|t| t.as_stateful_mut().is_none()) {
            return Err(TriggerError::reset_unsupported(self.triggers[i].name()));
        }
        self.reset();
        Ok(())
    }
}

impl std::fmt::Debug for StopMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopMonitor")
            .field("triggers", &self.names())
            .field("steps", &self.steps)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::{
        Bounds, PatienceEarlyStopping, SlopeThresholdEarlyStopping, ThresholdEarlyStopping,
    };

    #[test]
    fn test_empty_monitor_continues() {
        let mut m = StopMonitor::new();
        assert!(m.is_empty());
        assert_eq!(m.observe(1.0), MonitorAction::Continue);
        assert_eq!(m.steps(), 1);
    }

    #[test]
    fn test_reports_every_trigger_that_fired() {
        let mut m = StopMonitor::new();
        m.add(ThresholdEarlyStopping::new(Bounds::at_most(1.0)));
        m.add(PatienceEarlyStopping::new(0));
        assert_eq!(m.len(), 2);

        assert_eq!(m.observe(0.5), MonitorAction::Continue);
        assert_eq!(
            m.observe(0.4),
            MonitorAction::Stop { triggered: vec!["PatienceEarlyStopping"] }
        );
        assert_eq!(
            m.observe(2.0),
            MonitorAction::Stop { triggered: vec!["ThresholdEarlyStopping"] }
        );
    }

    #[test]
    fn test_no_short_circuit() {
        let mut m = StopMonitor::new();
        m.add(ThresholdEarlyStopping::new(Bounds::at_most(0.0)));
        m.add(SlopeThresholdEarlyStopping::new(Bounds::at_most(0.5), 3).unwrap());

        // Threshold fires every step; slope must still warm up behind it
        assert!(m.observe(1.0).should_stop());
        assert!(m.observe(2.0).should_stop());
        assert_eq!(
            m.observe(3.0),
            MonitorAction::Stop {
                triggered: vec!["ThresholdEarlyStopping", "SlopeThresholdEarlyStopping"]
            }
        );
        assert_eq!(m.names(), ["ThresholdEarlyStopping", "SlopeThresholdEarlyStopping"]);
    }

    #[test]
    fn test_reset_skips_stateless() {
        let mut m = StopMonitor::new();
        m.add(ThresholdEarlyStopping::default());
        m.add(PatienceEarlyStopping::new(0));
        m.observe(1.0);
        assert!(m.observe(1.0).should_stop());

        assert_eq!(m.reset(), 1);
        assert_eq!(m.steps(), 0);
        assert!(!m.observe(1.0).should_stop());
    }

    #[test]
    fn test_reset_all_rejects_stateless() {
        let mut m = StopMonitor::new();
        m.add(PatienceEarlyStopping::new(0));
        m.add(ThresholdEarlyStopping::default());
        m.observe(1.0);

        let err = m.reset_all().unwrap_err();
        assert!(matches!(
            err,
            TriggerError::UnsupportedOperation { trigger: "ThresholdEarlyStopping", .. }
        ));
        // Patience kept its memory
        assert!(m.observe(1.0).should_stop());
        assert_eq!(m.steps(), 2);
    }

    #[test]
    fn test_reset_all_stateful_only() {
        let mut m = StopMonitor::new();
        m.add(PatienceEarlyStopping::new(0));
        m.add(SlopeThresholdEarlyStopping::default());
        m.observe(1.0);
        assert!(m.reset_all().is_ok());
        assert_eq!(m.steps(), 0);
        assert!(!m.observe(1.0).should_stop());
    }

    #[test]
    fn test_debug_lists_names() {
        let mut m = StopMonitor::new();
        m.add(PatienceEarlyStopping::new(1));
        let dbg = format!("{m:?}");
        assert!(dbg.contains("PatienceEarlyStopping"));
    }
}
