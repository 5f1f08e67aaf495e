//! Patience trigger: stop after too many steps without a new best

use serde::{Deserialize, Serialize};

use super::traits::{StatefulTrigger, Trigger};
use crate::error::{Result, TriggerError};

/// Direction in which the monitored metric improves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Higher is better (accuracy, F1, BLEU)
    #[default]
    Max,
    /// Lower is better (loss, perplexity)
    Min,
}

impl Mode {
    /// Map a value into "higher is better" space
    #[inline]
    fn score(self, value: f64) -> f64 {
        match self {
            Self::Max => value,
            Self::Min => -value,
        }
    }
}

/// Stops once `patience` consecutive steps have passed without a new best.
///
/// Improvement is strict: a value equal to the best so far does not reset
/// the counter, so plateaus count toward the patience limit.
///
/// # Example
///
/// ```rust
/// use detener::trigger::{PatienceEarlyStopping, Trigger};
///
/// let mut trigger = PatienceEarlyStopping::new(2);
/// let stops: Vec<bool> = [1.0, 5.0, 3.0, 3.0, 3.0]
///     .into_iter()
///     .map(|v| trigger.should_stop(v))
///     .collect();
/// assert_eq!(stops, [false, false, false, false, true]);
/// ```
#[derive(Clone, Debug)]
pub struct PatienceEarlyStopping {
    /// Non-improving steps tolerated before stopping
    patience: usize,
    mode: Mode,
    /// Margin a value must beat the best by to count as improvement
    min_delta: f64,
    /// Best score seen so far, in `mode.score` space
    best_score: f64,
    pub(crate) steps_since_best: usize,
}

impl PatienceEarlyStopping {
    /// Create a patience trigger monitoring a metric to maximize
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            mode: Mode::Max,
            min_delta: 0.0,
            best_score: f64::NEG_INFINITY,
            steps_since_best: 0,
        }
    }

    /// Set the improvement direction
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Require improvements larger than `min_delta`.
    ///
    /// Fails for negative or non-finite deltas.
    pub fn with_min_delta(mut self, min_delta: f64) -> Result<Self> {
        if !min_delta.is_finite() || min_delta < 0.0 {
            return Err(TriggerError::InvalidMinDelta(min_delta));
        }
        self.min_delta = min_delta;
        Ok(self)
    }

    pub fn patience(&self) -> usize {
        self.patience
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn min_delta(&self) -> f64 {
        self.min_delta
    }

    /// Best value seen since construction or the last reset
    pub fn best(&self) -> Option<f64> {
        (self.best_score != f64::NEG_INFINITY).then(|| self.mode.score(self.best_score))
    }

    /// Consecutive steps since the best value was last improved upon
    pub fn steps_since_best(&self) -> usize {
        self.steps_since_best
    }

    fn check_improvement(&mut self, value: f64) -> bool {
        let score = self.mode.score(value);
        if score > self.best_score + self.min_delta {
            self.best_score = score;
            self.steps_since_best = 0;
            true
        } else {
            self.steps_since_best += 1;
            false
        }
    }
}

impl Trigger for PatienceEarlyStopping {
    fn should_stop(&mut self, value: f64) -> bool {
        if self.check_improvement(value) {
            return false;
        }

        let stop = self.steps_since_best > self.patience;
        if stop {
            tracing::debug!(
                trigger = self.name(),
                patience = self.patience,
                steps_since_best = self.steps_since_best,
                best = ?self.best(),
                "patience exhausted"
            );
        }
        stop
    }

    fn name(&self) -> &'static str {
        "PatienceEarlyStopping"
    }

    fn as_stateful_mut(&mut self) -> Option<&mut dyn StatefulTrigger> {
        Some(self)
    }
}

impl StatefulTrigger for PatienceEarlyStopping {
    fn reset(&mut self) {
        self.best_score = f64::NEG_INFINITY;
        self.steps_since_best = 0;
    }
}
