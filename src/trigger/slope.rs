//! Slope trigger: stop when the recent trend leaves a fixed interval
//!
//! The trend is the least-squares slope over the last `window` values, which
//! smooths out per-step noise that a finite difference would react to.

use super::bounds::Bounds;
use super::regression::{LeastSquaresDesign, LineFit};
use super::traits::{StatefulTrigger, Trigger};
use super::window::RollingWindow;
use crate::error::{Result, TriggerError};

/// Stops when the slope of the most recent `window` values crosses the min or
/// max slope threshold.
///
/// No decision is made until `window` values have arrived since construction
/// or the last reset. Until then the buffer still holds zero fill, which the
/// fit would otherwise treat as real data.
///
/// # Example
///
/// ```rust
/// use detener::trigger::{Bounds, SlopeThresholdEarlyStopping, Trigger};
///
/// // Stop once validation accuracy flattens out
/// let mut trigger = SlopeThresholdEarlyStopping::new(Bounds::at_least(0.001), 3)?;
/// assert!(!trigger.should_stop(0.50));
/// assert!(!trigger.should_stop(0.60));
/// assert!(!trigger.should_stop(0.70));
/// assert!(!trigger.should_stop(0.70));
/// assert!(trigger.should_stop(0.70));
/// # Ok::<(), detener::TriggerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SlopeThresholdEarlyStopping {
    bounds: Bounds,
    values: RollingWindow,
    design: LeastSquaresDesign,
    /// Real observations since construction or reset, capped at the window
    points_seen: usize,
    last_fit: Option<LineFit>,
}

impl SlopeThresholdEarlyStopping {
    /// Window used by [`Default`]
    pub const DEFAULT_WINDOW: usize = 5;

    /// Create a slope trigger over the last `window` values.
    ///
    /// Fails if `window < 2`, since a line needs two points.
    pub fn new(bounds: Bounds, window: usize) -> Result<Self> {
        if window < 2 {
            return Err(TriggerError::InvalidWindow(window));
        }
        Ok(Self::with_checked_window(bounds, window))
    }

    /// `window` must already be known to be at least 2
    fn with_checked_window(bounds: Bounds, window: usize) -> Self {
        Self {
            bounds,
            values: RollingWindow::new(window),
            design: LeastSquaresDesign::new(window),
            points_seen: 0,
            last_fit: None,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn window(&self) -> usize {
        self.values.capacity()
    }

    /// Real observations since construction or reset, at most `window()`
    pub fn points_seen(&self) -> usize {
        self.points_seen
    }

    /// Whether enough values have arrived to fit
    pub fn is_warm(&self) -> bool {
        self.points_seen >= self.window()
    }

    /// Line fitted on the most recent call, if any
    pub fn last_fit(&self) -> Option<LineFit> {
        self.last_fit
    }
}

impl Default for SlopeThresholdEarlyStopping {
    fn default() -> Self {
        Self::with_checked_window(Bounds::UNBOUNDED, Self::DEFAULT_WINDOW)
    }
}

impl Trigger for SlopeThresholdEarlyStopping {
    fn should_stop(&mut self, value: f64) -> bool {
        self.values.push(value);

        if !self.is_warm() {
            self.points_seen += 1;
            if !self.is_warm() {
                return false;
            }
        }

        let fit = self.design.fit(self.values.iter());
        self.last_fit = Some(fit);

        let stop = self.bounds.violated_by(fit.slope);
        if stop {
            tracing::debug!(
                trigger = self.name(),
                slope = fit.slope,
                min_slope = self.bounds.min(),
                max_slope = self.bounds.max(),
                window = self.window(),
                "slope crossed threshold"
            );
        }
        stop
    }

    fn name(&self) -> &'static str {
        "SlopeThresholdEarlyStopping"
    }

    fn as_stateful_mut(&mut self) -> Option<&mut dyn StatefulTrigger> {
        Some(self)
    }
}

impl StatefulTrigger for SlopeThresholdEarlyStopping {
    fn reset(&mut self) {
        self.values.clear();
        self.points_seen = 0;
        self.last_fit = None;
    }
}
