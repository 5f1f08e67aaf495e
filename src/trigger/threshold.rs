//! Threshold trigger: stop when the value leaves a fixed interval

use super::bounds::Bounds;
use super::traits::Trigger;

/// Stops as soon as the monitored value crosses the min or max threshold.
///
/// Stateless, so it has no reset capability; [`Trigger::try_reset`] returns
/// an unsupported-operation error.
///
/// # Example
///
/// ```rust
/// use detener::trigger::{Bounds, ThresholdEarlyStopping, Trigger};
///
/// // Stop when accuracy drops below 0.1 (diverged) or exceeds 0.99 (good enough)
/// let mut trigger = ThresholdEarlyStopping::new(Bounds::new(0.1, 0.99));
/// assert!(!trigger.should_stop(0.5));
/// assert!(trigger.should_stop(0.995));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThresholdEarlyStopping {
    bounds: Bounds,
}

impl ThresholdEarlyStopping {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Trigger for ThresholdEarlyStopping {
    fn should_stop(&mut self, value: f64) -> bool {
        let stop = self.bounds.violated_by(value);
        if stop {
            tracing::debug!(
                trigger = self.name(),
                value,
                min = self.bounds.min(),
                max = self.bounds.max(),
                "value crossed threshold"
            );
        }
        stop
    }

    fn name(&self) -> &'static str {
        "ThresholdEarlyStopping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriggerError;

    #[test]
    fn test_threshold_crossing() {
        let mut t = ThresholdEarlyStopping::new(Bounds::new(-1.0, 1.0));
        assert!(!t.should_stop(0.0));
        assert!(!t.should_stop(1.0));
        assert!(t.should_stop(1.5));
        assert!(t.should_stop(-2.0));
        // No memory: back inside the interval means continue
        assert!(!t.should_stop(0.5));
    }

    #[test]
    fn test_default_never_stops_on_finite() {
        let mut t = ThresholdEarlyStopping::default();
        for v in [f64::MIN, -1.0, 0.0, 1.0, f64::MAX] {
            assert!(!t.should_stop(v));
        }
    }

    #[test]
    fn test_nan_never_stops() {
        let mut t = ThresholdEarlyStopping::new(Bounds::new(0.0, 0.0));
        assert!(!t.should_stop(f64::NAN));
    }

    #[test]
    fn test_reset_is_unsupported() {
        let mut t = ThresholdEarlyStopping::default();
        assert!(t.as_stateful_mut().is_none());
        let err = t.try_reset().unwrap_err();
        assert!(matches!(
            err,
            TriggerError::UnsupportedOperation { trigger: "ThresholdEarlyStopping", .. }
        ));
    }

    #[test]
    fn test_name() {
        assert_eq!(ThresholdEarlyStopping::default().name(), "ThresholdEarlyStopping");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decision is exactly the bound check, independent of history
        #[test]
        fn threshold_matches_bound_check(
            min in -100.0f64..100.0,
            width in 0.0f64..100.0,
            values in proptest::collection::vec(-300.0f64..300.0, 1..50),
        ) {
            let max = min + width;
            let mut t = ThresholdEarlyStopping::new(Bounds::new(min, max));
            for v in values {
                prop_assert_eq!(t.should_stop(v), v > max || v < min);
            }
        }

        /// Unbounded default never fires for finite values
        #[test]
        fn unbounded_never_fires(v in -1e300f64..1e300) {
            prop_assert!(!ThresholdEarlyStopping::default().should_stop(v));
        }
    }
}
