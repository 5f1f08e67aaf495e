//! Bound pair shared by the threshold and slope triggers

/// Acceptable interval `[min, max]` for a monitored quantity.
///
/// A value violates the bounds when it is strictly above `max` or strictly
/// below `min`. The default interval is unbounded on both sides.
///
/// `min <= max` is expected but not checked: an inverted pair fires for every
/// non-NaN value.
/// NaN never violates, since every comparison against NaN is false.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Unbounded interval `(-inf, +inf)`
    pub const UNBOUNDED: Self = Self { min: f64::NEG_INFINITY, max: f64::INFINITY };

    /// Create bounds from explicit limits
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Only a lower limit
    pub fn at_least(min: f64) -> Self {
        Self { min, ..Self::UNBOUNDED }
    }

    /// Only an upper limit
    pub fn at_most(max: f64) -> Self {
        Self { max, ..Self::UNBOUNDED }
    }

    /// Build from optional limits, treating `None` as unbounded
    pub fn from_options(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(f64::NEG_INFINITY),
            max: max.unwrap_or(f64::INFINITY),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True iff `value > max || value < min`
    #[inline]
    pub fn violated_by(&self, value: f64) -> bool {
        value > self.max || value < self.min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
