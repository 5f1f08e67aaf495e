//! Least-squares line fit over a fixed time axis
//!
//! The time axis is always the relative indices `0..n`, so everything that
//! depends only on time is computed once. Fitting a window then costs one
//! pass over its values.

/// Fitted line `value = slope * t + intercept`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Precomputed ordinary least-squares design for time indices `0..n`.
///
/// With centered times `c_i = i - mean(t)`, the slope is
/// `sum(c_i * y_i) / sum(c_i^2)`. The centered weights sum to zero, so the
/// mean of `y` drops out of the numerator. `n >= 2` distinct indices keep the
/// denominator positive.
#[derive(Clone, Debug)]
pub(crate) struct LeastSquaresDesign {
    weights: Box<[f64]>,
    time_mean: f64,
    /// Sum of squared centered times
    sxx: f64,
}

impl LeastSquaresDesign {
    /// Build the design for `n` points.
    ///
    /// Only built by the slope trigger, which rejects windows below two.
    pub(crate) fn new(n: usize) -> Self {
        let time_mean = (n as f64 - 1.0) / 2.0;
        let weights: Box<[f64]> = (0..n).map(|i| i as f64 - time_mean).collect();
        let sxx: f64 = weights.iter().map(|c| c * c).sum();
        Self { weights, time_mean, sxx }
    }

    /// Number of points the design expects
    pub(crate) fn len(&self) -> usize {
        self.weights.len()
    }

    /// Fit `values`, given oldest first.
    ///
    /// Values are zipped with the time axis, so pass exactly `len()` of them.
    pub(crate) fn fit(&self, values: impl IntoIterator<Item = f64>) -> LineFit {
        let (sxy, sum) = self
            .weights
            .iter()
            .zip(values)
            .fold((0.0, 0.0), |(sxy, sum), (c, y)| (sxy + c * y, sum + y));
        let slope = sxy / self.sxx;
        let intercept = sum / self.len() as f64 - slope * self.time_mean;
        LineFit { slope, intercept }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_design_precomputation() {
        let d = LeastSquaresDesign::new(3);
        assert_eq!(d.len(), 3);
        assert_abs_diff_eq!(d.time_mean, 1.0);
        assert_abs_diff_eq!(d.sxx, 2.0);
    }

    #[test]
    fn test_exact_line() {
        let d = LeastSquaresDesign::new(3);
        let fit = d.fit([1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(fit.slope, 1.0);
        assert_abs_diff_eq!(fit.intercept, 1.0);
    }

    #[test]
    fn test_flat_line() {
        let fit = LeastSquaresDesign::new(5).fit([4.0; 5]);
        assert_abs_diff_eq!(fit.slope, 0.0);
        assert_abs_diff_eq!(fit.intercept, 4.0);
    }

    #[test]
    fn test_decreasing_line() {
        let fit = LeastSquaresDesign::new(4).fit([10.0, 8.0, 6.0, 4.0]);
        assert_abs_diff_eq!(fit.slope, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_points() {
        // y = [0, 2, 1, 3] -> slope 0.8, intercept 0.3
        let fit = LeastSquaresDesign::new(4).fit([0.0, 2.0, 1.0, 3.0]);
        assert_abs_diff_eq!(fit.slope, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_two_points_is_finite_difference() {
        let fit = LeastSquaresDesign::new(2).fit([3.0, 7.0]);
        assert_abs_diff_eq!(fit.slope, 4.0);
        assert_abs_diff_eq!(fit.intercept, 3.0);
    }

    #[test]
    fn test_nan_propagates() {
        let fit = LeastSquaresDesign::new(3).fit([1.0, f64::NAN, 3.0]);
        assert!(fit.slope.is_nan());
    }
}
