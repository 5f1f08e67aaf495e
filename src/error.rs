//! Error types for trigger construction and capability checks.
//!
//! Evaluating a trigger never fails; errors only surface when a trigger is
//! built from invalid parameters or a capability it lacks is requested.

use thiserror::Error;

/// Result type alias for trigger operations.
pub type Result<T> = std::result::Result<T, TriggerError>;

/// Errors raised by triggers and their configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriggerError {
    /// Requested an operation the trigger does not support (e.g. reset on a
    /// stateless trigger).
    #[error("Unsupported operation '{operation}' on trigger '{trigger}'\n  → Only stateful triggers (patience, slope) can be reset")]
    UnsupportedOperation { trigger: &'static str, operation: &'static str },

    /// Slope window too small to fit a line.
    #[error("Invalid slope window: {0} (must be >= 2)")]
    InvalidWindow(usize),

    /// Improvement delta is negative or not finite.
    #[error("Invalid min_delta: {0} (must be finite and >= 0.0)")]
    InvalidMinDelta(f64),

    /// Trigger configuration could not be parsed.
    #[error("Invalid trigger configuration: {message}\n  → Check YAML syntax and the `kind` of each trigger")]
    Config { message: String },
}

impl TriggerError {
    /// Reset requested on a trigger without memory.
    pub(crate) fn reset_unsupported(trigger: &'static str) -> Self {
        Self::UnsupportedOperation { trigger, operation: "reset" }
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation { .. } => "E100",
            Self::InvalidWindow(_) => "E101",
            Self::InvalidMinDelta(_) => "E102",
            Self::Config { .. } => "E103",
        }
    }
}

impl From<serde_yaml::Error> for TriggerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config { message: err.to_string() }
    }
}
