//! Trigger configuration
//!
//! Triggers can be described in YAML and built at runtime:
//!
//! ```yaml
//! triggers:
//!   - kind: threshold
//!     max: 0.99
//!   - kind: patience
//!     patience: 5
//!     mode: min
//!     min_delta: 0.001
//!   - kind: slope
//!     min_slope: -0.0001
//!     window: 10
//! ```
//!
//! Omitted bounds are unbounded.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::trigger::{
    Bounds, Mode, PatienceEarlyStopping, SlopeThresholdEarlyStopping, StopMonitor,
    ThresholdEarlyStopping, Trigger,
};

/// Configuration for a single trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriggerConfig {
    /// Stop when the value leaves `[min, max]`
    Threshold {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },

    /// Stop after `patience` steps without improvement
    Patience {
        patience: usize,

        /// Metric mode (min, max)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<Mode>,

        /// Minimum delta for improvement
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_delta: Option<f64>,
    },

    /// Stop when the least-squares slope over `window` steps leaves
    /// `[min_slope, max_slope]`
    Slope {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_slope: Option<f64>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_slope: Option<f64>,

        /// Window size (default 5)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window: Option<usize>,
    },
}

impl TriggerConfig {
    /// Validate and construct the trigger
    pub fn build(&self) -> Result<Box<dyn Trigger>> {
        let trigger: Box<dyn Trigger> = match *self {
            Self::Threshold { min, max } => {
                Box::new(ThresholdEarlyStopping::new(Bounds::from_options(min, max)))
            }
            Self::Patience { patience, mode, min_delta } => Box::new(
                PatienceEarlyStopping::new(patience)
                    .with_mode(mode.unwrap_or_default())
                    .with_min_delta(min_delta.unwrap_or(0.0))?,
            ),
            Self::Slope { min_slope, max_slope, window } => {
                Box::new(SlopeThresholdEarlyStopping::new(
                    Bounds::from_options(min_slope, max_slope),
                    window.unwrap_or(SlopeThresholdEarlyStopping::DEFAULT_WINDOW),
                )?)
            }
        };
        Ok(trigger)
    }
}

/// Set of triggers monitored together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub triggers: Vec<TriggerConfig>,
}

impl MonitorConfig {
    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build a monitor holding every configured trigger.
    ///
    /// Fails on the first invalid trigger.
    pub fn build(&self) -> Result<StopMonitor> {
        let mut monitor = StopMonitor::new();
        for config in &self.triggers {
            monitor.add_boxed(config.build()?);
        }
        Ok(monitor)
    }
}
