//! Early-stopping triggers for iterative training loops.
//!
//! A trigger consumes one monitored value per step (typically a validation
//! metric) and answers whether the loop should halt. The loop owns the
//! triggers, feeds them values in order and acts on the verdict; triggers
//! never observe or control the training process themselves.
//!
//! - [`trigger::ThresholdEarlyStopping`] - value crossed a fixed bound
//! - [`trigger::PatienceEarlyStopping`] - no new best for `patience` steps
//! - [`trigger::SlopeThresholdEarlyStopping`] - least-squares trend over a
//!   sliding window crossed a bound
//! - [`trigger::StopMonitor`] - drives several triggers at once
//! - [`config`] - build triggers from YAML
//!
//! # Toyota Way Principles
//!
//! - **Jidoka**: Halt automatically once training stops adding value
//! - **Andon**: Reset on a stateless trigger is an error, never a silent no-op

pub mod config;
pub mod error;
pub mod trigger;

pub use config::{MonitorConfig, TriggerConfig};
pub use error::{Result, TriggerError};
pub use trigger::{
    Bounds, MonitorAction, PatienceEarlyStopping, SlopeThresholdEarlyStopping, StatefulTrigger,
    StopMonitor, ThresholdEarlyStopping, Trigger,
};
