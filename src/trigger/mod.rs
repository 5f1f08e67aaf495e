//! Early-stopping triggers
//!
//! Each trigger consumes one value per step and decides whether the
//! training loop should stop:
//! - `ThresholdEarlyStopping` - value left a fixed interval (stateless)
//! - `PatienceEarlyStopping` - too many steps without a new best
//! - `SlopeThresholdEarlyStopping` - recent trend left a fixed interval
//!
//! # Example
//!
//! ```rust
//! use detener::trigger::{PatienceEarlyStopping, StatefulTrigger, Trigger};
//!
//! let mut patience = PatienceEarlyStopping::new(1);
//! for val_acc in [0.61, 0.64, 0.63, 0.62] {
//!     if patience.should_stop(val_acc) {
//!         println!("stopping at {val_acc}");
//!         break;
//!     }
//! }
//! // New phase, same instance
//! patience.reset();
//! ```

mod bounds;
mod monitor;
mod patience;
mod regression;
mod slope;
mod threshold;
mod traits;
mod window;

pub use bounds::Bounds;
pub use monitor::{MonitorAction, StopMonitor};
pub use patience::{Mode, PatienceEarlyStopping};
pub use regression::LineFit;
pub use slope::SlopeThresholdEarlyStopping;
pub use threshold::ThresholdEarlyStopping;
pub use traits::{StatefulTrigger, Trigger};
