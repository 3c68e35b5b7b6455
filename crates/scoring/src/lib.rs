//! Scoring policies and the task computer.
//!
//! Each policy is a small trait with one default implementation:
//! - [`LayerPolicy`]: layer label to weight
//! - [`UrgencyPolicy`]: deadline to urgency multiplier
//! - [`Classifier`]: quadrant and tag heuristics
//! - [`ScoringStrategy`]: importance and final score formulas
//!
//! [`TaskComputer`] wires them together and fills the derived fields of a task.

#![warn(missing_docs)]

pub mod layer;
pub mod urgency;
pub mod classifier;
pub mod strategy;
pub mod computer;

pub use layer::{LayerPolicy, DefaultLayerPolicy};
pub use urgency::{UrgencyPolicy, DefaultUrgencyPolicy, days_between};
pub use classifier::{Classifier, EisenhowerClassifier};
pub use strategy::{ScoringStrategy, PowerScoring, DEFAULT_ALPHA, EFFORT_EPSILON};
pub use computer::TaskComputer;
