//! Prio core data models.
//!
//! This crate defines the task record that flows through the prioritization
//! pipeline, together with the small enums used to classify it.

#![warn(missing_docs)]

mod category;
mod classification;
mod task;

pub use category::Category;
pub use classification::{Quadrant, Tag};
pub use task::{Energy, Task, DEFAULT_LAYER, DEFAULT_OWNER};

/// Calendar date used for deadlines and the reference "today".
pub type Date = chrono::NaiveDate;
