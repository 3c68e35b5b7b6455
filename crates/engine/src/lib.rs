//! Prioritization pipeline - filtering, sorting, MIT selection and the engine
//! that composes them.

#![warn(missing_docs)]

pub mod filter;
pub mod sorter;
pub mod selector;
pub mod config;
pub mod engine;

pub use filter::{TaskPreFilter, Partition, DEFAULT_SELF_ALIASES};
pub use sorter::{TaskSorter, BacklogSorter};
pub use selector::{MitSelector, DefaultMitSelector, MAX_MITS};
pub use config::{EngineConfig, ConfigError};
pub use engine::{PriorityEngine, Prioritized, EngineError, Result};
