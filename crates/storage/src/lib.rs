//! Task repository abstraction and file-backed implementations.
//!
//! This crate provides a trait-based repository interface with a tabular
//! (CSV/JSON) reference implementation, plus the report writers used for
//! the computed backlog and the daily MIT list.

#![warn(missing_docs)]

pub mod trait_;
pub mod date;
pub mod report;
pub mod tabular;

pub use trait_::{TaskRepository, StorageError, Result};
pub use date::parse_date;
pub use report::{ProcessReport, Counts, TaskRow, render_mits_markdown};
pub use tabular::{TabularRepository, TaskFormat};
