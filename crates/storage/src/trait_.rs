//! Repository trait abstraction.

use std::path::Path;

use async_trait::async_trait;
use prio_core::Task;

use crate::report::ProcessReport;

/// Error type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while reading or writing tasks.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization/deserialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input is neither CSV nor JSON
    #[error("Unsupported input format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    /// JSON document does not hold a list of task objects
    #[error("Invalid JSON shape: {0}")]
    InvalidShape(String),

    /// A required field is missing or empty
    #[error("Row {row}: field '{field}' is required")]
    MissingField {
        /// 1-based data row
        row: usize,
        /// Column name
        field: &'static str,
    },

    /// A numeric field could not be parsed
    #[error("Row {row}: field '{field}' is not a number: {value:?}")]
    InvalidNumber {
        /// 1-based data row
        row: usize,
        /// Column name
        field: &'static str,
        /// Raw value
        value: String,
    },

    /// A numeric field is outside its allowed range
    #[error("Row {row}: field '{field}' is out of range: {value}")]
    OutOfRange {
        /// 1-based data row
        row: usize,
        /// Column name
        field: &'static str,
        /// Parsed value
        value: f64,
    },

    /// A date field matches none of the supported formats
    #[error("Row {row}: unknown date format: {value:?}")]
    InvalidDate {
        /// 1-based data row
        row: usize,
        /// Raw value
        value: String,
    },

    /// Energy is not low/medium/high
    #[error("Row {row}: unknown energy level: {value:?}")]
    InvalidEnergy {
        /// 1-based data row
        row: usize,
        /// Raw value
        value: String,
    },
}

/// Loads input tasks and stores computed results.
///
/// This trait allows different backends to be plugged into the engine.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Load tasks from a source.
    async fn load(&self, path: &Path) -> Result<Vec<Task>>;

    /// Save computed tasks.
    async fn save(&self, path: &Path, tasks: &[Task]) -> Result<()>;

    /// Save input attributes only (no derived fields).
    async fn save_inputs(&self, path: &Path, tasks: &[Task]) -> Result<()>;

    /// Save the daily MIT list.
    async fn save_mits(&self, path: &Path, mits: &[Task]) -> Result<()>;

    /// Save a full processing report.
    async fn save_report(&self, path: &Path, report: &ProcessReport) -> Result<()>;
}
