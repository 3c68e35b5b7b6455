//! Tabular (CSV/JSON) task repository.
//!
//! Loads raw task rows from `.csv` or `.json` files, coercing them into
//! [`Task`] records, and writes computed tasks back as CSV. Column names are
//! matched case-insensitively so hand-edited spreadsheets keep working.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use prio_core::{Energy, Task, DEFAULT_LAYER, DEFAULT_OWNER};
use serde::Serialize;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, info};

use crate::date::parse_date;
use crate::report::{render_mits_markdown, InputRow, ProcessReport, TaskRow};
use crate::{Result, StorageError, TaskRepository};

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A list of objects, or `{"tasks": [...]}`
    Json,
}

impl TaskFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(TaskFormat::Csv),
            "json" => Ok(TaskFormat::Json),
            _ => Err(StorageError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// One input row with lowercased column names.
type Record = HashMap<String, String>;

/// File-based CSV/JSON repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularRepository;

impl TabularRepository {
    /// Create a repository.
    pub fn new() -> Self {
        Self
    }

    /// Parse tasks from an in-memory document.
    pub fn parse(&self, data: &[u8], format: TaskFormat) -> Result<Vec<Task>> {
        let records = match format {
            TaskFormat::Csv => csv_records(data)?,
            TaskFormat::Json => json_records(data)?,
        };

        records
            .iter()
            .enumerate()
            .map(|(i, record)| task_from_record(record, i + 1))
            .collect()
    }

    /// Serialize computed tasks to CSV.
    pub fn to_csv(&self, tasks: &[Task]) -> Result<Vec<u8>> {
        write_csv(tasks.iter().map(TaskRow::from))
    }

    /// Serialize input attributes to CSV.
    pub fn inputs_to_csv(&self, tasks: &[Task]) -> Result<Vec<u8>> {
        write_csv(tasks.iter().map(InputRow::from))
    }
}

#[async_trait]
impl TaskRepository for TabularRepository {
    async fn load(&self, path: &Path) -> Result<Vec<Task>> {
        let format = TaskFormat::from_path(path)?;
        let data = fs::read(path).await?;
        let tasks = self.parse(&data, format)?;
        info!("Loaded {} tasks from {}", tasks.len(), path.display());
        Ok(tasks)
    }

    async fn save(&self, path: &Path, tasks: &[Task]) -> Result<()> {
        let data = self.to_csv(tasks)?;
        fs::write(path, data).await?;
        debug!("Wrote {} tasks to {}", tasks.len(), path.display());
        Ok(())
    }

    async fn save_inputs(&self, path: &Path, tasks: &[Task]) -> Result<()> {
        let data = self.inputs_to_csv(tasks)?;
        fs::write(path, data).await?;
        debug!("Wrote {} input rows to {}", tasks.len(), path.display());
        Ok(())
    }

    async fn save_mits(&self, path: &Path, mits: &[Task]) -> Result<()> {
        fs::write(path, render_mits_markdown(mits).as_bytes()).await?;
        debug!("Wrote {} MITs to {}", mits.len(), path.display());
        Ok(())
    }

    async fn save_report(&self, path: &Path, report: &ProcessReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json.as_bytes()).await?;
        debug!("Wrote report to {}", path.display());
        Ok(())
    }
}

fn write_csv<R: Serialize>(rows: impl Iterator<Item = R>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| StorageError::Io(e.into_error()))
}

fn normalize_key(key: &str) -> String {
    key.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn csv_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_key).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect();
        records.push(record);
    }
    Ok(records)
}

fn json_records(data: &[u8]) -> Result<Vec<Record>> {
    let payload: Value = serde_json::from_slice(data)?;
    let items = match payload {
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(StorageError::InvalidShape(
                    "'tasks' must be a list".to_string(),
                ))
            }
            None => {
                return Err(StorageError::InvalidShape(
                    "expected a list of tasks or {\"tasks\": [...]}".to_string(),
                ))
            }
        },
        Value::Array(items) => items,
        _ => {
            return Err(StorageError::InvalidShape(
                "expected a list of tasks or {\"tasks\": [...]}".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let Value::Object(map) = item else {
                return Err(StorageError::InvalidShape(format!(
                    "item {} is not an object",
                    i + 1
                )));
            };
            let mut record = Record::new();
            for (key, value) in map {
                let text = match value {
                    Value::Null => String::new(),
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(StorageError::InvalidShape(format!(
                            "item {}: field '{}' has unsupported value {}",
                            i + 1,
                            key,
                            other
                        )))
                    }
                };
                record.insert(normalize_key(&key), text);
            }
            Ok(record)
        })
        .collect()
}

/// Typed access to one record with row-aware errors.
struct Fields<'a> {
    record: &'a Record,
    row: usize,
}

impl Fields<'_> {
    /// Raw value, `None` when absent or blank.
    fn get(&self, field: &str) -> Option<&str> {
        self.record
            .get(&field.to_lowercase())
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    fn text(&self, field: &str, default: &str) -> String {
        self.get(field).unwrap_or(default).to_string()
    }

    fn required(&self, field: &'static str) -> Result<String> {
        self.get(field)
            .map(|v| v.trim().to_string())
            .ok_or(StorageError::MissingField { row: self.row, field })
    }

    fn number(
        &self,
        field: &'static str,
        default: f64,
        valid: impl Fn(f64) -> bool,
    ) -> Result<f64> {
        let Some(raw) = self.get(field) else {
            return Ok(default);
        };
        let value: f64 = raw.trim().parse().map_err(|_| StorageError::InvalidNumber {
            row: self.row,
            field,
            value: raw.to_string(),
        })?;
        if !valid(value) {
            return Err(StorageError::OutOfRange { row: self.row, field, value });
        }
        Ok(value)
    }
}

fn task_from_record(record: &Record, row: usize) -> Result<Task> {
    let f = Fields { record, row };

    let deadline_raw = f.get("deadline").unwrap_or("");
    let deadline = parse_date(deadline_raw).map_err(|_| StorageError::InvalidDate {
        row,
        value: deadline_raw.to_string(),
    })?;

    let energy_raw = f.get("energy").unwrap_or("");
    let energy = Energy::parse(energy_raw).ok_or_else(|| StorageError::InvalidEnergy {
        row,
        value: energy_raw.to_string(),
    })?;

    let score_range = |v: f64| (0.0..=5.0).contains(&v);

    Ok(Task {
        deadline,
        energy,
        time_est: f.number("timeest", 1.0, |v| v >= 0.0)?,
        impact: f.number("impact", 3.0, score_range)?,
        leverage: f.number("leverage", 3.0, score_range)?,
        effort: f.number("effort", 2.0, |v| v > 0.0)?,
        owner: f.text("owner", DEFAULT_OWNER),
        layer: f.text("layer", DEFAULT_LAYER),
        notes: f.text("notes", ""),
        ..Task::new(f.required("title")?)
    })
}
