//! The priority engine - runs the full pipeline.

use std::path::Path;

use chrono::{Local, NaiveDate};
use prio_core::Task;
use prio_scoring::TaskComputer;
use prio_storage::{Counts, ProcessReport, StorageError, TaskRepository};
use tracing::{debug, info};

use crate::{
    BacklogSorter, ConfigError, DefaultMitSelector, EngineConfig, MitSelector, TaskPreFilter,
    TaskSorter,
};

/// Error type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Loading or saving failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prioritized {
    /// Computed tasks, highest priority first
    pub prioritized: Vec<Task>,
    /// Tasks owned by someone else, in input order
    pub delegated: Vec<Task>,
    /// Tasks not worth doing, in input order
    pub dropped: Vec<Task>,
    /// Daily MIT list, when selected
    pub mits: Option<Vec<Task>>,
}

impl Prioritized {
    /// Bucket sizes.
    pub fn counts(&self) -> Counts {
        Counts {
            total: self.prioritized.len() + self.delegated.len() + self.dropped.len(),
            delegated: self.delegated.len(),
            dropped: self.dropped.len(),
        }
    }

    /// Machine-readable report.
    pub fn report(&self) -> ProcessReport {
        ProcessReport::new(&self.prioritized, self.mits.as_deref(), self.counts())
    }
}

/// The priority engine.
///
/// Runs the pipeline:
/// ```text
/// Pre-filter → Compute → Sort → Select MITs
/// ```
/// The reference date and damping exponent are fixed when the engine is
/// built, so every task in a run is scored against the same parameters.
pub struct PriorityEngine {
    config: EngineConfig,
    today: NaiveDate,
    pre: TaskPreFilter,
    computer: TaskComputer,
    sorter: Box<dyn TaskSorter>,
    selector: Box<dyn MitSelector>,
}

impl PriorityEngine {
    /// Create an engine from a configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let today = config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        debug!("Engine reference date {}, alpha {}", today, config.alpha);

        Ok(Self {
            today,
            pre: TaskPreFilter::with_aliases(&config.self_aliases),
            computer: TaskComputer::new(today).with_alpha(config.alpha),
            sorter: Box::new(BacklogSorter),
            selector: Box::new(DefaultMitSelector),
            config,
        })
    }

    /// Replace the task computer.
    ///
    /// The computer carries its own reference date and scoring parameters.
    pub fn with_computer(mut self, computer: TaskComputer) -> Self {
        self.today = computer.today();
        self.computer = computer;
        self
    }

    /// Replace the backlog sorter.
    pub fn with_sorter(mut self, sorter: Box<dyn TaskSorter>) -> Self {
        self.sorter = sorter;
        self
    }

    /// Replace the MIT selector.
    pub fn with_selector(mut self, selector: Box<dyn MitSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Reference date of this engine.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Configuration this engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the in-memory pipeline, selecting MITs when configured.
    pub fn prioritize(&self, tasks: Vec<Task>) -> Prioritized {
        self.run(tasks, self.config.return_mits)
    }

    fn run(&self, tasks: Vec<Task>, with_mits: bool) -> Prioritized {
        let total = tasks.len();
        let partition = self.pre.filter(tasks);
        info!(
            "Pre-filtered {} tasks: {} kept, {} delegated, {} dropped",
            total,
            partition.keep.len(),
            partition.delegated.len(),
            partition.dropped.len()
        );

        let computed = self.computer.compute_all(partition.keep);
        let sorted = self.sorter.sort(computed);

        let mits = with_mits.then(|| self.selector.select(&sorted));
        if let Some(mits) = &mits {
            debug!("Selected {} MITs", mits.len());
        }

        Prioritized {
            prioritized: sorted,
            delegated: partition.delegated,
            dropped: partition.dropped,
            mits,
        }
    }

    /// Load tasks, run the pipeline and write the results.
    ///
    /// The computed backlog goes to `output`. MITs are selected when the
    /// configuration asks for them or when `mits_out` is given, and written
    /// as Markdown to `mits_out` if present.
    pub async fn process<R>(
        &self,
        repo: &R,
        input: &Path,
        output: &Path,
        mits_out: Option<&Path>,
    ) -> Result<Prioritized>
    where
        R: TaskRepository + ?Sized,
    {
        let tasks = repo.load(input).await?;
        let result = self.run(tasks, self.config.return_mits || mits_out.is_some());

        repo.save(output, &result.prioritized).await?;
        if let (Some(path), Some(mits)) = (mits_out, &result.mits) {
            repo.save_mits(path, mits).await?;
        }

        info!(
            "Processed {} tasks into {}",
            result.prioritized.len(),
            output.display()
        );
        Ok(result)
    }
}
