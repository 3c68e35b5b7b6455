//! Prio CLI - Eisenhower × layers × scoring task prioritization.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use prio_core::{Energy, Task};
use prio_engine::{EngineConfig, PriorityEngine};
use prio_storage::{TabularRepository, TaskRepository};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prio")]
#[command(about = "Priority engine: Eisenhower × layers × scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prioritize tasks from a CSV or JSON file
    Process {
        /// Input file (.csv or .json)
        #[arg(long = "in")]
        input: PathBuf,
        /// Output CSV file
        #[arg(long = "out")]
        output: PathBuf,
        /// Markdown file for today's MITs
        #[arg(long)]
        mits_out: Option<PathBuf>,
        /// JSON report file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Damping exponent for effort
        #[arg(long)]
        alpha: Option<f64>,
        /// JSON engine config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Owner name that means you (repeatable, replaces the defaults)
        #[arg(long = "self-alias")]
        self_aliases: Vec<String>,
    },
    /// Write a sample CSV input
    Template {
        /// Output CSV file
        #[arg(long = "out")]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Results go to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let repo = TabularRepository::new();

    match cli.command {
        Commands::Process {
            input,
            output,
            mits_out,
            json,
            today,
            alpha,
            config,
            self_aliases,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(&path)
                    .await
                    .with_context(|| format!("Failed to read config {}", path.display()))?,
                None => EngineConfig::default(),
            };
            if let Some(today) = today {
                engine_config = engine_config.with_reference_date(today);
            }
            if let Some(alpha) = alpha {
                engine_config = engine_config.with_alpha(alpha);
            }
            if !self_aliases.is_empty() {
                engine_config = engine_config.with_self_aliases(self_aliases);
            }
            debug!("Engine config: {:?}", engine_config);

            let engine = PriorityEngine::new(engine_config)?;
            let result = engine
                .process(&repo, &input, &output, mits_out.as_deref())
                .await
                .with_context(|| format!("Failed to process {}", input.display()))?;

            if let Some(path) = &json {
                repo.save_report(path, &result.report()).await?;
            }

            let counts = result.counts();
            println!(
                "Processed: {} | Delegated: {} | Dropped: {}",
                result.prioritized.len(),
                counts.delegated,
                counts.dropped
            );
            println!("Output: {}", output.display());
            if let Some(path) = mits_out {
                println!("MIT: {}", path.display());
            }
            if let Some(path) = json {
                println!("Report: {}", path.display());
            }
        }
        Commands::Template { output } => {
            repo.save_inputs(&output, &sample_tasks()).await?;
            info!("Template written");
            println!("Sample: {}", output.display());
        }
    }

    Ok(())
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("Set up backups")
            .with_time_est(0.5)
            .with_layer("Fundament")
            .with_scores(4.0, 3.0, 2.0)
            .with_notes("rclone + cron"),
        Task::new("Automation script")
            .with_energy(Energy::High)
            .with_layer("Strategic")
            .with_scores(5.0, 4.0, 2.0),
        Task::new("Tidy desktop")
            .with_time_est(0.25)
            .with_energy(Energy::Low)
            .with_scores(2.0, 2.0, 1.0),
        Task::new("ML article")
            .with_energy(Energy::Low)
            .with_layer("Leisure")
            .with_scores(1.0, 1.0, 2.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use prio_core::Category;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_args() {
        let cli = Cli::try_parse_from([
            "prio", "process", "--in", "a.csv", "--out", "b.csv", "--today", "2025-01-02",
            "--alpha", "0.9", "--self-alias", "jerry", "--self-alias", "me",
        ])
        .unwrap();

        let Commands::Process { today, alpha, self_aliases, mits_out, .. } = cli.command else {
            panic!("expected process");
        };
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(alpha, Some(0.9));
        assert_eq!(self_aliases, ["jerry", "me"]);
        assert!(mits_out.is_none());
    }

    #[test]
    fn test_sample_covers_every_category() {
        let categories: Vec<Category> = sample_tasks().iter().map(Task::category).collect();
        for category in Category::ALL {
            assert!(categories.contains(&category));
        }
    }
}
