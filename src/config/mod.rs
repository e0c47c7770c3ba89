pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "workhours-migrate")]
#[command(about = "Batch migration tool for employee working-hours schedules")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the employee data file (overrides the config file)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Write the batch report as JSON to this path
    #[arg(long, global = true)]
    pub report: Option<String>,

    /// Run the full transformation without writing anything back
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log process stats per batch phase
    #[arg(long, global = true)]
    pub monitor: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Convert legacy day-keyed schedules into normalized time slots
    Migrate,
    /// Run the transformation against a built-in example and print before/after
    Test,
    /// Fold normalized time slots back into the legacy day-keyed shape
    Rollback,
}

/// Effective settings after merging the command line over the optional
/// config file. Command-line values win; booleans are OR-ed.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_path: String,
    pub report_path: Option<String>,
    pub dry_run: bool,
    pub monitor: bool,
}

pub const DEFAULT_DATA_PATH: &str = "./employees.json";

#[cfg(feature = "cli")]
impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        Self {
            data_path: cli
                .data
                .clone()
                .or_else(|| file.map(|f| f.store.path.clone()))
                .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            report_path: cli
                .report
                .clone()
                .or_else(|| file.and_then(|f| f.report_path().map(str::to_string))),
            dry_run: cli.dry_run || file.map(|f| f.dry_run()).unwrap_or(false),
            monitor: cli.monitor || file.map(|f| f.monitoring_enabled()).unwrap_or(false),
        }
    }
}

impl ConfigProvider for Settings {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn report_path(&self) -> Option<&str> {
        self.report_path.as_deref()
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data", &self.data_path)?;
        validation::validate_file_extension("data", &self.data_path, &["json"])?;
        if let Some(report) = &self.report_path {
            validation::validate_path("report", report)?;
        }
        Ok(())
    }
}
