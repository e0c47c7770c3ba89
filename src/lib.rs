pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::store::JsonEmployeeStore;
pub use config::Settings;
pub use core::batch::{BatchDirection, MigrationEngine};
pub use utils::error::{MigrateError, Result};
