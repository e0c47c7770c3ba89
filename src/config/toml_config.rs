use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MigrateError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub migration: MigrationSection,
    pub store: StoreSection,
    pub batch: Option<BatchSection>,
    pub report: Option<ReportSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationSection {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string, after resolving `${VAR}`
    /// placeholders against the environment. Unset variables stay verbatim.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let placeholder = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
        let resolved = placeholder.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        });

        toml::from_str(&resolved).map_err(|e| MigrateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("migration.name", &self.migration.name)?;
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_file_extension("store.path", &self.store.path, &["json"])?;

        if let Some(report) = &self.report {
            if let Some(path) = &report.path {
                validation::validate_path("report.path", path)?;
            }
        }

        Ok(())
    }

    pub fn report_path(&self) -> Option<&str> {
        self.report.as_ref()?.path.as_deref()
    }

    pub fn dry_run(&self) -> bool {
        self.batch
            .as_ref()
            .and_then(|b| b.dry_run)
            .unwrap_or(false)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_path(&self) -> &str {
        &self.store.path
    }

    fn report_path(&self) -> Option<&str> {
        self.report_path()
    }

    fn dry_run(&self) -> bool {
        self.dry_run()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring_enabled()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
