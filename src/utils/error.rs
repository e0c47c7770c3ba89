use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Store error: {message}")]
    StoreError { message: String },

    #[error("Schedule processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Store,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MigrateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MigrateError::IoError(_) => ErrorCategory::Io,
            MigrateError::SerializationError(_) => ErrorCategory::Data,
            MigrateError::ConfigError { .. }
            | MigrateError::ConfigValidationError { .. }
            | MigrateError::InvalidConfigValueError { .. }
            | MigrateError::MissingConfigError { .. } => ErrorCategory::Config,
            MigrateError::StoreError { .. } => ErrorCategory::Store,
            MigrateError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Losing the employee file aborts the whole batch
            MigrateError::IoError(_) => ErrorSeverity::Critical,
            MigrateError::SerializationError(_) => ErrorSeverity::High,
            MigrateError::ConfigError { .. }
            | MigrateError::ConfigValidationError { .. }
            | MigrateError::InvalidConfigValueError { .. }
            | MigrateError::MissingConfigError { .. } => ErrorSeverity::High,
            MigrateError::StoreError { .. } => ErrorSeverity::High,
            // Per-record processing failures never abort the batch
            MigrateError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MigrateError::IoError(_) => {
                "Check that the data file exists and is readable/writable".to_string()
            }
            MigrateError::SerializationError(_) => {
                "Check that the data file contains valid JSON".to_string()
            }
            MigrateError::ConfigError { .. } | MigrateError::ConfigValidationError { .. } => {
                "Review the configuration file against the documented sections".to_string()
            }
            MigrateError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and retry", field)
            }
            MigrateError::MissingConfigError { field } => {
                format!("Provide '{}' via the config file or command line", field)
            }
            MigrateError::StoreError { .. } => {
                "Verify the employee record exists in the data file".to_string()
            }
            MigrateError::ProcessingError { .. } => {
                "Inspect the record's workingHours field; it should be a day-keyed object"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MigrateError::IoError(e) => format!("Could not access the data file: {}", e),
            MigrateError::SerializationError(e) => format!("Data file is not valid JSON: {}", e),
            MigrateError::ConfigError { message } => format!("Configuration problem: {}", message),
            MigrateError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            MigrateError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' = '{}' is not acceptable: {}", field, value, reason)
            }
            MigrateError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            MigrateError::StoreError { message } => format!("Employee store problem: {}", message),
            MigrateError::ProcessingError { message } => {
                format!("Could not process schedule: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
