use crate::domain::model::EmployeeSchedule;
use crate::domain::ports::EmployeeStore;
use crate::utils::error::{MigrateError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

const WORKING_HOURS_FIELD: &str = "workingHours";

/// Employee store over a single JSON document: a list of employee objects.
/// The schedule field is treated as an opaque blob; every other field of a
/// record is written back untouched.
#[derive(Debug, Clone)]
pub struct JsonEmployeeStore {
    path: PathBuf,
}

impl JsonEmployeeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<Vec<Value>> {
        let data = fs::read_to_string(&self.path)?;
        let document: Value = serde_json::from_str(&data)?;
        match document {
            Value::Array(records) => Ok(records),
            _ => Err(MigrateError::StoreError {
                message: format!(
                    "{} should contain a JSON list of employee records",
                    self.path.display()
                ),
            }),
        }
    }

    fn write_document(&self, records: Vec<Value>) -> Result<()> {
        let data = serde_json::to_string_pretty(&Value::Array(records))?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for JsonEmployeeStore {
    async fn fetch_schedules(&self) -> Result<Vec<EmployeeSchedule>> {
        let records = self.read_document()?;

        let mut schedules = Vec::new();
        for record in &records {
            // Only records with a present, non-null schedule field qualify
            let working_hours = match record.get(WORKING_HOURS_FIELD) {
                None | Some(Value::Null) => continue,
                Some(value) => value.clone(),
            };

            let Some(id) = record.get("id").and_then(Value::as_str) else {
                tracing::warn!("⚠️ Employee record without a string id, skipped");
                continue;
            };
            let name = record
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(id)
                .to_string();

            schedules.push(EmployeeSchedule {
                id: id.to_string(),
                name,
                working_hours,
            });
        }

        Ok(schedules)
    }

    async fn update_schedule(&self, id: &str, schedule: &Value) -> Result<()> {
        let mut records = self.read_document()?;

        let record = records
            .iter_mut()
            .find(|record| record.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| MigrateError::StoreError {
                message: format!("no employee with id '{}'", id),
            })?;

        match record {
            Value::Object(fields) => {
                fields.insert(WORKING_HOURS_FIELD.to_string(), schedule.clone());
            }
            _ => {
                return Err(MigrateError::StoreError {
                    message: format!("employee record '{}' is not an object", id),
                })
            }
        }

        self.write_document(records)
    }
}
