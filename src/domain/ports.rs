use crate::domain::model::EmployeeSchedule;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All employee records whose schedule field is present and non-null.
    async fn fetch_schedules(&self) -> Result<Vec<EmployeeSchedule>>;

    /// Replace one record's schedule field by id, leaving every other field
    /// of the record as-is.
    async fn update_schedule(&self, id: &str, schedule: &Value) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> &str;
    fn report_path(&self) -> Option<&str>;
    fn dry_run(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}
