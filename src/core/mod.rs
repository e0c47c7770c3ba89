pub mod batch;
pub mod migrator;
pub mod timetext;
pub mod weekday;

pub use crate::domain::model::{
    EmployeeSchedule, MigrationOutcome, MigrationReport, SkipReason, TimeSlot, WorkingHours,
};
pub use crate::domain::ports::{ConfigProvider, EmployeeStore};
pub use crate::utils::error::Result;
