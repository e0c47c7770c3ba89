use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One discrete one-hour availability window. `day_of_week` is 0-6 with
/// Sunday = 0; the id is stable across runs for the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub is_recurring: bool,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_date: Option<NaiveDate>,
}

/// Normalized schedule as persisted on the employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub time_slots: Vec<TimeSlot>,
    pub time_offs: Vec<Value>,
}

/// View of one employee record as returned by the store: identity plus the
/// opaque schedule blob. Other fields on the record stay in the store.
#[derive(Debug, Clone)]
pub struct EmployeeSchedule {
    pub id: String,
    pub name: String,
    pub working_hours: Value,
}

/// Outcome of converting a single schedule blob, in either direction.
#[derive(Debug, Clone, PartialEq)]
pub enum MigrationOutcome {
    /// The schedule was converted; the new blob should replace the old one.
    Converted(Value),
    /// Nothing to do for this record; the reason is reported, not an error.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already carries `timeSlots`.
    AlreadyMigrated,
    /// Empty or absent legacy map.
    EmptySchedule,
    /// Rollback target does not carry `timeSlots`.
    NotMigrated,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadyMigrated => write!(f, "already migrated"),
            SkipReason::EmptySchedule => write!(f, "empty schedule"),
            SkipReason::NotMigrated => write!(f, "not migrated"),
        }
    }
}

/// Accumulated result of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrationReport {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl MigrationReport {
    pub fn record_migrated(&mut self) {
        self.migrated += 1;
        self.total += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
        self.total += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
        self.total += 1;
    }
}
