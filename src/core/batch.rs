use crate::core::migrator::{migrate_schedule, rollback_schedule};
use crate::domain::model::{EmployeeSchedule, MigrationOutcome, MigrationReport};
use crate::domain::ports::EmployeeStore;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchDirection {
    Migrate,
    Rollback,
}

impl BatchDirection {
    fn verb(&self) -> &'static str {
        match self {
            BatchDirection::Migrate => "Migrated",
            BatchDirection::Rollback => "Reverted",
        }
    }
}

/// Sequential batch runner: one employee at a time, one store round trip per
/// read and per write. A bad record is logged and counted, never fatal; only
/// the initial fetch can abort the batch.
pub struct MigrationEngine<S: EmployeeStore> {
    store: S,
    monitor: SystemMonitor,
    dry_run: bool,
}

impl<S: EmployeeStore> MigrationEngine<S> {
    pub fn new(store: S) -> Self {
        Self::new_with_monitoring(store, false, false)
    }

    pub fn new_with_monitoring(store: S, monitor_enabled: bool, dry_run: bool) -> Self {
        Self {
            store,
            monitor: SystemMonitor::new(monitor_enabled),
            dry_run,
        }
    }

    pub async fn run(&self, direction: BatchDirection) -> Result<MigrationReport> {
        tracing::info!("Fetching employee schedules...");
        let employees = self.store.fetch_schedules().await?;
        tracing::info!("Fetched {} employees with a schedule", employees.len());
        self.monitor.log_stats("Fetch");

        let mut report = MigrationReport::default();
        for employee in &employees {
            match self.apply(direction, employee).await {
                Ok(MigrationOutcome::Converted(_)) => {
                    tracing::info!("✅ {} schedule of {}", direction.verb(), employee.name);
                    report.record_migrated();
                }
                Ok(MigrationOutcome::Skipped(reason)) => {
                    tracing::info!("⏭️ Skipped {} ({})", employee.name, reason);
                    report.record_skipped();
                }
                Err(e) => {
                    tracing::error!("❌ Failed to process {}: {}", employee.name, e);
                    report.record_failed();
                }
            }
        }
        report.finished_at = Some(Utc::now());

        self.monitor.log_stats("Batch");
        tracing::info!(
            "📊 Batch completed: {} migrated, {} skipped, {} failed ({} total)",
            report.migrated,
            report.skipped,
            report.failed,
            report.total
        );

        Ok(report)
    }

    async fn apply(
        &self,
        direction: BatchDirection,
        employee: &EmployeeSchedule,
    ) -> Result<MigrationOutcome> {
        let outcome = match direction {
            BatchDirection::Migrate => migrate_schedule(&employee.working_hours)?,
            BatchDirection::Rollback => rollback_schedule(&employee.working_hours)?,
        };

        if let MigrationOutcome::Converted(new_schedule) = &outcome {
            if self.dry_run {
                tracing::info!("🔍 [dry-run] Would update schedule of {}", employee.name);
            } else {
                self.store.update_schedule(&employee.id, new_schedule).await?;
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MigrateError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStore {
        employees: Vec<EmployeeSchedule>,
        updates: Arc<Mutex<Vec<(String, Value)>>>,
        fail_update_for: Option<String>,
        fail_fetch: bool,
    }

    impl MockStore {
        fn new(employees: Vec<EmployeeSchedule>) -> Self {
            Self {
                employees,
                updates: Arc::new(Mutex::new(Vec::new())),
                fail_update_for: None,
                fail_fetch: false,
            }
        }

        async fn updates(&self) -> Vec<(String, Value)> {
            self.updates.lock().await.clone()
        }
    }

    #[async_trait]
    impl EmployeeStore for MockStore {
        async fn fetch_schedules(&self) -> crate::utils::error::Result<Vec<EmployeeSchedule>> {
            if self.fail_fetch {
                return Err(MigrateError::StoreError {
                    message: "connection refused".to_string(),
                });
            }
            Ok(self.employees.clone())
        }

        async fn update_schedule(
            &self,
            id: &str,
            schedule: &Value,
        ) -> crate::utils::error::Result<()> {
            if self.fail_update_for.as_deref() == Some(id) {
                return Err(MigrateError::StoreError {
                    message: format!("write rejected for {}", id),
                });
            }
            self.updates
                .lock()
                .await
                .push((id.to_string(), schedule.clone()));
            Ok(())
        }
    }

    fn employee(id: &str, name: &str, working_hours: Value) -> EmployeeSchedule {
        EmployeeSchedule {
            id: id.to_string(),
            name: name.to_string(),
            working_hours,
        }
    }

    #[tokio::test]
    async fn test_batch_counts_migrated_and_skipped() {
        let store = MockStore::new(vec![
            employee("e1", "Ana", json!({ "tuesday": ["08:00", "10:00"] })),
            employee("e2", "Bruno", json!({ "timeSlots": [], "timeOffs": [] })),
            employee("e3", "Carla", json!({})),
        ]);
        let engine = MigrationEngine::new(store.clone());

        let report = engine.run(BatchDirection::Migrate).await.unwrap();

        assert_eq!(report.migrated, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(report.total, 3);
        assert!(report.finished_at.is_some());

        let updates = store.updates().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "e1");
        assert_eq!(updates[0].1["timeSlots"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bad_record_does_not_abort_batch() {
        let store = MockStore::new(vec![
            employee("e1", "Ana", json!("not an object")),
            employee("e2", "Bruno", json!({ "monday": ["09:00"] })),
        ]);
        let engine = MigrationEngine::new(store.clone());

        let report = engine.run(BatchDirection::Migrate).await.unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.migrated, 1);
        assert_eq!(report.total, 2);

        let updates = store.updates().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "e2");
    }

    #[tokio::test]
    async fn test_write_failure_is_counted_per_record() {
        let mut store = MockStore::new(vec![
            employee("e1", "Ana", json!({ "monday": ["09:00"] })),
            employee("e2", "Bruno", json!({ "tuesday": ["10:00"] })),
        ]);
        store.fail_update_for = Some("e1".to_string());
        let engine = MigrationEngine::new(store.clone());

        let report = engine.run(BatchDirection::Migrate).await.unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.migrated, 1);

        let updates = store.updates().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "e2");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let mut store = MockStore::new(vec![]);
        store.fail_fetch = true;
        let engine = MigrationEngine::new(store);

        assert!(engine.run(BatchDirection::Migrate).await.is_err());
    }

    #[tokio::test]
    async fn test_dry_run_suppresses_writes() {
        let store = MockStore::new(vec![employee(
            "e1",
            "Ana",
            json!({ "monday": ["09:00"] }),
        )]);
        let engine = MigrationEngine::new_with_monitoring(store.clone(), false, true);

        let report = engine.run(BatchDirection::Migrate).await.unwrap();

        assert_eq!(report.migrated, 1);
        assert!(store.updates().await.is_empty());
    }

    #[tokio::test]
    async fn test_rollback_direction_reverts_normalized_schedules() {
        let normalized = match migrate_schedule(&json!({ "tuesday": ["08:00"] })).unwrap() {
            MigrationOutcome::Converted(value) => value,
            other => panic!("expected Converted, got {:?}", other),
        };
        let store = MockStore::new(vec![
            employee("e1", "Ana", normalized),
            employee("e2", "Bruno", json!({ "monday": ["09:00"] })),
        ]);
        let engine = MigrationEngine::new(store.clone());

        let report = engine.run(BatchDirection::Rollback).await.unwrap();

        assert_eq!(report.migrated, 1);
        assert_eq!(report.skipped, 1);

        let updates = store.updates().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1, json!({ "tuesday": ["08:00"] }));
    }
}
