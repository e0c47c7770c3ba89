use serde_json::{json, Value};
use tempfile::TempDir;
use workhours_migrate::{BatchDirection, JsonEmployeeStore, MigrationEngine};

fn write_employees(dir: &TempDir, employees: &Value) -> std::path::PathBuf {
    let path = dir.path().join("employees.json");
    std::fs::write(&path, serde_json::to_string_pretty(employees).unwrap()).unwrap();
    path
}

fn read_employees(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_end_to_end_migration_batch() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_employees(
        &temp_dir,
        &json!([
            {
                "id": "e1",
                "name": "Ana",
                "email": "ana@example.com",
                "workingHours": {
                    "tuesday": ["08:00", "10:00", "16:00", "19:30"],
                    "saturday": ["10:00", "14:00", "18:00"],
                    "thursday": ["08:00", "10:00", "12:00", "19:30"]
                }
            },
            { "id": "e2", "name": "Bruno", "workingHours": null },
            { "id": "e3", "name": "Carla", "workingHours": { "timeSlots": [], "timeOffs": [] } },
            { "id": "e4", "name": "Dora", "workingHours": {} }
        ]),
    );

    let engine = MigrationEngine::new(JsonEmployeeStore::new(&path));
    let report = engine.run(BatchDirection::Migrate).await.unwrap();

    // Bruno has a null schedule and never enters the batch
    assert_eq!(report.total, 3);
    assert_eq!(report.migrated, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.failed, 0);

    let employees = read_employees(&path);

    let ana = &employees[0];
    assert_eq!(ana["email"], "ana@example.com");
    let slots = ana["workingHours"]["timeSlots"].as_array().unwrap();
    assert_eq!(slots.len(), 10);
    assert_eq!(ana["workingHours"]["timeOffs"], json!([]));

    let tuesday_eight = slots
        .iter()
        .find(|slot| slot["dayOfWeek"] == 2 && slot["startTime"] == "08:00")
        .unwrap();
    assert_eq!(tuesday_eight["endTime"], "09:00");
    assert_eq!(tuesday_eight["id"], "slot_2_0800_0");

    // Untouched records keep their original shape
    assert_eq!(employees[1]["workingHours"], Value::Null);
    assert_eq!(employees[3]["workingHours"], json!({}));
}

#[tokio::test]
async fn test_second_run_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_employees(
        &temp_dir,
        &json!([
            { "id": "e1", "name": "Ana", "workingHours": { "monday": ["09:00", "10:00"] } }
        ]),
    );

    let engine = MigrationEngine::new(JsonEmployeeStore::new(&path));

    let first = engine.run(BatchDirection::Migrate).await.unwrap();
    assert_eq!(first.migrated, 1);
    let after_first = std::fs::read_to_string(&path).unwrap();

    let second = engine.run(BatchDirection::Migrate).await.unwrap();
    assert_eq!(second.migrated, 0);
    assert_eq!(second.skipped, 1);
    let after_second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn test_end_time_invariant_across_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_employees(
        &temp_dir,
        &json!([
            {
                "id": "e1",
                "name": "Ana",
                "workingHours": { "monday": ["09:15", "23:30"], "6a": ["07:45"] }
            }
        ]),
    );

    let engine = MigrationEngine::new(JsonEmployeeStore::new(&path));
    engine.run(BatchDirection::Migrate).await.unwrap();

    let employees = read_employees(&path);
    let slots = employees[0]["workingHours"]["timeSlots"].as_array().unwrap();
    assert_eq!(slots.len(), 3);

    for slot in slots {
        let start = slot["startTime"].as_str().unwrap();
        let end = slot["endTime"].as_str().unwrap();
        let (start_hour, start_minutes) = start.split_once(':').unwrap();
        let (end_hour, end_minutes) = end.split_once(':').unwrap();

        assert_eq!(start_minutes, end_minutes);
        assert_eq!(
            end_hour.parse::<u32>().unwrap(),
            start_hour.parse::<u32>().unwrap() + 1
        );
    }
}

#[tokio::test]
async fn test_corrupted_record_is_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_employees(
        &temp_dir,
        &json!([
            { "id": "e1", "name": "Ana", "workingHours": "corrupted" },
            { "id": "e2", "name": "Bruno", "workingHours": { "tuesday": ["10:00"] } }
        ]),
    );

    let engine = MigrationEngine::new(JsonEmployeeStore::new(&path));
    let report = engine.run(BatchDirection::Migrate).await.unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.migrated, 1);

    let employees = read_employees(&path);
    assert_eq!(employees[0]["workingHours"], json!("corrupted"));
    assert!(employees[1]["workingHours"]["timeSlots"].is_array());
}

#[tokio::test]
async fn test_migrate_then_rollback_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let legacy = json!({
        "tuesday": ["08:00", "10:00"],
        "saturday": ["14:00"]
    });
    let path = write_employees(
        &temp_dir,
        &json!([{ "id": "e1", "name": "Ana", "workingHours": legacy.clone() }]),
    );

    let engine = MigrationEngine::new(JsonEmployeeStore::new(&path));
    engine.run(BatchDirection::Migrate).await.unwrap();

    let rollback = engine.run(BatchDirection::Rollback).await.unwrap();
    assert_eq!(rollback.migrated, 1);

    let employees = read_employees(&path);
    assert_eq!(employees[0]["workingHours"], legacy);
}

#[tokio::test]
async fn test_missing_data_file_aborts_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.json");

    let engine = MigrationEngine::new(JsonEmployeeStore::new(&path));
    assert!(engine.run(BatchDirection::Migrate).await.is_err());
}
