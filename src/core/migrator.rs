use crate::core::weekday::{day_name, resolve_day_of_week};
use crate::domain::model::{MigrationOutcome, SkipReason, TimeSlot, WorkingHours};
use crate::utils::error::{MigrateError, Result};
use serde_json::{Map, Value};

pub const TIME_SLOTS_KEY: &str = "timeSlots";

/// Convert a legacy day-keyed schedule blob into the normalized
/// `timeSlots`/`timeOffs` shape.
///
/// A blob that already carries `timeSlots` is left untouched, and an empty
/// or null blob is reported as skipped. Slot order follows the insertion
/// order of the legacy map; it is not canonicalized by weekday.
pub fn migrate_schedule(legacy: &Value) -> Result<MigrationOutcome> {
    let map = match legacy {
        Value::Null => return Ok(MigrationOutcome::Skipped(SkipReason::EmptySchedule)),
        Value::Object(map) => map,
        other => {
            return Err(MigrateError::ProcessingError {
                message: format!("workingHours should be an object, got {}", json_type(other)),
            })
        }
    };

    if map.contains_key(TIME_SLOTS_KEY) {
        return Ok(MigrationOutcome::Skipped(SkipReason::AlreadyMigrated));
    }
    if map.is_empty() {
        return Ok(MigrationOutcome::Skipped(SkipReason::EmptySchedule));
    }

    let mut time_slots = Vec::new();
    for (day, value) in map {
        let Some(day_of_week) = resolve_day_of_week(day) else {
            tracing::warn!("⚠️ Unrecognized weekday '{}', entry skipped", day);
            continue;
        };

        let Some(times) = value.as_array() else {
            tracing::warn!("⚠️ Times for '{}' are not a list, entry skipped", day);
            continue;
        };

        for (index, time) in times.iter().enumerate() {
            let Some(start_time) = time.as_str() else {
                tracing::warn!("⚠️ Non-string start time for '{}' at {}, skipped", day, index);
                continue;
            };
            time_slots.push(build_slot(day_of_week, start_time, index));
        }
    }

    let normalized = WorkingHours {
        time_slots,
        time_offs: Vec::new(),
    };
    Ok(MigrationOutcome::Converted(serde_json::to_value(normalized)?))
}

/// Fold a normalized schedule back into the legacy day-keyed map, grouping
/// start times under lowercase English day names in the order the days
/// first appear in `timeSlots`. Blobs without `timeSlots` are skipped.
pub fn rollback_schedule(schedule: &Value) -> Result<MigrationOutcome> {
    let map = match schedule {
        Value::Null => return Ok(MigrationOutcome::Skipped(SkipReason::NotMigrated)),
        Value::Object(map) => map,
        other => {
            return Err(MigrateError::ProcessingError {
                message: format!("workingHours should be an object, got {}", json_type(other)),
            })
        }
    };

    let Some(slots_value) = map.get(TIME_SLOTS_KEY) else {
        return Ok(MigrationOutcome::Skipped(SkipReason::NotMigrated));
    };
    let Some(slots) = slots_value.as_array() else {
        return Err(MigrateError::ProcessingError {
            message: "timeSlots should be a list".to_string(),
        });
    };

    let mut legacy = Map::new();
    for slot in slots {
        let day_of_week = slot.get("dayOfWeek").and_then(Value::as_u64);
        let start_time = slot.get("startTime").and_then(Value::as_str);

        let (Some(day_of_week), Some(start_time)) = (day_of_week, start_time) else {
            tracing::warn!("⚠️ Slot without dayOfWeek/startTime, skipped");
            continue;
        };
        let Some(name) = u8::try_from(day_of_week).ok().and_then(day_name) else {
            tracing::warn!("⚠️ Slot with out-of-range dayOfWeek {}, skipped", day_of_week);
            continue;
        };

        let times = legacy
            .entry(name.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(times) = times {
            times.push(Value::String(start_time.to_string()));
        }
    }

    Ok(MigrationOutcome::Converted(Value::Object(legacy)))
}

fn build_slot(day_of_week: u8, start_time: &str, index: usize) -> TimeSlot {
    TimeSlot {
        id: format!(
            "slot_{}_{}_{}",
            day_of_week,
            start_time.replace(':', ""),
            index
        ),
        day_of_week,
        start_time: start_time.to_string(),
        end_time: one_hour_later(start_time),
        is_recurring: true,
        is_active: true,
        specific_date: None,
    }
}

/// End hour is start hour + 1 with no wrap at 24; "23:30" maps to "24:30".
/// Minutes are carried over verbatim.
fn one_hour_later(start_time: &str) -> String {
    match start_time.split_once(':') {
        Some((hour, minutes)) => match hour.parse::<u32>() {
            Ok(hour) => format!("{:02}:{}", hour + 1, minutes),
            Err(_) => start_time.to_string(),
        },
        None => start_time.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
