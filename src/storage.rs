use crate::errors::AppError;
use crate::models::{ProgressData, Record};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("GYM_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/gym_progress.json"))
}

/// Reads the whole store. A missing file and an unreadable or malformed one
/// both come back as the empty store; the caller never sees an error.
pub async fn load_data(path: &Path) -> ProgressData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse progress file: {err}");
                ProgressData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ProgressData::default(),
        Err(err) => {
            error!("failed to read progress file: {err}");
            ProgressData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &ProgressData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Load, append to the named exercise's log, re-sort, rewrite the file.
/// Returns the updated log so the caller can answer without a second read.
pub async fn append_record(
    path: &Path,
    exercise: &str,
    record: Record,
) -> Result<Vec<Record>, AppError> {
    let mut data = load_data(path).await;
    let log = data.exercises.entry(exercise.to_string()).or_default();
    log.push(record);
    // Stable sort: records on the same date keep their insertion order.
    log.sort_by_key(|entry| entry.date);
    let updated = log.clone();

    persist_data(path, &data).await?;

    Ok(updated)
}

pub async fn exercise_log(path: &Path, exercise: &str) -> Vec<Record> {
    load_data(path)
        .await
        .exercises
        .remove(exercise)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_store() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("gym_progress.json");
        (dir, path)
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty_store() {
        let (_dir, path) = temp_store();
        let data = load_data(&path).await;
        assert!(data.exercises.is_empty());
    }

    #[tokio::test]
    async fn load_invalid_json_returns_empty_store() {
        let (_dir, path) = temp_store();
        fs::write(&path, b"{not json at all").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.exercises.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_dir, path) = temp_store();
        let mut data = ProgressData::default();
        data.exercises.insert(
            "Bench Press".to_string(),
            vec![
                Record { date: day(2024, 1, 1), weight: 50.0 },
                Record { date: day(2024, 1, 15), weight: 55.0 },
            ],
        );
        data.exercises.insert(
            "Leg Press".to_string(),
            vec![Record { date: day(2024, 1, 2), weight: 120.0 }],
        );

        persist_data(&path, &data).await.unwrap();
        assert_eq!(load_data(&path).await, data);
    }

    #[tokio::test]
    async fn file_is_keyed_by_exercise_name() {
        let (_dir, path) = temp_store();
        append_record(
            &path,
            "Bench Press",
            Record { date: day(2024, 1, 1), weight: 50.0 },
        )
        .await
        .unwrap();

        let raw = fs::read(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        let log = value
            .as_object()
            .and_then(|map| map.get("Bench Press"))
            .and_then(|log| log.as_array())
            .expect("top-level object keyed by exercise name");
        assert_eq!(log[0]["date"], "2024-01-01");
        assert_eq!(log[0]["weight"], 50.0);
    }

    #[tokio::test]
    async fn append_then_read_sees_record_once() {
        let (_dir, path) = temp_store();
        let record = Record { date: day(2024, 1, 1), weight: 50.0 };
        append_record(&path, "Pull-Up", record).await.unwrap();

        let log = exercise_log(&path, "Pull-Up").await;
        assert_eq!(log, vec![record]);
        assert!(exercise_log(&path, "Bench Press").await.is_empty());
    }

    #[tokio::test]
    async fn append_keeps_log_sorted_regardless_of_insertion_order() {
        let (_dir, path) = temp_store();
        for (date, weight) in [
            (day(2024, 1, 1), 50.0),
            (day(2024, 1, 15), 55.0),
            (day(2024, 2, 1), 60.0),
            (day(2023, 12, 1), 40.0),
        ] {
            append_record(&path, "Barbell Row", Record { date, weight })
                .await
                .unwrap();
        }

        let log = exercise_log(&path, "Barbell Row").await;
        let dates: Vec<_> = log.iter().map(|record| record.date).collect();
        assert_eq!(
            dates,
            vec![
                day(2023, 12, 1),
                day(2024, 1, 1),
                day(2024, 1, 15),
                day(2024, 2, 1),
            ]
        );
    }

    #[tokio::test]
    async fn same_date_records_keep_insertion_order() {
        let (_dir, path) = temp_store();
        for weight in [50.0, 52.5, 55.0] {
            append_record(
                &path,
                "Overhead Press",
                Record { date: day(2024, 3, 1), weight },
            )
            .await
            .unwrap();
        }

        let weights: Vec<_> = exercise_log(&path, "Overhead Press")
            .await
            .iter()
            .map(|record| record.weight)
            .collect();
        assert_eq!(weights, vec![50.0, 52.5, 55.0]);
    }
}
