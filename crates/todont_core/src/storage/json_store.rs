use crate::bingo::BingoCard;
use crate::error::AppError;
use crate::model::Task;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// v1 stored only tasks and the point counter; v2 added the bingo card
/// and shop purchases. Old stores load with defaults for the new fields.
pub const SCHEMA_VERSION: u32 = 2;
const STORE_FILE_NAME: &str = "store.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredState {
    schema_version: u32,
    tasks: Vec<Task>,
    #[serde(default)]
    total_points: u64,
    #[serde(default)]
    bingo: Option<BingoCard>,
    #[serde(default)]
    purchases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub total_points: u64,
    pub bingo: Option<BingoCard>,
    pub purchases: Vec<String>,
}

pub fn store_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var("TODONT_STORE_PATH")
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("todont").join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("todont")
            .join(STORE_FILE_NAME))
    }
}

pub fn load_state(path: &Path) -> Result<AppState, AppError> {
    if !path.exists() {
        return Ok(AppState::default());
    }

    let content = std::fs::read_to_string(path).map_err(|err| AppError::io(err.to_string()))?;
    let stored: StoredState =
        serde_json::from_str(&content).map_err(|err| AppError::invalid_data(err.to_string()))?;

    if !(1..=SCHEMA_VERSION).contains(&stored.schema_version) {
        return Err(AppError::invalid_data("schema_version mismatch"));
    }

    Ok(AppState {
        tasks: stored.tasks,
        total_points: stored.total_points,
        bingo: stored.bingo,
        purchases: stored.purchases,
    })
}

pub fn save_state(path: &Path, state: &AppState) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let stored = StoredState {
        schema_version: SCHEMA_VERSION,
        tasks: state.tasks.to_vec(),
        total_points: state.total_points,
        bingo: state.bingo.clone(),
        purchases: state.purchases.to_vec(),
    };
    let content = serde_json::to_string_pretty(&stored)
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AppState, SCHEMA_VERSION, load_state, save_state};
    use crate::bingo::BingoCard;
    use crate::model::Task;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use time::macros::date;

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("todont-{nanos}-{file_name}"))
    }

    fn sample_task() -> Task {
        Task {
            id: "task-1".to_string(),
            text: "Clean room".to_string(),
            created_at: "2026-01-10T09:00:00Z".to_string(),
            last_avoided_at: "2026-01-10T09:00:00Z".to_string(),
            total_avoidance_time: 12,
            is_active: true,
            points: 3,
            start_time: Some("2026-01-10T09:00:00Z".to_string()),
            end_time: Some("2026-01-10T09:30:00Z".to_string()),
            estimated_duration: Some(30),
        }
    }

    #[test]
    fn missing_store_loads_empty_state() {
        let path = temp_path("missing.json");
        let state = load_state(&path).unwrap();
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_path("store.json");
        let state = AppState {
            tasks: vec![sample_task()],
            total_points: 42,
            bingo: Some(BingoCard::generate(date!(2026 - 01 - 05)).unwrap()),
            purchases: vec!["1".to_string()],
        };

        save_state(&path, &state).unwrap();
        let loaded = load_state(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, state);
    }

    #[test]
    fn accepts_v1_store_without_bingo_or_purchases() {
        let path = temp_path("v1.json");
        let content = r#"{
  "schema_version": 1,
  "tasks": [
    {
      "id": "task-1",
      "text": "Clean room",
      "created_at": "2026-01-10T09:00:00Z",
      "last_avoided_at": "2026-01-10T09:00:00Z",
      "is_active": true
    }
  ],
  "total_points": 7
}"#;
        fs::write(&path, content).unwrap();

        let loaded = load_state(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.total_points, 7);
        assert!(loaded.bingo.is_none());
        assert!(loaded.purchases.is_empty());
    }

    #[test]
    fn rejects_newer_schema_version() {
        let path = temp_path("future.json");
        let content = format!(
            "{{\n  \"schema_version\": {},\n  \"tasks\": []\n}}",
            SCHEMA_VERSION + 1
        );
        fs::write(&path, content).unwrap();

        let err = load_state(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "invalid_data");
    }

    #[test]
    fn rejects_malformed_json() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ not json ").unwrap();

        let err = load_state(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "invalid_data");
    }
}
