use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("todont-{nanos}-{file_name}"))
}

fn todont(store_path: &PathBuf, args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_todont");
    Command::new(exe)
        .args(args)
        .env("TODONT_STORE_PATH", store_path)
        .env("TODONT_CONFIG_PATH", store_path.with_extension("config.json"))
        .env("TODONT_DISABLE_NOTIFICATIONS", "1")
        .output()
        .expect("failed to run todont")
}

fn write_store(path: &PathBuf, tasks: serde_json::Value, total_points: u64) {
    let content = serde_json::json!({
        "schema_version": 2,
        "tasks": tasks,
        "total_points": total_points
    });
    std::fs::write(path, serde_json::to_string_pretty(&content).unwrap()).unwrap();
}

fn two_task_store(path: &PathBuf) {
    write_store(
        path,
        serde_json::json!([
            {
                "id": "task-1",
                "text": "Clean room",
                "created_at": "2026-01-10T09:00:00Z",
                "last_avoided_at": "2026-01-10T09:00:00Z",
                "is_active": true,
                "points": 12,
                "estimated_duration": 30
            },
            {
                "id": "task-2",
                "text": "Study",
                "created_at": "2026-01-11T09:00:00Z",
                "last_avoided_at": "2026-01-11T09:00:00Z",
                "is_active": false,
                "points": 4,
                "end_time": "2026-01-11T10:00:00Z"
            }
        ]),
        20,
    );
}

#[test]
fn list_active_shows_only_avoided_tasks() {
    let store_path = temp_path("cli-list-active.json");
    two_task_store(&store_path);

    let output = todont(&store_path, &["list", "active"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clean room"));
    assert!(!stdout.contains("Study"));
    // 12 minutes puts the task on the Padawan rung.
    assert!(stdout.contains("Procrastination Padawan"));
}

#[test]
fn list_completed_shows_the_incidents() {
    let store_path = temp_path("cli-list-completed.json");
    two_task_store(&store_path);

    let output = todont(&store_path, &["list", "completed"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Study"));
    assert!(!stdout.contains("Clean room"));
}

#[test]
fn list_all_json_returns_both() {
    let store_path = temp_path("cli-list-json.json");
    two_task_store(&store_path);

    let output = todont(&store_path, &["--json", "list", "all"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["status"], "avoiding");
    assert_eq!(entries[1]["status"], "completed");
}

#[test]
fn list_empty_store_has_a_friendly_nudge() {
    let store_path = temp_path("cli-list-empty.json");

    let output = todont(&store_path, &["list", "all"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Add something to avoid"));
}

#[test]
fn history_is_newest_first() {
    let store_path = temp_path("cli-history.json");
    two_task_store(&store_path);

    let output = todont(&store_path, &["--json", "history"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries[0]["id"], "task-2");
    assert_eq!(entries[1]["id"], "task-1");
}

#[test]
fn show_prints_task_details() {
    let store_path = temp_path("cli-show.json");
    two_task_store(&store_path);

    let output = todont(&store_path, &["show", "task-1"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clean room"));
    assert!(stdout.contains("Status: avoiding"));
    assert!(stdout.contains("Points: 12"));
}

#[test]
fn show_unknown_id_fails() {
    let store_path = temp_path("cli-show-missing.json");
    two_task_store(&store_path);

    let output = todont(&store_path, &["show", "task-404"]);

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

#[test]
fn corrupt_store_is_invalid_data() {
    let store_path = temp_path("cli-list-corrupt.json");
    std::fs::write(&store_path, "{ not json ").unwrap();

    let output = todont(&store_path, &["list", "all"]);

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_data"));
}
