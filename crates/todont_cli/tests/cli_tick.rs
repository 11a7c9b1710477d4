use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

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

fn minutes_ago(minutes: i64) -> String {
    (OffsetDateTime::now_utc() - time::Duration::minutes(minutes))
        .format(&Rfc3339)
        .unwrap()
}

#[test]
fn tick_recomputes_points_from_the_baseline() {
    let store_path = temp_path("cli-tick.json");
    write_store(
        &store_path,
        serde_json::json!([{
            "id": "task-1",
            "text": "Clean room",
            "created_at": minutes_ago(10),
            "last_avoided_at": minutes_ago(3),
            "is_active": true,
            "points": 0
        }]),
        0,
    );

    let output = todont(&store_path, &["tick"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert_eq!(stored["tasks"][0]["points"], 3);
    assert_eq!(stored["total_points"], 3);
    assert_eq!(stored["tasks"][0]["total_avoidance_time"], 1);
}

#[test]
fn tick_fires_a_milestone_at_five_minutes() {
    let store_path = temp_path("cli-tick-milestone.json");
    write_store(
        &store_path,
        serde_json::json!([{
            "id": "task-1",
            "text": "Clean room",
            "created_at": minutes_ago(10),
            "last_avoided_at": minutes_ago(5),
            "is_active": true,
            "points": 4
        }]),
        4,
    );

    let output = todont(&store_path, &["tick"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("5 minutes straight"));
}

#[test]
fn tick_ignores_completed_tasks() {
    let store_path = temp_path("cli-tick-completed.json");
    write_store(
        &store_path,
        serde_json::json!([{
            "id": "task-1",
            "text": "Clean room",
            "created_at": minutes_ago(10),
            "last_avoided_at": minutes_ago(8),
            "is_active": false,
            "points": 2,
            "end_time": minutes_ago(6)
        }]),
        2,
    );

    let output = todont(&store_path, &["tick"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert_eq!(stored["tasks"][0]["points"], 2);
    assert_eq!(stored["total_points"], 2);
}

#[test]
fn tick_json_reports_deltas_and_milestones() {
    let store_path = temp_path("cli-tick-json.json");
    write_store(
        &store_path,
        serde_json::json!([{
            "id": "task-1",
            "text": "Clean room",
            "created_at": minutes_ago(20),
            "last_avoided_at": minutes_ago(12),
            "is_active": true,
            "points": 2
        }]),
        2,
    );

    let output = todont(&store_path, &["--json", "tick"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");

    // 2 -> 12 in one pass: ten points, one milestone naming the final
    // boundary only.
    assert_eq!(parsed["points_gained"], 10);
    let milestones = parsed["milestones"].as_array().unwrap();
    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0]["minutes"], 10);
}

#[test]
fn watch_ticks_until_the_limit() {
    let store_path = temp_path("cli-watch.json");
    write_store(
        &store_path,
        serde_json::json!([{
            "id": "task-1",
            "text": "Clean room",
            "created_at": minutes_ago(10),
            "last_avoided_at": minutes_ago(7),
            "is_active": true,
            "points": 0
        }]),
        0,
    );

    let output = todont(&store_path, &["watch", "--for", "2"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    assert_eq!(stored["tasks"][0]["points"], 7);
    assert_eq!(stored["total_points"], 7);
}
