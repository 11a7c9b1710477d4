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

fn write_store(path: &PathBuf, total_points: u64) {
    let content = serde_json::json!({
        "schema_version": 2,
        "tasks": [],
        "total_points": total_points
    });
    std::fs::write(path, serde_json::to_string_pretty(&content).unwrap()).unwrap();
}

#[test]
fn list_shows_the_whole_catalog() {
    let store_path = temp_path("cli-shop-list.json");
    write_store(&store_path, 100);

    let output = todont(&store_path, &["--json", "shop", "list"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    let items = parsed.as_array().unwrap();

    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["name"], "Coffee Break Excuse");
    assert_eq!(items[0]["cost"], 50);
    assert_eq!(items[0]["owned"], false);
}

#[test]
fn buy_deducts_points_and_records_ownership() {
    let store_path = temp_path("cli-shop-buy.json");
    write_store(&store_path, 100);

    let output = todont(&store_path, &["shop", "buy", "1"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Purchase Successful!"));
    assert_eq!(stored["total_points"], 50);
    assert_eq!(stored["purchases"], serde_json::json!(["1"]));
}

#[test]
fn insufficient_points_is_a_polite_failure() {
    let store_path = temp_path("cli-shop-poor.json");
    write_store(&store_path, 30);

    let output = todont(&store_path, &["shop", "buy", "1"]);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    // Not an error path: the command succeeds and reports the shortfall.
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Not Enough Points!"));
    assert!(stdout.contains("20 more points"));
    assert_eq!(stored["total_points"], 30);
    assert_eq!(stored["purchases"], serde_json::json!([]));
}

#[test]
fn repurchase_is_rejected() {
    let store_path = temp_path("cli-shop-again.json");
    write_store(&store_path, 500);

    let output = todont(&store_path, &["shop", "buy", "6"]);
    assert!(output.status.success());

    let output = todont(&store_path, &["shop", "buy", "6"]);

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
    assert!(stderr.contains("already owned"));
}

#[test]
fn unknown_item_is_rejected() {
    let store_path = temp_path("cli-shop-unknown.json");
    write_store(&store_path, 500);

    let output = todont(&store_path, &["shop", "buy", "99"]);

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

#[test]
fn buy_json_reports_the_outcome() {
    let store_path = temp_path("cli-shop-json.json");
    write_store(&store_path, 30);

    let output = todont(&store_path, &["--json", "shop", "buy", "1"]);

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");

    assert_eq!(parsed["success"], false);
    assert_eq!(parsed["shortfall"], 20);
}
