use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fixture-server"))
}

#[test]
fn check_computed_variant_prints_the_sum() {
    let output = cli()
        .args(["check", "--variant", "computed"])
        .output()
        .expect("failed to run fixture-server check");
    assert!(
        output.status.success(),
        "CLI exited with {:?}",
        output.status.code()
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let json: Value = serde_json::from_str(stdout.trim()).expect("check report JSON");
    assert_eq!(json["outcome"], "success");
    assert_eq!(json["content_type"], "text/plain");
    assert_eq!(json["body"], "sum: 3");
}

#[test]
fn check_rendered_variant_prints_pinned_html() {
    let output = cli()
        .args(["check", "--variant", "rendered"])
        .output()
        .expect("failed to run fixture-server check");
    assert!(output.status.success());

    let json: Value =
        serde_json::from_slice(&output.stdout).expect("check report JSON");
    assert_eq!(json["outcome"], "success");
    assert_eq!(json["content_type"], "text/html");
    assert_eq!(json["body"], "<h1>Hello World!</h1>\n");
}

#[test]
fn check_missing_asset_exits_with_failure_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli()
        .args([
            "--assets-dir",
            &dir.path().to_string_lossy(),
            "check",
            "--variant",
            "binary",
            "--asset",
            "never-deployed.png",
        ])
        .output()
        .expect("failed to run failing check");
    assert_eq!(output.status.code(), Some(2));

    let json: Value = serde_json::from_slice(&output.stdout).expect("failure report JSON");
    assert_eq!(json["outcome"], "failure");
    let body = json["body"].as_str().expect("failure body");
    assert!(
        body.contains("asset not found"),
        "expected failure text, got {body}"
    );
}

#[test]
fn check_binary_variant_reports_shipped_asset_size() {
    let output = cli()
        .args(["check", "--variant", "binary"])
        .output()
        .expect("failed to run binary check");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("check report JSON");
    assert_eq!(json["outcome"], "success");
    let expected = std::fs::metadata(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("computer_screen_programming.png"),
    )
    .expect("shipped PNG metadata")
    .len();
    assert_eq!(json["body_bytes"].as_u64(), Some(expected));
}

#[test]
fn inventory_lists_the_shipped_assets() {
    let output = cli()
        .arg("inventory")
        .output()
        .expect("failed to run inventory");
    assert!(output.status.success());

    let entries: Vec<Value> = serde_json::from_slice(&output.stdout).expect("inventory JSON");
    let paths: Vec<_> = entries
        .iter()
        .map(|entry| entry["relative_path"].as_str().expect("relative_path"))
        .collect();
    assert!(paths.contains(&"operands.json"));
    assert!(paths.contains(&"computer_screen_programming.png"));
}

#[test]
fn inventory_of_missing_root_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let gone = dir.path().join("never-created");
    let output = cli()
        .args(["--assets-dir", &gone.to_string_lossy(), "inventory"])
        .output()
        .expect("failed to run empty inventory");
    assert!(output.status.success());

    let entries: Vec<Value> = serde_json::from_slice(&output.stdout).expect("inventory JSON");
    assert!(entries.is_empty());
}
