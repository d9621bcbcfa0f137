use std::path::PathBuf;
use std::process::Command;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/loader/tests/fixtures/libre_export.xlsx")
}

fn agp() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_agp"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn summary_prints_metrics_and_ranges() {
    let output = agp().arg("summary").arg(fixture()).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("111.2 mg/dL") || stdout.contains("111.3 mg/dL"));
    assert!(stdout.contains("Target (70-180 mg/dL)"));
    assert!(stdout.contains("50.0%"));
    assert!(stdout.contains("12h 0m"));
}

#[test]
fn summary_json_partitions_readings() {
    let output = agp()
        .args(["summary", "--format", "json"])
        .arg(fixture())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_readings"], 4);
    assert_eq!(json["summary"]["time_in_range"]["very_low"], 25.0);
    assert_eq!(json["summary"]["time_in_range"]["target"], 50.0);
    assert_eq!(json["summary"]["time_in_range"]["high"], 25.0);
    assert_eq!(json["time_in_range"].as_array().unwrap().len(), 5);
}

#[test]
fn report_is_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("agp.json");

    let status = agp()
        .arg("report")
        .arg(fixture())
        .arg("--output")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    // 08:00 appears on two days, so four readings fold onto three keys.
    assert_eq!(json["profile"]["points"].as_array().unwrap().len(), 3);
    assert_eq!(json["profile"]["points"][0]["time_of_day"], 8.0);
    assert_eq!(json["profile"]["points"][0]["median"], 100.0);
}

#[test]
fn wrong_sheet_fails_without_output() {
    let output = agp()
        .args(["summary", "--format", "json"])
        .arg(fixture())
        .env("AGP__INPUT__SHEET", "Sheet1")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Sheet1"));
}
