mod common;
use common::{day, psh, temp_dir, write_source};
use predicates::str::contains;
use punchsheet::models::raw_punch::RawPunch;
use std::fs;
use std::path::PathBuf;

fn week() -> Vec<RawPunch> {
    [
        day(1, "2025-05-12", &[("07:00", "12:00"), ("13:00", "19:05")]),
        day(1, "2025-05-13", &[("08:00", "12:00"), ("13:00", "17:48")]),
        day(2, "2025-05-13", &[("08:00", "12:00"), ("12:30", "17:18")]),
    ]
    .concat()
}

/// Config path that does not exist: defaults apply, nothing read from $HOME.
fn no_config(name: &str) -> String {
    temp_dir(name)
        .join("missing.yaml")
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_report_prints_both_tables() {
    let src = write_source("cli_report", &week(), &[]);
    let cfg = no_config("cli_report_cfg");

    psh()
        .args([
            "--config",
            &cfg,
            "--no-color",
            "report",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
        ])
        .assert()
        .success()
        .stdout(contains("Pre-adjustment: Employee 1 (1)"))
        .stdout(contains("Adjusted punches: Employee 2 (2)"))
        .stdout(contains("13:00 - 19:05"))
        .stdout(contains("13:00 - 18:45"))
        .stdout(contains("ADJUST"));
}

#[test]
fn test_report_filters_by_employee_and_stage() {
    let src = write_source("cli_report_filter", &week(), &[]);
    let cfg = no_config("cli_report_filter_cfg");

    let out = psh()
        .args([
            "--config",
            &cfg,
            "--no-color",
            "report",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--employee",
            "2",
            "--stage",
            "adjusted",
        ])
        .output()
        .expect("run report");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("Employee 1"));
    assert!(!stdout.contains("Pre-adjustment"));
    assert!(stdout.contains("07:32 - 11:32 | 12:30 - 17:18"));
}

#[test]
fn test_report_rejects_inverted_range() {
    let src = write_source("cli_inverted", &week(), &[]);
    let cfg = no_config("cli_inverted_cfg");

    psh()
        .args([
            "--config",
            &cfg,
            "report",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-16",
            "--to",
            "2025-05-12",
        ])
        .assert()
        .failure()
        .stderr(contains("start date cannot be after end date"));
}

#[test]
fn test_missing_source_yields_no_data() {
    let cfg = no_config("cli_missing_source_cfg");
    let missing: PathBuf = temp_dir("cli_missing_source").join("nope");

    psh()
        .args([
            "--config",
            &cfg,
            "report",
            "--source",
            missing.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
        ])
        .assert()
        .success()
        .stderr(contains("No punches found"));
}

#[test]
fn test_export_csv_contains_both_stages() {
    let src = write_source("cli_export_csv", &week(), &[]);
    let cfg = no_config("cli_export_csv_cfg");
    let out = temp_dir("cli_export_csv_out").join("sheet.csv");

    psh()
        .args([
            "--config",
            &cfg,
            "export",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--format",
            "csv",
            "--file",
            out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let header = content.lines().next().unwrap();
    assert!(header.starts_with("stage,employee_id,employee_name,date"));
    assert!(header.contains("break"));
    assert!(content.contains("pre,1,Employee 1,12/05/2025"));
    assert!(content.contains("ADJUST"));
    assert_eq!(content.lines().count(), 1 + 3 + 3);
}

#[test]
fn test_export_json_adjusted_only() {
    let src = write_source("cli_export_json", &week(), &["2025-05-13"]);
    let cfg = no_config("cli_export_json_cfg");
    let out = temp_dir("cli_export_json_out").join("sheet.json");

    psh()
        .args([
            "--config",
            &cfg,
            "export",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--format",
            "json",
            "--stage",
            "adjusted",
            "--file",
            out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["stage"] == "adjusted"));
    // holiday → no expected time on Tuesday
    assert!(rows.iter().any(|r| r["date"] == "13/05/2025" && r["expected"] == ""));
}

#[test]
fn test_export_requires_absolute_path() {
    let src = write_source("cli_export_rel", &week(), &[]);
    let cfg = no_config("cli_export_rel_cfg");

    psh()
        .args([
            "--config",
            &cfg,
            "export",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_employees_lists_names_from_punches() {
    let src = write_source("cli_employees", &week(), &[]);
    let cfg = no_config("cli_employees_cfg");

    psh()
        .args(["--config", &cfg, "employees", "--source", src.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Employee 1"))
        .stdout(contains("Employee 2"));
}

#[test]
fn test_init_then_check_config() {
    let dir = temp_dir("cli_init");
    let cfg = dir.join("punchsheet.yaml");
    let cfg = cfg.to_str().unwrap();

    psh().args(["--config", cfg, "init"]).assert().success();
    assert!(fs::read_to_string(cfg).unwrap().contains("overtime_cap"));

    psh()
        .args(["--config", cfg, "config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: America/Sao_Paulo"))
        .stderr(contains("Configuration is valid"));
}

#[test]
fn test_invalid_timezone_fails_report() {
    let dir = temp_dir("cli_bad_tz");
    let cfg = dir.join("punchsheet.yaml");
    fs::write(&cfg, "timezone: Mars/Olympus\n").unwrap();
    let src = write_source("cli_bad_tz_src", &week(), &[]);

    psh()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "report",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
        ])
        .assert()
        .failure()
        .stderr(contains("unknown timezone"));
}

#[test]
fn test_report_over_several_fetch_windows_has_no_duplicates() {
    let dates = ["2025-05-05", "2025-05-12", "2025-05-13", "2025-05-20", "2025-05-21"];
    let punches: Vec<RawPunch> = dates
        .iter()
        .flat_map(|d| day(1, d, &[("08:00", "12:00"), ("13:00", "17:48")]))
        .collect();
    let src = write_source("cli_long_range", &punches, &[]);
    let cfg = no_config("cli_long_range_cfg");

    let out = psh()
        .args([
            "--config",
            &cfg,
            "--no-color",
            "report",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-05",
            "--to",
            "2025-05-24",
            "--stage",
            "pre",
        ])
        .output()
        .expect("run report");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    for shown in ["05/05/2025", "12/05/2025", "13/05/2025", "20/05/2025", "21/05/2025"] {
        assert_eq!(stdout.matches(shown).count(), 1, "{shown} should appear once");
    }
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let src = write_source("cli_export_xlsx", &week(), &[]);
    let cfg = no_config("cli_export_xlsx_cfg");
    let out = temp_dir("cli_export_xlsx_out").join("sheet.xlsx");

    psh()
        .args([
            "--config",
            &cfg,
            "export",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--format",
            "xlsx",
            "--file",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(!bytes.is_empty());
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_keeps_existing_file_when_declined() {
    let src = write_source("cli_export_decline", &week(), &[]);
    let cfg = no_config("cli_export_decline_cfg");
    let out = temp_dir("cli_export_decline_out").join("sheet.csv");
    fs::write(&out, "keep me").unwrap();

    psh()
        .args([
            "--config",
            &cfg,
            "export",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--file",
            out.to_str().unwrap(),
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("was not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_export_overwrites_when_confirmed() {
    let src = write_source("cli_export_confirm", &week(), &[]);
    let cfg = no_config("cli_export_confirm_cfg");
    let out = temp_dir("cli_export_confirm_out").join("sheet.csv");
    fs::write(&out, "old").unwrap();

    psh()
        .args([
            "--config",
            &cfg,
            "export",
            "--source",
            src.to_str().unwrap(),
            "--from",
            "2025-05-12",
            "--to",
            "2025-05-16",
            "--file",
            out.to_str().unwrap(),
        ])
        .write_stdin("yes\n")
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("stage,"));
}

#[test]
fn test_config_check_rejects_bad_date_format() {
    let dir = temp_dir("cli_bad_date_format");
    let cfg = dir.join("punchsheet.yaml");
    fs::write(&cfg, "date_format: \"%d/%Q\"\n").unwrap();

    psh()
        .args(["--config", cfg.to_str().unwrap(), "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("invalid date_format"));
}
