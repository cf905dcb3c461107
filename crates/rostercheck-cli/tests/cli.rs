use assert_cmd::cargo::cargo_bin_cmd;
use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OFFICIAL_CSV: &str = "name,email,phone\n\
Jane Doe,jane@co.com,555-123-4567\n\
John Smith,john@co.com,+44 20 7946 0958\n";

const SUSPECT_JSON: &str = r#"[
    {"name": "jane doe", "email": "jane@co.com", "phone": "5551234567"},
    {"name": "Jon Smith", "email": "john@freemail.test", "phone": "0044 20 7946 0958"},
    {"name": "Mallory", "email": "m@evil.test", "phone": ""}
]"#;

fn write_rosters(dir: &Path) -> (PathBuf, PathBuf) {
    let official = dir.join("official.csv");
    let suspect = dir.join("suspect.json");
    fs::write(&official, OFFICIAL_CSV).expect("write official");
    fs::write(&suspect, SUSPECT_JSON).expect("write suspect");
    (official, suspect)
}

fn config_path(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    if !path.exists() {
        fs::write(&path, "").expect("write config");
    }
    path
}

fn run_cmd_json(dir: &Path, args: &[&str]) -> Value {
    let config = config_path(dir);
    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn compare_exact_flags_missing_names() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());

    let report = run_cmd_json(
        temp.path(),
        &[
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
        ],
    );
    let verdicts = report["verdicts"].as_array().expect("array");
    assert_eq!(verdicts.len(), 2);
    assert_eq!(verdicts[0]["name"], "jon smith");
    assert_eq!(verdicts[0]["reason"], "Name not found in official records");
    assert_eq!(verdicts[1]["name"], "mallory");
    assert_eq!(report["empty_roster"], false);
}

#[test]
fn compare_fuzzy_resolves_similar_names() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());

    let report = run_cmd_json(
        temp.path(),
        &[
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--fuzzy",
            "--threshold",
            "85",
        ],
    );
    let verdicts = report["verdicts"].as_array().expect("array");
    assert_eq!(verdicts.len(), 2);
    assert_eq!(verdicts[0]["name"], "jon smith");
    assert_eq!(verdicts[0]["reason"], "Email mismatch");
    assert_eq!(verdicts[0]["official_email"], "john@co.com");
    assert_eq!(report["fuzzy_matches"][0]["official_name"], "john smith");
}

#[test]
fn compare_reads_fuzzy_settings_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    fs::write(
        temp.path().join("config.toml"),
        "[matching]\nfuzzy = true\nfuzzy_threshold = 90\n",
    )
    .expect("write config");

    let report = run_cmd_json(
        temp.path(),
        &[
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
        ],
    );
    assert_eq!(report["options"]["fuzzy_enabled"], true);
    assert_eq!(report["verdicts"][0]["reason"], "Email mismatch");

    let report = run_cmd_json(
        temp.path(),
        &[
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--no-fuzzy",
        ],
    );
    assert_eq!(report["options"]["fuzzy_enabled"], false);
    assert_eq!(
        report["verdicts"][0]["reason"],
        "Name not found in official records"
    );
}

#[test]
fn compare_writes_csv_report() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    let out = temp.path().join("reports").join("report.csv");
    let config = config_path(temp.path());

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--format",
            "csv",
            "--out",
            out.to_str().expect("out"),
        ])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);

    let data = fs::read_to_string(&out).expect("read report");
    let mut lines = data.lines();
    assert_eq!(
        lines.next(),
        Some("name,suspect_email,suspect_phone,official_email,official_phone,reason")
    );
    assert_eq!(
        lines.next(),
        Some("jon smith,john@freemail.test,+442079460958,,,Name not found in official records")
    );
}

#[test]
fn compare_fail_on_discrepancy_sets_exit_code() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    let config = config_path(temp.path());

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--fail-on-discrepancy",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("mallory: Name not found in official records"));
    assert!(stdout.contains("2 discrepancies (Name not found in official records 2):"));
}

#[test]
fn compare_table_summarizes_reasons() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    let config = config_path(temp.path());

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--fuzzy",
        ])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains(
        "2 discrepancies (Name not found in official records 1, Email mismatch 1):"
    ));
}

#[test]
fn compare_writes_xlsx_report() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    let out = temp.path().join("report.xlsx");
    let config = config_path(temp.path());

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--format",
            "xlsx",
            "--out",
            out.to_str().expect("out"),
        ])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);

    let mut workbook: Xlsx<_> = open_workbook(&out).expect("open xlsx");
    let range = workbook.worksheet_range("Report").expect("sheet");
    let header: Vec<String> = range
        .rows()
        .next()
        .expect("header row")
        .iter()
        .map(|cell| match cell {
            Data::String(value) => value.clone(),
            other => panic!("unexpected cell {:?}", other),
        })
        .collect();
    assert_eq!(
        header,
        [
            "name",
            "suspect_email",
            "suspect_phone",
            "official_email",
            "official_phone",
            "reason"
        ]
    );
    assert_eq!(range.rows().count(), 3);
}

#[test]
fn compare_xlsx_requires_out() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    let config = config_path(temp.path());

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--format",
            "xlsx",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn compare_rejects_out_of_range_threshold() {
    let temp = TempDir::new().expect("temp dir");
    let (official, suspect) = write_rosters(temp.path());
    let config = config_path(temp.path());

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            suspect.to_str().expect("suspect"),
            "--fuzzy",
            "--threshold",
            "150",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn compare_reports_missing_roster_file() {
    let temp = TempDir::new().expect("temp dir");
    let (official, _suspect) = write_rosters(temp.path());
    let config = config_path(temp.path());
    let missing = temp.path().join("missing.csv");

    let output = cargo_bin_cmd!("rostercheck")
        .args(["--config", config.to_str().expect("config")])
        .args([
            "compare",
            official.to_str().expect("official"),
            missing.to_str().expect("missing"),
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn compare_with_empty_official_roster_flags_everyone() {
    let temp = TempDir::new().expect("temp dir");
    let (_official, suspect) = write_rosters(temp.path());
    let empty = temp.path().join("empty.json");
    fs::write(&empty, "[]").expect("write empty roster");

    let report = run_cmd_json(
        temp.path(),
        &[
            "compare",
            empty.to_str().expect("empty"),
            suspect.to_str().expect("suspect"),
            "--fuzzy",
        ],
    );
    assert_eq!(report["empty_roster"], true);
    let verdicts = report["verdicts"].as_array().expect("array");
    assert_eq!(verdicts.len(), 3);
    assert!(verdicts
        .iter()
        .all(|v| v["reason"] == "Name not found in official records"));
}

#[test]
fn normalize_prints_canonical_contact() {
    let temp = TempDir::new().expect("temp dir");
    let contact = run_cmd_json(
        temp.path(),
        &[
            "normalize",
            "--name",
            "  Jane Doe ",
            "--email",
            "JANE@Co.com",
            "--phone",
            "(555) 123-4567",
        ],
    );
    assert_eq!(contact["name"], "jane doe");
    assert_eq!(contact["email"], "jane@co.com");
    assert_eq!(contact["phone"], "+15551234567");
}
