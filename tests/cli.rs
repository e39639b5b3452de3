//! End-to-end checks of the headless CLI modes

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("telluride").unwrap();
    // Keep the user's real config out of the picture
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("TELLURIDE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn print_defaults_to_overview() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--print")
        .assert()
        .success()
        .stdout(contains("Specifications"))
        .stdout(contains("Engine: 3.8L V6 GDI"))
        .stdout(contains("Head-Up Display (HUD)"));
}

#[test]
fn print_trims() {
    let home = TempDir::new().unwrap();
    let output = cmd(&home)
        .args(["--print", "--tab", "Trims"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let headings: Vec<&str> = stdout.lines().filter(|l| l.contains(" - $")).collect();
    assert_eq!(
        headings,
        [
            "LX - $35,990",
            "S - $38,390",
            "EX - $43,290",
            "SX - $45,590",
            "X-Pro - $51,990",
        ]
    );
}

#[test]
fn print_cargo_space() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--print", "--tab", "cargo space"])
        .assert()
        .success()
        .stdout(contains("Behind 3rd row: 21"))
        .stdout(contains("Behind 2nd row: 46"))
        .stdout(contains("Maximum capacity: 87"));
}

#[test]
fn print_unknown_tab_prints_nothing() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--print", "--tab", "towing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(contains("no view for selection"));
}

#[test]
fn config_default_tab_is_used() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("telluride.toml");
    fs::write(&config, "default_tab = \"Ratings\"\n").unwrap();

    cmd(&home)
        .arg("--print")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("Telluride Ratings"))
        .stdout(contains("Safety: 95"));
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    fs::write(&config, "default_tab = [\n").unwrap();

    cmd(&home)
        .arg("--print")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("Specifications"))
        .stderr(contains("falling back to default config"));
}

#[test]
fn export_writes_tables() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out");

    cmd(&home)
        .arg("--export")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 5 files"));

    let dirs: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(dirs.len(), 1);
    let ratings = fs::read_to_string(dirs[0].join("ratings.csv")).unwrap();
    assert_eq!(ratings.lines().count(), 7);
    assert!(ratings.starts_with("feature,value\nPerformance,85\n"));
}

#[test]
fn log_file_receives_logs() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("telluride.log");

    cmd(&home)
        .args(["--print", "--tab", "nowhere"])
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("no view for selection"));
}
