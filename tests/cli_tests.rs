//! CLI integration tests.
//!
//! Every command runs with a scratch HOME and working directory so a real
//! `~/.surebet` or `.env` never leaks in.

mod support;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use support::fixture_path;

fn surebet(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("surebet");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("ODDS_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture_arg() -> String {
    fixture_path("soccer_epl.json").display().to_string()
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("sports"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn analyze_shows_only_arbitrages_above_threshold_by_default() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["analyze", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arsenal VS Chelsea"))
        .stdout(predicate::str::contains("46.79"))
        .stdout(predicate::str::contains("7.07%"))
        .stdout(predicate::str::contains("Everton VS Fulham").not())
        .stdout(predicate::str::contains("Leeds United VS Tottenham Hotspur").not());
}

#[test]
fn analyze_verbose_adds_arbitrages_below_threshold() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["analyze", "-v", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Everton VS Fulham"))
        .stdout(predicate::str::contains("below threshold"))
        .stdout(predicate::str::contains("Leeds United VS Tottenham Hotspur").not());
}

#[test]
fn analyze_very_verbose_adds_every_evaluated_event() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["analyze", "-vv", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leeds United VS Tottenham Hotspur"))
        .stdout(predicate::str::contains("no arbitrage"))
        .stdout(predicate::str::contains("Wolverhampton").not());
}

#[test]
fn analyze_threshold_override_demotes_arbitrage() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["analyze", "--threshold", "10", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arsenal VS Chelsea").not())
        .stdout(predicate::str::contains("-v"));
}

#[test]
fn analyze_json_emits_one_object_per_line() {
    let home = TempDir::new().unwrap();
    let output = surebet(&home)
        .args(["--json", "analyze", &fixture_arg()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    let analyses: Vec<_> = lines.iter().filter(|l| l["type"] == "analysis").collect();
    assert_eq!(analyses.len(), 1);
    let payload = &analyses[0]["payload"];
    assert_eq!(payload["event"]["home_team"], "Arsenal");
    assert_eq!(payload["evaluation"]["margin_pct"], "7.07");
    assert_eq!(payload["allocation"]["legs"][1]["platform"], "Betfair");

    let summary = lines
        .iter()
        .find(|l| l["type"] == "summary")
        .expect("summary line");
    assert_eq!(summary["payload"]["events"], 5);
    assert_eq!(summary["payload"]["analysed"], 3);
    assert_eq!(summary["payload"]["arbitrable"], 2);
    assert_eq!(summary["payload"]["above_threshold"], 1);
}

#[test]
fn analyze_missing_file_fails() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["analyze", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn analyze_rejects_zero_stake() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["analyze", "--stake", "0", &fixture_arg()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stake"));
}

#[test]
fn config_validate_reports_invalid_value() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[analysis]\nthreshold = -1\n").unwrap();

    surebet(&home)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for threshold"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("surebet.toml");

    surebet(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.is_file());

    surebet(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.the-odds-api.com"))
        .stdout(predicate::str::contains("API key not set"));
}

#[test]
fn scan_without_api_key_fails() {
    let home = TempDir::new().unwrap();
    surebet(&home)
        .args(["scan", "--sport", "soccer_epl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ODDS_API_KEY"));
}

#[test]
fn scan_uses_cached_odds_without_network() {
    let home = TempDir::new().unwrap();
    let cache_dir = home.path().join("odds");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::copy(fixture_path("soccer_epl.json"), cache_dir.join("soccer_epl.json")).unwrap();

    let config = home.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[odds_api]\nbase_url = \"http://127.0.0.1:9\"\nretry_max_attempts = 1\n\n[cache]\ndir = {:?}\n",
            cache_dir.display().to_string()
        ),
    )
    .unwrap();

    surebet(&home)
        .env("ODDS_API_KEY", "unused")
        .args(["--json", "scan", "--sport", "soccer_epl", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("soccer_epl: 5 events (cached)"))
        .stdout(predicate::str::contains(r#""home_team":"Arsenal""#));
}
