use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
Player,Pos,Age,Tm,Year,G,MP,PTS,TRB,AST,STL,BLK
Kobe Bryant,SG,27,LAL,2006,80,3277,2832,425,360,147,30
LeBron James,SF,21,CLE,2006,79,3361,2478,556,521,123,66
Allen Iverson,PG,30,PHI,2006,72,3103,2102,232,531,140,10
Lamar Odom,PF,26,LAL,2006,80,2991,1190,740,443,69,72
Chris Webber,PF,32,PHI,2006,75,2894,1516,741,255,105,66
Drew Gooden,PF,24,CLE,2006,79,2225,855,665,90,60,58
,C,30,LAL,2006,5,40,6,8,1,0,2
Kwame Brown,C,24,LAL,2006,NA,1014,NA,317,61,21,27
";

/// Write the sample season to a CSV file in the given directory.
fn create_test_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("players.csv");
    std::fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("nba-analyzer").unwrap()
}

#[test]
fn test_full_run() {
    let dir = TempDir::new().unwrap();
    let csv = create_test_csv(&dir);
    let chart = dir.path().join("teams.png");

    cmd()
        .args(["--input", csv.to_str().unwrap()])
        .args(["--chart", chart.to_str().unwrap()])
        .arg("--no-show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset loaded successfully!"))
        .stdout(predicate::str::contains("DATASET PREVIEW"))
        .stdout(predicate::str::contains("Rows removed: 2"))
        .stdout(predicate::str::contains("QUESTION 1: TOP SCORING PLAYERS"))
        .stdout(predicate::str::contains("QUESTION 2: TEAM OFFENSIVE PERFORMANCE"))
        .stdout(predicate::str::contains("Chart saved as"))
        .stdout(predicate::str::contains("ANALYSIS SUMMARY REPORT"))
        .stdout(predicate::str::contains("Kobe Bryant"))
        .stdout(predicate::str::contains("Analysis complete!"));

    let bytes = std::fs::read(&chart).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn test_stages_print_in_order() {
    let dir = TempDir::new().unwrap();
    let csv = create_test_csv(&dir);
    let chart = dir.path().join("teams.png");

    let output = cmd()
        .args(["-i", csv.to_str().unwrap(), "-c", chart.to_str().unwrap(), "--no-show"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let positions: Vec<usize> = [
        "NBA PLAYER STATISTICS ANALYSIS",
        "DATASET PREVIEW",
        "DATA CLEANING",
        "QUESTION 1",
        "QUESTION 2",
        "STRETCH CHALLENGE",
        "ANALYSIS SUMMARY REPORT",
    ]
    .iter()
    .map(|heading| stdout.find(heading).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_missing_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");
    let chart = dir.path().join("teams.png");

    cmd()
        .args(["--input", missing.to_str().unwrap()])
        .args(["--chart", chart.to_str().unwrap()])
        .arg("--no-show")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found!"))
        .stdout(predicate::str::contains("DATASET PREVIEW").not());

    assert!(!chart.exists());
}

#[test]
fn test_unparsable_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "Player,Tm,PTS,G\nA,X,10,1,extra,cells\n").unwrap();

    cmd()
        .args(["-i", path.to_str().unwrap()])
        .args(["-c", dir.path().join("teams.png").to_str().unwrap()])
        .arg("--no-show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading data"));
}

#[test]
fn test_missing_required_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_team.csv");
    std::fs::write(&path, "Player,PTS,G\nA,10,1\n").unwrap();

    cmd()
        .args(["-i", path.to_str().unwrap()])
        .args(["-c", dir.path().join("teams.png").to_str().unwrap()])
        .arg("--no-show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column: Tm"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let csv = create_test_csv(&dir);

    cmd()
        .env_remove("RUST_LOG")
        .args(["-i", csv.to_str().unwrap()])
        .args(["-c", dir.path().join("teams.png").to_str().unwrap()])
        .args(["--no-show", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dataset loaded"))
        .stdout(predicate::str::contains("dataset loaded").not());
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--no-show"));
}
