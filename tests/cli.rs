use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hisaab(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hisaab").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn statement_from_sample_data() {
    let dir = TempDir::new().unwrap();

    hisaab(&dir)
        .args(["statement", "demo", "--sample", "--as-of", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hasnat Ashraf"))
        .stdout(predicate::str::contains("1st Mar - 31st Mar 2024"))
        .stdout(predicate::str::contains("Rs 42,000"))
        .stdout(predicate::str::contains("Overspent"))
        .stdout(predicate::str::contains("Apr 2023"));
}

#[test]
fn statement_as_json() {
    let dir = TempDir::new().unwrap();

    let output = hisaab(&dir)
        .args([
            "statement", "demo", "--sample", "--as-of", "2024-03-15", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["budget"]["balance"], 8000);
    assert_eq!(value["analysis"]["budgetSet"], 40000);
    assert_eq!(value["monthlyHistory"].as_array().unwrap().len(), 12);
}

#[test]
fn statement_to_html_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("march.html");

    hisaab(&dir)
        .args(["statement", "demo", "--sample", "--as-of", "2024-03-15"])
        .args(["--format", "html", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement written to"));

    let html = std::fs::read_to_string(output).unwrap();
    assert!(html.contains("<title>MyHisaab - Account Statement</title>"));
}

#[test]
fn init_with_sample_then_statement() {
    let dir = TempDir::new().unwrap();

    hisaab(&dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());

    hisaab(&dir)
        .args(["statement", "hasnat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hasnat Ashraf"))
        .stdout(predicate::str::contains("Rs 50,000"));
}

#[test]
fn unknown_user_fails() {
    let dir = TempDir::new().unwrap();

    hisaab(&dir).arg("init").assert().success();

    hisaab(&dir)
        .args(["statement", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: ghost"));
}

#[test]
fn invalid_as_of_fails() {
    let dir = TempDir::new().unwrap();

    hisaab(&dir)
        .args(["statement", "demo", "--sample", "--as-of", "March"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    hisaab(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: Rs"))
        .stdout(predicate::str::contains("Server address:  127.0.0.1:5001"));
}
