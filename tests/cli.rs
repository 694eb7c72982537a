#![forbid(unsafe_code)]
use assert_cmd::Command;
use creneaux::{JsonStorage, Storage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn cli(plan: &Path) -> Command {
    let mut cmd = Command::cargo_bin("creneaux-cli").unwrap();
    cmd.arg("--plan").arg(plan);
    cmd
}

#[test]
fn allocate_refuses_empty_plan() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    cli(&plan)
        .arg("allocate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("aucune personne"));
}

#[test]
fn allocate_reports_shortfalls_with_exit_code_2() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");

    cli(&plan)
        .args(["add-worker", "--name", "Alice", "--start", "9:00", "--end", "17:00"])
        .args(["--required-hours", "4"])
        .assert()
        .success();

    cli(&plan)
        .arg("allocate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("9:00 | Alice | 1/1"))
        .stdout(predicate::str::contains("6:00 | - | 0/1 (short)"))
        .stdout(predicate::str::contains("[ok] Alice 8h/4h : 9:00-17:00"));
}

#[test]
fn full_coverage_exits_zero_and_exports() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let out_csv = dir.path().join("hourly.csv");
    let out_json = dir.path().join("alloc.json");

    cli(&plan)
        .args(["add-worker", "--name", "Bob", "--start", "6:00", "--end", "22:00"])
        .assert()
        .success();

    cli(&plan)
        .arg("allocate")
        .arg("--out-csv")
        .arg(&out_csv)
        .arg("--out-json")
        .arg(&out_json)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ok] Bob 16h : 6:00-22:00"));

    assert!(out_csv.exists());
    assert!(out_json.exists());
}

#[test]
fn requirements_can_be_edited_but_not_emptied() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");

    cli(&plan)
        .args(["add-requirement", "--start-hour", "10", "--end-hour", "14", "--required", "2"])
        .assert()
        .success();

    let storage = JsonStorage::open(&plan).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded.requirements.len(), 2);
    let first = loaded.requirements[0].id.as_str().to_string();
    let second = loaded.requirements[1].id.as_str().to_string();

    cli(&plan)
        .args(["update-requirement", "--id", &second, "--required", "3"])
        .assert()
        .success();
    cli(&plan)
        .args(["remove-requirement", "--id", &first])
        .assert()
        .success();
    cli(&plan)
        .args(["remove-requirement", "--id", &second])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last staff requirement"));

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.requirements.len(), 1);
    assert_eq!(loaded.requirements[0].required, 3);
}

#[test]
fn import_and_list_workers() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let csv = dir.path().join("workers.csv");
    std::fs::write(&csv, "name,start,end,required_hours\nAlice,9:00,17:00,4\nBob,10:30,15:00,\n")
        .unwrap();

    cli(&plan)
        .arg("import-workers")
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success();

    cli(&plan)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice | 09:00 - 17:00 (target 4h)"))
        .stdout(predicate::str::contains("Bob | 10:30 - 15:00"))
        .stdout(predicate::str::contains("6:00 - 22:00 | 1"));

    cli(&plan)
        .args(["remove-worker", "--worker", "Bob"])
        .assert()
        .success();
    let loaded = JsonStorage::open(&plan).unwrap().load().unwrap();
    assert_eq!(loaded.workers.len(), 1);
}
