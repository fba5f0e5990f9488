use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "date,type,description,category,amount,from_account,to_account";

const TRANSACTIONS: &str = r#"[
    {"id": 1, "date": "2024-03-02", "type": "Expense", "amount": 12.5,
     "category": "Food", "description": "Nasi lemak, teh tarik",
     "from_account": "Cash", "to_account": null},
    {"id": 2, "date": "2024-03-10T09:00:00", "type": "Income", "amount": 4200,
     "category": "Salary", "description": null,
     "from_account": null, "to_account": "Maybank"},
    {"id": 3, "date": "2024-03-12", "type": "Expense", "amount": 1300,
     "category": "Rent", "description": "March \"rent\"",
     "from_account": "Maybank", "to_account": null}
]"#;

fn cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-export").unwrap();
    cmd.env("EXPENSE_EXPORT_DIR", config_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("transactions.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn format_prints_ringgit() {
    let temp_dir = TempDir::new().unwrap();

    cmd(&temp_dir)
        .args(["format", "1234.5"])
        .assert()
        .success()
        .stdout("MYR\u{a0}1,234.50\n");

    cmd(&temp_dir)
        .args(["format", "-5"])
        .assert()
        .success()
        .stdout("-MYR\u{a0}5.00\n");
}

#[test]
fn export_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, TRANSACTIONS);

    let expected = format!(
        "{}\n\
         2024-03-02,Expense,\"Nasi lemak, teh tarik\",Food,12.5,Cash,\n\
         2024-03-10T09:00:00,Income,,Salary,4200,,Maybank\n\
         2024-03-12,Expense,\"March \"\"rent\"\"\",Rent,1300,Maybank,\n",
        HEADER
    );

    cmd(&temp_dir)
        .arg("export")
        .arg(&input)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn export_empty_input_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "[]");

    cmd(&temp_dir)
        .arg("export")
        .arg(&input)
        .arg("--stdout")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn export_saves_file_into_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, TRANSACTIONS);
    let downloads = temp_dir.path().join("downloads");

    cmd(&temp_dir)
        .arg("export")
        .arg(&input)
        .arg("--dir")
        .arg(&downloads)
        .args(["--output-name", "march.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 records to:"));

    let csv = std::fs::read_to_string(downloads.join("march.csv")).unwrap();
    assert!(csv.starts_with(HEADER));
    assert_eq!(csv.lines().count(), 4);
    assert!(!csv.ends_with('\n'));
}

#[test]
fn export_uses_settings_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, TRANSACTIONS);
    let downloads = temp_dir.path().join("saved");
    std::fs::write(
        temp_dir.path().join("config.json"),
        format!(
            r#"{{"download_dir": {}, "file_name_prefix": "expenses"}}"#,
            serde_json::to_string(&downloads).unwrap()
        ),
    )
    .unwrap();

    cmd(&temp_dir)
        .arg("export")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses_"));

    let saved: Vec<_> = std::fs::read_dir(&downloads)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("expenses_") && saved[0].ends_with(".csv"));
}

#[test]
fn export_rejects_unsafe_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, TRANSACTIONS);

    cmd(&temp_dir)
        .arg("export")
        .arg(&input)
        .arg("--dir")
        .arg(temp_dir.path())
        .args(["--output-name", "../escape.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file name"));
}

#[test]
fn export_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    cmd(&temp_dir)
        .args(["export", "does-not-exist.json", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn summary_totals_expenses_for_month() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, TRANSACTIONS);

    cmd(&temp_dir)
        .arg("summary")
        .arg(&input)
        .args(["--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Summary: March 2024"))
        .stdout(predicate::str::contains("MYR\u{a0}1,312.50"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn summary_rejects_bad_month() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, TRANSACTIONS);

    cmd(&temp_dir)
        .arg("summary")
        .arg(&input)
        .args(["--month", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM"));
}

#[test]
fn config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    cmd(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("transactions"));
}
