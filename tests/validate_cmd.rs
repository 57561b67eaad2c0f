use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

const HEADER: &str = "Authors,Author full names,Author(s) ID,Title,Year,Source title,Volume,Issue,Page start,Page end,Cited by,Affiliations,Author Keywords\n";

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("scopus.csv");
    let mut s = String::from(HEADER);
    s.push_str("\"A, B\",,111;222,T1,2021,J,,,,,1,,\n");
    s.push_str("B,,222; 333,T2,2019,J,,,,,n/a,,\n");
    s.push_str("C,,,T3,forthcoming,J,,,,,,,\n");
    fs::write(&input, s).unwrap();

    let mut cmd = Command::cargo_bin("kira-bibliometrics").unwrap();
    cmd.arg("validate").arg("--input").arg(&input);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("records: 3"));
    assert!(stdout.contains("years: 2019, 2021"));
    assert!(stdout.contains("author ids: 3"));
    assert!(stdout.contains("row 2: non-numeric Cited by value 'n/a' ignored"));
    assert!(stdout.contains("row 3: non-numeric Year value 'forthcoming' ignored"));
}

#[test]
fn validate_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-bibliometrics").unwrap();
    cmd.arg("validate")
        .arg("--input")
        .arg(tmp.path().join("absent.csv"));
    cmd.assert().failure();
}
