use assert_cmd::Command;
use predicates::prelude::*;

fn passforge() -> Command {
    Command::cargo_bin("passforge").unwrap()
}

#[test]
fn test_all_mode_table() {
    passforge()
        .args(["-i", "Rock411Gmail", "--limit", "12", "--symbol", "@!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoding Type | Result"))
        .stdout(predicate::str::contains("BASE64       | Um9jazQxMUdtYWls@!"))
        .stdout(predicate::str::contains("✅ Recommended Password: Um9jazQxMUdt@!"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_md5_mode() {
    passforge()
        .args(["--input", "abc", "--mode", "md5"])
        .assert()
        .success()
        .stdout("MD5 : 900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn test_recommend_mode_default_limit() {
    passforge()
        .args(["-i", "Rock411Gmail", "--mode", "recommend"])
        .assert()
        .success()
        .stdout("✅ Recommended Password: Um9jazQxMUdt\n");
}

#[test]
fn test_single_symbol_flag() {
    passforge()
        .args(["-i", "Rock411Gmail", "--symbol", "#", "--limit", "40", "--mode", "recommend", "--single-symbol"])
        .assert()
        .success()
        .stdout("✅ Recommended Password: Um9jazQxMUdtYWls#\n");
}

#[test]
fn test_unicode_and_ascii_modes() {
    passforge()
        .args(["-i", "A", "--mode", "unicode"])
        .assert()
        .success()
        .stdout("UNICODE : \\u0041\n");
    passforge()
        .args(["-i", "A", "--mode", "ascii"])
        .assert()
        .success()
        .stdout("ASCII : 65\n");
}

#[test]
fn test_json_output() {
    let output = passforge()
        .args(["-i", "abc", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["results"]["sha1"], "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(value["recommended"], "YWJj");
}

#[test]
fn test_empty_input_rejected() {
    passforge()
        .args(["--input", ""])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_input_rejected() {
    passforge().args(["--mode", "md5"]).assert().failure();
}

#[test]
fn test_non_integer_limit_rejected() {
    passforge()
        .args(["-i", "abc", "--limit", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));
}

#[test]
fn test_invalid_mode_rejected() {
    passforge()
        .args(["-i", "abc", "--mode", "sha512"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sha512"));
}

#[test]
fn test_output_file_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "stale content that is longer than the new output").unwrap();

    passforge()
        .args(["-i", "abc", "--mode", "hex", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output saved to file"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "HEX : 616263");
}

#[test]
fn test_output_file_has_no_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");

    passforge()
        .args(["-i", "abc", "--symbol", "!", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("MD5          | 900150983cd24fb0d6963f7d28e17f72!"));
    assert!(!written.contains('\x1b'));
}

#[test]
fn test_output_file_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    passforge()
        .args(["-i", "abc", "--output"])
        .arg(&path)
        .assert()
        .code(12)
        .stderr(predicate::str::contains("cannot write"));
}

#[test]
fn test_copy_never_fails_command() {
    passforge()
        .args(["-i", "abc", "--mode", "recommend", "--copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Recommended Password: YWJj"));
}

#[test]
fn test_mode_accepts_codec_alias() {
    passforge()
        .args(["-i", "abc", "--mode", "SHA-256"])
        .assert()
        .success()
        .stdout("SHA256 : ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
}

#[test]
fn test_json_copy_keeps_stdout_json() {
    let output = passforge()
        .args(["-i", "abc", "--json", "--copy"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["recommended"], "YWJj");
}

#[test]
fn test_unavailable_clipboard_reported_once() {
    let output = passforge()
        .env("RUST_LOG", "warn")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["-i", "abc", "--mode", "recommend", "--copy"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().filter(|l| l.contains("clipboard")).count() <= 1);
}
