use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("jamilek-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn decode_file_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let input = "a:1\nb:[\n  true\n  \"x\"\n]\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("jamilek-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let v_out: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v_out, serde_json::json!({"a": 1, "b": [true, "x"]}));
    Ok(())
}

#[test]
fn decode_stdin() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("jamilek-cli"))
        .write_stdin("k:\"v\"\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"k\":\"v\""));
    Ok(())
}

#[test]
fn parse_error_fails_with_position() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "b:1\na:2\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("jamilek-cli"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'a'(0x61):1:0"));
    Ok(())
}
