use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn input(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn info_prints_extents() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input("a,b,c\nd\n\n")?;
    Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .arg("--info")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("3 3\n");
    Ok(())
}

#[test]
fn get_reads_one_cell() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input("x,\"A,B\"\n")?;
    Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .args(["--get", "0,1"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("A,B\n");
    Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .args(["--get", "3,0"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid position"));
    Ok(())
}

#[test]
fn redelimits_to_custom_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input("plain,\"cont[F]ent\"\n")?;
    let output = Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .args(["--out-separator", "[F]", "--out-delimiter", "[T]"])
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "plain[F][T]cont[F]ent[T]\n");
    Ok(())
}

#[test]
fn config_file_and_json_export() -> Result<(), Box<dyn std::error::Error>> {
    let config = input(r#"{"field_separator": "[F]", "text_delimiter": "[T]"}"#)?;
    let data = input("a[F][T]b[T][T]c[T]\n")?;
    let output = Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .arg("--config")
        .arg(config.path())
        .arg("--json")
        .arg(data.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v, serde_json::json!([["a", "b[T]c"]]));
    Ok(())
}

#[test]
fn empty_separator_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input("a\n")?;
    Command::new(assert_cmd::cargo::cargo_bin!("dcsv"))
        .args(["--separator", ""])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("field separator must not be empty"));
    Ok(())
}
