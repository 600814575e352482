//! CLI integration tests for table2struct.
//!
//! These tests verify command-line argument parsing, help output, exit
//! codes, and end-to-end generation from a YAML schema file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Get a command for the table2struct binary.
fn cmd() -> Command {
    Command::cargo_bin("table2struct").unwrap()
}

const SCHEMA: &str = r#"
tables:
  - name: users
    columns:
      - { field: id, type: "int(11) unsigned", nullable: "NO", key: PRI }
      - { field: user_name, type: "varchar(64)", nullable: "NO" }
      - { field: last_ip, type: "varchar(45)", nullable: "YES" }
      - { field: created_at, type: datetime, nullable: "NO" }
  - name: posts
    columns:
      - { field: id, type: "bigint(20)", nullable: "NO" }
      - { field: status, type: "enum('draft','published')", nullable: "NO" }
      - { field: published_at, type: datetime, nullable: "YES" }
"#;

fn write_schema(dir: &Path) -> String {
    let path = dir.join("schema.yaml");
    fs::write(&path, SCHEMA).unwrap();
    path.to_str().unwrap().to_string()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--package"))
        .stdout(predicate::str::contains("--dsn"))
        .stdout(predicate::str::contains("--tables"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--schema-file"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("table2struct"));
}

#[test]
fn test_log_flags_defaults() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: text]"))
        .stdout(predicate::str::contains("[default: info]"));
}

// =============================================================================
// Missing Settings
// =============================================================================

#[test]
fn test_no_args_prints_usage_and_succeeds() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_package_prints_usage() {
    cmd()
        .args(["--dsn", "root:root@localhost/app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--package"));
}

// =============================================================================
// Error Exit Codes
// =============================================================================

#[test]
fn test_invalid_dsn_is_config_error() {
    cmd()
        .args(["-p", "models", "--dsn", "not-a-dsn"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid DSN"));
}

#[test]
fn test_invalid_package_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path());

    cmd()
        .args(["-p", "my-models", "--schema-file", &schema])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid Go identifier"));
}

#[test]
fn test_dsn_and_schema_file_conflict() {
    cmd()
        .args([
            "-p",
            "models",
            "--dsn",
            "root@localhost/db",
            "--schema-file",
            "schema.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_schema_file() {
    cmd()
        .args(["-p", "models", "--schema-file", "/nonexistent/schema.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_unknown_table() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path());

    cmd()
        .args(["-p", "models", "--schema-file", &schema, "-t", "comments"])
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Table comments does not exist"));
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_generate_all_tables() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path());
    let out = dir.path().join("models");

    cmd()
        .args(["-p", "models", "--schema-file", &schema])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let users = fs::read_to_string(out.join("users.go")).unwrap();
    assert_eq!(
        users,
        "
package models

import (
    \"database/sql\"
    \"time\"
)

// Users -
type Users struct {
    ID uint64 `db:\"id\"`
    UserName string `db:\"user_name\"`
    LastIP sql.NullString `db:\"last_ip\"`
    CreatedAt time.Time `db:\"created_at\"`
}
"
    );

    let posts = fs::read_to_string(out.join("posts.go")).unwrap();
    assert!(posts.contains("    \"github.com/go-sql-driver/mysql\"\n"));
    assert!(posts.contains("Status string `db:\"status\"`"));
    assert!(posts.contains("PublishedAt mysql.NullTime `db:\"published_at\"`"));
}

#[test]
fn test_generate_filtered_tables_json() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path());
    let out = dir.path().join("out");

    cmd()
        .args(["-p", "models", "--schema-file", &schema, "-t", "posts", "--output-json"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type_name\": \"Posts\""))
        .stdout(predicate::str::contains("\"source\": \"memory\""));

    assert!(out.join("posts.go").exists());
    assert!(!out.join("users.go").exists());
}

#[test]
fn test_generate_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path());
    let out = dir.path().join("gen");
    let config_path = dir.path().join("table2struct.yaml");
    fs::write(
        &config_path,
        format!(
            "package: entities\nschema_file: {:?}\ntables: [users]\noutput_dir: {:?}\n",
            schema, out
        ),
    )
    .unwrap();

    cmd().arg("-c").arg(&config_path).assert().success();

    let users = fs::read_to_string(out.join("users.go")).unwrap();
    assert!(users.starts_with("\npackage entities\n"));
}
