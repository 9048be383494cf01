use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn swagger_diff_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_swagger-diff"))
}

fn write_spec(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("swagger-diff-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write spec fixture");
    path
}

const OLD_SPEC: &str = r##"{
  "swagger": "2.0",
  "paths": {
    "/pets": {
      "get": {
        "summary": "List pets",
        "responses": {
          "200": { "schema": { "$ref": "#/definitions/Pet" } }
        }
      }
    }
  },
  "definitions": {
    "Pet": {
      "type": "object",
      "properties": { "id": { "type": "integer" } }
    }
  }
}"##;

const NEW_SPEC: &str = r##"{
  "swagger": "2.0",
  "paths": {
    "/pets": {
      "get": {
        "summary": "List pets",
        "responses": {
          "200": { "schema": { "$ref": "#/definitions/Pet" } }
        }
      },
      "post": {
        "summary": "Create a pet",
        "responses": {
          "200": { "description": "ok" }
        }
      }
    }
  },
  "definitions": {
    "Pet": {
      "type": "object",
      "properties": {
        "id": { "type": "integer" },
        "name": { "type": "string" }
      }
    }
  }
}"##;

#[test]
fn identical_specs_exit_0() {
    let spec = write_spec("identical.json", OLD_SPEC);
    let output = swagger_diff_cmd()
        .args(["diff"])
        .arg(&spec)
        .arg(&spec)
        .output()
        .expect("failed to run swagger-diff");

    assert!(
        output.status.success(),
        "identical specs should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("No differences found."));
}

#[test]
fn different_specs_exit_1() {
    let old = write_spec("old.json", OLD_SPEC);
    let new = write_spec("new.json", NEW_SPEC);
    let output = swagger_diff_cmd()
        .args(["diff"])
        .arg(&old)
        .arg(&new)
        .output()
        .expect("failed to run swagger-diff");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("New endpoints:"));
    assert!(stdout.contains("POST /pets"));
    assert!(stdout.contains("Changed endpoints:"));
}

#[test]
fn markdown_format_renders_sections() {
    let old = write_spec("md_old.json", OLD_SPEC);
    let new = write_spec("md_new.json", NEW_SPEC);
    let output = swagger_diff_cmd()
        .args(["diff", "--format", "markdown"])
        .arg(&old)
        .arg(&new)
        .output()
        .expect("failed to run swagger-diff");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("### What's New"));
    assert!(stdout.contains("* `POST` /pets Create a pet"));
}

#[test]
fn json_format_emits_a_versioned_report() {
    let old = write_spec("json_old.json", OLD_SPEC);
    let new = write_spec("json_new.json", NEW_SPEC);
    let output = swagger_diff_cmd()
        .args(["diff", "--format", "json"])
        .arg(&old)
        .arg(&new)
        .output()
        .expect("failed to run swagger-diff");

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(report["version"], "1");
    assert_eq!(report["new_endpoints"][0]["method"], "POST");
}

#[test]
fn missing_file_exits_2() {
    let spec = write_spec("present.json", OLD_SPEC);
    let output = swagger_diff_cmd()
        .args(["diff", "/nonexistent/spec.json"])
        .arg(&spec)
        .output()
        .expect("failed to run swagger-diff");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn info_summarizes_a_spec() {
    let spec = write_spec("info.json", NEW_SPEC);
    let output = swagger_diff_cmd()
        .args(["info"])
        .arg(&spec)
        .output()
        .expect("failed to run swagger-diff");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Paths: 1"));
    assert!(stdout.contains("Operations: 2"));
    assert!(stdout.contains("Definitions: 1"));
    assert!(stdout.contains("/pets [GET, POST]"));
}
