//! CLI integration tests for the openapi-enhancer binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("openapi-enhancer"))
}

// Helper to create a temp spec file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SPEC: &str = r#"{
    "swagger": "2.0",
    "security": [{ "basic_auth": [] }],
    "paths": {
        "/node/article": {
            "get": { "parameters": [ { "name": "sort", "in": "query", "type": "array" } ] },
            "post": { "parameters": [] }
        }
    },
    "definitions": {
        "node--article": {
            "type": "object",
            "required": [],
            "properties": { "data": { "type": "object" } }
        }
    }
}"#;

mod local_file {
    use super::*;

    #[test]
    fn enhances_file_to_output() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", SPEC);
        let output = dir.path().join("out.json");

        cmd()
            .args([
                "--input-spec",
                input.to_str().unwrap(),
                "--output-spec",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(parsed.get("security").is_none());
        assert!(parsed["paths"]["/node/article"].get("post").is_none());
        assert_eq!(
            parsed["definitions"]["node--article"]["properties"]["data"]["$ref"],
            "#/definitions/node--article--data"
        );
        // Two-space indentation
        assert!(content.starts_with("{\n  \"swagger\""));
    }

    #[test]
    fn legacy_flag_names() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", SPEC);
        let output = dir.path().join("out.json");

        cmd()
            .args([
                "--inputSpec",
                input.to_str().unwrap(),
                "--outputSpec",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        assert!(output.exists());
    }

    #[test]
    fn default_output_location() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", SPEC);

        cmd()
            .current_dir(dir.path())
            .args(["-i", input.to_str().unwrap()])
            .assert()
            .success();

        assert!(dir.path().join("openapi_out.json").exists());
    }

    #[test]
    fn logs_progress_to_stderr() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", SPEC);
        let output = dir.path().join("out.json");

        cmd()
            .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stderr(predicate::str::contains("correcting definitions"));
    }

    #[test]
    fn quiet_suppresses_progress() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", SPEC);
        let output = dir.path().join("out.json");

        cmd()
            .args([
                "-q",
                "-i",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_input_is_config_error() {
        let dir = TempDir::new().unwrap();

        cmd()
            .current_dir(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("no input spec"));

        assert!(!dir.path().join("openapi_out.json").exists());
    }

    #[test]
    fn missing_file_is_io_error() {
        cmd()
            .args(["-i", "/nonexistent/openapi.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn invalid_json_is_document_error() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", "{ not json");

        cmd()
            .args(["-i", input.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }

    #[test]
    fn missing_definitions_is_document_error() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", r#"{"paths": {}}"#);
        let output = dir.path().join("out.json");

        cmd()
            .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("definitions"));

        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_io_error() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", SPEC);
        let output = dir.path().join("missing").join("out.json");

        cmd()
            .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("cannot write output spec"));
    }
}

/// Remote loading tests against a local mock server
mod remote {
    use super::*;

    #[test]
    fn fetches_with_basic_auth() {
        let mut server = mockito::Server::new();
        // base64("admin:secret")
        let mock = server
            .mock("GET", "/openapi/jsonapi")
            .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
            .with_status(200)
            .with_body(SPEC)
            .create();

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let url = format!("{}/openapi/jsonapi", server.url());

        cmd()
            .args([
                "-i",
                url.as_str(),
                "-o",
                output.to_str().unwrap(),
                "-u",
                "admin",
                "-p",
                "secret",
            ])
            .assert()
            .success();

        mock.assert();
        assert!(output.exists());
    }

    #[test]
    fn credentials_from_environment() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/openapi")
            .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
            .with_status(200)
            .with_body(SPEC)
            .create();

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let url = format!("{}/openapi", server.url());

        cmd()
            .env("OPENAPI_ENHANCER_USER", "admin")
            .env("OPENAPI_ENHANCER_PASSWORD", "secret")
            .args([
                "-i",
                url.as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        mock.assert();
    }

    #[test]
    fn non_200_status_fails() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/openapi").with_status(401).create();
        let url = format!("{}/openapi", server.url());

        cmd()
            .args(["-i", url.as_str()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("status code 401"));
    }
}
