// Commands of the jsscope CLI that talk to a running server

use assert_cmd::Command;
use predicates::prelude::*;

fn jsscope_cmd() -> Command {
    Command::cargo_bin("jsscope").unwrap()
}

#[test]
fn test_remote_analyze() {
    let mock_response = r#"
    {
        "isValid": true,
        "message": "Analysis and optimization completed",
        "tokens": [{"line": 1, "type": "KEYWORD", "value": "let"}],
        "optimizedCode": "let a = 1;",
        "originalSize": 10,
        "optimizedSize": 10,
        "reductionPercentage": 0.0,
        "serverMemoryUsage": "2.50 MB"
    }
    "#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/analyze")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({"code": "let a = 1;"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create();

    jsscope_cmd()
        .arg("-u")
        .arg(server.url())
        .args(["remote", "-"])
        .write_stdin("let a = 1;")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"serverMemoryUsage\":\"2.50 MB\""));

    mock.assert();
}

#[test]
fn test_remote_invalid_exits_with_one() {
    let mock_response = r#"
    {
        "isValid": false,
        "message": "An error was found in the code",
        "errorDetail": "Line 1: Unexpected token",
        "errorType": "SYNTACTIC",
        "serverMemoryUsage": "2.50 MB"
    }
    "#;

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create();

    jsscope_cmd()
        .arg("-u")
        .arg(server.url())
        .args(["remote", "-"])
        .write_stdin("function f( {")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Line 1: Unexpected token"));
}

#[test]
fn test_remote_error_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(413)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Code is 20 bytes, the limit is 8 bytes"}"#)
        .create();

    jsscope_cmd()
        .arg("-u")
        .arg(server.url())
        .args(["remote", "-"])
        .write_stdin("const tooLong = 1234;")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "API error (413): Code is 20 bytes, the limit is 8 bytes",
        ));
}

#[test]
fn test_info_command() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v1/system/info")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"version": "0.1.0", "tokenizer": "lexer", "validator": "oxc",
                "max_source_bytes": 1048576, "memory_usage": "1.00 MB"}"#,
        )
        .create();

    jsscope_cmd()
        .arg("-u")
        .arg(server.url())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"validator\":\"oxc\""));
}

#[test]
fn test_api_url_from_env() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/system/info")
        .with_status(500)
        .with_body("boom")
        .create();

    jsscope_cmd()
        .env("JSSCOPE_API_URL", server.url())
        .arg("info")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API error (500): boom"));

    mock.assert();
}
