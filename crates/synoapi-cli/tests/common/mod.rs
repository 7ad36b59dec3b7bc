#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with an isolated config directory and no inherited
/// connection settings.
pub fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_syno"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env_remove("SYNO_HOST");
    cmd.env_remove("SYNO_ACCOUNT");
    cmd.env_remove("SYNO_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli_async(args: Vec<String>, home: &Path) -> Output {
    let home = home.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args, &home)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert success and return stdout.
pub fn expect_success(output: &Output) -> String {
    if !output.status.success() {
        panic!("CLI command failed\nstderr: {}", stderr(output));
    }
    stdout(output)
}

/// Connection flags for a mock server.
pub fn connection_args(server: &MockServer) -> Vec<String> {
    vec![
        "--host".into(),
        server.uri(),
        "--account".into(),
        "admin".into(),
        "--password".into(),
        "secret".into(),
    ]
}

pub async fn mount_discovery(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/webapi/query.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "SYNO.API.Auth": {"path": "auth.cgi", "minVersion": 1, "maxVersion": 6},
                "SYNO.SurveillanceStation.Camera": {"path": "entry.cgi", "minVersion": 1, "maxVersion": 9}
            }
        })))
        .mount(server)
        .await;
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/webapi/auth.cgi"))
        .and(query_param("method", "login"))
        .and(query_param("account", "admin"))
        .and(query_param("passwd", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"sid": "cli-sid"}
        })))
        .mount(server)
        .await;
}

/// Mount a logout endpoint that must be hit exactly `times` times.
pub async fn mount_logout(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/webapi/auth.cgi"))
        .and(query_param("method", "logout"))
        .and(query_param("_sid", "cli-sid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(times)
        .mount(server)
        .await;
}
