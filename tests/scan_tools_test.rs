use serde_json::{json, Map, Value};
use snyk_mcp::config::SnykConfig;
use snyk_mcp::mcp::call_tool;
use snyk_mcp::{AppState, ScanError};
use std::sync::Arc;
use tokio_test::assert_err;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn state_for(server: &MockServer) -> Arc<AppState> {
    let http_client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client");
    Arc::new(AppState::new(
        SnykConfig::new(TOKEN, server.uri()),
        http_client,
    ))
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("arguments must be an object"),
    }
}

fn only_text(response: &snyk_mcp::mcp::McpCallResponse) -> &str {
    assert_eq!(response.content.len(), 1);
    assert_eq!(response.content[0].content_type, "text");
    assert!(!response.is_error);
    &response.content[0].text
}

#[tokio::test]
async fn scan_project_returns_pretty_printed_upstream_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/p1/issues"))
        .and(header("Authorization", "token test-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = call_tool(
        state_for(&server),
        "scan_project",
        Some(&args(json!({"projectId": "p1"}))),
    )
    .await
    .expect("scan_project should succeed");

    assert_eq!(only_text(&response), "{\n  \"ok\": true\n}");
}

#[tokio::test]
async fn scan_repository_posts_branch_qualified_remote_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/test"))
        .and(header("Authorization", "token test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "target": {"remoteUrl": "https://github.com/acme/app/tree/release"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issues": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = call_tool(
        state_for(&server),
        "scan_repository",
        Some(&args(json!({
            "url": "https://github.com/acme/app",
            "branch": "release"
        }))),
    )
    .await
    .expect("scan_repository should succeed");

    assert_eq!(only_text(&response), "{\n  \"issues\": []\n}");
}

#[tokio::test]
async fn scan_repository_without_branch_sends_url_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/test"))
        .and(body_json(json!({
            "target": {"remoteUrl": "https://github.com/acme/app"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result = call_tool(
        state_for(&server),
        "scan_repository",
        Some(&args(json!({"url": "https://github.com/acme/app"}))),
    )
    .await;
    assert!(result.is_ok(), "Expected success, got: {:?}", result);
}

#[tokio::test]
async fn upstream_failure_carries_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let state = state_for(&server);

    let err = call_tool(
        Arc::clone(&state),
        "scan_project",
        Some(&args(json!({"projectId": "p1"}))),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ScanError::Upstream { status, .. } if status.as_u16() == 403));
    assert!(err.to_string().contains("Forbidden"));

    let err = call_tool(
        state,
        "scan_repository",
        Some(&args(json!({"url": "https://github.com/acme/app"}))),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Snyk API error: Forbidden");
}

#[tokio::test]
async fn non_json_success_body_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = call_tool(
        state_for(&server),
        "scan_project",
        Some(&args(json!({"projectId": "p1"}))),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ScanError::Transport(_)));
}

#[tokio::test]
async fn returned_text_round_trips_to_upstream_document() {
    let upstream = json!({
        "ok": false,
        "issues": {
            "vulnerabilities": [
                {"id": "SNYK-JS-LODASH-567746", "severity": "high", "isUpgradable": true},
                {"id": "SNYK-JS-MINIMIST-559764", "severity": "medium", "isUpgradable": false}
            ],
            "licenses": []
        },
        "dependencyCount": 42,
        "org": {"name": "acme", "id": null}
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/abc-123/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .mount(&server)
        .await;

    let response = call_tool(
        state_for(&server),
        "scan_project",
        Some(&args(json!({"projectId": "abc-123"}))),
    )
    .await
    .expect("scan_project should succeed");

    let text = only_text(&response);
    let parsed: Value = serde_json::from_str(text).expect("text should be JSON");
    assert_eq!(parsed, upstream);
    assert_eq!(text, serde_json::to_string_pretty(&upstream).unwrap());
}

#[tokio::test]
async fn invalid_url_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = call_tool(
        state_for(&server),
        "scan_repository",
        Some(&args(json!({"url": "not-a-url"}))),
    )
    .await
    .unwrap_err();

    match &err {
        ScanError::InvalidArguments(errors) => assert!(errors.mentions("url")),
        other => panic!("expected InvalidArguments, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Invalid arguments: url: Invalid url");
}

#[tokio::test]
async fn missing_url_is_reported() {
    let server = MockServer::start().await;
    let err = call_tool(state_for(&server), "scan_repository", Some(&Map::new()))
        .await
        .unwrap_err();

    match err {
        ScanError::InvalidArguments(errors) => {
            assert!(errors.mentions("url"));
            assert_eq!(errors.to_string(), "url: Required");
        }
        other => panic!("expected InvalidArguments, got {:?}", other),
    }
}

#[tokio::test]
async fn every_violation_is_reported_in_one_error() {
    let server = MockServer::start().await;
    let err = call_tool(
        state_for(&server),
        "scan_repository",
        Some(&args(json!({"url": "nope", "branch": 7}))),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid arguments: url: Invalid url, branch: Expected string, received number"
    );
}

#[tokio::test]
async fn missing_project_id_is_reported() {
    let server = MockServer::start().await;
    let err = call_tool(
        state_for(&server),
        "scan_project",
        Some(&args(json!({"project_id": "p1"}))),
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Invalid arguments: projectId: Required");
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let server = MockServer::start().await;
    let result = call_tool(state_for(&server), "nonexistent_tool", Some(&Map::new())).await;
    let err = assert_err!(result);
    assert!(matches!(&err, ScanError::UnknownTool(name) if name == "nonexistent_tool"));
    assert_eq!(err.to_string(), "Unknown tool: nonexistent_tool");
}

#[tokio::test]
async fn absent_arguments_are_rejected_before_name_lookup() {
    let server = MockServer::start().await;
    let state = state_for(&server);

    let err = call_tool(Arc::clone(&state), "scan_project", None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid arguments: Arguments are required");

    let err = call_tool(state, "nonexistent_tool", None).await.unwrap_err();
    assert!(matches!(err, ScanError::InvalidArguments(_)));
}
