//! Tests for environments module

use super::*;
use crate::error::Error;
use crate::http::mock::MockTransport;
use crate::http::HttpClient;
use crate::pagination::PaginationConfig;
use crate::types::{Method, RepoRef};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "https://api.github.com/";

fn client(transport: &MockTransport) -> EnvironmentsClient<&MockTransport> {
    EnvironmentsClient::new(transport, PREFIX, RepoRef::new("octo", "hello"))
}

fn environment_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "url": format!("https://api.github.com/repos/octo/hello/environments/{name}"),
        "html_url": format!("https://github.com/octo/hello/deployments/activity_log?environments_filter={name}"),
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    })
}

// ============================================================================
// Type Tests
// ============================================================================

#[test]
fn test_environment_deserialize_minimal() {
    let env: Environment = serde_json::from_value(json!({"id": 1, "name": "prod"})).unwrap();
    assert_eq!(env.name, "prod");
    assert!(env.variables.is_empty());
    assert!(env.read_access.is_empty());
    assert!(env.created_at.is_none());
}

#[test]
fn test_environment_deserialize_access_lists() {
    let env: Environment = serde_json::from_value(json!({
        "id": 1,
        "name": "prod",
        "read_access": ["alice"],
        "secrets_read_access": ["bob"],
        "variables": [{"name": "REGION", "value": "eu"}]
    }))
    .unwrap();
    assert_eq!(env.read_access, vec!["alice"]);
    assert_eq!(env.secrets_access, vec!["bob"]);
    assert_eq!(env.variables[0].value, "eu");
}

#[test]
fn test_secret_without_value() {
    let secret: Secret = serde_json::from_value(json!({
        "name": "API_KEY",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-01-02T03:04:05Z"
    }))
    .unwrap();
    assert_eq!(secret.name, "API_KEY");
    assert_eq!(secret.value, "");
}

// ============================================================================
// parse_variables Tests
// ============================================================================

#[test]
fn test_parse_variables() {
    let vars = parse_variables("REGION=eu, TIER = gold,EMPTY=").unwrap();
    assert_eq!(vars.len(), 3);
    assert_eq!(vars["REGION"], "eu");
    assert_eq!(vars["TIER"], "gold");
    assert_eq!(vars["EMPTY"], "");
}

#[test]
fn test_parse_variables_value_with_equals() {
    let vars = parse_variables("QUERY=a=b").unwrap();
    assert_eq!(vars["QUERY"], "a=b");
}

#[test]
fn test_parse_variables_empty() {
    assert!(parse_variables("").unwrap().is_empty());
    assert!(parse_variables("   ").unwrap().is_empty());
}

#[test]
fn test_parse_variables_missing_equals() {
    let err = parse_variables("A=1,B").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("\"B\""));
}

#[test]
fn test_parse_variables_empty_key() {
    let err = parse_variables("=1").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

// ============================================================================
// Client Tests (mock transport)
// ============================================================================

#[tokio::test]
async fn test_list_follows_pages() {
    let transport = MockTransport::new();
    transport
        .push_json_with_link(
            200,
            json!({"total_count": 3, "environments": [environment_json(1, "dev"), environment_json(2, "staging")]}),
            "<https://api.github.com/repositories/9/environments?per_page=100&page=2>; rel=\"next\"",
        )
        .push_json(
            200,
            json!({"total_count": 3, "environments": [environment_json(3, "prod")]}),
        );

    let envs = client(&transport).list().await.unwrap();
    let names: Vec<_> = envs.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["dev", "staging", "prod"]);

    assert_eq!(
        transport.urls(),
        vec![
            "https://api.github.com/repos/octo/hello/environments?per_page=100",
            "https://api.github.com/repositories/9/environments?per_page=100&page=2",
        ]
    );
}

#[tokio::test]
async fn test_list_sends_github_headers() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"total_count": 0, "environments": []}));

    client(&transport).list().await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.headers["Accept"], "application/vnd.github.v3+json");
    assert_eq!(
        request.headers["Content-Type"],
        "application/json; charset=utf-8"
    );
}

#[tokio::test]
async fn test_list_error_discards_pages() {
    let transport = MockTransport::new();
    transport
        .push_json_with_link(
            200,
            json!({"total_count": 2, "environments": [environment_json(1, "dev")]}),
            "<https://api.github.com/x?page=2>; rel=\"next\"",
        )
        .push_json(404, json!({"message": "Not Found"}));

    let err = client(&transport).list().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_list_respects_page_ceiling() {
    let transport = MockTransport::new();
    transport.push_json_with_link(
        200,
        json!({"total_count": 2, "environments": [environment_json(1, "dev")]}),
        "<https://api.github.com/x?page=2>; rel=\"next\"",
    );

    let err = client(&transport)
        .with_pagination(PaginationConfig::max_pages(1))
        .list()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::PaginationLimitExceeded { max_pages: 1 }
    ));
}

#[tokio::test]
async fn test_get_encodes_name() {
    let transport = MockTransport::new();
    transport.push_json(200, environment_json(5, "qa env"));

    let env = client(&transport).get("qa env").await.unwrap();
    assert_eq!(env.id, 5);
    assert_eq!(
        transport.urls(),
        vec!["https://api.github.com/repos/octo/hello/environments/qa%20env"]
    );
}

#[tokio::test]
async fn test_secrets_url() {
    let transport = MockTransport::new();
    transport.push_json(
        200,
        json!({"total_count": 1, "secrets": [{"name": "API_KEY"}]}),
    );

    let secrets = client(&transport).secrets("prod").await.unwrap();
    assert_eq!(secrets.len(), 1);
    assert_eq!(
        transport.urls(),
        vec!["https://api.github.com/repos/octo/hello/environments/prod/secrets?per_page=100"]
    );
}

#[tokio::test]
async fn test_enterprise_prefix() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"total_count": 0, "environments": []}));

    let client = EnvironmentsClient::new(
        &transport,
        "https://ghe.example.com/api/v3/",
        RepoRef::new("octo", "hello"),
    );
    client.list().await.unwrap();
    assert_eq!(
        transport.urls(),
        vec!["https://ghe.example.com/api/v3/repos/octo/hello/environments?per_page=100"]
    );
}

#[tokio::test]
async fn test_create_without_variables_has_no_body() {
    let transport = MockTransport::new();
    transport.push_json(200, environment_json(1, "prod"));

    client(&transport)
        .create_or_update("prod", &std::collections::BTreeMap::new())
        .await
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::PUT);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_create_with_variables_body() {
    let transport = MockTransport::new();
    transport.push_json(200, environment_json(1, "prod"));

    let vars = parse_variables("REGION=eu").unwrap();
    client(&transport)
        .create_or_update("prod", &vars)
        .await
        .unwrap();

    let body: serde_json::Value =
        serde_json::from_slice(transport.requests()[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(body, json!({"variables": {"REGION": "eu"}}));
}

#[tokio::test]
async fn test_create_failure_carries_github_message() {
    let transport = MockTransport::new();
    transport.push_json(
        422,
        json!({
            "message": "Validation Failed",
            "errors": [{"resource": "Environment", "field": "name", "code": "invalid"}]
        }),
    );

    let err = client(&transport)
        .create_or_update("bad", &std::collections::BTreeMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("Validation Failed"));
}

#[tokio::test]
async fn test_delete() {
    let transport = MockTransport::new();
    transport.push(crate::http::TransportResponse::new(204, ""));

    client(&transport).delete("prod").await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(
        request.url,
        "https://api.github.com/repos/octo/hello/environments/prod"
    );
}

// ============================================================================
// Client Tests (HTTP)
// ============================================================================

#[tokio::test]
async fn test_create_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/octo/hello/environments/prod"))
        .and(body_json(json!({"variables": {"A": "1", "B": "2"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(environment_json(1, "prod")))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpClient::new().unwrap();
    let client = EnvironmentsClient::new(
        &http,
        format!("{}/", server.uri()),
        RepoRef::new("octo", "hello"),
    );
    client
        .create_or_update("prod", &parse_variables("A=1,B=2").unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_secrets_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/environments/prod/secrets"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "secrets": [{"name": "A"}, {"name": "B"}]
        })))
        .mount(&server)
        .await;

    let http = HttpClient::new().unwrap();
    let client = EnvironmentsClient::new(
        &http,
        format!("{}/", server.uri()),
        RepoRef::new("octo", "hello"),
    );
    let names: Vec<_> = client
        .secrets("prod")
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}
