//! Tests for output module

use super::*;
use crate::environments::{Environment, Secret, Variable};
use crate::search::{Repository, SearchResults};
use pretty_assertions::assert_eq;
use serde_json::json;

fn environment() -> Environment {
    serde_json::from_value(json!({
        "id": 42,
        "name": "production",
        "html_url": "https://github.com/octo/hello/deployments",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "read_access": ["alice", "bob"],
        "variables": [{"name": "REGION", "value": "eu"}]
    }))
    .unwrap()
}

fn secret(name: &str) -> Secret {
    Secret {
        name: name.to_string(),
        value: String::new(),
        created_at: None,
        updated_at: None,
    }
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_env_file() {
    let export = EnvironmentExport::new(environment(), vec![secret("API_KEY"), secret("DB_URL")]);
    assert_eq!(
        export.to_env_file(),
        "NAME=production\nSECRET_API_KEY=\nSECRET_DB_URL=\nREAD_ACCESS=@alice, @bob\n"
    );
}

#[test]
fn test_env_file_without_read_access() {
    let mut env = environment();
    env.read_access.clear();
    let export = EnvironmentExport::new(env, Vec::new());
    assert_eq!(export.to_env_file(), "NAME=production\nREAD_ACCESS=\n");
}

#[test]
fn test_export_json() {
    let export = EnvironmentExport::new(environment(), vec![secret("API_KEY")]);
    let value: serde_json::Value =
        serde_json::from_str(&to_json_pretty(&export).unwrap()).unwrap();

    assert_eq!(value["id"], 42);
    assert_eq!(value["name"], "production");
    assert_eq!(value["secrets"][0]["name"], "API_KEY");
    assert_eq!(value["variables"][0]["name"], "REGION");
    assert_eq!(value["read_access"], json!(["alice", "bob"]));
    assert_eq!(value["secrets_access"], json!([]));
}

#[test]
fn test_export_keeps_variables() {
    let export = EnvironmentExport::new(environment(), Vec::new());
    assert_eq!(
        export.variables,
        vec![Variable {
            name: "REGION".to_string(),
            value: "eu".to_string(),
            created_at: None,
            updated_at: None,
        }]
    );
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_environments_table() {
    let rendered = environments_table(&[environment()]);
    let header = rendered
        .lines()
        .find(|line| line.contains("Name"))
        .unwrap();
    assert!(header.contains("Updated"));
    assert!(rendered.contains("production"));
    assert!(rendered.contains("42"));
    assert!(rendered.contains("2024-02-03 04:05"));
    assert!(rendered.contains("https://github.com/octo/hello/deployments"));
}

#[test]
fn test_environments_table_empty() {
    assert_eq!(environments_table(&[]), "No environments\n");
}

#[test]
fn test_repositories_table() {
    let results: SearchResults<Repository> = serde_json::from_value(json!({
        "total_count": 120,
        "incomplete_results": false,
        "items": [{
            "id": 1,
            "name": "cli",
            "full_name": "cli/cli",
            "description": "GitHub's official command line tool\nsecond line",
            "language": "Go",
            "stargazers_count": 35000
        }]
    }))
    .unwrap();

    let rendered = repositories_table(&results);
    assert!(rendered.starts_with("Showing 1 of 120 repositories\n\n"));
    assert!(rendered.contains("cli/cli"));
    assert!(rendered.contains("GitHub's official command line tool"));
    assert!(!rendered.contains("second line"));
    assert!(rendered.contains("35000"));
}

#[test]
fn test_repositories_table_empty() {
    let results: SearchResults<Repository> =
        serde_json::from_value(json!({"total_count": 0, "items": []})).unwrap();
    assert_eq!(
        repositories_table(&results),
        "Showing 0 of 0 repositories\n"
    );
}
