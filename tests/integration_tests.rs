#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;
use url::Url;

use checknumber_verifier::api::{ApiClient, ApiClientError, Task, TaskStatus};
use checknumber_verifier::api_key::{ApiKey, ApiKeyError};
use checknumber_verifier::input;

fn test_client(base: &str) -> ApiClient {
    ApiClient::new(Url::parse(base).unwrap(), ApiKey::new("test-key").unwrap()).unwrap()
}

#[test]
fn test_api_key_integration() {
    // Test valid key creation and usage
    let key = ApiKey::new("c3f1a9b2-4711-4d26-9e87-1f0c2d3e4a5b").unwrap();
    let as_str: &str = key.as_ref();
    assert_eq!(as_str, "c3f1a9b2-4711-4d26-9e87-1f0c2d3e4a5b");

    // Display must never leak the credential
    assert!(!format!("{key}").contains("c3f1a9b2"));

    // Test invalid keys
    let result = ApiKey::new("has whitespace");
    assert!(result.is_err());

    match result.unwrap_err() {
        ApiKeyError::Match => {}
        other => panic!("Expected Match error, got {other:?}"),
    }
}

#[test]
fn test_task_status_serialization() {
    // Test that TaskStatus round-trips through serde
    let statuses = vec![
        TaskStatus::Pending,
        TaskStatus::Processing,
        TaskStatus::Exported,
        TaskStatus::Failed,
        TaskStatus::Unknown,
    ];

    for status in statuses {
        let serialized = serde_json::to_string(&status).unwrap();
        let deserialized: TaskStatus = serde_json::from_str(&serialized).unwrap();
        assert_eq!(status, deserialized);
    }
}

#[test]
fn test_task_status_unrecognized_maps_to_unknown() {
    let status: TaskStatus = serde_json::from_str(r#""queued""#).unwrap();
    assert_eq!(status, TaskStatus::Unknown);
    assert!(!status.is_terminal());
}

#[test]
fn test_task_status_terminality() {
    assert!(TaskStatus::Exported.is_terminal());
    assert!(TaskStatus::Failed.is_terminal());
    assert!(!TaskStatus::Pending.is_terminal());
    assert!(!TaskStatus::Processing.is_terminal());
}

#[test]
fn test_task_snapshot_deserialization() {
    let raw = r#"{
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:05:00Z",
        "task_id": "t1",
        "user_id": "test",
        "status": "exported",
        "total": 10,
        "success": 10,
        "failure": 0,
        "result_url": "https://example.com/r1.xlsx"
    }"#;
    let task: Task = serde_json::from_str(raw).unwrap();

    assert_eq!(task.task_id(), "t1");
    assert_eq!(task.user_id(), "test");
    assert_eq!(task.status(), TaskStatus::Exported);
    assert_eq!(task.result_url(), Some("https://example.com/r1.xlsx"));
    // Server-reported invariant, not enforced by the client
    assert!(task.success() + task.failure() <= task.total());
}

#[test]
fn test_malformed_task_json_is_an_error() {
    assert!(serde_json::from_str::<Task>("not json at all").is_err());
    assert!(serde_json::from_str::<Task>(r#"{"status": "exported"}"#).is_err());
}

#[test]
fn test_create_task_url() {
    let api = test_client("https://api.checknumber.ai");
    let url = api.create_task_url().unwrap();
    assert_eq!(url.as_str(), "https://api.checknumber.ai/x/api/simple/tasks");
}

#[test]
fn test_task_status_url() {
    let api = test_client("https://api.checknumber.ai");
    let url = api.task_status_url("t1", "test").unwrap();
    assert_eq!(url.path(), "/x/api/simple/tasks/t1");
    assert_eq!(url.query(), Some("user_id=test"));
}

#[test]
fn test_task_status_url_encodes_user_id() {
    let api = test_client("https://api.checknumber.ai");
    let url = api.task_status_url("t1", "alice bob").unwrap();
    assert_eq!(url.query(), Some("user_id=alice+bob"));
}

#[test]
fn test_upload_missing_file_fails_before_network() {
    // Unroutable base URL: an I/O error here proves no request was sent
    let api = test_client("http://127.0.0.1:1");
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    match api.upload_file(&missing) {
        Err(ApiClientError::Io(_)) => {}
        Err(other) => panic!("Expected Io error, got {other}"),
        Ok(_) => panic!("Upload of a missing file must fail"),
    }
}

#[test]
fn test_write_targets() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");

    input::write_targets(&["+1234567890", "+9876543210", "+1122334455"], &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["+1234567890", "+9876543210", "+1122334455"]);
}
