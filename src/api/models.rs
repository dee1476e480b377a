use super::types::TaskStatus;
use serde::Deserialize;

/// Snapshot of one verification task, as returned by both the task
/// creation and the status endpoints. The client never mutates a task,
/// every poll yields a fresh snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub success: u64,
    #[serde(default)]
    pub failure: u64,
    /// Only populated once the task has been exported.
    pub result_url: Option<String>,
}

impl Task {
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn success(&self) -> u64 {
        self.success
    }

    pub const fn failure(&self) -> u64 {
        self.failure
    }

    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub const fn has_failed(&self) -> bool {
        matches!(self.status, TaskStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_task_is_terminal() {
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

        assert!(task.is_terminal());
        assert!(!task.has_failed());
        assert_eq!(task.result_url(), Some("https://example.com/r1.xlsx"));
        assert_eq!(task.success(), 10);
        assert_eq!(task.total(), 10);
    }

    #[test]
    fn test_in_progress_task_without_result_url() {
        let raw = r#"{"task_id": "t1", "user_id": "test", "status": "processing", "total": 10, "success": 0, "failure": 0}"#;
        let task: Task = serde_json::from_str(raw).unwrap();

        assert!(!task.is_terminal());
        assert!(task.result_url().is_none());
    }

    #[test]
    fn test_failed_task_needs_no_result_url() {
        let raw = r#"{"task_id": "t2", "status": "failed"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();

        assert!(task.is_terminal());
        assert!(task.has_failed());
        assert!(task.result_url().is_none());
    }

    #[test]
    fn test_task_requires_task_id() {
        let raw = r#"{"status": "processing"}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }
}
