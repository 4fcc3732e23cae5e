//! Task Entity
//!
//! A single entry of the signed-in user's task list. Tasks are owned by the
//! backend; the client only holds the copy returned by the last fetch.

use serde::{Deserialize, Serialize};

use super::{require, ValidationError};

/// Task progress, constrained to the three values the backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Every status, in dropdown order
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire label, also used as the dropdown text
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Parse a wire label. Anything else is not a status.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(TaskStatus::Pending),
            "In Progress" | "InProgress" => Some(TaskStatus::InProgress),
            "Completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// A task as listed by `/usertask/tasks`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Creation input typed into the new task form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    #[cfg(test)]
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// One page of the task list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    /// Absent when the backend does not paginate
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_labels() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_label(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_label("Archived"), None);
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            json!("In Progress")
        );
    }

    #[test]
    fn test_task_accepts_mongo_style_id() {
        let task: Task = serde_json::from_value(json!({
            "_id": "65f0c1",
            "title": "Write report",
            "description": "Q3 numbers",
            "status": "InProgress",
            "user": "alice@example.com"
        }))
        .unwrap();

        assert_eq!(task.id, "65f0c1");
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let parsed = serde_json::from_value::<Task>(json!({
            "id": "t1",
            "title": "T",
            "description": "D",
            "status": "Blocked"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_draft_validation_and_clear() {
        let mut draft = TaskDraft::new("T", "D");
        assert!(draft.validate().is_ok());

        draft.clear();
        assert_eq!(draft, TaskDraft::default());
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("title")));

        let no_description = TaskDraft::new("T", "");
        assert_eq!(
            no_description.validate(),
            Err(ValidationError::MissingField("description"))
        );
    }

    #[test]
    fn test_page_without_total() {
        let page: TaskPage = serde_json::from_value(json!({ "tasks": [] })).unwrap();
        assert!(page.tasks.is_empty());
        assert_eq!(page.total_pages, None);
    }
}
