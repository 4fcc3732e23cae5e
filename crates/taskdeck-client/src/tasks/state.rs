//! Task List State

use crate::domain::{PageCursor, Task, TaskDraft};

/// Operations that can fail and own the dashboard's error slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOp {
    Fetch,
    Create,
    SetStatus,
    Delete,
}

impl TaskOp {
    /// Shown when the backend gave no message of its own
    pub fn fallback_message(&self) -> &'static str {
        match self {
            TaskOp::Fetch => "Failed to fetch tasks",
            TaskOp::Create => "Failed to create task",
            TaskOp::SetStatus => "Failed to update task",
            TaskOp::Delete => "Failed to delete task",
        }
    }
}

/// Error currently shown next to the task table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpError {
    pub op: TaskOp,
    pub message: String,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// Last page the backend returned, replaced wholesale on every fetch
    pub tasks: Vec<Task>,
    pub cursor: PageCursor,
    /// Bumped by every successful fetch, even one returning an identical page
    pub fetched: u64,
    pub draft: TaskDraft,
    /// At least one fetch is in flight
    pub loading: bool,
    pub error: Option<OpError>,
}

impl TaskListState {
    pub(crate) fn set_error(&mut self, op: TaskOp, message: String) {
        self.error = Some(OpError { op, message });
    }

    /// A success only clears an error left by the same kind of operation.
    pub(crate) fn clear_error(&mut self, op: TaskOp) {
        if self.error.as_ref().is_some_and(|e| e.op == op) {
            self.error = None;
        }
    }
}
