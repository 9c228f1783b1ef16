//! Task records and their lifecycle.
//!
//! - [`Task`] - A single tracked unit of work
//! - [`TaskState`] - Where a task sits in its two-state lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Task State
// ============================================================================

/// Lifecycle state of a task.
///
/// # State Transitions
///
/// - `Pending` -> `Completed`: Task marked complete
///
/// `Completed` is terminal. A pending task may also be deleted, which removes
/// it from the store rather than moving it to another state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskState {
    /// Task is waiting to be worked on
    #[default]
    Pending,
    /// Task is done
    Completed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::Pending => write!(f, "Pending"),
            TaskState::Completed => write!(f, "Completed"),
        }
    }
}

impl TaskState {
    /// Check if this state can transition to the target state.
    ///
    /// # Example
    ///
    /// ```
    /// use taskstack::TaskState;
    ///
    /// assert!(TaskState::Pending.can_transition_to(TaskState::Completed));
    /// assert!(!TaskState::Completed.can_transition_to(TaskState::Pending));
    /// ```
    #[must_use]
    pub fn can_transition_to(&self, target: TaskState) -> bool {
        matches!((self, target), (TaskState::Pending, TaskState::Completed))
    }

    /// Check if this state represents a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed)
    }
}

// ============================================================================
// Task
// ============================================================================

/// A single tracked unit of work.
///
/// Tasks are created through [`TaskStore::add`](crate::TaskStore::add), which
/// assigns the id and creation time. The only state change the store makes
/// afterwards is flipping `completed` once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: String,
    description: String,
    created_at: DateTime<Utc>,
    completed: bool,
}

impl Task {
    /// Create a pending task with a fresh UUID v4 id.
    ///
    /// # Example
    ///
    /// ```
    /// use taskstack::Task;
    ///
    /// let task = Task::new("write report");
    /// assert_eq!(task.description(), "write report");
    /// assert!(!task.is_completed());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            created_at: Utc::now(),
            completed: false,
        }
    }

    /// Unique identifier of the task.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// When the task was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the task has been completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else {
            TaskState::Pending
        }
    }

    /// Mark the task completed. Only the store calls this, when it moves the
    /// task into the completed collection.
    pub(crate) fn mark_completed(&mut self) {
        debug_assert!(self.state().can_transition_to(TaskState::Completed));
        self.completed = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task{{id='{}', description='{}', completed={}}}",
            self.id, self.description, self.completed
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // TaskState Tests
    // ========================================================================

    #[test]
    fn test_task_state_default() {
        assert_eq!(TaskState::default(), TaskState::Pending);
    }

    #[test]
    fn test_task_state_display() {
        assert_eq!(TaskState::Pending.to_string(), "Pending");
        assert_eq!(TaskState::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_task_state_transitions() {
        assert!(TaskState::Pending.can_transition_to(TaskState::Completed));
        assert!(!TaskState::Pending.can_transition_to(TaskState::Pending));
        assert!(!TaskState::Completed.can_transition_to(TaskState::Pending));
        assert!(!TaskState::Completed.can_transition_to(TaskState::Completed));
    }

    #[test]
    fn test_task_state_terminal() {
        assert!(TaskState::Completed.is_terminal());
        assert!(!TaskState::Pending.is_terminal());
    }

    // ========================================================================
    // Task Tests
    // ========================================================================

    #[test]
    fn test_new_task_is_pending() {
        let before = Utc::now();
        let task = Task::new("buy milk");
        assert_eq!(task.description(), "buy milk");
        assert!(!task.is_completed());
        assert_eq!(task.state(), TaskState::Pending);
        assert!(task.created_at() >= before);
        assert!(Uuid::parse_str(task.id()).is_ok());
    }

    #[test]
    fn test_new_task_accepts_empty_description() {
        let task = Task::new("");
        assert_eq!(task.description(), "");
    }

    #[test]
    fn test_set_description_keeps_identity() {
        let mut task = Task::new("draft");
        let id = task.id().to_string();
        let created = task.created_at();
        task.set_description("final");
        assert_eq!(task.description(), "final");
        assert_eq!(task.id(), id);
        assert_eq!(task.created_at(), created);
    }

    #[test]
    fn test_mark_completed() {
        let mut task = Task::new("ship it");
        task.mark_completed();
        assert!(task.is_completed());
        assert_eq!(task.state(), TaskState::Completed);
    }

    #[test]
    fn test_display() {
        let task = Task::new("call mom");
        assert_eq!(
            task.to_string(),
            format!("Task{{id='{}', description='call mom', completed=false}}", task.id())
        );
    }

    #[test]
    fn test_serde_roundtrip_preserves_fields() {
        let task = Task::new("json me");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
