//! User-facing task operations.
//!
//! [`TaskService`] turns each user intent into one [`TaskStore`] call and
//! reports the result as an [`Outcome`] the presentation layer can render.

use std::fmt;

use tracing::info;

use crate::store::TaskStore;
use crate::task::Task;

/// Result of a user-facing operation.
///
/// "Not found" is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A task was created
    Added(Task),
    /// A single task to display
    Task(Task),
    /// A list of tasks to display (never empty)
    Tasks(Vec<Task>),
    /// The pending stack is empty
    NoPendingTasks,
    /// No task has been completed yet
    NoCompletedTasks,
    /// A task was moved to the completed queue
    Completed,
    /// A pending task was removed
    Deleted,
    /// No pending task has the requested id
    NotFound,
}

impl Outcome {
    /// Confirmation text for outcomes that are reported as a message.
    ///
    /// Outcomes that carry tasks for display return `None`, except
    /// [`Outcome::Added`] which is confirmed with a message.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Added(_) => Some("Task added successfully."),
            Outcome::Task(_) | Outcome::Tasks(_) => None,
            Outcome::NoPendingTasks => Some("No pending tasks."),
            Outcome::NoCompletedTasks => Some("No completed tasks."),
            Outcome::Completed => Some("Task marked as completed successfully."),
            Outcome::Deleted => Some("Task deleted successfully."),
            Outcome::NotFound => Some("Task not found."),
        }
    }

    /// Whether the requested action found something to act on or show.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Outcome::NoPendingTasks | Outcome::NoCompletedTasks | Outcome::NotFound
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Task(task) => write!(f, "{task}"),
            Outcome::Tasks(tasks) => {
                for (i, task) in tasks.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{task}")?;
                }
                Ok(())
            }
            other => write!(f, "{}", other.message().unwrap_or_default()),
        }
    }
}

/// Orchestrates user actions over a session-scoped [`TaskStore`].
#[derive(Debug, Default)]
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    /// Create a service over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing store.
    #[must_use]
    pub fn with_store(store: TaskStore) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Add a task with the given description.
    pub fn add_task(&mut self, description: &str) -> Outcome {
        let task = self.store.add(description);
        info!(id = task.id(), "Added task");
        Outcome::Added(task)
    }

    /// Show the task that should be handled next.
    #[must_use]
    pub fn show_next_task(&self) -> Outcome {
        match self.store.next() {
            Some(task) => Outcome::Task(task.clone()),
            None => Outcome::NoPendingTasks,
        }
    }

    /// Show every pending task, newest first.
    #[must_use]
    pub fn show_all_pending_tasks(&self) -> Outcome {
        let tasks = self.store.list_pending();
        if tasks.is_empty() {
            Outcome::NoPendingTasks
        } else {
            Outcome::Tasks(tasks)
        }
    }

    /// Show every completed task in completion order.
    #[must_use]
    pub fn show_all_completed_tasks(&self) -> Outcome {
        let tasks = self.store.list_completed();
        if tasks.is_empty() {
            Outcome::NoCompletedTasks
        } else {
            Outcome::Tasks(tasks)
        }
    }

    /// Complete the pending task with this id.
    pub fn mark_task_as_completed(&mut self, id: &str) -> Outcome {
        if self.store.complete(id) {
            info!(id, "Completed task");
            Outcome::Completed
        } else {
            Outcome::NotFound
        }
    }

    /// Delete the pending task with this id.
    pub fn delete_task(&mut self, id: &str) -> Outcome {
        if self.store.delete(id) {
            info!(id, "Deleted task");
            Outcome::Deleted
        } else {
            Outcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(outcome: Outcome) -> Task {
        match outcome {
            Outcome::Added(task) => task,
            other => panic!("expected Added, got {other:?}"),
        }
    }

    #[test]
    fn test_add_task_reports_success() {
        let mut service = TaskService::new();
        let outcome = service.add_task("read book");
        assert_eq!(outcome.message(), Some("Task added successfully."));
        assert!(outcome.is_success());
        let task = added(outcome);
        assert_eq!(task.description(), "read book");
        assert_eq!(service.store().pending_len(), 1);
    }

    #[test]
    fn test_show_next_task() {
        let mut service = TaskService::new();
        assert_eq!(service.show_next_task(), Outcome::NoPendingTasks);

        service.add_task("A");
        let b = added(service.add_task("B"));
        assert_eq!(service.show_next_task(), Outcome::Task(b));
    }

    #[test]
    fn test_show_all_pending_tasks() {
        let mut service = TaskService::new();
        assert_eq!(service.show_all_pending_tasks(), Outcome::NoPendingTasks);

        let a = added(service.add_task("A"));
        let b = added(service.add_task("B"));
        assert_eq!(service.show_all_pending_tasks(), Outcome::Tasks(vec![b, a]));
    }

    #[test]
    fn test_show_all_completed_tasks() {
        let mut service = TaskService::new();
        assert_eq!(
            service.show_all_completed_tasks(),
            Outcome::NoCompletedTasks
        );

        let a = added(service.add_task("A"));
        assert_eq!(service.mark_task_as_completed(a.id()), Outcome::Completed);

        match service.show_all_completed_tasks() {
            Outcome::Tasks(tasks) => {
                assert_eq!(tasks.len(), 1);
                assert_eq!(tasks[0].id(), a.id());
                assert!(tasks[0].is_completed());
            }
            other => panic!("expected Tasks, got {other:?}"),
        }
    }

    #[test]
    fn test_mark_task_as_completed_not_found() {
        let mut service = TaskService::new();
        let a = added(service.add_task("A"));
        assert_eq!(service.mark_task_as_completed("nope"), Outcome::NotFound);
        assert_eq!(service.mark_task_as_completed(a.id()), Outcome::Completed);
        assert_eq!(service.mark_task_as_completed(a.id()), Outcome::NotFound);
    }

    #[test]
    fn test_delete_task() {
        let mut service = TaskService::new();
        let a = added(service.add_task("A"));
        assert_eq!(service.delete_task(a.id()), Outcome::Deleted);
        assert_eq!(service.delete_task(a.id()), Outcome::NotFound);
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_delete_completed_task_not_found() {
        let mut service = TaskService::new();
        let a = added(service.add_task("A"));
        service.mark_task_as_completed(a.id());
        assert_eq!(service.delete_task(a.id()), Outcome::NotFound);
        assert_eq!(service.store().completed_len(), 1);
    }

    #[test]
    fn test_with_store_uses_existing_tasks() {
        let mut store = TaskStore::new();
        let a = store.add("existing");
        let service = TaskService::with_store(store);
        match service.show_next_task() {
            Outcome::Task(task) => assert_eq!(task.id(), a.id()),
            other => panic!("expected Task, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::NoPendingTasks.message(), Some("No pending tasks."));
        assert_eq!(
            Outcome::NoCompletedTasks.message(),
            Some("No completed tasks.")
        );
        assert_eq!(
            Outcome::Completed.message(),
            Some("Task marked as completed successfully.")
        );
        assert_eq!(Outcome::Deleted.message(), Some("Task deleted successfully."));
        assert_eq!(Outcome::NotFound.message(), Some("Task not found."));
        assert_eq!(Outcome::Tasks(vec![]).message(), None);
    }

    #[test]
    fn test_outcome_success_classification() {
        assert!(Outcome::Completed.is_success());
        assert!(Outcome::Deleted.is_success());
        assert!(!Outcome::NotFound.is_success());
        assert!(!Outcome::NoPendingTasks.is_success());
        assert!(!Outcome::NoCompletedTasks.is_success());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::NotFound.to_string(), "Task not found.");
        let task = Task::new("shown");
        assert_eq!(Outcome::Task(task.clone()).to_string(), task.to_string());
        let other = Task::new("second");
        assert_eq!(
            Outcome::Tasks(vec![task.clone(), other.clone()]).to_string(),
            format!("{task}\n{other}")
        );
    }
}
