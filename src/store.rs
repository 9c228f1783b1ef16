//! Task storage.
//!
//! [`TaskStore`] owns every task and keeps two ordered collections:
//!
//! - **pending**: a stack. The most recently added task is the "next" one.
//! - **completed**: a queue. Tasks appear in the order they were completed.
//!
//! Pending tasks live in a `Vec` whose last element is the top of the stack,
//! so `complete` and `delete` can find a task anywhere in it with a linear
//! scan and take it out with an order-preserving `Vec::remove`.

use std::collections::VecDeque;

use tracing::debug;

use crate::task::Task;

/// Authoritative store for pending and completed tasks.
///
/// # Invariants
///
/// - Ids are unique across both collections.
/// - Every task is in exactly one collection.
/// - `is_completed()` is true exactly for tasks in the completed collection.
///
/// # Example
///
/// ```
/// use taskstack::TaskStore;
///
/// let mut store = TaskStore::new();
/// let a = store.add("first");
/// let b = store.add("second");
///
/// assert_eq!(store.next().map(|t| t.id()), Some(b.id()));
/// assert!(store.complete(a.id()));
/// assert_eq!(store.list_completed()[0].id(), a.id());
/// ```
#[derive(Debug, Default)]
pub struct TaskStore {
    /// Bottom of the stack first; `last()` is the newest pending task.
    pending: Vec<Task>,
    completed: VecDeque<Task>,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task and push it on top of the pending stack.
    ///
    /// Returns a copy of the stored task. Descriptions are not validated.
    pub fn add(&mut self, description: impl Into<String>) -> Task {
        let mut task = Task::new(description);
        while self.contains(task.id()) {
            task = Task::new(task.description().to_string());
        }

        debug!(id = task.id(), "Task added");
        self.pending.push(task.clone());
        task
    }

    /// The most recently added task that is still pending.
    #[must_use]
    pub fn next(&self) -> Option<&Task> {
        self.pending.last()
    }

    /// Snapshot of pending tasks, most recently added first.
    #[must_use]
    pub fn list_pending(&self) -> Vec<Task> {
        self.pending.iter().rev().cloned().collect()
    }

    /// Snapshot of completed tasks in completion order.
    #[must_use]
    pub fn list_completed(&self) -> Vec<Task> {
        self.completed.iter().cloned().collect()
    }

    /// Move a pending task to the completed queue.
    ///
    /// The whole pending stack is searched, not only its top. Returns `false`
    /// and leaves the store untouched when no pending task has this id,
    /// which includes tasks that are already completed.
    pub fn complete(&mut self, id: &str) -> bool {
        let Some(mut task) = self.take_pending(id) else {
            debug!(id, "Complete: no pending task with this id");
            return false;
        };

        task.mark_completed();
        debug!(id, "Task completed");
        self.completed.push_back(task);
        true
    }

    /// Remove a pending task permanently.
    ///
    /// Completed tasks are never searched or removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.take_pending(id) {
            Some(_) => {
                debug!(id, "Task deleted");
                true
            }
            None => {
                debug!(id, "Delete: no pending task with this id");
                false
            }
        }
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    /// True when the store holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.pending.iter().any(|t| t.id() == id) || self.completed.iter().any(|t| t.id() == id)
    }

    fn take_pending(&mut self, id: &str) -> Option<Task> {
        let index = self.pending.iter().position(|t| t.id() == id)?;
        Some(self.pending.remove(index))
    }
}

// ============================================================================
// Tests
// ============================================================================
