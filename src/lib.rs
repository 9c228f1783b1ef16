//! taskstack - console task tracker
//!
//! Tasks are handled newest-first: the most recently added pending task is
//! always the "next" one, while completed tasks are kept in the order they
//! were finished.
//!
//! # Architecture
//!
//! - [`task`] - The task record and its two-state lifecycle
//! - [`store`] - Pending stack and completed queue with id-based lookup
//! - [`service`] - User-facing operations returning renderable outcomes
//! - [`shell`] - Interactive numbered-menu loop
//! - [`view`] - Text and JSON rendering
//! - [`config`] - Shell settings
//! - [`error`] - Custom error types and handling
//!
//! # Example
//!
//! ```
//! use taskstack::{Outcome, TaskService};
//!
//! let mut service = TaskService::new();
//! service.add_task("answer email");
//! service.add_task("fix the build");
//!
//! match service.show_next_task() {
//!     Outcome::Task(task) => assert_eq!(task.description(), "fix the build"),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod shell;
pub mod store;
pub mod task;
pub mod view;

// Re-export commonly used types
pub use config::{OutputFormat, ShellConfig};
pub use error::{Result, TaskstackError};
pub use service::{Outcome, TaskService};
pub use shell::{MenuChoice, Shell};
pub use store::TaskStore;
pub use task::{Task, TaskState};
pub use view::View;
