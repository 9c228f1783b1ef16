//! Interactive menu loop.
//!
//! [`Shell`] reads selections and free-form lines from any [`BufRead`] and
//! writes through a [`View`], so it runs the same against stdin/stdout and
//! against in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::config::ShellConfig;
use crate::error::{Result, TaskstackError};
use crate::service::{Outcome, TaskService};
use crate::view::{Tone, View};

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    ShowNext,
    ShowPending,
    ShowCompleted,
    CompleteTask,
    DeleteTask,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = TaskstackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddTask),
            "2" => Ok(MenuChoice::ShowNext),
            "3" => Ok(MenuChoice::ShowPending),
            "4" => Ok(MenuChoice::ShowCompleted),
            "5" => Ok(MenuChoice::CompleteTask),
            "6" => Ok(MenuChoice::DeleteTask),
            "7" => Ok(MenuChoice::Exit),
            other => Err(TaskstackError::invalid_selection(other)),
        }
    }
}

/// The interactive session: owns the service for its whole lifetime.
pub struct Shell<R, W> {
    service: TaskService,
    view: View,
    prompt: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over a fresh, empty task service.
    pub fn new(config: &ShellConfig, input: R, output: W) -> Self {
        Self::with_service(TaskService::new(), config, input, output)
    }

    /// Create a shell over an existing service.
    pub fn with_service(service: TaskService, config: &ShellConfig, input: R, output: W) -> Self {
        Self {
            service,
            view: View::new(config),
            prompt: config.prompt.clone(),
            input,
            output,
        }
    }

    /// Run until the user exits or input ends, then hand back the service.
    ///
    /// # Errors
    ///
    /// Returns [`TaskstackError::Io`] if reading or writing the terminal fails.
    pub fn run(mut self) -> Result<TaskService> {
        loop {
            self.view.render_menu(&mut self.output, &self.prompt)?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving shell");
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) if e.is_recoverable() => {
                    debug!("{}", e);
                    self.view.render_message(
                        &mut self.output,
                        "Invalid option. Please try again.",
                        Tone::Error,
                    )?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if choice == MenuChoice::Exit {
                break;
            }
            if let Some(outcome) = self.dispatch(choice)? {
                self.view.render_outcome(&mut self.output, &outcome)?;
            } else {
                break;
            }
        }

        self.view
            .render_message(&mut self.output, "Goodbye!", Tone::Plain)?;
        self.output.flush()?;
        Ok(self.service)
    }

    /// Execute one selection. Returns `None` when input ended mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Option<Outcome>> {
        let outcome = match choice {
            MenuChoice::AddTask => {
                let Some(description) = self.ask("Enter the task description:")? else {
                    return Ok(None);
                };
                self.service.add_task(&description)
            }
            MenuChoice::ShowNext => self.service.show_next_task(),
            MenuChoice::ShowPending => self.service.show_all_pending_tasks(),
            MenuChoice::ShowCompleted => self.service.show_all_completed_tasks(),
            MenuChoice::CompleteTask => {
                let Some(id) = self.ask("Enter the ID of the task to complete:")? else {
                    return Ok(None);
                };
                self.service.mark_task_as_completed(&id)
            }
            MenuChoice::DeleteTask => {
                let Some(id) = self.ask("Enter the ID of the task to delete:")? else {
                    return Ok(None);
                };
                self.service.delete_task(&id)
            }
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(outcome))
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.view.render_question(&mut self.output, question)?;
        self.read_line()
    }

    /// Next input line without its line terminator, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line ends up as an invalid option or an unknown id.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
