//! Terminal rendering for tasks, outcomes and the menu.

use std::io::Write;

use colored::Colorize;
use serde_json::json;

use crate::config::{OutputFormat, ShellConfig};
use crate::error::Result;
use crate::service::Outcome;
use crate::task::Task;

/// Menu entries in display order. The number is the selection key.
pub const MENU_ITEMS: &[(u8, &str)] = &[
    (1, "Add new task"),
    (2, "Show next task"),
    (3, "Show all pending tasks"),
    (4, "Show all completed tasks"),
    (5, "Mark task as completed"),
    (6, "Delete task"),
    (7, "Exit"),
];

/// Tone of a free-standing message, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Error,
    Plain,
}

/// Renders shell output according to [`ShellConfig`].
#[derive(Debug, Clone)]
pub struct View {
    format: OutputFormat,
    color: bool,
    show_created_at: bool,
}

impl View {
    #[must_use]
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            format: config.format,
            color: config.color,
            show_created_at: config.show_created_at,
        }
    }

    /// Print the numbered menu followed by the selection prompt.
    ///
    /// Nothing is written in JSON mode, so stdout stays a stream of JSON
    /// values.
    pub fn render_menu(&self, out: &mut impl Write, prompt: &str) -> Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "{}", self.paint_header("=== Task Manager ==="))?;
        for (key, label) in MENU_ITEMS {
            writeln!(out, "{key}. {label}")?;
        }
        write!(out, "{prompt}")?;
        out.flush()?;
        Ok(())
    }

    /// Print the question asked before reading a description or id.
    /// Skipped in JSON mode.
    pub fn render_question(&self, out: &mut impl Write, question: &str) -> Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(out, "{question}")?;
        out.flush()?;
        Ok(())
    }

    /// Print the result of a service operation.
    pub fn render_outcome(&self, out: &mut impl Write, outcome: &Outcome) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.render_outcome_text(out, outcome),
            OutputFormat::Json => Self::render_outcome_json(out, outcome),
        }
    }

    /// Print a message that did not come from the service.
    pub fn render_message(&self, out: &mut impl Write, message: &str, tone: Tone) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", self.paint(message, tone))?,
            OutputFormat::Json => {
                writeln!(out, "{}", json!({ "message": message }))?;
            }
        }
        Ok(())
    }

    fn render_outcome_text(&self, out: &mut impl Write, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Task(task) => {
                writeln!(out, "{}", self.paint_header("=== Task ==="))?;
                self.write_task_fields(out, task)?;
                writeln!(out, "{}", self.paint_header("============"))?;
            }
            Outcome::Tasks(tasks) => {
                writeln!(out, "{}", self.paint_header("=== Task List ==="))?;
                for task in tasks {
                    self.write_task_fields(out, task)?;
                    writeln!(out, "--------------------")?;
                }
                writeln!(out, "{}", self.paint_header("================="))?;
            }
            other => {
                let tone = if other.is_success() {
                    Tone::Success
                } else {
                    Tone::Notice
                };
                writeln!(out, "{}", self.paint(other.message().unwrap_or_default(), tone))?;
                if let Outcome::Added(task) = other {
                    writeln!(out, "ID: {}", task.id())?;
                }
            }
        }
        Ok(())
    }

    fn render_outcome_json(out: &mut impl Write, outcome: &Outcome) -> Result<()> {
        let value = match outcome {
            Outcome::Task(task) => serde_json::to_value(task)?,
            Outcome::Tasks(tasks) => serde_json::to_value(tasks)?,
            Outcome::Added(task) => json!({
                "message": outcome.message(),
                "task": task,
            }),
            other => json!({ "message": other.message() }),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    fn write_task_fields(&self, out: &mut impl Write, task: &Task) -> Result<()> {
        writeln!(out, "ID: {}", task.id())?;
        writeln!(out, "Description: {}", task.description())?;
        writeln!(
            out,
            "Completed: {}",
            if task.is_completed() { "Yes" } else { "No" }
        )?;
        if self.show_created_at {
            writeln!(out, "Created: {}", task.created_at().to_rfc3339())?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Success => text.green().to_string(),
            Tone::Notice => text.yellow().to_string(),
            Tone::Error => text.red().bold().to_string(),
            Tone::Plain => text.to_string(),
        }
    }

    fn paint_header(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
