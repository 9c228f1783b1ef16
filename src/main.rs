//! taskstack - interactive console task tracker

use clap::Parser;
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use taskstack::{OutputFormat, Shell, ShellConfig, TaskstackError};

#[derive(Parser)]
#[command(name = "taskstack")]
#[command(version)]
#[command(about = "Console task tracker: newest task first, completed tasks in order", long_about = None)]
struct Cli {
    /// Settings file (defaults to <config dir>/taskstack/settings.json)
    #[arg(short, long, env = "TASKSTACK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format, overriding the settings file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show each task's creation time
    #[arg(long)]
    show_created: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "taskstack=debug,warn"
    } else {
        "taskstack=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.show_created {
        config.show_created_at = true;
    }
    if !config.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "Starting shell");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let service = match Shell::new(&config, stdin.lock(), stdout.lock()).run() {
        Ok(service) => service,
        Err(e) => fail(&e),
    };

    tracing::debug!(
        pending = service.store().pending_len(),
        completed = service.store().completed_len(),
        "Session ended"
    );
    Ok(())
}

/// Report a fatal error and exit with its status code.
fn fail(e: &TaskstackError) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    std::process::exit(e.exit_code());
}

fn load_config(path: Option<&std::path::Path>) -> Result<ShellConfig, TaskstackError> {
    match path {
        Some(path) => ShellConfig::load(path),
        None => match ShellConfig::default_path() {
            Some(path) => ShellConfig::load(&path),
            None => Ok(ShellConfig::default()),
        },
    }
}
