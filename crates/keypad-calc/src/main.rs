//! keypad-calc binary
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                        # Interactive keypad
//! keypad-calc press 3 + 4 × 2 =      # Print the display after pressing buttons
//! keypad-calc press --trace 1 . 5    # Print every display refresh
//! keypad-calc -c calc.yaml config    # Show the effective configuration
//! ```

use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use keypad_calc::{
    cli::{run_press, run_show_config, Cli, Commands},
    config::AppConfig,
    error::AppResult,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            init_tracing(&config, false);
            run_tui(&config)
        }
        Some(Commands::Press(args)) => {
            init_tracing(&config, true);
            run_press(&args, &mut io::stdout().lock())
        }
        Some(Commands::Config) => {
            init_tracing(&config, true);
            run_show_config(&config, &mut io::stdout().lock())
        }
    }
}

#[cfg(feature = "tui")]
fn run_tui(config: &AppConfig) -> AppResult<()> {
    keypad_calc::tui::run(config)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &AppConfig) -> AppResult<()> {
    Err(keypad_calc::error::AppError::unsupported(
        "TUI not enabled. Rebuild with --features tui",
    ))
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. The TUI owns the terminal,
/// so without a log file it gets no output layer at all.
fn init_tracing(config: &AppConfig, stderr_allowed: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_file = config.log_file.as_ref().and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(file),
            Err(err) => {
                if stderr_allowed {
                    eprintln!("warning: cannot open log file {}: {err}", path.display());
                }
                None
            }
        }
    });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
    } else if stderr_allowed {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }
}
