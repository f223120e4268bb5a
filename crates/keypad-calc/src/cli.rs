//! Command-line interface

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, Verbosity};
use crate::controller::Controller;
use crate::core::{DisplaySnapshot, RecordingDisplay};
use crate::error::AppResult;
use crate::input::parse_script;

/// keypad-calc: four-function calculator with a terminal keypad
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file
    #[arg(short, long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Loads the configuration file and applies command-line overrides
    pub fn resolve_config(&self) -> AppResult<AppConfig> {
        let config = AppConfig::load_or_default(self.config.as_deref())?;
        Ok(config.with_verbosity(Verbosity::from_occurrences(self.verbose)))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive keypad
    Tui,

    /// Press buttons non-interactively and print the display
    ///
    /// Tokens are button labels: digits, ".", "+", "-", "×" (or "*", "x"),
    /// "÷" (or "/"), "=", "AC", "DEL". Digit runs like "12" press each digit.
    Press(PressArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the press command
#[derive(Args, Debug, Default)]
pub struct PressArgs {
    /// Print every display refresh, not only the last
    #[arg(long)]
    pub trace: bool,

    /// Print display snapshots as JSON
    #[arg(long)]
    pub json: bool,

    /// Buttons to press, in order
    #[arg(required = true, allow_hyphen_values = true)]
    pub buttons: Vec<String>,
}

/// Runs a button script and writes the resulting display to `out`
pub fn run_press(args: &PressArgs, out: &mut impl Write) -> AppResult<()> {
    let mut controller = Controller::new(RecordingDisplay::new());
    controller.dispatch_all(parse_script(&args.buttons));
    let (_, display) = controller.into_parts();

    let frames = display.frames();
    let shown: &[DisplaySnapshot] = if args.trace {
        frames
    } else {
        &frames[frames.len().saturating_sub(1)..]
    };

    if args.json {
        if args.trace {
            serde_json::to_writer_pretty(&mut *out, shown)?;
        } else if let Some(last) = shown.last() {
            serde_json::to_writer(&mut *out, last)?;
        }
        writeln!(out)?;
        return Ok(());
    }

    for (i, frame) in shown.iter().enumerate() {
        if args.trace {
            writeln!(out, "[{i}] {:>24} | {}", frame.pending, frame.current)?;
        } else {
            writeln!(out, "{}", frame.pending)?;
            writeln!(out, "{}", frame.current)?;
        }
    }
    Ok(())
}

/// Writes the configuration as YAML
pub fn run_show_config(config: &AppConfig, out: &mut impl Write) -> AppResult<()> {
    write!(out, "{}", config.to_yaml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(buttons: &[&str], trace: bool, json: bool) -> String {
        let args = PressArgs {
            trace,
            json,
            buttons: buttons.iter().map(|s| (*s).to_string()).collect(),
        };
        let mut out = Vec::new();
        run_press(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ===== Argument parsing =====

    #[test]
    fn test_cli_parses_press() {
        let cli = Cli::try_parse_from(["keypad-calc", "press", "3", "+", "4", "="]).unwrap();
        match cli.command {
            Some(Commands::Press(args)) => assert_eq!(args.buttons, ["3", "+", "4", "="]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_accepts_minus_button() {
        let cli = Cli::try_parse_from(["keypad-calc", "press", "9", "-", "4", "="]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Press(_))));
    }

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["keypad-calc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["keypad-calc", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.resolve_config().unwrap().log_filter, "trace");
    }

    #[test]
    fn test_cli_press_requires_buttons() {
        assert!(Cli::try_parse_from(["keypad-calc", "press"]).is_err());
    }

    // ===== press =====

    #[test]
    fn test_press_prints_final_display() {
        assert_eq!(press(&["3", "+", "4", "×", "2", "="], false, false), "\n14\n");
    }

    #[test]
    fn test_press_prints_pending_line() {
        assert_eq!(press(&["12", "÷"], false, false), "12 ÷\n0\n");
    }

    #[test]
    fn test_press_trace_prints_every_frame() {
        let out = press(&["5", "DEL"], true, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[0]"));
        assert!(lines[1].ends_with("| 5"));
        assert!(lines[2].ends_with("| 0"));
    }

    #[test]
    fn test_press_json_last_frame() {
        let out = press(&["1", "0", "/", "0", "="], false, true);
        let snap: DisplaySnapshot = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(snap.current, "Error: Division by zero");
        assert_eq!(snap.pending, "");
    }

    #[test]
    fn test_press_json_trace() {
        let out = press(&["2", "+"], true, true);
        let frames: Vec<DisplaySnapshot> = serde_json::from_str(&out).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].pending, "2 +");
    }

    // ===== config =====

    #[test]
    fn test_show_config_is_yaml() {
        let mut out = Vec::new();
        run_show_config(&AppConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("log_filter: warn"));
        assert_eq!(AppConfig::from_yaml(&text).unwrap(), AppConfig::default());
    }
}
