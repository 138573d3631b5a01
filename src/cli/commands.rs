//! Command definitions for the Pomodoro focus timer CLI.
//!
//! Uses clap derive macro for argument parsing. Running the binary with
//! no subcommand starts the interactive timer.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Focus - a terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "pomofocus",
    version,
    about = "Terminal Pomodoro timer with audio cues and motivational quotes",
    long_about = "Alternates a 25-minute work interval with a 5-minute break.\n\
                  Press Enter to start or pause, 'r' to reset, 'q' to quit.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute; omit to run the timer
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable audio cues
    #[arg(short, long, global = true)]
    pub mute: bool,

    /// Print state snapshots as JSON lines instead of formatted text
    #[arg(short, long, global = true)]
    pub json: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["pomofocus"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.mute);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_mute() {
        let cli = Cli::parse_from(["pomofocus", "--mute"]);
        assert!(cli.mute);
    }

    #[test]
    fn test_parse_json() {
        let cli = Cli::parse_from(["pomofocus", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn test_parse_verbose_short() {
        let cli = Cli::parse_from(["pomofocus", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["pomofocus", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
