// ABOUTME: CLI argument parsing and command routing for aml-lab
//
// Provides command-line interface for:
// - Running a simulated scenario generation headless (run)
// - Printing the static result panels (show)
// - Listing the example scenarios (examples)
// - Launching TUI (tui, default)

pub mod run;
pub mod show;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::{CodeBlock, Panel};

/// AI AML Lab - turn an AML scenario idea into a detection prototype walkthrough
#[derive(Parser)]
#[command(name = "aml-lab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Simulate a scenario generation run and print every state
    Run(RunArgs),

    /// Print one of the result panels
    Show(ShowArgs),

    /// List the example scenarios
    Examples,
}

/// Arguments for the run command
#[derive(clap::Args)]
pub struct RunArgs {
    /// Scenario description
    #[arg(long, short, conflicts_with = "example", required_unless_present = "example")]
    pub scenario: Option<String>,

    /// Use one of the example scenarios (1-4)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub example: Option<u8>,

    /// Override the wait between progress samples
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

/// Arguments for the show command
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Panel to print
    #[arg(value_enum)]
    pub panel: Panel,

    /// Code block printed by the code panel
    #[arg(long, value_enum, default_value = "main")]
    pub block: CodeBlock,

    /// Scenario echoed by the overview panel
    #[arg(long)]
    pub scenario: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_launches_tui() {
        let cli = Cli::try_parse_from(["aml-lab"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_run_requires_a_scenario_source() {
        assert!(Cli::try_parse_from(["aml-lab", "run"]).is_err());
        assert!(Cli::try_parse_from(["aml-lab", "run", "--example", "5"]).is_err());
        assert!(
            Cli::try_parse_from(["aml-lab", "run", "--example", "1", "--scenario", "x"]).is_err()
        );
    }

    #[test]
    fn test_show_code_block_and_global_format() {
        let cli =
            Cli::try_parse_from(["aml-lab", "show", "code", "--block", "config", "--format", "json"])
                .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Show(args)) => {
                assert_eq!(args.panel, Panel::Code);
                assert_eq!(args.block, CodeBlock::Config);
            }
            _ => panic!("expected show command"),
        }
    }
}
