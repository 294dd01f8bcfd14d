//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report hard-coded, user-facing strings
//! - `usages`: List existing localized key usages
//! - `frameworks`: List localization frameworks and which one is active
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Usages(cmd)) => cmd.common.verbose,
            Some(Command::Frameworks(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Flutter project directory (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Localization framework id (overrides config file and pubspec detection)
    #[arg(long, env = "DART_GLOT_FRAMEWORK")]
    pub framework: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style human readable report
    #[default]
    Text,
    /// JSON array on stdout
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct UsagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct FrameworksCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check Dart sources for hard-coded, user-facing strings
    Check(CheckCommand),
    /// List localized key usages recognized by the active framework
    Usages(UsagesCommand),
    /// List supported localization frameworks and which one is active
    Frameworks(FrameworksCommand),
    /// Initialize a new .dartglotrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::args::*;

    #[test]
    fn test_parse_check() {
        let args = Arguments::try_parse_from([
            "dart-glot", "check", "--path", "app", "--format", "json", "-v",
        ])
        .unwrap();
        let Some(Command::Check(cmd)) = args.command else {
            panic!("expected check command");
        };
        assert_eq!(cmd.common.path, Some(PathBuf::from("app")));
        assert_eq!(cmd.format, OutputFormat::Json);
        assert!(cmd.common.verbose);
    }

    #[test]
    fn test_default_format() {
        let args = Arguments::try_parse_from(["dart-glot", "usages"]).unwrap();
        let Some(Command::Usages(cmd)) = args.command else {
            panic!("expected usages command");
        };
        assert_eq!(cmd.format, OutputFormat::Text);
        assert!(cmd.common.path.is_none());
    }

    #[test]
    fn test_verbose_accessor() {
        let args = Arguments::try_parse_from(["dart-glot", "frameworks", "--verbose"]).unwrap();
        assert!(args.verbose());

        let args = Arguments::try_parse_from(["dart-glot", "init"]).unwrap();
        assert!(!args.verbose());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Arguments::try_parse_from(["dart-glot", "check", "--format", "xml"]).is_err());
    }
}
