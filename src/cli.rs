//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;
use crate::endpoint::Target;

#[derive(Debug, Parser)]
#[command(name = "clarity")]
#[command(about = "Terminal client for the Clarity code correction service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend to start with (overrides the config file).
    #[arg(short, long, global = true, value_enum)]
    pub target: Option<Target>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Interactive workbench (default)
    Shell,
    /// Check the selected backend once
    Health,
    /// Correct a file, or stdin when no file or "-" is given
    Correct {
        file: Option<PathBuf>,
    },
    /// Print every connectivity change until Ctrl+C
    Watch,
}

impl Cli {
    /// Fold flag overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(target) = self.target {
            config.endpoints.default_target = target;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["clarity"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["clarity", "health", "--target", "local", "--log-level", "debug"]);
        assert_eq!(cli.command, Some(Commands::Health));

        let mut config = ClientConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.endpoints.default_target, Target::Local);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_correct_takes_file() {
        let cli = Cli::parse_from(["clarity", "correct", "buggy.py"]);
        assert_eq!(cli.command, Some(Commands::Correct { file: Some("buggy.py".into()) }));
    }
}
