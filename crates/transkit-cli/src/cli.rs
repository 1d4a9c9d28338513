//! Command line definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage transkit translation catalogs
#[derive(Debug, Parser)]
#[command(name = "transkit", version, about)]
pub struct Cli {
    /// Configuration file (defaults to $TRANSKIT_CONFIG_PATH, then ./transkit.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level in a human-readable format, ignoring the logging config
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage translation files
    #[command(subcommand)]
    Translations(TranslationsCommand),
}

#[derive(Debug, Subcommand)]
pub enum TranslationsCommand {
    /// Pull translations from the translations provider
    Pull {
        /// Provider branch to export
        branch: String,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
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
    fn test_parse_pull() {
        let cli = Cli::try_parse_from(["transkit", "translations", "pull", "main", "--force"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        match cli.command {
            Command::Translations(TranslationsCommand::Pull { branch, force }) => {
                assert_eq!(branch, "main");
                assert!(force);
            }
        }
    }

    #[test]
    fn test_parse_pull_with_config() {
        let cli = Cli::try_parse_from([
            "transkit",
            "--config",
            "/etc/transkit.yaml",
            "translations",
            "pull",
            "release-1.2",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/transkit.yaml")));
        match cli.command {
            Command::Translations(TranslationsCommand::Pull { branch, force }) => {
                assert_eq!(branch, "release-1.2");
                assert!(!force);
            }
        }
    }

    #[test]
    fn test_parse_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["transkit", "translations", "pull", "main", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_branch_is_required() {
        assert!(Cli::try_parse_from(["transkit", "translations", "pull"]).is_err());
    }
}
