//! Command-line surface.
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the pyRevit extension scaffolder.
#[derive(Parser, Debug)]
#[command(
    name = "fdmep",
    about = "Scaffold pyRevit extensions from a small key = value config",
    version = crate::version()
)]
pub struct Cli {
    /// Subcommand to run; help is printed when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create or update the extension folders in the current directory
    #[command(alias = "install")]
    Create,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create() {
        let cli = Cli::parse_from(["fdmep", "create"]);
        assert_eq!(cli.command, Some(Command::Create));
    }

    #[test]
    fn install_is_an_alias_of_create() {
        let cli = Cli::parse_from(["fdmep", "install"]);
        assert_eq!(cli.command, Some(Command::Create));
    }

    #[test]
    fn no_subcommand_is_accepted() {
        let cli = Cli::parse_from(["fdmep"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = Cli::try_parse_from(["fdmep", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(crate::version()));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["fdmep", "delete"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}
