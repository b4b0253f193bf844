//! `fdmep` binary: parses arguments, sets up logging, and runs a subcommand.
use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser as _};

use fdmep_cli::cli::{Cli, Command};
use fdmep_cli::commands::create::{self, CreateOptions};
use fdmep_cli::config::settings::Settings;
use fdmep_cli::logging::{self, Logger};
use fdmep_cli::prompt::StdinPrompt;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    let Some(command) = args.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings::from_env();
    match command {
        Command::Create => {
            logging::init_subscriber(&settings.log_directive, "create");
            let log = Logger::new("create");
            let opts = CreateOptions {
                root: std::env::current_dir().context("failed to determine current directory")?,
                author: settings.author,
            };
            let outcome = create::run(&opts, &StdinPrompt, &log)?;
            log.debug(&format!("create finished: {outcome:?}"));
            if let Some(path) = log.log_path() {
                log.debug(&format!("log file: {}", path.display()));
            }
            Ok(())
        }
    }
}
