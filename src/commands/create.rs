//! The `create` subcommand.
use std::path::PathBuf;

use crate::config::{self, CONFIG_FILE_NAME, RoleTag, ScaffoldConfig};
use crate::error::FdmepError;
use crate::logging::Log;
use crate::prompt::{self, Prompt};
use crate::scaffold::{self, ScaffoldCursor};

/// Question asked before touching an already scaffolded project.
pub const UPDATE_QUESTION: &str = "A project already exists, update it? (y/n) [default: y]: ";

/// Inputs of the `create` command.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Folder that holds `config.yaml` and receives the extension folder.
    pub root: PathBuf,
    /// Author written into the generated files.
    pub author: String,
}

/// How a `create` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Every configured folder and file is in place.
    Completed,
    /// The user declined to update an existing project; nothing was changed.
    Cancelled,
    /// The configuration file could not be read; nothing was changed.
    Aborted,
}

/// Run the create command.
///
/// Without a configuration file the names are asked interactively and
/// saved first. With one, the user confirms before the existing project is
/// updated. The configuration is then walked in stored order, preparing one
/// folder per entry and the default files inside the command folder.
///
/// # Errors
///
/// Returns an error if the console closes, the configuration cannot be
/// saved, or a folder or file cannot be created. Work done before the
/// failure is kept.
pub fn run(
    opts: &CreateOptions,
    prompt: &dyn Prompt,
    log: &dyn Log,
) -> Result<CreateOutcome, FdmepError> {
    let path = config::config_path(&opts.root);

    if config::exists(&opts.root) {
        log.info("Using existing configuration");
        if !prompt::confirm(prompt, log, UPDATE_QUESTION)? {
            log.info("Operation cancelled by user");
            return Ok(CreateOutcome::Cancelled);
        }
    } else {
        log.step(&format!("Creating {CONFIG_FILE_NAME}"));
        let built = config::build_interactively(prompt, log)?;
        config::save(&path, &built)?;
        log.success(&format!("{CONFIG_FILE_NAME} saved"));
    }

    let config = match config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            log.error(&format!("Error reading {CONFIG_FILE_NAME}: {e}"));
            return Ok(CreateOutcome::Aborted);
        }
    };
    log.debug(&format!("{} entries in {}", config.entries().len(), path.display()));

    scaffold_from(&config, opts, log)?;

    log.success("pyRevit extension created/updated successfully");
    Ok(CreateOutcome::Completed)
}

/// Walk the configuration entries, keeping the cursor on the deepest
/// container folder.
fn scaffold_from(
    config: &ScaffoldConfig,
    opts: &CreateOptions,
    log: &dyn Log,
) -> Result<(), FdmepError> {
    let mut cursor = ScaffoldCursor::new(&opts.root);

    for entry in config.entries() {
        let dir = scaffold::ensure_directory(cursor.current(), &entry.name, entry.role, log)?;
        cursor.descend(dir);

        if entry.role == RoleTag::Pushbutton {
            scaffold::write_defaults(cursor.current(), &entry.name, &opts.author, log)?;
            cursor.ascend();
        }

        log.info(&entry.to_string());
    }

    log.debug(&format!("finished at depth {}", cursor.depth()));
    Ok(())
}
