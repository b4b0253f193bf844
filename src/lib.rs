//! pyRevit extension scaffolder.
//!
//! Builds the `Name.extension/Name.tab/Name.panel/Name.pushbutton` folder
//! chain and the default `script.py` / `bundle.yaml` files, driven by a
//! small `key = value` file (`config.yaml`) that is asked for interactively
//! on the first run.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: parse, validate, save, and interactively build the configuration
//! - **[`resources`]**: idempotent `check + apply` primitives (role folders, template files)
//! - **[`scaffold`]**: logged scaffolding steps and the generated file contents
//! - **[`commands`]**: top-level subcommand orchestration (`create`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod resources;
pub mod scaffold;

/// Version string reported by `--version` and written to log headers.
#[must_use]
pub fn version() -> &'static str {
    option_env!("FDMEP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
