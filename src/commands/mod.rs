//! Top-level subcommand orchestration.
pub mod create;
