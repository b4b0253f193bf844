//! Console logger backed by the global tracing subscriber.
use std::path::PathBuf;

use super::subscriber::{STEP_TARGET, SUCCESS_TARGET};
use super::types::Log;
use super::utils::log_file_path;

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Logger that turns each status line into a [`tracing`] event.
///
/// The console formatter and the persistent log file are owned by the
/// subscriber installed with [`init_subscriber`](super::init_subscriber);
/// this type only decides the level and target of each event.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Remembers where the log file lives so it can be reported at the end of
    /// a run; the file itself is created by the subscriber's file layer.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Log the start of a workflow step.
    pub fn step(&self, msg: &str) {
        tracing::info!(target: STEP_TARGET, "{msg}");
    }

    /// Log a completed action.
    pub fn success(&self, msg: &str) {
        tracing::info!(target: SUCCESS_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless `FDMEP_LOG` enables
    /// it; always written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

impl Log for Logger {
    forward_log_methods!(step, success, info, debug, warn, error);
}
