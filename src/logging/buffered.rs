//! In-memory logger that captures status lines instead of printing them.
use std::sync::Mutex;

use super::types::{Log, LogLevel};

/// A single captured log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Category the message was logged under.
    pub level: LogLevel,
    /// The message text, exactly as passed to the logger.
    pub message: String,
}

/// Implement the display methods of [`Log`] by buffering each message under
/// the corresponding [`LogLevel`].
macro_rules! buffer_log_methods {
    ($($method:ident => $level:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.push(LogLevel::$level, msg);
            }
        )+
    };
}

/// Logger that keeps every message in memory.
///
/// Nothing reaches the console. Use it to silence a run or to assert on the
/// exact status lines a workflow produced.
#[derive(Debug, Default)]
pub struct BufferedLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferedLog {
    /// Create an empty buffered logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: LogLevel, msg: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(LogEntry {
                level,
                message: msg.to_string(),
            });
        }
    }

    /// Return a copy of every captured entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Return the messages captured under `level`, oldest first.
    #[must_use]
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    /// Return `true` if any message under `level` contains `needle`.
    #[must_use]
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }
}

impl Log for BufferedLog {
    buffer_log_methods!(
        step => Step,
        success => Success,
        info => Info,
        debug => Debug,
        warn => Warn,
        error => Error,
    );
}
