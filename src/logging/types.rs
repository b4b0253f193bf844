//! Core logging types: status categories and the [`Log`] trait.

/// Category of a console status line.
///
/// Every message the scaffolder prints belongs to exactly one category; the
/// console formatter picks the icon and color from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Verbose detail, hidden on the console unless enabled via `FDMEP_LOG`.
    Debug,
    /// A major step of the workflow is starting.
    Step,
    /// Neutral information (reused directories, defaults applied, ...).
    Info,
    /// An action completed successfully.
    Success,
    /// Something was left untouched or looks suspicious.
    Warn,
    /// An operation failed or an input was rejected.
    Error,
}

impl LogLevel {
    /// Icon printed in front of console lines of this category.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Debug => "·",
            Self::Step => "»",
            Self::Info => "ℹ",
            Self::Success => "✔",
            Self::Warn => "▲",
            Self::Error => "✖",
        }
    }
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to the global tracing
/// subscriber; [`BufferedLog`](super::buffered::BufferedLog) keeps messages
/// in memory so callers (and tests) can inspect or suppress them. Scaffolding
/// code receives a `&dyn Log` and never writes to the console directly.
pub trait Log: Send + Sync {
    /// Log the start of a workflow step.
    fn step(&self, msg: &str);
    /// Log a completed action.
    fn success(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}
