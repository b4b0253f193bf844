//! Tracing subscriber setup: console formatter, file layer, and initialisation.
use std::fs;
use std::io::Write as _;
use std::sync::Mutex;

use super::types::LogLevel;
use super::utils::{HEADER_TIME_FORMAT, LINE_TIME_FORMAT, log_file_path, strip_ansi, utc_now};

/// Tracing target used for [`LogLevel::Step`] events.
pub(super) const STEP_TARGET: &str = "fdmep::step";
/// Tracing target used for [`LogLevel::Success`] events.
pub(super) const SUCCESS_TARGET: &str = "fdmep::success";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Map a tracing level and target back to the console category.
fn classify(level: tracing::Level, target: &str) -> LogLevel {
    match (level, target) {
        (tracing::Level::ERROR, _) => LogLevel::Error,
        (tracing::Level::WARN, _) => LogLevel::Warn,
        (tracing::Level::INFO, STEP_TARGET) => LogLevel::Step,
        (tracing::Level::INFO, SUCCESS_TARGET) => LogLevel::Success,
        (tracing::Level::INFO, _) => LogLevel::Info,
        _ => LogLevel::Debug,
    }
}

/// Render a console line for `msg` in the given category.
pub(super) fn render_console_line(level: LogLevel, msg: &str) -> String {
    let icon = level.icon();
    match level {
        LogLevel::Step => format!("\x1b[1;35m{icon} {msg}\x1b[0m"),
        LogLevel::Success => format!("\x1b[32m{icon} {msg}\x1b[0m"),
        LogLevel::Info => format!("\x1b[36m{icon} {msg}\x1b[0m"),
        LogLevel::Warn => format!("\x1b[33m{icon} {msg}\x1b[0m"),
        LogLevel::Error => format!("\x1b[31m{icon} {msg}\x1b[0m"),
        LogLevel::Debug => format!("\x1b[2m{icon} {msg}\x1b[0m"),
    }
}

/// A [`tracing_subscriber::Layer`] that appends all events to the persistent
/// log file with timestamps and ANSI codes stripped.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open (or create) the log file for `command`, write a run header, and
    /// return a new `FileLayer` ready to receive events.
    ///
    /// Returns `None` if the cache directory cannot be created or the file
    /// cannot be opened.
    pub(super) fn new(command: &str) -> Option<Self> {
        let path = log_file_path(command)?;
        let header = format!(
            "==========================================\n\
             fdmep {} {}\n\
             ==========================================\n",
            crate::version(),
            utc_now(HEADER_TIME_FORMAT),
        );
        fs::write(&path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(&path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        let level = classify(*metadata.level(), metadata.target());

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = strip_ansi(&extractor.message);
        let ts = utc_now(LINE_TIME_FORMAT);

        let line = match level {
            LogLevel::Step => format!("[{ts}] {} {msg}", level.icon()),
            LogLevel::Success => format!("[{ts}]     [ok] {msg}"),
            LogLevel::Info => format!("[{ts}]     {msg}"),
            LogLevel::Warn => format!("[{ts}]     [warn] {msg}"),
            LogLevel::Error => format!("[{ts}]     [error] {msg}"),
            LogLevel::Debug => format!("[{ts}]     [debug] {msg}"),
        };

        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits the scaffolder's
/// icon-prefixed console lines.
struct FdmepFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for FdmepFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = classify(*metadata.level(), metadata.target());

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);

        writeln!(writer, "{}", render_console_line(level, &extractor.message))
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Console output is filtered by `directive` (an
/// [`EnvFilter`](tracing_subscriber::EnvFilter) string such as `"info"` or
/// `"debug"`; invalid directives fall back to `info`). Warnings and errors go
/// to stderr, everything else to stdout. A file layer writes all events,
/// including `debug`, to `$XDG_CACHE_HOME/fdmep/<command>.log`.
///
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(directive: &str, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(FdmepFormatter)
        .with_writer(make_writer)
        .with_filter(console_filter);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
