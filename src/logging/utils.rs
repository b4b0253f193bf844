//! Helpers for the log file: location, timestamps, and ANSI stripping.
use std::fs;
use std::path::PathBuf;

/// Timestamp written in the log file header.
pub(super) const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp written in front of every log file line.
pub(super) const LINE_TIME_FORMAT: &str = "%H:%M:%S";

/// Remove terminal escape sequences so colored console text can be stored
/// as plain text.
///
/// A CSI sequence (`ESC [` ... final byte in `@`..=`~`) is dropped whole;
/// any other escape drops only `ESC` and the character after it.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next() == Some('[') {
            chars
                .by_ref()
                .take_while(|inner| !('@'..='~').contains(inner))
                .for_each(|_| {});
        }
    }
    out
}

/// Path of `<command>.log` in the fdmep cache folder, creating the folder
/// if needed.
///
/// The folder is `$XDG_CACHE_HOME/fdmep`, or `.cache/fdmep` under the home
/// directory (`HOME`, then `USERPROFILE`). Returns `None` when it cannot be
/// created; logging to file is then skipped.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    let cache_home = std::env::var_os("XDG_CACHE_HOME").map_or_else(
        || {
            std::env::var_os("HOME")
                .or_else(|| std::env::var_os("USERPROFILE"))
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
                .join(".cache")
        },
        PathBuf::from,
    );
    let dir = cache_home.join("fdmep");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{command}.log")))
}

/// Current UTC time rendered with a `chrono` format string.
pub(super) fn utc_now(format: &str) -> String {
    chrono::Utc::now().format(format).to_string()
}
