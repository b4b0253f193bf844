//! Runtime settings resolved from the environment.

/// Environment variable overriding the author written into the templates.
pub const AUTHOR_ENV: &str = "FDMEP_AUTHOR";
/// Environment variable holding the console log filter directive.
pub const LOG_ENV: &str = "FDMEP_LOG";
/// Author used when [`AUTHOR_ENV`] is unset or blank.
pub const DEFAULT_AUTHOR: &str = "Your Name";
/// Console log filter used when [`LOG_ENV`] is unset or blank.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Settings that do not live in `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Author name interpolated into the generated templates.
    pub author: String,
    /// `tracing_subscriber::EnvFilter` directive for console output.
    pub log_directive: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, falling back to defaults for
    /// missing or blank values.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            author: read(AUTHOR_ENV, DEFAULT_AUTHOR),
            log_directive: read(LOG_ENV, DEFAULT_LOG_DIRECTIVE),
        }
    }
}
