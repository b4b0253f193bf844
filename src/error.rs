//! Domain-specific error types for the scaffolder.
//!
//! Internal modules return typed errors ([`ConfigError`], [`ResourceError`],
//! [`PromptError`]) while the command layer and `main` work with
//! [`anyhow::Error`], converting via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! FdmepError
//! ├── Config(ConfigError)     — reading, parsing, writing config.yaml
//! ├── Resource(ResourceError) — directory and template file operations
//! └── Prompt(PromptError)     — console input failures
//! ```

use thiserror::Error;

/// Top-level error type for the scaffolder.
///
/// Aggregates the domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] at the command boundary.
#[derive(Error, Debug)]
pub enum FdmepError {
    /// Configuration-related error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem error while scaffolding.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Console input error.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

/// Errors that arise from the `key = value` configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A key outside the fixed role-tag set was used.
    #[error("unknown key '{0}': must be one of extension, tab, panel, pushbutton")]
    UnknownKey(String),

    /// A line of the configuration could not be parsed.
    #[error("invalid config syntax at line {line}: {message}")]
    InvalidSyntax {
        /// 1-based line number.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },

    /// A key appears more than once.
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    /// A value contains characters other than letters, digits, spaces, or underscores.
    #[error("invalid name '{name}' for {key}: use only letters, numbers, spaces and _")]
    InvalidName {
        /// Key the value belongs to.
        key: String,
        /// The rejected value.
        name: String,
    },

    /// An I/O error occurred while reading or writing the config file.
    #[error("IO error accessing config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read or written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while creating directories and template files.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A filesystem call failed.
    #[error("failed to {action} {path}: {source}")]
    Io {
        /// What was being attempted (e.g. `"create directory"`).
        action: &'static str,
        /// Path the action was applied to.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A path exists but cannot be used as requested.
    #[error("invalid state for '{resource}': {reason}")]
    InvalidState {
        /// Name or description of the resource in the invalid state.
        resource: String,
        /// Human-readable explanation of why the state is invalid.
        reason: String,
    },
}

/// Errors that arise while reading answers from the user.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream ended before a valid answer was given.
    #[error("input closed before a valid answer was given")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_unknown_key_display() {
        let e = ConfigError::UnknownKey("button".to_string());
        assert_eq!(
            e.to_string(),
            "unknown key 'button': must be one of extension, tab, panel, pushbutton"
        );
    }

    #[test]
    fn config_error_invalid_syntax_display() {
        let e = ConfigError::InvalidSyntax {
            line: 3,
            message: "missing ' = ' separator".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid config syntax at line 3: missing ' = ' separator"
        );
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "config.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("config.yaml"));
        assert!(e.source().is_some());
    }

    #[test]
    fn resource_error_io_display() {
        let e = ResourceError::Io {
            action: "create directory",
            path: "MyTab.tab".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            e.to_string(),
            "failed to create directory MyTab.tab: permission denied"
        );
    }

    #[test]
    fn prompt_error_display() {
        assert_eq!(
            PromptError::InputClosed.to_string(),
            "input closed before a valid answer was given"
        );
    }

    #[test]
    fn fdmep_error_from_sub_errors() {
        let e: FdmepError = ConfigError::DuplicateKey("tab".to_string()).into();
        assert!(e.to_string().contains("Configuration error"));
        let e: FdmepError = PromptError::InputClosed.into();
        assert!(e.to_string().contains("Prompt error"));
        let e: FdmepError = ResourceError::InvalidState {
            resource: "x".to_string(),
            reason: "y".to_string(),
        }
        .into();
        assert!(e.to_string().contains("Resource error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<FdmepError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<ResourceError>();
        assert_send_sync::<PromptError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let _a: anyhow::Error = ConfigError::UnknownKey("x".to_string()).into();
        let _b: anyhow::Error = PromptError::InputClosed.into();
    }
}
