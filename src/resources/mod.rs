//! Idempotent filesystem primitives (check + apply pattern).
pub mod directory;
pub mod template;

use crate::error::ResourceError;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use fdmep_cli::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let rename = ResourceState::Incorrect { current: "Old.tab".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert!(matches!(rename, ResourceState::Incorrect { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist yet.
    Missing,
    /// Resource exists and can be used as is.
    Correct,
    /// A stand-in exists under another name and should be brought in line.
    Incorrect {
        /// The name currently on disk.
        current: String,
    },
    /// The path is taken by something that cannot be used (e.g. a file where
    /// a directory is expected).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
}

/// Unified interface for resources that can be checked and applied.
///
/// All resources follow the same check-then-apply pattern:
///
/// ```ignore
/// match resource.current_state()? {
///     ResourceState::Correct => { /* reuse */ }
///     _ => { resource.apply()?; }
/// }
/// ```
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined, e.g. because the
    /// parent directory cannot be listed.
    fn current_state(&self) -> Result<ResourceState, ResourceError>;

    /// Bring the resource to its desired state.
    ///
    /// Never destroys existing content: correct resources are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidState`] for an [`ResourceState::Invalid`]
    /// resource and [`ResourceError::Io`] if a filesystem call fails.
    fn apply(&self) -> Result<ResourceChange, ResourceError>;

    /// Determine if the resource needs to be changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`current_state`](Self::current_state).
    fn needs_change(&self) -> Result<bool, ResourceError> {
        Ok(matches!(
            self.current_state()?,
            ResourceState::Missing | ResourceState::Incorrect { .. }
        ))
    }
}

/// Build a [`ResourceError::Io`] for `path`.
pub(crate) fn io_error<'a>(
    action: &'static str,
    path: &'a std::path::Path,
) -> impl FnOnce(std::io::Error) -> ResourceError + 'a {
    move |source| ResourceError::Io {
        action,
        path: path.display().to_string(),
        source,
    }
}
