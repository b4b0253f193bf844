//! Role-tagged directories (`Name.extension`, `Name.tab`, ...).
use std::fs;
use std::path::{Path, PathBuf};

use super::{Resource, ResourceChange, ResourceState, io_error};
use crate::config::RoleTag;
use crate::error::ResourceError;

/// A directory named `"{name}.{role}"` inside `parent`.
///
/// Container roles (extension, tab, panel) keep a single folder per level:
/// when the target is missing but another directory with the same suffix
/// exists, that directory is renamed to the target. Pushbutton folders are
/// only created or reused, except that a folder differing from the target
/// in letter case alone is renamed for every role.
#[derive(Debug, Clone)]
pub struct RoleDirectory {
    parent: PathBuf,
    name: String,
    role: RoleTag,
}

impl RoleDirectory {
    /// Describe the directory for `role` called `name` inside `parent`.
    #[must_use]
    pub fn new(parent: &Path, name: &str, role: RoleTag) -> Self {
        Self {
            parent: parent.to_path_buf(),
            name: name.to_string(),
            role,
        }
    }

    /// Directory name, e.g. `"MyTab.tab"`.
    #[must_use]
    pub fn target_name(&self) -> String {
        self.role.directory_name(&self.name)
    }

    /// Full path of the directory.
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.parent.join(self.target_name())
    }

    /// Entries of the parent directory as `(file name, is directory)`,
    /// sorted by name. Names that are not valid UTF-8 are skipped.
    ///
    /// Sorting only makes the choice between several rename candidates
    /// repeatable.
    fn siblings(&self) -> Result<Vec<(String, bool)>, ResourceError> {
        let entries =
            fs::read_dir(&self.parent).map_err(io_error("read directory", &self.parent))?;

        let mut siblings = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error("read directory", &self.parent))?;
            if let Some(file_name) = entry.file_name().to_str() {
                siblings.push((file_name.to_string(), entry.path().is_dir()));
            }
        }
        siblings.sort();
        Ok(siblings)
    }
}

impl Resource for RoleDirectory {
    fn description(&self) -> String {
        format!("{} folder {}", self.role, self.target().display())
    }

    fn current_state(&self) -> Result<ResourceState, ResourceError> {
        // Decided from the listing rather than by probing the target path:
        // on case-insensitive filesystems `tools.tab` would answer for
        // `Tools.tab` and never be renamed.
        let target_name = self.target_name();
        let siblings = self.siblings()?;

        if let Some((name, is_dir)) = siblings.iter().find(|(name, _)| *name == target_name) {
            return Ok(if *is_dir {
                ResourceState::Correct
            } else {
                ResourceState::Invalid {
                    reason: format!(
                        "{} exists but is not a directory",
                        self.parent.join(name).display()
                    ),
                }
            });
        }

        let folded = target_name.to_lowercase();
        let suffix = self.role.suffix();
        let dirs = || siblings.iter().filter(|(_, is_dir)| *is_dir).map(|(name, _)| name);

        let candidate = dirs().find(|name| name.to_lowercase() == folded).or_else(|| {
            self.role
                .is_container()
                .then(|| dirs().find(|name| name.ends_with(&suffix)))
                .flatten()
        });

        Ok(candidate.map_or(ResourceState::Missing, |name| ResourceState::Incorrect {
            current: name.clone(),
        }))
    }

    fn apply(&self) -> Result<ResourceChange, ResourceError> {
        let target = self.target();
        match self.current_state()? {
            ResourceState::Correct => Ok(ResourceChange::AlreadyCorrect),
            ResourceState::Missing => {
                fs::create_dir(&target).map_err(io_error("create directory", &target))?;
                Ok(ResourceChange::Applied)
            }
            ResourceState::Incorrect { current } => {
                let from = self.parent.join(current);
                fs::rename(&from, &target).map_err(io_error("rename directory", &from))?;
                Ok(ResourceChange::Applied)
            }
            ResourceState::Invalid { reason } => Err(ResourceError::InvalidState {
                resource: self.description(),
                reason,
            }),
        }
    }
}
