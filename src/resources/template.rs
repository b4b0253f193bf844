//! Template files that are written once and never overwritten.
use std::fs;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use super::{Resource, ResourceChange, ResourceState, io_error};
use crate::error::ResourceError;

/// A file at `path` that should contain `contents` when first created.
///
/// Any existing entry at `path` counts as correct, whatever it contains:
/// user edits to generated files always win.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    path: PathBuf,
    contents: String,
}

impl TemplateFile {
    /// Describe the template file `file_name` inside `dir`.
    #[must_use]
    pub fn new(dir: &Path, file_name: &str, contents: String) -> Self {
        Self {
            path: dir.join(file_name),
            contents,
        }
    }

    /// Full path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for TemplateFile {
    fn description(&self) -> String {
        format!("template {}", self.path.display())
    }

    fn current_state(&self) -> Result<ResourceState, ResourceError> {
        match fs::symlink_metadata(&self.path) {
            Ok(_) => Ok(ResourceState::Correct),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ResourceState::Missing),
            Err(e) => Err(io_error("inspect", &self.path)(e)),
        }
    }

    fn apply(&self) -> Result<ResourceChange, ResourceError> {
        // `create_new` refuses to open an existing file, so a file that
        // appears between the check and the write is still never clobbered.
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(ResourceChange::AlreadyCorrect);
            }
            Err(e) => return Err(io_error("create file", &self.path)(e)),
        };
        file.write_all(self.contents.as_bytes())
            .map_err(io_error("write file", &self.path))?;
        Ok(ResourceChange::Applied)
    }
}
