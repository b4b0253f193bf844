//! Scaffolding steps: folder preparation and default file generation.
//!
//! Paths are always passed explicitly. Nothing here changes the process
//! working directory, so a failed step leaves no ambient state behind and
//! independent runs can proceed side by side.
pub mod templates;

use std::path::{Path, PathBuf};

use crate::config::RoleTag;
use crate::error::ResourceError;
use crate::logging::Log;
use crate::resources::directory::RoleDirectory;
use crate::resources::template::TemplateFile;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Explicit replacement for "current directory": a root plus the stack of
/// folders entered below it.
#[derive(Debug, Clone)]
pub struct ScaffoldCursor {
    root: PathBuf,
    stack: Vec<PathBuf>,
}

impl ScaffoldCursor {
    /// Start at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            stack: Vec::new(),
        }
    }

    /// The folder currently being worked in.
    #[must_use]
    pub fn current(&self) -> &Path {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Number of folders entered below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Enter `dir`, which becomes [`current`](Self::current).
    pub fn descend(&mut self, dir: PathBuf) {
        self.stack.push(dir);
    }

    /// Leave the current folder. Returns `false` when already at the root.
    pub fn ascend(&mut self) -> bool {
        self.stack.pop().is_some()
    }
}

/// Create, reuse, or rename the `role` folder called `name` inside `parent`
/// and return its path.
///
/// Failures are logged with the folder name before being returned; folders
/// created earlier in the run are left in place.
///
/// # Errors
///
/// Returns a [`ResourceError`] if the parent cannot be listed, the folder
/// cannot be created or renamed, or a non-directory occupies its name.
pub fn ensure_directory(
    parent: &Path,
    name: &str,
    role: RoleTag,
    log: &dyn Log,
) -> Result<PathBuf, ResourceError> {
    let dir = RoleDirectory::new(parent, name, role);
    let target_name = dir.target_name();

    if role.is_container() {
        log.step(&format!("Preparing {role} folder: {target_name}"));
    } else {
        log.step(&format!("Creating command: {target_name}"));
    }

    prepare(&dir, &target_name, log).inspect_err(|e| {
        log.error(&format!("Failed to prepare folder {target_name}: {e}"));
    })?;
    Ok(dir.target())
}

fn prepare(dir: &RoleDirectory, target_name: &str, log: &dyn Log) -> Result<(), ResourceError> {
    let state = dir.current_state()?;
    log.debug(&format!("{}: {state:?}", dir.description()));
    match state {
        ResourceState::Correct => {
            log.info(&format!("Folder already exists, entering: {target_name}"));
        }
        ResourceState::Incorrect { current } => {
            dir.apply()?;
            log.success(&format!("Renamed {current} → {target_name}"));
        }
        ResourceState::Missing => {
            dir.apply()?;
            log.success(&format!("Created folder: {target_name}"));
        }
        ResourceState::Invalid { .. } => {
            dir.apply()?;
        }
    }
    Ok(())
}

/// Write the default command files into `dir`, keeping any that exist.
///
/// # Errors
///
/// Returns a [`ResourceError`] as soon as one file cannot be written; the
/// failure is logged first.
pub fn write_defaults(
    dir: &Path,
    command: &str,
    author: &str,
    log: &dyn Log,
) -> Result<(), ResourceError> {
    log.step("Generating default command files");

    for (file_name, contents) in templates::default_files(command, author) {
        let file = TemplateFile::new(dir, file_name, contents);
        let change = file
            .needs_change()
            .and_then(|needed| {
                if needed {
                    file.apply()
                } else {
                    Ok(ResourceChange::AlreadyCorrect)
                }
            })
            .inspect_err(|e| log.error(&format!("Error creating {file_name}: {e}")))?;

        report_file(file_name, &change, log);
    }
    Ok(())
}

fn report_file(file_name: &str, change: &ResourceChange, log: &dyn Log) {
    match change {
        ResourceChange::Applied => log.success(&format!("File created: {file_name}")),
        ResourceChange::AlreadyCorrect => {
            log.warn(&format!("File already existed and was kept: {file_name}"));
        }
    }
}
