// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project folder and a fluent builder
// so each integration test can set up an isolated scaffold root without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use fdmep_cli::commands::create::{self, CreateOptions, CreateOutcome};
use fdmep_cli::config::CONFIG_FILE_NAME;
use fdmep_cli::error::FdmepError;
use fdmep_cli::logging::BufferedLog;
use fdmep_cli::prompt::ScriptedPrompt;

/// Author used by every integration run.
pub const TEST_AUTHOR: &str = "Test Author";

/// An isolated project folder backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory acting as the working directory of a run.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new, empty project folder.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        Self { root }
    }

    /// Path to the project folder.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path of `relative` inside the project folder.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Run `create` in the project folder, answering with `answers`.
    ///
    /// Returns the outcome together with the prompt and log so tests can
    /// inspect which questions were asked and what was reported.
    pub fn run_create(
        &self,
        answers: &[&str],
    ) -> (Result<CreateOutcome, FdmepError>, ScriptedPrompt, BufferedLog) {
        let prompt = ScriptedPrompt::new(answers.iter().copied());
        let log = BufferedLog::new();
        let opts = CreateOptions {
            root: self.root.path().to_path_buf(),
            author: TEST_AUTHOR.to_string(),
        };
        let result = create::run(&opts, &prompt, &log);
        (result, prompt, log)
    }

    /// Sorted names of the entries directly inside `relative`.
    pub fn list(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path(relative))
            .expect("read dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Every path below the project folder, relative and sorted.
    pub fn snapshot_tree(&self) -> Vec<String> {
        fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in std::fs::read_dir(dir).expect("read dir") {
                let path = entry.expect("dir entry").path();
                let relative = path
                    .strip_prefix(base)
                    .expect("path below base")
                    .to_string_lossy()
                    .replace('\\', "/");
                out.push(relative);
                if path.is_dir() {
                    walk(base, &path, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self.root.path(), self.root.path(), &mut out);
        out.sort();
        out
    }
}

/// Fluent builder for [`IntegrationTestContext`].
///
/// Allows individual tests to pre-populate the project folder before a run.
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context backed by an empty folder.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` as the project's configuration file.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.ctx.path(CONFIG_FILE_NAME), content).expect("write config file");
        self
    }

    /// Create the directory `relative` (and its parents).
    pub fn with_dir(self, relative: &str) -> Self {
        std::fs::create_dir_all(self.ctx.path(relative)).expect("create dir");
        self
    }

    /// Write `content` to the file `relative`, creating parent directories.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.ctx.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create file parent");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
