#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `create` command.
//!
//! Each test drives [`create::run`](fdmep_cli::commands::create::run) end to
//! end in its own temporary folder, with scripted answers in place of a
//! terminal.

mod common;

use common::*;
use fdmep_cli::commands::create::{CreateOutcome, UPDATE_QUESTION};
use fdmep_cli::error::{FdmepError, PromptError};
use fdmep_cli::logging::LogLevel;

const DEFAULT_COMMAND: &str = "MyExtension.extension/MyTab.tab/MyPanel.panel/MyCommand.pushbutton";

// ---------------------------------------------------------------------------
// First run: no configuration yet
// ---------------------------------------------------------------------------

/// Accepting every default produces the full default folder chain with
/// exactly the two generated files.
#[test]
fn defaults_produce_expected_layout() {
    let ctx = IntegrationTestContext::new();
    let (result, _, _) = ctx.run_create(&["", "", "", ""]);

    assert_eq!(result.unwrap(), CreateOutcome::Completed);
    assert_eq!(ctx.list(DEFAULT_COMMAND), vec!["bundle.yaml", "script.py"]);

    let script = std::fs::read_to_string(ctx.path(&format!("{DEFAULT_COMMAND}/script.py"))).unwrap();
    assert!(script.contains("__title__ = \"MyCommand\""));
    assert!(script.contains("__version__ = \"1.0\""));
    assert!(script.contains(&format!("__author__ = \"{TEST_AUTHOR}\"")));

    let bundle =
        std::fs::read_to_string(ctx.path(&format!("{DEFAULT_COMMAND}/bundle.yaml"))).unwrap();
    assert!(bundle.contains("en_us: MyCommand"));
}

/// The first run writes the configuration file in fixed key order.
#[test]
fn first_run_saves_configuration() {
    let ctx = IntegrationTestContext::new();
    let (result, prompt, _) = ctx.run_create(&["Tools", "Main", "Edit", "Align Walls"]);

    result.unwrap();
    assert_eq!(
        std::fs::read_to_string(ctx.path("config.yaml")).unwrap(),
        "extension = Tools\ntab = Main\npanel = Edit\npushbutton = Align Walls\n"
    );
    assert_eq!(prompt.questions().len(), 4);
    assert!(
        ctx.path("Tools.extension/Main.tab/Edit.panel/Align Walls.pushbutton/script.py")
            .is_file()
    );
}

/// Names with characters outside letters, digits, spaces, and `_` are
/// rejected and asked again.
#[test]
fn invalid_name_is_asked_again() {
    let ctx = IntegrationTestContext::new();
    let (result, prompt, log) = ctx.run_create(&["bad@name", "Good_Name", "", "", ""]);

    result.unwrap();
    let questions = prompt.questions();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0], questions[1]);
    assert!(log.contains(LogLevel::Error, "letters, numbers, spaces and _"));
    assert!(ctx.path("Good_Name.extension").is_dir());
    assert!(!ctx.path("bad@name.extension").exists());
}

/// Closing the input half way aborts before anything is written.
#[test]
fn closed_input_aborts_first_run() {
    let ctx = IntegrationTestContext::new();
    let (result, _, _) = ctx.run_create(&["Tools", "Main"]);

    assert!(matches!(
        result,
        Err(FdmepError::Prompt(PromptError::InputClosed))
    ));
    assert!(ctx.snapshot_tree().is_empty());
}

// ---------------------------------------------------------------------------
// Later runs: existing configuration
// ---------------------------------------------------------------------------

/// Declining the update leaves every file untouched.
#[test]
fn negative_confirmation_changes_nothing() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = Tools\ntab = Main\npanel = Edit\npushbutton = Run\n")
        .with_dir("Old.extension")
        .build();
    let before = ctx.snapshot_tree();

    for answer in ["n", "NÃO", "nao", "No"] {
        let (result, prompt, log) = ctx.run_create(&[answer]);
        assert_eq!(result.unwrap(), CreateOutcome::Cancelled, "answer: {answer}");
        assert_eq!(prompt.questions(), vec![UPDATE_QUESTION.to_string()]);
        assert!(log.contains(LogLevel::Info, "cancelled"));
    }

    assert_eq!(ctx.snapshot_tree(), before);
}

/// Running twice yields the same tree as running once.
#[test]
fn rerun_is_idempotent() {
    let ctx = IntegrationTestContext::new();
    ctx.run_create(&["", "", "", ""]).0.unwrap();
    let first = ctx.snapshot_tree();

    let (result, _, log) = ctx.run_create(&["y"]);

    assert_eq!(result.unwrap(), CreateOutcome::Completed);
    assert_eq!(ctx.snapshot_tree(), first);
    assert_eq!(log.messages(LogLevel::Warn).len(), 2);
    assert!(log.contains(LogLevel::Info, "already exists, entering: MyExtension.extension"));
}

/// Edited template files survive a rerun.
#[test]
fn existing_files_are_kept() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = A\ntab = B\npanel = C\npushbutton = D\n")
        .with_file("A.extension/B.tab/C.panel/D.pushbutton/script.py", "print('mine')\n")
        .build();

    ctx.run_create(&[""]).0.unwrap();

    assert_eq!(
        std::fs::read_to_string(ctx.path("A.extension/B.tab/C.panel/D.pushbutton/script.py"))
            .unwrap(),
        "print('mine')\n"
    );
    assert!(
        ctx.path("A.extension/B.tab/C.panel/D.pushbutton/bundle.yaml")
            .is_file()
    );
}

/// A renamed configuration value renames the existing folder instead of
/// creating a second one, keeping its contents.
#[test]
fn renamed_extension_folder_is_moved() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = NewName\ntab = MyTab\npanel = MyPanel\npushbutton = MyCommand\n")
        .with_file("OldName.extension/MyTab.tab/notes.txt", "keep")
        .build();

    let (result, _, log) = ctx.run_create(&["sim"]);

    result.unwrap();
    assert_eq!(ctx.list(""), vec!["NewName.extension", "config.yaml"]);
    assert!(ctx.path("NewName.extension/MyTab.tab/notes.txt").is_file());
    assert!(log.contains(
        LogLevel::Success,
        "Renamed OldName.extension → NewName.extension"
    ));
}

/// Additional command folders next to the configured one are left alone.
#[test]
fn sibling_commands_are_not_renamed() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = A\ntab = B\npanel = C\npushbutton = Second\n")
        .with_dir("A.extension/B.tab/C.panel/First.pushbutton")
        .build();

    ctx.run_create(&["y"]).0.unwrap();

    assert_eq!(
        ctx.list("A.extension/B.tab/C.panel"),
        vec!["First.pushbutton", "Second.pushbutton"]
    );
}

/// An invalid configuration file is reported and the run ends without
/// touching the folder.
#[test]
fn malformed_configuration_aborts() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = Tools\nbutton = Run\n")
        .build();

    let (result, _, log) = ctx.run_create(&["y"]);

    assert_eq!(result.unwrap(), CreateOutcome::Aborted);
    assert!(log.contains(LogLevel::Error, "line 2"));
    assert_eq!(ctx.list(""), vec!["config.yaml"]);
}

/// A file occupying a folder name stops the run with an error after the
/// earlier folders were created.
#[test]
fn file_in_place_of_folder_fails() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = A\ntab = B\n")
        .with_file("A.extension/B.tab", "not a folder")
        .build();

    let (result, _, log) = ctx.run_create(&["y"]);

    assert!(matches!(result, Err(FdmepError::Resource(_))));
    assert!(log.contains(LogLevel::Error, "Failed to prepare folder B.tab"));
    assert!(ctx.path("A.extension").is_dir());
}

/// Changing only the letter case of a name fixes the folder's case.
#[test]
fn case_change_renames_folder() {
    let ctx = TestContextBuilder::new()
        .with_config("extension = Tools\n")
        .with_file("tools.extension/notes.txt", "keep")
        .build();

    let (result, _, log) = ctx.run_create(&["y"]);

    result.unwrap();
    assert_eq!(ctx.list(""), vec!["Tools.extension", "config.yaml"]);
    assert!(ctx.path("Tools.extension/notes.txt").is_file());
    assert!(log.contains(LogLevel::Success, "Renamed tools.extension → Tools.extension"));
}
