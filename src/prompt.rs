//! Interactive console input.
//!
//! Questions go through the [`Prompt`] trait so the workflow can be driven by
//! a real terminal ([`StdinPrompt`]) or by a fixed list of answers
//! ([`ScriptedPrompt`]). Validation loops are expressed once, in
//! [`ask_until_valid`]: they retry without an upper bound and only end on a
//! valid answer or when the input itself closes.
use std::collections::VecDeque;
use std::io::{self, BufRead as _, Write as _};
use std::sync::Mutex;

use crate::error::PromptError;
use crate::logging::Log;

/// Source of answers to console questions.
pub trait Prompt {
    /// Show `question` and block until one line of input is available.
    ///
    /// The returned line has its trailing newline removed but is otherwise
    /// untouched; callers decide how to trim or normalise it.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InputClosed`] when no more input will arrive,
    /// or [`PromptError::Io`] if the console cannot be read or written.
    fn ask(&self, question: &str) -> Result<String, PromptError>;
}

/// Prompt that reads answers from standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "\x1b[36m{question}\x1b[0m")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Keep the terminal tidy when the user hits Ctrl-D.
            writeln!(stdout)?;
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prompt fed from a fixed, ordered list of answers.
///
/// Used for automation and tests: once the answers run out every further
/// question fails with [`PromptError::InputClosed`], which turns the
/// unbounded retry loops into finite ones.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Create a prompt that will return `answers` in order.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Every question asked so far, in order.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(question.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .ok_or(PromptError::InputClosed)
    }
}

/// Ask `question` until `accept` returns `Ok`.
///
/// Each rejection message returned by `accept` is logged as an error before
/// the question is repeated. There is no retry limit.
///
/// # Errors
///
/// Propagates any [`PromptError`] from the underlying prompt.
pub fn ask_until_valid<T, F>(
    prompt: &dyn Prompt,
    log: &dyn Log,
    question: &str,
    mut accept: F,
) -> Result<T, PromptError>
where
    F: FnMut(&str) -> Result<T, String>,
{
    loop {
        let answer = prompt.ask(question)?;
        match accept(&answer) {
            Ok(value) => return Ok(value),
            Err(reason) => log.error(&reason),
        }
    }
}

/// Answers accepted as "yes". The empty answer means "use the default".
const AFFIRMATIVE: &[&str] = &["", "s", "sim", "y", "yes"];
/// Answers accepted as "no".
const NEGATIVE: &[&str] = &["n", "não", "nao", "no"];

/// Interpret a yes/no answer.
///
/// Returns `Some(true)` for an affirmative (including an empty answer),
/// `Some(false)` for a negative, and `None` for anything outside the
/// vocabulary. Matching ignores surrounding whitespace and case.
#[must_use]
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    let normalized = answer.trim().to_lowercase();
    if AFFIRMATIVE.contains(&normalized.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Ask a yes/no question, re-prompting until the answer is recognized.
///
/// # Errors
///
/// Propagates any [`PromptError`] from the underlying prompt.
pub fn confirm(prompt: &dyn Prompt, log: &dyn Log, question: &str) -> Result<bool, PromptError> {
    ask_until_valid(prompt, log, question, |answer| {
        parse_confirmation(answer)
            .ok_or_else(|| "Invalid answer. Type 'y' for yes or 'n' for no.".to_string())
    })
}
