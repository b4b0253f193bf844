//! Building a configuration by asking the user.
use super::validation::{INVALID_NAME_MESSAGE, is_valid_name};
use super::{ConfigEntry, RoleTag, ScaffoldConfig};
use crate::error::{FdmepError, PromptError};
use crate::logging::Log;
use crate::prompt::{Prompt, ask_until_valid};

/// Question shown for `role`.
fn question(role: RoleTag) -> String {
    format!(
        "Enter a name for {role} [default: {}]: ",
        role.default_name()
    )
}

/// Ask for the name of a single role.
///
/// An empty answer (after trimming) selects the role's default. Invalid
/// answers are rejected and the question is repeated until a valid one
/// arrives.
///
/// # Errors
///
/// Propagates any [`PromptError`] from the prompt.
pub fn ask_name(prompt: &dyn Prompt, log: &dyn Log, role: RoleTag) -> Result<String, PromptError> {
    ask_until_valid(prompt, log, &question(role), |answer| {
        let name = answer.trim();
        if name.is_empty() {
            log.info(&format!(
                "Using default for {role}: {}",
                role.default_name()
            ));
            Ok(role.default_name().to_string())
        } else if is_valid_name(name) {
            log.success(&format!("Name accepted for {role}: {name}"));
            Ok(name.to_string())
        } else {
            Err(INVALID_NAME_MESSAGE.to_string())
        }
    })
}

/// Ask for every role in nesting order and assemble the configuration.
///
/// # Errors
///
/// Propagates any [`PromptError`] from the prompt, or a [`ConfigError`]
/// if the collected entries break the configuration invariants.
///
/// [`ConfigError`]: crate::error::ConfigError
pub fn build_interactively(
    prompt: &dyn Prompt,
    log: &dyn Log,
) -> Result<ScaffoldConfig, FdmepError> {
    let mut entries = Vec::with_capacity(RoleTag::ALL.len());
    for role in RoleTag::ALL {
        entries.push(ConfigEntry::new(role, ask_name(prompt, log, role)?));
    }
    Ok(ScaffoldConfig::from_entries(entries)?)
}
