//! Name validation for configuration values.
//!
//! Names end up as directory names and inside the generated templates, so
//! only letters, digits, spaces, and underscores are accepted.

/// Message shown when an interactive answer is rejected.
pub const INVALID_NAME_MESSAGE: &str =
    "Invalid name. Use only letters, numbers, spaces and _ (underscore). Try again.";

/// Return `true` if `c` may appear in a name.
///
/// Letters and digits are checked with Unicode semantics, so accented
/// letters are accepted.
#[must_use]
pub fn is_valid_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '_'
}

/// Return `true` if `name` is non-empty and made only of valid characters.
///
/// # Examples
///
/// ```
/// use fdmep_cli::config::validation::is_valid_name;
///
/// assert!(is_valid_name("My Panel_2"));
/// assert!(!is_valid_name("bad@name"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_valid_name_char)
}
