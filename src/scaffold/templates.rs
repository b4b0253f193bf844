//! Contents of the files generated inside each command folder.

/// Script stub file name.
pub const SCRIPT_FILE_NAME: &str = "script.py";
/// Manifest stub file name.
pub const BUNDLE_FILE_NAME: &str = "bundle.yaml";
/// Version written into new script stubs.
pub const INITIAL_VERSION: &str = "1.0";

/// Words a YAML 1.1 reader would turn into booleans or null.
const YAML_KEYWORDS: &[&str] = &["true", "false", "yes", "no", "on", "off", "y", "n", "null"];

/// Escape `value` for a double-quoted string.
///
/// The escapes used are understood by both Python string literals and YAML
/// double-quoted scalars.
fn escape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && c.is_ascii() => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out
}

/// `value` as a YAML scalar: plain when it reads back as the same string,
/// double-quoted otherwise.
fn yaml_scalar(value: &str) -> String {
    let plain = !value.is_empty()
        && !value.starts_with(' ')
        && !value.ends_with(' ')
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '.'))
        && !YAML_KEYWORDS.contains(&value.to_lowercase().as_str())
        && value.parse::<f64>().is_err();
    if plain {
        value.to_string()
    } else {
        format!("\"{}\"", escape_quoted(value))
    }
}

/// Script stub: three metadata constants and a single print statement.
#[must_use]
pub fn script_stub(command: &str, author: &str) -> String {
    let command = escape_quoted(command);
    let author = escape_quoted(author);
    format!(
        "# -*- coding: utf-8 -*-\n\
         __title__ = \"{command}\"\n\
         __author__ = \"{author}\"\n\
         __version__ = \"{INITIAL_VERSION}\"\n\
         \n\
         print(\"Keep exploring pyRevit...\")\n"
    )
}

/// Manifest stub: localized title, tooltip, and author.
#[must_use]
pub fn bundle_stub(command: &str, author: &str) -> String {
    let title = yaml_scalar(command);
    let tooltip = yaml_scalar(&format!("Description of the {command} command."));
    let author = yaml_scalar(author);
    format!(
        "title:\n\
         \x20 en_us: {title}\n\
         \x20 pt_br: {title}\n\
         tooltip: {tooltip}\n\
         author: {author}\n"
    )
}

/// Both default files as `(file name, contents)` pairs, script first.
#[must_use]
pub fn default_files(command: &str, author: &str) -> [(&'static str, String); 2] {
    [
        (SCRIPT_FILE_NAME, script_stub(command, author)),
        (BUNDLE_FILE_NAME, bundle_stub(command, author)),
    ]
}
