//! The `key = value` scaffold configuration.
//!
//! A configuration is an ordered list of role-tag/name pairs stored one per
//! line in `config.yaml` next to the extension it describes:
//!
//! ```text
//! extension = MyExtension
//! tab = MyTab
//! panel = MyPanel
//! pushbutton = MyCommand
//! ```
//!
//! There is no quoting, escaping, or comment syntax. Each line is split on
//! the first `" = "`.
pub mod interactive;
pub mod settings;
pub mod validation;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

pub use interactive::build_interactively;

/// File name of the configuration, relative to the scaffold root.
///
/// The content is plain `key = value` lines, not YAML; the name is kept for
/// compatibility with existing projects.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Separator between key and value on each configuration line.
const SEPARATOR: &str = " = ";

/// One of the four folder roles understood by the host application.
///
/// The tag is both the configuration key and the directory-name suffix:
/// a `tab` named `Tools` lives in `Tools.tab/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleTag {
    /// Top-level extension bundle.
    Extension,
    /// Ribbon tab inside the extension.
    Tab,
    /// Panel inside the tab.
    Panel,
    /// Command button inside the panel.
    Pushbutton,
}

impl RoleTag {
    /// All tags, in nesting order.
    pub const ALL: [Self; 4] = [Self::Extension, Self::Tab, Self::Panel, Self::Pushbutton];

    /// The tag as written in the configuration and in directory names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Tab => "tab",
            Self::Panel => "panel",
            Self::Pushbutton => "pushbutton",
        }
    }

    /// Name offered when the user accepts the default.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Extension => "MyExtension",
            Self::Tab => "MyTab",
            Self::Panel => "MyPanel",
            Self::Pushbutton => "MyCommand",
        }
    }

    /// Whether the scaffolder descends into this folder and keeps going.
    ///
    /// Container roles hold exactly one folder per level, so an existing
    /// folder with the same suffix is renamed instead of duplicated. A panel
    /// may hold many pushbuttons, which are never renamed.
    #[must_use]
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::Pushbutton)
    }

    /// Directory-name suffix including the leading dot, e.g. `".tab"`.
    #[must_use]
    pub fn suffix(self) -> String {
        format!(".{}", self.as_str())
    }

    /// Directory name for a folder of this role called `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fdmep_cli::config::RoleTag;
    ///
    /// assert_eq!(RoleTag::Panel.directory_name("Tools"), "Tools.panel");
    /// ```
    #[must_use]
    pub fn directory_name(self, name: &str) -> String {
        format!("{name}.{}", self.as_str())
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

/// A single `key = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// The key.
    pub role: RoleTag,
    /// The user-chosen name.
    pub name: String,
}

impl ConfigEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(role: RoleTag, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }

}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.role, self.name)
    }
}

/// Ordered scaffold configuration.
///
/// Invariants: every key appears at most once and every name passes
/// [`validation::is_valid_name`]. Entry order is preserved exactly as read,
/// since it drives the order in which folders are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    entries: Vec<ConfigEntry>,
}

impl ScaffoldConfig {
    /// Build a configuration from entries, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateKey`] if a role appears twice and
    /// [`ConfigError::InvalidName`] if a name contains invalid characters.
    pub fn from_entries(entries: Vec<ConfigEntry>) -> Result<Self, ConfigError> {
        for (i, entry) in entries.iter().enumerate() {
            check_entry(entries.get(..i).unwrap_or_default(), entry)?;
        }
        Ok(Self { entries })
    }

    /// The configuration produced by accepting every default.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            entries: RoleTag::ALL
                .into_iter()
                .map(|role| ConfigEntry::new(role, role.default_name()))
                .collect(),
        }
    }

    /// Entries in stored order.
    #[must_use]
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Parse configuration text.
    ///
    /// Lines are trimmed; blank lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fdmep_cli::config::{RoleTag, ScaffoldConfig};
    ///
    /// let config = ScaffoldConfig::parse("extension = Tools\ntab = My Tab\n").unwrap();
    /// assert_eq!(config.entries().len(), 2);
    /// assert_eq!(config.entries()[1].role, RoleTag::Tab);
    /// assert_eq!(config.entries()[1].name, "My Tab");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSyntax`] naming the offending line if a
    /// line has no `" = "` separator, an unknown key, a repeated key, or an
    /// invalid name.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut entries: Vec<ConfigEntry> = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let syntax_error = |message: String| ConfigError::InvalidSyntax {
                line: line_num + 1,
                message,
            };

            let (key, value) = trimmed
                .split_once(SEPARATOR)
                .ok_or_else(|| syntax_error(format!("missing '{SEPARATOR}' in: {trimmed}")))?;
            let role: RoleTag = key.parse().map_err(|e: ConfigError| syntax_error(e.to_string()))?;
            let entry = ConfigEntry::new(role, value.trim());
            check_entry(&entries, &entry).map_err(|e| syntax_error(e.to_string()))?;
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Serialize to configuration text, one `key = value` per line.
    #[must_use]
    pub fn to_config_string(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{e}\n"))
            .collect()
    }
}

/// Check that `entry` can follow `previous`: its role is not taken yet and
/// its name is valid.
fn check_entry(previous: &[ConfigEntry], entry: &ConfigEntry) -> Result<(), ConfigError> {
    if previous.iter().any(|e| e.role == entry.role) {
        return Err(ConfigError::DuplicateKey(entry.role.to_string()));
    }
    if !validation::is_valid_name(&entry.name) {
        return Err(ConfigError::InvalidName {
            key: entry.role.to_string(),
            name: entry.name.clone(),
        });
    }
    Ok(())
}

/// Path of the configuration file inside `root`.
#[must_use]
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Whether a configuration file exists inside `root`.
#[must_use]
pub fn exists(root: &Path) -> bool {
    config_path(root).exists()
}

/// Load a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file is missing or unreadable and
/// [`ConfigError::InvalidSyntax`] if it cannot be parsed.
pub fn load(path: &Path) -> Result<ScaffoldConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ScaffoldConfig::parse(&content)
}

/// Write a configuration file, replacing any previous content.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be written.
pub fn save(path: &Path, config: &ScaffoldConfig) -> Result<(), ConfigError> {
    std::fs::write(path, config.to_config_string()).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
impl ScaffoldConfig {
    /// The name configured for `role`, if any.
    pub(crate) fn get(&self, role: RoleTag) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.name.as_str())
    }
}
