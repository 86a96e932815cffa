//! Shortcut list keys and reading or writing lists through the settings port.

use super::{ShortcutList, codec};
use crate::Result;
use crate::config::SettingsPort;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// How a list is laid out in the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListForm {
    /// One string array, stride 3
    Flat,
    /// Array of 3-element string arrays
    Tuples,
}

/// Settings keys that hold shortcut lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutListKey {
    PinnedApps,
    MintPinnedApps,
    BriskShortcuts,
    UbuntuDashPinnedApps,
    DirectoryShortcuts,
    ApplicationShortcuts,
}

impl ShortcutListKey {
    pub const ALL: [ShortcutListKey; 6] = [
        Self::PinnedApps,
        Self::MintPinnedApps,
        Self::BriskShortcuts,
        Self::UbuntuDashPinnedApps,
        Self::DirectoryShortcuts,
        Self::ApplicationShortcuts,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PinnedApps => "pinned-app-list",
            Self::MintPinnedApps => "mint-pinned-app-list",
            Self::BriskShortcuts => "brisk-shortcuts-list",
            Self::UbuntuDashPinnedApps => "ubuntu-dash-pinned-app-list",
            Self::DirectoryShortcuts => "directory-shortcuts-list",
            Self::ApplicationShortcuts => "application-shortcuts-list",
        }
    }

    #[must_use]
    pub fn form(self) -> ListForm {
        match self {
            Self::DirectoryShortcuts | Self::ApplicationShortcuts => ListForm::Tuples,
            _ => ListForm::Flat,
        }
    }

    /// Entries of directory lists open as paths rather than run as commands.
    #[must_use]
    pub fn holds_directories(self) -> bool {
        self == Self::DirectoryShortcuts
    }
}

impl fmt::Display for ShortcutListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ShortcutListKey {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for ShortcutListKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown shortcut list '{s}' (expected one of {})", known.join(", "))
            })
    }
}

/// Read and decode a list.
///
/// # Errors
///
/// Returns a settings error if the key cannot be read, or a malformed-input
/// error if the stored value does not decode.
pub fn load_list(port: &impl SettingsPort, key: ShortcutListKey) -> Result<ShortcutList> {
    let list = match key.form() {
        ListForm::Flat => codec::decode(&port.get_strv(key.as_str())?)?,
        ListForm::Tuples => codec::decode_tuples(&port.get_string_arrays(key.as_str())?)?,
    };
    debug!("Loaded {} entries from {key}", list.len());
    Ok(list)
}

/// Like [`load_list`], but a malformed stored value reads as an empty list.
#[must_use]
pub fn load_list_or_empty(port: &impl SettingsPort, key: ShortcutListKey) -> ShortcutList {
    load_list(port, key).unwrap_or_else(|e| {
        warn!("Falling back to an empty {key}: {e}");
        ShortcutList::default()
    })
}

/// Decode the schema default for `key`.
///
/// # Errors
///
/// Returns an error if the default does not decode.
pub fn default_list(port: &impl SettingsPort, key: ShortcutListKey) -> Result<ShortcutList> {
    let value = port.default_value(key.as_str())?;
    match key.form() {
        ListForm::Flat => codec::decode(&serde_json::from_value::<Vec<String>>(value)?),
        ListForm::Tuples => {
            codec::decode_tuples(&serde_json::from_value::<Vec<Vec<String>>>(value)?)
        }
    }
}

/// Encode and write a list in one settings write.
///
/// # Errors
///
/// Returns an error if the settings store rejects the write.
pub fn save_list(
    port: &mut impl SettingsPort,
    key: ShortcutListKey,
    list: &ShortcutList,
) -> Result<()> {
    match key.form() {
        ListForm::Flat => port.set_strv(key.as_str(), &codec::encode(list))?,
        ListForm::Tuples => port.set_string_arrays(key.as_str(), &codec::encode_tuples(list))?,
    }
    debug!("Wrote {} entries to {key}", list.len());
    Ok(())
}
