//! Ordered shortcut list and its pure edit operations.
//!
//! Every operation returns a new list and leaves `self` untouched; callers
//! hold the working copy and decide when to persist it.

use crate::{Error, Result};
use pinwheel_types::ShortcutEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display-ordered shortcut entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutList {
    entries: Vec<ShortcutEntry>,
}

/// Result of [`ShortcutList::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub list: ShortcutList,
    /// True when an existing entry was unpinned, false when the candidate was
    /// appended.
    pub was_removed: bool,
}

impl ShortcutList {
    #[must_use]
    pub fn new(entries: Vec<ShortcutEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ShortcutEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShortcutEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<ShortcutEntry> {
        self.entries
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Insert `entry` at `index`, clamped to `0..=len`.
    #[must_use]
    pub fn insert_at(&self, index: usize, entry: ShortcutEntry) -> Self {
        let index = index.min(self.entries.len());
        let mut entries = self.entries.clone();
        entries.insert(index, entry);
        Self { entries }
    }

    /// Append `entry` at the end.
    #[must_use]
    pub fn push(&self, entry: ShortcutEntry) -> Self {
        self.insert_at(self.entries.len(), entry)
    }

    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut entries = self.entries.clone();
        entries.remove(index);
        Ok(Self { entries })
    }

    /// Replace the entry at `index`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn replace_at(&self, index: usize, entry: ShortcutEntry) -> Result<Self> {
        self.check_index(index)?;
        let mut entries = self.entries.clone();
        entries[index] = entry;
        Ok(Self { entries })
    }

    /// Swap the entry with its predecessor. The first entry stays put.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn move_up(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut entries = self.entries.clone();
        if index > 0 {
            entries.swap(index, index - 1);
        }
        Ok(Self { entries })
    }

    /// Swap the entry with its successor. The last entry stays put.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn move_down(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut entries = self.entries.clone();
        if index + 1 < entries.len() {
            entries.swap(index, index + 1);
        }
        Ok(Self { entries })
    }

    /// Move the entry at `from` so it ends up at `to`, clamped to the last
    /// index. Entries in between shift by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `from >= len`.
    pub fn move_to_index(&self, from: usize, to: usize) -> Result<Self> {
        self.check_index(from)?;
        let to = to.min(self.entries.len() - 1);
        let mut entries = self.entries.clone();
        if from != to {
            let entry = entries.remove(from);
            entries.insert(to, entry);
            debug!("Moved shortcut {from} -> {to}");
        }
        Ok(Self { entries })
    }

    /// Position of the first entry whose persisted command equals `command`.
    #[must_use]
    pub fn position_by_command(&self, command: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.command.as_persisted() == command)
    }

    /// First entry whose persisted command equals `command`.
    #[must_use]
    pub fn find_by_command(&self, command: &str) -> Option<&ShortcutEntry> {
        self.position_by_command(command).map(|i| &self.entries[i])
    }

    #[must_use]
    pub fn contains_command(&self, command: &str) -> bool {
        self.position_by_command(command).is_some()
    }

    /// Remove the entry sharing `candidate`'s command, or append `candidate`
    /// when none does.
    #[must_use]
    pub fn toggle(&self, candidate: ShortcutEntry) -> Toggled {
        let position = self.position_by_command(&candidate.command.as_persisted());
        match position {
            Some(index) => {
                let mut entries = self.entries.clone();
                entries.remove(index);
                Toggled {
                    list: Self { entries },
                    was_removed: true,
                }
            }
            None => Toggled {
                list: self.push(candidate),
                was_removed: false,
            },
        }
    }
}

impl From<Vec<ShortcutEntry>> for ShortcutList {
    fn from(entries: Vec<ShortcutEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ShortcutEntry> for ShortcutList {
    fn from_iter<I: IntoIterator<Item = ShortcutEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ShortcutList {
    type Item = ShortcutEntry;
    type IntoIter = std::vec::IntoIter<ShortcutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShortcutList {
    type Item = &'a ShortcutEntry;
    type IntoIter = std::slice::Iter<'a, ShortcutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(command: &str) -> ShortcutEntry {
        ShortcutEntry::new(command.to_uppercase(), "", command)
    }

    fn list(commands: &[&str]) -> ShortcutList {
        commands.iter().map(|c| entry(c)).collect()
    }

    fn commands(list: &ShortcutList) -> Vec<String> {
        list.iter()
            .map(|e| e.command.as_persisted().into_owned())
            .collect()
    }

    #[test]
    fn test_insert_at_clamps() {
        let base = list(&["a", "b"]);
        assert_eq!(commands(&base.insert_at(0, entry("x"))), ["x", "a", "b"]);
        assert_eq!(commands(&base.insert_at(1, entry("x"))), ["a", "x", "b"]);
        assert_eq!(commands(&base.insert_at(99, entry("x"))), ["a", "b", "x"]);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_remove_at() {
        let base = list(&["a", "b", "c"]);
        assert_eq!(commands(&base.remove_at(1).unwrap()), ["a", "c"]);
        assert!(matches!(
            base.remove_at(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(ShortcutList::default().remove_at(0).is_err());
    }

    #[test]
    fn test_move_up_down_boundaries() {
        let base = list(&["a", "b", "c"]);
        assert_eq!(base.move_up(0).unwrap(), base);
        assert_eq!(base.move_down(2).unwrap(), base);
        assert_eq!(commands(&base.move_up(2).unwrap()), ["a", "c", "b"]);
        assert_eq!(commands(&base.move_down(0).unwrap()), ["b", "a", "c"]);
        assert!(base.move_up(3).is_err());
        assert!(base.move_down(7).is_err());
    }

    #[test]
    fn test_move_to_index() {
        let base = list(&["a", "b", "c", "d"]);
        assert_eq!(
            commands(&base.move_to_index(0, 2).unwrap()),
            ["b", "c", "a", "d"]
        );
        assert_eq!(
            commands(&base.move_to_index(3, 0).unwrap()),
            ["d", "a", "b", "c"]
        );
        assert_eq!(
            commands(&base.move_to_index(1, 99).unwrap()),
            ["a", "c", "d", "b"]
        );
        assert_eq!(base.move_to_index(2, 2).unwrap(), base);
        assert_eq!(base.move_to_index(3, 10).unwrap(), base);
        assert!(base.move_to_index(4, 0).is_err());
    }

    #[test]
    fn test_replace_at() {
        let base = list(&["a", "b"]);
        let replaced = base.replace_at(1, entry("z")).unwrap();
        assert_eq!(commands(&replaced), ["a", "z"]);
        assert!(base.replace_at(2, entry("z")).is_err());
    }

    #[test]
    fn test_find_by_command_is_exact() {
        let base = list(&["firefox.desktop", "Firefox.desktop"]);
        assert_eq!(base.position_by_command("Firefox.desktop"), Some(1));
        assert!(base.find_by_command("firefox").is_none());
        assert!(base.find_by_command(" firefox.desktop").is_none());
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let base = list(&["a.desktop"]);
        let firefox = ShortcutEntry::app("Firefox", "firefox.desktop");

        let pinned = base.toggle(firefox.clone());
        assert!(!pinned.was_removed);
        assert_eq!(commands(&pinned.list), ["a.desktop", "firefox.desktop"]);

        let unpinned = pinned.list.toggle(firefox);
        assert!(unpinned.was_removed);
        assert_eq!(unpinned.list, base);
    }

    #[test]
    fn test_toggle_matches_on_command_only() {
        let base = list(&["firefox.desktop"]);
        let renamed = ShortcutEntry::new("Web", "web-browser", "firefox.desktop");
        let toggled = base.toggle(renamed);
        assert!(toggled.was_removed);
        assert!(toggled.list.is_empty());
    }
}
