//! Batched editing session over one shortcut list.
//!
//! The editor keeps the last committed list next to a working copy. Edits only
//! touch the working copy; [`ShortcutEditor::apply`] writes it back in a
//! single settings write.

use super::resolve::{AppDatabase, AppInfo};
use super::store::{self, ShortcutListKey};
use super::{ShortcutList, Toggled};
use crate::Result;
use crate::config::SettingsPort;
use pinwheel_types::ShortcutEntry;
use tracing::{debug, info};

pub const PIN_LABEL: &str = "Pin to menu";
pub const UNPIN_LABEL: &str = "Unpin from menu";

/// Settings key naming the desktop id to use for the browser placeholder.
pub const DEFAULT_WEB_BROWSER_KEY: &str = "default-web-browser";

/// In-flight drag of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub from: usize,
    /// Where the placeholder currently sits
    pub placeholder: usize,
}

#[derive(Debug, Clone)]
pub struct ShortcutEditor {
    key: ShortcutListKey,
    committed: ShortcutList,
    working: ShortcutList,
    drag: Option<DragSession>,
}

impl ShortcutEditor {
    /// Start a session from the stored list. A malformed stored value starts
    /// the session from an empty list.
    #[must_use]
    pub fn load(port: &impl SettingsPort, key: ShortcutListKey) -> Self {
        let list = store::load_list_or_empty(port, key);
        Self::from_list(key, list)
    }

    #[must_use]
    pub fn from_list(key: ShortcutListKey, list: ShortcutList) -> Self {
        Self {
            key,
            committed: list.clone(),
            working: list,
            drag: None,
        }
    }

    #[must_use]
    pub fn key(&self) -> ShortcutListKey {
        self.key
    }

    /// The working copy.
    #[must_use]
    pub fn list(&self) -> &ShortcutList {
        &self.working
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.working != self.committed
    }

    /// Write the working copy if it changed. Returns whether a write happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings store rejects the write; the session
    /// stays dirty in that case.
    pub fn apply(&mut self, port: &mut impl SettingsPort) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        store::save_list(port, self.key, &self.working)?;
        self.committed = self.working.clone();
        info!("Applied {} ({} entries)", self.key, self.working.len());
        Ok(true)
    }

    /// Drop uncommitted edits.
    pub fn revert(&mut self) {
        self.working = self.committed.clone();
        self.drag = None;
    }

    /// Replace the working copy with the schema default. Nothing is written
    /// until [`apply`](Self::apply).
    ///
    /// # Errors
    ///
    /// Returns an error if the default cannot be decoded.
    pub fn reset_to_default(&mut self, port: &impl SettingsPort) -> Result<()> {
        self.working = store::default_list(port, self.key)?;
        self.drag = None;
        Ok(())
    }

    /// Whether the working copy differs from the schema default.
    ///
    /// # Errors
    ///
    /// Returns an error if the default cannot be decoded.
    pub fn differs_from_default(&self, port: &impl SettingsPort) -> Result<bool> {
        Ok(self.working != store::default_list(port, self.key)?)
    }

    pub fn insert_at(&mut self, index: usize, entry: ShortcutEntry) {
        self.working = self.working.insert_at(index, entry);
    }

    pub fn push(&mut self, entry: ShortcutEntry) {
        self.working = self.working.push(entry);
    }

    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.working = self.working.remove_at(index)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, entry: ShortcutEntry) -> Result<()> {
        self.working = self.working.replace_at(index, entry)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn move_up(&mut self, index: usize) -> Result<()> {
        self.working = self.working.move_up(index)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn move_down(&mut self, index: usize) -> Result<()> {
        self.working = self.working.move_down(index)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `from` is out of range.
    pub fn move_to_index(&mut self, from: usize, to: usize) -> Result<()> {
        self.working = self.working.move_to_index(from, to)?;
        Ok(())
    }

    /// Toggle `candidate` by command. Returns true when it was removed.
    pub fn toggle(&mut self, candidate: ShortcutEntry) -> bool {
        let Toggled { list, was_removed } = self.working.toggle(candidate);
        self.working = list;
        was_removed
    }

    /// Pin or unpin an application by desktop id. New pins take the app's
    /// name and an empty icon so the app icon is used.
    pub fn toggle_pin(&mut self, app: &AppInfo) -> bool {
        let was_removed = self.toggle(ShortcutEntry::app(app.name.as_str(), &app.id));
        debug!(
            "{} {}",
            if was_removed { "Unpinned" } else { "Pinned" },
            app.id
        );
        was_removed
    }

    /// Start dragging the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn begin_drag(&mut self, index: usize) -> Result<()> {
        if index >= self.working.len() {
            return Err(crate::Error::IndexOutOfRange {
                index,
                len: self.working.len(),
            });
        }
        self.drag = Some(DragSession {
            from: index,
            placeholder: index,
        });
        Ok(())
    }

    /// Move the placeholder to `target`, clamped to the last row. The list
    /// itself is untouched. Returns the placeholder position, or `None` when
    /// no drag is active.
    pub fn drag_motion(&mut self, target: usize) -> Option<usize> {
        let last = self.working.len().saturating_sub(1);
        let session = self.drag.as_mut()?;
        session.placeholder = target.min(last);
        Some(session.placeholder)
    }

    /// Finish the drag with one move to the placeholder position. Returns
    /// whether the list changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the dragged row no longer exists.
    pub fn end_drag(&mut self) -> Result<bool> {
        let Some(DragSession { from, placeholder }) = self.drag.take() else {
            return Ok(false);
        };
        let moved = self.working.move_to_index(from, placeholder)?;
        let changed = moved != self.working;
        self.working = moved;
        Ok(changed)
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }
}

/// Context-menu label for an app given the current pinned list.
#[must_use]
pub fn pin_label(list: &ShortcutList, app_id: &str) -> &'static str {
    if list.contains_command(app_id) {
        UNPIN_LABEL
    } else {
        PIN_LABEL
    }
}

/// Swap a leading web-browser placeholder for the default browser, or drop it
/// when no browser can be found. `preferred` is a desktop id that wins over
/// the app database's own default when it is installed.
#[must_use]
pub fn expand_web_browser_placeholder(
    list: &ShortcutList,
    apps: &impl AppDatabase,
    preferred: Option<&str>,
) -> ShortcutList {
    if !list.get(0).is_some_and(ShortcutEntry::is_web_browser_placeholder) {
        return list.clone();
    }

    let browser = preferred
        .filter(|id| !id.is_empty())
        .and_then(|id| apps.lookup(id))
        .or_else(|| apps.default_web_browser());

    match browser {
        Some(app) => {
            debug!("Web browser placeholder resolved to {}", app.id);
            list.replace_at(0, ShortcutEntry::app(app.name.as_str(), &app.id))
                .unwrap_or_else(|_| list.clone())
        }
        None => {
            debug!("No default web browser, dropping placeholder");
            list.remove_at(0).unwrap_or_else(|_| list.clone())
        }
    }
}

/// Expand the browser placeholder in the stored pinned list and persist the
/// result. Returns whether anything changed.
///
/// # Errors
///
/// Returns an error if the settings store cannot be read or written.
pub fn settle_web_browser_placeholder(
    port: &mut impl SettingsPort,
    apps: &impl AppDatabase,
) -> Result<bool> {
    let key = ShortcutListKey::PinnedApps;
    let list = store::load_list_or_empty(port, key);
    let preferred = port.get_string(DEFAULT_WEB_BROWSER_KEY)?;
    let expanded = expand_web_browser_placeholder(&list, apps, Some(preferred.as_str()));
    if expanded == list {
        return Ok(false);
    }
    store::save_list(port, key, &expanded)?;
    Ok(true)
}
