//! Tests for editing sessions against a settings store
//!
//! Covers:
//! - Load, edit, apply and revert cycles
//! - Pinning apps and the pin/unpin label
//! - Drag reordering
//! - Web browser placeholder expansion
//! - Resolving the default pinned list

use super::fixtures::{commands, entry, list, make_apps};
use crate::config::{SettingsFile, SettingsPort};
use crate::shortcuts::{
    self, Activation, AppInfo, PIN_LABEL, ShortcutEditor, ShortcutListKey, UNPIN_LABEL, pin_label,
};
use pinwheel_types::{BuiltinAction, ShortcutEntry};

fn store_with(key: ShortcutListKey, commands: &[&str]) -> SettingsFile {
    let mut store = SettingsFile::in_memory();
    shortcuts::save_list(&mut store, key, &list(commands)).unwrap();
    store
}

#[test]
fn test_apply_writes_once_and_clears_dirty() {
    let mut store = store_with(ShortcutListKey::PinnedApps, &["a", "b", "c"]);
    let mut editor = ShortcutEditor::load(&store, ShortcutListKey::PinnedApps);

    editor.move_down(0).unwrap();
    editor.remove_at(2).unwrap();
    assert!(editor.is_dirty());

    assert!(editor.apply(&mut store).unwrap());
    assert!(!editor.is_dirty());
    assert!(!editor.apply(&mut store).unwrap());

    let stored = shortcuts::load_list(&store, ShortcutListKey::PinnedApps).unwrap();
    assert_eq!(commands(&stored), ["b", "a"]);
}

#[test]
fn test_revert_drops_edits() {
    let store = store_with(ShortcutListKey::PinnedApps, &["a", "b"]);
    let mut editor = ShortcutEditor::load(&store, ShortcutListKey::PinnedApps);
    editor.push(entry("c"));
    editor.revert();
    assert!(!editor.is_dirty());
    assert_eq!(commands(editor.list()), ["a", "b"]);
}

#[test]
fn test_out_of_range_edit_leaves_working_copy() {
    let store = store_with(ShortcutListKey::PinnedApps, &["a"]);
    let mut editor = ShortcutEditor::load(&store, ShortcutListKey::PinnedApps);
    assert!(editor.remove_at(3).is_err());
    assert!(editor.move_to_index(1, 0).is_err());
    assert!(!editor.is_dirty());
}

#[test]
fn test_malformed_stored_list_loads_empty() {
    let mut store = SettingsFile::in_memory();
    store
        .set_strv("pinned-app-list", &["only".to_string(), "two".to_string()])
        .unwrap();
    let editor = ShortcutEditor::load(&store, ShortcutListKey::PinnedApps);
    assert!(editor.list().is_empty());
    assert!(shortcuts::load_list(&store, ShortcutListKey::PinnedApps).is_err());
}

#[test]
fn test_toggle_pin_firefox() {
    let apps = make_apps();
    let firefox = AppInfo::new("firefox.desktop", "Firefox", "firefox");
    let mut store = store_with(ShortcutListKey::PinnedApps, &["org.gnome.Terminal.desktop"]);
    let mut editor = ShortcutEditor::load(&store, ShortcutListKey::PinnedApps);

    assert_eq!(pin_label(editor.list(), &firefox.id), PIN_LABEL);
    assert!(!editor.toggle_pin(&firefox));
    assert_eq!(pin_label(editor.list(), &firefox.id), UNPIN_LABEL);
    editor.apply(&mut store).unwrap();

    let stored = store.get_strv("pinned-app-list").unwrap();
    assert_eq!(
        stored,
        [
            "org.gnome.Terminal.desktop name",
            "",
            "org.gnome.Terminal.desktop",
            "Firefox",
            "",
            "firefox.desktop"
        ]
    );

    let pinned = editor.list().get(1).unwrap();
    let resolved = shortcuts::resolve(pinned, ShortcutListKey::PinnedApps, &apps);
    assert_eq!(resolved.icon, "firefox");
    assert_eq!(
        resolved.activation,
        Activation::LaunchApp("firefox.desktop".to_string())
    );

    assert!(editor.toggle_pin(&firefox));
    assert_eq!(commands(editor.list()), ["org.gnome.Terminal.desktop"]);
}

#[test]
fn test_drag_moves_once_on_drop() {
    let mut editor =
        ShortcutEditor::from_list(ShortcutListKey::PinnedApps, list(&["a", "b", "c", "d"]));
    editor.begin_drag(0).unwrap();
    assert_eq!(editor.drag_motion(1), Some(1));
    assert_eq!(editor.drag_motion(9), Some(3));
    assert_eq!(editor.drag_motion(2), Some(2));
    // Motion alone never reorders
    assert_eq!(commands(editor.list()), ["a", "b", "c", "d"]);

    assert!(editor.end_drag().unwrap());
    assert_eq!(commands(editor.list()), ["b", "c", "a", "d"]);
    assert!(editor.drag().is_none());
}

#[test]
fn test_drag_cancel_and_no_session() {
    let mut editor = ShortcutEditor::from_list(ShortcutListKey::PinnedApps, list(&["a", "b"]));
    assert_eq!(editor.drag_motion(1), None);
    assert!(!editor.end_drag().unwrap());
    assert!(editor.begin_drag(2).is_err());

    editor.begin_drag(1).unwrap();
    editor.drag_motion(0);
    editor.cancel_drag();
    assert!(!editor.end_drag().unwrap());
    assert!(!editor.is_dirty());
}

#[test]
fn test_drop_in_place_is_not_a_change() {
    let mut editor = ShortcutEditor::from_list(ShortcutListKey::PinnedApps, list(&["a", "b"]));
    editor.begin_drag(1).unwrap();
    assert!(!editor.end_drag().unwrap());
}

#[test]
fn test_reset_to_default_then_apply() {
    let mut store = store_with(ShortcutListKey::DirectoryShortcuts, &["/tmp"]);
    let mut editor = ShortcutEditor::load(&store, ShortcutListKey::DirectoryShortcuts);
    assert!(editor.differs_from_default(&store).unwrap());

    editor.reset_to_default(&store).unwrap();
    assert!(!editor.differs_from_default(&store).unwrap());
    editor.apply(&mut store).unwrap();

    let stored = shortcuts::load_list(&store, ShortcutListKey::DirectoryShortcuts).unwrap();
    assert_eq!(
        stored.get(0).map(|e| e.command.clone()),
        Some(pinwheel_types::Command::Builtin(BuiltinAction::Home))
    );
}

#[test]
fn test_default_pinned_list_settles_browser() {
    let apps = make_apps();
    let mut store = SettingsFile::in_memory();

    assert!(shortcuts::settle_web_browser_placeholder(&mut store, &apps).unwrap());
    let pinned = shortcuts::load_list(&store, ShortcutListKey::PinnedApps).unwrap();
    assert_eq!(pinned.get(0).map(|e| e.name.as_str()), Some("Firefox"));
    assert!(pinned.contains_command("firefox.desktop"));
    assert!(pinned.contains_command("ArcMenu_Settings"));

    // Already settled
    assert!(!shortcuts::settle_web_browser_placeholder(&mut store, &apps).unwrap());
}

#[test]
fn test_preferred_browser_setting_wins() {
    let mut apps = make_apps();
    apps.insert(AppInfo::new("chromium.desktop", "Chromium", "chromium"));
    let mut store = SettingsFile::in_memory();
    store.set_string(shortcuts::DEFAULT_WEB_BROWSER_KEY, "chromium.desktop").unwrap();

    shortcuts::settle_web_browser_placeholder(&mut store, &apps).unwrap();
    let pinned = shortcuts::load_list(&store, ShortcutListKey::PinnedApps).unwrap();
    assert!(pinned.contains_command("chromium.desktop"));
    assert!(!pinned.contains_command("firefox.desktop"));
}

#[test]
fn test_placeholder_dropped_without_browser() {
    let apps = crate::apps::AppIndex::new();
    let placeholder = ShortcutEntry::new("ArcMenu_WebBrowser", "", "");
    let pinned = list(&["a"]).insert_at(0, placeholder);
    let expanded = shortcuts::expand_web_browser_placeholder(&pinned, &apps, None);
    assert_eq!(commands(&expanded), ["a"]);
}

#[test]
fn test_software_shortcut_uses_installed_manager() {
    let apps = make_apps();
    let software = ShortcutEntry::builtin(BuiltinAction::Software);
    let resolved = shortcuts::resolve(&software, ShortcutListKey::ApplicationShortcuts, &apps);
    assert!(resolved.valid);
    assert_eq!(
        resolved.activation,
        Activation::LaunchApp("org.gnome.Software.desktop".to_string())
    );

    let none = crate::apps::AppIndex::new();
    let resolved = shortcuts::resolve(&software, ShortcutListKey::ApplicationShortcuts, &none);
    assert!(!resolved.valid);
}
