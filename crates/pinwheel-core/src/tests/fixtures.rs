//! Test fixtures and helpers

use crate::apps::AppIndex;
use crate::shortcuts::{AppInfo, ShortcutList};
use pinwheel_types::ShortcutEntry;
use proptest::prelude::*;

/// Entry with a name derived from its command and an empty icon
pub fn entry(command: &str) -> ShortcutEntry {
    ShortcutEntry::new(format!("{command} name"), "", command)
}

pub fn list(commands: &[&str]) -> ShortcutList {
    commands.iter().map(|c| entry(c)).collect()
}

pub fn commands(list: &ShortcutList) -> Vec<String> {
    list.iter()
        .map(|e| e.command.as_persisted().into_owned())
        .collect()
}

/// Index with a browser, a terminal, a file manager and a software manager
pub fn make_apps() -> AppIndex {
    let mut apps = AppIndex::new();
    apps.insert(AppInfo::new("firefox.desktop", "Firefox", "firefox"));
    apps.insert(AppInfo::new(
        "org.gnome.Terminal.desktop",
        "Terminal",
        "org.gnome.Terminal",
    ));
    apps.insert(AppInfo::new(
        "org.gnome.Nautilus.desktop",
        "Files",
        "org.gnome.Nautilus",
    ));
    apps.insert(AppInfo::new(
        "org.gnome.Software.desktop",
        "Software",
        "org.gnome.Software",
    ));
    apps.set_default_browser(Some("firefox.desktop".to_string()));
    apps
}

/// Any persisted command: sentinels, desktop ids, paths, literals and empty
pub fn arb_command() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("ArcMenu_Settings".to_string()),
        Just("ArcMenu_Home".to_string()),
        "[a-z]{1,8}\\.desktop",
        "/[a-z]{1,6}(/[a-z]{1,6})?",
        "[a-z]{1,6}( [a-z-]{1,6})?",
    ]
}

pub fn arb_entry() -> impl Strategy<Value = ShortcutEntry> {
    (
        "[A-Za-z ]{0,10}",
        prop_oneof![Just(String::new()), "[a-z-]{1,10}", Just("ArcMenu_Folder".to_string())],
        arb_command(),
    )
        .prop_map(|(name, icon, command)| ShortcutEntry::new(name, &icon, &command))
}

pub fn arb_list() -> impl Strategy<Value = ShortcutList> {
    prop::collection::vec(arb_entry(), 0..12).prop_map(ShortcutList::from)
}

/// List whose commands are pairwise distinct
pub fn arb_distinct_list() -> impl Strategy<Value = ShortcutList> {
    prop::collection::btree_set("[a-z]{1,8}\\.desktop", 0..10)
        .prop_map(|ids| ids.iter().map(|id| entry(id)).collect::<ShortcutList>())
}
