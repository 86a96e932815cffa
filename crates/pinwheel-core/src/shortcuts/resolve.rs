//! Turning stored entries into something the menu can show and activate.
//!
//! Resolution never fails: entries that point at missing applications or
//! unknown reserved tokens come back flagged invalid so the editor can grey
//! them out and the menu can skip them.

use super::ShortcutListKey;
use pinwheel_types::{BuiltinAction, Command, IconRef, ShortcutEntry};
use serde::Serialize;

/// Software centers tried, in order, for the software shortcut.
pub const SOFTWARE_MANAGER_IDS: &[&str] = &[
    "org.gnome.Software.desktop",
    "pamac-manager.desktop",
    "io.elementary.appcenter.desktop",
    "snap-store_ubuntu-software.desktop",
    "snap-store_snap-store.desktop",
];

const MENU_LOGO_ICON: &str = "start-here-symbolic";
const FOLDER_ICON: &str = "folder-symbolic";
const COMMAND_ICON: &str = "utilities-terminal-symbolic";
const MISSING_ICON: &str = "image-missing";

/// An installed application as the menu sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl AppInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Lookup of installed applications by desktop id.
pub trait AppDatabase {
    fn lookup(&self, desktop_id: &str) -> Option<&AppInfo>;

    /// The user's default web browser, if known.
    fn default_web_browser(&self) -> Option<&AppInfo> {
        None
    }

    fn contains(&self, desktop_id: &str) -> bool {
        self.lookup(desktop_id).is_some()
    }
}

/// What activating a shortcut does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum Activation {
    Builtin(BuiltinAction),
    LaunchApp(String),
    OpenPath(String),
    /// Home or one of the XDG user directories
    OpenUserDir(BuiltinAction),
    Spawn(String),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedShortcut {
    pub name: String,
    pub icon: String,
    pub activation: Activation,
    pub valid: bool,
}

/// First installed software center.
#[must_use]
pub fn find_software_manager(apps: &impl AppDatabase) -> Option<&AppInfo> {
    SOFTWARE_MANAGER_IDS.iter().find_map(|id| apps.lookup(id))
}

/// Resolve `entry` as stored under `key`.
#[must_use]
pub fn resolve(
    entry: &ShortcutEntry,
    key: ShortcutListKey,
    apps: &impl AppDatabase,
) -> ResolvedShortcut {
    let (activation, app, valid) = match &entry.command {
        Command::Unbound => (Activation::Nothing, None, true),
        Command::Builtin(BuiltinAction::Software) => match find_software_manager(apps) {
            Some(app) => (Activation::LaunchApp(app.id.clone()), Some(app), true),
            None => (Activation::Nothing, None, false),
        },
        Command::Builtin(action) if *action == BuiltinAction::Home || action.is_user_dir() => {
            (Activation::OpenUserDir(*action), None, true)
        }
        Command::Builtin(action) => (Activation::Builtin(*action), None, true),
        Command::DesktopApp(id) => match apps.lookup(id) {
            Some(app) => (Activation::LaunchApp(app.id.clone()), Some(app), true),
            None => (Activation::Nothing, None, false),
        },
        Command::Path(path) => (Activation::OpenPath(path.to_string()), None, true),
        literal if literal.is_reserved() => (Activation::Nothing, None, false),
        Command::Literal(text) if key.holds_directories() => {
            (Activation::OpenPath(text.to_string()), None, true)
        }
        Command::Literal(text) => (Activation::Spawn(text.to_string()), None, true),
    };

    ResolvedShortcut {
        name: display_name(entry, app),
        icon: icon_name(entry, app, &activation),
        activation,
        valid,
    }
}

/// Whether the menu should show `entry` at all.
#[must_use]
pub fn should_show(entry: &ShortcutEntry, apps: &impl AppDatabase) -> bool {
    resolve(entry, ShortcutListKey::PinnedApps, apps).valid
}

fn display_name(entry: &ShortcutEntry, app: Option<&AppInfo>) -> String {
    if !entry.name.is_empty() {
        return entry.name.clone();
    }
    match (&entry.command, app) {
        (Command::Builtin(action), _) => action.label().to_string(),
        (_, Some(app)) => app.name.clone(),
        (command, None) => command.as_persisted().into_owned(),
    }
}

fn icon_name(entry: &ShortcutEntry, app: Option<&AppInfo>, activation: &Activation) -> String {
    match &entry.icon {
        IconRef::Themed(name) | IconRef::File(name) => return name.to_string(),
        IconRef::MenuLogo => return MENU_LOGO_ICON.to_string(),
        IconRef::Folder | IconRef::FromApp => {}
    }

    match (&entry.command, app, activation) {
        (Command::Builtin(action), _, _) => action.icon_name(),
        (_, Some(app), _) => app.icon.as_str(),
        (_, None, Activation::OpenPath(_)) => FOLDER_ICON,
        _ if entry.icon == IconRef::Folder => FOLDER_ICON,
        (_, None, Activation::Spawn(_)) => COMMAND_ICON,
        _ => MISSING_ICON,
    }
    .to_string()
}
