//! Shared types for Pinwheel launcher menu components.
//!
//! This crate provides the data types used by pinwheel-core and pinwheel-cli:
//! shortcut entries with their typed command and icon references, the menu
//! layout identifiers, and theme presets. All types are serializable so the
//! CLI can print them as JSON.
//!
//! Commands and icons are tagged unions in memory. The legacy string form
//! (sentinel tokens such as `ArcMenu_Trash`) only appears at the persistence
//! boundary through [`Command::parse`] / [`Command::as_persisted`] and their
//! [`IconRef`] counterparts.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every reserved token in the persisted form.
pub const SENTINEL_PREFIX: &str = "ArcMenu_";

/// Suffix identifying a desktop-application id.
pub const DESKTOP_SUFFIX: &str = ".desktop";

/// Name-field placeholder replaced by the default web browser on first load.
pub const WEB_BROWSER_PLACEHOLDER: &str = "ArcMenu_WebBrowser";

// ============================================================================
// Builtin actions
// ============================================================================

/// Built-in actions addressed by reserved command tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinAction {
    ShowAllApplications,
    RunCommand,
    LogOut,
    Lock,
    PowerOff,
    Restart,
    Suspend,
    Trash,
    Computer,
    Network,
    Home,
    Software,
    ActivitiesOverview,
    Settings,
    Documents,
    Downloads,
    Music,
    Pictures,
    Videos,
}

impl BuiltinAction {
    pub const ALL: [BuiltinAction; 19] = [
        BuiltinAction::ShowAllApplications,
        BuiltinAction::RunCommand,
        BuiltinAction::LogOut,
        BuiltinAction::Lock,
        BuiltinAction::PowerOff,
        BuiltinAction::Restart,
        BuiltinAction::Suspend,
        BuiltinAction::Trash,
        BuiltinAction::Computer,
        BuiltinAction::Network,
        BuiltinAction::Home,
        BuiltinAction::Software,
        BuiltinAction::ActivitiesOverview,
        BuiltinAction::Settings,
        BuiltinAction::Documents,
        BuiltinAction::Downloads,
        BuiltinAction::Music,
        BuiltinAction::Pictures,
        BuiltinAction::Videos,
    ];

    /// The reserved token stored in the `command` field.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::ShowAllApplications => "ArcMenu_ShowAllApplications",
            Self::RunCommand => "ArcMenu_RunCommand",
            Self::LogOut => "ArcMenu_LogOut",
            Self::Lock => "ArcMenu_Lock",
            Self::PowerOff => "ArcMenu_PowerOff",
            Self::Restart => "ArcMenu_Restart",
            Self::Suspend => "ArcMenu_Suspend",
            Self::Trash => "ArcMenu_Trash",
            Self::Computer => "ArcMenu_Computer",
            Self::Network => "ArcMenu_Network",
            Self::Home => "ArcMenu_Home",
            Self::Software => "ArcMenu_Software",
            Self::ActivitiesOverview => "ArcMenu_ActivitiesOverview",
            Self::Settings => "ArcMenu_Settings",
            Self::Documents => "ArcMenu_Documents",
            Self::Downloads => "ArcMenu_Downloads",
            Self::Music => "ArcMenu_Music",
            Self::Pictures => "ArcMenu_Pictures",
            Self::Videos => "ArcMenu_Videos",
        }
    }

    /// Look up the action for an exact reserved token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.token() == token)
    }

    /// Human readable label used when the entry has no name of its own.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ShowAllApplications => "Show Applications",
            Self::RunCommand => "Run Command...",
            Self::LogOut => "Log Out",
            Self::Lock => "Lock",
            Self::PowerOff => "Power Off",
            Self::Restart => "Restart",
            Self::Suspend => "Suspend",
            Self::Trash => "Trash",
            Self::Computer => "Computer",
            Self::Network => "Network",
            Self::Home => "Home",
            Self::Software => "Software",
            Self::ActivitiesOverview => "Activities Overview",
            Self::Settings => "Menu Settings",
            Self::Documents => "Documents",
            Self::Downloads => "Downloads",
            Self::Music => "Music",
            Self::Pictures => "Pictures",
            Self::Videos => "Videos",
        }
    }

    /// Themed icon name shown for the action.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::ShowAllApplications => "view-app-grid-symbolic",
            Self::RunCommand => "system-run-symbolic",
            Self::LogOut => "application-exit-symbolic",
            Self::Lock => "changes-prevent-symbolic",
            Self::PowerOff => "system-shutdown-symbolic",
            Self::Restart => "system-reboot-symbolic",
            Self::Suspend => "media-playback-pause-symbolic",
            Self::Trash => "user-trash-symbolic",
            Self::Computer => "drive-harddisk-symbolic",
            Self::Network => "network-workgroup-symbolic",
            Self::Home => "user-home-symbolic",
            Self::Software => "system-software-install-symbolic",
            Self::ActivitiesOverview => "view-fullscreen-symbolic",
            Self::Settings => "emblem-system-symbolic",
            Self::Documents => "folder-documents-symbolic",
            Self::Downloads => "folder-download-symbolic",
            Self::Music => "folder-music-symbolic",
            Self::Pictures => "folder-pictures-symbolic",
            Self::Videos => "folder-videos-symbolic",
        }
    }

    /// Whether the action opens one of the XDG user directories.
    #[must_use]
    pub fn is_user_dir(self) -> bool {
        matches!(
            self,
            Self::Documents | Self::Downloads | Self::Music | Self::Pictures | Self::Videos
        )
    }

}

impl fmt::Display for BuiltinAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ============================================================================
// Verbatim payload
// ============================================================================

/// Persisted text carried by a [`Command`] or [`IconRef`] variant.
///
/// Only [`Command::parse`] and [`IconRef::parse`] create one, so a variant
/// always holds text that parses back to that same variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verbatim(String);

impl Verbatim {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Verbatim {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Verbatim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Verbatim {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Verbatim {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Command
// ============================================================================

/// What a shortcut does when activated.
///
/// Parsed from the persisted `command` string; [`Command::as_persisted`]
/// returns the exact string it was parsed from. Text-carrying variants can
/// only come out of [`Command::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Command {
    /// Empty command: no action bound
    Unbound,
    /// Reserved sentinel token
    Builtin(BuiltinAction),
    /// Desktop application id (ends with `.desktop`)
    DesktopApp(Verbatim),
    /// Filesystem path (absolute or `~/`-relative)
    Path(Verbatim),
    /// Anything else, run verbatim as a command line
    Literal(Verbatim),
}

impl Command {
    /// Classify a persisted command string.
    ///
    /// Sentinel tokens are checked first so a reserved token never resolves
    /// as a desktop id or path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Unbound;
        }
        if let Some(action) = BuiltinAction::from_token(raw) {
            return Self::Builtin(action);
        }
        let text = Verbatim(raw.to_string());
        if raw.ends_with(DESKTOP_SUFFIX) {
            return Self::DesktopApp(text);
        }
        if raw.starts_with('/') || raw.starts_with("~/") {
            return Self::Path(text);
        }
        Self::Literal(text)
    }

    /// The string stored in the settings array.
    #[must_use]
    pub fn as_persisted(&self) -> Cow<'_, str> {
        match self {
            Self::Unbound => Cow::Borrowed(""),
            Self::Builtin(action) => Cow::Borrowed(action.token()),
            Self::DesktopApp(s) | Self::Path(s) | Self::Literal(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// True for strings in the reserved namespace, known or not.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        match self {
            Self::Builtin(_) => true,
            Self::Literal(s) => s.starts_with(SENTINEL_PREFIX),
            _ => false,
        }
    }

    #[must_use]
    pub fn desktop_id(&self) -> Option<&str> {
        match self {
            Self::DesktopApp(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Command {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Command {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.as_persisted().into_owned()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_persisted())
    }
}

// ============================================================================
// Icon reference
// ============================================================================

/// Where a shortcut's icon comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconRef {
    /// Empty: use the icon of the referenced application
    #[default]
    FromApp,
    /// The menu's own logo (`ArcMenu_ArcMenuIcon`)
    MenuLogo,
    /// Generic folder icon (`ArcMenu_Folder`)
    Folder,
    /// Image file on disk
    File(Verbatim),
    /// Icon-theme name
    Themed(Verbatim),
}

impl IconRef {
    pub const MENU_LOGO_TOKEN: &'static str = "ArcMenu_ArcMenuIcon";
    pub const FOLDER_TOKEN: &'static str = "ArcMenu_Folder";

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Self::FromApp,
            Self::MENU_LOGO_TOKEN => Self::MenuLogo,
            Self::FOLDER_TOKEN => Self::Folder,
            path if path.starts_with('/') => Self::File(Verbatim(path.to_string())),
            name => Self::Themed(Verbatim(name.to_string())),
        }
    }

    #[must_use]
    pub fn as_persisted(&self) -> Cow<'_, str> {
        match self {
            Self::FromApp => Cow::Borrowed(""),
            Self::MenuLogo => Cow::Borrowed(Self::MENU_LOGO_TOKEN),
            Self::Folder => Cow::Borrowed(Self::FOLDER_TOKEN),
            Self::File(s) | Self::Themed(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl From<&str> for IconRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for IconRef {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<IconRef> for String {
    fn from(icon: IconRef) -> Self {
        icon.as_persisted().into_owned()
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_persisted())
    }
}

// ============================================================================
// Shortcut entry
// ============================================================================

/// One pinned app, directory shortcut or application shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortcutEntry {
    pub name: String,
    pub icon: IconRef,
    pub command: Command,
}

impl ShortcutEntry {
    /// Build an entry from the three persisted strings.
    pub fn new(name: impl Into<String>, icon: &str, command: &str) -> Self {
        Self {
            name: name.into(),
            icon: IconRef::parse(icon),
            command: Command::parse(command),
        }
    }

    /// Entry for a pinned desktop application; the icon is taken from the app.
    pub fn app(name: impl Into<String>, desktop_id: &str) -> Self {
        Self::new(name, "", desktop_id)
    }

    #[must_use]
    pub fn builtin(action: BuiltinAction) -> Self {
        Self {
            name: action.label().to_string(),
            icon: IconRef::parse(action.icon_name()),
            command: Command::Builtin(action),
        }
    }

    /// The persisted `(name, icon, command)` triple.
    #[must_use]
    pub fn to_fields(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.icon.as_persisted().into_owned(),
            self.command.as_persisted().into_owned(),
        ]
    }

    /// Sentinel-backed rows cannot be edited in the preferences editor.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !self.command.is_reserved()
    }

    /// Whether this entry carries the web-browser placeholder name.
    #[must_use]
    pub fn is_web_browser_placeholder(&self) -> bool {
        self.name == WEB_BROWSER_PLACEHOLDER
    }
}

impl From<[String; 3]> for ShortcutEntry {
    fn from([name, icon, command]: [String; 3]) -> Self {
        Self::new(name, &icon, &command)
    }
}

// ============================================================================
// Layouts
// ============================================================================

/// Menu presentation styles. Discriminants match the persisted enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutId {
    #[default]
    Default = 0,
    Brisk = 1,
    Whisker = 2,
    GnomeMenu = 3,
    Mint = 4,
    Elementary = 5,
    GnomeDash = 6,
    Simple = 7,
    Simple2 = 8,
    Redmond = 9,
    UbuntuDash = 10,
    Budgie = 11,
    Insider = 12,
    Runner = 13,
    Chromebook = 14,
    Raven = 15,
    Tognee = 16,
    Plasma = 17,
    Windows = 18,
}

impl LayoutId {
    pub const ALL: [LayoutId; 19] = [
        LayoutId::Default,
        LayoutId::Brisk,
        LayoutId::Whisker,
        LayoutId::GnomeMenu,
        LayoutId::Mint,
        LayoutId::Elementary,
        LayoutId::GnomeDash,
        LayoutId::Simple,
        LayoutId::Simple2,
        LayoutId::Redmond,
        LayoutId::UbuntuDash,
        LayoutId::Budgie,
        LayoutId::Insider,
        LayoutId::Runner,
        LayoutId::Chromebook,
        LayoutId::Raven,
        LayoutId::Tognee,
        LayoutId::Plasma,
        LayoutId::Windows,
    ];

    /// Enum nick used in the settings store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Brisk => "Brisk",
            Self::Whisker => "Whisker",
            Self::GnomeMenu => "GnomeMenu",
            Self::Mint => "Mint",
            Self::Elementary => "Elementary",
            Self::GnomeDash => "GnomeDash",
            Self::Simple => "Simple",
            Self::Simple2 => "Simple2",
            Self::Redmond => "Redmond",
            Self::UbuntuDash => "UbuntuDash",
            Self::Budgie => "Budgie",
            Self::Insider => "Insider",
            Self::Runner => "Runner",
            Self::Chromebook => "Chromebook",
            Self::Raven => "Raven",
            Self::Tognee => "Tognee",
            Self::Plasma => "Plasma",
            Self::Windows => "Windows",
        }
    }

    /// Look up a layout by its persisted integer value.
    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|id| *id as u32 == index)
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutId {
    type Err = String;

    /// Accepts the nick case-insensitively, with or without dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown layout: {s}"))
    }
}

/// Layout families shown as categories in the layout chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    Traditional,
    Modern,
    Touch,
    Simple,
    Launcher,
    Alternative,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 6] = [
        LayoutStyle::Traditional,
        LayoutStyle::Modern,
        LayoutStyle::Touch,
        LayoutStyle::Simple,
        LayoutStyle::Launcher,
        LayoutStyle::Alternative,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Modern => "modern",
            Self::Touch => "touch",
            Self::Simple => "simple",
            Self::Launcher => "launcher",
            Self::Alternative => "alternative",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Traditional => {
                "Traditional layouts use a familiar style and have a traditional user experience."
            }
            Self::Modern => {
                "Modern layouts use a style and UX based approach with a focus on design and functionality."
            }
            Self::Touch => {
                "Touch layouts contain large menu elements that are well suited for touch based devices."
            }
            Self::Simple => {
                "Simple layouts are designed for mouse based devices and contain simplistic menu elements."
            }
            Self::Launcher => {
                "Launcher layouts are well suited for keyboard driven devices and provide quick and simple menu elements."
            }
            Self::Alternative => {
                "Alternative layouts have an unconventional style that provide a unique user experience."
            }
        }
    }
}

impl FromStr for LayoutStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| format!("Unknown layout style: {s}"))
    }
}

// ============================================================================
// Theme presets
// ============================================================================

/// A saved color theme.
///
/// Persisted in `color-themes` as an array of 13 strings in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    pub name: String,
    pub menu_color: String,
    pub foreground_color: String,
    pub border_color: String,
    pub highlight_color: String,
    pub highlight_foreground_color: String,
    pub separator_color: String,
    pub font_size: u32,
    pub border_size: u32,
    pub corner_radius: u32,
    pub arrow_size: u32,
    pub menu_margin: u32,
    pub vertical_separator: bool,
}

impl ThemePreset {
    /// Number of fields in the current persisted form.
    pub const FIELD_COUNT: usize = 13;

    /// Fields in persisted order.
    #[must_use]
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.menu_color.clone(),
            self.foreground_color.clone(),
            self.border_color.clone(),
            self.highlight_color.clone(),
            self.highlight_foreground_color.clone(),
            self.separator_color.clone(),
            self.font_size.to_string(),
            self.border_size.to_string(),
            self.corner_radius.to_string(),
            self.arrow_size.to_string(),
            self.menu_margin.to_string(),
            self.vertical_separator.to_string(),
        ]
    }

    /// Whether two presets describe the same look, ignoring the name.
    #[must_use]
    pub fn same_colors(&self, other: &Self) -> bool {
        self.to_fields()[1..] == other.to_fields()[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse_sentinel_first() {
        assert_eq!(
            Command::parse("ArcMenu_Trash"),
            Command::Builtin(BuiltinAction::Trash)
        );
        assert_eq!(Command::parse(""), Command::Unbound);
        assert!(matches!(
            Command::parse("org.gnome.Terminal.desktop"),
            Command::DesktopApp(id) if id == "org.gnome.Terminal.desktop"
        ));
        assert!(matches!(
            Command::parse("/home/user/Projects"),
            Command::Path(path) if path == "/home/user/Projects"
        ));
        assert!(matches!(
            Command::parse("gnome-extensions prefs arcmenu@arcmenu.com"),
            Command::Literal(text) if text == "gnome-extensions prefs arcmenu@arcmenu.com"
        ));
    }

    #[test]
    fn test_unfound_desktop_sentinel_is_desktop_app() {
        let command = Command::parse("ArcMenu_unfound.desktop");
        assert_eq!(command.desktop_id(), Some("ArcMenu_unfound.desktop"));
        assert!(!command.is_reserved());
    }

    #[test]
    fn test_unknown_reserved_token_is_reserved_literal() {
        let command = Command::parse("ArcMenu_Frobnicate");
        assert!(matches!(command, Command::Literal(_)));
        assert!(command.is_reserved());
        assert_eq!(command.as_persisted(), "ArcMenu_Frobnicate");
    }

    #[test]
    fn test_every_builtin_token_round_trips() {
        for action in BuiltinAction::ALL {
            assert!(action.token().starts_with(SENTINEL_PREFIX));
            assert_eq!(BuiltinAction::from_token(action.token()), Some(action));
        }
    }

    #[test]
    fn test_icon_ref_parse() {
        assert_eq!(IconRef::parse(""), IconRef::FromApp);
        assert_eq!(IconRef::parse("ArcMenu_ArcMenuIcon"), IconRef::MenuLogo);
        assert_eq!(IconRef::parse("ArcMenu_Folder"), IconRef::Folder);
        assert!(matches!(
            IconRef::parse("/usr/share/icons/x.svg"),
            IconRef::File(path) if path == "/usr/share/icons/x.svg"
        ));
        assert!(matches!(
            IconRef::parse("utilities-terminal"),
            IconRef::Themed(name) if name == "utilities-terminal"
        ));
    }

    #[test]
    fn test_entry_serializes_persisted_strings() {
        let entry = ShortcutEntry::new("Trash", "", "ArcMenu_Trash");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Trash", "icon": "", "command": "ArcMenu_Trash"})
        );
        let back: ShortcutEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entry_is_editable() {
        assert!(!ShortcutEntry::builtin(BuiltinAction::Home).is_editable());
        assert!(!ShortcutEntry::new("x", "", "ArcMenu_Unknown").is_editable());
        assert!(ShortcutEntry::app("Files", "org.gnome.Nautilus.desktop").is_editable());
    }

    #[test]
    fn test_layout_from_str_and_index() {
        assert_eq!("simple2".parse::<LayoutId>(), Ok(LayoutId::Simple2));
        assert_eq!("gnome-menu".parse::<LayoutId>(), Ok(LayoutId::GnomeMenu));
        assert_eq!("UbuntuDash".parse::<LayoutId>(), Ok(LayoutId::UbuntuDash));
        assert!("nope".parse::<LayoutId>().is_err());
        assert_eq!(LayoutId::from_index(18), Some(LayoutId::Windows));
        assert_eq!(LayoutId::from_index(19), None);
    }

    #[test]
    fn test_layout_serde_uses_nick() {
        let json = serde_json::to_value(LayoutId::GnomeDash).unwrap();
        assert_eq!(json, serde_json::json!("GnomeDash"));
    }

    #[test]
    fn test_theme_preset_fields_order() {
        let preset = ThemePreset {
            name: "Dark".to_string(),
            menu_color: "rgba(28,28,28,0.98)".to_string(),
            foreground_color: "rgba(211,218,227,1)".to_string(),
            border_color: "rgb(63,62,64)".to_string(),
            highlight_color: "rgba(238,238,236,0.08)".to_string(),
            highlight_foreground_color: "rgba(255,255,255,1)".to_string(),
            separator_color: "rgba(255,255,255,0.1)".to_string(),
            font_size: 9,
            border_size: 0,
            corner_radius: 8,
            arrow_size: 12,
            menu_margin: 24,
            vertical_separator: false,
        };
        let fields = preset.to_fields();
        assert_eq!(fields.len(), ThemePreset::FIELD_COUNT);
        assert_eq!(fields[0], "Dark");
        assert_eq!(fields[5], "rgba(255,255,255,1)");
        assert_eq!(fields[12], "false");

        let mut renamed = preset.clone();
        renamed.name = "Other".to_string();
        assert!(preset.same_colors(&renamed));
    }
}

/// Property-based tests for the persisted string form.
#[cfg(test)]
mod proptest_persisted_form_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_raw_command() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            proptest::sample::select(BuiltinAction::ALL.to_vec())
                .prop_map(|a| a.token().to_string()),
            "[a-z.]{1,20}\\.desktop",
            "/[a-zA-Z0-9_/]{0,30}",
            "ArcMenu_[A-Za-z]{1,10}",
            "[a-zA-Z0-9 _\\-.@]{1,40}",
        ]
    }

    /// Every constructible command, including ones built without `parse`.
    fn arb_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::Unbound),
            proptest::sample::select(BuiltinAction::ALL.to_vec()).prop_map(Command::Builtin),
            arb_raw_command().prop_map(|raw| Command::parse(&raw)),
            "\\PC{0,16}".prop_map(|raw| Command::parse(&raw)),
        ]
    }

    fn arb_icon() -> impl Strategy<Value = IconRef> {
        prop_oneof![
            Just(IconRef::FromApp),
            Just(IconRef::MenuLogo),
            Just(IconRef::Folder),
            "\\PC{0,16}".prop_map(|raw| IconRef::parse(&raw)),
            "/\\PC{0,16}".prop_map(|raw| IconRef::parse(&raw)),
        ]
    }

    proptest! {
        #[test]
        fn command_persisted_form_is_lossless(raw in arb_raw_command()) {
            let command = Command::parse(&raw);
            prop_assert_eq!(command.as_persisted(), raw.as_str());
            prop_assert_eq!(Command::parse(&command.as_persisted()), command);
        }

        #[test]
        fn icon_persisted_form_is_lossless(raw in "[a-zA-Z0-9_/\\-.]{0,40}") {
            let icon = IconRef::parse(&raw);
            prop_assert_eq!(icon.as_persisted(), raw.as_str());
        }

        #[test]
        fn any_command_value_reparses_to_itself(command in arb_command()) {
            prop_assert_eq!(Command::parse(&command.as_persisted()), command);
        }

        #[test]
        fn any_icon_value_reparses_to_itself(icon in arb_icon()) {
            prop_assert_eq!(IconRef::parse(&icon.as_persisted()), icon);
        }

        #[test]
        fn any_entry_reparses_to_itself(
            name in "\\PC{0,12}",
            icon in arb_icon(),
            command in arb_command(),
        ) {
            let entry = ShortcutEntry { name, icon, command };
            prop_assert_eq!(ShortcutEntry::from(entry.to_fields()), entry);
        }
    }
}
