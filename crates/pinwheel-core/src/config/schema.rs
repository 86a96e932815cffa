//! Settings schema: every key the menu understands, its type and default.
//!
//! The store only persists overridden keys; reads of a key that was never set
//! fall back to the default declared here.

use pinwheel_types::LayoutId;
use serde_json::{Value, json};

/// Shape of a setting's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    Int { min: i64, max: i64 },
    /// String restricted to one of the listed nicks
    Enum(&'static [&'static str]),
    String,
    /// Flat array of strings
    Strv,
    /// Array of string arrays
    StringArrays,
}

impl SettingKind {
    /// Description used in type-mismatch errors.
    #[must_use]
    pub fn expected(self) -> &'static str {
        match self {
            Self::Bool => "a boolean",
            Self::Int { .. } => "an integer",
            Self::Enum(_) => "one of the enum nicks",
            Self::String => "a string",
            Self::Strv => "an array of strings",
            Self::StringArrays => "an array of string arrays",
        }
    }

    /// Check a JSON value against this kind.
    ///
    /// Returns `Err(None)` on a shape mismatch and `Err(Some(reason))` when the
    /// shape is right but the value is out of range.
    pub fn check(self, value: &Value) -> Result<(), Option<String>> {
        match self {
            Self::Bool if value.is_boolean() => Ok(()),
            Self::Int { min, max } => {
                let n = value.as_i64().ok_or(None)?;
                if (min..=max).contains(&n) {
                    Ok(())
                } else {
                    Err(Some(format!("{n} is outside {min}..={max}")))
                }
            }
            Self::Enum(nicks) => {
                let s = value.as_str().ok_or(None)?;
                if nicks.contains(&s) {
                    Ok(())
                } else {
                    Err(Some(format!("'{s}' is not one of {}", nicks.join(", "))))
                }
            }
            Self::String if value.is_string() => Ok(()),
            Self::Strv if is_string_array(value) => Ok(()),
            Self::StringArrays => match value.as_array() {
                Some(items) if items.iter().all(is_string_array) => Ok(()),
                _ => Err(None),
            },
            _ => Err(None),
        }
    }
}

fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

/// One entry of the schema.
#[derive(Debug, Clone, Copy)]
pub struct SettingSpec {
    pub key: &'static str,
    pub kind: SettingKind,
    pub summary: &'static str,
    default: fn() -> Value,
}

impl SettingSpec {
    #[must_use]
    pub fn default_value(&self) -> Value {
        (self.default)()
    }
}

pub const LAYOUT_NICKS: &[&str] = &[
    "Default",
    "Brisk",
    "Whisker",
    "GnomeMenu",
    "Mint",
    "Elementary",
    "GnomeDash",
    "Simple",
    "Simple2",
    "Redmond",
    "UbuntuDash",
    "Budgie",
    "Insider",
    "Runner",
    "Chromebook",
    "Raven",
    "Tognee",
    "Plasma",
    "Windows",
];

const SEARCHBAR_LOCATIONS: &[&str] = &["Bottom", "Top"];
const AVATAR_STYLES: &[&str] = &["Round", "Square"];
const RUNNER_POSITIONS: &[&str] = &["Top", "Centered"];
const DEFAULT_MENU_VIEWS: &[&str] = &["PinnedApps", "CategoriesList", "FrequentApps"];
const DEFAULT_MENU_VIEWS_TOGNEE: &[&str] = &["CategoriesList", "AllPrograms"];

fn strv(items: &[&str]) -> Value {
    json!(items)
}

fn triples(items: &[[&str; 3]]) -> Value {
    json!(items)
}

fn default_layout() -> Value {
    json!(LayoutId::Default.as_str())
}

fn default_pinned_apps() -> Value {
    strv(&[
        "ArcMenu_WebBrowser",
        "",
        "",
        "Terminal",
        "",
        "org.gnome.Terminal.desktop",
        "ArcMenu Settings",
        "ArcMenu_ArcMenuIcon",
        "ArcMenu_Settings",
    ])
}

fn default_mint_pinned_apps() -> Value {
    strv(&[
        "Home",
        "",
        "ArcMenu_Home",
        "Software",
        "",
        "ArcMenu_Software",
        "Settings",
        "",
        "gnome-control-center.desktop",
        "Terminal",
        "",
        "org.gnome.Terminal.desktop",
        "Lock",
        "",
        "ArcMenu_Lock",
        "Log Out",
        "",
        "ArcMenu_LogOut",
        "Power Off",
        "",
        "ArcMenu_PowerOff",
    ])
}

fn default_brisk_shortcuts() -> Value {
    strv(&[
        "Software",
        "",
        "ArcMenu_Software",
        "Settings",
        "",
        "gnome-control-center.desktop",
        "Tweaks",
        "",
        "org.gnome.tweaks.desktop",
    ])
}

fn default_ubuntu_dash_pinned_apps() -> Value {
    strv(&[
        "Home",
        "",
        "ArcMenu_Home",
        "Documents",
        "",
        "ArcMenu_Documents",
        "Downloads",
        "",
        "ArcMenu_Downloads",
        "Software",
        "",
        "ArcMenu_Software",
        "Settings",
        "",
        "gnome-control-center.desktop",
        "Terminal",
        "",
        "org.gnome.Terminal.desktop",
    ])
}

fn default_directory_shortcuts() -> Value {
    triples(&[
        ["Home", "ArcMenu_Folder", "ArcMenu_Home"],
        ["Documents", "ArcMenu_Folder", "ArcMenu_Documents"],
        ["Downloads", "ArcMenu_Folder", "ArcMenu_Downloads"],
        ["Music", "ArcMenu_Folder", "ArcMenu_Music"],
        ["Pictures", "ArcMenu_Folder", "ArcMenu_Pictures"],
        ["Videos", "ArcMenu_Folder", "ArcMenu_Videos"],
    ])
}

fn default_application_shortcuts() -> Value {
    triples(&[
        ["Software", "system-software-install-symbolic", "ArcMenu_Software"],
        ["Settings", "", "gnome-control-center.desktop"],
        ["Tweaks", "", "org.gnome.tweaks.desktop"],
        ["Terminal", "", "org.gnome.Terminal.desktop"],
        [
            "Activities Overview",
            "view-fullscreen-symbolic",
            "ArcMenu_ActivitiesOverview",
        ],
    ])
}

fn empty_arrays() -> Value {
    json!([])
}

fn yes() -> Value {
    json!(true)
}

fn no() -> Value {
    json!(false)
}

macro_rules! setting {
    ($key:literal, $kind:expr, $default:expr, $summary:literal) => {
        SettingSpec {
            key: $key,
            kind: $kind,
            summary: $summary,
            default: $default,
        }
    };
}

/// All known settings.
pub static SCHEMA: &[SettingSpec] = &[
    // Layout
    setting!(
        "menu-layout",
        SettingKind::Enum(LAYOUT_NICKS),
        default_layout,
        "Menu layout"
    ),
    // Shortcut lists
    setting!(
        "pinned-app-list",
        SettingKind::Strv,
        default_pinned_apps,
        "Pinned apps"
    ),
    setting!(
        "mint-pinned-app-list",
        SettingKind::Strv,
        default_mint_pinned_apps,
        "Mint layout shortcut column"
    ),
    setting!(
        "mint-separator-index",
        SettingKind::Int { min: 0, max: 7 },
        || json!(4),
        "Mint layout separator position"
    ),
    setting!(
        "brisk-shortcuts-list",
        SettingKind::Strv,
        default_brisk_shortcuts,
        "Brisk layout shortcuts"
    ),
    setting!(
        "ubuntu-dash-pinned-app-list",
        SettingKind::Strv,
        default_ubuntu_dash_pinned_apps,
        "Ubuntu Dash shortcut row"
    ),
    setting!(
        "ubuntu-dash-separator-index",
        SettingKind::Int { min: 0, max: 7 },
        || json!(3),
        "Ubuntu Dash separator position"
    ),
    setting!(
        "directory-shortcuts-list",
        SettingKind::StringArrays,
        default_directory_shortcuts,
        "Directory shortcuts"
    ),
    setting!(
        "application-shortcuts-list",
        SettingKind::StringArrays,
        default_application_shortcuts,
        "Application shortcuts"
    ),
    // Theme
    setting!(
        "color-themes",
        SettingKind::StringArrays,
        empty_arrays,
        "Saved color theme presets"
    ),
    setting!(
        "enable-custom-arc-menu",
        SettingKind::Bool,
        no,
        "Use custom menu theme"
    ),
    setting!(
        "menu-color",
        SettingKind::String,
        || json!("rgba(28,28,28,0.98)"),
        "Menu background color"
    ),
    setting!(
        "menu-foreground-color",
        SettingKind::String,
        || json!("rgba(211,218,227,1)"),
        "Menu foreground color"
    ),
    setting!(
        "border-color",
        SettingKind::String,
        || json!("rgb(63,62,64)"),
        "Border color"
    ),
    setting!(
        "highlight-color",
        SettingKind::String,
        || json!("rgba(238,238,236,0.08)"),
        "Highlight color"
    ),
    setting!(
        "highlight-foreground-color",
        SettingKind::String,
        || json!("rgba(255,255,255,1)"),
        "Highlighted item foreground color"
    ),
    setting!(
        "separator-color",
        SettingKind::String,
        || json!("rgba(255,255,255,0.1)"),
        "Separator color"
    ),
    setting!(
        "menu-font-size",
        SettingKind::Int { min: 8, max: 18 },
        || json!(9),
        "Font size"
    ),
    setting!(
        "menu-border-size",
        SettingKind::Int { min: 0, max: 4 },
        || json!(0),
        "Border size"
    ),
    setting!(
        "menu-corner-radius",
        SettingKind::Int { min: 0, max: 20 },
        || json!(8),
        "Corner radius"
    ),
    setting!(
        "menu-arrow-size",
        SettingKind::Int { min: 0, max: 30 },
        || json!(12),
        "Arrow size"
    ),
    setting!(
        "menu-margin",
        SettingKind::Int { min: 0, max: 30 },
        || json!(24),
        "Menu displacement"
    ),
    setting!(
        "vertical-separator",
        SettingKind::Bool,
        no,
        "Show vertical separator"
    ),
    // Layout tweaks
    setting!(
        "activate-on-hover",
        SettingKind::Bool,
        no,
        "Activate categories on hover"
    ),
    setting!(
        "avatar-style",
        SettingKind::Enum(AVATAR_STYLES),
        || json!("Round"),
        "User avatar icon shape"
    ),
    setting!(
        "searchbar-default-bottom-location",
        SettingKind::Enum(SEARCHBAR_LOCATIONS),
        || json!("Bottom"),
        "Searchbar location (bottom default)"
    ),
    setting!(
        "searchbar-default-top-location",
        SettingKind::Enum(SEARCHBAR_LOCATIONS),
        || json!("Top"),
        "Searchbar location (top default)"
    ),
    setting!(
        "enable-horizontal-flip",
        SettingKind::Bool,
        no,
        "Flip layout horizontally"
    ),
    setting!(
        "disable-user-avatar",
        SettingKind::Bool,
        no,
        "Hide the user avatar"
    ),
    setting!(
        "default-menu-view",
        SettingKind::Enum(DEFAULT_MENU_VIEWS),
        || json!("PinnedApps"),
        "Default view of the left box"
    ),
    setting!(
        "default-menu-view-tognee",
        SettingKind::Enum(DEFAULT_MENU_VIEWS_TOGNEE),
        || json!("CategoriesList"),
        "Default view (Tognee)"
    ),
    setting!(
        "gnome-dash-show-applications",
        SettingKind::Bool,
        yes,
        "Open the app grid"
    ),
    setting!(
        "plasma-enable-hover",
        SettingKind::Bool,
        no,
        "Activate tabs on hover"
    ),
    setting!(
        "plasma-show-descriptions",
        SettingKind::Bool,
        yes,
        "Show app descriptions"
    ),
    setting!(
        "plasma-selected-color",
        SettingKind::String,
        || json!("rgb(246,116,0)"),
        "Selected tab foreground"
    ),
    setting!(
        "plasma-selected-background-color",
        SettingKind::String,
        || json!("rgba(196,196,196,0.25)"),
        "Selected tab background"
    ),
    setting!(
        "enable-activities-shortcut",
        SettingKind::Bool,
        yes,
        "Show the Activities shortcut"
    ),
    setting!(
        "runner-position",
        SettingKind::Enum(RUNNER_POSITIONS),
        || json!("Top"),
        "Runner position"
    ),
    setting!(
        "krunner-show-details",
        SettingKind::Bool,
        no,
        "Show extra result details"
    ),
    setting!(
        "enable-ubuntu-homescreen",
        SettingKind::Bool,
        yes,
        "Show the home screen"
    ),
    setting!(
        "remove-menu-arrow",
        SettingKind::Bool,
        no,
        "Hide the menu arrow"
    ),
    setting!(
        "enable-weather-widget-ubuntu",
        SettingKind::Bool,
        yes,
        "Weather widget (Ubuntu Dash)"
    ),
    setting!(
        "enable-clock-widget-ubuntu",
        SettingKind::Bool,
        yes,
        "Clock widget (Ubuntu Dash)"
    ),
    setting!(
        "enable-weather-widget-raven",
        SettingKind::Bool,
        yes,
        "Weather widget (Raven)"
    ),
    setting!(
        "enable-clock-widget-raven",
        SettingKind::Bool,
        yes,
        "Clock widget (Raven)"
    ),
    // Misc
    setting!(
        "default-web-browser",
        SettingKind::String,
        || json!(""),
        "Desktop id used for the web browser placeholder"
    ),
];

/// Find the spec for a key.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static SettingSpec> {
    SCHEMA.iter().find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for spec in SCHEMA {
            assert!(seen.insert(spec.key), "duplicate key {}", spec.key);
        }
    }

    #[test]
    fn test_every_default_matches_its_kind() {
        for spec in SCHEMA {
            assert!(
                spec.kind.check(&spec.default_value()).is_ok(),
                "default of {} does not match its kind",
                spec.key
            );
        }
    }

    #[test]
    fn test_flat_list_defaults_have_stride_three() {
        for key in [
            "pinned-app-list",
            "mint-pinned-app-list",
            "brisk-shortcuts-list",
            "ubuntu-dash-pinned-app-list",
        ] {
            let value = lookup(key).unwrap().default_value();
            assert_eq!(value.as_array().unwrap().len() % 3, 0, "{key}");
        }
    }

    #[test]
    fn test_layout_nicks_match_layout_ids() {
        let ids: Vec<&str> = LayoutId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, LAYOUT_NICKS);
    }

    #[test]
    fn test_check_int_range() {
        let kind = SettingKind::Int { min: 0, max: 4 };
        assert!(kind.check(&json!(2)).is_ok());
        assert!(matches!(kind.check(&json!(9)), Err(Some(_))));
        assert_eq!(kind.check(&json!("2")), Err(None));
    }

    #[test]
    fn test_check_enum() {
        let kind = SettingKind::Enum(RUNNER_POSITIONS);
        assert!(kind.check(&json!("Centered")).is_ok());
        assert!(matches!(kind.check(&json!("Left")), Err(Some(_))));
        assert_eq!(kind.check(&json!(1)), Err(None));
    }

    #[test]
    fn test_check_string_arrays() {
        let kind = SettingKind::StringArrays;
        assert!(kind.check(&json!([["a", "b", "c"], []])).is_ok());
        assert_eq!(kind.check(&json!(["a", "b"])), Err(None));
        assert_eq!(kind.check(&json!([[1]])), Err(None));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("pinned-apps").is_none());
        assert!(lookup("pinned-app-list").is_some());
    }
}
