//! Layout registry.
//!
//! Every [`LayoutId`] has one registry entry describing how the preferences
//! window presents it and which settings it reads. Tweak panels are built
//! per layout; a row's control type follows the schema kind of its key.

use crate::config::SettingsPort;
use crate::config::schema::{self, SettingKind};
use crate::shortcuts::ShortcutListKey;
use crate::{Error, Result};
use pinwheel_types::{LayoutId, LayoutStyle};
use serde::Serialize;
use tracing::info;

pub const LAYOUT_KEY: &str = "menu-layout";

/// Static description of one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutInfo {
    pub id: LayoutId,
    pub style: LayoutStyle,
    pub name: &'static str,
    pub tweaks_title: &'static str,
    pub thumbnail: &'static str,
    /// Shortcut lists the layout renders, in display order
    pub lists: &'static [ShortcutListKey],
}

/// One row of a tweak panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TweakRow {
    pub key: &'static str,
    pub label: &'static str,
}

impl TweakRow {
    /// Schema kind of the row's key; `None` only for keys missing from the
    /// schema.
    #[must_use]
    pub fn kind(&self) -> Option<SettingKind> {
        schema::lookup(self.key).map(|spec| spec.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweakPanel {
    pub title: &'static str,
    pub rows: Vec<TweakRow>,
}

impl TweakPanel {
    /// Layouts with nothing to tweak show a placeholder page.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().map(|row| row.key)
    }
}

const PINNED: &[ShortcutListKey] = &[ShortcutListKey::PinnedApps];
const ARC_MENU_LISTS: &[ShortcutListKey] = &[
    ShortcutListKey::PinnedApps,
    ShortcutListKey::DirectoryShortcuts,
    ShortcutListKey::ApplicationShortcuts,
];
const NO_LISTS: &[ShortcutListKey] = &[];

macro_rules! layout {
    ($id:ident, $style:ident, $name:literal, $thumb:literal, $lists:expr) => {
        LayoutInfo {
            id: LayoutId::$id,
            style: LayoutStyle::$style,
            name: $name,
            tweaks_title: concat!($name, " Tweaks"),
            thumbnail: concat!("/media/layouts/", $thumb, ".svg"),
            lists: $lists,
        }
    };
}

/// Registry entry for `id`.
#[must_use]
pub fn info(id: LayoutId) -> LayoutInfo {
    use LayoutId as L;
    match id {
        L::Default => layout!(Default, Traditional, "ArcMenu", "arc-menu", ARC_MENU_LISTS),
        L::Brisk => layout!(
            Brisk,
            Traditional,
            "Brisk Menu Style",
            "brisk-menu",
            &[ShortcutListKey::BriskShortcuts]
        ),
        L::Whisker => layout!(
            Whisker,
            Traditional,
            "Whisker Menu Style",
            "whisker-menu",
            PINNED
        ),
        L::GnomeMenu => layout!(
            GnomeMenu,
            Traditional,
            "GNOME Menu Style",
            "gnome-menu",
            PINNED
        ),
        L::Mint => layout!(
            Mint,
            Traditional,
            "Mint Menu Style",
            "mint-menu",
            &[ShortcutListKey::MintPinnedApps, ShortcutListKey::PinnedApps]
        ),
        L::Budgie => layout!(Budgie, Traditional, "Budgie Style", "budgie-menu", PINNED),
        L::UbuntuDash => layout!(
            UbuntuDash,
            Modern,
            "Ubuntu Dash Style",
            "ubuntu-dash-menu",
            &[ShortcutListKey::UbuntuDashPinnedApps, ShortcutListKey::PinnedApps]
        ),
        L::Plasma => layout!(Plasma, Modern, "Plasma Style", "plasma-menu", PINNED),
        L::Tognee => layout!(Tognee, Modern, "tognee Menu", "tognee-menu", PINNED),
        L::Insider => layout!(Insider, Modern, "Insider Menu", "insider", PINNED),
        L::Redmond => layout!(
            Redmond,
            Modern,
            "Redmond Menu Style",
            "redmond-style-menu",
            PINNED
        ),
        L::Windows => layout!(Windows, Modern, "Windows 10 Style", "windows", PINNED),
        L::Elementary => layout!(
            Elementary,
            Touch,
            "Elementary Menu Style",
            "elementary-menu",
            NO_LISTS
        ),
        L::Chromebook => layout!(
            Chromebook,
            Touch,
            "Chromebook Style",
            "chromebook-menu",
            NO_LISTS
        ),
        L::Runner => layout!(Runner, Launcher, "KRunner Style", "krunner-menu", NO_LISTS),
        L::GnomeDash => layout!(
            GnomeDash,
            Launcher,
            "GNOME Dash Style",
            "gnome-dash-menu",
            NO_LISTS
        ),
        L::Simple => layout!(Simple, Simple, "Simple Menu Style", "simple-menu", NO_LISTS),
        L::Simple2 => layout!(
            Simple2,
            Simple,
            "Simple Menu 2 Style",
            "simple-menu-2",
            NO_LISTS
        ),
        L::Raven => layout!(Raven, Alternative, "Raven Menu Style", "raven-menu", PINNED),
    }
}

/// Every layout, in registry order.
pub fn all() -> impl Iterator<Item = LayoutInfo> {
    LayoutId::ALL.into_iter().map(info)
}

/// Layouts belonging to `style`.
pub fn in_style(style: LayoutStyle) -> impl Iterator<Item = LayoutInfo> {
    all().filter(move |layout| layout.style == style)
}

/// Tweak panel for `id`.
#[must_use]
pub fn tweak_panel(id: LayoutId) -> TweakPanel {
    let rows = match id {
        LayoutId::Default => default_tweaks(),
        LayoutId::Brisk => brisk_tweaks(),
        LayoutId::Whisker => whisker_tweaks(),
        LayoutId::GnomeMenu => gnome_menu_tweaks(),
        LayoutId::Mint => mint_tweaks(),
        LayoutId::Elementary | LayoutId::Chromebook => vec![SEARCHBAR_TOP],
        LayoutId::GnomeDash => gnome_dash_tweaks(),
        LayoutId::Simple | LayoutId::Simple2 | LayoutId::Windows => Vec::new(),
        LayoutId::Redmond => redmond_tweaks(),
        LayoutId::UbuntuDash => ubuntu_dash_tweaks(),
        LayoutId::Budgie => budgie_tweaks(),
        LayoutId::Insider => vec![AVATAR_STYLE],
        LayoutId::Runner => runner_tweaks(),
        LayoutId::Raven => raven_tweaks(),
        LayoutId::Tognee => tognee_tweaks(),
        LayoutId::Plasma => plasma_tweaks(),
    };
    TweakPanel {
        title: info(id).tweaks_title,
        rows,
    }
}

/// The layout currently selected in settings.
///
/// # Errors
///
/// Returns an error if the key cannot be read or holds an unknown nick.
pub fn current(port: &impl SettingsPort) -> Result<LayoutId> {
    let nick = port.get_string(LAYOUT_KEY)?;
    nick.parse::<LayoutId>().map_err(|reason| Error::InvalidValue {
        key: LAYOUT_KEY.to_string(),
        reason,
    })
}

/// Select `id` as the menu layout.
///
/// # Errors
///
/// Returns an error if the settings store rejects the write.
pub fn select(port: &mut impl SettingsPort, id: LayoutId) -> Result<()> {
    port.set_string(LAYOUT_KEY, id.as_str())?;
    info!("Selected layout {id}");
    Ok(())
}

const fn row(key: &'static str, label: &'static str) -> TweakRow {
    TweakRow { key, label }
}

const ACTIVATE_ON_HOVER: TweakRow = row("activate-on-hover", "Category Activation");
const AVATAR_STYLE: TweakRow = row("avatar-style", "Avatar Icon Shape");
const SEARCHBAR_TOP: TweakRow = row("searchbar-default-top-location", "Searchbar Location");
const SEARCHBAR_BOTTOM: TweakRow = row("searchbar-default-bottom-location", "Searchbar Location");
const FLIP: TweakRow = row("enable-horizontal-flip", "Flip Layout Horizontally");
const DISABLE_AVATAR: TweakRow = row("disable-user-avatar", "Disable User Avatar");

fn default_tweaks() -> Vec<TweakRow> {
    vec![
        row("default-menu-view", "Default View"),
        SEARCHBAR_BOTTOM,
        FLIP,
        AVATAR_STYLE,
        DISABLE_AVATAR,
    ]
}

fn brisk_tweaks() -> Vec<TweakRow> {
    vec![
        ACTIVATE_ON_HOVER,
        SEARCHBAR_TOP,
        FLIP,
        row("brisk-shortcuts-list", "Brisk Menu Shortcuts"),
    ]
}

fn whisker_tweaks() -> Vec<TweakRow> {
    vec![ACTIVATE_ON_HOVER, AVATAR_STYLE, SEARCHBAR_TOP, FLIP]
}

fn gnome_menu_tweaks() -> Vec<TweakRow> {
    vec![ACTIVATE_ON_HOVER, FLIP]
}

fn mint_tweaks() -> Vec<TweakRow> {
    vec![
        ACTIVATE_ON_HOVER,
        SEARCHBAR_TOP,
        FLIP,
        row("mint-pinned-app-list", "Mint Layout Shortcuts"),
        row("mint-separator-index", "Separator Position"),
    ]
}

fn gnome_dash_tweaks() -> Vec<TweakRow> {
    vec![row("gnome-dash-show-applications", "Show Applications Grid")]
}

fn redmond_tweaks() -> Vec<TweakRow> {
    vec![SEARCHBAR_TOP, FLIP, AVATAR_STYLE, DISABLE_AVATAR]
}

fn ubuntu_dash_tweaks() -> Vec<TweakRow> {
    vec![
        row("enable-ubuntu-homescreen", "Default Screen"),
        row("remove-menu-arrow", "Disable Menu Arrow"),
        row("ubuntu-dash-pinned-app-list", "Ubuntu Dash Shortcuts"),
        row("ubuntu-dash-separator-index", "Separator Position"),
        row("enable-weather-widget-ubuntu", "Enable Weather Widget"),
        row("enable-clock-widget-ubuntu", "Enable Clock Widget"),
    ]
}

fn budgie_tweaks() -> Vec<TweakRow> {
    vec![
        ACTIVATE_ON_HOVER,
        SEARCHBAR_TOP,
        FLIP,
        row(
            "enable-activities-shortcut",
            "Enable Activities Overview Shortcut",
        ),
    ]
}

fn runner_tweaks() -> Vec<TweakRow> {
    vec![
        row("runner-position", "KRunner Position"),
        row(
            "krunner-show-details",
            "Show Extra Large Icons with App Descriptions",
        ),
    ]
}

fn raven_tweaks() -> Vec<TweakRow> {
    vec![
        row("enable-ubuntu-homescreen", "Default Screen"),
        row("enable-weather-widget-raven", "Enable Weather Widget"),
        row("enable-clock-widget-raven", "Enable Clock Widget"),
    ]
}

fn tognee_tweaks() -> Vec<TweakRow> {
    vec![
        row("default-menu-view-tognee", "Default View"),
        SEARCHBAR_BOTTOM,
        FLIP,
        AVATAR_STYLE,
    ]
}

fn plasma_tweaks() -> Vec<TweakRow> {
    vec![
        SEARCHBAR_TOP,
        row("plasma-enable-hover", "Activate on Hover"),
        row("plasma-show-descriptions", "Show Application Descriptions"),
        row("plasma-selected-color", "Selected Button Border Color"),
        row(
            "plasma-selected-background-color",
            "Selected Button Background Color",
        ),
    ]
}
