//! Index of installed applications found in the XDG application directories.

use crate::Result;
use crate::shortcuts::{AppDatabase, AppInfo};
use pinwheel_types::DESKTOP_SUFFIX;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const MIMEAPPS_FILE: &str = "mimeapps.list";
const BROWSER_MIME_TYPES: &[&str] = &["x-scheme-handler/https", "x-scheme-handler/http"];

/// Installed applications keyed by desktop id.
///
/// Built from desktop file names only; the files themselves are not parsed,
/// so names and icons are derived from the id.
#[derive(Debug, Clone, Default)]
pub struct AppIndex {
    apps: BTreeMap<String, AppInfo>,
    default_browser: Option<String>,
}

impl AppIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the standard XDG application directories and detect the default
    /// browser from `mimeapps.list`.
    #[must_use]
    pub fn from_system() -> Self {
        let mut index = Self::scan(&application_dirs());
        index.default_browser = config_dirs()
            .iter()
            .find_map(|dir| default_browser_from(&dir.join(MIMEAPPS_FILE)));
        index
    }

    /// Scan `dirs` in precedence order; the first directory providing an id
    /// wins. Unreadable directories are skipped.
    #[must_use]
    pub fn scan(dirs: &[PathBuf]) -> Self {
        let mut index = Self::default();
        for dir in dirs {
            if let Err(e) = index.scan_dir(dir, "") {
                debug!("Skipping {}: {e}", dir.display());
            }
        }
        debug!("Indexed {} applications", index.apps.len());
        index
    }

    // Subdirectories contribute `-`-joined prefixes, as in `kde-dolphin.desktop`
    fn scan_dir(&mut self, dir: &Path, prefix: &str) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if entry.file_type()?.is_dir() {
                let nested = format!("{prefix}{file_name}-");
                if let Err(e) = self.scan_dir(&path, &nested) {
                    warn!("Failed to scan {}: {e}", path.display());
                }
            } else if file_name.ends_with(DESKTOP_SUFFIX) {
                let id = format!("{prefix}{file_name}");
                self.apps.entry(id.clone()).or_insert_with(|| derive_info(&id));
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, app: AppInfo) {
        self.apps.insert(app.id.clone(), app);
    }

    pub fn set_default_browser(&mut self, desktop_id: Option<String>) {
        self.default_browser = desktop_id;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppInfo> {
        self.apps.values()
    }
}

impl AppDatabase for AppIndex {
    fn lookup(&self, desktop_id: &str) -> Option<&AppInfo> {
        self.apps.get(desktop_id)
    }

    fn default_web_browser(&self) -> Option<&AppInfo> {
        self.default_browser
            .as_deref()
            .and_then(|id| self.apps.get(id))
    }
}

/// `$XDG_DATA_HOME/applications` followed by each `$XDG_DATA_DIRS` entry.
#[must_use]
pub fn application_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(base) = directories::BaseDirs::new() {
        dirs.push(base.data_dir().join("applications"));
    }
    let system = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    dirs.extend(
        system
            .split(':')
            .filter(|s| !s.is_empty())
            .map(|s| Path::new(s).join("applications")),
    );
    dirs
}

fn config_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(base) = directories::BaseDirs::new() {
        dirs.push(base.config_dir().to_path_buf());
    }
    dirs.push(PathBuf::from("/etc/xdg"));
    dirs
}

/// Desktop id registered for web links in a `mimeapps.list`.
fn default_browser_from(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_default_browser(&content)
}

fn parse_default_browser(content: &str) -> Option<String> {
    let mut in_defaults = false;
    let mut found: BTreeMap<&str, &str> = BTreeMap::new();

    for line in content.lines().map(str::trim) {
        if line.starts_with('[') {
            in_defaults = line == "[Default Applications]";
            continue;
        }
        if !in_defaults {
            continue;
        }
        if let Some((mime, apps)) = line.split_once('=')
            && let Some(first) = apps.split(';').map(str::trim).find(|s| !s.is_empty())
        {
            found.insert(mime.trim(), first);
        }
    }

    BROWSER_MIME_TYPES
        .iter()
        .find_map(|mime| found.get(mime))
        .map(|id| (*id).to_string())
}

/// Name and icon guessed from a desktop id:
/// `org.gnome.Terminal.desktop` becomes "Terminal" with icon
/// `org.gnome.Terminal`.
fn derive_info(id: &str) -> AppInfo {
    let stem = id.strip_suffix(DESKTOP_SUFFIX).unwrap_or(id);
    let last = stem.rsplit('.').next().unwrap_or(stem);
    let name = last
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    AppInfo::new(id, name, stem)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
