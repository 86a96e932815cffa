//! Whole-store text dump.
//!
//! ```text
//! [/]
//! menu-layout="Mint"
//! pinned-app-list=["Terminal","","org.gnome.Terminal.desktop"]
//! ```
//!
//! One line per overridden key, value as compact JSON. Loading a dump
//! replaces every override in the store.

use super::store::{SettingsFile, check_value};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};

const HEADER: &str = "[/]";

/// Render the store's overrides as dump text.
#[must_use]
pub fn dump(store: &SettingsFile) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (key, value) in store.overrides() {
        let _ = writeln!(out, "{key}={value}");
    }
    out
}

/// Parse dump text into key/value pairs.
///
/// Blank lines and `#` comments are skipped. Keys the schema does not know
/// are skipped with a warning.
///
/// # Errors
///
/// Returns [`Error::Dump`] when the header is missing, a line has no `=`, or a
/// value is not valid JSON, and a validation error when a known key has a
/// value of the wrong type.
pub fn parse(text: &str) -> Result<BTreeMap<String, Value>> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    match lines.next() {
        Some((_, HEADER)) => {}
        _ => return Err(Error::Dump(format!("missing {HEADER} header"))),
    }

    let mut values = BTreeMap::new();
    for (number, line) in lines {
        let Some((key, raw)) = line.split_once('=') else {
            return Err(Error::Dump(format!(
                "line {}: expected key=value",
                number + 1
            )));
        };
        let key = key.trim();
        let value: Value = serde_json::from_str(raw.trim())
            .map_err(|e| Error::Dump(format!("line {}: {e}", number + 1)))?;

        match check_value(key, &value) {
            Ok(()) => {
                values.insert(key.to_string(), value);
            }
            Err(Error::UnknownKey(_)) => warn!("Skipping unknown key in dump: {key}"),
            Err(e) => return Err(e),
        }
    }
    Ok(values)
}

/// Write the store's dump to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_to(store: &SettingsFile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, dump(store))?;
    info!("Exported settings to {}", path.display());
    Ok(())
}

/// Replace the store's overrides with the dump at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn import_from(store: &mut SettingsFile, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let values = parse(&text)?;
    let count = values.len();
    store.replace_overrides(values)?;
    info!("Imported {count} settings from {}", path.display());
    Ok(())
}
