//! Theme presets: stored color themes, their text export format, and
//! applying them to the live theme settings.
//!
//! Presets live in `color-themes` as arrays of strings. Older releases wrote
//! 12 fields with no highlighted-foreground color; those are upgraded on read
//! by deriving that color from the foreground color.

mod color;

pub use color::{Rgba, modify_luminance};

use crate::config::{SettingsPort, check_value};
use crate::{Error, Result};
use pinwheel_types::ThemePreset;
use serde_json::Value;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};

pub const COLOR_THEMES_KEY: &str = "color-themes";

/// Field separator of the export format.
pub const FIELD_DELIMITER: &str = "//";

const LEGACY_FIELD_COUNT: usize = 12;
const HIGHLIGHT_FOREGROUND_INDEX: usize = 5;
const FOREGROUND_INDEX: usize = 2;
const HIGHLIGHT_FOREGROUND_LIGHTEN: f64 = 0.15;

/// Settings keys backing the live theme, in preset field order after the name.
const THEME_KEYS: [&str; 12] = [
    "menu-color",
    "menu-foreground-color",
    "border-color",
    "highlight-color",
    "highlight-foreground-color",
    "separator-color",
    "menu-font-size",
    "menu-border-size",
    "menu-corner-radius",
    "menu-arrow-size",
    "menu-margin",
    "vertical-separator",
];

/// Upgrade a 12-field preset to the current layout. Current presets pass
/// through unchanged.
///
/// # Errors
///
/// Returns [`Error::Preset`] for other field counts, or when the foreground
/// color of a legacy preset cannot be parsed.
pub fn migrate_fields(mut fields: Vec<String>) -> Result<Vec<String>> {
    match fields.len() {
        ThemePreset::FIELD_COUNT => Ok(fields),
        LEGACY_FIELD_COUNT => {
            let foreground = &fields[FOREGROUND_INDEX];
            let derived = modify_luminance(foreground, HIGHLIGHT_FOREGROUND_LIGHTEN)
                .ok_or_else(|| {
                    Error::Preset(format!("unparseable foreground color '{foreground}'"))
                })?;
            fields.insert(HIGHLIGHT_FOREGROUND_INDEX, derived);
            Ok(fields)
        }
        n => Err(Error::Preset(format!(
            "expected {} fields, found {n}",
            ThemePreset::FIELD_COUNT
        ))),
    }
}

/// Build a preset from stored fields, migrating legacy presets.
///
/// # Errors
///
/// Returns [`Error::Preset`] when the field count is wrong or a numeric or
/// boolean field does not parse.
pub fn preset_from_fields(fields: Vec<String>) -> Result<ThemePreset> {
    let fields = migrate_fields(fields)?;
    let number = |i: usize| -> Result<u32> {
        fields[i]
            .trim()
            .parse()
            .map_err(|_| Error::Preset(format!("field {i} is not a number: '{}'", fields[i])))
    };
    let flag = |i: usize| -> Result<bool> {
        fields[i]
            .trim()
            .parse()
            .map_err(|_| Error::Preset(format!("field {i} is not a boolean: '{}'", fields[i])))
    };

    Ok(ThemePreset {
        name: fields[0].clone(),
        menu_color: fields[1].clone(),
        foreground_color: fields[2].clone(),
        border_color: fields[3].clone(),
        highlight_color: fields[4].clone(),
        highlight_foreground_color: fields[5].clone(),
        separator_color: fields[6].clone(),
        font_size: number(7)?,
        border_size: number(8)?,
        corner_radius: number(9)?,
        arrow_size: number(10)?,
        menu_margin: number(11)?,
        vertical_separator: flag(12)?,
    })
}

/// Read every stored preset. Legacy presets are upgraded and written back in
/// one settings write. Presets that cannot be read are skipped with a
/// warning and left in storage as they were.
///
/// # Errors
///
/// Returns an error if the settings cannot be read or written.
pub fn load_presets(port: &mut impl SettingsPort) -> Result<Vec<ThemePreset>> {
    let stored = port.get_string_arrays(COLOR_THEMES_KEY)?;
    let mut presets = Vec::with_capacity(stored.len());
    let mut rewritten = Vec::with_capacity(stored.len());
    let mut upgraded = 0;

    for (index, fields) in stored.into_iter().enumerate() {
        let is_legacy = fields.len() == LEGACY_FIELD_COUNT;
        match preset_from_fields(fields.clone()) {
            Ok(preset) => {
                if is_legacy {
                    upgraded += 1;
                }
                rewritten.push(preset.to_fields());
                presets.push(preset);
            }
            Err(e) => {
                warn!("Skipping stored theme preset {index}: {e}");
                rewritten.push(fields);
            }
        }
    }

    if upgraded > 0 {
        warn!("Upgrading {upgraded} legacy theme presets");
        port.set_string_arrays(COLOR_THEMES_KEY, &rewritten)?;
    }
    Ok(presets)
}

/// # Errors
///
/// Returns an error if the settings store rejects the write.
pub fn save_presets(port: &mut impl SettingsPort, presets: &[ThemePreset]) -> Result<()> {
    let fields: Vec<Vec<String>> = presets.iter().map(ThemePreset::to_fields).collect();
    port.set_string_arrays(COLOR_THEMES_KEY, &fields)
}

/// Export text: one line per preset, every field followed by `//`.
#[must_use]
pub fn export_text(presets: &[ThemePreset]) -> String {
    presets
        .iter()
        .fold(String::new(), |mut text, preset| {
            for field in preset.to_fields() {
                let _ = write!(text, "{field}{FIELD_DELIMITER}");
            }
            text.push('\n');
            text
        })
}

/// Parse export text. Each line is split on `//` and the empty field after
/// the trailing delimiter is dropped. Blank lines are skipped. Every preset
/// must hold values the theme settings accept.
///
/// # Errors
///
/// Returns [`Error::Preset`] naming the first line that does not form a
/// valid preset.
pub fn import_text(text: &str) -> Result<Vec<ThemePreset>> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            let mut fields: Vec<String> = line
                .trim_end_matches('\r')
                .split(FIELD_DELIMITER)
                .map(str::to_string)
                .collect();
            if fields.last().is_some_and(String::is_empty) {
                fields.pop();
            }
            preset_from_fields(fields)
                .and_then(|preset| validate_preset(&preset).map(|()| preset))
                .map_err(|e| Error::Preset(format!("line {}: {e}", number + 1)))
        })
        .collect()
}

/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_to(path: &Path, presets: &[ThemePreset]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, export_text(presets))?;
    info!("Exported {} presets to {}", presets.len(), path.display());
    Ok(())
}

/// Append the presets in `path` to the stored ones. Returns how many were
/// added.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the settings
/// cannot be written.
pub fn import_from(port: &mut impl SettingsPort, path: &Path) -> Result<usize> {
    let imported = import_text(&std::fs::read_to_string(path)?)?;
    let mut presets = load_presets(port)?;
    let count = imported.len();
    presets.extend(imported);
    save_presets(port, &presets)?;
    info!("Imported {count} presets from {}", path.display());
    Ok(count)
}

/// The live theme as an unnamed preset.
///
/// # Errors
///
/// Returns an error if a theme key cannot be read.
pub fn current_theme(port: &impl SettingsPort) -> Result<ThemePreset> {
    let mut fields = vec![String::new()];
    for key in THEME_KEYS {
        let value = port.get_value(key)?;
        fields.push(match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
    }
    preset_from_fields(fields)
}

/// First preset whose colors and sizes equal `current`.
#[must_use]
pub fn matching_preset<'a>(
    presets: &'a [ThemePreset],
    current: &ThemePreset,
) -> Option<&'a ThemePreset> {
    presets.iter().find(|preset| preset.same_colors(current))
}

/// The preset's values paired with the theme keys they are written to.
fn theme_values(preset: &ThemePreset) -> Vec<(&'static str, Value)> {
    let values = [
        Value::from(preset.menu_color.as_str()),
        Value::from(preset.foreground_color.as_str()),
        Value::from(preset.border_color.as_str()),
        Value::from(preset.highlight_color.as_str()),
        Value::from(preset.highlight_foreground_color.as_str()),
        Value::from(preset.separator_color.as_str()),
        Value::from(preset.font_size),
        Value::from(preset.border_size),
        Value::from(preset.corner_radius),
        Value::from(preset.arrow_size),
        Value::from(preset.menu_margin),
        Value::from(preset.vertical_separator),
    ];
    THEME_KEYS.into_iter().zip(values).collect()
}

/// Check every value of `preset` against the theme settings schema.
///
/// # Errors
///
/// Returns the first value the schema rejects, such as a size out of range.
pub fn validate_preset(preset: &ThemePreset) -> Result<()> {
    theme_values(preset)
        .iter()
        .try_for_each(|(key, value)| check_value(key, value))
}

/// Copy a preset into the live theme settings. Nothing is written unless
/// every value is accepted.
///
/// # Errors
///
/// Returns an error if a value is rejected by the settings schema.
pub fn apply_preset(port: &mut impl SettingsPort, preset: &ThemePreset) -> Result<()> {
    validate_preset(preset)?;
    for (key, value) in theme_values(preset) {
        port.set_value(key, value)?;
    }
    info!("Applied theme preset '{}'", preset.name);
    Ok(())
}

/// Store the live theme as a preset called `name`, replacing any preset of
/// the same name.
///
/// # Errors
///
/// Returns an error if the settings cannot be read or written.
pub fn save_current_as(port: &mut impl SettingsPort, name: &str) -> Result<ThemePreset> {
    let preset = ThemePreset {
        name: name.to_string(),
        ..current_theme(port)?
    };
    let mut presets = load_presets(port)?;
    match presets.iter_mut().find(|p| p.name == name) {
        Some(existing) => *existing = preset.clone(),
        None => presets.push(preset.clone()),
    }
    save_presets(port, &presets)?;
    Ok(preset)
}
