//! The settings port and its JSON file implementation.

use super::schema::{self, SettingSpec};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Read/write access to the settings store.
///
/// Consumers take a port instead of reaching for a global settings object.
/// Implementors provide the four raw operations; the typed helpers are
/// derived from them.
pub trait SettingsPort {
    /// Current value of `key`, or its schema default when never set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] for keys missing from the schema.
    fn get_value(&self, key: &str) -> Result<Value>;

    /// Store a value after checking it against the schema.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or values of the wrong type.
    fn set_value(&mut self, key: &str, value: Value) -> Result<()>;

    /// Drop any override so the key reads as its default again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] for keys missing from the schema.
    fn reset(&mut self, key: &str) -> Result<()>;

    /// Schema default for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] for keys missing from the schema.
    fn default_value(&self, key: &str) -> Result<Value> {
        Ok(spec_for(key)?.default_value())
    }

    /// Whether `key` currently reads as its default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] for keys missing from the schema.
    fn is_default(&self, key: &str) -> Result<bool> {
        Ok(self.get_value(key)? == self.default_value(key)?)
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or non-string-array values.
    fn get_strv(&self, key: &str) -> Result<Vec<String>> {
        typed(key, self.get_value(key)?, "an array of strings")
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or keys of another type.
    fn set_strv(&mut self, key: &str, value: &[String]) -> Result<()> {
        self.set_value(key, Value::from(value.to_vec()))
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or values that are not arrays of
    /// string arrays.
    fn get_string_arrays(&self, key: &str) -> Result<Vec<Vec<String>>> {
        typed(key, self.get_value(key)?, "an array of string arrays")
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or keys of another type.
    fn set_string_arrays(&mut self, key: &str, value: &[Vec<String>]) -> Result<()> {
        self.set_value(key, serde_json::to_value(value)?)
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or non-string values.
    fn get_string(&self, key: &str) -> Result<String> {
        typed(key, self.get_value(key)?, "a string")
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or keys of another type.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, Value::from(value))
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or non-boolean values.
    fn get_bool(&self, key: &str) -> Result<bool> {
        typed(key, self.get_value(key)?, "a boolean")
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or keys of another type.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.set_value(key, Value::from(value))
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys or non-integer values.
    fn get_int(&self, key: &str) -> Result<i64> {
        typed(key, self.get_value(key)?, "an integer")
    }

    /// # Errors
    ///
    /// Returns an error for unknown keys, keys of another type, or values
    /// outside the declared range.
    fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.set_value(key, Value::from(value))
    }
}

fn spec_for(key: &str) -> Result<&'static SettingSpec> {
    schema::lookup(key).ok_or_else(|| Error::UnknownKey(key.to_string()))
}

fn typed<T: serde::de::DeserializeOwned>(
    key: &str,
    value: Value,
    expected: &'static str,
) -> Result<T> {
    serde_json::from_value(value).map_err(|_| Error::TypeMismatch {
        key: key.to_string(),
        expected,
    })
}

/// Validate `value` for `key` against the schema.
pub(crate) fn check_value(key: &str, value: &Value) -> Result<()> {
    let spec = spec_for(key)?;
    spec.kind.check(value).map_err(|reason| match reason {
        Some(reason) => Error::InvalidValue {
            key: key.to_string(),
            reason,
        },
        None => Error::TypeMismatch {
            key: key.to_string(),
            expected: spec.kind.expected(),
        },
    })
}

/// JSON-file backed settings store.
///
/// Only overridden keys are kept; everything else reads from the schema
/// defaults. Writes stay in memory until [`SettingsFile::save`].
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    path: Option<PathBuf>,
    overrides: BTreeMap<String, Value>,
}

impl SettingsFile {
    /// Store that never touches disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from `path`. A missing file yields an empty store bound
    /// to that path.
    ///
    /// Unknown keys are kept (so a newer version's keys survive a save) but
    /// logged; keys whose value has the wrong type are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        let mut store = Self {
            path: Some(path.to_path_buf()),
            overrides: BTreeMap::new(),
        };

        if !path.exists() {
            debug!("Settings file {} missing, using defaults", path.display());
            return Ok(store);
        }

        let content = std::fs::read_to_string(path)?;
        let map: Map<String, Value> = serde_json::from_str(&content)?;
        super::validation::warn_unknown_keys(map.keys().map(String::as_str), "settings.json");

        for (key, value) in map {
            match check_value(&key, &value) {
                Ok(()) | Err(Error::UnknownKey(_)) => {
                    store.overrides.insert(key, value);
                }
                Err(e) => warn!("Ignoring stored value: {e}"),
            }
        }

        debug!(
            "Loaded {} settings overrides from {}",
            store.overrides.len(),
            path.display()
        );
        Ok(store)
    }

    /// Write the overrides back to the file the store was loaded from.
    /// In-memory stores ignore this.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.overrides)?;
        std::fs::write(path, content)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Overridden keys with their values, in key order.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replace every override at once, validating each value first.
    ///
    /// # Errors
    ///
    /// Returns the first validation error; the store is unchanged on error.
    pub fn replace_overrides(&mut self, overrides: BTreeMap<String, Value>) -> Result<()> {
        for (key, value) in &overrides {
            check_value(key, value)?;
        }
        self.overrides = overrides;
        Ok(())
    }
}

impl SettingsPort for SettingsFile {
    fn get_value(&self, key: &str) -> Result<Value> {
        let spec = spec_for(key)?;
        Ok(self
            .overrides
            .get(key)
            .cloned()
            .unwrap_or_else(|| spec.default_value()))
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<()> {
        check_value(key, &value)?;
        debug!("Setting {key}");
        self.overrides.insert(key.to_string(), value);
        Ok(())
    }

    fn reset(&mut self, key: &str) -> Result<()> {
        spec_for(key)?;
        self.overrides.remove(key);
        Ok(())
    }
}
