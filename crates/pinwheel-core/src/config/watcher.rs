//! Settings file watcher so the menu can reload lists edited elsewhere.

use crate::Result;
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const SETTINGS_DEBOUNCE: Duration = Duration::from_millis(300);

/// Callback run on the watcher thread after each debounced change.
pub type ChangeCallback = Box<dyn Fn() + Send + 'static>;

/// Watches the directory holding the settings file.
///
/// Watching stops when this value is dropped.
pub struct SettingsWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
    path: PathBuf,
}

impl SettingsWatcher {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Start watching `settings_path`; `on_change` fires when that file changes.
///
/// The parent directory is watched rather than the file so that atomic
/// replace-on-save editors are still noticed.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the directory
/// cannot be watched.
pub fn watch_settings(settings_path: &Path, on_change: ChangeCallback) -> Result<SettingsWatcher> {
    let dir = match settings_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let (event_tx, event_rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(SETTINGS_DEBOUNCE, event_tx)?;
    debouncer
        .watcher()
        .watch(&dir, RecursiveMode::NonRecursive)?;
    info!("Watching settings directory: {}", dir.display());

    let target = settings_path.to_path_buf();
    std::thread::spawn(move || {
        // Ends once the debouncer (and its sender) is dropped
        while let Ok(result) = event_rx.recv() {
            match result {
                Ok(events) => {
                    if events.iter().any(|event| is_settings_change(&event.path, &target)) {
                        debug!("Settings file changed");
                        on_change();
                    }
                }
                Err(e) => warn!("Settings watcher error: {e}"),
            }
        }
        debug!("Settings watcher stopped");
    });

    Ok(SettingsWatcher {
        _debouncer: debouncer,
        path: settings_path.to_path_buf(),
    })
}

fn is_settings_change(changed: &Path, target: &Path) -> bool {
    changed == target
        || (changed.file_name().is_some() && changed.file_name() == target.file_name())
}
