use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories in the XDG base directory layout
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/pinwheel)
    pub config: PathBuf,

    /// Data directory (~/.local/share/pinwheel)
    pub data: PathBuf,

    /// Settings store file
    pub settings_file: PathBuf,

    /// Default target for theme preset export/import
    pub presets_file: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// Returns `None` if the system's project directories cannot be determined
    /// (no home directory).
    #[must_use]
    pub fn new() -> Option<Self> {
        let project = ProjectDirs::from("", "", "pinwheel")?;

        let config = project.config_dir().to_path_buf();
        let data = project.data_dir().to_path_buf();

        Some(Self {
            settings_file: config.join("settings.json"),
            presets_file: config.join("presets.txt"),
            config,
            data,
        })
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            settings_file: base.join("settings.json"),
            presets_file: base.join("presets.txt"),
            config: base.clone(),
            data: base,
        }
    }

    /// Ensure all directories exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)?;
        std::fs::create_dir_all(&self.data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_sets_all_paths() {
        let base = PathBuf::from("/tmp/test-pinwheel");
        let dirs = Directories::with_base(base.clone());

        assert_eq!(dirs.config, base);
        assert_eq!(dirs.data, base);
        assert_eq!(dirs.settings_file, base.join("settings.json"));
        assert_eq!(dirs.presets_file, base.join("presets.txt"));
    }

    #[test]
    fn test_ensure_exists_creates_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("pinwheel-test-subdir");
        let dirs = Directories::with_base(base.clone());

        assert!(!base.exists());

        dirs.ensure_exists().unwrap();
        dirs.ensure_exists().unwrap();

        assert!(dirs.config.exists());
        assert!(dirs.data.exists());
    }

    #[test]
    fn test_new_returns_valid_xdg_paths() {
        // Containers without HOME have no project dirs; nothing to check there
        let Some(dirs) = Directories::new() else {
            return;
        };

        assert!(dirs.config.to_string_lossy().contains("pinwheel"));
        assert!(dirs.settings_file.to_string_lossy().ends_with("settings.json"));
    }
}
