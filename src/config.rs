//! Optional TOML configuration for table of contents generation.
//!
//! Every field has a default matching the generator's built-in behaviour, so
//! a missing or partial file is always valid.

use crate::toc::{DEFAULT_TITLE, TocOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toc: TocConfig,
}

/// Table of contents settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Title of the generated section (default: "Table of Contents")
    #[serde(default = "default_title")]
    pub title: String,

    /// Shallowest heading level listed (default: 2). Level 1 is never listed.
    #[serde(default = "default_min_level")]
    pub min_level: usize,

    /// Deepest heading level listed; unset lists every level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_level: Option<usize>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            min_level: default_min_level(),
            max_level: None,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_min_level() -> usize {
    2
}

impl TocConfig {
    pub fn to_options(&self) -> TocOptions {
        TocOptions {
            title: self.title.clone(),
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }
}

impl Config {
    /// Get the XDG-style config file path (~/.config/mdtoc/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mdtoc").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdtoc/config.toml
    /// - Linux: ~/.config/mdtoc/config.toml
    /// - Windows: %APPDATA%/mdtoc/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdtoc").join("config.toml"))
    }

    /// Load config from the default location, or return defaults if there is none.
    /// On macOS, checks ~/.config/mdtoc first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(xdg_path) = Self::xdg_config_path() {
                if xdg_path.exists() {
                    return Self::load_from(&xdg_path);
                }
            }
        }

        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from an explicit path.
    ///
    /// A missing file yields defaults silently; an unreadable or malformed
    /// one yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }
        }
    }

    /// Save config to the default location, returning the path written.
    /// An existing file is only replaced when `overwrite` is set.
    pub fn save(&self, overwrite: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;
        self.save_to(&path, overwrite)?;
        Ok(path)
    }

    /// Save config to an explicit path.
    /// An existing file is only replaced when `overwrite` is set.
    pub fn save_to(&self, path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        if overwrite {
            fs::write(path, contents)?;
        } else {
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| -> Box<dyn std::error::Error> {
                    if e.kind() == io::ErrorKind::AlreadyExists {
                        format!("{} already exists", path.display()).into()
                    } else {
                        e.into()
                    }
                })?;
            file.write_all(contents.as_bytes())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generator_defaults() {
        assert_eq!(Config::default().toc.to_options(), TocOptions::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[toc]\nmax_level = 3\n").unwrap();
        assert_eq!(config.toc.title, "Table of Contents");
        assert_eq!(config.toc.min_level, 2);
        assert_eq!(config.toc.max_level, Some(3));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[toc\ntitle = ").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            toc: TocConfig {
                title: "Contents".to_string(),
                min_level: 3,
                max_level: Some(4),
            },
        };
        config.save_to(&path, false).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_save_refuses_to_replace_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let custom = "[toc]\ntitle = \"Contents\"\nmin_level = 3\n";
        fs::write(&path, custom).unwrap();

        let err = Config::default().save_to(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), custom);
        assert_eq!(Config::load_from(&path).toc.title, "Contents");
    }

    #[test]
    fn test_save_overwrite_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[toc]\ntitle = \"Contents\"\n").unwrap();

        Config::default().save_to(&path, true).unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
