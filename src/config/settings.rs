//! Application settings and paths.
//!
//! Settings live in an optional JSON file under the XDG config directory.
//! A missing file means built-in defaults; command-line flags override both.

use crate::error::{ConfigError, ConfigResult};
use crate::loader::DEFAULT_HOSTS_FILE;
use crate::pool::DEFAULT_CONCURRENCY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/subprobe)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the configuration directory. Nothing is created on disk.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "subprobe", "subprobe")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Maximum number of targets probed at once, per phase.
    pub concurrency: usize,
    /// Host list read when none is given on the command line.
    pub hosts_file: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// Falls back to defaults when there is no config directory or no file.
    pub fn load() -> ConfigResult<Self> {
        let Ok(paths) = Paths::discover() else {
            return Ok(Self::default());
        };

        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot drive a run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
