//! Settings file bootstrap and access.

use crate::config::Config;
use crate::error::{ConfigResult, SettingsResult};
use crate::value::SettingValue;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Owns the configuration and the file it was read from
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Load settings from `path`, writing the defaults there first when the
    /// file does not exist yet
    pub fn load_or_init(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            Config::default().save_to_file(&path)?;
            info!("Default settings written to {}", path.display());
        }
        Self::load(path)
    }

    /// Load settings from an existing file
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let config = Config::load_from_file(&path)?;
        debug!("Settings loaded from {}", path.display());
        Ok(Self { path, config })
    }

    /// Write the current settings back to their file
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)?;
        info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up an option by name
    pub fn value(&self, key: &str) -> ConfigResult<SettingValue> {
        self.config.value(key)
    }

    /// Replace an option by name from its textual form
    pub fn set_value(&mut self, key: &str, raw: &str) -> ConfigResult<()> {
        self.config.set_value(key, raw)?;
        debug!("Setting {} updated to {}", key, raw);
        Ok(())
    }
}
