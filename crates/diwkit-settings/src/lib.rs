//! DiwKit Settings Crate
//!
//! Handles the print configuration: typed sections, file persistence,
//! string-keyed lookup and default bootstrap.

pub mod config;
pub mod error;
pub mod manager;
pub mod value;

pub use config::{
    Config, GCodeSettings, PrinterSettings, PurgeSettings, SegmentSettings, SerpentineSettings,
    SketchSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::{SettingsManager, SETTINGS_FILE_NAME};
pub use value::SettingValue;
