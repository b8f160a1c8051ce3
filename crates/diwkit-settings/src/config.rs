//! Configuration for DiwKit
//!
//! Provides configuration file handling, key lookup and validation.
//! Supports JSON and TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Sketch settings (trace section, layer count)
//! - Serpentine geometry
//! - Capping segment placement
//! - Printer and nozzle settings
//! - Purge segment
//! - G-code output

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use crate::value::SettingValue;
use diwkit_designer::PlateShape;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layer stacking settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchSettings {
    /// Width of the printed trace (mm)
    pub layer_width: f64,
    /// Height of the printed trace and step between layers (mm)
    pub layer_height: f64,
    /// Number of stacked serpentine layers
    pub number_of_layers: u32,
    /// Print a capping segment on top of the serpentines
    pub print_segment: bool,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            layer_width: 0.4,
            layer_height: 0.2,
            number_of_layers: 2,
            print_segment: true,
        }
    }
}

/// Serpentine geometry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerpentineSettings {
    /// Center the serpentine on the plate, ignoring `x_pos`/`y_pos`
    pub centered_serpentine: bool,
    /// Maximum extent along x (mm)
    pub x_width: f64,
    /// Stroke height along y (mm)
    pub y_width: f64,
    /// Keep every gap at `min_pitch`
    pub constant_pitch: bool,
    /// Smallest gap between adjacent strokes (mm)
    pub min_pitch: f64,
    /// Anchor along x when not centered (mm)
    pub x_pos: f64,
    /// Anchor along y when not centered (mm)
    pub y_pos: f64,
}

impl Default for SerpentineSettings {
    fn default() -> Self {
        Self {
            centered_serpentine: true,
            x_width: 20.0,
            y_width: 10.0,
            constant_pitch: false,
            min_pitch: 1.0,
            x_pos: 0.0,
            y_pos: 0.0,
        }
    }
}

/// Capping segment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentSettings {
    /// Position of the segment as a fraction of the serpentine height
    pub segment_y_pos: f64,
    /// Place the segment halfway up the serpentine
    pub centered_segment: bool,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        Self {
            segment_y_pos: 0.5,
            centered_segment: true,
        }
    }
}

/// Printer and nozzle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Shape of the printing plate
    pub plate_shape: PlateShape,
    /// Plate diameter or edge length (mm)
    pub plate_size: f64,
    /// Nozzle home along x (mm)
    pub x_home: f64,
    /// Nozzle home along y (mm)
    pub y_home: f64,
    /// Nozzle home along z (mm)
    pub z_home: f64,
    /// Inlet diameter at the start of the serpentine (mm)
    pub first_inlet_diameter: f64,
    /// Inlet diameter near the end of the serpentine (mm)
    pub last_inlet_diameter: f64,
    /// Volume added before each travel move; negative values retract
    pub retraction: f64,
    /// Lift while travelling (mm)
    pub lift_distance: f64,
    /// Travel feed rate (mm/min)
    pub moving_speed: f64,
    /// Printing feed rate (mm/min)
    pub printing_speed: f64,
    /// Print the purge segment before the serpentine
    pub purge_nozzle: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            plate_shape: PlateShape::Rounded,
            plate_size: 60.0,
            x_home: 0.0,
            y_home: 0.0,
            z_home: 10.0,
            first_inlet_diameter: 0.4,
            last_inlet_diameter: 0.8,
            retraction: -0.5,
            lift_distance: 1.0,
            moving_speed: 1200.0,
            printing_speed: 300.0,
            purge_nozzle: true,
        }
    }
}

/// Purge segment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeSettings {
    /// Start along x (mm)
    pub purge_x: f64,
    /// Start along y (mm)
    pub purge_y: f64,
    /// Signed length (mm)
    pub length: f64,
    /// Inlet diameter (mm)
    pub purge_inlet_diameter: f64,
    /// Run along y instead of x
    pub is_vertical: bool,
}

impl Default for PurgeSettings {
    fn default() -> Self {
        Self {
            purge_x: -20.0,
            purge_y: -20.0,
            length: 15.0,
            purge_inlet_diameter: 0.4,
            is_vertical: true,
        }
    }
}

/// G-code output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GCodeSettings {
    /// Output base name, written as `{filename}.gcode`
    pub filename: String,
    /// Block written before the moves
    pub head: String,
    /// Block written after the moves
    pub tail: String,
}

impl Default for GCodeSettings {
    fn default() -> Self {
        Self {
            filename: "serpentine".to_string(),
            head: "; DiwKit serpentine print\n\
                   G21 ; millimeters\n\
                   G90 ; absolute positioning\n\
                   M82 ; absolute extrusion\n\
                   G92 E0\n"
                .to_string(),
            tail: "M2 ; end of program\n".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sketch: SketchSettings,
    pub serpentine: SerpentineSettings,
    pub segment: SegmentSettings,
    pub printer: PrinterSettings,
    pub purge: PurgeSettings,
    pub gcode: GCodeSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path).into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path).into());
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("layer_width", self.sketch.layer_width),
            ("layer_height", self.sketch.layer_height),
            ("x_width", self.serpentine.x_width),
            ("y_width", self.serpentine.y_width),
            ("min_pitch", self.serpentine.min_pitch),
            ("plate_size", self.printer.plate_size),
            ("first_inlet_diameter", self.printer.first_inlet_diameter),
            ("last_inlet_diameter", self.printer.last_inlet_diameter),
            ("moving_speed", self.printer.moving_speed),
            ("printing_speed", self.printer.printing_speed),
            ("purge_inlet_diameter", self.purge.purge_inlet_diameter),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        if self.sketch.number_of_layers == 0 {
            return Err(out_of_range("number_of_layers", 0));
        }

        if !(0.0..=1.0).contains(&self.segment.segment_y_pos) {
            return Err(out_of_range("segment_y_pos", self.segment.segment_y_pos));
        }

        if self.gcode.filename.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "filename".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Look up an option by name, whichever section holds it
    pub fn value(&self, key: &str) -> ConfigResult<SettingValue> {
        let tree = self.to_tree(key)?;
        tree.as_object()
            .into_iter()
            .flat_map(|sections| sections.values())
            .filter_map(|section| section.as_object())
            .find_map(|section| section.get(key))
            .and_then(SettingValue::from_json)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Replace an option by name from its textual form.
    ///
    /// Text options take `raw` verbatim; others infer its type first. The
    /// configuration is left unchanged when the value does not fit.
    pub fn set_value(&mut self, key: &str, raw: &str) -> ConfigResult<()> {
        let mut tree = self.to_tree(key)?;
        let slot = tree
            .as_object_mut()
            .into_iter()
            .flat_map(|sections| sections.values_mut())
            .filter_map(|section| section.as_object_mut())
            .find_map(|section| section.get_mut(key))
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;

        *slot = if slot.is_string() {
            serde_json::Value::from(raw)
        } else {
            SettingValue::parse(raw).to_json()
        };

        *self = serde_json::from_value(tree).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Every option as `(key, value)`, section by section
    pub fn entries(&self) -> Vec<(String, SettingValue)> {
        let Ok(tree) = serde_json::to_value(self) else {
            return Vec::new();
        };
        tree.as_object()
            .into_iter()
            .flat_map(|sections| sections.values())
            .filter_map(|section| section.as_object())
            .flat_map(|section| section.iter())
            .filter_map(|(key, value)| {
                SettingValue::from_json(value).map(|value| (key.clone(), value))
            })
            .collect()
    }

    fn to_tree(&self, key: &str) -> ConfigResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

fn unsupported_format(path: &Path) -> ConfigError {
    ConfigError::UnsupportedFormat(format!(
        "{} (config file must be .json or .toml)",
        path.display()
    ))
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
