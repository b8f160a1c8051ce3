//! Serpentine placement on the printing plate.
//!
//! Also provides outline coordinates of the plate and of the serpentine
//! bounding area for plotting front ends.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Points used to approximate a rounded plate outline.
const ROUNDED_OUTLINE_POINTS: usize = 100;

/// Shape of the printing plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateShape {
    /// Circular plate of diameter `plate_size`, centered at the origin
    #[default]
    Rounded,
    /// Square plate of edge `plate_size`, spanning `[0, plate_size]`
    Squared,
}

impl fmt::Display for PlateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rounded => write!(f, "rounded"),
            Self::Squared => write!(f, "squared"),
        }
    }
}

impl FromStr for PlateShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rounded" | "round" | "circular" => Ok(Self::Rounded),
            "squared" | "square" => Ok(Self::Squared),
            _ => Err(format!("Unknown plate shape: {}", s)),
        }
    }
}

/// Anchor of the serpentine's first point.
///
/// When `is_centered` is set the serpentine bounding area is centered on
/// the plate and the explicit position is ignored.
pub fn set_position(
    plate_shape: PlateShape,
    plate_size: f64,
    is_centered: bool,
    x_pos: f64,
    y_pos: f64,
    x_width: f64,
    y_width: f64,
) -> (f64, f64) {
    if !is_centered {
        return (x_pos, y_pos);
    }
    match plate_shape {
        PlateShape::Rounded => (-x_width / 2.0, -y_width / 2.0),
        PlateShape::Squared => ((plate_size - x_width) / 2.0, (plate_size - y_width) / 2.0),
    }
}

/// Closed outline of the printing plate as x and y sequences
pub fn plate_outline(plate_shape: PlateShape, plate_size: f64) -> (Vec<f64>, Vec<f64>) {
    match plate_shape {
        PlateShape::Squared => (
            [0.0, 0.0, 1.0, 1.0, 0.0].iter().map(|f| f * plate_size).collect(),
            [0.0, 1.0, 1.0, 0.0, 0.0].iter().map(|f| f * plate_size).collect(),
        ),
        PlateShape::Rounded => {
            let radius = plate_size / 2.0;
            (0..=ROUNDED_OUTLINE_POINTS)
                .map(|i| 2.0 * PI * i as f64 / ROUNDED_OUTLINE_POINTS as f64)
                .map(|angle| (radius * angle.cos(), radius * angle.sin()))
                .unzip()
        }
    }
}

/// Closed rectangle bounding the requested serpentine area
pub fn serpentine_area(x: f64, y: f64, x_width: f64, y_width: f64) -> (Vec<f64>, Vec<f64>) {
    (
        [0.0, 0.0, x_width, x_width, 0.0].iter().map(|d| x + d).collect(),
        [0.0, y_width, y_width, 0.0, 0.0].iter().map(|d| y + d).collect(),
    )
}
