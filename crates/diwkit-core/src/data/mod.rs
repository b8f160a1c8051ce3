//! Data models for DiwKit
//!
//! Types describing what gets printed (trace points, traces and layers)
//! and where the nozzle is (nozzle pose).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A print target: a location plus the inlet filament diameter to use
/// when printing towards it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    /// X coordinate (mm)
    pub x: f64,
    /// Y coordinate (mm)
    pub y: f64,
    /// Inlet filament diameter (mm)
    pub filament_diameter: f64,
}

impl TracePoint {
    /// Create a new trace point
    pub fn new(x: f64, y: f64, filament_diameter: f64) -> Self {
        Self {
            x,
            y,
            filament_diameter,
        }
    }
}

impl fmt::Display for TracePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) d={}",
            self.x, self.y, self.filament_diameter
        )
    }
}

/// Ordered sequence of trace points.
///
/// Insertion order is the print order. The first point is always a
/// travel target; every following point is printed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    points: Vec<TracePoint>,
}

impl Trace {
    /// Create a trace from points in print order
    pub fn new(points: Vec<TracePoint>) -> Self {
        Self { points }
    }

    /// All points in print order
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// The travel target at the start of the trace
    pub fn start(&self) -> Option<&TracePoint> {
        self.points.first()
    }

    /// Points printed after travelling to the start
    pub fn printed_points(&self) -> &[TracePoint] {
        self.points.get(1..).unwrap_or(&[])
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trace has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in print order
    pub fn iter(&self) -> std::slice::Iter<'_, TracePoint> {
        self.points.iter()
    }

    /// X coordinates in print order
    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates in print order
    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl From<Vec<TracePoint>> for Trace {
    fn from(points: Vec<TracePoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TracePoint;
    type IntoIter = std::slice::Iter<'a, TracePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A single trace stacked at a given Z height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Z height of the layer (mm)
    pub height: f64,
    /// Trace printed at this height
    pub trace: Trace,
}

impl Layer {
    /// Create a new layer
    pub fn new(height: f64, trace: Trace) -> Self {
        Self { height, trace }
    }
}

/// Physical state of the nozzle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NozzlePose {
    /// X position (mm)
    pub x: f64,
    /// Y position (mm)
    pub y: f64,
    /// Z position (mm)
    pub z: f64,
    /// Cumulative extruded volume
    pub extruded_volume: f64,
}

impl NozzlePose {
    /// Create a pose at the given position with nothing extruded yet
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            extruded_volume: 0.0,
        }
    }
}

impl fmt::Display for NozzlePose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{} Y:{} Z:{} E:{}",
            self.x, self.y, self.z, self.extruded_volume
        )
    }
}
