//! Straight two-point segments.
//!
//! Segments are used to cap a stack of serpentines and to purge the nozzle
//! before the main print.

use crate::serpentine::Serpentine;
use diwkit_core::{Trace, TracePoint};
use serde::{Deserialize, Serialize};

/// Shift applied to a centered capping segment.
const CENTERED_SHIFT: f64 = 0.5;

/// A horizontal or vertical straight segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: (f64, f64),
    end: (f64, f64),
    inlet_diameter: f64,
}

impl Segment {
    /// Create a segment starting at `(x_position, y_position)`.
    ///
    /// A negative `length` produces a segment running in the opposite
    /// direction.
    pub fn new(
        x_position: f64,
        y_position: f64,
        length: f64,
        inlet_diameter: f64,
        is_vertical: bool,
    ) -> Self {
        let end = if is_vertical {
            (x_position, y_position + length)
        } else {
            (x_position + length, y_position)
        };
        Self {
            start: (x_position, y_position),
            end,
            inlet_diameter,
        }
    }

    /// Horizontal segment spanning the width of `serpentine`, placed at
    /// `relative_y` of its height (or halfway when `centered`).
    pub fn capping(
        serpentine: &Serpentine,
        relative_y: f64,
        centered: bool,
        inlet_diameter: f64,
    ) -> Self {
        let shift = if centered { CENTERED_SHIFT } else { relative_y };
        let y_width = serpentine.parameters().y_width;
        Self::new(
            serpentine.x_pos(),
            serpentine.y_pos() + y_width * shift,
            serpentine.width(),
            inlet_diameter,
            false,
        )
    }

    /// Inlet diameter used on both points
    pub fn inlet_diameter(&self) -> f64 {
        self.inlet_diameter
    }

    /// (x, y) pairs of both points
    pub fn points(&self) -> Vec<(f64, f64)> {
        vec![self.start, self.end]
    }

    /// X coordinates of both points
    pub fn x_coords(&self) -> Vec<f64> {
        vec![self.start.0, self.end.0]
    }

    /// Y coordinates of both points
    pub fn y_coords(&self) -> Vec<f64> {
        vec![self.start.1, self.end.1]
    }

    /// Two-point trace carrying the inlet diameter on both points
    pub fn trace_info(&self) -> Trace {
        Trace::new(vec![
            TracePoint::new(self.start.0, self.start.1, self.inlet_diameter),
            TracePoint::new(self.end.0, self.end.1, self.inlet_diameter),
        ])
    }
}
