//! Serpentine trace generation.
//!
//! A serpentine is a zig-zag of vertical strokes joined by horizontal
//! jumps. Stroke spacing either stays at the minimum pitch or grows by half
//! a pitch per stroke, with the widest gaps nearest the anchor. Each point
//! carries an inlet diameter interpolated from the first to the last value.

use diwkit_core::{
    round_to, GeometryError, Trace, TracePoint, DIAMETER_DECIMALS, POSITION_DECIMALS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Up/down pattern applied to consecutive points.
const Y_MASK: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// Growth of the pitch multiplier after each accepted stroke when the
/// pitch is not constant.
const PITCH_STEP_GROWTH: f64 = 0.5;

/// Upper bound on accepted pitch increments.
pub const MAX_PITCH_INCREMENTS: usize = 100_000;

/// Parameters describing a serpentine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerpentineParameters {
    /// Anchor position along x (mm)
    pub x_pos: f64,
    /// Anchor position along y (mm)
    pub y_pos: f64,
    /// Maximum extent along x (mm)
    pub x_width: f64,
    /// Stroke height along y (mm)
    pub y_width: f64,
    /// Keep every gap at `min_pitch`
    pub constant_pitch: bool,
    /// Smallest gap between adjacent strokes (mm)
    pub min_pitch: f64,
    /// Inlet diameter of the first point (mm)
    pub first_inlet_diameter: f64,
    /// Inlet diameter reached by the second-to-last point (mm)
    pub last_inlet_diameter: f64,
}

/// Summary row for one vertical stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalSegmentInfo {
    /// 1-based stroke number
    pub number: usize,
    /// X position of the stroke (mm)
    pub x_position: f64,
    /// Inlet diameter at the start of the stroke (mm)
    pub inlet_diameter: f64,
    /// Gap to the previous stroke (mm), zero for the first one
    pub distance_from_previous: f64,
}

/// A generated serpentine.
#[derive(Debug, Clone, PartialEq)]
pub struct Serpentine {
    params: SerpentineParameters,
    distances: Vec<f64>,
    x_coords: Vec<f64>,
    y_coords: Vec<f64>,
    filament_diameters: Vec<f64>,
}

impl Serpentine {
    /// Generate the serpentine described by `params`.
    ///
    /// Fails when the pitch is not a positive finite number, when `x_width`
    /// is not finite, when not a single stroke gap fits in `x_width` or when
    /// more than [`MAX_PITCH_INCREMENTS`] gaps would.
    pub fn new(params: SerpentineParameters) -> Result<Self, GeometryError> {
        if !(params.min_pitch.is_finite() && params.min_pitch > 0.0) {
            return Err(GeometryError::InvalidPitch {
                pitch: params.min_pitch,
            });
        }
        if !params.x_width.is_finite() {
            return Err(GeometryError::InvalidWidth {
                x_width: params.x_width,
            });
        }

        let distances = gen_distances(params.x_width, params.min_pitch, params.constant_pitch)?;

        let x_coords = gen_x_coords(params.x_pos, &distances);
        let y_coords = gen_y_coords(params.y_pos, params.y_width, x_coords.len());
        let filament_diameters = gen_filament_diameters(
            params.first_inlet_diameter,
            params.last_inlet_diameter,
            x_coords.len(),
        );

        debug!(
            "Generated serpentine with {} strokes over {} mm",
            x_coords.len() / 2,
            distances.last().copied().unwrap_or_default()
        );

        Ok(Self {
            params,
            distances,
            x_coords,
            y_coords,
            filament_diameters,
        })
    }

    /// Parameters the serpentine was generated from
    pub fn parameters(&self) -> &SerpentineParameters {
        &self.params
    }

    /// Anchor x position
    pub fn x_pos(&self) -> f64 {
        self.params.x_pos
    }

    /// Anchor y position
    pub fn y_pos(&self) -> f64 {
        self.params.y_pos
    }

    /// Cumulative offsets of each stroke after the first, from the anchor
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// X coordinates in print order
    pub fn x_coords(&self) -> &[f64] {
        &self.x_coords
    }

    /// Y coordinates in print order
    pub fn y_coords(&self) -> &[f64] {
        &self.y_coords
    }

    /// Inlet diameter of each point
    pub fn filament_diameters(&self) -> &[f64] {
        &self.filament_diameters
    }

    /// Number of points of the trace.
    pub fn number_of_segments(&self) -> usize {
        self.x_coords.len()
    }

    /// Number of vertical strokes
    pub fn stroke_count(&self) -> usize {
        self.x_coords.len() / 2
    }

    /// (x, y) pairs in print order
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x_coords
            .iter()
            .copied()
            .zip(self.y_coords.iter().copied())
            .collect()
    }

    /// Full trace with per-point inlet diameters
    pub fn trace_info(&self) -> Trace {
        self.x_coords
            .iter()
            .zip(&self.y_coords)
            .zip(&self.filament_diameters)
            .map(|((&x, &y), &d)| TracePoint::new(x, y, d))
            .collect::<Vec<_>>()
            .into()
    }

    /// One summary row per vertical stroke
    pub fn vertical_segments_info(&self) -> Vec<VerticalSegmentInfo> {
        let mut info = Vec::with_capacity(self.distances.len() + 1);
        info.push(VerticalSegmentInfo {
            number: 1,
            x_position: self.x_coords[0],
            inlet_diameter: self.filament_diameters[0],
            distance_from_previous: 0.0,
        });

        for i in 0..self.distances.len() {
            let index = i * 2 + 2;
            let previous = if i == 0 { 0 } else { index - 2 };
            info.push(VerticalSegmentInfo {
                number: i + 2,
                x_position: self.x_coords[index],
                inlet_diameter: self.filament_diameters[index],
                distance_from_previous: self.x_coords[index] - self.x_coords[previous],
            });
        }
        info
    }

    /// Actual extent along x, never larger than the requested width
    pub fn width(&self) -> f64 {
        let first = self.x_coords.first().copied().unwrap_or_default();
        let last = self.x_coords.last().copied().unwrap_or_default();
        round_to(last - first, POSITION_DECIMALS)
    }
}

/// Accepted pitch increments, trimmed to an odd count, reversed and
/// accumulated.
fn gen_distances(
    x_width: f64,
    min_pitch: f64,
    constant_pitch: bool,
) -> Result<Vec<f64>, GeometryError> {
    let mut increments: Vec<f64> = Vec::new();
    let mut total = 0.0;
    let mut step = 1.0;
    while total + min_pitch * step <= x_width {
        let increment = min_pitch * step;
        // also stops a sum that no longer grows under f64 addition
        if increments.len() == MAX_PITCH_INCREMENTS {
            return Err(GeometryError::TooManyStrokes {
                limit: MAX_PITCH_INCREMENTS,
            });
        }
        increments.push(increment);
        total += increment;
        if !constant_pitch {
            step += PITCH_STEP_GROWTH;
        }
    }

    if increments.is_empty() {
        return Err(GeometryError::EmptySerpentine {
            x_width,
            min_pitch,
        });
    }
    // An odd number of gaps brings the last stroke back to the starting y.
    if increments.len() % 2 == 0 {
        increments.pop();
    }

    let distances = increments
        .iter()
        .rev()
        .scan(0.0, |acc, increment| {
            *acc += increment;
            Some(*acc)
        })
        .collect();
    Ok(distances)
}

fn gen_x_coords(x_pos: f64, distances: &[f64]) -> Vec<f64> {
    let mut x_coords = Vec::with_capacity(2 + distances.len() * 2);
    x_coords.extend([x_pos, x_pos]);
    for distance in distances {
        let x = round_to(x_pos + distance, POSITION_DECIMALS);
        x_coords.extend([x, x]);
    }
    x_coords
}

fn gen_y_coords(y_pos: f64, y_width: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| y_pos + y_width * Y_MASK[i % Y_MASK.len()])
        .collect()
}

// The step is calibrated on `count - 2` so the second-to-last point carries
// `last` exactly and the last point overshoots by one step.
fn gen_filament_diameters(first: f64, last: f64, count: usize) -> Vec<f64> {
    let increment = (last - first) / (count as f64 - 2.0);
    (0..count)
        .map(|i| round_to(first + increment * i as f64, DIAMETER_DECIMALS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(constant_pitch: bool, min_pitch: f64, x_width: f64) -> SerpentineParameters {
        SerpentineParameters {
            x_pos: 0.0,
            y_pos: 0.0,
            x_width,
            y_width: 5.0,
            constant_pitch,
            min_pitch,
            first_inlet_diameter: 0.4,
            last_inlet_diameter: 0.4,
        }
    }

    #[test]
    fn test_constant_pitch_strokes() {
        let serpentine = Serpentine::new(params(true, 2.0, 10.0)).unwrap();
        assert_eq!(serpentine.distances(), &[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(
            serpentine.x_coords(),
            &[0.0, 0.0, 2.0, 2.0, 4.0, 4.0, 6.0, 6.0, 8.0, 8.0, 10.0, 10.0]
        );
        assert_eq!(
            serpentine.y_coords(),
            &[0.0, 5.0, 5.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 5.0, 5.0, 0.0]
        );
        assert_eq!(serpentine.width(), 10.0);
        assert_eq!(serpentine.stroke_count(), 6);
    }

    #[test]
    fn test_even_increment_count_is_trimmed() {
        // 2+2+2+2 = 8 fits in 9, a fifth does not: four increments, one dropped
        let serpentine = Serpentine::new(params(true, 2.0, 9.0)).unwrap();
        assert_eq!(serpentine.distances(), &[2.0, 4.0, 6.0]);
        assert_eq!(serpentine.width(), 6.0);
    }

    #[test]
    fn test_growing_pitch_is_widest_near_anchor() {
        // increments 1, 1.5, 2, 2.5, 3 fill exactly 10
        let serpentine = Serpentine::new(params(false, 1.0, 10.0)).unwrap();
        assert_eq!(serpentine.distances(), &[3.0, 5.5, 7.5, 9.0, 10.0]);

        let gaps: Vec<f64> = serpentine
            .vertical_segments_info()
            .iter()
            .skip(1)
            .map(|info| info.distance_from_previous)
            .collect();
        assert_eq!(gaps, vec![3.0, 2.5, 2.0, 1.5, 1.0]);
    }

    #[test]
    fn test_diameter_interpolation_reaches_last_on_second_to_last_point() {
        let mut p = params(true, 2.0, 2.0);
        p.first_inlet_diameter = 0.2;
        p.last_inlet_diameter = 0.4;
        let serpentine = Serpentine::new(p).unwrap();
        // four points, step (0.4 - 0.2) / 2
        assert_eq!(serpentine.filament_diameters(), &[0.2, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_vertical_segments_info() {
        let serpentine = Serpentine::new(params(true, 2.0, 4.0)).unwrap();
        let info = serpentine.vertical_segments_info();
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].number, 1);
        assert_eq!(info[0].distance_from_previous, 0.0);
        assert_eq!(info[1].number, 2);
        assert_eq!(info[1].x_position, 2.0);
        assert_eq!(info[1].distance_from_previous, 2.0);
    }

    #[test]
    fn test_trace_info_matches_coordinates() {
        let serpentine = Serpentine::new(params(true, 2.0, 10.0)).unwrap();
        let trace = serpentine.trace_info();
        assert_eq!(trace.len(), serpentine.number_of_segments());
        assert_eq!(trace.x_coords(), serpentine.x_coords());
        assert_eq!(trace.y_coords(), serpentine.y_coords());
        assert!(trace.iter().all(|p| p.filament_diameter == 0.4));
    }

    #[test]
    fn test_anchor_offsets_coordinates() {
        let mut p = params(true, 2.0, 4.0);
        p.x_pos = -2.5;
        p.y_pos = 1.0;
        let serpentine = Serpentine::new(p).unwrap();
        assert_eq!(serpentine.x_coords(), &[-2.5, -2.5, -0.5, -0.5]);
        assert_eq!(serpentine.y_coords(), &[1.0, 6.0, 6.0, 1.0]);
    }

    #[test]
    fn test_invalid_pitch() {
        let err = Serpentine::new(params(true, 0.0, 10.0)).unwrap_err();
        assert_eq!(err, GeometryError::InvalidPitch { pitch: 0.0 });
    }

    #[test]
    fn test_width_too_small() {
        let err = Serpentine::new(params(true, 2.0, 1.0)).unwrap_err();
        assert!(matches!(err, GeometryError::EmptySerpentine { .. }));
    }

    #[test]
    fn test_non_finite_width() {
        let err = Serpentine::new(params(true, 1.0, f64::INFINITY)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidWidth {
                x_width: f64::INFINITY
            }
        );
        let err = Serpentine::new(params(false, 1.0, f64::NAN)).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidWidth { .. }));
    }

    #[test]
    fn test_too_many_increments() {
        let err = Serpentine::new(params(true, 1e-3, 1e6)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::TooManyStrokes {
                limit: MAX_PITCH_INCREMENTS
            }
        );
    }
}
