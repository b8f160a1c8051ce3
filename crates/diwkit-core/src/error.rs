//! Error handling for DiwKit
//!
//! Provides the geometry error shared by the designer and motion layers.
//! Crates wrap it in their own `thiserror` enums.

use thiserror::Error;

/// Geometry error type
///
/// Represents inputs for which no well-defined path can be generated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Pitch is zero, negative or not a number
    #[error("Invalid pitch {pitch}: must be a positive finite value")]
    InvalidPitch {
        /// The rejected pitch value.
        pitch: f64,
    },

    /// Width along x is not a finite number
    #[error("Invalid width {x_width}: must be a finite value")]
    InvalidWidth {
        /// The rejected width.
        x_width: f64,
    },

    /// More stroke gaps than a serpentine may hold
    #[error("Serpentine needs more than {limit} stroke gaps")]
    TooManyStrokes {
        /// Maximum number of accepted gaps.
        limit: usize,
    },

    /// No stroke fits in the available width
    #[error("Serpentine is empty: minimum pitch {min_pitch} does not fit in width {x_width}")]
    EmptySerpentine {
        /// The requested maximum width along x.
        x_width: f64,
        /// The requested minimum pitch.
        min_pitch: f64,
    },

    /// A trace without points was handed to the motion layer
    #[error("Trace at layer {layer_index} has no points")]
    EmptyTrace {
        /// Index of the offending layer.
        layer_index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::InvalidPitch { pitch: 0.0 };
        assert_eq!(
            err.to_string(),
            "Invalid pitch 0: must be a positive finite value"
        );

        let err = GeometryError::EmptySerpentine {
            x_width: 1.0,
            min_pitch: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "Serpentine is empty: minimum pitch 2 does not fit in width 1"
        );
    }

    #[test]
    fn test_width_errors_display() {
        let err = GeometryError::InvalidWidth {
            x_width: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Invalid width inf: must be a finite value");

        let err = GeometryError::TooManyStrokes { limit: 10 };
        assert_eq!(err.to_string(), "Serpentine needs more than 10 stroke gaps");
    }

    #[test]
    fn test_empty_trace_display() {
        let err = GeometryError::EmptyTrace { layer_index: 3 };
        assert_eq!(err.to_string(), "Trace at layer 3 has no points");
        assert_eq!(err.clone(), err);
    }
}
