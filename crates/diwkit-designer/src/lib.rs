//! # DiwKit Designer
//!
//! Path geometry for direct-ink-write prints.
//!
//! ## Components
//!
//! - **Segment**: straight two-point traces used for capping and purging
//! - **Serpentine**: zig-zag fill with constant or growing pitch and
//!   interpolated inlet diameters
//! - **Positioning**: anchoring on rounded or squared plates, plus plate
//!   and area outlines for plotting
//! - **Sketch**: stacks traces into layers of increasing height
//!
//! ```text
//! set_position ─► Serpentine ─┐
//!                 Segment ────┴─► Sketch ─► Vec<Layer>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use diwkit_designer::{Serpentine, SerpentineParameters, Sketch};
//!
//! let serpentine = Serpentine::new(SerpentineParameters {
//!     x_pos: 0.0,
//!     y_pos: 0.0,
//!     x_width: 10.0,
//!     y_width: 5.0,
//!     constant_pitch: true,
//!     min_pitch: 2.0,
//!     first_inlet_diameter: 0.4,
//!     last_inlet_diameter: 0.4,
//! })
//! .unwrap();
//!
//! let mut sketch = Sketch::new(0.2);
//! sketch.add_serpentine_layers(&serpentine.trace_info(), 3);
//! assert_eq!(sketch.finalize_heights().len(), 3);
//! ```

pub mod positioning;
pub mod segment;
pub mod serpentine;
pub mod sketch;

pub use positioning::{plate_outline, serpentine_area, set_position, PlateShape};
pub use segment::Segment;
pub use serpentine::{
    Serpentine, SerpentineParameters, VerticalSegmentInfo, MAX_PITCH_INCREMENTS,
};
pub use sketch::Sketch;
