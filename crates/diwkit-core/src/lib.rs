//! # DiwKit Core
//!
//! Core types and utilities shared by the DiwKit crates.
//! Provides the data model flowing through the serpentine pipeline:
//! trace points, layers, nozzle poses and sparse motion instructions.

pub mod data;
pub mod error;
pub mod instruction;
pub mod units;

pub use data::{Layer, NozzlePose, Trace, TracePoint};
pub use error::GeometryError;
pub use instruction::{Axis, Instruction};
pub use units::{round_to, DIAMETER_DECIMALS, POSITION_DECIMALS, VOLUME_DECIMALS};
