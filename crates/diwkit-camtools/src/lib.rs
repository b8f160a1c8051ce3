//! # DiwKit CAM Tools
//!
//! Turns finalized layers into machine motion.
//!
//! ## Components
//!
//! - **Nozzle**: position and cumulative extrusion model emitting travel
//!   and print instructions
//! - **Printer**: drives a nozzle over layers, layer by layer
//! - **G-code Generator**: serializes instructions between a head and a tail
//!   block and writes `{filename}.gcode`
//! - **Serpentine Report**: per-stroke CSV summary of a serpentine

pub mod error;
pub mod gcode_generator;
pub mod nozzle;
pub mod printer;
pub mod serpentine_report;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use gcode_generator::GCodeGenerator;
pub use nozzle::{Nozzle, NozzleParameters};
pub use printer::Printer;
pub use serpentine_report::SerpentineReport;
