//! Print job assembly.
//!
//! Builds the serpentine, the optional capping and purge segments and their
//! sketches from a [`Config`], then runs them through one nozzle.

use anyhow::{Context, Result};
use diwkit_camtools::{GCodeGenerator, Nozzle, NozzleParameters, Printer, SerpentineReport};
use diwkit_core::Instruction;
use diwkit_designer::{
    plate_outline, serpentine_area, set_position, Segment, Serpentine, SerpentineParameters,
    Sketch,
};
use diwkit_settings::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Coordinate sequences for plotting a job
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub plate: (Vec<f64>, Vec<f64>),
    pub nozzle_home: (f64, f64),
    pub serpentine_area: (Vec<f64>, Vec<f64>),
    pub serpentine: (Vec<f64>, Vec<f64>),
    pub segment: Option<(Vec<f64>, Vec<f64>)>,
    pub purge_segment: Option<(Vec<f64>, Vec<f64>)>,
}

/// Everything needed to produce the G-code of one serpentine print
#[derive(Debug, Clone)]
pub struct PrintJob {
    config: Config,
    serpentine: Serpentine,
    capping_segment: Option<Segment>,
    purge_segment: Option<Segment>,
    sketch: Sketch,
    purge_sketch: Option<Sketch>,
    nozzle: NozzleParameters,
    generator: GCodeGenerator,
}

impl PrintJob {
    /// Build the geometry and sketches described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().context("Invalid settings")?;

        let sketch_settings = &config.sketch;
        let serpentine_settings = &config.serpentine;
        let printer = &config.printer;

        let (x_pos, y_pos) = set_position(
            printer.plate_shape,
            printer.plate_size,
            serpentine_settings.centered_serpentine,
            serpentine_settings.x_pos,
            serpentine_settings.y_pos,
            serpentine_settings.x_width,
            serpentine_settings.y_width,
        );
        let serpentine = Serpentine::new(SerpentineParameters {
            x_pos,
            y_pos,
            x_width: serpentine_settings.x_width,
            y_width: serpentine_settings.y_width,
            constant_pitch: serpentine_settings.constant_pitch,
            min_pitch: serpentine_settings.min_pitch,
            first_inlet_diameter: printer.first_inlet_diameter,
            last_inlet_diameter: printer.last_inlet_diameter,
        })
        .context("Failed to generate serpentine")?;

        let mut sketch = Sketch::new(sketch_settings.layer_height);
        sketch.add_serpentine_layers(
            &serpentine.trace_info(),
            sketch_settings.number_of_layers as usize,
        );

        let capping_segment = sketch_settings.print_segment.then(|| {
            Segment::capping(
                &serpentine,
                config.segment.segment_y_pos,
                config.segment.centered_segment,
                printer.first_inlet_diameter,
            )
        });
        if let Some(segment) = &capping_segment {
            sketch.add_segment_layer(&segment.trace_info());
        }

        let purge_segment = printer.purge_nozzle.then(|| {
            Segment::new(
                config.purge.purge_x,
                config.purge.purge_y,
                config.purge.length,
                config.purge.purge_inlet_diameter,
                config.purge.is_vertical,
            )
        });
        let purge_sketch = purge_segment.as_ref().map(|segment| {
            let mut purge_sketch = Sketch::new(sketch_settings.layer_height);
            purge_sketch.add_segment_layer(&segment.trace_info());
            purge_sketch
        });

        let nozzle = NozzleParameters {
            x_home: printer.x_home,
            y_home: printer.y_home,
            z_home: printer.z_home,
            layer_width: sketch_settings.layer_width,
            layer_height: sketch_settings.layer_height,
            retraction: printer.retraction,
            lift_distance: printer.lift_distance,
            moving_speed: printer.moving_speed,
            printing_speed: printer.printing_speed,
        };
        nozzle.validate().context("Invalid nozzle settings")?;

        let generator = GCodeGenerator::new(
            config.gcode.filename.as_str(),
            config.gcode.head.as_str(),
            config.gcode.tail.as_str(),
        );

        debug!(
            "Print job: {} strokes, {} layers, purge {}",
            serpentine.stroke_count(),
            sketch.len(),
            purge_sketch.is_some()
        );

        Ok(Self {
            config: config.clone(),
            serpentine,
            capping_segment,
            purge_segment,
            sketch,
            purge_sketch,
            nozzle,
            generator,
        })
    }

    pub fn serpentine(&self) -> &Serpentine {
        &self.serpentine
    }

    pub fn capping_segment(&self) -> Option<&Segment> {
        self.capping_segment.as_ref()
    }

    pub fn purge_segment(&self) -> Option<&Segment> {
        self.purge_segment.as_ref()
    }

    /// Serpentine layers followed by the capping segment, if any
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn purge_sketch(&self) -> Option<&Sketch> {
        self.purge_sketch.as_ref()
    }

    /// Output base name
    pub fn filename(&self) -> &str {
        &self.config.gcode.filename
    }

    /// Run the purge sketch, then the main sketch, through a fresh nozzle
    pub fn instructions(&self) -> Result<Vec<Instruction>> {
        let mut nozzle = Nozzle::new(self.nozzle.clone());
        let mut printer = Printer::new(&mut nozzle);
        if let Some(purge_sketch) = &self.purge_sketch {
            printer
                .print_trace(&purge_sketch.finalize_heights())
                .context("Failed to print purge segment")?;
        }
        printer
            .print_trace(&self.sketch.finalize_heights())
            .context("Failed to print sketch")?;
        Ok(printer.into_instructions())
    }

    /// Complete G-code program text
    pub fn gcode(&self) -> Result<String> {
        Ok(self.generator.generate(&self.instructions()?))
    }

    /// Write `{filename}.gcode` into `dir`
    pub fn write_gcode(&self, dir: &Path) -> Result<PathBuf> {
        let gcode = self.gcode()?;
        let path = self
            .generator
            .save(dir, &gcode)
            .context("Failed to write G-code")?;
        info!("{} lines of G-code generated", gcode.lines().count());
        Ok(path)
    }

    pub fn serpentine_report(&self) -> SerpentineReport {
        SerpentineReport::from_serpentine(&self.serpentine)
    }

    /// Write `{filename}_serpentine_info.csv` into `dir`
    pub fn write_serpentine_info(&self, dir: &Path) -> Result<PathBuf> {
        self.serpentine_report()
            .save(dir, self.filename())
            .context("Failed to write serpentine info")
    }

    /// Plate, serpentine and segment coordinates for plotting
    pub fn outline(&self) -> Outline {
        let printer = &self.config.printer;
        let params = self.serpentine.parameters();
        Outline {
            plate: plate_outline(printer.plate_shape, printer.plate_size),
            nozzle_home: (printer.x_home, printer.y_home),
            serpentine_area: serpentine_area(
                params.x_pos,
                params.y_pos,
                params.x_width,
                params.y_width,
            ),
            serpentine: (
                self.serpentine.x_coords().to_vec(),
                self.serpentine.y_coords().to_vec(),
            ),
            segment: self
                .capping_segment
                .as_ref()
                .map(|segment| (segment.x_coords(), segment.y_coords())),
            purge_segment: self
                .purge_segment
                .as_ref()
                .map(|segment| (segment.x_coords(), segment.y_coords())),
        }
    }
}
