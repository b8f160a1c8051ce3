//! Nozzle motion and extrusion model.
//!
//! The nozzle tracks its position and the cumulative extruded volume.
//! Travel moves retract, lift, move and lower; printing moves extrude a
//! volume proportional to the travelled distance.
//!
//! State is kept unrounded. Everything reported to callers goes through
//! the rounded accessors, positions to 0.01 mm and volume to 0.001.

use crate::error::{ParameterError, ParameterResult};
use diwkit_core::{
    round_to, Axis, Instruction, NozzlePose, TracePoint, POSITION_DECIMALS, VOLUME_DECIMALS,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters of the nozzle and the trace it lays down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NozzleParameters {
    /// Home position along x (mm)
    pub x_home: f64,
    /// Home position along y (mm)
    pub y_home: f64,
    /// Home position along z (mm)
    pub z_home: f64,
    /// Width of the printed trace (mm)
    pub layer_width: f64,
    /// Height of the printed trace (mm)
    pub layer_height: f64,
    /// Volume added before every travel move. Negative values retract.
    pub retraction: f64,
    /// Lift above the current height while travelling (mm)
    pub lift_distance: f64,
    /// Feed rate for travel moves (mm/min)
    pub moving_speed: f64,
    /// Feed rate for printing moves (mm/min)
    pub printing_speed: f64,
}

impl NozzleParameters {
    /// Check the trace section and feed rates
    pub fn validate(&self) -> ParameterResult<()> {
        let positive = [
            ("layer_width", self.layer_width),
            ("layer_height", self.layer_height),
            ("moving_speed", self.moving_speed),
            ("printing_speed", self.printing_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ParameterError::NotPositive {
                    name: name.to_string(),
                    value,
                });
            }
        }

        let finite = [
            ("x_home", self.x_home),
            ("y_home", self.y_home),
            ("z_home", self.z_home),
            ("retraction", self.retraction),
            ("lift_distance", self.lift_distance),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("{} is not a finite number", value),
                });
            }
        }
        Ok(())
    }
}

/// Stateful nozzle model
#[derive(Debug, Clone, PartialEq)]
pub struct Nozzle {
    params: NozzleParameters,
    x: f64,
    y: f64,
    z: f64,
    extruded_volume: f64,
}

impl Nozzle {
    /// Create a nozzle at its home position with nothing extruded
    pub fn new(params: NozzleParameters) -> Self {
        Self {
            x: params.x_home,
            y: params.y_home,
            z: params.z_home,
            extruded_volume: 0.0,
            params,
        }
    }

    /// Parameters the nozzle was created with
    pub fn parameters(&self) -> &NozzleParameters {
        &self.params
    }

    /// Current x, rounded to 0.01 mm
    pub fn current_x(&self) -> f64 {
        round_to(self.x, POSITION_DECIMALS)
    }

    /// Current y, rounded to 0.01 mm
    pub fn current_y(&self) -> f64 {
        round_to(self.y, POSITION_DECIMALS)
    }

    /// Current z, rounded to 0.01 mm
    pub fn current_z(&self) -> f64 {
        round_to(self.z, POSITION_DECIMALS)
    }

    /// Cumulative extruded volume, rounded to 0.001
    pub fn extruded_volume(&self) -> f64 {
        round_to(self.extruded_volume, VOLUME_DECIMALS)
    }

    /// Rounded snapshot of the nozzle state
    pub fn pose(&self) -> NozzlePose {
        NozzlePose {
            x: self.current_x(),
            y: self.current_y(),
            z: self.current_z(),
            extruded_volume: self.extruded_volume(),
        }
    }

    /// Distance from the current position to `(x, y)`, rounded to 0.001 mm
    pub fn length_to_extrude(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.current_x();
        let dy = y - self.current_y();
        round_to(dx.hypot(dy), VOLUME_DECIMALS)
    }

    /// Volume needed to print from the current position to `point`.
    ///
    /// The trace cross-section (`layer_width * layer_height`) is divided by
    /// the inlet area of `point.filament_diameter`. A zero diameter yields
    /// an infinite or NaN volume.
    pub fn volume_to_extrude(&self, point: &TracePoint) -> f64 {
        let length = self.length_to_extrude(point.x, point.y);
        let inlet_area = PI * point.filament_diameter.powi(2) / 4.0;
        length * self.params.layer_width * self.params.layer_height / inlet_area
    }

    /// Add `amount` to the cumulative extruded volume
    pub fn extrude(&mut self, amount: f64) {
        self.extruded_volume += amount;
    }

    /// Travel to `(x, y, z)` without printing.
    ///
    /// Emits the retraction, the lift above the current height, the XY move
    /// and the descent to `z`, in that order.
    pub fn move_to(&mut self, x: f64, y: f64, z: f64) -> Vec<Instruction> {
        let speed = self.params.moving_speed;
        self.extrude(self.params.retraction);

        let lifted = round_to(
            self.current_z() + self.params.lift_distance,
            POSITION_DECIMALS,
        );
        let instructions = vec![
            Instruction::new()
                .with(Axis::E, self.extruded_volume())
                .with(Axis::F, speed),
            Instruction::new().with(Axis::Z, lifted).with(Axis::F, speed),
            Instruction::new()
                .with(Axis::X, round_to(x, POSITION_DECIMALS))
                .with(Axis::Y, round_to(y, POSITION_DECIMALS))
                .with(Axis::F, speed),
            Instruction::new()
                .with(Axis::Z, round_to(z, POSITION_DECIMALS))
                .with(Axis::F, speed),
        ];

        self.x = x;
        self.y = y;
        self.z = z;
        instructions
    }

    /// Print a straight line to `point`, keeping the current height
    pub fn print(&mut self, point: &TracePoint) -> Instruction {
        let volume = self.volume_to_extrude(point);
        self.extrude(volume);
        self.x = point.x;
        self.y = point.y;

        Instruction::new()
            .with(Axis::X, self.current_x())
            .with(Axis::Y, self.current_y())
            .with(Axis::E, self.extruded_volume())
            .with(Axis::F, self.params.printing_speed)
    }
}
