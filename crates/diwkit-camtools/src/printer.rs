//! Layer-by-layer print orchestration.

use crate::nozzle::Nozzle;
use diwkit_core::{GeometryError, Instruction, Layer};
use tracing::debug;

/// Drives a [`Nozzle`] over finalized layers
#[derive(Debug)]
pub struct Printer<'a> {
    nozzle: &'a mut Nozzle,
    instructions: Vec<Instruction>,
}

impl<'a> Printer<'a> {
    /// Create a printer driving `nozzle` from its current pose
    pub fn new(nozzle: &'a mut Nozzle) -> Self {
        Self {
            nozzle,
            instructions: Vec::new(),
        }
    }

    /// Print `layers` in order and return the instructions they produced.
    ///
    /// Each layer travels to its first point at the layer height and prints
    /// the remaining points. Successive calls continue from where the nozzle
    /// stopped.
    ///
    /// A layer without points aborts the pass with
    /// [`GeometryError::EmptyTrace`]; nothing from that call is recorded.
    pub fn print_trace(&mut self, layers: &[Layer]) -> Result<Vec<Instruction>, GeometryError> {
        let mut emitted = Vec::new();
        for (index, layer) in layers.iter().enumerate() {
            emitted.extend(self.print_layer(index, layer)?);
        }
        debug!(
            "Printed {} layers into {} instructions",
            layers.len(),
            emitted.len()
        );
        self.instructions.extend(emitted.iter().cloned());
        Ok(emitted)
    }

    fn print_layer(
        &mut self,
        layer_index: usize,
        layer: &Layer,
    ) -> Result<Vec<Instruction>, GeometryError> {
        let start = layer
            .trace
            .start()
            .ok_or(GeometryError::EmptyTrace { layer_index })?;

        let mut instructions = self.nozzle.move_to(start.x, start.y, layer.height);
        for point in layer.trace.printed_points() {
            instructions.push(self.nozzle.print(point));
        }
        Ok(instructions)
    }

    /// Every instruction emitted by this printer so far
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Consume the printer, keeping its instructions
    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}
