//! G-code serialization and file output.
//!
//! Every instruction becomes one linear move line. The configured head and
//! tail blocks are copied verbatim around the moves.

use crate::error::{CamToolError, CamToolResult};
use diwkit_core::Instruction;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command used for every emitted move
pub const PRINT_COMMAND: &str = "G1";

/// Extension of written G-code files
pub const GCODE_EXTENSION: &str = "gcode";

/// Generator for serpentine print G-code
#[derive(Debug, Clone, PartialEq)]
pub struct GCodeGenerator {
    filename: String,
    head: String,
    tail: String,
}

impl GCodeGenerator {
    /// Create a generator writing `{filename}.gcode`
    pub fn new(
        filename: impl Into<String>,
        head: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            head: head.into(),
            tail: tail.into(),
        }
    }

    /// Output file name without directory
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.filename, GCODE_EXTENSION)
    }

    /// Format a single instruction, without line terminator
    pub fn line(&self, instruction: &Instruction) -> String {
        let mut line = String::from(PRINT_COMMAND);
        for (axis, value) in instruction.iter() {
            line.push_str(&format!(" {}{}", axis, value));
        }
        line
    }

    /// Head, one line per instruction, then tail
    pub fn generate(&self, instructions: &[Instruction]) -> String {
        let mut gcode = String::new();

        gcode.push_str(&self.head);
        if !gcode.is_empty() && !gcode.ends_with('\n') {
            gcode.push('\n');
        }

        for instruction in instructions {
            gcode.push_str(&self.line(instruction));
            gcode.push('\n');
        }

        gcode.push_str(&self.tail);
        gcode
    }

    /// Write `gcode` to `{filename}.gcode` inside `dir`
    pub fn save(&self, dir: &Path, gcode: &str) -> CamToolResult<PathBuf> {
        if self.filename.trim().is_empty() {
            return Err(CamToolError::InvalidParameters(
                "G-code filename is empty".to_string(),
            ));
        }
        let path = dir.join(self.file_name());
        fs::write(&path, gcode)?;
        info!("G-code saved to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diwkit_core::Axis;

    #[test]
    fn test_line_format() {
        let generator = GCodeGenerator::new("part", "", "");
        let instruction = Instruction::new()
            .with(Axis::F, 600.0)
            .with(Axis::E, 1.25)
            .with(Axis::Y, 4.0)
            .with(Axis::X, 3.5);
        assert_eq!(generator.line(&instruction), "G1 X3.5 Y4 E1.25 F600");
        assert_eq!(generator.line(&Instruction::new()), "G1");
    }

    #[test]
    fn test_generate_wraps_moves() {
        let generator = GCodeGenerator::new("part", "G21\nG90", "M2\n");
        let gcode = generator.generate(&[
            Instruction::new().with(Axis::Z, 1.0),
            Instruction::new().with(Axis::X, 2.0).with(Axis::F, 100.0),
        ]);
        assert_eq!(gcode, "G21\nG90\nG1 Z1\nG1 X2 F100\nM2\n");
    }

    #[test]
    fn test_generate_without_instructions() {
        let generator = GCodeGenerator::new("part", "; head\n", "; tail\n");
        assert_eq!(generator.generate(&[]), "; head\n; tail\n");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(GCodeGenerator::new("serpentine", "", "").file_name(), "serpentine.gcode");
    }
}
