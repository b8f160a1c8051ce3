//! Vertical stroke summary written as CSV.

use crate::error::CamToolResult;
use diwkit_designer::{Serpentine, VerticalSegmentInfo};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Header row of the summary file
pub const CSV_HEADER: &str = "Segment number,x position,inlet diameter,distance from previous";

/// Suffix appended to the base filename
pub const FILE_SUFFIX: &str = "_serpentine_info.csv";

/// One row per vertical stroke of a serpentine
#[derive(Debug, Clone, PartialEq)]
pub struct SerpentineReport {
    rows: Vec<VerticalSegmentInfo>,
}

impl SerpentineReport {
    pub fn new(rows: Vec<VerticalSegmentInfo>) -> Self {
        Self { rows }
    }

    pub fn from_serpentine(serpentine: &Serpentine) -> Self {
        Self::new(serpentine.vertical_segments_info())
    }

    pub fn rows(&self) -> &[VerticalSegmentInfo] {
        &self.rows
    }

    /// Output file name for `filename`
    pub fn file_name(filename: &str) -> String {
        format!("{}{}", filename, FILE_SUFFIX)
    }

    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        csv.push('\n');
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                row.number, row.x_position, row.inlet_diameter, row.distance_from_previous
            ));
        }
        csv
    }

    /// Write the report to `{filename}_serpentine_info.csv` inside `dir`
    pub fn save(&self, dir: &Path, filename: &str) -> CamToolResult<PathBuf> {
        let path = dir.join(Self::file_name(filename));
        fs::write(&path, self.to_csv())?;
        info!(
            "Serpentine info ({} strokes) saved to {}",
            self.rows.len(),
            path.display()
        );
        Ok(path)
    }
}
