//! Layer stacking.
//!
//! A [`Sketch`] collects traces in print order. Heights are assigned when
//! the sketch is finalized, one layer height above the previous trace.

use diwkit_core::{Layer, Trace};
use tracing::debug;

/// Ordered collection of traces awaiting layer heights
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    layer_height: f64,
    traces: Vec<Trace>,
}

impl Sketch {
    /// Create an empty sketch
    pub fn new(layer_height: f64) -> Self {
        Self {
            layer_height,
            traces: Vec::new(),
        }
    }

    /// Append `count` copies of a serpentine trace
    pub fn add_serpentine_layers(&mut self, trace: &Trace, count: usize) {
        self.traces.extend(std::iter::repeat_n(trace, count).cloned());
    }

    /// Append a single segment trace
    pub fn add_segment_layer(&mut self, trace: &Trace) {
        self.traces.push(trace.clone());
    }

    /// Number of pending traces
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Whether no trace was added
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Assign heights in insertion order, starting at one layer height.
    ///
    /// Leaves the sketch untouched, so repeated calls return equal layers.
    pub fn finalize_heights(&self) -> Vec<Layer> {
        let mut height = 0.0;
        let layers: Vec<Layer> = self
            .traces
            .iter()
            .map(|trace| {
                height += self.layer_height;
                Layer::new(height, trace.clone())
            })
            .collect();
        debug!("Finalized {} layers, top at {} mm", layers.len(), height);
        layers
    }
}
