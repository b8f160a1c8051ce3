//! Sparse motion instructions
//!
//! An [`Instruction`] records only the axis words that change. Axes that
//! are absent keep their previous value and are left out of the emitted
//! G-code line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Axis words understood by the motion layer.
///
/// The declaration order is the order words appear on an emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X position
    X,
    /// Y position
    Y,
    /// Z position
    Z,
    /// Cumulative extrusion
    E,
    /// Feed rate
    F,
}

impl Axis {
    /// All axes in emission order
    pub const ALL: [Axis; 5] = [Axis::X, Axis::Y, Axis::Z, Axis::E, Axis::F];

    /// The G-code letter for this axis
    pub fn letter(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
            Axis::E => 'E',
            Axis::F => 'F',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sparse set of axis words for one motion line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    words: BTreeMap<Axis, f64>,
}

impl Instruction {
    /// Create an instruction with no words
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        self.words.insert(axis, value);
        self
    }

    /// Value for an axis, if present
    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.words.get(&axis).copied()
    }

    /// Whether the axis is present
    pub fn contains(&self, axis: Axis) -> bool {
        self.words.contains_key(&axis)
    }

    /// Present axes and values in emission order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        self.words.iter().map(|(axis, value)| (*axis, *value))
    }

    /// Number of present words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word is present
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (axis, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}{}", axis, value)?;
            first = false;
        }
        Ok(())
    }
}
