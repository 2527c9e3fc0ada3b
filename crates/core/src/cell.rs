//! Grid cells as stored, and the numbered view derived from them.

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// One square of a puzzle grid.
///
/// `entry` is what a solver typed (serialized as `char`), `solution` is the
/// authoritative answer and may be empty while a grid is being built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "char", default)]
    pub entry: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub is_block: bool,
    /// Rendering hint only; never affects numbering.
    #[serde(default)]
    pub is_pencil: bool,
}

impl Cell {
    /// An open, empty cell.
    pub fn blank(x: usize, y: usize) -> Self {
        Self { x, y, ..Default::default() }
    }

    pub fn block(x: usize, y: usize) -> Self {
        Self { x, y, is_block: true, ..Default::default() }
    }

    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = solution.into();
        self
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// The letter used when spelling out an answer: the solution when set,
    /// otherwise the player's entry, otherwise `_`.
    pub fn answer_letter(&self) -> &str {
        if !self.solution.is_empty() {
            &self.solution
        } else if !self.entry.is_empty() {
            &self.entry
        } else {
            "_"
        }
    }
}

/// A cell plus its derived clue number (0 = unnumbered). Recomputed on
/// every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedCell {
    #[serde(flatten)]
    pub cell: Cell,
    pub number: u32,
}

impl AnnotatedCell {
    #[inline]
    pub fn coord(&self) -> Coord {
        self.cell.coord()
    }

    #[inline]
    pub fn is_numbered(&self) -> bool {
        self.number > 0
    }
}
