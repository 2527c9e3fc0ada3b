//! Importer output. Transient: consumed once to overwrite a puzzle.

use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Direction};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPuzzle {
    pub title: String,
    pub author: String,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<ParsedCell>,
    pub clues: Vec<ParsedClue>,
}

impl ParsedPuzzle {
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&ParsedCell> {
        self.cells.iter().find(|c| c.x == x && c.y == y)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCell {
    pub x: usize,
    pub y: usize,
    /// Answer letter; empty for blocks and unknown squares.
    #[serde(rename = "char")]
    pub letter: String,
    pub is_block: bool,
}

impl ParsedCell {
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedClue {
    pub number: u32,
    pub direction: Direction,
    pub text: String,
}
