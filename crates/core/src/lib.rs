//! Core crossword value types.
//!
//! Everything here is plain data: cells, puzzles, clues and the coordinate
//! and key types used to address them. No grid logic lives in this crate.

pub mod cell;
pub mod clue;
pub mod coord;
pub mod limits;
pub mod parsed;
pub mod puzzle;

pub use cell::{AnnotatedCell, Cell};
pub use clue::{Clue, ClueKey, StoredClue};
pub use coord::{Coord, Direction, ParseKeyError};
pub use limits::GridLimits;
pub use parsed::{ParsedCell, ParsedClue, ParsedPuzzle};
pub use puzzle::Puzzle;
