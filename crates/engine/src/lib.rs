//! Crossword grid engine.
//!
//! Pure functions over a caller-supplied cell snapshot: numbering, clue
//! derivation, cursor navigation and block symmetry. Nothing here performs
//! I/O or holds shared state, so every entry point is safe to call from any
//! thread.

pub mod clues;
pub mod grid;
pub mod grid_ops;
pub mod navigation;
pub mod numbering;
pub mod symmetry;

#[cfg(test)]
pub mod harness;

pub use clues::{derive_clues, entries, full_clues, merge_clues, ClueSource, Entry};
pub use grid::{CellGrid, Slot};
pub use grid_ops::GridError;
pub use navigation::Navigator;
pub use numbering::{calculate_numbers, run_starts, RunStart};
pub use symmetry::{symmetric_cells, SymmetryMode};
