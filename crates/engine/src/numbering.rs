//! Entry numbering.
//!
//! A cell gets the next number (row-major, starting at 1) when it starts an
//! across or down run of at least two cells. A run starts where the previous
//! neighbor is the grid edge or a block, and the next neighbor is an open cell.

use rustc_hash::FxHashMap;
use xword_core::{AnnotatedCell, Cell, Coord, Direction};

use crate::grid::{CellGrid, Slot};

/// A numbered cell and the directions it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStart {
    pub coord: Coord,
    pub number: u32,
    pub across: bool,
    pub down: bool,
}

impl RunStart {
    pub fn starts(&self, dir: Direction) -> bool {
        match dir {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }
}

/// Compute run starts for a grid described by `probe`.
///
/// `probe` is only called with in-bounds coordinates. An absent neighbor is
/// neither a block (so it does not begin a run after it) nor open (so it does
/// not extend a run into it).
pub fn run_starts<F>(width: usize, height: usize, probe: F) -> Vec<RunStart>
where
    F: Fn(Coord) -> Slot,
{
    let mut starts = Vec::new();
    let mut next_number = 1u32;

    for y in 0..height {
        for x in 0..width {
            let here = Coord::new(x, y);
            if probe(here) != Slot::Open {
                continue;
            }

            let across = (x == 0 || probe(Coord::new(x - 1, y)) == Slot::Block)
                && x + 1 < width
                && probe(Coord::new(x + 1, y)) == Slot::Open;
            let down = (y == 0 || probe(Coord::new(x, y - 1)) == Slot::Block)
                && y + 1 < height
                && probe(Coord::new(x, y + 1)) == Slot::Open;

            if across || down {
                starts.push(RunStart { coord: here, number: next_number, across, down });
                next_number += 1;
            }
        }
    }

    starts
}

/// Annotate every present cell with its entry number (0 = none), in
/// row-major order. Coordinates with no cell are skipped.
pub fn calculate_numbers(width: usize, height: usize, cells: &[Cell]) -> Vec<AnnotatedCell> {
    let grid = CellGrid::new(width, height, cells);
    let numbers: FxHashMap<Coord, u32> = run_starts(width, height, |c| grid.slot(c))
        .into_iter()
        .map(|s| (s.coord, s.number))
        .collect();

    let mut annotated = Vec::with_capacity(grid.len());
    for y in 0..height {
        for x in 0..width {
            let coord = Coord::new(x, y);
            if let Some(cell) = grid.get(coord) {
                annotated.push(AnnotatedCell {
                    cell: cell.clone(),
                    number: numbers.get(&coord).copied().unwrap_or(0),
                });
            }
        }
    }

    annotated
}
