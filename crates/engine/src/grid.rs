//! Coordinate lookup over a cell snapshot.
//!
//! Snapshots come straight from storage and are normally complete, but the
//! engine never assumes so. A coordinate with no cell is *absent*: it is not a
//! block for adjacency purposes, yet it cannot hold a letter or be annotated.

use rustc_hash::FxHashMap;
use xword_core::{Cell, Coord};

/// What occupies a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// No cell at this coordinate (or outside the grid).
    Absent,
    Open,
    Block,
}

/// Borrowed, indexed view of a cell snapshot.
#[derive(Debug, Clone)]
pub struct CellGrid<'a> {
    width: usize,
    height: usize,
    cells: FxHashMap<Coord, &'a Cell>,
}

impl<'a> CellGrid<'a> {
    /// Index `cells` by coordinate. Cells outside `width` x `height` are
    /// ignored; if a coordinate repeats, the last cell wins.
    pub fn new(width: usize, height: usize, cells: &'a [Cell]) -> Self {
        let mut map = FxHashMap::with_capacity_and_hasher(cells.len(), Default::default());
        for cell in cells {
            let coord = cell.coord();
            if coord.in_bounds(width, height) {
                map.insert(coord, cell);
            }
        }
        Self { width, height, cells: map }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&'a Cell> {
        self.cells.get(&coord).copied()
    }

    pub fn slot(&self, coord: Coord) -> Slot {
        match self.get(coord) {
            None => Slot::Absent,
            Some(cell) if cell.is_block => Slot::Block,
            Some(_) => Slot::Open,
        }
    }

    /// True only for a present block. Absent coordinates are not blocks.
    #[inline]
    pub fn is_block(&self, coord: Coord) -> bool {
        self.slot(coord) == Slot::Block
    }

    /// True for a present, non-block cell.
    #[inline]
    pub fn is_open(&self, coord: Coord) -> bool {
        self.slot(coord) == Slot::Open
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
