//! Cursor navigation while typing.
//!
//! Contains:
//! - Single-step movement that skips blocks (arrow keys)
//! - Active word / active clue resolution for highlighting
//! - Clue-to-clue jumps (Tab / Shift+Tab)
//! - Auto-advance after a keystroke and retreat on Backspace
//!
//! Every query is total: when nothing sensible can be done the cursor state
//! comes back unchanged.

use rustc_hash::FxHashMap;
use xword_core::{Cell, Clue, ClueKey, Coord, Direction};

use crate::clues::{entries_from, Entry};
use crate::grid::CellGrid;
use crate::numbering::run_starts;

/// Row-major sort key.
#[inline]
fn reading_order(coord: Coord) -> (usize, usize) {
    (coord.y, coord.x)
}

/// Navigation view over one cell snapshot.
///
/// Build one per request; it borrows the snapshot and precomputes numbering
/// and entries so repeated queries are cheap.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    grid: CellGrid<'a>,
    numbers: FxHashMap<Coord, u32>,
    entries: Vec<Entry>,
}

impl<'a> Navigator<'a> {
    pub fn new(width: usize, height: usize, cells: &'a [Cell]) -> Self {
        let grid = CellGrid::new(width, height, cells);
        let starts = run_starts(width, height, |c| grid.slot(c));
        let numbers = starts.iter().map(|s| (s.coord, s.number)).collect();
        let entries = entries_from(&grid, &starts);
        Self { grid, numbers, entries }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Entries in number order, across before down for a shared number.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry number of a cell, if it has one.
    pub fn number_at(&self, coord: Coord) -> Option<u32> {
        self.numbers.get(&coord).copied()
    }

    // =========================================================================
    // Cell Movement
    // =========================================================================

    /// Step from `at` along `dir`, skipping blocks. Returns `at` unchanged when
    /// the edge is reached before a non-block cell.
    pub fn next_cell(&self, at: Coord, dir: Direction, forward: bool) -> Coord {
        let mut cursor = at;
        while let Some(next) = cursor.step(dir, forward, self.width(), self.height()) {
            if !self.grid.is_block(next) {
                return next;
            }
            cursor = next;
        }
        at
    }

    /// First cell of the open run through `at` along `dir`.
    fn run_start(&self, at: Coord, dir: Direction) -> Coord {
        let mut start = at;
        while let Some(prev) = start.step(dir, false, self.width(), self.height()) {
            if !self.grid.is_open(prev) {
                break;
            }
            start = prev;
        }
        start
    }

    // =========================================================================
    // Active word / clue
    // =========================================================================

    /// Cells of the run through `at` along `dir`, in run order. Empty when
    /// `at` is outside the grid, absent, or a block.
    pub fn active_word_cells(&self, at: Coord, dir: Direction) -> Vec<Coord> {
        if !self.grid.is_open(at) {
            return Vec::new();
        }

        let mut cells = Vec::new();
        let mut cursor = Some(self.run_start(at, dir));
        while let Some(coord) = cursor {
            if !self.grid.is_open(coord) {
                break;
            }
            cells.push(coord);
            cursor = coord.step(dir, true, self.width(), self.height());
        }
        cells
    }

    /// The entry containing `at` in direction `dir`. `None` for blocks and
    /// for runs too short to be numbered.
    pub fn active_entry(&self, at: Coord, dir: Direction) -> Option<&Entry> {
        if !self.grid.is_open(at) {
            return None;
        }
        let start = self.run_start(at, dir);
        let number = self.number_at(start)?;
        self.entries
            .iter()
            .find(|e| e.number == number && e.direction == dir)
    }

    pub fn active_clue(&self, at: Coord, dir: Direction) -> Option<ClueKey> {
        self.active_entry(at, dir).map(Entry::key)
    }

    /// Resolve the active clue against a full clue list (with text).
    pub fn find_active_clue<'c>(&self, clues: &'c [Clue], at: Coord, dir: Direction) -> Option<&'c Clue> {
        let key = self.active_clue(at, dir)?;
        clues.iter().find(|clue| clue.key() == key)
    }

    // =========================================================================
    // Clue jumps (Tab / Shift+Tab)
    // =========================================================================

    /// All across entries by number, then all down entries by number.
    fn tab_order(&self) -> Vec<&Entry> {
        Direction::ALL
            .iter()
            .flat_map(|dir| self.entries.iter().filter(move |e| e.direction == *dir))
            .collect()
    }

    /// Move to the next (or previous) clue in tab order, wrapping at both
    /// ends. Returns the first cell of the target clue and its direction.
    ///
    /// From a cell that belongs to no clue, forward goes to the first clue
    /// and backward to the last.
    pub fn clue_jump_target(&self, at: Coord, dir: Direction, forward: bool) -> (Coord, Direction) {
        let order = self.tab_order();
        let n = order.len();
        if n == 0 {
            return (at, dir);
        }

        let current = self
            .active_entry(at, dir)
            .and_then(|entry| order.iter().position(|e| e.key() == entry.key()));

        let target = match (current, forward) {
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
            (None, true) => 0,
            (None, false) => n - 1,
        };

        let entry = order[target];
        (entry.start, entry.direction)
    }

    // =========================================================================
    // Auto-advance / Backspace
    // =========================================================================

    /// Where the cursor goes after typing a letter (`forward`) or deleting one
    /// (`!forward`).
    ///
    /// Within a run this is simply the neighboring cell. Once the run is
    /// exhausted the cursor moves to the next (previous) entry in the same
    /// direction, then to the first (last) entry of the other direction, and
    /// finally wraps to the first (last) entry overall. Moving forward lands on
    /// the target's first cell, moving backward on its last cell.
    pub fn auto_advance_target(&self, at: Coord, dir: Direction, forward: bool) -> (Coord, Direction) {
        if let Some(next) = at.step(dir, forward, self.width(), self.height()) {
            if self.grid.is_open(next) {
                return (next, dir);
            }
        }

        let anchor = reading_order(self.run_start(at, dir));
        let mut same = self.entries.iter().filter(|e| e.direction == dir);
        let neighbor = if forward {
            same.find(|e| reading_order(e.start) > anchor)
        } else {
            same.filter(|e| reading_order(e.start) < anchor).last()
        };

        let target = neighbor
            .or_else(|| {
                let mut other = self.entries.iter().filter(|e| e.direction == dir.other());
                if forward { other.next() } else { other.last() }
            })
            .or_else(|| {
                let order = self.tab_order();
                if forward { order.first().copied() } else { order.last().copied() }
            });

        match target {
            Some(entry) if forward => (entry.start, entry.direction),
            Some(entry) => (entry.last(), entry.direction),
            None => (at, dir),
        }
    }
}
