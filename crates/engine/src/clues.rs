//! Clue derivation and merging with persisted clue text.
//!
//! The grid decides which clues exist (`derive_clues`); storage only supplies
//! the text. Persisted text whose key no longer matches a run is kept as an
//! orphan so an owner never loses work after moving blocks around.

use std::convert::Infallible;

use rustc_hash::FxHashMap;
use xword_core::{Cell, Clue, ClueKey, Coord, Direction, Puzzle, StoredClue};

use crate::grid::CellGrid;
use crate::numbering::{run_starts, RunStart};

/// A numbered run in the grid: where it starts and how long it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub number: u32,
    pub direction: Direction,
    pub start: Coord,
    pub len: usize,
}

impl Entry {
    #[inline]
    pub fn key(&self) -> ClueKey {
        ClueKey::new(self.number, self.direction)
    }

    /// Coordinates covered by this entry, from start to end.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len).map(move |i| self.start.advance(self.direction, i))
    }

    /// The final cell of the entry.
    pub fn last(&self) -> Coord {
        self.start.advance(self.direction, self.len.saturating_sub(1))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        match self.direction {
            Direction::Across => {
                coord.y == self.start.y && coord.x >= self.start.x && coord.x < self.start.x + self.len
            }
            Direction::Down => {
                coord.x == self.start.x && coord.y >= self.start.y && coord.y < self.start.y + self.len
            }
        }
    }
}

/// Length of the open run beginning at `start` along `dir`. Stops at a block,
/// an absent cell, or the grid edge.
pub(crate) fn run_length(grid: &CellGrid<'_>, start: Coord, dir: Direction) -> usize {
    let mut len = 0;
    let mut cursor = Some(start);
    while let Some(coord) = cursor {
        if !grid.is_open(coord) {
            break;
        }
        len += 1;
        cursor = coord.step(dir, true, grid.width(), grid.height());
    }
    len
}

/// Entries for precomputed run starts, in number order with across before
/// down for a shared number. Runs shorter than two cells are dropped.
pub(crate) fn entries_from(grid: &CellGrid<'_>, starts: &[RunStart]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(starts.len() * 2);
    for start in starts {
        for dir in Direction::ALL {
            if !start.starts(dir) {
                continue;
            }
            let len = run_length(grid, start.coord, dir);
            if len >= 2 {
                entries.push(Entry { number: start.number, direction: dir, start: start.coord, len });
            }
        }
    }
    entries
}

/// All entries of a grid snapshot.
pub fn entries(width: usize, height: usize, cells: &[Cell]) -> Vec<Entry> {
    let grid = CellGrid::new(width, height, cells);
    let starts = run_starts(width, height, |c| grid.slot(c));
    entries_from(&grid, &starts)
}

pub(crate) fn answer_for(grid: &CellGrid<'_>, entry: &Entry) -> String {
    entry
        .cells()
        .map(|coord| grid.get(coord).map(Cell::answer_letter).unwrap_or("_"))
        .collect()
}

/// The structural clue list: one clue per entry, with the answer spelled out
/// from the grid and empty text.
pub fn derive_clues(width: usize, height: usize, cells: &[Cell]) -> Vec<Clue> {
    let grid = CellGrid::new(width, height, cells);
    let starts = run_starts(width, height, |c| grid.slot(c));

    entries_from(&grid, &starts)
        .iter()
        .map(|entry| Clue {
            number: entry.number,
            direction: entry.direction,
            text: String::new(),
            answer: answer_for(&grid, entry),
        })
        .collect()
}

/// Overlay persisted text onto structural clues.
///
/// Unmatched stored clues are appended as orphans with an empty answer. The
/// result is ordered by number, across before down.
pub fn merge_clues<I>(structural: Vec<Clue>, stored: I) -> Vec<Clue>
where
    I: IntoIterator<Item = StoredClue>,
{
    let mut clues = structural;
    let mut index: FxHashMap<ClueKey, usize> =
        clues.iter().enumerate().map(|(i, clue)| (clue.key(), i)).collect();

    for row in stored {
        let key = row.key();
        match index.get(&key) {
            Some(&i) => clues[i].text = row.text,
            None => {
                index.insert(key, clues.len());
                clues.push(Clue {
                    number: row.number,
                    direction: row.direction,
                    text: row.text,
                    answer: String::new(),
                });
            }
        }
    }

    clues.sort_by_key(Clue::key);
    clues
}

/// Where persisted clue text comes from. Storage implements this; tests and
/// importers can use a plain `Vec<StoredClue>`.
pub trait ClueSource {
    type Error;

    fn clue_texts(&self, puzzle: &Puzzle) -> Result<Vec<StoredClue>, Self::Error>;
}

impl ClueSource for [StoredClue] {
    type Error = Infallible;

    fn clue_texts(&self, _puzzle: &Puzzle) -> Result<Vec<StoredClue>, Self::Error> {
        Ok(self.to_vec())
    }
}

impl ClueSource for Vec<StoredClue> {
    type Error = Infallible;

    fn clue_texts(&self, puzzle: &Puzzle) -> Result<Vec<StoredClue>, Self::Error> {
        self.as_slice().clue_texts(puzzle)
    }
}

/// Structural clues for `cells` merged with the text held by `source`.
pub fn full_clues<S>(source: &S, puzzle: &Puzzle, cells: &[Cell]) -> Result<Vec<Clue>, S::Error>
where
    S: ClueSource + ?Sized,
{
    let stored = source.clue_texts(puzzle)?;
    let structural = derive_clues(puzzle.width, puzzle.height, cells);
    Ok(merge_clues(structural, stored))
}
