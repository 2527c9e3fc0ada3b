//! Test helpers for building grids from ASCII rows.
//!
//! `#` is a block, `.` an open empty cell, `?` an absent coordinate, and any
//! other character an open cell whose solution is that letter.

use xword_core::{Cell, Coord};

/// A grid snapshot built from rows of text.
#[derive(Debug, Clone)]
pub struct TestGrid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl TestGrid {
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '#' => cells.push(Cell::block(x, y)),
                    '.' => cells.push(Cell::blank(x, y)),
                    '?' => {}
                    letter => cells.push(Cell::blank(x, y).with_solution(letter.to_string())),
                }
            }
        }

        Self { width, height, cells }
    }

    /// An open grid with no blocks and no letters.
    pub fn empty(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::blank(x, y));
            }
        }
        Self { width, height, cells }
    }
}

/// Proptest strategy: grids up to 9x9 with a random block pattern.
pub fn arb_grid() -> impl proptest::strategy::Strategy<Value = TestGrid> {
    use proptest::prelude::*;

    (1usize..10, 1usize..10).prop_flat_map(|(width, height)| {
        proptest::collection::vec(any::<bool>(), width * height).prop_map(move |blocks| {
            let cells = blocks
                .iter()
                .enumerate()
                .map(|(i, &is_block)| {
                    let (x, y) = (i % width, i / width);
                    if is_block { Cell::block(x, y) } else { Cell::blank(x, y) }
                })
                .collect();
            TestGrid { width, height, cells }
        })
    })
}

pub fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}
