//! Grid lifecycle operations
//!
//! Contains:
//! - Sizing new grids and validating dimensions
//! - Resize (drop out-of-bounds cells, fill new coordinates)
//! - Block toggles at mirrored points
//! - Normalizing puzzle names and typed letters
//! - Creation cooldown
//!
//! These produce cell sets for the storage layer to write; nothing here
//! touches storage itself.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use thiserror::Error;
use xword_core::{Cell, Coord, GridLimits};

/// Maximum stored length of a puzzle name, in bytes.
pub const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must be between {min}x{min} and {max}x{max}, got {width}x{height}")]
    DimensionsOutOfRange {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },
    #[error("please wait a moment before creating another puzzle")]
    CooldownActive { retry_after_secs: u64 },
}

pub fn validate_dimensions(width: usize, height: usize, limits: &GridLimits) -> Result<(), GridError> {
    if limits.allows(width, height) {
        Ok(())
    } else {
        Err(GridError::DimensionsOutOfRange {
            width,
            height,
            min: limits.min_dimension,
            max: limits.max_dimension,
        })
    }
}

/// One open, empty cell per coordinate, row-major.
pub fn blank_cells(width: usize, height: usize) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            cells.push(Cell::blank(x, y));
        }
    }
    cells
}

/// Cells for a grid resized to `width` x `height`.
///
/// Cells inside the new bounds keep their content, cells outside are dropped,
/// and newly exposed coordinates get blank cells. Output is row-major.
pub fn resize_cells(cells: Vec<Cell>, width: usize, height: usize) -> Vec<Cell> {
    let mut kept: FxHashMap<Coord, Cell> = cells
        .into_iter()
        .filter(|cell| cell.coord().in_bounds(width, height))
        .map(|cell| (cell.coord(), cell))
        .collect();

    let mut resized = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let cell = kept.remove(&Coord::new(x, y)).unwrap_or_else(|| Cell::blank(x, y));
            resized.push(cell);
        }
    }
    resized
}

/// Replacement cells for a block toggle at `points`. Toggling either way
/// clears the letter, the solution and the pencil flag.
pub fn block_toggle_cells(points: &[Coord], is_block: bool) -> Vec<Cell> {
    points
        .iter()
        .map(|p| Cell {
            is_block,
            ..Cell::blank(p.x, p.y)
        })
        .collect()
}

/// Write `updates` into `cells`, replacing cells at the same coordinate and
/// appending the rest.
pub fn upsert_cells(cells: &mut Vec<Cell>, updates: Vec<Cell>) {
    let index: FxHashMap<Coord, usize> = cells.iter().enumerate().map(|(i, c)| (c.coord(), i)).collect();
    for update in updates {
        match index.get(&update.coord()) {
            Some(&i) => cells[i] = update,
            None => cells.push(update),
        }
    }
}

/// Set or clear blocks at `points` in place. Pair with
/// [`symmetric_cells`](crate::symmetric_cells) to keep the grid mirrored.
pub fn apply_block_toggle(cells: &mut Vec<Cell>, points: &[Coord], is_block: bool) {
    upsert_cells(cells, block_toggle_cells(points, is_block));
}

/// Collapse runs of whitespace, cap the length, and fall back to a
/// timestamped default when nothing is left.
pub fn normalize_puzzle_name(raw: &str, now: DateTime<Utc>) -> String {
    let mut name = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if name.len() > MAX_NAME_LEN {
        let mut cut = MAX_NAME_LEN;
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        name.truncate(cut);
    }

    if name.is_empty() {
        name = format!("puzzle_{}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    name
}

/// Reduce typed input to a single upper-case letter: the last character the
/// user entered. Whitespace or control input clears the cell.
pub fn sanitize_entry(raw: &str) -> String {
    match raw.chars().last() {
        Some(ch) if !ch.is_whitespace() && !ch.is_control() => ch.to_uppercase().collect(),
        _ => String::new(),
    }
}

/// Reject a new puzzle when the owner created one less than `cooldown` ago.
pub fn check_creation_cooldown(
    last_created: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    cooldown: Duration,
) -> Result<(), GridError> {
    let Some(last) = last_created else {
        return Ok(());
    };

    // A last-created time in the future counts as zero elapsed.
    let elapsed = (now - last).to_std().unwrap_or(Duration::ZERO);
    if elapsed < cooldown {
        let remaining = cooldown - elapsed;
        return Err(GridError::CooldownActive {
            retry_after_secs: remaining.as_secs().max(1),
        });
    }
    Ok(())
}
