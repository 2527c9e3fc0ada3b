//! Turning a parsed file into the contents of a puzzle.

use xword_core::{Cell, GridLimits, ParsedPuzzle, StoredClue};

use crate::ImportError;

/// Replacement contents for a puzzle: every cell, plus clue text keyed by
/// entry. An import overwrites the grid wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedGrid {
    pub title: String,
    pub author: String,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    pub clues: Vec<StoredClue>,
}

/// Check a parsed file against `limits` and build the replacement cell set.
///
/// Imported letters become the cell `solution`; player entries start empty.
/// Coordinates the file did not describe become blank open cells.
pub fn accept(parsed: ParsedPuzzle, limits: &GridLimits) -> Result<ImportedGrid, ImportError> {
    let (width, height) = (parsed.width, parsed.height);
    if width > limits.max_dimension || height > limits.max_dimension {
        return Err(ImportError::TooLarge {
            width,
            height,
            max: limits.max_dimension,
        });
    }
    if width < limits.min_dimension || height < limits.min_dimension {
        return Err(ImportError::InvalidDimensions);
    }

    let mut slots: Vec<Option<Cell>> = vec![None; width * height];
    for parsed_cell in parsed.cells {
        let coord = parsed_cell.coord();
        if !coord.in_bounds(width, height) {
            continue;
        }
        let cell = if parsed_cell.is_block {
            Cell::block(coord.x, coord.y)
        } else {
            Cell::blank(coord.x, coord.y).with_solution(parsed_cell.letter)
        };
        slots[coord.index(width)] = Some(cell);
    }

    let cells = slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or_else(|| Cell::blank(i % width, i / width)))
        .collect();

    let clues = parsed
        .clues
        .into_iter()
        .map(|c| StoredClue::new(c.number, c.direction, c.text))
        .collect();

    Ok(ImportedGrid {
        title: parsed.title,
        author: parsed.author,
        width,
        height,
        cells,
        clues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use xword_core::{Direction, ParsedCell, ParsedClue};

    fn parsed(width: usize, height: usize) -> ParsedPuzzle {
        let mut cells = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let is_block = (x + y) % 4 == 3;
                cells.push(ParsedCell {
                    x,
                    y,
                    letter: if is_block { String::new() } else { "Z".into() },
                    is_block,
                });
            }
        }
        ParsedPuzzle {
            title: "T".into(),
            author: "A".into(),
            width,
            height,
            cells,
            clues: vec![ParsedClue { number: 1, direction: Direction::Across, text: "Hint".into() }],
        }
    }

    #[test]
    fn test_letters_land_in_solution() {
        let grid = accept(parsed(5, 5), &GridLimits::default()).unwrap();

        assert_eq!(grid.cells.len(), 25);
        let first = &grid.cells[0];
        assert_eq!(first.solution, "Z");
        assert_eq!(first.entry, "");
        assert!(grid.cells[3].is_block);
        assert_eq!(grid.clues, vec![StoredClue::new(1, Direction::Across, "Hint")]);
    }

    #[test]
    fn test_missing_cells_are_filled() {
        let mut p = parsed(5, 5);
        p.cells.retain(|c| c.y == 0);
        let grid = accept(p, &GridLimits::default()).unwrap();

        assert_eq!(grid.cells.len(), 25);
        let last = grid.cells.last().unwrap();
        assert_eq!(last.coord().x, 4);
        assert_eq!(last.coord().y, 4);
        assert!(!last.is_block);
        assert!(last.solution.is_empty());
    }

    #[test]
    fn test_size_bounds() {
        let err = accept(parsed(25, 5), &GridLimits::default()).unwrap_err();
        assert!(matches!(err, ImportError::TooLarge { width: 25, height: 5, max: 23 }));

        let err = accept(parsed(3, 3), &GridLimits::default()).unwrap_err();
        assert!(matches!(err, ImportError::InvalidDimensions));

        let roomy = GridLimits { min_dimension: 1, max_dimension: 30 };
        assert!(accept(parsed(25, 3), &roomy).is_ok());
    }
}
