// Text and JSON views of an imported puzzle

use serde::Serialize;
use xword_core::{AnnotatedCell, Clue, Direction};

/// JSON document printed by `inspect --json`.
#[derive(Debug, Serialize)]
pub struct InspectDoc<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellDoc<'a>>,
    pub clues: &'a [Clue],
}

#[derive(Debug, Serialize)]
pub struct CellDoc<'a> {
    pub x: usize,
    pub y: usize,
    pub number: u32,
    pub solution: &'a str,
    pub is_block: bool,
}

impl<'a> From<&'a AnnotatedCell> for CellDoc<'a> {
    fn from(a: &'a AnnotatedCell) -> Self {
        Self {
            x: a.cell.x,
            y: a.cell.y,
            number: a.number,
            solution: &a.cell.solution,
            is_block: a.cell.is_block,
        }
    }
}

/// One line per row; each square is a right-aligned number (if any) then
/// the letter, `.` when unknown, or `###` for a block.
pub fn grid_text(width: usize, cells: &[AnnotatedCell]) -> String {
    let mut out = String::new();
    for row in cells.chunks(width.max(1)) {
        let squares: Vec<String> = row
            .iter()
            .map(|a| {
                if a.cell.is_block {
                    "###".to_string()
                } else {
                    let number = if a.is_numbered() { a.number.to_string() } else { String::new() };
                    let letter = if a.cell.solution.is_empty() { "." } else { a.cell.solution.as_str() };
                    format!("{:>2}{}", number, letter)
                }
            })
            .collect();
        out.push_str(squares.join(" ").trim_end());
        out.push('\n');
    }
    out
}

/// Clue list grouped under `Across` and `Down` headings.
pub fn clues_text(clues: &[Clue]) -> String {
    let mut out = String::new();
    for dir in Direction::ALL {
        let group: Vec<&Clue> = clues.iter().filter(|c| c.direction == dir).collect();
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(if dir == Direction::Across { "Across\n" } else { "Down\n" });
        for clue in group {
            let text = if clue.text.is_empty() { "(no clue)" } else { clue.text.as_str() };
            if clue.is_orphan() {
                out.push_str(&format!("{:>4}. {} [unused]\n", clue.number, text));
            } else {
                out.push_str(&format!("{:>4}. {} ({})\n", clue.number, text, clue.answer));
            }
        }
    }
    out
}
