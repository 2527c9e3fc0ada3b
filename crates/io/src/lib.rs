//! Puzzle file import.
//!
//! Two formats are understood: Across Lite `.puz` (binary) and `.ipuz`
//! (JSON). Both parse into a [`ParsedPuzzle`]; [`import::accept`] then turns
//! that into the cell and clue set that replaces a puzzle's contents.

pub mod import;
pub mod ipuz;
pub mod puz;

use std::path::Path;

use thiserror::Error;
use xword_core::ParsedPuzzle;

pub use import::{accept, ImportedGrid};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file format")]
    UnsupportedFormat,
    #[error("invalid puz file: too short")]
    TooShort,
    #[error("invalid puz file: missing magic bytes")]
    BadSignature,
    #[error("invalid puz file: truncated {section}")]
    Truncated { section: &'static str },
    #[error("invalid ipuz file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid puzzle dimensions")]
    InvalidDimensions,
    #[error("puzzle is {width}x{height}; the largest supported grid is {max}x{max}")]
    TooLarge { width: usize, height: usize, max: usize },
}

/// Parse an uploaded puzzle file.
///
/// The extension decides the format (case-insensitive). Files with any other
/// name are accepted when they carry the `.puz` signature.
pub fn parse_puzzle_file(filename: &str, data: &[u8]) -> Result<ParsedPuzzle, ImportError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("puz") => puz::parse(data),
        Some("ipuz") => ipuz::parse(data),
        _ if puz::has_signature(data) => puz::parse(data),
        _ => Err(ImportError::UnsupportedFormat),
    }
}
