//! `.ipuz` (JSON) reader.
//!
//! Real-world ipuz files disagree on details, so decoding is lenient:
//! grid slots and clue entries are sum types that accept every shape seen in
//! the wild and fall back to an "unrecognized" variant instead of failing
//! the whole file. Explicit `null` where a grid or clue table is expected
//! reads as absent.

use std::collections::BTreeMap;

use log::debug;
use serde::de::IgnoredAny;
use serde::Deserialize;
use xword_core::{Direction, ParsedCell, ParsedClue, ParsedPuzzle};

use crate::ImportError;

const DEFAULT_BLOCK: &str = "#";
const DEFAULT_EMPTY: &str = "0";

/// Largest side the parser will lay out. Tighter limits are applied later by
/// [`crate::accept`].
pub const MAX_PARSE_DIMENSION: usize = 255;

#[derive(Debug, Deserialize)]
struct IpuzFile {
    #[serde(default)]
    dimensions: Option<Dimensions>,
    #[serde(default)]
    puzzle: Option<Vec<Vec<Option<RawSlot>>>>,
    #[serde(default)]
    solution: Option<Vec<Vec<Option<RawSlot>>>>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    block: Option<String>,
    #[serde(default)]
    empty: Option<Marker>,
    #[serde(default)]
    clues: Option<BTreeMap<String, ClueList>>,
}

#[derive(Debug, Default, Deserialize)]
struct Dimensions {
    #[serde(default)]
    width: usize,
    #[serde(default)]
    height: usize,
}

/// The `empty` marker may be written as a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Marker {
    Text(String),
    Number(serde_json::Number),
}

impl Marker {
    fn into_string(self) -> String {
        match self {
            Marker::Text(s) => s,
            Marker::Number(n) => n.to_string(),
        }
    }
}

/// One grid slot. `null` is handled by the surrounding `Option`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSlot {
    Text(String),
    Number(serde_json::Number),
    Styled {
        #[serde(default)]
        cell: Option<serde_json::Value>,
    },
    Unrecognized(IgnoredAny),
}

/// A clue number as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClueNumber {
    Int(u64),
    Float(f64),
    Text(String),
}

impl ClueNumber {
    fn value(&self) -> Option<u32> {
        match self {
            ClueNumber::Int(n) => u32::try_from(*n).ok(),
            ClueNumber::Float(f) if f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64 => Some(*f as u32),
            ClueNumber::Float(_) => None,
            ClueNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A clue entry, tried in order: `[number, text, ...]`, then
/// `{"number": .., "clue" | "text": ..}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClueEntry {
    Listed(Vec<serde_json::Value>),
    Keyed {
        number: ClueNumber,
        #[serde(default)]
        clue: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
    Unrecognized(IgnoredAny),
}

impl ClueEntry {
    fn resolve(self) -> Option<(u32, String)> {
        match self {
            ClueEntry::Listed(items) => {
                let mut items = items.into_iter();
                let number = ClueNumber::deserialize(items.next()?).ok()?.value()?;
                match items.next()? {
                    serde_json::Value::String(text) => Some((number, text)),
                    _ => None,
                }
            }
            ClueEntry::Keyed { number, clue, text } => {
                let text = clue.filter(|c| !c.is_empty()).or(text).unwrap_or_default();
                Some((number.value()?, text))
            }
            ClueEntry::Unrecognized(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClueList {
    Entries(Vec<ClueEntry>),
    Unrecognized(IgnoredAny),
}

struct Markers {
    block: String,
    empty: String,
}

impl Markers {
    /// `(is_block, letter)` for one slot.
    fn classify(&self, slot: Option<&Option<RawSlot>>) -> (bool, String) {
        let text = match slot {
            // Past the end of a short row.
            None => return (false, String::new()),
            // An omitted cell.
            Some(None) => return (false, String::new()),
            Some(Some(RawSlot::Text(s))) => s.as_str(),
            Some(Some(RawSlot::Styled { cell: Some(serde_json::Value::String(s)) })) => s.as_str(),
            Some(Some(_)) => return (false, String::new()),
        };

        if text == self.block {
            (true, String::new())
        } else if text == self.empty {
            (false, String::new())
        } else {
            (false, text.to_uppercase())
        }
    }
}

fn grid_dimensions(grid: &[Vec<Option<RawSlot>>]) -> Option<(usize, usize)> {
    let first = grid.first()?;
    Some((first.len(), grid.len()))
}

pub fn parse(data: &[u8]) -> Result<ParsedPuzzle, ImportError> {
    let file: IpuzFile = serde_json::from_slice(data)?;
    let puzzle = file.puzzle.unwrap_or_default();
    let solution = file.solution.unwrap_or_default();

    let declared = file
        .dimensions
        .as_ref()
        .map(|d| (d.width, d.height))
        .filter(|&(w, h)| w > 0 && h > 0);
    let (width, height) = declared
        .or_else(|| grid_dimensions(&puzzle))
        .or_else(|| grid_dimensions(&solution))
        .filter(|&(w, h)| w > 0 && h > 0)
        .ok_or(ImportError::InvalidDimensions)?;
    if width > MAX_PARSE_DIMENSION || height > MAX_PARSE_DIMENSION {
        debug!("ipuz declares {}x{}; refusing to lay it out", width, height);
        return Err(ImportError::InvalidDimensions);
    }
    let area = width.checked_mul(height).ok_or(ImportError::InvalidDimensions)?;

    let markers = Markers {
        block: file.block.unwrap_or_else(|| DEFAULT_BLOCK.to_string()),
        empty: file.empty.map(Marker::into_string).unwrap_or_else(|| DEFAULT_EMPTY.to_string()),
    };

    let source = if solution.is_empty() { &puzzle } else { &solution };

    let mut cells = Vec::with_capacity(area);
    for y in 0..height {
        for x in 0..width {
            let slot = source.get(y).and_then(|row| row.get(x));
            let (is_block, letter) = markers.classify(slot);
            cells.push(ParsedCell { x, y, letter, is_block });
        }
    }

    let mut across = Vec::new();
    let mut down = Vec::new();
    for (key, list) in file.clues.unwrap_or_default() {
        let (direction, bucket) = if key.eq_ignore_ascii_case("across") {
            (Direction::Across, &mut across)
        } else if key.eq_ignore_ascii_case("down") {
            (Direction::Down, &mut down)
        } else {
            debug!("ignoring ipuz clue list {:?}", key);
            continue;
        };

        let ClueList::Entries(entries) = list else {
            debug!("ipuz clue list {:?} is not an array; skipped", key);
            continue;
        };
        for entry in entries {
            match entry.resolve() {
                Some((number, text)) => bucket.push(ParsedClue { number, direction, text }),
                None => debug!("skipping unrecognized ipuz clue entry in {:?}", key),
            }
        }
    }
    let mut clues = across;
    clues.append(&mut down);

    Ok(ParsedPuzzle {
        title: file.title.unwrap_or_default(),
        author: file.author.unwrap_or_default(),
        width,
        height,
        cells,
        clues,
    })
}
