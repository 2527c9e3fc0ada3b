//! Across Lite `.puz` reader.
//!
//! Layout: a 0x34-byte header, the solution grid, the player-state grid,
//! then NUL-terminated strings (title, author, copyright, one clue per entry
//! in numbering order). Checksums and extra sections are not verified.
//!
//! Text is decoded as Windows-1252 rather than strict ISO-8859-1. The two
//! agree everywhere except 0x80..=0x9F, where ISO-8859-1 has C1 control codes
//! and Windows-1252 has the curly quotes, dashes and ellipsis that Across Lite
//! files actually contain.

use encoding_rs::WINDOWS_1252;
use log::debug;
use xword_core::{Direction, ParsedCell, ParsedClue, ParsedPuzzle};
use xword_engine::{run_starts, Slot};

use crate::ImportError;

pub const HEADER_LEN: usize = 0x34;
pub const MAGIC: &[u8; 11] = b"ACROSS&DOWN";
pub const BLOCK: u8 = b'.';

const MAGIC_AT: usize = 0x02;
const WIDTH_AT: usize = 0x2C;
const HEIGHT_AT: usize = 0x2D;
const CLUE_COUNT_AT: usize = 0x2E;

/// True when `data` carries the `ACROSS&DOWN` signature at byte 2.
pub fn has_signature(data: &[u8]) -> bool {
    data.get(MAGIC_AT..MAGIC_AT + MAGIC.len()) == Some(&MAGIC[..])
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize, section: &'static str) -> Result<&'a [u8], ImportError> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.data.len());
        match end {
            Some(end) => {
                let bytes = &self.data[self.pos..end];
                self.pos = end;
                Ok(bytes)
            }
            None => Err(ImportError::Truncated { section }),
        }
    }

    /// Next NUL-terminated string. Reads to the end of the buffer when the
    /// terminator is missing; past the end every string is empty.
    fn string(&mut self) -> String {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let (raw, consumed) = match rest.iter().position(|&b| b == 0) {
            Some(nul) => (&rest[..nul], nul + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        decode(raw)
    }
}

fn decode(raw: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(raw);
    text.into_owned()
}

pub fn parse(data: &[u8]) -> Result<ParsedPuzzle, ImportError> {
    if data.len() < HEADER_LEN {
        return Err(ImportError::TooShort);
    }
    if !has_signature(data) {
        return Err(ImportError::BadSignature);
    }

    let mut reader = Reader::new(data);
    let header = reader.take(HEADER_LEN, "header")?;
    let width = header[WIDTH_AT] as usize;
    let height = header[HEIGHT_AT] as usize;
    let declared_clues = u16::from_le_bytes([header[CLUE_COUNT_AT], header[CLUE_COUNT_AT + 1]]);

    let solution = reader.take(width * height, "solution grid")?;
    // Player progress is not imported, but the grid must be present.
    reader.take(width * height, "player state grid")?;

    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = solution[y * width + x];
            let is_block = byte == BLOCK;
            cells.push(ParsedCell {
                x,
                y,
                letter: if is_block { String::new() } else { decode(&[byte]) },
                is_block,
            });
        }
    }

    let title = reader.string();
    let author = reader.string();
    let _copyright = reader.string();

    let starts = run_starts(width, height, |c| {
        if solution[c.index(width)] == BLOCK {
            Slot::Block
        } else {
            Slot::Open
        }
    });

    let mut clues = Vec::with_capacity(declared_clues as usize);
    for start in &starts {
        for dir in Direction::ALL {
            if start.starts(dir) {
                clues.push(ParsedClue {
                    number: start.number,
                    direction: dir,
                    text: reader.string(),
                });
            }
        }
    }

    if clues.len() != declared_clues as usize {
        debug!(
            "puz header declares {} clues but the grid has {} entries",
            declared_clues,
            clues.len()
        );
    }

    Ok(ParsedPuzzle { title, author, width, height, cells, clues })
}
