//! Clues and the keys that identify them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::{Direction, ParseKeyError};

/// Identity of a clue within a puzzle: `(number, direction)`.
///
/// Displays as `"12-across"`. Orders by number, then across before down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClueKey {
    pub number: u32,
    pub direction: Direction,
}

impl ClueKey {
    #[inline]
    pub const fn new(number: u32, direction: Direction) -> Self {
        Self { number, direction }
    }
}

impl fmt::Display for ClueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.number, self.direction)
    }
}

impl FromStr for ClueKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, direction) = s.split_once('-').ok_or_else(|| ParseKeyError::new("clue key", s))?;
        let number = number.trim().parse().map_err(|_| ParseKeyError::new("clue key", s))?;
        let direction = direction.parse().map_err(|_| ParseKeyError::new("clue key", s))?;
        Ok(ClueKey { number, direction })
    }
}

/// A clue as shown to users: persisted `text` plus the `answer` spelled out
/// from the current grid. Orphaned clues keep their text with an empty answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    pub direction: Direction,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub answer: String,
}

impl Clue {
    #[inline]
    pub fn key(&self) -> ClueKey {
        ClueKey::new(self.number, self.direction)
    }

    /// True when the clue no longer matches any run in the grid.
    pub fn is_orphan(&self) -> bool {
        self.answer.is_empty()
    }
}

/// A clue text row as returned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredClue {
    pub number: u32,
    pub direction: Direction,
    pub text: String,
}

impl StoredClue {
    pub fn new(number: u32, direction: Direction, text: impl Into<String>) -> Self {
        Self { number, direction, text: text.into() }
    }

    #[inline]
    pub fn key(&self) -> ClueKey {
        ClueKey::new(self.number, self.direction)
    }
}
