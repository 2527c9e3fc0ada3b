//! Grid coordinates and entry directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a textual key (`"x,y"`, `"12-across"`, `"down"`) is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {input:?}")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseKeyError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self { kind, input: input.to_string() }
    }
}

/// A cell position. `x` is the column, `y` the row, both 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index within a grid of the given width.
    #[inline]
    pub fn index(&self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Whether this coordinate lies inside a `width` x `height` grid.
    #[inline]
    pub fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }

    /// Step one cell along `dir`. Returns `None` when the step would leave
    /// the grid.
    pub fn step(&self, dir: Direction, forward: bool, width: usize, height: usize) -> Option<Coord> {
        let (x, y) = match (dir, forward) {
            (Direction::Across, true) => (self.x.checked_add(1)?, self.y),
            (Direction::Across, false) => (self.x.checked_sub(1)?, self.y),
            (Direction::Down, true) => (self.x, self.y.checked_add(1)?),
            (Direction::Down, false) => (self.x, self.y.checked_sub(1)?),
        };
        let next = Coord::new(x, y);
        next.in_bounds(width, height).then_some(next)
    }

    /// Move `n` cells forward along `dir` without bounds checks.
    #[inline]
    pub fn advance(&self, dir: Direction, n: usize) -> Coord {
        match dir {
            Direction::Across => Coord::new(self.x + n, self.y),
            Direction::Down => Coord::new(self.x, self.y + n),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| ParseKeyError::new("coordinate", s))?;
        let x = x.trim().parse().map_err(|_| ParseKeyError::new("coordinate", s))?;
        let y = y.trim().parse().map_err(|_| ParseKeyError::new("coordinate", s))?;
        Ok(Coord { x, y })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

/// Entry direction. Across sorts before Down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }

    /// The perpendicular direction.
    pub fn other(&self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("across") {
            Ok(Direction::Across)
        } else if trimmed.eq_ignore_ascii_case("down") {
            Ok(Direction::Down)
        } else {
            Err(ParseKeyError::new("direction", s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_display_round_trips_through_from_str() {
        let c = Coord::new(3, 11);
        assert_eq!(c.to_string(), "3,11");
        assert_eq!("3,11".parse::<Coord>().unwrap(), c);
        assert_eq!(" 3 , 11 ".parse::<Coord>().unwrap(), c);
    }

    #[test]
    fn test_coord_rejects_garbage() {
        assert!("3".parse::<Coord>().is_err());
        assert!("a,b".parse::<Coord>().is_err());
        assert!("-1,2".parse::<Coord>().is_err());
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::Across, false, 3, 3), None);
        assert_eq!(origin.step(Direction::Down, false, 3, 3), None);
        assert_eq!(origin.step(Direction::Across, true, 3, 3), Some(Coord::new(1, 0)));
        assert_eq!(Coord::new(2, 2).step(Direction::Down, true, 3, 3), None);
    }

    #[test]
    fn test_direction_ordering_and_parse() {
        assert!(Direction::Across < Direction::Down);
        assert_eq!("Across".parse::<Direction>().unwrap(), Direction::Across);
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Direction::Across.other(), Direction::Down);
    }

    #[test]
    fn test_direction_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }
}
