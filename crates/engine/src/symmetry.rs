//! Block symmetry mirroring.
//!
//! When a constructor toggles a block, the same toggle is applied at the
//! mirrored coordinates so the grid keeps its symmetry.

use std::fmt;

use xword_core::Coord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SymmetryMode {
    /// Only the toggled cell changes.
    #[default]
    None,
    /// Mirror across the vertical axis: `x -> width-1-x`.
    Horizontal,
    /// Mirror across the horizontal axis: `y -> height-1-y`.
    Vertical,
    /// 180° rotation about the center.
    Rotational,
    /// Horizontal, vertical and rotational images together.
    Both,
}

impl SymmetryMode {
    /// Parse a mode name as sent by clients. Unknown or empty names mean no
    /// symmetry.
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "horizontal" => SymmetryMode::Horizontal,
            "vertical" => SymmetryMode::Vertical,
            "rotational" => SymmetryMode::Rotational,
            "both" => SymmetryMode::Both,
            _ => SymmetryMode::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymmetryMode::None => "none",
            SymmetryMode::Horizontal => "horizontal",
            SymmetryMode::Vertical => "vertical",
            SymmetryMode::Rotational => "rotational",
            SymmetryMode::Both => "both",
        }
    }
}

impl From<&str> for SymmetryMode {
    fn from(name: &str) -> Self {
        SymmetryMode::parse_lenient(name)
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The toggled point followed by its mirror images under `mode`, without
/// duplicates. A point outside the grid is returned alone.
pub fn symmetric_cells(x: usize, y: usize, width: usize, height: usize, mode: SymmetryMode) -> Vec<Coord> {
    let origin = Coord::new(x, y);
    if !origin.in_bounds(width, height) {
        return vec![origin];
    }

    let mx = width - 1 - x;
    let my = height - 1 - y;
    let images = match mode {
        SymmetryMode::None => vec![],
        SymmetryMode::Horizontal => vec![Coord::new(mx, y)],
        SymmetryMode::Vertical => vec![Coord::new(x, my)],
        SymmetryMode::Rotational => vec![Coord::new(mx, my)],
        SymmetryMode::Both => vec![Coord::new(mx, y), Coord::new(x, my), Coord::new(mx, my)],
    };

    let mut points = Vec::with_capacity(4);
    points.push(origin);
    for image in images {
        if !points.contains(&image) {
            points.push(image);
        }
    }
    points
}
