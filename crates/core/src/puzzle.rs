use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Puzzle metadata. `width`/`height` bound the valid cell coordinates;
/// changing them is a resize, never a cell edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Puzzle {
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.width, self.height)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
