use serde::{Deserialize, Serialize};

/// Bounds on puzzle dimensions, applied on create, resize and import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLimits {
    pub min_dimension: usize,
    pub max_dimension: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            min_dimension: 5,
            max_dimension: 23,
        }
    }
}

impl GridLimits {
    pub fn allows(&self, width: usize, height: usize) -> bool {
        let range = self.min_dimension..=self.max_dimension;
        range.contains(&width) && range.contains(&height)
    }
}
