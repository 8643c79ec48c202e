//! Grid coordinates

use serde::{Deserialize, Serialize};

/// Position on the tile grid. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, used for circular zones
    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp into `[0,width) x [0,height)`
    pub fn clamped(self, width: i32, height: i32) -> Self {
        Self {
            x: self.x.clamp(0, (width - 1).max(0)),
            y: self.y.clamp(0, (height - 1).max(0)),
        }
    }
}
