//! World snapshots
//!
//! The complete output of one assembly pass, and its JSON wire form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::generation::structures::{building_at, Building};
use super::grid::TerrainGrid;
use super::position::Position;
use crate::entities::{Npc, Player};
use crate::items::Item;

/// Delay before the cataclysm circle first shrinks
pub const FIRST_SHRINK_DELAY_MS: u64 = 300_000;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// World lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Exploration,
    Cataclysm,
    Rebirth,
}

/// Shrinking safe zone, inactive until the cataclysm phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CataclysmCircle {
    pub center: Position,
    pub radius: f64,
    pub is_active: bool,
    pub shrink_rate: f64,
    pub next_shrink_time: u64,
}

impl CataclysmCircle {
    /// Dormant circle centered on a `width x height` map
    pub fn dormant(width: i32, height: i32, now_ms: u64) -> Self {
        Self {
            center: Position::new(width / 2, height / 2),
            radius: 40.0,
            is_active: false,
            shrink_rate: 1.0,
            next_shrink_time: now_ms + FIRST_SHRINK_DELAY_MS,
        }
    }
}

/// A fully assembled world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    pub id: String,
    pub grid: TerrainGrid,
    pub buildings: Vec<Building>,
    pub players: Vec<Player>,
    pub npcs: Vec<Npc>,
    pub items: Vec<Item>,
    pub cataclysm_circle: CataclysmCircle,
    pub world_age: u64,
    pub last_reset_time: u64,
    pub phase: Phase,
}

impl WorldSnapshot {
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn building_at(&self, x: i32, y: i32) -> Option<&Building> {
        building_at(&self.buildings, x, y)
    }

    /// Items lying on a tile
    pub fn items_at(&self, pos: Position) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |i| i.position == Some(pos))
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
