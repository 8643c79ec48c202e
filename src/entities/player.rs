//! Player records

use serde::{Deserialize, Serialize};

use super::stats::Stats;
use crate::items::Item;
use crate::world::Position;

/// Playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerClass {
    Knight,
}

impl PlayerClass {
    /// Base stats for a fresh character of this class
    pub fn base_stats(&self) -> Stats {
        match self {
            PlayerClass::Knight => Stats::new(100, 120, 15, 20, 8),
        }
    }
}

/// A player as carried in a world snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub display_name: String,
    /// Emoji shown on the map
    pub avatar: String,
    pub position: Position,
    pub class: PlayerClass,
    pub stats: Stats,
    pub level: u32,
    pub experience: u32,
    pub inventory: Vec<Item>,
    pub is_alive: bool,
    pub spawn_time: u64,
}

impl Player {
    pub fn new(id: &str, display_name: &str, class: PlayerClass, position: Position, now_ms: u64) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            avatar: "🤠".to_string(),
            position,
            class,
            stats: class.base_stats(),
            level: 1,
            experience: 0,
            inventory: Vec::new(),
            is_alive: true,
            spawn_time: now_ms,
        }
    }
}

/// The knight every fresh world starts with
pub fn starting_player(position: Position, now_ms: u64) -> Player {
    Player::new("player1", "Test User", PlayerClass::Knight, position, now_ms)
}
