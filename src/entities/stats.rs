//! Combat stat block shared by players and NPCs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Stats {
    pub const fn new(hp: i32, max_hp: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self { hp, max_hp, attack, defense, speed }
    }
}
