//! Non-player characters

use serde::{Deserialize, Serialize};

use super::stats::Stats;
use crate::world::Position;

/// How an NPC moves when no player is engaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcBehavior {
    Wandering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcType {
    Goblin,
}

impl NpcType {
    pub fn name(&self) -> &'static str {
        match self {
            NpcType::Goblin => "Goblin Scout",
        }
    }

    pub fn stats(&self) -> Stats {
        match self {
            NpcType::Goblin => Stats::new(60, 60, 10, 6, 14),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            NpcType::Goblin => 'g',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub npc_type: NpcType,
    pub position: Position,
    pub stats: Stats,
    pub behavior: NpcBehavior,
    pub is_alive: bool,
}

impl Npc {
    pub fn new(id: &str, npc_type: NpcType, behavior: NpcBehavior, position: Position) -> Self {
        Self {
            id: id.to_string(),
            name: npc_type.name().to_string(),
            npc_type,
            position,
            stats: npc_type.stats(),
            behavior,
            is_alive: true,
        }
    }
}

/// The wandering goblin every fresh world starts with
pub fn starting_npc(position: Position) -> Npc {
    Npc::new("goblin1", NpcType::Goblin, NpcBehavior::Wandering, position)
}

/// Get NPC at position
pub fn get_npc_at(npcs: &[Npc], pos: Position) -> Option<&Npc> {
    npcs.iter().find(|n| n.is_alive && n.position == pos)
}
