//! Actors carried in a world snapshot

pub mod npcs;
pub mod player;
pub mod stats;

pub use npcs::{get_npc_at, starting_npc, Npc, NpcBehavior, NpcType};
pub use player::{starting_player, Player, PlayerClass};
pub use stats::Stats;
