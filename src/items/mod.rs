//! Item system

pub mod item;
pub mod loot;
pub mod spawner;

pub use item::{Item, ItemStats, ItemType, Rarity, RevealState};
pub use loot::roll_rarity;
pub use spawner::{LootHotspot, LootSpawner, TileOdds};
