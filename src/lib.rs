//! Worldforge - procedural tile worlds
//!
//! Layered noise drives biome and terrain synthesis; buildings and hidden
//! loot are scattered over the finished grid and packed into a snapshot.

pub mod data;
pub mod entities;
pub mod game;
pub mod items;
pub mod world;

// Re-export commonly used types
pub use data::WorldSettings;
pub use game::WorldState;
pub use world::{TerrainGrid, WorldAssembler, WorldSnapshot};
