//! Static world data and settings
//!
//! Building and loot tables are compiled in; world settings can be loaded from
//! an external RON file.

pub mod buildings;
pub mod loader;
pub mod loot_tables;

pub use buildings::{building_spec, BuildingSpec, BuildingType, BUILDING_CATALOG};
pub use loader::{settings_path, SettingsError, WorldSettings};
pub use loot_tables::{terrain_loot, RarityWeights, TerrainLootConfig};
