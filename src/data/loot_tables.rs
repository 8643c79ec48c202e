//! Loot tables
//!
//! Per-terrain ground loot configuration and the word lists used to name and
//! describe generated items.

use crate::items::{ItemType, Rarity};
use crate::world::TerrainType;

/// Relative weights of each rarity bucket. A zero weight removes the bucket
/// from the draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityWeights {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl RarityWeights {
    pub const fn new(common: f64, uncommon: f64, rare: f64, epic: f64, legendary: f64) -> Self {
        Self { common, uncommon, rare, epic, legendary }
    }

    pub fn get(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    pub fn total(&self) -> f64 {
        Rarity::ALL.iter().map(|r| self.get(*r)).sum()
    }

    /// Scale every bucket except common
    pub fn boost_non_common(&self, factor: f64) -> Self {
        Self {
            common: self.common,
            uncommon: self.uncommon * factor,
            rare: self.rare * factor,
            epic: self.epic * factor,
            legendary: self.legendary * factor,
        }
    }
}

/// Ground loot settings for one terrain type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainLootConfig {
    pub terrain: TerrainType,
    pub spawn_chance: f64,
    pub preferred_types: &'static [ItemType],
    pub rarity_weights: RarityWeights,
    pub max_items_per_tile: u32,
    pub density_multiplier: f64,
}

const W: ItemType = ItemType::Weapon;
const A: ItemType = ItemType::Armor;
const C: ItemType = ItemType::Consumable;

const fn loot(
    terrain: TerrainType,
    spawn_chance: f64,
    preferred_types: &'static [ItemType],
    rarity_weights: RarityWeights,
    max_items_per_tile: u32,
    density_multiplier: f64,
) -> TerrainLootConfig {
    TerrainLootConfig {
        terrain,
        spawn_chance,
        preferred_types,
        rarity_weights,
        max_items_per_tile,
        density_multiplier,
    }
}

const fn w(common: f64, uncommon: f64, rare: f64, epic: f64, legendary: f64) -> RarityWeights {
    RarityWeights::new(common, uncommon, rare, epic, legendary)
}

pub static TERRAIN_LOOT: &[TerrainLootConfig] = &[
    // Treasure terrain
    loot(TerrainType::AncientRuins, 0.35, &[W, A, C], w(20.0, 30.0, 35.0, 12.0, 3.0), 3, 2.5),
    loot(TerrainType::Oasis, 0.45, &[C, A], w(40.0, 40.0, 15.0, 5.0, 0.0), 3, 2.0),
    loot(TerrainType::MountainPeak, 0.25, &[W, A], w(30.0, 40.0, 25.0, 5.0, 0.0), 3, 1.8),
    loot(TerrainType::DenseJungle, 0.25, &[C, A], w(45.0, 35.0, 18.0, 2.0, 0.0), 3, 1.6),
    // Wild land
    loot(TerrainType::Forest, 0.12, &[C, W], w(65.0, 25.0, 10.0, 0.0, 0.0), 2, 1.0),
    loot(TerrainType::DenseForest, 0.18, &[C, A], w(55.0, 30.0, 15.0, 0.0, 0.0), 2, 1.3),
    loot(TerrainType::Clearing, 0.15, &[C, W], w(55.0, 35.0, 10.0, 0.0, 0.0), 2, 1.2),
    loot(TerrainType::Mountain, 0.15, &[W, A], w(50.0, 35.0, 15.0, 0.0, 0.0), 2, 1.2),
    loot(TerrainType::Jungle, 0.20, &[C, W], w(50.0, 35.0, 15.0, 0.0, 0.0), 2, 1.4),
    loot(TerrainType::SnowyHills, 0.12, &[W, A], w(55.0, 35.0, 10.0, 0.0, 0.0), 2, 1.1),
    loot(TerrainType::Marsh, 0.10, &[C, A], w(60.0, 30.0, 10.0, 0.0, 0.0), 2, 1.0),
    loot(TerrainType::RoughTerrain, 0.12, &[W, A], w(60.0, 30.0, 10.0, 0.0, 0.0), 2, 1.1),
    // Sparse terrain
    loot(TerrainType::Swamp, 0.08, &[C], w(70.0, 20.0, 10.0, 0.0, 0.0), 1, 0.8),
    loot(TerrainType::Sand, 0.06, &[C, A], w(75.0, 20.0, 5.0, 0.0, 0.0), 1, 0.6),
    loot(TerrainType::Dunes, 0.04, &[A, W], w(60.0, 30.0, 10.0, 0.0, 0.0), 1, 0.7),
    loot(TerrainType::Ice, 0.05, &[A, C], w(70.0, 25.0, 5.0, 0.0, 0.0), 1, 0.7),
    loot(TerrainType::Snow, 0.07, &[A, C], w(65.0, 30.0, 5.0, 0.0, 0.0), 1, 0.8),
    loot(TerrainType::Hills, 0.08, &[W, A], w(65.0, 30.0, 5.0, 0.0, 0.0), 1, 0.9),
    loot(TerrainType::RollingHills, 0.06, &[C, A], w(70.0, 25.0, 5.0, 0.0, 0.0), 1, 0.8),
    loot(TerrainType::FlowerField, 0.08, &[C], w(70.0, 25.0, 5.0, 0.0, 0.0), 1, 0.9),
    loot(TerrainType::Plain, 0.05, &[C], w(80.0, 18.0, 2.0, 0.0, 0.0), 1, 0.6),
    loot(TerrainType::Grassland, 0.04, &[C], w(85.0, 14.0, 1.0, 0.0, 0.0), 1, 0.5),
    // Water
    loot(TerrainType::River, 0.10, &[C], w(70.0, 25.0, 5.0, 0.0, 0.0), 1, 0.9),
    loot(TerrainType::Water, 0.03, &[C], w(85.0, 14.0, 1.0, 0.0, 0.0), 1, 0.4),
    loot(TerrainType::DeepWater, 0.03, &[A], w(80.0, 18.0, 2.0, 0.0, 0.0), 1, 0.5),
    loot(TerrainType::Ocean, 0.02, &[A], w(85.0, 13.0, 2.0, 0.0, 0.0), 1, 0.3),
];

/// Look up the ground loot config for a terrain type
pub fn terrain_loot(terrain: TerrainType) -> Option<&'static TerrainLootConfig> {
    let config = TERRAIN_LOOT.iter().find(|c| c.terrain == terrain);
    if config.is_none() {
        log::debug!("no loot table for terrain '{}'", terrain.tag());
    }
    config
}

/// Name adjectives tied to the terrain an item was found on. Empty when the
/// terrain has no flavour words.
pub fn terrain_words(terrain: TerrainType) -> &'static [&'static str] {
    match terrain {
        TerrainType::AncientRuins => &["Ancient", "Ruined", "Lost", "Forgotten"],
        TerrainType::Forest => &["Wooden", "Natural", "Forest", "Wild"],
        TerrainType::Mountain => &["Stone", "Mountain", "Rocky", "Dwarven"],
        TerrainType::Sand => &["Desert", "Sand", "Sun-bleached", "Nomad"],
        TerrainType::Swamp => &["Murky", "Bog", "Swamp", "Poisonous"],
        TerrainType::Ice => &["Frozen", "Ice", "Crystal", "Arctic"],
        _ => &[],
    }
}

pub fn terrain_clause(terrain: TerrainType) -> &'static str {
    match terrain {
        TerrainType::AncientRuins => "discovered among ancient ruins",
        TerrainType::Forest => "found deep in the forest",
        TerrainType::Mountain => "carved from mountain stone",
        TerrainType::Sand => "buried in desert sands",
        TerrainType::Swamp => "recovered from murky swamplands",
        TerrainType::Ice => "preserved in eternal ice",
        _ => "found in the wilderness",
    }
}

/// Extra stat scaling for items found on rich terrain
pub fn terrain_stat_multiplier(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::AncientRuins => 1.3,
        TerrainType::MountainPeak => 1.15,
        TerrainType::Mountain => 1.1,
        _ => 1.0,
    }
}

pub fn rarity_prefixes(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &["Worn", "Simple", "Basic"],
        Rarity::Uncommon => &["Quality", "Fine", "Enhanced"],
        Rarity::Rare => &["Superior", "Excellent", "Masterwork"],
        Rarity::Epic => &["Legendary", "Mythical", "Ancient"],
        Rarity::Legendary => &["Divine", "Immortal", "Godly"],
    }
}

pub fn type_nouns(item_type: ItemType) -> &'static [&'static str] {
    match item_type {
        ItemType::Weapon => &["Blade", "Sword", "Axe", "Staff", "Bow", "Dagger"],
        ItemType::Armor => &["Shield", "Helm", "Armor", "Boots", "Gauntlets"],
        ItemType::Consumable => &["Potion", "Elixir", "Herb", "Essence", "Extract"],
        ItemType::Utility => &["Lantern", "Rope", "Compass", "Map", "Lockpick"],
    }
}
