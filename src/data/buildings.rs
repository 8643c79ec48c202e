//! Building catalog
//!
//! Static definitions for every structure the placer can put on the map:
//! footprint, spawn odds, the terrain it favours, and the loot it may hold.

use serde::{Deserialize, Serialize};

use super::loot_tables::RarityWeights;
use crate::items::ItemType;
use crate::items::ItemType::{Armor as A, Consumable as C, Utility as U, Weapon as W};
use crate::world::TerrainType;
use crate::world::TerrainType as T;

/// Kinds of building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    House,
    Castle,
    Tower,
    Shop,
    Tavern,
    Temple,
    Farm,
    Mill,
    Bridge,
    Wall,
    Gate,
    Ruins,
    Shrine,
    Watchtower,
    Stables,
    Blacksmith,
    Library,
    Laboratory,
}

/// Static description of one building type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingSpec {
    pub building_type: BuildingType,
    pub emoji: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    pub spawn_chance: f64,
    pub terrain_preference: &'static [TerrainType],
    pub is_accessible: bool,

    // Loot kept inside the footprint
    pub loot_spawn_chance: f64,
    pub max_loot_items: u32,
    pub loot_rarity: RarityWeights,
    pub loot_types: &'static [ItemType],
    /// Completes "A {rarity} {type} ..." in item descriptions
    pub loot_clause: &'static str,
}

impl BuildingSpec {
    pub fn prefers(&self, terrain: TerrainType) -> bool {
        self.terrain_preference.contains(&terrain)
    }
}

/// Look up the catalog entry for a building type
pub fn building_spec(building_type: BuildingType) -> Option<&'static BuildingSpec> {
    let spec = BUILDING_CATALOG.iter().find(|s| s.building_type == building_type);
    if spec.is_none() {
        log::debug!("no catalog entry for {:?}", building_type);
    }
    spec
}

const fn rw(common: f64, uncommon: f64, rare: f64, epic: f64, legendary: f64) -> RarityWeights {
    RarityWeights::new(common, uncommon, rare, epic, legendary)
}

pub static BUILDING_CATALOG: &[BuildingSpec] = &[
    BuildingSpec {
        building_type: BuildingType::House,
        emoji: "🏠",
        name: "Cozy House",
        description: "A simple dwelling for villagers",
        width: 1,
        height: 1,
        spawn_chance: 0.15,
        terrain_preference: &[T::Plain, T::Grassland, T::Forest],
        is_accessible: true,
        loot_spawn_chance: 0.3,
        max_loot_items: 2,
        loot_rarity: rw(60.0, 30.0, 10.0, 0.0, 0.0),
        loot_types: &[C, U],
        loot_clause: "tucked away in a cozy house",
    },
    BuildingSpec {
        building_type: BuildingType::Castle,
        emoji: "🏰",
        name: "Grand Castle",
        description: "A fortified stronghold",
        width: 3,
        height: 3,
        spawn_chance: 0.02,
        terrain_preference: &[T::Hills, T::Mountain],
        is_accessible: true,
        loot_spawn_chance: 0.8,
        max_loot_items: 4,
        loot_rarity: rw(20.0, 35.0, 30.0, 12.0, 3.0),
        loot_types: &[W, A],
        loot_clause: "kept in a castle armory",
    },
    BuildingSpec {
        building_type: BuildingType::Tower,
        emoji: "🏗️",
        name: "Watch Tower",
        description: "A tall observation tower",
        width: 1,
        height: 2,
        spawn_chance: 0.05,
        terrain_preference: &[T::Hills, T::Mountain, T::Plain],
        is_accessible: true,
        loot_spawn_chance: 0.4,
        max_loot_items: 2,
        loot_rarity: rw(50.0, 35.0, 15.0, 0.0, 0.0),
        loot_types: &[W, U],
        loot_clause: "stashed at the top of a tower",
    },
    BuildingSpec {
        building_type: BuildingType::Shop,
        emoji: "🏪",
        name: "General Store",
        description: "A place to buy and sell goods",
        width: 2,
        height: 1,
        spawn_chance: 0.08,
        terrain_preference: &[T::Plain, T::Grassland],
        is_accessible: true,
        loot_spawn_chance: 0.6,
        max_loot_items: 3,
        loot_rarity: rw(50.0, 35.0, 15.0, 0.0, 0.0),
        loot_types: &[W, A, C, U],
        loot_clause: "left behind on a shop counter",
    },
    BuildingSpec {
        building_type: BuildingType::Tavern,
        emoji: "🏨",
        name: "Rusty Tavern",
        description: "A place for rest and rumors",
        width: 2,
        height: 2,
        spawn_chance: 0.06,
        terrain_preference: &[T::Plain, T::Grassland, T::Forest],
        is_accessible: true,
        loot_spawn_chance: 0.5,
        max_loot_items: 2,
        loot_rarity: rw(60.0, 30.0, 10.0, 0.0, 0.0),
        loot_types: &[C],
        loot_clause: "forgotten under a tavern table",
    },
    BuildingSpec {
        building_type: BuildingType::Temple,
        emoji: "⛩️",
        name: "Ancient Temple",
        description: "A sacred place of worship",
        width: 2,
        height: 2,
        spawn_chance: 0.04,
        terrain_preference: &[T::Mountain, T::Hills, T::Forest],
        is_accessible: true,
        loot_spawn_chance: 0.6,
        max_loot_items: 3,
        loot_rarity: rw(30.0, 35.0, 25.0, 8.0, 2.0),
        loot_types: &[A, C],
        loot_clause: "offered at a temple altar",
    },
    BuildingSpec {
        building_type: BuildingType::Farm,
        emoji: "🚜",
        name: "Working Farm",
        description: "Fields of crops and livestock",
        width: 3,
        height: 2,
        spawn_chance: 0.12,
        terrain_preference: &[T::Grassland, T::Plain, T::RollingHills],
        is_accessible: true,
        loot_spawn_chance: 0.3,
        max_loot_items: 2,
        loot_rarity: rw(75.0, 20.0, 5.0, 0.0, 0.0),
        loot_types: &[C, U],
        loot_clause: "dug up in the farm fields",
    },
    BuildingSpec {
        building_type: BuildingType::Mill,
        emoji: "🏭",
        name: "Water Mill",
        description: "Powered by flowing water",
        width: 2,
        height: 2,
        spawn_chance: 0.03,
        terrain_preference: &[T::River, T::Plain],
        is_accessible: true,
        loot_spawn_chance: 0.3,
        max_loot_items: 1,
        loot_rarity: rw(70.0, 25.0, 5.0, 0.0, 0.0),
        loot_types: &[U, C],
        loot_clause: "caught in the mill wheel",
    },
    BuildingSpec {
        building_type: BuildingType::Bridge,
        emoji: "🌉",
        name: "Stone Bridge",
        description: "Spans rivers and ravines",
        width: 3,
        height: 1,
        spawn_chance: 0.07,
        terrain_preference: &[T::River, T::Plain],
        is_accessible: true,
        loot_spawn_chance: 0.2,
        max_loot_items: 1,
        loot_rarity: rw(70.0, 25.0, 5.0, 0.0, 0.0),
        loot_types: &[W, U],
        loot_clause: "wedged beneath a stone bridge",
    },
    BuildingSpec {
        building_type: BuildingType::Wall,
        emoji: "🏛️",
        name: "City Wall",
        description: "Protective fortifications",
        width: 5,
        height: 1,
        spawn_chance: 0.02,
        terrain_preference: &[T::Plain, T::Hills],
        is_accessible: false,
        loot_spawn_chance: 0.1,
        max_loot_items: 1,
        loot_rarity: rw(70.0, 25.0, 5.0, 0.0, 0.0),
        loot_types: &[W, A],
        loot_clause: "lodged in a crack of the city wall",
    },
    BuildingSpec {
        building_type: BuildingType::Gate,
        emoji: "🚪",
        name: "City Gate",
        description: "Entrance to settlements",
        width: 1,
        height: 2,
        spawn_chance: 0.03,
        terrain_preference: &[T::Plain, T::Hills],
        is_accessible: true,
        loot_spawn_chance: 0.2,
        max_loot_items: 1,
        loot_rarity: rw(60.0, 30.0, 10.0, 0.0, 0.0),
        loot_types: &[W, A],
        loot_clause: "dropped by a gate guard",
    },
    BuildingSpec {
        building_type: BuildingType::Ruins,
        emoji: "🏛️",
        name: "Ancient Ruins",
        description: "Remnants of a lost civilization",
        width: 2,
        height: 2,
        spawn_chance: 0.08,
        terrain_preference: &[T::AncientRuins, T::Forest, T::Mountain],
        is_accessible: true,
        loot_spawn_chance: 0.7,
        max_loot_items: 3,
        loot_rarity: rw(25.0, 35.0, 28.0, 10.0, 2.0),
        loot_types: &[W, A, U],
        loot_clause: "unearthed in crumbling ruins",
    },
    BuildingSpec {
        building_type: BuildingType::Shrine,
        emoji: "⛩️",
        name: "Forest Shrine",
        description: "A small place of contemplation",
        width: 1,
        height: 1,
        spawn_chance: 0.10,
        terrain_preference: &[T::Forest, T::DenseForest, T::Mountain],
        is_accessible: true,
        loot_spawn_chance: 0.4,
        max_loot_items: 1,
        loot_rarity: rw(40.0, 35.0, 20.0, 5.0, 0.0),
        loot_types: &[C],
        loot_clause: "left as an offering at a shrine",
    },
    BuildingSpec {
        building_type: BuildingType::Watchtower,
        emoji: "🗼",
        name: "Watch Tower",
        description: "Scans the horizon for threats",
        width: 1,
        height: 2,
        spawn_chance: 0.04,
        terrain_preference: &[T::Hills, T::Mountain, T::Plain],
        is_accessible: true,
        loot_spawn_chance: 0.4,
        max_loot_items: 2,
        loot_rarity: rw(50.0, 35.0, 15.0, 0.0, 0.0),
        loot_types: &[W, A],
        loot_clause: "hidden in a watchtower loft",
    },
    BuildingSpec {
        building_type: BuildingType::Stables,
        emoji: "🏇",
        name: "Horse Stables",
        description: "Home for noble steeds",
        width: 2,
        height: 2,
        spawn_chance: 0.05,
        terrain_preference: &[T::Grassland, T::Plain],
        is_accessible: true,
        loot_spawn_chance: 0.3,
        max_loot_items: 2,
        loot_rarity: rw(70.0, 25.0, 5.0, 0.0, 0.0),
        loot_types: &[A, U],
        loot_clause: "buried in the stable hay",
    },
    BuildingSpec {
        building_type: BuildingType::Blacksmith,
        emoji: "⚒️",
        name: "Blacksmith Forge",
        description: "Where weapons and armor are crafted",
        width: 2,
        height: 1,
        spawn_chance: 0.06,
        terrain_preference: &[T::Plain, T::Grassland],
        is_accessible: true,
        loot_spawn_chance: 0.7,
        max_loot_items: 3,
        loot_rarity: rw(40.0, 35.0, 20.0, 5.0, 0.0),
        loot_types: &[W, A],
        loot_clause: "cooling beside a blacksmith's anvil",
    },
    BuildingSpec {
        building_type: BuildingType::Library,
        emoji: "📚",
        name: "Ancient Library",
        description: "Repository of knowledge and magic",
        width: 2,
        height: 2,
        spawn_chance: 0.03,
        terrain_preference: &[T::AncientRuins, T::Forest],
        is_accessible: true,
        loot_spawn_chance: 0.6,
        max_loot_items: 2,
        loot_rarity: rw(30.0, 35.0, 25.0, 8.0, 2.0),
        loot_types: &[U, C],
        loot_clause: "found between dusty library shelves",
    },
    BuildingSpec {
        building_type: BuildingType::Laboratory,
        emoji: "⚗️",
        name: "Alchemist Lab",
        description: "Where potions and experiments happen",
        width: 2,
        height: 1,
        spawn_chance: 0.04,
        terrain_preference: &[T::Mountain, T::Forest, T::AncientRuins],
        is_accessible: true,
        loot_spawn_chance: 0.6,
        max_loot_items: 3,
        loot_rarity: rw(35.0, 35.0, 22.0, 7.0, 1.0),
        loot_types: &[C],
        loot_clause: "brewed in an alchemist's lab",
    },
];
