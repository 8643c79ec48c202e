//! Tile definitions
//!
//! Terrain types and the immutable per-coordinate terrain record.

use serde::{Deserialize, Serialize};

use super::biome::BiomeLabel;
use super::position::Position;

/// Movement cost meaning "cannot be entered"
pub const IMPASSABLE: f64 = 999.0;

/// Types of terrain a tile can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    // Water
    Water,
    Ocean,
    River,
    DeepWater,

    // Highlands
    MountainPeak,
    Mountain,
    Hills,

    // Cold
    Snow,
    Ice,
    SnowyHills,

    // Arid
    Dunes,
    Oasis,
    Sand,

    // Tropical & wetland
    DenseJungle,
    Jungle,
    Marsh,
    Swamp,

    // Woodland
    DenseForest,
    Forest,
    Clearing,

    // Open land
    RollingHills,
    FlowerField,
    Grassland,
    RoughTerrain,
    AncientRuins,
    Plain,
}

impl TerrainType {
    pub const ALL: [TerrainType; 26] = [
        TerrainType::Water,
        TerrainType::Ocean,
        TerrainType::River,
        TerrainType::DeepWater,
        TerrainType::MountainPeak,
        TerrainType::Mountain,
        TerrainType::Hills,
        TerrainType::Snow,
        TerrainType::Ice,
        TerrainType::SnowyHills,
        TerrainType::Dunes,
        TerrainType::Oasis,
        TerrainType::Sand,
        TerrainType::DenseJungle,
        TerrainType::Jungle,
        TerrainType::Marsh,
        TerrainType::Swamp,
        TerrainType::DenseForest,
        TerrainType::Forest,
        TerrainType::Clearing,
        TerrainType::RollingHills,
        TerrainType::FlowerField,
        TerrainType::Grassland,
        TerrainType::RoughTerrain,
        TerrainType::AncientRuins,
        TerrainType::Plain,
    ];

    /// Snake-case tag, identical to the serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            TerrainType::Water => "water",
            TerrainType::Ocean => "ocean",
            TerrainType::River => "river",
            TerrainType::DeepWater => "deep_water",
            TerrainType::MountainPeak => "mountain_peak",
            TerrainType::Mountain => "mountain",
            TerrainType::Hills => "hills",
            TerrainType::Snow => "snow",
            TerrainType::Ice => "ice",
            TerrainType::SnowyHills => "snowy_hills",
            TerrainType::Dunes => "dunes",
            TerrainType::Oasis => "oasis",
            TerrainType::Sand => "sand",
            TerrainType::DenseJungle => "dense_jungle",
            TerrainType::Jungle => "jungle",
            TerrainType::Marsh => "marsh",
            TerrainType::Swamp => "swamp",
            TerrainType::DenseForest => "dense_forest",
            TerrainType::Forest => "forest",
            TerrainType::Clearing => "clearing",
            TerrainType::RollingHills => "rolling_hills",
            TerrainType::FlowerField => "flower_field",
            TerrainType::Grassland => "grassland",
            TerrainType::RoughTerrain => "rough_terrain",
            TerrainType::AncientRuins => "ancient_ruins",
            TerrainType::Plain => "plain",
        }
    }

    /// ASCII glyph for text previews
    pub fn glyph(&self) -> char {
        match self {
            TerrainType::Water | TerrainType::Ocean => '~',
            TerrainType::DeepWater => '≈',
            TerrainType::River => '=',
            TerrainType::MountainPeak => '^',
            TerrainType::Mountain => 'M',
            TerrainType::Hills => 'n',
            TerrainType::Snow => '*',
            TerrainType::Ice => '#',
            TerrainType::SnowyHills => 'N',
            TerrainType::Dunes => 'd',
            TerrainType::Oasis => 'o',
            TerrainType::Sand => ':',
            TerrainType::DenseJungle => 'J',
            TerrainType::Jungle => 'j',
            TerrainType::Marsh => ';',
            TerrainType::Swamp => ',',
            TerrainType::DenseForest => 'T',
            TerrainType::Forest => 't',
            TerrainType::Clearing => '_',
            TerrainType::RollingHills => 'h',
            TerrainType::FlowerField => '%',
            TerrainType::Grassland => '"',
            TerrainType::RoughTerrain => '&',
            TerrainType::AncientRuins => 'R',
            TerrainType::Plain => '.',
        }
    }
}

/// Gameplay numbers attached to a terrain type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainTraits {
    pub movement_cost: f64,
    pub defense_bonus: f64,
    pub visibility_modifier: f64,
    pub resources: &'static [&'static str],
    pub special_features: &'static [&'static str],
}

impl TerrainType {
    /// Base traits before any overlay is applied
    pub fn traits(&self) -> TerrainTraits {
        use TerrainTraits as T;
        match self {
            TerrainType::Water | TerrainType::Ocean => T::new(IMPASSABLE, 0.0, 0.9, &[], &[]),
            TerrainType::DeepWater => T::new(IMPASSABLE, 0.0, 0.8, &[], &[]),
            TerrainType::River => T::new(2.0, 0.0, 0.9, &["water", "fish"], &["water_source"]),
            TerrainType::MountainPeak => T::new(4.0, 3.0, 1.2, &["ore", "gems"], &[]),
            TerrainType::Mountain => T::new(3.0, 2.0, 1.1, &["stone"], &[]),
            TerrainType::Hills => T::new(1.5, 1.0, 1.0, &["stone"], &[]),
            TerrainType::Ice => T::new(2.0, 0.0, 0.9, &[], &[]),
            TerrainType::SnowyHills => T::new(1.8, 1.0, 1.0, &[], &[]),
            TerrainType::Snow => T::new(1.2, 0.0, 1.0, &["fur"], &[]),
            TerrainType::Dunes => T::new(2.0, 0.0, 0.8, &["sand"], &[]),
            TerrainType::Oasis => T::new(0.8, 0.0, 1.0, &["water"], &["healing"]),
            TerrainType::Sand => T::new(1.3, 0.0, 1.0, &["sand"], &[]),
            TerrainType::DenseJungle => T::new(2.5, 2.0, 0.5, &["exotic_wood", "rare_herbs"], &[]),
            TerrainType::Jungle => T::new(1.8, 1.0, 0.7, &["wood", "herbs"], &[]),
            TerrainType::Marsh => T::new(2.0, 1.0, 0.8, &["reeds"], &[]),
            TerrainType::Swamp => T::new(1.5, 0.0, 1.0, &["reeds", "herbs"], &[]),
            TerrainType::DenseForest => T::new(2.0, 2.0, 0.6, &["wood", "mushrooms"], &[]),
            TerrainType::Clearing => T::new(0.9, 0.0, 1.1, &[], &["camp"]),
            TerrainType::Forest => T::new(1.5, 1.0, 0.8, &["wood"], &[]),
            TerrainType::RollingHills => T::new(1.3, 1.0, 1.0, &["grass"], &[]),
            TerrainType::FlowerField => T::new(1.0, 0.0, 1.0, &["flowers", "herbs"], &["beautiful"]),
            TerrainType::Grassland => T::new(1.0, 0.0, 1.0, &["grass", "herbs"], &[]),
            TerrainType::RoughTerrain => T::new(1.2, 0.0, 1.0, &["stones"], &[]),
            TerrainType::AncientRuins => T::new(1.1, 0.0, 1.0, &["ancient_artifacts"], &["mysterious"]),
            TerrainType::Plain => T::new(1.0, 0.0, 1.0, &["grass"], &[]),
        }
    }
}

impl TerrainTraits {
    const fn new(
        movement_cost: f64,
        defense_bonus: f64,
        visibility_modifier: f64,
        resources: &'static [&'static str],
        special_features: &'static [&'static str],
    ) -> Self {
        Self {
            movement_cost,
            defense_bonus,
            visibility_modifier,
            resources,
            special_features,
        }
    }
}

/// One generated terrain tile. Never mutated once the grid is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainTile {
    #[serde(rename = "type")]
    pub terrain_type: TerrainType,
    pub position: Position,
    pub biome: BiomeLabel,
    pub elevation: f64,
    pub roughness: f64,
    pub moisture: f64,
    pub movement_cost: f64,
    pub defense_bonus: f64,
    pub visibility_modifier: f64,
    pub resources: Vec<String>,
    pub special_features: Vec<String>,
    pub fertility: f64,
    pub strategic_value: f64,
    pub exploration_bonus: f64,
}

impl TerrainTile {
    pub fn is_passable(&self) -> bool {
        self.movement_cost < IMPASSABLE
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.special_features.iter().any(|f| f == feature)
    }

    pub fn glyph(&self) -> char {
        if self.has_feature("road") {
            '+'
        } else {
            self.terrain_type.glyph()
        }
    }
}

/// Accumulates tile fields while the synthesizer walks its decision tree
/// and overlays, then freezes them into a `TerrainTile`.
#[derive(Debug, Clone)]
pub(crate) struct TileDraft {
    pub terrain_type: TerrainType,
    pub movement_cost: f64,
    pub defense_bonus: f64,
    pub visibility_modifier: f64,
    pub resources: Vec<String>,
    pub special_features: Vec<String>,
}

impl TileDraft {
    pub fn from_type(terrain_type: TerrainType) -> Self {
        let traits = terrain_type.traits();
        Self {
            terrain_type,
            movement_cost: traits.movement_cost,
            defense_bonus: traits.defense_bonus,
            visibility_modifier: traits.visibility_modifier,
            resources: traits.resources.iter().map(|s| (*s).to_string()).collect(),
            special_features: traits.special_features.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn finish(
        self,
        position: Position,
        biome: BiomeLabel,
        elevation: f64,
        roughness: f64,
        moisture: f64,
    ) -> TerrainTile {
        let fertility = moisture * (1.0 - roughness);
        let strategic_value = self.defense_bonus + self.resources.len() as f64 * 0.5;
        let exploration_bonus = self.special_features.len() as f64 * 0.2;

        TerrainTile {
            terrain_type: self.terrain_type,
            position,
            biome,
            elevation,
            roughness,
            moisture,
            movement_cost: self.movement_cost,
            defense_bonus: self.defense_bonus,
            visibility_modifier: self.visibility_modifier,
            resources: self.resources,
            special_features: self.special_features,
            fertility,
            strategic_value,
            exploration_bonus,
        }
    }
}
