//! Terrain synthesis
//!
//! Refines a biome label into a concrete terrain type with a per-biome decision
//! tree, then runs the river and road overlays over every tile. Every decision
//! point has a default branch so any noise combination maps to a valid tile.

use super::biome::{BiomeClassifier, BiomeLabel};
use super::noise::{NoiseChannel, NoiseField, NoiseSampler};
use super::position::Position;
use super::tile::{TerrainTile, TerrainType, TileDraft};

/// Produces one `TerrainTile` per coordinate
#[derive(Debug, Clone)]
pub struct TerrainSynthesizer<N = NoiseField> {
    noise: N,
}

impl TerrainSynthesizer<NoiseField> {
    pub fn new() -> Self {
        Self::with_noise(NoiseField::new())
    }
}

impl Default for TerrainSynthesizer<NoiseField> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSampler> TerrainSynthesizer<N> {
    pub fn with_noise(noise: N) -> Self {
        Self { noise }
    }

    pub fn synthesize(&self, x: i32, y: i32) -> TerrainTile {
        let biome = BiomeClassifier::with_noise(&self.noise).classify(x, y);
        let elevation = self.noise.channel(NoiseChannel::Elevation, x, y);
        let roughness = self.noise.channel(NoiseChannel::Roughness, x, y);
        let moisture = self.noise.channel(NoiseChannel::Moisture, x, y);

        let base = self.base_terrain(biome, x, y, elevation, roughness, moisture);
        let mut draft = TileDraft::from_type(base);

        self.apply_river(&mut draft, x, y);
        self.apply_road(&mut draft, x, y);

        draft.finish(Position::new(x, y), biome, elevation, roughness, moisture)
    }

    /// Per-biome decision tree
    fn base_terrain(
        &self,
        biome: BiomeLabel,
        x: i32,
        y: i32,
        elevation: f64,
        roughness: f64,
        moisture: f64,
    ) -> TerrainType {
        match biome {
            BiomeLabel::Ocean => TerrainType::Water,

            BiomeLabel::MountainRange => {
                if elevation > 0.8 {
                    TerrainType::MountainPeak
                } else if elevation > 0.6 {
                    TerrainType::Mountain
                } else {
                    TerrainType::Hills
                }
            }

            BiomeLabel::Tundra => {
                if roughness > 0.7 {
                    TerrainType::Ice
                } else if elevation > 0.5 {
                    TerrainType::SnowyHills
                } else {
                    TerrainType::Snow
                }
            }

            BiomeLabel::Desert => {
                if roughness > 0.8 {
                    TerrainType::Dunes
                } else if self.noise.channel(NoiseChannel::Oasis, x, y) > 0.85 {
                    TerrainType::Oasis
                } else {
                    TerrainType::Sand
                }
            }

            BiomeLabel::Jungle => {
                if roughness > 0.75 {
                    TerrainType::DenseJungle
                } else {
                    TerrainType::Jungle
                }
            }

            BiomeLabel::Swamp => {
                if moisture > 0.8 {
                    TerrainType::DeepWater
                } else if roughness > 0.6 {
                    TerrainType::Marsh
                } else {
                    TerrainType::Swamp
                }
            }

            BiomeLabel::TemperateForest => {
                if roughness > 0.7 {
                    TerrainType::DenseForest
                } else if self.noise.channel(NoiseChannel::Clearing, x, y) > 0.8 {
                    TerrainType::Clearing
                } else {
                    TerrainType::Forest
                }
            }

            BiomeLabel::Grassland => {
                if roughness > 0.65 {
                    TerrainType::RollingHills
                } else if self.noise.channel(NoiseChannel::FlowerField, x, y) > 0.9 {
                    TerrainType::FlowerField
                } else {
                    TerrainType::Grassland
                }
            }

            BiomeLabel::Plain => {
                if roughness > 0.6 {
                    TerrainType::RoughTerrain
                } else if self.noise.channel(NoiseChannel::Ruins, x, y) > 0.85 {
                    TerrainType::AncientRuins
                } else {
                    TerrainType::Plain
                }
            }
        }
    }

    /// Rivers cut through anything except open water and peaks.
    /// Defense bonus of the underlying terrain is kept.
    fn apply_river(&self, draft: &mut TileDraft, x: i32, y: i32) {
        let river = self.noise.channel(NoiseChannel::River, x, y);
        let branch = self.noise.channel(NoiseChannel::RiverBranch, x, y);

        if !((river > 0.75 && branch > 0.6) || river > 0.85) {
            return;
        }
        if matches!(
            draft.terrain_type,
            TerrainType::Ocean | TerrainType::Water | TerrainType::MountainPeak
        ) {
            return;
        }

        let river_traits = TerrainType::River.traits();
        draft.terrain_type = TerrainType::River;
        draft.movement_cost = river_traits.movement_cost;
        draft.visibility_modifier = river_traits.visibility_modifier;
        draft.resources = river_traits.resources.iter().map(|s| (*s).to_string()).collect();
        draft.special_features = river_traits
            .special_features
            .iter()
            .map(|s| (*s).to_string())
            .collect();
    }

    fn apply_road(&self, draft: &mut TileDraft, x: i32, y: i32) {
        let road = self.noise.channel(NoiseChannel::Road, x, y);
        if road > 0.92 && draft.movement_cost < 3.0 {
            draft.movement_cost = (draft.movement_cost * 0.8).max(0.7);
            draft.special_features.push("road".to_string());
        }
    }
}
