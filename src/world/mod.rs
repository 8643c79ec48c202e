//! World module
//!
//! Contains noise, biome and terrain synthesis, the tile grid, structure
//! placement and world assembly.

pub mod biome;
pub mod generation;
pub mod grid;
pub mod noise;
pub mod position;
pub mod snapshot;
pub mod terrain;
pub mod tile;

pub use biome::{BiomeClassifier, BiomeLabel};
pub use generation::{Building, StructurePlacer, WorldAssembler};
pub use grid::TerrainGrid;
pub use noise::{NoiseChannel, NoiseField, NoiseSampler};
pub use position::Position;
pub use snapshot::{CataclysmCircle, Phase, SnapshotError, WorldSnapshot};
pub use terrain::TerrainSynthesizer;
pub use tile::{TerrainTile, TerrainType, IMPASSABLE};
