//! World assembly
//!
//! Runs the generation stages in order (terrain, structures, optional ground
//! loot) and wraps the result with the starting actors into a snapshot.

pub mod structures;

pub use structures::{building_at, is_position_in_building, Building, BuildingSize, StructurePlacer};

use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::grid::TerrainGrid;
use super::noise::{NoiseField, NoiseSampler};
use super::position::Position;
use super::snapshot::{CataclysmCircle, Phase, WorldSnapshot};
use super::terrain::TerrainSynthesizer;
use crate::data::WorldSettings;
use crate::entities::{starting_npc, starting_player};
use crate::items::spawner::{LootSpawner, DEFAULT_HOTSPOT_AREA};
use crate::items::{Item, ItemStats, ItemType, Rarity, RevealState};

/// Where the starting actors are dropped, before clamping to the map
const PLAYER_START: Position = Position { x: 5, y: 5 };
const NPC_START: Position = Position { x: 12, y: 8 };
const SWORD_START: Position = Position { x: 8, y: 6 };

/// Milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Builds complete worlds
#[derive(Debug, Clone)]
pub struct WorldAssembler<N = NoiseField> {
    noise: N,
    ground_loot: bool,
    hotspot_area: i32,
}

impl WorldAssembler<NoiseField> {
    pub fn new() -> Self {
        Self::with_noise(NoiseField::new())
    }

    pub fn with_settings(settings: &WorldSettings) -> Self {
        Self::new()
            .with_ground_loot(settings.ground_loot)
            .with_hotspot_area(settings.hotspot_area)
    }
}

impl Default for WorldAssembler<NoiseField> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSampler> WorldAssembler<N> {
    pub fn with_noise(noise: N) -> Self {
        Self {
            noise,
            ground_loot: false,
            hotspot_area: DEFAULT_HOTSPOT_AREA,
        }
    }

    /// Also run the ground loot pass. Off by default.
    pub fn with_ground_loot(mut self, enabled: bool) -> Self {
        self.ground_loot = enabled;
        self
    }

    pub fn with_hotspot_area(mut self, area: i32) -> Self {
        self.hotspot_area = area;
        self
    }

    /// Assemble a fresh world stamped with the current time
    pub fn assemble(&self, width: i32, height: i32, rng: &mut impl Rng) -> WorldSnapshot {
        self.assemble_at(width, height, now_ms(), rng)
    }

    /// Assemble a fresh world stamped with `now` (ms since the epoch)
    pub fn assemble_at(&self, width: i32, height: i32, now: u64, rng: &mut impl Rng) -> WorldSnapshot {
        let id = format!("world_{:016x}", rng.gen::<u64>());

        let grid = TerrainGrid::generate(&TerrainSynthesizer::with_noise(&self.noise), width, height);
        let (buildings, mut items) =
            StructurePlacer::with_noise(&self.noise).place(&grid, width, height, rng);

        if self.ground_loot {
            let spawner = LootSpawner::with_noise(&self.noise).with_hotspot_area(self.hotspot_area);
            let hotspots = spawner.generate_hotspots(width, height, rng);
            let mut ground = spawner.spawn(&grid, width, height, &hotspots, rng);

            let before = ground.len();
            ground.retain(|item| {
                item.position
                    .map_or(true, |p| !is_position_in_building(&buildings, p.x, p.y))
            });
            log::debug!(
                "dropped {} ground items under buildings, kept {}",
                before - ground.len(),
                ground.len()
            );
            items.extend(ground);
        }

        items.push(starting_sword(SWORD_START.clamped(width, height)));

        let snapshot = WorldSnapshot {
            id,
            grid,
            buildings,
            players: vec![starting_player(PLAYER_START.clamped(width, height), now)],
            npcs: vec![starting_npc(NPC_START.clamped(width, height))],
            items,
            cataclysm_circle: CataclysmCircle::dormant(width, height, now),
            world_age: 0,
            last_reset_time: now,
            phase: Phase::Exploration,
        };

        log::info!(
            "Assembled world {} ({}x{}): {} buildings, {} items",
            snapshot.id,
            width,
            height,
            snapshot.buildings.len(),
            snapshot.items.len()
        );
        snapshot
    }
}

impl<N: NoiseSampler + Sync> WorldAssembler<N> {
    /// Assemble one world per seed in parallel, returned in seed order
    pub fn assemble_candidates(
        &self,
        width: i32,
        height: i32,
        seeds: Range<u64>,
    ) -> Vec<(u64, WorldSnapshot)> {
        seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                (seed, self.assemble(width, height, &mut rng))
            })
            .collect()
    }
}

/// The iron sword lying near the spawn point of every fresh world
fn starting_sword(position: Position) -> Item {
    Item {
        id: "sword1".to_string(),
        name: "Iron Sword".to_string(),
        item_type: ItemType::Weapon,
        rarity: Rarity::Uncommon,
        description: "A well-balanced iron sword".to_string(),
        position: Some(position),
        owner_id: None,
        stats: ItemStats {
            attack: Some(5),
            ..Default::default()
        },
        reveal: RevealState::revealed(Rarity::Uncommon),
    }
}
