//! Structure placement
//!
//! Walks the terrain grid in row-major order and drops buildings onto tiles
//! their type favours. Footprints are rectangles anchored at the top-left tile
//! and never overlap each other or leave the map.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::buildings::{BuildingSpec, BuildingType, BUILDING_CATALOG};
use crate::items::loot::{item_description, item_name, roll_rarity, roll_stats};
use crate::items::{Item, ItemType};
use crate::world::noise::{NoiseChannel, NoiseField, NoiseSampler};
use crate::world::{Position, TerrainGrid, TerrainType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSize {
    pub width: i32,
    pub height: i32,
}

/// A placed building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    #[serde(rename = "type")]
    pub building_type: BuildingType,
    pub emoji: String,
    pub name: String,
    pub description: String,
    /// Top-left tile of the footprint
    pub position: Position,
    pub size: BuildingSize,
    pub is_accessible: bool,
    pub spawn_chance: f64,
    pub terrain_preference: Vec<TerrainType>,
}

impl Building {
    fn from_spec(spec: &BuildingSpec, x: i32, y: i32) -> Self {
        Self {
            id: format!("building_{x}_{y}"),
            building_type: spec.building_type,
            emoji: spec.emoji.to_string(),
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            position: Position::new(x, y),
            size: BuildingSize {
                width: spec.width,
                height: spec.height,
            },
            is_accessible: spec.is_accessible,
            spawn_chance: spec.spawn_chance,
            terrain_preference: spec.terrain_preference.to_vec(),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.position.x
            && x < self.position.x + self.size.width
            && y >= self.position.y
            && y < self.position.y + self.size.height
    }

    /// Every tile covered by the building
    pub fn footprint(&self) -> impl Iterator<Item = Position> + '_ {
        (self.position.y..self.position.y + self.size.height).flat_map(move |y| {
            (self.position.x..self.position.x + self.size.width).map(move |x| Position::new(x, y))
        })
    }

    pub fn intersects(&self, other: &Building) -> bool {
        self.position.x < other.position.x + other.size.width
            && other.position.x < self.position.x + self.size.width
            && self.position.y < other.position.y + other.size.height
            && other.position.y < self.position.y + self.size.height
    }
}

/// Find the building covering a tile
pub fn building_at(buildings: &[Building], x: i32, y: i32) -> Option<&Building> {
    buildings.iter().find(|b| b.contains(x, y))
}

pub fn is_position_in_building(buildings: &[Building], x: i32, y: i32) -> bool {
    building_at(buildings, x, y).is_some()
}

/// Places buildings and the loot stored inside them
#[derive(Debug, Clone)]
pub struct StructurePlacer<N = NoiseField> {
    noise: N,
    catalog: Vec<BuildingSpec>,
}

impl StructurePlacer<NoiseField> {
    pub fn new() -> Self {
        Self::with_noise(NoiseField::new())
    }
}

impl Default for StructurePlacer<NoiseField> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSampler> StructurePlacer<N> {
    pub fn with_noise(noise: N) -> Self {
        Self {
            noise,
            catalog: BUILDING_CATALOG.to_vec(),
        }
    }

    /// Replace the building catalog
    pub fn with_catalog(mut self, catalog: &[BuildingSpec]) -> Self {
        self.catalog = catalog.to_vec();
        self
    }

    /// Place buildings over the whole grid
    pub fn place(
        &self,
        grid: &TerrainGrid,
        width: i32,
        height: i32,
        rng: &mut impl Rng,
    ) -> (Vec<Building>, Vec<Item>) {
        let width = width.min(grid.width());
        let height = height.min(grid.height());
        let mut occupied: HashSet<Position> = HashSet::new();
        let mut buildings = Vec::new();
        let mut items = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let Some(tile) = grid.get(x, y) else {
                    continue;
                };
                let Some(spec) = self.pick_candidate(tile.terrain_type, x, y, rng) else {
                    continue;
                };

                if rng.gen::<f64>() > spec.spawn_chance {
                    continue;
                }
                if !footprint_clear(&occupied, x, y, spec.width, spec.height, width, height) {
                    continue;
                }

                let building = Building::from_spec(spec, x, y);
                occupied.extend(building.footprint());

                if rng.gen::<f64>() < spec.loot_spawn_chance {
                    items.extend(building_loot(&building, spec, rng));
                }
                buildings.push(building);
            }
        }

        log::debug!(
            "placed {} buildings holding {} items on {}x{}",
            buildings.len(),
            items.len(),
            width,
            height
        );
        (buildings, items)
    }

    /// Weighted pick among the building types that favour this terrain
    fn pick_candidate(
        &self,
        terrain: TerrainType,
        x: i32,
        y: i32,
        rng: &mut impl Rng,
    ) -> Option<&BuildingSpec> {
        let candidates: Vec<&BuildingSpec> =
            self.catalog.iter().filter(|spec| spec.prefers(terrain)).collect();
        if candidates.is_empty() {
            return None;
        }

        let cluster = self.noise.channel(NoiseChannel::BuildingCluster, x, y);
        let rarity = self.noise.channel(NoiseChannel::BuildingRarity, x, y);

        let weighted: Vec<(&BuildingSpec, f64)> = candidates
            .into_iter()
            .map(|spec| {
                let mut weight = spec.spawn_chance;
                if cluster > 0.6 {
                    weight *= 1.5;
                }
                if rarity > 0.8 && spec.spawn_chance < 0.05 {
                    weight *= 2.0;
                }
                (spec, weight)
            })
            .collect();

        let total: f64 = weighted.iter().map(|(_, w)| w).sum();
        let mut roll = rng.gen::<f64>() * total;
        for (spec, weight) in weighted {
            roll -= weight;
            if roll <= 0.0 {
                return Some(spec);
            }
        }
        None
    }
}

fn footprint_clear(
    occupied: &HashSet<Position>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    width: i32,
    height: i32,
) -> bool {
    if w < 1 || h < 1 || x < 0 || y < 0 || x + w > width || y + h > height {
        return false;
    }
    (y..y + h).all(|ty| (x..x + w).all(|tx| !occupied.contains(&Position::new(tx, ty))))
}

/// Items stored inside a freshly placed building
fn building_loot(building: &Building, spec: &BuildingSpec, rng: &mut impl Rng) -> Vec<Item> {
    let count = rng.gen_range(1..=spec.max_loot_items.max(1));
    let Position { x: bx, y: by } = building.position;

    (0..count)
        .map(|n| {
            let pos = Position::new(
                bx + rng.gen_range(0..building.size.width),
                by + rng.gen_range(0..building.size.height),
            );
            let rarity = roll_rarity(&spec.loot_rarity, rng);
            let item_type = spec.loot_types.choose(rng).copied().unwrap_or(ItemType::Consumable);

            Item::hidden(
                format!("building_loot_{bx}_{by}_{n}"),
                item_name(rarity, item_type, &[], rng),
                item_type,
                rarity,
                item_description(rarity, item_type, spec.loot_clause),
                pos,
                roll_stats(item_type, rarity.stat_multiplier(), rng),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::buildings::building_spec;
    use crate::world::TerrainSynthesizer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Fixed cluster and rarity readings
    struct PlacementNoise {
        cluster: f64,
        rarity: f64,
    }

    impl NoiseSampler for PlacementNoise {
        fn channel(&self, channel: NoiseChannel, _x: i32, _y: i32) -> f64 {
            match channel {
                NoiseChannel::BuildingCluster => self.cluster,
                NoiseChannel::BuildingRarity => self.rarity,
                _ => 0.5,
            }
        }
    }

    /// 3x3 patches cycling through land, water and ruins
    fn patchwork(width: i32, height: i32) -> TerrainGrid {
        const PATCHES: [TerrainType; 10] = [
            TerrainType::Plain,
            TerrainType::Grassland,
            TerrainType::Hills,
            TerrainType::Mountain,
            TerrainType::Forest,
            TerrainType::AncientRuins,
            TerrainType::River,
            TerrainType::RollingHills,
            TerrainType::DenseForest,
            TerrainType::Water,
        ];
        TerrainGrid::from_fn(width, height, |x, y| {
            PATCHES[((x / 3 + (y / 3) * 7) as usize) % PATCHES.len()]
        })
    }

    fn any_terrain(width: i32, height: i32, spawn_chance: f64, loot_spawn_chance: f64) -> BuildingSpec {
        BuildingSpec {
            width,
            height,
            spawn_chance,
            loot_spawn_chance,
            terrain_preference: &TerrainType::ALL,
            ..*building_spec(BuildingType::House).unwrap()
        }
    }

    fn place(seed: u64, width: i32, height: i32) -> (TerrainGrid, Vec<Building>, Vec<Item>) {
        let grid = TerrainGrid::generate(&TerrainSynthesizer::new(), width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let (buildings, items) = StructurePlacer::new().place(&grid, width, height, &mut rng);
        (grid, buildings, items)
    }

    #[test]
    fn test_footprints_disjoint_and_in_bounds() {
        for seed in 0..20 {
            let (_, buildings, _) = place(seed, 40, 30);
            for (i, a) in buildings.iter().enumerate() {
                assert!(a.position.x >= 0 && a.position.y >= 0);
                assert!(a.position.x + a.size.width <= 40);
                assert!(a.position.y + a.size.height <= 30);
                for b in &buildings[i + 1..] {
                    assert!(!a.intersects(b), "{} overlaps {}", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_anchor_terrain_is_preferred() {
        for seed in 0..10 {
            let (grid, buildings, _) = place(seed, 40, 30);
            for b in &buildings {
                let anchor = grid.get(b.position.x, b.position.y).unwrap();
                assert!(b.terrain_preference.contains(&anchor.terrain_type), "{}", b.id);
            }
        }
    }

    #[test]
    fn test_mixed_terrain_placement() {
        let grid = patchwork(24, 24);
        let mut types = HashSet::new();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (buildings, items) = StructurePlacer::new().place(&grid, 24, 24, &mut rng);

            for (i, a) in buildings.iter().enumerate() {
                assert!(a.position.x + a.size.width <= 24 && a.position.y + a.size.height <= 24);
                let anchor = grid.get(a.position.x, a.position.y).unwrap();
                assert!(a.terrain_preference.contains(&anchor.terrain_type), "{}", a.id);
                for b in &buildings[i + 1..] {
                    assert!(!a.intersects(b), "{} overlaps {}", a.id, b.id);
                }
                types.insert(a.building_type);
            }
            for item in &items {
                let pos = item.position.unwrap();
                assert!(building_at(&buildings, pos.x, pos.y).is_some(), "{}", item.id);
            }
        }

        assert!(types.len() >= 6, "only {:?}", types);
    }

    #[test]
    fn test_rare_types_weighted_up() {
        let rare = BuildingSpec {
            spawn_chance: 0.04,
            terrain_preference: &[TerrainType::Plain],
            ..*building_spec(BuildingType::Gate).unwrap()
        };
        let common = BuildingSpec {
            spawn_chance: 0.08,
            terrain_preference: &[TerrainType::Plain],
            ..*building_spec(BuildingType::Shop).unwrap()
        };
        let share_of_rare = |cluster: f64, rarity: f64| {
            let placer = StructurePlacer::with_noise(PlacementNoise { cluster, rarity })
                .with_catalog(&[rare, common]);
            let mut rng = StdRng::seed_from_u64(17);
            let draws = 10_000;
            let hits = (0..draws)
                .filter_map(|_| placer.pick_candidate(TerrainType::Plain, 0, 0, &mut rng))
                .filter(|spec| spec.building_type == BuildingType::Gate)
                .count();
            hits as f64 / draws as f64
        };

        // 0.04 : 0.08 normally, 0.08 : 0.08 once the rarity channel is high
        assert!((share_of_rare(0.0, 0.0) - 1.0 / 3.0).abs() < 0.03);
        assert!((share_of_rare(0.7, 0.0) - 1.0 / 3.0).abs() < 0.03);
        assert!((share_of_rare(0.0, 0.9) - 0.5).abs() < 0.03);
    }

    #[test]
    fn test_blocked_anchors_are_skipped() {
        let grid = TerrainGrid::from_fn(4, 4, |_, _| TerrainType::Plain);
        let mut rng = StdRng::seed_from_u64(0);
        let (buildings, _) = StructurePlacer::new()
            .with_catalog(&[any_terrain(2, 2, 1.0, 0.0)])
            .place(&grid, 4, 4, &mut rng);

        let anchors: Vec<Position> = buildings.iter().map(|b| b.position).collect();
        assert_eq!(
            anchors,
            vec![
                Position::new(0, 0),
                Position::new(2, 0),
                Position::new(0, 2),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_footprints_stay_on_grid_when_size_overstated() {
        let grid = TerrainGrid::from_fn(4, 4, |_, _| TerrainType::Plain);
        let mut rng = StdRng::seed_from_u64(0);
        let (buildings, _) = StructurePlacer::new()
            .with_catalog(&[any_terrain(2, 2, 1.0, 0.0)])
            .place(&grid, 10, 10, &mut rng);

        assert_eq!(buildings.len(), 4);
        for b in &buildings {
            assert!(b.footprint().all(|p| grid.in_bounds(p.x, p.y)), "{}", b.id);
        }
    }

    #[test]
    fn test_empty_footprint_never_placed() {
        let grid = TerrainGrid::from_fn(3, 3, |_, _| TerrainType::Plain);
        let mut rng = StdRng::seed_from_u64(0);
        let (buildings, items) = StructurePlacer::new()
            .with_catalog(&[any_terrain(0, 1, 1.0, 1.0), any_terrain(1, 0, 1.0, 1.0)])
            .place(&grid, 3, 3, &mut rng);
        assert!(buildings.is_empty());
        assert!(items.is_empty());
    }

    #[test]
    fn test_single_type_fills_small_grid() {
        let hut = BuildingSpec {
            width: 1,
            height: 1,
            spawn_chance: 1.0,
            terrain_preference: &TerrainType::ALL,
            ..*building_spec(BuildingType::House).unwrap()
        };
        let grid = TerrainGrid::generate(&TerrainSynthesizer::new(), 3, 3);
        let mut rng = StdRng::seed_from_u64(0);

        let (buildings, _) = StructurePlacer::new()
            .with_catalog(&[hut])
            .place(&grid, 3, 3, &mut rng);

        assert_eq!(buildings.len(), 9);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(building_at(&buildings, x, y).unwrap().id, format!("building_{x}_{y}"));
            }
        }
    }

    #[test]
    fn test_oversized_footprint_is_skipped() {
        let wall = BuildingSpec {
            spawn_chance: 1.0,
            terrain_preference: &TerrainType::ALL,
            ..*building_spec(BuildingType::Wall).unwrap()
        };
        let grid = TerrainGrid::generate(&TerrainSynthesizer::new(), 4, 4);
        let mut rng = StdRng::seed_from_u64(0);
        let (buildings, items) = StructurePlacer::new()
            .with_catalog(&[wall])
            .place(&grid, 4, 4, &mut rng);
        assert!(buildings.is_empty());
        assert!(items.is_empty());
    }

    #[test]
    fn test_building_loot_inside_footprint() {
        let mut found = 0;
        for seed in 0..20 {
            let (_, buildings, items) = place(seed, 40, 30);
            for item in &items {
                let pos = item.position.unwrap();
                let owner = building_at(&buildings, pos.x, pos.y).expect("loot outside buildings");
                let spec = building_spec(owner.building_type).unwrap();
                assert!(spec.loot_types.contains(&item.item_type));
                assert!(item.description.contains(spec.loot_clause));
                assert!(item.reveal.is_hidden && !item.can_be_looted());
                found += 1;
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn test_ids_unique() {
        let (_, buildings, items) = place(3, 40, 30);
        let mut ids: Vec<&str> = buildings
            .iter()
            .map(|b| b.id.as_str())
            .chain(items.iter().map(|i| i.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_same_seed_same_placement() {
        let (_, a, _) = place(99, 40, 30);
        let (_, b, _) = place(99, 40, 30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_position_queries() {
        let castle = Building::from_spec(building_spec(BuildingType::Castle).unwrap(), 2, 2);
        let buildings = vec![castle];
        assert!(is_position_in_building(&buildings, 2, 2));
        assert!(is_position_in_building(&buildings, 4, 4));
        assert!(!is_position_in_building(&buildings, 5, 4));
        assert!(!is_position_in_building(&buildings, 1, 2));
        assert_eq!(buildings[0].footprint().count(), 9);
    }
}
