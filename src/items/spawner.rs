//! Ground loot spawning
//!
//! Scans a finished terrain grid and scatters hidden items tile by tile, using
//! the per-terrain loot table, two noise channels, and circular hotspots that
//! raise both the spawn rate and the rarity of what spawns inside them.

use rand::seq::SliceRandom;
use rand::Rng;

use super::item::{Item, ItemType};
use super::loot::{item_description, item_name, roll_rarity, roll_stats};
use crate::data::loot_tables::{
    terrain_clause, terrain_loot, terrain_stat_multiplier, terrain_words, RarityWeights,
    TerrainLootConfig,
};
use crate::world::noise::{NoiseChannel, NoiseField, NoiseSampler};
use crate::world::{Position, TerrainGrid, TerrainTile, TerrainType};

/// Map area covered by one hotspot on average
pub const DEFAULT_HOTSPOT_AREA: i32 = 200;

/// Circular region of boosted loot
#[derive(Debug, Clone, PartialEq)]
pub struct LootHotspot {
    pub center: Position,
    pub radius: i32,
    /// Multiplies the tile spawn chance
    pub bonus_multiplier: f64,
    /// Non-common rarity weights are scaled by `1 + rarity_bonus`
    pub rarity_bonus: f64,
}

impl LootHotspot {
    pub fn contains(&self, pos: Position) -> bool {
        self.center.euclidean_distance(&pos) <= f64::from(self.radius)
    }
}

/// Effective loot odds of a single tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileOdds {
    pub config: &'static TerrainLootConfig,
    /// Spawn chance after hotspot and density bonuses
    pub spawn_chance: f64,
    pub rarity_weights: RarityWeights,
    /// Rarity noise at the tile
    pub rarity_noise: f64,
}

/// Seeds ground loot across a terrain grid
#[derive(Debug, Clone)]
pub struct LootSpawner<N = NoiseField> {
    noise: N,
    hotspot_area: i32,
}

impl LootSpawner<NoiseField> {
    pub fn new() -> Self {
        Self::with_noise(NoiseField::new())
    }
}

impl Default for LootSpawner<NoiseField> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSampler> LootSpawner<N> {
    pub fn with_noise(noise: N) -> Self {
        Self {
            noise,
            hotspot_area: DEFAULT_HOTSPOT_AREA,
        }
    }

    pub fn with_hotspot_area(mut self, area: i32) -> Self {
        self.hotspot_area = area.max(1);
        self
    }

    /// One hotspot per `hotspot_area` tiles, at random centers
    pub fn generate_hotspots(&self, width: i32, height: i32, rng: &mut impl Rng) -> Vec<LootHotspot> {
        if width <= 0 || height <= 0 {
            return Vec::new();
        }
        let count = (width * height) / self.hotspot_area;

        (0..count)
            .map(|_| LootHotspot {
                center: Position::new(rng.gen_range(0..width), rng.gen_range(0..height)),
                radius: 3 + rng.gen_range(0..4),
                bonus_multiplier: 2.0 + rng.gen::<f64>() * 2.0,
                rarity_bonus: 0.5 + rng.gen::<f64>() * 0.5,
            })
            .collect()
    }

    /// Spawn chance and rarity weights for one tile. `None` when the terrain has
    /// no loot table.
    pub fn tile_odds(&self, tile: &TerrainTile, hotspots: &[LootHotspot]) -> Option<TileOdds> {
        let config = terrain_loot(tile.terrain_type)?;
        let Position { x, y } = tile.position;

        let density = self.noise.channel(NoiseChannel::LootDensity, x, y);
        let rarity_noise = self.noise.channel(NoiseChannel::LootRarity, x, y);

        let mut spawn_chance = config.spawn_chance;
        let mut rarity_weights = config.rarity_weights;

        if let Some(hotspot) = hotspots.iter().find(|h| h.contains(tile.position)) {
            spawn_chance *= hotspot.bonus_multiplier;
            rarity_weights = rarity_weights.boost_non_common(1.0 + hotspot.rarity_bonus);
        }

        if density > 0.6 {
            spawn_chance *= config.density_multiplier;
        }

        Some(TileOdds {
            config,
            spawn_chance,
            rarity_weights,
            rarity_noise,
        })
    }

    /// Scan the grid row by row and return every item spawned
    pub fn spawn(
        &self,
        grid: &TerrainGrid,
        width: i32,
        height: i32,
        hotspots: &[LootHotspot],
        rng: &mut impl Rng,
    ) -> Vec<Item> {
        let mut items = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let Some(tile) = grid.get(x, y) else {
                    continue;
                };
                let Some(odds) = self.tile_odds(tile, hotspots) else {
                    continue;
                };

                if rng.gen::<f64>() >= odds.spawn_chance {
                    continue;
                }

                let count = rng.gen_range(1..=odds.config.max_items_per_tile.max(1));
                for n in 0..count {
                    items.push(self.roll_item(tile, &odds, n, rng));
                }
            }
        }

        log::debug!(
            "ground loot: {} items over {}x{} ({} hotspots)",
            items.len(),
            width,
            height,
            hotspots.len()
        );
        items
    }

    fn roll_item(&self, tile: &TerrainTile, odds: &TileOdds, n: u32, rng: &mut impl Rng) -> Item {
        let terrain = tile.terrain_type;
        let item_type = odds
            .config
            .preferred_types
            .choose(rng)
            .copied()
            .unwrap_or(ItemType::Consumable);

        let weights = if odds.rarity_noise > 0.8 {
            odds.rarity_weights.boost_non_common(1.5)
        } else {
            odds.rarity_weights
        };
        let rarity = roll_rarity(&weights, rng);

        let mut stats = roll_stats(
            item_type,
            rarity.stat_multiplier() * terrain_stat_multiplier(terrain),
            rng,
        );
        match (item_type, terrain) {
            (ItemType::Armor, TerrainType::Ice) => {
                stats.cold_resistance = Some((2.0 * rarity.stat_multiplier()).floor() as i32);
            }
            (ItemType::Consumable, TerrainType::Forest) => {
                stats.natural_healing = Some(true);
            }
            _ => {}
        }

        let Position { x, y } = tile.position;
        Item::hidden(
            format!("terrain_loot_{x}_{y}_{n}"),
            item_name(rarity, item_type, terrain_words(terrain), rng),
            item_type,
            rarity,
            item_description(rarity, item_type, terrain_clause(terrain)),
            tile.position,
            stats,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Rarity;
    use crate::world::TerrainSynthesizer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Production noise with the loot channels pinned
    struct LootNoise {
        density: f64,
        rarity: f64,
    }

    impl NoiseSampler for LootNoise {
        fn channel(&self, channel: NoiseChannel, x: i32, y: i32) -> f64 {
            match channel {
                NoiseChannel::LootDensity => self.density,
                NoiseChannel::LootRarity => self.rarity,
                other => NoiseField.channel(other, x, y),
            }
        }
    }

    fn grid() -> TerrainGrid {
        TerrainGrid::generate(&TerrainSynthesizer::new(), 40, 30)
    }

    /// Roll `n` items on a single tile of `terrain`
    fn roll_many(terrain: TerrainType, rarity_noise: f64, n: u32) -> Vec<Item> {
        let grid = TerrainGrid::from_fn(1, 1, |_, _| terrain);
        let tile = grid.get(0, 0).unwrap();
        let spawner = LootSpawner::with_noise(LootNoise { density: 0.0, rarity: rarity_noise });
        let odds = spawner.tile_odds(tile, &[]).unwrap();
        let mut rng = StdRng::seed_from_u64(31);
        (0..n).map(|i| spawner.roll_item(tile, &odds, i, &mut rng)).collect()
    }

    fn common_share(items: &[Item]) -> f64 {
        items.iter().filter(|i| i.rarity == Rarity::Common).count() as f64 / items.len() as f64
    }

    fn hotspot() -> LootHotspot {
        LootHotspot {
            center: Position::new(5, 5),
            radius: 3,
            bonus_multiplier: 3.0,
            rarity_bonus: 0.5,
        }
    }

    #[test]
    fn test_hotspot_triples_spawn_chance() {
        let spawner = LootSpawner::with_noise(LootNoise { density: 0.0, rarity: 0.0 });
        let grid = grid();
        let hotspots = [hotspot()];

        let mut checked = 0;
        for tile in grid.tiles() {
            let Some(base) = spawner.tile_odds(tile, &[]) else {
                continue;
            };
            let boosted = spawner.tile_odds(tile, &hotspots).unwrap();
            if hotspots[0].contains(tile.position) {
                assert_eq!(boosted.spawn_chance, base.config.spawn_chance * 3.0);
                checked += 1;
            } else {
                assert_eq!(boosted.spawn_chance, base.spawn_chance);
            }
        }
        // radius 3 circle around (5,5) has 29 tiles, all on the map
        assert_eq!(checked, 29);
    }

    #[test]
    fn test_hotspot_boosts_non_common_weights() {
        let spawner = LootSpawner::with_noise(LootNoise { density: 0.0, rarity: 0.0 });
        let grid = grid();
        let tile = grid.get(5, 5).unwrap();
        let base = spawner.tile_odds(tile, &[]).unwrap();
        let boosted = spawner.tile_odds(tile, &[hotspot()]).unwrap();
        assert_eq!(boosted.rarity_weights.common, base.rarity_weights.common);
        assert_eq!(boosted.rarity_weights.uncommon, base.rarity_weights.uncommon * 1.5);
    }

    #[test]
    fn test_density_multiplier() {
        let grid = grid();
        let tile = grid.get(10, 10).unwrap();
        let dense = LootSpawner::with_noise(LootNoise { density: 0.7, rarity: 0.0 });
        let odds = dense.tile_odds(tile, &[]).unwrap();
        assert_eq!(
            odds.spawn_chance,
            odds.config.spawn_chance * odds.config.density_multiplier
        );
    }

    #[test]
    fn test_hotspot_generation() {
        let mut rng = StdRng::seed_from_u64(11);
        let hotspots = LootSpawner::new().generate_hotspots(40, 30, &mut rng);
        assert_eq!(hotspots.len(), 6); // 1200 / 200
        for h in &hotspots {
            assert!((0..40).contains(&h.center.x) && (0..30).contains(&h.center.y));
            assert!((3..=6).contains(&h.radius));
            assert!((2.0..4.0).contains(&h.bonus_multiplier));
            assert!((0.5..1.0).contains(&h.rarity_bonus));
        }
        assert!(LootSpawner::new().generate_hotspots(10, 10, &mut rng).is_empty());
    }

    #[test]
    fn test_spawned_items_are_hidden_and_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let spawner = LootSpawner::new();
        let grid = grid();
        let hotspots = spawner.generate_hotspots(40, 30, &mut rng);
        let items = spawner.spawn(&grid, 40, 30, &hotspots, &mut rng);
        assert!(!items.is_empty());

        for item in &items {
            let pos = item.position.unwrap();
            assert!(grid.in_bounds(pos.x, pos.y));
            assert!(item.reveal.is_hidden);
            assert_eq!(item.reveal.reveal_progress, 0.0);
            assert!(!item.can_be_looted());
            assert_eq!(item.reveal.reveal_duration, item.rarity.reveal_duration_ms());

            let tile = grid.get(pos.x, pos.y).unwrap();
            let config = terrain_loot(tile.terrain_type).unwrap();
            assert!(config.preferred_types.contains(&item.item_type));
            assert!(item.description.ends_with(&format!("{}.", terrain_clause(tile.terrain_type))));
        }

        let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_ice_armor_resists_cold() {
        let items = roll_many(TerrainType::Ice, 0.0, 400);
        assert!(items.iter().any(|i| i.item_type == ItemType::Armor));
        assert!(items.iter().any(|i| i.item_type == ItemType::Consumable));

        for item in &items {
            match item.item_type {
                ItemType::Armor => {
                    let expected = (2.0 * item.rarity.stat_multiplier()).floor() as i32;
                    assert_eq!(item.stats.cold_resistance, Some(expected), "{}", item.name);
                }
                _ => assert_eq!(item.stats.cold_resistance, None),
            }
            assert_eq!(item.stats.natural_healing, None);

            let word = item.name.split(' ').nth(1).unwrap();
            assert!(terrain_words(TerrainType::Ice).contains(&word), "{}", item.name);
            assert!(item.description.ends_with("preserved in eternal ice."));
        }
    }

    #[test]
    fn test_forest_consumables_heal() {
        let items = roll_many(TerrainType::Forest, 0.0, 400);
        assert!(items.iter().any(|i| i.item_type == ItemType::Weapon));
        for item in &items {
            let heals = item.item_type == ItemType::Consumable;
            assert_eq!(item.stats.natural_healing, heals.then_some(true), "{}", item.name);
            assert_eq!(item.stats.cold_resistance, None);
        }
    }

    #[test]
    fn test_terrain_scales_stats() {
        let cases = [
            (TerrainType::AncientRuins, 1.3),
            (TerrainType::MountainPeak, 1.15),
            (TerrainType::Mountain, 1.1),
            (TerrainType::Plain, 1.0),
        ];
        for (terrain, bonus) in cases {
            assert_eq!(terrain_stat_multiplier(terrain), bonus);

            for item in roll_many(terrain, 0.0, 300) {
                let m = item.rarity.stat_multiplier() * bonus;
                let (value, base, spread) = match item.item_type {
                    ItemType::Weapon => (item.stats.attack, 5.0, 3.0),
                    ItemType::Armor => (item.stats.defense, 3.0, 2.0),
                    ItemType::Consumable => (item.stats.hp, 20.0, 10.0),
                    ItemType::Utility => (item.stats.speed, 1.0, 2.0),
                };
                let value = value.unwrap();
                let low = (base * m).floor() as i32;
                let high = (base * m + spread).floor() as i32;
                assert!((low..=high).contains(&value), "{:?} {} = {}", terrain, item.name, value);

                // no flavour word where the terrain has none
                let words = item.name.split(' ').count();
                assert_eq!(words, if terrain_words(terrain).is_empty() { 2 } else { 3 });
            }
        }
    }

    #[test]
    fn test_rarity_noise_boosts_non_common() {
        // Ice weights 70/25/5, boosted to 70/37.5/7.5
        let plain = roll_many(TerrainType::Ice, 0.0, 10_000);
        let boosted = roll_many(TerrainType::Ice, 0.9, 10_000);
        assert!((common_share(&plain) - 0.70).abs() < 0.03, "{}", common_share(&plain));
        assert!(
            (common_share(&boosted) - 70.0 / 115.0).abs() < 0.03,
            "{}",
            common_share(&boosted)
        );
    }

    #[test]
    fn test_per_tile_cap() {
        const PATCHES: [TerrainType; 5] = [
            TerrainType::AncientRuins,
            TerrainType::Oasis,
            TerrainType::Forest,
            TerrainType::Ice,
            TerrainType::Plain,
        ];
        let grid = TerrainGrid::from_fn(20, 20, |x, y| {
            PATCHES[((x / 2 + y) as usize) % PATCHES.len()]
        });
        let spawner = LootSpawner::with_noise(LootNoise { density: 0.7, rarity: 0.0 });
        let hotspots = [hotspot()];

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let items = spawner.spawn(&grid, 20, 20, &hotspots, &mut rng);

            for tile in grid.tiles() {
                let here = items.iter().filter(|i| i.position == Some(tile.position)).count();
                let cap = terrain_loot(tile.terrain_type).unwrap().max_items_per_tile as usize;
                assert!(here <= cap, "{} items on {:?}", here, tile.position);

                // 0.35 x 3 x 2.5 is past certainty
                let in_hotspot = hotspots[0].contains(tile.position);
                if tile.terrain_type == TerrainType::AncientRuins && in_hotspot {
                    assert!(here >= 1);
                }
            }
        }
    }
}
