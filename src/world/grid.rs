//! Terrain grid
//!
//! Row-major 2D array of generated tiles, addressed as `grid[y][x]`.

use serde::{Deserialize, Serialize};

use super::noise::NoiseSampler;
use super::terrain::TerrainSynthesizer;
use super::tile::{TerrainTile, TerrainType};

/// The finished terrain layer of a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerrainGrid {
    rows: Vec<Vec<TerrainTile>>,
}

impl TerrainGrid {
    /// Synthesize every coordinate of a `width x height` grid
    pub fn generate<N: NoiseSampler>(synth: &TerrainSynthesizer<N>, width: i32, height: i32) -> Self {
        let rows = (0..height.max(0))
            .map(|y| (0..width.max(0)).map(|x| synth.synthesize(x, y)).collect())
            .collect();
        Self { rows }
    }

    pub fn from_rows(rows: Vec<Vec<TerrainTile>>) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> i32 {
        self.rows.first().map_or(0, |row| row.len() as i32)
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Get tile at position
    pub fn get(&self, x: i32, y: i32) -> Option<&TerrainTile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize)
    }

    pub fn rows(&self) -> &[Vec<TerrainTile>] {
        &self.rows
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &TerrainTile> {
        self.rows.iter().flatten()
    }

    /// Number of tiles of each terrain type, in `TerrainType::ALL` order
    pub fn terrain_counts(&self) -> Vec<(TerrainType, usize)> {
        TerrainType::ALL
            .iter()
            .map(|t| (*t, self.tiles().filter(|tile| tile.terrain_type == *t).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

#[cfg(test)]
impl TerrainGrid {
    /// Grid of untouched base tiles, terrain chosen per coordinate
    pub(crate) fn from_fn(
        width: i32,
        height: i32,
        terrain: impl Fn(i32, i32) -> TerrainType,
    ) -> Self {
        use super::biome::BiomeLabel;
        use super::position::Position;
        use super::tile::TileDraft;

        let rows = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        TileDraft::from_type(terrain(x, y)).finish(
                            Position::new(x, y),
                            BiomeLabel::Plain,
                            0.5,
                            0.5,
                            0.5,
                        )
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Position;

    #[test]
    fn test_generate_dimensions_and_positions() {
        let grid = TerrainGrid::generate(&TerrainSynthesizer::new(), 7, 4);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 4);
        for (y, row) in grid.rows().iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                assert_eq!(tile.position, Position::new(x as i32, y as i32));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = TerrainGrid::generate(&TerrainSynthesizer::new(), 3, 3);
        assert!(grid.get(2, 2).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(-1, 0).is_none());
        assert!(!grid.in_bounds(0, 3));
    }

    #[test]
    fn test_from_fn_layout() {
        let grid = TerrainGrid::from_fn(3, 2, |x, _| {
            if x == 0 {
                TerrainType::Forest
            } else {
                TerrainType::Plain
            }
        });
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(0, 1).unwrap().terrain_type, TerrainType::Forest);
        assert_eq!(grid.get(2, 1).unwrap().position, Position::new(2, 1));
        assert_eq!(
            grid.terrain_counts(),
            vec![(TerrainType::Forest, 2), (TerrainType::Plain, 4)]
        );
    }

    #[test]
    fn test_serializes_as_nested_array() {
        let grid = TerrainGrid::generate(&TerrainSynthesizer::new(), 2, 2);
        let value = serde_json::to_value(&grid).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0]["position"]["y"], 1);
    }
}
