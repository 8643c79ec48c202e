//! Biome classification
//!
//! Three climate channels (continental mass, temperature, humidity) are combined
//! into a coarse biome label. Terrain detail is chosen per biome afterwards.

use serde::{Deserialize, Serialize};

use super::noise::{NoiseChannel, NoiseField, NoiseSampler};

/// Coarse climate/geography regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeLabel {
    Ocean,
    MountainRange,
    Tundra,
    Desert,
    Jungle,
    Swamp,
    Grassland,
    TemperateForest,
    /// Residual region. The classifier never produces it, the terrain
    /// decision tree still handles it.
    Plain,
}

/// Climate readings for one coordinate, already mapped into ~[0.05, 0.95]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Climate {
    pub continental: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl Climate {
    /// Classify the climate. First match wins, so the landmass checks always
    /// take precedence over temperature and humidity.
    pub fn biome(&self) -> BiomeLabel {
        let Climate { continental, temperature, humidity } = *self;

        if continental > 0.85 {
            return BiomeLabel::MountainRange;
        }
        if continental < 0.08 {
            return BiomeLabel::Ocean;
        }

        if temperature < 0.2 {
            BiomeLabel::Tundra
        } else if temperature > 0.8 && humidity > 0.7 {
            BiomeLabel::Jungle
        } else if temperature > 0.7 && humidity < 0.3 {
            BiomeLabel::Desert
        } else if humidity > 0.8 {
            BiomeLabel::Swamp
        } else if temperature > 0.6 {
            BiomeLabel::Grassland
        } else {
            BiomeLabel::TemperateForest
        }
    }
}

/// Affine remap of a raw layered sample
#[inline]
fn remap(raw: f64) -> f64 {
    raw * 0.9 + 0.05
}

/// Assigns a biome label to each coordinate
#[derive(Debug, Clone)]
pub struct BiomeClassifier<N = NoiseField> {
    noise: N,
}

impl BiomeClassifier<NoiseField> {
    pub fn new() -> Self {
        Self::with_noise(NoiseField::new())
    }
}

impl Default for BiomeClassifier<NoiseField> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSampler> BiomeClassifier<N> {
    pub fn with_noise(noise: N) -> Self {
        Self { noise }
    }

    /// Sample the three climate channels at a coordinate
    pub fn climate(&self, x: i32, y: i32) -> Climate {
        Climate {
            continental: remap(self.noise.channel(NoiseChannel::Continental, x, y)),
            temperature: remap(self.noise.channel(NoiseChannel::Temperature, x, y)),
            humidity: remap(self.noise.channel(NoiseChannel::Humidity, x, y)),
        }
    }

    pub fn classify(&self, x: i32, y: i32) -> BiomeLabel {
        self.climate(x, y).biome()
    }
}
