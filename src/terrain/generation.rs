//! Seeded random terrain for test fixtures, benchmarks and the CLI

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::io::configuration::{
    DEFAULT_MAP_SIZE, DEFAULT_ROCK_DENSITY, DEFAULT_SEED, DEFAULT_TREE_DENSITY,
    DEFAULT_WATER_DENSITY, MAX_MAP_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Tilemap;

/// Parameters for random terrain generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Map dimension
    pub size: usize,
    /// Random seed; equal configs produce equal maps
    pub seed: u64,
    /// Probability that a tile is water
    pub water: f64,
    /// Probability that a tile is rock
    pub rock: f64,
    /// Probability that a tile holds a tree
    pub tree: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MAP_SIZE,
            seed: DEFAULT_SEED,
            water: DEFAULT_WATER_DENSITY,
            rock: DEFAULT_ROCK_DENSITY,
            tree: DEFAULT_TREE_DENSITY,
        }
    }
}

impl GenerationConfig {
    /// Check size and densities
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::InvalidParameter`] when the size exceeds
    /// [`MAX_MAP_SIZE`], a density is outside `[0, 1]`, or the densities sum
    /// above 1
    pub fn validate(&self) -> Result<()> {
        if self.size > MAX_MAP_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must not exceed {MAX_MAP_SIZE}"),
            ));
        }

        for (parameter, density) in [("water", self.water), ("rock", self.rock), ("tree", self.tree)] {
            if !(0.0..=1.0).contains(&density) {
                return Err(invalid_parameter(
                    parameter,
                    &density,
                    &"density must be within [0, 1]",
                ));
            }
        }

        let total = self.water + self.rock + self.tree;
        if total > 1.0 {
            return Err(invalid_parameter(
                "density",
                &total,
                &"water, rock and tree densities must sum to at most 1",
            ));
        }

        Ok(())
    }
}

/// Build a map whose tiles are water, rock, tree or free land
///
/// Each tile receives at most one flag. One roll per tile in row-major order
/// keeps the output stable for a given seed.
///
/// # Errors
///
/// Returns the validation error of [`GenerationConfig::validate`]
pub fn generate_tilemap(config: &GenerationConfig) -> Result<Tilemap> {
    config.validate()?;

    let mut map = Tilemap::with_size(config.size)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let rock_threshold = config.water + config.rock;
    let tree_threshold = rock_threshold + config.tree;

    for tile in map.tiles_mut() {
        let roll: f64 = rng.random();
        let terrain = tile.terrain_mut();
        if roll < config.water {
            terrain.set_water(true);
        } else if roll < rock_threshold {
            terrain.set_rock(true);
        } else if roll < tree_threshold {
            terrain.set_tree(true);
        }
    }

    debug!(
        size = config.size,
        seed = config.seed,
        constructible = map.count_constructible(),
        "terrain generated"
    );
    Ok(map)
}
