//! # Generation Module
//!
//! Procedural maze generation: grid carving and entity placement.
//!
//! The generator produces a perfect maze via recursive backtracking, then
//! seeds it with an exit, monsters, weapons, and potions. Generation is
//! deterministic when a seed is supplied and otherwise draws from entropy.

pub mod maze;

pub use maze::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for maze generation.
///
/// Controls the grid dimensions, the optional seed, and how many of each
/// entity kind placement aims for. Placement counts are drawn uniformly
/// from the configured inclusive ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation; `None` draws from entropy
    pub seed: Option<u64>,
    /// Number of grid rows
    pub rows: u32,
    /// Number of grid columns
    pub cols: u32,
    /// Minimum number of monsters to place
    pub min_monsters: u32,
    /// Maximum number of monsters to place
    pub max_monsters: u32,
    /// Minimum number of weapons to place
    pub min_weapons: u32,
    /// Maximum number of weapons to place
    pub max_weapons: u32,
    /// Minimum number of potions to place
    pub min_potions: u32,
    /// Maximum number of potions to place
    pub max_potions: u32,
}

impl GenerationConfig {
    /// Creates a configuration for a square maze of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(21);
    /// assert_eq!(config.rows, 21);
    /// assert_eq!(config.cols, 21);
    /// assert!(config.min_monsters <= config.max_monsters);
    /// ```
    pub fn new(size: u32) -> Self {
        Self {
            seed: None,
            rows: size,
            cols: size,
            min_monsters: 5,
            max_monsters: 9,
            min_weapons: 3,
            max_weapons: 6,
            min_potions: 3,
            max_potions: 6,
        }
    }

    /// Creates a seeded configuration for reproducible generation.
    pub fn with_seed(size: u32, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(size)
        }
    }

    /// Creates a configuration for testing with a small, sparse maze.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rows: 11,
            cols: 11,
            min_monsters: 1,
            max_monsters: 3,
            min_weapons: 1,
            max_weapons: 2,
            min_potions: 1,
            max_potions: 2,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAZE_SIZE)
    }
}

/// Creates the random number generator for a generation run.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(21);
        assert_eq!(config.seed, None);
        assert!(config.min_monsters <= config.max_monsters);
        assert!(config.min_weapons <= config.max_weapons);
        assert!(config.min_potions <= config.max_potions);
    }

    #[test]
    fn test_seeded_config() {
        let config = GenerationConfig::with_seed(15, 7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rows, 15);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;

        let mut a = create_rng(Some(99));
        let mut b = create_rng(Some(99));
        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }
}
