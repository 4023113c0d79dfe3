//! # Maze Generation
//!
//! Grid representation and the recursive-backtracking carve algorithm.
//!
//! A maze starts as solid wall. Carving walks from (1, 1), knocking out
//! passages two cells at a time, which yields a fully connected perfect
//! maze on the odd-indexed cells. The exit lands in the bottom-right
//! third of the grid, and monsters, weapons, and potions are scattered
//! over the remaining empty cells afterwards.

use crate::game::{Direction, Position};
use crate::generation::{create_rng, GenerationConfig};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How often the exit placement samples the bottom-right third before
/// falling back to a deterministic scan.
const EXIT_PLACEMENT_ATTEMPTS: u32 = 100;

/// Attempt multiplier for entity placement. Placement gives up after
/// `target * ATTEMPTS_PER_ENTITY` samples and accepts the partial count.
const ATTEMPTS_PER_ENTITY: u32 = 20;

/// The state of a single maze cell.
///
/// Every cell holds exactly one of these at any time. Entity tiles revert
/// to [`TileType::Empty`] once the entity on them is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Wall,
    Empty,
    Monster,
    Weapon,
    Potion,
    Exit,
}

/// The game maze: a fixed-size rectangular grid of tiles.
///
/// Dimensions are fixed at construction; only per-cell state mutates over
/// the life of a game. Out-of-range queries read as [`TileType::Wall`],
/// giving the grid an implicit solid border.
///
/// # Examples
///
/// ```
/// use mazebound::{Maze, TileType};
///
/// let maze = Maze::new(21, 21, Some(42));
/// assert_eq!(maze.rows(), 21);
/// assert_eq!(maze.tile(1, 1), TileType::Empty);
/// assert_eq!(maze.tile(-1, 5), TileType::Wall);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    rows: u32,
    cols: u32,
    grid: Vec<Vec<TileType>>,
}

impl Maze {
    /// Generates a maze of the given dimensions, optionally seeded.
    ///
    /// Convenience wrapper around [`Maze::generate`] with default
    /// placement ranges.
    pub fn new(rows: u32, cols: u32, seed: Option<u64>) -> Self {
        let config = GenerationConfig {
            seed,
            rows,
            cols,
            ..GenerationConfig::default()
        };
        Self::generate(&config)
    }

    /// Generates a maze from a full configuration.
    ///
    /// Runs the carve, places the exit, then places monsters, weapons,
    /// and potions in that order. Placement counts are best-effort: a
    /// maze too small or too dense to hold the drawn target count keeps
    /// whatever was actually placed.
    pub fn generate(config: &GenerationConfig) -> Self {
        let mut rng = create_rng(config.seed);
        let mut maze = Self {
            rows: config.rows,
            cols: config.cols,
            grid: vec![vec![TileType::Wall; config.cols as usize]; config.rows as usize],
        };

        // The carve needs an interior around the start cell (1, 1);
        // anything smaller stays solid wall.
        if config.rows < 3 || config.cols < 3 {
            debug!(
                "{}x{} maze has no interior to carve; returning solid walls",
                config.rows, config.cols
            );
            return maze;
        }

        maze.carve_passages(1, 1, &mut rng);
        maze.place_exit(&mut rng);

        let monsters = rng.gen_range(config.min_monsters..=config.max_monsters);
        let weapons = rng.gen_range(config.min_weapons..=config.max_weapons);
        let potions = rng.gen_range(config.min_potions..=config.max_potions);

        let monsters = maze.place_entities(TileType::Monster, monsters, &mut rng);
        let weapons = maze.place_entities(TileType::Weapon, weapons, &mut rng);
        let potions = maze.place_entities(TileType::Potion, potions, &mut rng);

        info!(
            "generated {}x{} maze: {} monsters, {} weapons, {} potions",
            config.rows, config.cols, monsters, weapons, potions
        );

        maze
    }

    /// Gets the number of rows in the maze.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Gets the number of columns in the maze.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Gets the tile at the given coordinates.
    ///
    /// Coordinates outside the grid read as [`TileType::Wall`].
    pub fn tile(&self, x: i32, y: i32) -> TileType {
        if !self.in_bounds(x, y) {
            return TileType::Wall;
        }
        self.grid[y as usize][x as usize]
    }

    /// Sets the tile at the given coordinates. Out-of-range writes are
    /// ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileType) {
        if self.in_bounds(x, y) {
            self.grid[y as usize][x as usize] = tile;
        }
    }

    /// Checks whether the given position can be stepped onto.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.grid[y as usize][x as usize] != TileType::Wall
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i32 && y < self.rows as i32
    }

    /// Carves passages with recursive backtracking.
    ///
    /// Marks the current cell empty, then tries the four cardinal
    /// directions in shuffled order. A direction is taken when the cell
    /// two steps away is strictly inside the border ring and still wall;
    /// the connecting cell is carved and the walk recurses. Recursion
    /// depth is bounded by the maze area.
    fn carve_passages(&mut self, x: i32, y: i32, rng: &mut StdRng) {
        let mut directions = Direction::ALL;
        // Fisher-Yates shuffle
        for i in 0..directions.len() {
            let j = rng.gen_range(i..directions.len());
            directions.swap(i, j);
        }

        self.grid[y as usize][x as usize] = TileType::Empty;

        for dir in directions {
            let (dx, dy) = dir.delta();
            let nx = x + dx * 2;
            let ny = y + dy * 2;

            if nx > 0
                && ny > 0
                && nx < self.cols as i32 - 1
                && ny < self.rows as i32 - 1
                && self.grid[ny as usize][nx as usize] == TileType::Wall
            {
                self.grid[(y + dy) as usize][(x + dx) as usize] = TileType::Empty;
                self.carve_passages(nx, ny, rng);
            }
        }
    }

    /// Places the exit in a reachable cell far from the start.
    ///
    /// Samples the bottom-right third of the grid for an empty cell; if
    /// every attempt misses (or the grid is too small for that region to
    /// exist), scans backwards from the bottom-right corner and takes the
    /// first empty cell.
    fn place_exit(&mut self, rng: &mut StdRng) {
        let x_lo = self.cols as i32 * 2 / 3;
        let x_hi = self.cols as i32 - 1;
        let y_lo = self.rows as i32 * 2 / 3;
        let y_hi = self.rows as i32 - 1;

        if x_lo < x_hi && y_lo < y_hi {
            for _ in 0..EXIT_PLACEMENT_ATTEMPTS {
                let x = rng.gen_range(x_lo..x_hi);
                let y = rng.gen_range(y_lo..y_hi);

                if self.grid[y as usize][x as usize] == TileType::Empty {
                    self.grid[y as usize][x as usize] = TileType::Exit;
                    return;
                }
            }
        }

        // Fallback: first empty cell scanning back from the far corner
        for y in (1..self.rows as i32 - 1).rev() {
            for x in (1..self.cols as i32 - 1).rev() {
                if self.grid[y as usize][x as usize] == TileType::Empty {
                    self.grid[y as usize][x as usize] = TileType::Exit;
                    return;
                }
            }
        }
    }

    /// Places up to `target` entities of one kind on random empty cells.
    ///
    /// Cells within a 2-tile Chebyshev radius of the start (1, 1) are
    /// excluded so the player never spawns next to an encounter. Gives up
    /// after the attempt cap and returns the count actually placed.
    fn place_entities(&mut self, tile: TileType, target: u32, rng: &mut StdRng) -> u32 {
        if self.cols < 3 || self.rows < 3 {
            return 0;
        }

        let mut placed = 0;
        let max_attempts = target * ATTEMPTS_PER_ENTITY;

        for _ in 0..max_attempts {
            if placed >= target {
                break;
            }

            let x = rng.gen_range(1..self.cols as i32 - 1);
            let y = rng.gen_range(1..self.rows as i32 - 1);

            if self.grid[y as usize][x as usize] == TileType::Empty
                && Position::new(x, y).chebyshev_distance(Position::new(1, 1)) > 2
            {
                self.grid[y as usize][x as usize] = tile;
                placed += 1;
            }
        }

        if placed < target {
            debug!("placed {placed}/{target} {tile:?} tiles before hitting the attempt cap");
        }

        placed
    }

    /// Counts cells currently holding the given tile.
    pub fn count_tiles(&self, tile: TileType) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == tile)
            .count()
    }
}
