//! # Game Module
//!
//! Entity model and game-state engine.
//!
//! This module contains the fundamental building blocks of Mazebound:
//! - Player, monster, and item representations with a shared combat contract
//! - The game engine that owns the maze, the player, and the encounter state
//! - Position and direction primitives used across the crate

pub mod engine;
pub mod entities;

pub use engine::*;
pub use entities::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in the maze.
///
/// # Examples
///
/// ```
/// use mazebound::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position offset by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Calculates the Chebyshev distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::Position;
    ///
    /// let pos1 = Position::new(1, 1);
    /// let pos2 = Position::new(4, 2);
    /// assert_eq!(pos1.chebyshev_distance(pos2), 3);
    /// ```
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        (self.x - other.x).abs().max((self.y - other.y).abs()) as u32
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// The four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions in carve order: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` delta for one step in this direction.
    ///
    /// North is negative `y`, matching screen coordinates.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}
