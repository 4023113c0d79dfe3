//! # Mazebound
//!
//! A single-player, turn-based console maze adventure.
//!
//! ## Architecture Overview
//!
//! The crate is split into an engine and a thin presentation shell:
//!
//! - **Generation**: procedural maze carving and entity placement
//! - **Game**: player/monster/item model and the game-state engine
//! - **Input**: translation of raw key events into engine calls
//! - **Rendering**: terminal rendering using crossterm
//!
//! The engine owns all game state and exposes two mutating operations
//! ([`GameEngine::move_player`] and [`GameEngine::execute_combat_turn`])
//! plus read access to everything the presentation layer needs. The
//! presentation modules never reach into engine internals.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

// Explicit re-exports for commonly used types
pub use game::{
    Combatant, Direction, GameEngine, GamePhase, Monster, Player, Position, Potion, Weapon,
};
pub use generation::{GenerationConfig, Maze, TileType};
pub use rendering::ConsoleDisplay;

/// Core error type for the Mazebound engine.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// I/O operation failed (terminal setup, rendering, input polling)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Maze generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Mazebound codebase.
pub type GameResult<T> = Result<T, GameError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default maze size (square) in tiles
    pub const DEFAULT_MAZE_SIZE: u32 = 21;

    /// Maximum player health
    pub const PLAYER_MAX_HEALTH: i32 = 150;

    /// Player starting health
    pub const PLAYER_STARTING_HEALTH: i32 = 120;

    /// Player base attack power before weapon modifiers
    pub const PLAYER_BASE_ATTACK: i32 = 10;

    /// Health restored by a potion
    pub const POTION_HEAL_AMOUNT: i32 = 30;
}
