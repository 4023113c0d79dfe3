//! # Rendering Module
//!
//! Terminal rendering using crossterm.
//!
//! The display only reads the engine's public state; it never mutates
//! game data. All drawing goes through [`ConsoleDisplay`].

pub mod display;

pub use display::*;
