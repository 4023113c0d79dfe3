//! # Input Module
//!
//! Translates raw terminal key events into game inputs.

use crate::game::Direction;
use crate::GameResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// A single player input, already decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one step in a cardinal direction
    Move(Direction),
    /// Quit the game
    Quit,
}

/// Maps a key code to a player input, if it is bound to one.
///
/// WASD and the arrow keys move; `q` and Escape quit. Everything else
/// is ignored.
pub fn map_key(code: KeyCode) -> Option<PlayerInput> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            Some(PlayerInput::Move(Direction::North))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(PlayerInput::Move(Direction::South))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(PlayerInput::Move(Direction::West))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(PlayerInput::Move(Direction::East))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(PlayerInput::Quit),
        _ => None,
    }
}

/// Blocks until a bound key is pressed and returns its input.
pub fn read_input() -> GameResult<PlayerInput> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(input) = map_key(key.code) {
                return Ok(input);
            }
        }
    }
}

/// Blocks until any key is pressed. Used by the "press any key" screens.
pub fn wait_for_key() -> GameResult<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
