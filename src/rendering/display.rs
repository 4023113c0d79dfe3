//! # Console Display
//!
//! Draws the maze, stats, and the intro/battle/end screens.

use crate::game::{Combatant, GameEngine};
use crate::generation::TileType;
use crate::GameResult;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use std::io::{Stdout, Write};

/// Terminal display for the game.
///
/// Owns the terminal session: raw mode is entered on construction and
/// restored on drop, so a panic or early return still leaves the
/// terminal usable.
pub struct ConsoleDisplay {
    stdout: Stdout,
}

/// Maps a tile to its glyph and optional color.
fn tile_glyph(tile: TileType) -> (char, Option<Color>) {
    match tile {
        TileType::Wall => ('#', None),
        TileType::Empty => (' ', None),
        TileType::Monster => ('M', Some(Color::DarkRed)),
        TileType::Weapon => ('W', Some(Color::Yellow)),
        TileType::Potion => ('P', Some(Color::Cyan)),
        TileType::Exit => ('E', Some(Color::Green)),
    }
}

impl ConsoleDisplay {
    /// Takes over the terminal: raw mode on, cursor hidden.
    pub fn new() -> GameResult<Self> {
        let mut stdout = std::io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Hide)?;
        Ok(Self { stdout })
    }

    fn clear(&mut self) -> GameResult<()> {
        queue!(self.stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    /// Prints one line. Raw mode needs explicit carriage returns.
    fn line(&mut self, text: &str) -> GameResult<()> {
        queue!(self.stdout, Print(text), Print("\r\n"))?;
        Ok(())
    }

    fn colored(&mut self, text: &str, color: Color) -> GameResult<()> {
        queue!(
            self.stdout,
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )?;
        Ok(())
    }

    fn flush(&mut self) -> GameResult<()> {
        self.stdout.flush()?;
        Ok(())
    }

    /// Shows the intro screen: goal, controls, legend, starting stats.
    pub fn intro_screen(&mut self) -> GameResult<()> {
        self.clear()?;
        self.line("Welcome to Mazebound")?;
        self.line("")?;
        self.line("You wake at the edge of a shifting maze.")?;
        self.line("Your goal: find the exit and make it out alive!")?;
        self.line("")?;
        self.line("CONTROLS:")?;
        self.line("  Use WASD or Arrow Keys to move, Q or Esc to quit")?;
        self.line("")?;
        self.line("LEGEND:")?;
        self.colored("  @ ", Color::Red)?;
        self.line("= You (Player)")?;
        self.line("  # = Wall")?;
        self.line("    = Empty Space")?;
        self.colored("  M ", Color::DarkRed)?;
        self.line("= Monster")?;
        self.colored("  W ", Color::Yellow)?;
        self.line("= Weapon")?;
        self.colored("  P ", Color::Cyan)?;
        self.line("= Potion (+30 HP)")?;
        self.colored("  E ", Color::Green)?;
        self.line("= Exit")?;
        self.line("")?;
        self.line("STATS:")?;
        self.line("  Starting HP: 120 (Max: 150)")?;
        self.line("  Base Damage: 10")?;
        self.line("")?;
        self.line("Press any key to begin...")?;
        self.flush()
    }

    /// Draws the maze grid, the player glyph, and the stats line, plus
    /// an optional event message underneath.
    pub fn draw_game(&mut self, engine: &GameEngine, message: &str) -> GameResult<()> {
        self.clear()?;
        self.draw_maze(engine)?;
        self.draw_stats(engine)?;
        if !message.is_empty() {
            self.line("")?;
            self.line(message)?;
        }
        self.flush()
    }

    fn draw_maze(&mut self, engine: &GameEngine) -> GameResult<()> {
        let maze = engine.maze();
        let player = engine.player();

        for y in 0..maze.rows() as i32 {
            for x in 0..maze.cols() as i32 {
                if x == player.position.x && y == player.position.y {
                    self.colored("@", Color::Red)?;
                    continue;
                }
                let (glyph, color) = tile_glyph(maze.tile(x, y));
                match color {
                    Some(color) => self.colored(&glyph.to_string(), color)?,
                    None => queue!(self.stdout, Print(glyph))?,
                }
            }
            queue!(self.stdout, Print("\r\n"))?;
        }
        Ok(())
    }

    fn draw_stats(&mut self, engine: &GameEngine) -> GameResult<()> {
        let player = engine.player();
        self.line("")?;
        self.line(&format!(
            "HP: {}/{} | Attack: {} | Weapons: {}",
            player.health(),
            crate::config::PLAYER_MAX_HEALTH,
            player.attack_power(),
            player.weapons().len()
        ))
    }

    /// Announces a freshly started battle.
    pub fn battle_intro(&mut self, engine: &GameEngine) -> GameResult<()> {
        self.clear()?;
        self.draw_maze(engine)?;
        self.line("")?;
        if let Some(monster) = engine.current_monster() {
            self.line(&format!("=== BATTLE: {} ===", monster.name()))?;
            self.line(&format!(
                "Monster HP: {} | Attack: {}",
                monster.health(),
                monster.attack_power()
            ))?;
        }
        self.line("")?;
        self.line("Press any key to fight...")?;
        self.flush()
    }

    /// Draws the log of one combat turn.
    pub fn battle_turn(&mut self, engine: &GameEngine, turn: u32, log: &[String]) -> GameResult<()> {
        self.clear()?;
        self.draw_maze(engine)?;
        self.line("")?;
        self.line(&format!("=== TURN {turn} ==="))?;
        for entry in log {
            self.line(entry)?;
        }
        self.flush()
    }

    /// Shows the battle outcome and waits for acknowledgement upstream.
    pub fn battle_result(&mut self, player_survived: bool) -> GameResult<()> {
        self.line("")?;
        if player_survived {
            self.line("Victory! You defeated the monster!")?;
        } else {
            self.line("You have been slain...")?;
        }
        self.line("Press any key to continue...")?;
        self.flush()
    }

    /// Prompt between combat turns.
    pub fn next_turn_prompt(&mut self) -> GameResult<()> {
        self.line("")?;
        self.line("Press any key for next turn...")?;
        self.flush()
    }

    /// Shows the end screen with the final stats.
    pub fn end_screen(&mut self, engine: &GameEngine) -> GameResult<()> {
        self.clear()?;

        if engine.player_won() {
            self.line("YOU ESCAPED THE MAZE!")?;
            self.line("")?;
            self.line("Daylight, fresh air, and a bag full of stolen weapons.")?;
            self.line("Congratulations!")?;
        } else {
            self.line("THE MAZE KEEPS YOU")?;
            self.line("")?;
            self.line("You have been defeated.")?;
            self.line("Better luck next time!")?;
        }

        let player = engine.player();
        self.line("")?;
        self.line("Final Stats:")?;
        self.line(&format!("  HP Remaining: {}", player.health()))?;
        self.line(&format!("  Final Attack Power: {}", player.attack_power()))?;
        self.line(&format!("  Weapons Collected: {}", player.weapons().len()))?;
        self.line("")?;
        self.line("Press any key to exit...")?;
        self.flush()
    }
}

impl Drop for ConsoleDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
    }
}
