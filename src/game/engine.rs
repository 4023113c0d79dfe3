//! # Game Engine
//!
//! The game-state engine: owns the maze, the player, and the current
//! encounter, and drives the movement and combat state machines.
//!
//! The engine is an explicitly constructed instance held by the host
//! process for one game session. Its two mutating operations,
//! [`GameEngine::move_player`] and [`GameEngine::execute_combat_turn`],
//! fully resolve before returning, so the presentation layer always sees
//! a stable, renderable state. Invalid inputs (wall bumps, combat calls
//! with no encounter) are expected and answered with sentinel messages,
//! never errors.

use crate::game::{Combatant, Monster, Player, Position, Weapon};
use crate::generation::{create_rng, GenerationConfig, Maze, TileType};
use crate::{GameError, GameResult, Potion};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Returned when movement is attempted after the game has ended.
pub const GAME_OVER_MESSAGE: &str = "Game is over!";

/// Returned when the player walks into a wall.
pub const WALL_MESSAGE: &str = "You walk into a wall. The wall wins.";

/// Returned when the player reaches the exit.
pub const VICTORY_MESSAGE: &str = "The maze releases its grip. You step into daylight, free.";

/// Returned by [`GameEngine::execute_combat_turn`] with no live encounter.
pub const NO_BATTLE_MESSAGE: &str = "No active battle!";

/// The phase the game session is currently in.
///
/// `Exploring` is the initial phase; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The player is walking the maze
    Exploring,
    /// A monster encounter is being fought
    InCombat,
    /// The session has ended, in victory or defeat
    GameOver { player_won: bool },
}

/// The game engine for one session.
///
/// # Examples
///
/// ```
/// use mazebound::{GameEngine, GamePhase, GenerationConfig, Position};
///
/// let config = GenerationConfig::with_seed(21, 42);
/// let engine = GameEngine::new(&config);
///
/// assert_eq!(engine.phase(), GamePhase::Exploring);
/// assert_eq!(engine.player().position, Position::new(1, 1));
/// assert!(!engine.is_game_over());
/// ```
#[derive(Debug)]
pub struct GameEngine {
    maze: Maze,
    player: Player,
    current_monster: Option<Monster>,
    monster_types: Vec<Monster>,
    weapon_types: Vec<Weapon>,
    phase: GamePhase,
    rng: StdRng,
}

impl GameEngine {
    /// Starts a new game session: generates a maze from the config and
    /// places the player at the start cell.
    pub fn new(config: &GenerationConfig) -> Self {
        let maze = Maze::generate(config);
        Self::build(maze, Monster::roster(), Weapon::armory(), config.seed)
    }

    /// Starts a session on a pre-built maze with the default rosters.
    ///
    /// Useful for hosts or tests that construct the maze themselves.
    pub fn with_maze(maze: Maze, seed: Option<u64>) -> Self {
        Self::build(maze, Monster::roster(), Weapon::armory(), seed)
    }

    /// Starts a session on a pre-built maze with custom template rosters.
    ///
    /// Fails if either roster is empty, since encounters and pickups draw
    /// from them.
    pub fn with_rosters(
        maze: Maze,
        monster_types: Vec<Monster>,
        weapon_types: Vec<Weapon>,
        seed: Option<u64>,
    ) -> GameResult<Self> {
        if monster_types.is_empty() || weapon_types.is_empty() {
            return Err(GameError::InvalidState(
                "monster and weapon rosters must not be empty".to_string(),
            ));
        }
        Ok(Self::build(maze, monster_types, weapon_types, seed))
    }

    fn build(
        maze: Maze,
        monster_types: Vec<Monster>,
        weapon_types: Vec<Weapon>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            maze,
            player: Player::new(Position::new(1, 1)),
            current_monster: None,
            monster_types,
            weapon_types,
            phase: GamePhase::Exploring,
            rng: create_rng(seed),
        }
    }

    /// The maze being played.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The player character.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The monster currently being fought, if any.
    pub fn current_monster(&self) -> Option<&Monster> {
        self.current_monster.as_ref()
    }

    /// The current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the session has ended.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Whether the player won. False while the session is in progress.
    pub fn player_won(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { player_won: true })
    }

    /// Attempts to move the player by one step and resolves whatever is
    /// on the destination tile.
    ///
    /// Returns a human-readable message describing what happened; an
    /// empty string means an uneventful step. Moving into a wall or out
    /// of bounds changes nothing. Stepping onto an entity tile triggers
    /// it: exits end the game, monsters open combat, weapons and potions
    /// are picked up and their tiles cleared.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> String {
        if self.is_game_over() {
            return GAME_OVER_MESSAGE.to_string();
        }

        let target = self.player.position.offset(dx, dy);
        if !self.maze.is_walkable(target.x, target.y) {
            return WALL_MESSAGE.to_string();
        }

        self.player.position = target;

        match self.maze.tile(target.x, target.y) {
            TileType::Exit => {
                info!("player reached the exit");
                self.phase = GamePhase::GameOver { player_won: true };
                VICTORY_MESSAGE.to_string()
            }
            TileType::Monster => {
                let monster = self.spawn_monster();
                let announcement = format!("A wild {} appears!", monster.name());
                debug!("encounter with {} at {:?}", monster.name(), target);
                self.current_monster = Some(monster);
                self.phase = GamePhase::InCombat;
                announcement
            }
            TileType::Weapon => {
                let weapon = self.draw_weapon();
                let message = weapon.pickup_message();
                debug!("picked up {} at {:?}", weapon.name(), target);
                self.player.add_weapon(weapon);
                self.maze.set_tile(target.x, target.y, TileType::Empty);
                message
            }
            TileType::Potion => {
                let potion = Potion::new();
                self.player.use_potion(&potion);
                self.maze.set_tile(target.x, target.y, TileType::Empty);
                potion.pickup_message()
            }
            TileType::Empty | TileType::Wall => String::new(),
        }
    }

    /// Runs one full combat round and returns its log lines.
    ///
    /// The player always strikes first. If the blow kills the monster,
    /// the encounter ends immediately with no retaliation: the monster's
    /// tile is cleared and the game returns to exploring. Otherwise the
    /// monster strikes back, and the session ends in defeat if that blow
    /// drops the player to zero.
    pub fn execute_combat_turn(&mut self) -> Vec<String> {
        let Some(mut monster) = self.current_monster.take() else {
            return vec![NO_BATTLE_MESSAGE.to_string()];
        };
        if !monster.is_alive() {
            self.current_monster = Some(monster);
            return vec![NO_BATTLE_MESSAGE.to_string()];
        }

        let mut log = Vec::new();

        self.player.attack(&mut monster);
        log.push(format!(
            "Player attacks {} for {} damage!",
            monster.name(),
            self.player.attack_power()
        ));
        log.push(format!("{} HP: {}", monster.name(), monster.health()));

        if !monster.is_alive() {
            log.push(format!("{} is defeated!", monster.name()));
            info!("{} defeated", monster.name());
            self.maze
                .set_tile(self.player.position.x, self.player.position.y, TileType::Empty);
            self.phase = GamePhase::Exploring;
            return log;
        }

        monster.attack(&mut self.player);
        log.push(format!(
            "{} attacks Player for {} damage!",
            monster.name(),
            monster.attack_power()
        ));
        log.push(format!("Player HP: {}", self.player.health()));

        if !self.player.is_alive() {
            log.push("Player has been defeated!".to_string());
            info!("player died fighting {}", monster.name());
            self.phase = GamePhase::GameOver { player_won: false };
        }

        self.current_monster = Some(monster);
        log
    }

    /// Spawns a fresh monster copied from a random roster template.
    fn spawn_monster(&mut self) -> Monster {
        let idx = self.rng.gen_range(0..self.monster_types.len());
        self.monster_types[idx].clone()
    }

    /// Draws a fresh weapon copied from a random armory template.
    fn draw_weapon(&mut self) -> Weapon {
        let idx = self.rng.gen_range(0..self.weapon_types.len());
        self.weapon_types[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 7x7 maze that is all floor inside the border, with nothing
    /// placed. Tests paint the tiles they need.
    fn open_maze() -> Maze {
        let mut maze = Maze::new(7, 7, Some(0));
        for y in 1..6 {
            for x in 1..6 {
                maze.set_tile(x, y, TileType::Empty);
            }
        }
        maze
    }

    fn engine_with(maze: Maze) -> GameEngine {
        GameEngine::with_maze(maze, Some(0))
    }

    #[test]
    fn test_walking_into_wall_is_rejected() {
        let mut engine = engine_with(open_maze());

        let message = engine.move_player(0, -1); // border wall above start
        assert_eq!(message, WALL_MESSAGE);
        assert_eq!(engine.player().position, Position::new(1, 1));
        assert_eq!(engine.phase(), GamePhase::Exploring);
    }

    #[test]
    fn test_walking_out_of_bounds_is_rejected() {
        let mut engine = engine_with(open_maze());

        let message = engine.move_player(-5, 0);
        assert_eq!(message, WALL_MESSAGE);
        assert_eq!(engine.player().position, Position::new(1, 1));
    }

    #[test]
    fn test_empty_step_returns_no_message() {
        let mut engine = engine_with(open_maze());

        assert_eq!(engine.move_player(1, 0), "");
        assert_eq!(engine.player().position, Position::new(2, 1));
    }

    #[test]
    fn test_weapon_pickup_updates_inventory_and_tile() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Weapon);
        let mut engine = engine_with(maze);
        let base_attack = engine.player().attack_power();

        let message = engine.move_player(1, 0);
        assert!(message.contains("You found a"));
        assert_eq!(engine.player().weapons().len(), 1);
        assert_eq!(engine.maze().tile(2, 1), TileType::Empty);
        assert!(engine.player().attack_power() > base_attack);
        assert_eq!(engine.phase(), GamePhase::Exploring);
    }

    #[test]
    fn test_potion_pickup_heals_and_clears_tile() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Potion);
        let mut engine = engine_with(maze);

        let message = engine.move_player(1, 0);
        assert_eq!(message, "You found a Health Pot! +30 HP");
        assert_eq!(engine.player().health(), 150); // 120 + 30 = cap
        assert_eq!(engine.maze().tile(2, 1), TileType::Empty);
    }

    #[test]
    fn test_monster_step_opens_combat_without_clearing_tile() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Monster);
        let mut engine = engine_with(maze);

        let message = engine.move_player(1, 0);
        assert!(message.contains("appears!"));
        assert_eq!(engine.phase(), GamePhase::InCombat);
        assert!(engine.current_monster().is_some());
        // The tile stays until the monster is actually defeated
        assert_eq!(engine.maze().tile(2, 1), TileType::Monster);
    }

    #[test]
    fn test_spawned_monster_is_independent_of_template() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Monster);
        let roster = vec![Monster::new("Cave Imp", 30, 5)];
        let mut engine =
            GameEngine::with_rosters(maze, roster, Weapon::armory(), Some(0)).unwrap();

        engine.move_player(1, 0);
        engine.execute_combat_turn();

        let fought = engine.current_monster().unwrap();
        assert_eq!(fought.health(), 20);
        // A second encounter would still start from full template health
        assert_eq!(Monster::new("Cave Imp", 30, 5).health(), 30);
    }

    #[test]
    fn test_combat_turn_without_encounter() {
        let mut engine = engine_with(open_maze());
        assert_eq!(
            engine.execute_combat_turn(),
            vec![NO_BATTLE_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_dead_encounter_yields_no_battle_and_is_kept() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Monster);
        // A 0-HP template spawns an already-dead encounter
        let roster = vec![Monster::new("Hollow Husk", 0, 5)];
        let mut engine =
            GameEngine::with_rosters(maze, roster, Weapon::armory(), Some(0)).unwrap();

        engine.move_player(1, 0);
        let log = engine.execute_combat_turn();
        assert_eq!(log, vec![NO_BATTLE_MESSAGE.to_string()]);
        // The encounter stays set; only a defeat in combat clears it
        assert!(engine.current_monster().is_some());
        assert_eq!(engine.maze().tile(2, 1), TileType::Monster);

        // Repeated calls are stable
        assert_eq!(
            engine.execute_combat_turn(),
            vec![NO_BATTLE_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_lethal_strike_skips_retaliation() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Monster);
        // Player base attack is 10; this monster dies to the first blow
        let roster = vec![Monster::new("Mud Wisp", 8, 50)];
        let mut engine =
            GameEngine::with_rosters(maze, roster, Weapon::armory(), Some(0)).unwrap();

        engine.move_player(1, 0);
        let log = engine.execute_combat_turn();

        assert_eq!(log.len(), 3);
        assert!(log[0].contains("Player attacks"));
        assert_eq!(log[1], "Mud Wisp HP: 0");
        assert_eq!(log[2], "Mud Wisp is defeated!");
        assert!(!log.iter().any(|line| line.contains("attacks Player")));

        assert_eq!(engine.phase(), GamePhase::Exploring);
        assert!(engine.current_monster().is_none());
        assert_eq!(engine.maze().tile(2, 1), TileType::Empty);
        assert_eq!(engine.player().health(), 120);
    }

    #[test]
    fn test_surviving_monster_retaliates() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Monster);
        let roster = vec![Monster::new("Barrel Ogre", 48, 12)];
        let mut engine =
            GameEngine::with_rosters(maze, roster, Weapon::armory(), Some(0)).unwrap();

        engine.move_player(1, 0);
        let log = engine.execute_combat_turn();

        assert_eq!(log.len(), 4);
        assert_eq!(log[1], "Barrel Ogre HP: 38");
        assert_eq!(log[2], "Barrel Ogre attacks Player for 12 damage!");
        assert_eq!(log[3], "Player HP: 108");
        assert_eq!(engine.phase(), GamePhase::InCombat);
    }

    #[test]
    fn test_combat_attrition_kills_player() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Monster);
        // 120 HP / 60 damage per round: dead on the second turn
        let roster = vec![Monster::new("Iron Revenant", 1000, 60)];
        let mut engine =
            GameEngine::with_rosters(maze, roster, Weapon::armory(), Some(0)).unwrap();

        engine.move_player(1, 0);
        engine.execute_combat_turn();
        assert!(!engine.is_game_over());

        let log = engine.execute_combat_turn();
        assert_eq!(log.last().map(String::as_str), Some("Player has been defeated!"));
        assert!(engine.is_game_over());
        assert!(!engine.player_won());
        assert_eq!(engine.player().health(), 0);
    }

    #[test]
    fn test_reaching_exit_wins() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Exit);
        let mut engine = engine_with(maze);

        let message = engine.move_player(1, 0);
        assert_eq!(message, VICTORY_MESSAGE);
        assert!(engine.is_game_over());
        assert!(engine.player_won());
    }

    #[test]
    fn test_moves_after_game_over_are_noops() {
        let mut maze = open_maze();
        maze.set_tile(2, 1, TileType::Exit);
        let mut engine = engine_with(maze);
        engine.move_player(1, 0);

        let position = engine.player().position;
        let message = engine.move_player(1, 0);
        assert_eq!(message, GAME_OVER_MESSAGE);
        assert_eq!(engine.player().position, position);
        assert!(engine.player_won());
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let result = GameEngine::with_rosters(open_maze(), Vec::new(), Weapon::armory(), None);
        assert!(result.is_err());
    }
}
