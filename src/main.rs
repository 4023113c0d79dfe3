//! # Mazebound Main Entry Point
//!
//! Parses the CLI, sets up logging and the terminal display, and runs
//! the game loop against the engine's public API.

use clap::Parser;
use log::info;
use mazebound::{
    input, Combatant, ConsoleDisplay, GameEngine, GamePhase, GameResult, GenerationConfig,
    PlayerInput,
};

/// Command line arguments for Mazebound.
#[derive(Parser, Debug)]
#[command(name = "mazebound")]
#[command(about = "A turn-based console maze adventure")]
#[command(version)]
struct Args {
    /// Random seed for maze generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maze size (square), in tiles
    #[arg(long, default_value_t = mazebound::config::DEFAULT_MAZE_SIZE)]
    size: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> GameResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level),
    )
    .init();

    info!("Starting Mazebound v{}", mazebound::VERSION);

    let config = GenerationConfig {
        seed: args.seed,
        ..GenerationConfig::new(args.size)
    };
    let mut engine = GameEngine::new(&config);

    let mut display = ConsoleDisplay::new()?;
    run_game_loop(&mut engine, &mut display)
}

/// Main game loop: render, read a key, step the engine, and hand off to
/// the battle loop whenever a move opens combat.
fn run_game_loop(engine: &mut GameEngine, display: &mut ConsoleDisplay) -> GameResult<()> {
    display.intro_screen()?;
    input::wait_for_key()?;

    let mut message = String::new();

    while !engine.is_game_over() {
        display.draw_game(engine, &message)?;

        match input::read_input()? {
            PlayerInput::Quit => {
                info!("player quit");
                return Ok(());
            }
            PlayerInput::Move(direction) => {
                let (dx, dy) = direction.delta();
                message = engine.move_player(dx, dy);
            }
        }

        if engine.phase() == GamePhase::InCombat {
            run_battle(engine, display)?;
            message.clear();
        }
    }

    display.end_screen(engine)?;
    input::wait_for_key()?;
    Ok(())
}

/// Battle loop: one combat turn per keypress until the encounter
/// resolves, then the outcome banner.
fn run_battle(engine: &mut GameEngine, display: &mut ConsoleDisplay) -> GameResult<()> {
    display.battle_intro(engine)?;
    input::wait_for_key()?;

    let mut turn = 1;
    while engine.phase() == GamePhase::InCombat {
        let log = engine.execute_combat_turn();
        display.battle_turn(engine, turn, &log)?;

        if engine.phase() == GamePhase::InCombat {
            display.next_turn_prompt()?;
            input::wait_for_key()?;
            turn += 1;
        }
    }

    display.battle_result(engine.player().is_alive())?;
    input::wait_for_key()?;
    Ok(())
}
