//! Replay a scripted game from a JSON list of actions.
//!
//! ```bash
//! replay game.json
//! replay game.json --config variant.json --state saved.json --json
//! ```
//!
//! Script format: `[{"type":"place","kind":"fu","at":[6,4]}, {"type":"move","from":[6,4],"to":[5,4]}]`.
//! Rejected actions are reported and skipped. Replay stops once someone wins.
//! The exit status is non-zero only when an input file cannot be read, parsed
//! or validated.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use shogi_gomoku::{
    logging, Action, ActionResult, Engine, GameConfig, GameState, Player, RuleError, RulesEngine,
};

#[derive(Debug, Parser)]
#[command(name = "replay", about = "Replay a scripted shogi-gomoku game")]
struct Args {
    /// JSON file holding an array of actions.
    script: PathBuf,

    /// JSON game configuration. Missing fields use the standard rules.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON game state to start from instead of a fresh game.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Print one `{success, message, newState}` object per action instead of boards.
    #[arg(long)]
    json: bool,
}

/// One scripted action and the engine's answer.
#[derive(Debug)]
struct Step {
    turn: usize,
    player: Player,
    action: Action,
    result: Result<GameState, RuleError>,
}

/// Everything a replay produced.
#[derive(Debug)]
struct Replay {
    steps: Vec<Step>,
    /// Last accepted snapshot.
    state: GameState,
    /// Actions left unapplied because the game had ended.
    skipped: usize,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let engine = load_engine(args.config.as_deref())?;
    let start = match &args.state {
        Some(path) => load_state(&engine, path)?,
        None => engine.initial_state(),
    };
    let actions: Vec<Action> = load_json(&args.script)?;
    info!(count = actions.len(), script = %args.script.display(), "replaying");

    let replay = run(&engine, start, &actions);
    for step in &replay.steps {
        println!("{}", render_step(step, args.json)?);
    }
    if replay.skipped > 0 {
        warn!(remaining = replay.skipped, "game over; ignoring remaining actions");
    }

    if !args.json {
        print_summary(&replay.state);
    }
    Ok(())
}

/// Apply `actions` in order from `start`, skipping rejected ones.
fn run(engine: &Engine, start: GameState, actions: &[Action]) -> Replay {
    let mut state = start;
    let mut steps = Vec::with_capacity(actions.len());

    for (turn, action) in actions.iter().enumerate() {
        if engine.is_terminal(&state).is_some() {
            return Replay {
                steps,
                state,
                skipped: actions.len() - turn,
            };
        }

        let player = state.current_player;
        let result = engine.apply(&state, action);
        if let Ok(next) = &result {
            state = next.clone();
        }
        steps.push(Step {
            turn: turn + 1,
            player,
            action: *action,
            result,
        });
    }

    Replay {
        steps,
        state,
        skipped: 0,
    }
}

fn render_step(step: &Step, json: bool) -> Result<String> {
    if json {
        let outcome = ActionResult::from(step.result.clone());
        return Ok(serde_json::to_string(&outcome)?);
    }
    let header = format!("#{} {}: {}", step.turn, step.player, step.action);
    Ok(match &step.result {
        Ok(next) => format!("{header}\n{}", next.board),
        Err(error) => format!("{header} rejected: {error}"),
    })
}

fn print_summary(state: &GameState) {
    match state.winner {
        Some(winner) => println!("{winner} wins"),
        None => println!("no winner yet; {} to move", state.current_player),
    }
    for (player, hand) in state.hands.iter() {
        let held: Vec<String> = hand
            .available()
            .map(|kind| format!("{}x{}", kind.symbol(), hand.count(kind)))
            .collect();
        println!("{player} hand: {}", held.join(" "));
    }
}

fn load_engine(config: Option<&Path>) -> Result<Engine> {
    let config = match config {
        Some(path) => load_json::<GameConfig>(path)?,
        None => GameConfig::default(),
    };
    Engine::new(config).context("invalid game configuration")
}

fn load_state(engine: &Engine, path: &Path) -> Result<GameState> {
    let state: GameState = load_json(path)?;
    engine
        .check_state(&state)
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(state)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
