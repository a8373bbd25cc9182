//! Headless simulation runner (default binary).
//!
//! Drives the rule engine with a scripted player at the configured frame rate
//! and prints the final board.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tetris_rule::core::{Settings, SettingsPatch};
use tetris_rule::engine::{make_world, render_text, step_world, Env, InputSnapshot, World};
use tetris_rule::types::Action;

const DEFAULT_TICKS: u64 = 60 * 60;
/// Gravity speeds up by this factor every ten cleared lines.
const SPEEDUP: f64 = 0.85;
const MIN_DROP_RATE: f64 = 0.05;

/// Headless falling-block simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON settings file; defaults to a 10x20 grid at 60 fps
    settings: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(default_value_t = DEFAULT_TICKS)]
    ticks: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tetris_rule::logging::init(args.verbose);

    let mut settings = match &args.settings {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            Settings::from_json(&json)
                .with_context(|| format!("parsing settings in {}", path.display()))?
        }
        None => Settings::default(),
    };
    let ticks = args.ticks;

    let mut world = make_world(&settings).context("building world")?;
    info!(
        "running {} ticks on a {}x{} grid (seed {})",
        ticks, settings.columns, settings.rows, settings.seed
    );

    run(&mut world, &mut settings, ticks)?;

    println!("{}", render_text(&world));
    info!(
        "{} ticks, {} pieces, {} lines, game over: {}",
        world.tick_count(),
        world.pieces_spawned(),
        world.lines_cleared(),
        world.is_gameover()
    );
    Ok(())
}

fn run(world: &mut World, settings: &mut Settings, ticks: u64) -> Result<()> {
    let pending: RefCell<Vec<SettingsPatch>> = RefCell::new(Vec::new());
    let queue = |patch: SettingsPatch| pending.borrow_mut().push(patch);
    let mut player = ScriptedPlayer::default();

    for _ in 0..ticks {
        if world.is_gameover() {
            break;
        }
        let input = player.next_input(world);
        {
            let env = Env::new(&input, settings, settings.frame_dt()).with_patch_queue(&queue);
            let lines_before = world.lines_cleared();
            let tick = step_world(world, &env);
            if tick.rows_cleared > 0 && world.lines_cleared() / 10 > lines_before / 10 {
                env.queue_setting_update(SettingsPatch {
                    drop_rate: Some((settings.drop_rate * SPEEDUP).max(MIN_DROP_RATE)),
                    ..SettingsPatch::default()
                });
            }
        }

        for patch in pending.borrow_mut().drain(..) {
            settings
                .apply_patch(&patch)
                .context("applying queued settings patch")?;
            info!("drop rate now {:.3}s per cell", settings.drop_rate);
        }
    }
    Ok(())
}

/// Rotates each new piece a few times, walks it sideways, then hard-drops it.
/// The plan is a pure function of the spawn count so runs stay reproducible.
#[derive(Debug, Default)]
struct ScriptedPlayer {
    piece: u32,
    step: u32,
}

impl ScriptedPlayer {
    fn next_input(&mut self, world: &World) -> InputSnapshot {
        if world.pieces_spawned() != self.piece {
            self.piece = world.pieces_spawned();
            self.step = 0;
        }
        let rotations = self.piece % 4;
        let shift = (self.piece % 9) as i32 - 4;
        let step = self.step;
        self.step += 1;

        let action = if step < rotations {
            Action::RotateCw
        } else if step < rotations + shift.unsigned_abs() {
            if shift < 0 {
                Action::MoveLeft
            } else {
                Action::MoveRight
            }
        } else {
            Action::HardDrop
        };
        InputSnapshot::from_actions([action])
    }
}
