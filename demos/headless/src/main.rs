//! headless: runs ballpit rounds without a window.
//!
//! The player is flown by a tiny autopilot that chases the nearest smaller
//! ball.  Every round runs until it is won, lost, or hits the tick limit,
//! then the arena is restarted.  Set `RUST_LOG=debug` for per-tick summaries
//! or `RUST_LOG=trace` for individual contacts and reflections.
//!
//! Usage: `headless [config.toml]`

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use bp_behavior::closest;
use bp_core::{ArenaConfig, Tick};
use bp_sim::{PlayerInput, Sim, SimBuilder, SimEvent, SimObserver, SimState};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROUNDS:          usize = 3;
const MAX_ROUND_TICKS: u64   = 20_000;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies what happened during one round.
#[derive(Default)]
struct RoundLog {
    contacts:      usize,
    master_hits:   usize,
    eliminated:    usize,
    player_shrunk: usize,
    wall_hits:     usize,
    end:           Option<(Tick, SimState)>,
}

impl SimObserver for RoundLog {
    fn on_events(&mut self, _tick: Tick, events: &[SimEvent]) {
        for event in events {
            match event {
                SimEvent::Contact { .. }       => self.contacts += 1,
                SimEvent::MasterContact { .. } => self.master_hits += 1,
                SimEvent::Eliminated(_)        => self.eliminated += 1,
                SimEvent::PlayerShrunk         => self.player_shrunk += 1,
                SimEvent::PlayerHitWall(_)     => self.wall_hits += 1,
                SimEvent::PlayerLost | SimEvent::PlayerWon => {}
            }
        }
    }

    fn on_state_change(&mut self, tick: Tick, _from: SimState, to: SimState) {
        info!(%tick, state = %to, "round ended");
        self.end = Some((tick, to));
    }
}

// ── Autopilot ─────────────────────────────────────────────────────────────────

/// Head for the nearest ball the player can eat.  With nothing edible in
/// range, keep drifting.
fn autopilot(sim: &Sim) -> Option<PlayerInput> {
    let player = sim.player()?;
    let prey = sim
        .entities()
        .iter()
        .filter(|e| e.area() < player.area() && !e.kind.is_master());
    closest(player, prey).ok().map(|e| PlayerInput::Point(e.position))
}

fn play_round(sim: &mut Sim) -> Result<RoundLog> {
    let mut log = RoundLog::default();
    while sim.state() == SimState::Running && sim.tick_count().0 < MAX_ROUND_TICKS {
        if let Some(input) = autopilot(sim) {
            sim.set_player_target(input);
        }
        sim.run_ticks(1, &mut log)?;
    }
    Ok(log)
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<ArenaConfig> {
    let Some(path) = path else {
        return Ok(ArenaConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: ArenaConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    info!(
        width = config.width,
        height = config.height,
        entities = config.entity_count,
        seed = config.seed,
        "starting headless run"
    );

    let mut sim = SimBuilder::new(config).build()?;

    println!("{:<6} {:<12} {:>8} {:>9} {:>7} {:>11} {:>7} {:>6}",
        "Round", "Result", "Ticks", "Contacts", "Master", "Eliminated", "Shrunk", "Walls");
    println!("{}", "-".repeat(74));

    let t0 = Instant::now();
    for round in 1..=ROUNDS {
        if round > 1 {
            sim.restart()?;
        }
        let log = play_round(&mut sim)?;
        let (ticks, result) = match log.end {
            Some((tick, state)) => (tick.0 + 1, state.to_string()),
            None => {
                warn!(round, limit = MAX_ROUND_TICKS, "round hit the tick limit");
                (sim.tick_count().0, "timeout".to_owned())
            }
        };
        println!("{:<6} {:<12} {:>8} {:>9} {:>7} {:>11} {:>7} {:>6}",
            round, result, ticks, log.contacts, log.master_hits,
            log.eliminated, log.player_shrunk, log.wall_hits);
    }

    info!(elapsed_s = t0.elapsed().as_secs_f64(), rounds = ROUNDS, "done");
    Ok(())
}
