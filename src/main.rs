//! Ping Pong entry point
//!
//! Runs a headless demo match: both paddles are driven by a simple
//! ball-chasing AI and the match plays out to the win banner. Useful for
//! smoke-testing the simulation and for deterministic replays by seed.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use ping_pong::consts::*;
use ping_pong::flash::BackgroundFlash;
use ping_pong::scoreboard::Scoreboard;
use ping_pong::sim::{
    BallSimulation, Court, FlashConfig, GamePhase, MatchConfig, TickInput, tick,
};

/// Cap on simulated match length (seconds), in case tuning ever produces
/// an endless rally
const MAX_MATCH_SECS: f32 = 600.0;

struct Args {
    seed: u64,
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 0,
        config_path: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = iter.next() {
                    args.seed = v.parse().unwrap_or_else(|_| {
                        log::warn!("invalid seed {v:?}, using 0");
                        0
                    });
                }
            }
            "--config" => args.config_path = iter.next(),
            other => log::warn!("ignoring unknown argument {other:?}"),
        }
    }
    args
}

/// Load match tunables from a JSON file, falling back to defaults
fn load_config(path: Option<&str>) -> MatchConfig {
    let Some(path) = path else {
        return MatchConfig::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(config) => {
                log::info!("loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("bad config {path}: {err}, using defaults");
                MatchConfig::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {path}: {err}, using defaults");
            MatchConfig::default()
        }
    }
}

/// Chase the ball's height, with a small deadzone so the paddle doesn't
/// jitter in place
fn chase(paddle_y: f32, target_y: f32) -> f32 {
    let delta = target_y - paddle_y;
    if delta.abs() < 0.1 { 0.0 } else { delta.signum() }
}

fn main() {
    env_logger::init();
    let args = parse_args();
    let config = load_config(args.config_path.as_deref());

    let board = Rc::new(RefCell::new(Scoreboard::new()));
    let flash = Rc::new(RefCell::new(BackgroundFlash::new(
        Vec3::new(0.1, 0.1, 0.12),
        FlashConfig::default(),
    )));

    let mut sim = BallSimulation::new(
        config,
        args.seed,
        Some(Box::new(board.clone())),
        Some(Box::new(flash.clone())),
    );
    let court = Court::default();

    log::info!("seed {}", args.seed);
    sim.start_match();

    let mut last_line = board.borrow().score_line().to_string();
    let max_ticks = (MAX_MATCH_SECS / SIM_DT) as u64;

    for _ in 0..max_ticks {
        let state = sim.state();
        // Player 2 reacts at reduced speed so rallies eventually break
        let input = TickInput {
            axis1: chase(state.paddle1.y, state.ball.pos.y),
            axis2: chase(state.paddle2.y, state.ball.pos.y) * 0.4,
            restart: false,
        };
        tick(&mut sim, &court, &input, SIM_DT);
        flash.borrow_mut().tick(SIM_DT);

        let line = board.borrow().score_line().to_string();
        if line != last_line {
            log::info!("score {line}");
            last_line = line;
        }

        if sim.state().phase == GamePhase::GameOver {
            break;
        }
    }

    match board.borrow().banner() {
        Some(banner) => println!("{banner}  (final score {last_line})"),
        None => println!("time limit reached at {last_line}"),
    }
}
