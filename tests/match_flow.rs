//! Full match flow: serve, score, win banner, restart

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use ping_pong::consts::*;
use ping_pong::flash::BackgroundFlash;
use ping_pong::scoreboard::Scoreboard;
use ping_pong::sim::{
    BallSimulation, ColliderKind, CollisionEvent, Court, FlashConfig, GamePhase, MatchConfig,
    TickInput, tick,
};

fn right_wall_hit() -> CollisionEvent {
    CollisionEvent::new(
        Vec2::new(COURT_HALF_WIDTH, 0.0),
        Vec2::new(-1.0, 0.0),
        ColliderKind::RightWall,
    )
}

fn wait_for_serve(sim: &mut BallSimulation) {
    while sim.state().pending_serve.is_some() {
        sim.tick(SIM_DT);
    }
}

#[test]
fn player_one_runs_the_table() {
    let board = Rc::new(RefCell::new(Scoreboard::new()));
    let flash = Rc::new(RefCell::new(BackgroundFlash::new(
        Vec3::ZERO,
        FlashConfig::default(),
    )));
    let mut sim = BallSimulation::new(
        MatchConfig::default(),
        11,
        Some(Box::new(board.clone())),
        Some(Box::new(flash.clone())),
    );

    sim.start_match();
    assert_eq!(board.borrow().score_line(), "0 : 0");
    assert_eq!(sim.state().phase, GamePhase::Playing);

    wait_for_serve(&mut sim);
    sim.on_collision(&right_wall_hit());
    assert_eq!(board.borrow().score_line(), "1 : 0");
    assert_eq!(sim.state().phase, GamePhase::Playing);
    assert!(flash.borrow().is_active());

    for _ in 1..WIN_SCORE {
        wait_for_serve(&mut sim);
        sim.on_collision(&right_wall_hit());
    }

    assert_eq!(sim.state().phase, GamePhase::GameOver);
    assert_eq!(board.borrow().score_line(), "5 : 0");
    assert_eq!(board.borrow().banner(), Some("Player 1 Wins!"));

    // No further velocity changes are accepted
    let vel = sim.state().ball.vel;
    sim.on_collision(&right_wall_hit());
    sim.tick(SIM_DT);
    assert_eq!(sim.state().ball.vel, vel);
    assert_eq!(board.borrow().score_line(), "5 : 0");

    sim.restart();
    assert_eq!(board.borrow().score_line(), "0 : 0");
    assert!(board.borrow().banner().is_none());
    assert_eq!(sim.state().phase, GamePhase::Playing);
}

#[test]
fn driven_match_stays_inside_the_court() {
    let mut sim = BallSimulation::new(MatchConfig::default(), 5, None, None);
    let court = Court::default();
    sim.start_match();

    // Ten seconds of play with idle paddles: the ball must stay inside
    // the court and keep its speed floor whenever it is live
    for _ in 0..(10.0 / SIM_DT) as u32 {
        tick(&mut sim, &court, &TickInput::default(), SIM_DT);
        let state = sim.state();
        assert!(state.ball.pos.x.abs() <= COURT_HALF_WIDTH + 1e-3);
        assert!(state.ball.pos.y.abs() <= COURT_HALF_HEIGHT + 1e-3);
        if state.ball_in_play() {
            assert!(state.ball.vel.length() >= BALL_BASE_SPEED - 1e-3);
        }
    }
}
