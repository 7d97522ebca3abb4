//! The ball simulation: collision response, scoring, serve cycle, and the
//! win state machine
//!
//! `BallSimulation` receives its display/flash collaborators at
//! construction. A missing collaborator is logged and ignored; nothing in
//! this component can fail fatally.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{ColliderKind, CollisionEvent, paddle_bounce, surface_bounce};
use super::config::MatchConfig;
use super::state::{GamePhase, MatchState, Player};
use crate::consts::*;

/// Score/banner display collaborator
pub trait ScoreDisplay {
    /// Scores changed; render as "{score1} : {score2}"
    fn on_score_changed(&mut self, score1: u32, score2: u32);
    /// The match ended; show a win banner for the given player
    fn on_game_over(&mut self, winner: Player);
    /// The match restarted; clear the banner
    fn on_match_restarted(&mut self);
}

/// Flash-effect collaborator, fired when a player scores
///
/// Drives an independent visual effect. Failures on this side must never
/// touch simulation state.
pub trait FlashEffect {
    fn on_player_scored(&mut self, player: Player);
}

/// Owns ball velocity behavior, score counters, and the game-over state
pub struct BallSimulation {
    config: MatchConfig,
    state: MatchState,
    rng: Pcg32,
    display: Option<Box<dyn ScoreDisplay>>,
    flash: Option<Box<dyn FlashEffect>>,
}

impl BallSimulation {
    /// Create a simulation with its collaborators injected
    ///
    /// The seed fixes every serve direction, so a match replays
    /// identically from the same seed and inputs.
    pub fn new(
        config: MatchConfig,
        seed: u64,
        display: Option<Box<dyn ScoreDisplay>>,
        flash: Option<Box<dyn FlashEffect>>,
    ) -> Self {
        if display.is_none() {
            log::warn!("no score display attached; score updates will be dropped");
        }
        if flash.is_none() {
            log::warn!("no flash effect attached; score flashes will be dropped");
        }
        Self {
            config,
            state: MatchState::new(),
            rng: Pcg32::seed_from_u64(seed),
            display,
            flash,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable state access for the frame driver (paddle movement,
    /// integration, penetration correction)
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Begin a fresh match: zero scores, center ball, schedule the first
    /// serve
    pub fn start_match(&mut self) {
        self.state = MatchState::new();
        self.emit_score();
        self.schedule_serve();
        log::info!("match started, first to {} wins", self.config.win_score);
    }

    /// Force the match back to play: zero scores, clear the banner,
    /// recenter and reschedule the serve
    ///
    /// Cancels any pending serve first, so a stale launch can never
    /// overwrite the fresh reset.
    pub fn restart(&mut self) {
        self.state.pending_serve = None;
        self.state.phase = GamePhase::Playing;
        self.state.score1 = 0;
        self.state.score2 = 0;
        if let Some(display) = &mut self.display {
            display.on_match_restarted();
        }
        self.emit_score();
        self.schedule_serve();
        log::info!("match restarted");
    }

    /// Advance the serve timer and run the stall guard
    ///
    /// No-op once the match is over.
    pub fn tick(&mut self, dt: f32) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        self.state.time_ticks += 1;

        if let Some(remaining) = self.state.pending_serve {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.state.pending_serve = None;
                self.launch();
            } else {
                self.state.pending_serve = Some(remaining);
            }
            return;
        }

        // Stall guard: a velocity this small would freeze the rally forever
        let ball = &mut self.state.ball;
        if ball.vel.length_squared() < STALL_EPSILON_SQ {
            let x = if ball.pos.x >= 0.0 { -1.0 } else { 1.0 };
            ball.vel = Vec2::new(x, 0.2).normalize() * self.config.base_speed;
            log::debug!("stall guard relaunched the ball at {}", ball.pos);
        }
    }

    /// React to a single contact, dispatched by collider category
    ///
    /// Scoring walls end the rally with no bounce. Paddles steer by
    /// contact offset. Everything else reflects about the contact normal.
    pub fn on_collision(&mut self, event: &CollisionEvent) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        match event.collider {
            ColliderKind::LeftWall => self.score_for(Player::Two),
            ColliderKind::RightWall => self.score_for(Player::One),
            ColliderKind::Paddle {
                center_y,
                half_height,
            } => {
                let ball = &mut self.state.ball;
                ball.vel = paddle_bounce(
                    ball.vel,
                    ball.pos.y,
                    center_y,
                    half_height,
                    self.config.base_speed,
                );
            }
            ColliderKind::Surface => {
                if event.contacts == 0 {
                    return;
                }
                let ball = &mut self.state.ball;
                ball.vel = surface_bounce(ball.vel, event.normal, self.config.base_speed);
            }
        }
    }

    fn score_for(&mut self, player: Player) {
        self.state.award_point(player);
        self.emit_score();
        if let Some(flash) = &mut self.flash {
            flash.on_player_scored(player);
        }
        log::debug!(
            "{} scored, {}:{}",
            player.label(),
            self.state.score1,
            self.state.score2
        );

        if self.state.score(player) >= self.config.win_score {
            self.state.phase = GamePhase::GameOver;
            self.state.pending_serve = None;
            if let Some(display) = &mut self.display {
                display.on_game_over(player);
            }
            log::info!(
                "{} wins {}:{}",
                player.label(),
                self.state.score1,
                self.state.score2
            );
        } else {
            self.schedule_serve();
        }
    }

    /// Park the ball at center and schedule a relaunch after the settle
    /// delay, replacing any pending serve
    fn schedule_serve(&mut self) {
        self.state.ball.recenter();
        self.state.pending_serve = Some(self.config.serve_delay);
    }

    /// Serve toward a random side with a bounded random vertical component
    fn launch(&mut self) {
        let x: f32 = if self.rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let y: f32 = self.rng.random_range(-SERVE_MAX_Y..=SERVE_MAX_Y);
        self.state.ball.vel = Vec2::new(x, y).normalize() * self.config.base_speed;
    }

    fn emit_score(&mut self) {
        if let Some(display) = &mut self.display {
            display.on_score_changed(self.state.score1, self.state.score2);
        }
    }
}
