//! Match state and core simulation types
//!
//! Pure data. All mutation happens through [`super::BallSimulation`] and the
//! frame driver in [`super::tick`], on a single thread, at a fixed timestep.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Defends the left wall, scores on the right wall
    One,
    /// Defends the right wall, scores on the left wall
    Two,
}

impl Player {
    /// Display name used by the scoreboard
    pub fn label(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (including the pause before a serve)
    Playing,
    /// A player reached the win score; only `restart()` leaves this phase
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Park the ball at center with no velocity, waiting for a serve
    pub fn recenter(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::ZERO;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Vertical center position
    pub y: f32,
    pub half_height: f32,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            y: 0.0,
            half_height: PADDLE_HALF_HEIGHT,
        }
    }

    /// Move vertically by an input axis in [-1, 1], clamped to the court
    ///
    /// The clamp limits come from the inner faces of the top/bottom walls,
    /// so the paddle never tunnels out of the court.
    pub fn apply_axis(&mut self, axis: f32, speed: f32, dt: f32) {
        let axis = axis.clamp(-1.0, 1.0);
        let limit = COURT_HALF_HEIGHT - self.half_height;
        self.y = (self.y + axis * speed * dt).clamp(-limit, limit);
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Player 1's score
    pub score1: u32,
    /// Player 2's score
    pub score2: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Seconds remaining until the pending serve launches, if one is
    /// scheduled
    pub pending_serve: Option<f32>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The ball
    pub ball: Ball,
    /// Player 1's paddle (left side)
    pub paddle1: Paddle,
    /// Player 2's paddle (right side)
    pub paddle2: Paddle,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            score1: 0,
            score2: 0,
            phase: GamePhase::Playing,
            pending_serve: None,
            time_ticks: 0,
            ball: Ball::new(),
            paddle1: Paddle::new(),
            paddle2: Paddle::new(),
        }
    }

    /// Score of the given player
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.score1,
            Player::Two => self.score2,
        }
    }

    /// Award a point; scores only ever grow here
    pub fn award_point(&mut self, player: Player) {
        match player {
            Player::One => self.score1 += 1,
            Player::Two => self.score2 += 1,
        }
    }

    /// Whether the ball is live (playing, not waiting on a serve)
    pub fn ball_in_play(&self) -> bool {
        self.phase == GamePhase::Playing && self.pending_serve.is_none()
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
