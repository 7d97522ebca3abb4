//! Ping Pong - a deterministic two-player Pong match simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, scoring, match state)
//! - `flash`: Background color flash effect for score events
//! - `scoreboard`: Text scoreboard and win banner

pub mod flash;
pub mod scoreboard;
pub mod sim;

pub use flash::BackgroundFlash;
pub use scoreboard::Scoreboard;
pub use sim::{BallSimulation, CollisionEvent, MatchConfig, Player};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Court dimensions (world units, origin at center)
    pub const COURT_HALF_WIDTH: f32 = 8.0;
    pub const COURT_HALF_HEIGHT: f32 = 4.5;
    /// Distance of each paddle face from the center line
    pub const PADDLE_X: f32 = 7.0;

    /// Paddle defaults
    pub const PADDLE_HALF_HEIGHT: f32 = 1.0;
    /// Floor for the half-height used in bounce steering, keeps the
    /// contact-offset division sane for degenerate paddles
    pub const PADDLE_HALF_HEIGHT_MIN: f32 = 0.5;
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.25;
    pub const BALL_BASE_SPEED: f32 = 8.0;

    /// Match defaults
    pub const WIN_SCORE: u32 = 5;
    /// Pause between a score and the next serve (seconds)
    pub const SERVE_DELAY: f32 = 0.9;
    /// Vertical spread of a serve relative to its horizontal component
    pub const SERVE_MAX_Y: f32 = 0.7;

    /// Squared-magnitude threshold below which a velocity counts as stalled
    pub const STALL_EPSILON_SQ: f32 = 1e-4;
    /// Minimum horizontal share of a reflected direction
    pub const MIN_BOUNCE_X: f32 = 0.05;
    /// Horizontal nudge applied when a bounce comes out nearly vertical
    pub const BOUNCE_X_NUDGE: f32 = 0.1;
}

/// Normalize a direction, falling back when the input is degenerate
///
/// Near-zero vectors normalize to the fallback instead of NaN.
#[inline]
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    if v.length_squared() < consts::STALL_EPSILON_SQ {
        fallback.normalize()
    } else {
        v.normalize()
    }
}
