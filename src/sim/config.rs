//! Immutable match configuration
//!
//! Everything tunable is enumerated here, handed to the simulation at
//! construction, and never mutated at runtime.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunables for a single match
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Speed the ball is served at, and the floor every bounce is held to
    pub base_speed: f32,
    /// First player to reach this score wins
    pub win_score: u32,
    /// Pause between a score and the relaunch (seconds)
    pub serve_delay: f32,
    /// Vertical paddle speed (units per second)
    pub paddle_speed: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            base_speed: BALL_BASE_SPEED,
            win_score: WIN_SCORE,
            serve_delay: SERVE_DELAY,
            paddle_speed: PADDLE_SPEED,
        }
    }
}

/// Tunables for the background flash effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlashConfig {
    /// Ramp from base color to the player color (seconds)
    pub flash_time: f32,
    /// Fade from the player color back to base (seconds)
    pub settle_time: f32,
    /// Flash color when player 1 scores
    pub player1_color: Vec3,
    /// Flash color when player 2 scores
    pub player2_color: Vec3,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            flash_time: 0.15,
            settle_time: 0.6,
            player1_color: Vec3::new(0.2, 0.6, 1.0),
            player2_color: Vec3::new(1.0, 0.4, 0.3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = MatchConfig::default();
        assert_eq!(config.win_score, WIN_SCORE);
        assert!((config.serve_delay - SERVE_DELAY).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = MatchConfig {
            base_speed: 6.0,
            win_score: 11,
            serve_delay: 0.5,
            paddle_speed: 12.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.win_score, 11);
        assert!((back.base_speed - 6.0).abs() < f32::EPSILON);
    }
}
