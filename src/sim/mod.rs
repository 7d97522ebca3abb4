//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single-threaded, synchronous; collision events are consumed in full
//!   before the next one is processed
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod court;
pub mod simulation;
pub mod state;
pub mod tick;

pub use collision::{ColliderKind, CollisionEvent, paddle_bounce, reflect_velocity, surface_bounce};
pub use config::{FlashConfig, MatchConfig};
pub use court::Court;
pub use simulation::{BallSimulation, FlashEffect, ScoreDisplay};
pub use state::{Ball, GamePhase, MatchState, Paddle, Player};
pub use tick::{TickInput, tick};
