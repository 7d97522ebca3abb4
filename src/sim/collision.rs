//! Collision events and bounce response
//!
//! The decision core of the game: scoring walls kill the rally, paddles
//! steer the ball by contact offset, everything else reflects about the
//! surface normal. All numeric guards here are silent stability
//! corrections, never errors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::normalize_or;

/// What the ball ran into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderKind {
    /// Player 1's goal wall; a hit means player 2 scored
    LeftWall,
    /// Player 2's goal wall; a hit means player 1 scored
    RightWall,
    /// A paddle, with the geometry the bounce steering needs
    Paddle { center_y: f32, half_height: f32 },
    /// Top/bottom walls, obstacles, and anything unrecognized
    Surface,
}

/// A single physical contact, consumed synchronously and never stored
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Contact point
    pub point: Vec2,
    /// Surface normal at the contact, pointing toward the ball
    pub normal: Vec2,
    /// Number of contact points reported; zero-contact events are ignored
    pub contacts: u32,
    /// Collider category
    pub collider: ColliderKind,
}

impl CollisionEvent {
    pub fn new(point: Vec2, normal: Vec2, collider: ColliderKind) -> Self {
        Self {
            point,
            normal,
            contacts: 1,
            collider,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Paddle bounce via contact-offset steering
///
/// The outgoing angle comes from where on the paddle's height the ball
/// struck, not from true reflection. The horizontal sign is forced opposite
/// the incoming velocity, so the ball always departs the paddle it hit.
/// Speed never decays below `base_speed`.
pub fn paddle_bounce(
    vel: Vec2,
    ball_y: f32,
    paddle_y: f32,
    paddle_half_height: f32,
    base_speed: f32,
) -> Vec2 {
    let speed = vel.length().max(base_speed);

    let half = paddle_half_height.max(PADDLE_HALF_HEIGHT_MIN);
    let normalized_y = ((ball_y - paddle_y) / half).clamp(-1.0, 1.0);

    let new_x = if vel.x >= 0.0 { -1.0 } else { 1.0 };

    // |new_x| is 1, so this never actually degenerates, but guard anyway
    let dir = normalize_or(Vec2::new(new_x, normalized_y), Vec2::new(new_x, 0.2));
    dir * speed
}

/// Generic bounce off any non-paddle, non-scoring surface
///
/// Physical reflection about the contact normal, renormalized so the speed
/// floor holds exactly. A reflection that comes out nearly vertical gets a
/// small horizontal nudge to keep rallies from locking into an up-down
/// loop.
pub fn surface_bounce(vel: Vec2, normal: Vec2, base_speed: f32) -> Vec2 {
    let speed = vel.length().max(base_speed);

    let incoming = if vel.length_squared() > STALL_EPSILON_SQ {
        vel
    } else {
        Vec2::new(1.0, 0.1)
    };

    let mut dir = normalize_or(reflect_velocity(incoming, normal), Vec2::new(1.0, 0.1));

    if dir.x.abs() < MIN_BOUNCE_X {
        // signum(0.0) is 1.0, so an exactly-zero reflection defers to the
        // incoming direction
        let sign = if dir.x == 0.0 {
            incoming.x.signum()
        } else {
            dir.x.signum()
        };
        dir.x = sign * BOUNCE_X_NUDGE;
        dir = dir.normalize();
    }

    dir * speed
}
