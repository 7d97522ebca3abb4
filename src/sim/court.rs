//! Rectangular court geometry
//!
//! Detects ball contact with walls and paddles and turns it into
//! [`CollisionEvent`]s. Position correction (pushing the ball out of
//! penetration) happens here; velocity response belongs to
//! [`super::BallSimulation`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{ColliderKind, CollisionEvent};
use super::state::{Ball, Paddle};
use crate::consts::*;

/// The playfield: goal walls left/right, bounce walls top/bottom, one
/// paddle face per side
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Court {
    pub half_width: f32,
    pub half_height: f32,
    /// Distance of each paddle face from the center line
    pub paddle_x: f32,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            half_width: COURT_HALF_WIDTH,
            half_height: COURT_HALF_HEIGHT,
            paddle_x: PADDLE_X,
        }
    }
}

impl Court {
    /// Check the ball against every surface, resolving penetration and
    /// returning at most one contact
    ///
    /// Contacts only register while the ball moves into the surface, so a
    /// single physical touch produces a single event even across substeps.
    pub fn collide(
        &self,
        ball: &mut Ball,
        paddle1: &Paddle,
        paddle2: &Paddle,
    ) -> Option<CollisionEvent> {
        // Paddle faces sit inside the goal walls, so test them first. The
        // test is a thin slab at the face; a ball already past the paddle
        // belongs to the goal wall, not to a late paddle save
        if ball.vel.x < 0.0
            && ball.pos.x - ball.radius <= -self.paddle_x
            && ball.pos.x >= -self.paddle_x - ball.radius
            && (ball.pos.y - paddle1.y).abs() <= paddle1.half_height + ball.radius
        {
            ball.pos.x = -self.paddle_x + ball.radius;
            return Some(CollisionEvent::new(
                Vec2::new(-self.paddle_x, ball.pos.y),
                Vec2::new(1.0, 0.0),
                ColliderKind::Paddle {
                    center_y: paddle1.y,
                    half_height: paddle1.half_height,
                },
            ));
        }
        if ball.vel.x > 0.0
            && ball.pos.x + ball.radius >= self.paddle_x
            && ball.pos.x <= self.paddle_x + ball.radius
            && (ball.pos.y - paddle2.y).abs() <= paddle2.half_height + ball.radius
        {
            ball.pos.x = self.paddle_x - ball.radius;
            return Some(CollisionEvent::new(
                Vec2::new(self.paddle_x, ball.pos.y),
                Vec2::new(-1.0, 0.0),
                ColliderKind::Paddle {
                    center_y: paddle2.y,
                    half_height: paddle2.half_height,
                },
            ));
        }

        if ball.vel.y > 0.0 && ball.pos.y + ball.radius >= self.half_height {
            ball.pos.y = self.half_height - ball.radius;
            return Some(CollisionEvent::new(
                Vec2::new(ball.pos.x, self.half_height),
                Vec2::new(0.0, -1.0),
                ColliderKind::Surface,
            ));
        }
        if ball.vel.y < 0.0 && ball.pos.y - ball.radius <= -self.half_height {
            ball.pos.y = -self.half_height + ball.radius;
            return Some(CollisionEvent::new(
                Vec2::new(ball.pos.x, -self.half_height),
                Vec2::new(0.0, 1.0),
                ColliderKind::Surface,
            ));
        }

        if ball.vel.x < 0.0 && ball.pos.x - ball.radius <= -self.half_width {
            return Some(CollisionEvent::new(
                Vec2::new(-self.half_width, ball.pos.y),
                Vec2::new(1.0, 0.0),
                ColliderKind::LeftWall,
            ));
        }
        if ball.vel.x > 0.0 && ball.pos.x + ball.radius >= self.half_width {
            return Some(CollisionEvent::new(
                Vec2::new(self.half_width, ball.pos.y),
                Vec2::new(-1.0, 0.0),
                ColliderKind::RightWall,
            ));
        }

        None
    }
}
