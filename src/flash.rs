//! Background color flash on score events
//!
//! A two-stage interpolation: ramp from the current color to the scoring
//! player's color, then settle back to the base color. Independent of the
//! simulation; nothing here can affect match state.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use crate::sim::{FlashConfig, FlashEffect, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    /// Ramping toward the player color
    Rise,
    /// Fading back to the base color
    Settle,
}

#[derive(Debug, Clone, Copy)]
struct Routine {
    start: Vec3,
    target: Vec3,
    stage: Stage,
    t: f32,
}

/// Drives the background color, one flash at a time
///
/// A new flash cancels the one in progress and starts from the current
/// color, so back-to-back scores blend instead of popping.
#[derive(Debug, Clone)]
pub struct BackgroundFlash {
    config: FlashConfig,
    base_color: Vec3,
    current: Vec3,
    routine: Option<Routine>,
}

impl BackgroundFlash {
    pub fn new(base_color: Vec3, config: FlashConfig) -> Self {
        Self {
            config,
            base_color,
            current: base_color,
            routine: None,
        }
    }

    /// Start a flash in the scoring player's color
    pub fn flash_for_player(&mut self, player: Player) {
        let target = match player {
            Player::One => self.config.player1_color,
            Player::Two => self.config.player2_color,
        };
        self.routine = Some(Routine {
            start: self.current,
            target,
            stage: Stage::Rise,
            t: 0.0,
        });
    }

    /// Advance the interpolation
    pub fn tick(&mut self, dt: f32) {
        let Some(mut routine) = self.routine else {
            return;
        };
        routine.t += dt;

        let duration = match routine.stage {
            Stage::Rise => self.config.flash_time,
            Stage::Settle => self.config.settle_time,
        };

        if routine.t >= duration || duration <= 0.0 {
            self.current = routine.target;
            self.routine = match routine.stage {
                Stage::Rise => Some(Routine {
                    start: routine.target,
                    target: self.base_color,
                    stage: Stage::Settle,
                    t: 0.0,
                }),
                Stage::Settle => None,
            };
        } else {
            self.current = routine.start.lerp(routine.target, routine.t / duration);
            self.routine = Some(routine);
        }
    }

    /// Current background color
    pub fn color(&self) -> Vec3 {
        self.current
    }

    /// Whether a flash is in progress
    pub fn is_active(&self) -> bool {
        self.routine.is_some()
    }
}

impl FlashEffect for BackgroundFlash {
    fn on_player_scored(&mut self, player: Player) {
        self.flash_for_player(player);
    }
}

/// Shared-handle impl so the owner can keep ticking and reading the flash
/// while the simulation holds it as a collaborator
impl FlashEffect for Rc<RefCell<BackgroundFlash>> {
    fn on_player_scored(&mut self, player: Player) {
        self.borrow_mut().flash_for_player(player);
    }
}
