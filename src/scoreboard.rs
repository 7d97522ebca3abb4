//! Text scoreboard and win banner
//!
//! Renders score updates as `"{score1} : {score2}"` and the win
//! announcement as a centered banner string, ready for whatever front end
//! draws them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sim::{Player, ScoreDisplay};

/// The score line plus an optional win banner
#[derive(Debug, Clone)]
pub struct Scoreboard {
    score_line: String,
    banner: Option<String>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score_line: format_score(0, 0),
            banner: None,
        }
    }

    /// Current score text
    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// Win banner, if the match is over
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

fn format_score(score1: u32, score2: u32) -> String {
    format!("{score1} : {score2}")
}

impl ScoreDisplay for Scoreboard {
    fn on_score_changed(&mut self, score1: u32, score2: u32) {
        self.score_line = format_score(score1, score2);
    }

    fn on_game_over(&mut self, winner: Player) {
        self.banner = Some(format!("{} Wins!", winner.label()));
    }

    fn on_match_restarted(&mut self) {
        self.banner = None;
    }
}

/// Shared-handle impl so the owner can keep reading the board while the
/// simulation holds it as a collaborator
impl ScoreDisplay for Rc<RefCell<Scoreboard>> {
    fn on_score_changed(&mut self, score1: u32, score2: u32) {
        self.borrow_mut().on_score_changed(score1, score2);
    }

    fn on_game_over(&mut self, winner: Player) {
        self.borrow_mut().on_game_over(winner);
    }

    fn on_match_restarted(&mut self) {
        self.borrow_mut().on_match_restarted();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line_format() {
        let mut board = Scoreboard::new();
        assert_eq!(board.score_line(), "0 : 0");
        board.on_score_changed(3, 1);
        assert_eq!(board.score_line(), "3 : 1");
    }

    #[test]
    fn test_win_banner_text() {
        let mut board = Scoreboard::new();
        board.on_game_over(Player::One);
        assert_eq!(board.banner(), Some("Player 1 Wins!"));
        board.on_game_over(Player::Two);
        assert_eq!(board.banner(), Some("Player 2 Wins!"));
    }

    #[test]
    fn test_restart_clears_banner() {
        let mut board = Scoreboard::new();
        board.on_game_over(Player::Two);
        board.on_match_restarted();
        assert!(board.banner().is_none());
    }
}
