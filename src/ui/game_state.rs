//! Presentation state for the tic-tac-toe GUI
//!
//! Sits between the widgets and the [`Game`]: forwards clicks, remembers the
//! pending "Game Over" message, and resets the round once it is dismissed.

use tracing::{debug, info};

use crate::game::{Game, Outcome};
use crate::rules::Line;
use crate::{Board, Pos};

/// Finished round waiting for the player to acknowledge it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub message: String,
    pub winning_line: Option<Line>,
}

/// Main game state
#[derive(Debug, Default)]
pub struct GameState {
    game: Game,
    pub game_over: Option<GameResult>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only board for rendering
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handle a click on a cell
    pub fn click(&mut self, pos: Pos) -> Outcome {
        let outcome = self.game.place_at(pos);

        match outcome {
            Outcome::Rejected(reason) => {
                debug!(row = pos.row, col = pos.col, %reason, "click ignored");
            }
            Outcome::Win(_) | Outcome::Draw => {
                if let Some(message) = outcome.message() {
                    info!(moves = self.game.moves_played(), "{message}");
                    self.game_over = Some(GameResult {
                        message,
                        winning_line: self.game.winning_line(),
                    });
                }
            }
            Outcome::Continue => {}
        }

        outcome
    }

    /// Close the "Game Over" dialog and start the next round
    pub fn dismiss_game_over(&mut self) {
        if self.game_over.take().is_some() {
            self.game.reset();
        }
    }

    /// Abandon the current round
    pub fn new_round(&mut self) {
        self.game_over = None;
        self.game.reset();
    }

    /// Check if a cell is part of the winning line
    pub fn is_highlighted(&self, pos: Pos) -> bool {
        self.game_over
            .as_ref()
            .and_then(|r| r.winning_line)
            .is_some_and(|line| line.contains(pos))
    }

    /// Line shown under the board
    pub fn status_text(&self) -> String {
        match &self.game_over {
            Some(result) => result.message.clone(),
            None => format!("Player {}'s turn", self.game.active_player()),
        }
    }
}
