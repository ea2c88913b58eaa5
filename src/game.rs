//! Game state and rule engine
//!
//! [`Game`] owns the board and the active player. Every mutation goes through
//! [`Game::place`] or [`Game::reset`]; the presentation layer only reads the
//! board and reacts to the returned [`Outcome`].

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use crate::board::{Board, Cell, Player, Pos};
use crate::rules::{self, Line};

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum RejectReason {
    /// Target cell already holds a mark
    #[display("cell is already occupied")]
    Occupied,
    /// The round ended; call `reset` before playing again
    #[display("round is over")]
    GameOver,
}

/// Result of a single placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Mark placed, turn passed to the other player
    Continue,
    /// Mark placed and it completed a line
    Win(Player),
    /// Mark placed, board full, no line completed
    Draw,
    /// Nothing changed
    Rejected(RejectReason),
}

/// Accepted placement, as seen through [`Outcome::into_result`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Win or Draw
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Draw)
    }

    /// Human-readable message for terminal outcomes
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::Win(player) => Some(format!("Player {player} wins!")),
            Outcome::Draw => Some("It's a draw!".to_string()),
            Outcome::Continue | Outcome::Rejected(_) => None,
        }
    }

    /// Split accepted placements from rejected ones
    pub fn into_result(self) -> Result<Progress, RejectReason> {
        match self {
            Outcome::Continue => Ok(Progress::Continue),
            Outcome::Win(player) => Ok(Progress::Win(player)),
            Outcome::Draw => Ok(Progress::Draw),
            Outcome::Rejected(reason) => Err(reason),
        }
    }
}

/// How the current round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Won { winner: Player, line: Line },
    Drawn,
}

/// One game session: board, whose turn it is, and whether the round is over
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Player,
    finish: Option<Finish>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::X,
            finish: None,
        }
    }

    /// Place the active player's mark at (`row`, `col`).
    ///
    /// Coordinates must be in `0..5`; anything else is a caller bug.
    pub fn place(&mut self, row: usize, col: usize) -> Outcome {
        assert!(
            row < self.board.size() && col < self.board.size(),
            "cell ({row}, {col}) is off the board"
        );
        self.place_at(Pos::new(row as u8, col as u8))
    }

    /// Same as [`Game::place`], for an already-validated position
    #[instrument(level = "debug", skip(self), fields(player = %self.active))]
    pub fn place_at(&mut self, pos: Pos) -> Outcome {
        if self.finish.is_some() {
            debug!("placement after round end ignored");
            return Outcome::Rejected(RejectReason::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("cell occupied");
            return Outcome::Rejected(RejectReason::Occupied);
        }

        let player = self.active;
        self.board.place_mark(pos, player);

        if let Some(line) = rules::completed_line(&self.board, pos, player) {
            info!(?line, "player {player} wins");
            self.finish = Some(Finish::Won {
                winner: player,
                line,
            });
            return Outcome::Win(player);
        }

        if rules::is_full(&self.board) {
            info!("board full, draw");
            self.finish = Some(Finish::Drawn);
            return Outcome::Draw;
        }

        self.active = player.opponent();
        Outcome::Continue
    }

    /// Clear the board and hand the first move back to X
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = Player::X;
        self.finish = None;
    }

    /// Player whose mark the next placement will use
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.board.get(pos)
    }

    /// A Win or Draw happened and `reset` has not been called since
    pub fn is_over(&self) -> bool {
        self.finish.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.finish {
            Some(Finish::Won { winner, .. }) => Some(winner),
            _ => None,
        }
    }

    /// Line that completed the win, if the round was won
    pub fn winning_line(&self) -> Option<Line> {
        match self.finish {
            Some(Finish::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Marks placed this round
    pub fn moves_played(&self) -> u32 {
        self.board.mark_count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
