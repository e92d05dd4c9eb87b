use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::error::GameError;
use crate::types::{GameResult, GameState, LineEndpoints, Player};
use crate::win_positions::{self, WinPositionSet};

/// What `apply_move` did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    /// The game already has a winner or is drawn.
    GameOver,
    OutOfRange,
    Occupied,
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        self == MoveOutcome::Accepted
    }
}

/// Owns one game: board, side to move and result.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    result: GameResult,
    win_positions: Arc<WinPositionSet>,
}

impl GameEngine {
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            turn: Player::X,
            result: GameResult::InProgress,
            win_positions: win_positions::cached(size),
        })
    }

    /// Starts over on a `size`×`size` board.
    /// On error the current game is left as it was.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: usize) -> Result<(), GameError> {
        *self = Self::new(size)?;
        info!(size, "new game");
        Ok(())
    }

    /// Starts over with the current board size.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.result = GameResult::InProgress;
        info!(size = self.board.size(), "game reset");
    }

    /// Plays the side to move at `index`.
    ///
    /// Requests after the game has ended, outside the board or onto an
    /// occupied cell change nothing; the returned outcome says which.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let outcome = if self.result.is_terminal() {
            MoveOutcome::GameOver
        } else if index >= self.board.len() {
            MoveOutcome::OutOfRange
        } else if !self.board.place(index, self.turn) {
            MoveOutcome::Occupied
        } else {
            self.turn = self.turn.opponent();
            self.result = self.evaluate();
            MoveOutcome::Accepted
        };

        match outcome {
            MoveOutcome::Accepted if self.result.is_terminal() => {
                info!(result = ?self.result, "game over");
            }
            MoveOutcome::Accepted => {}
            ignored => debug!(?ignored, "move ignored"),
        }
        outcome
    }

    /// Returns the first and last index of the winning line.
    pub fn winning_line_geometry(&self) -> Option<LineEndpoints> {
        match self.result {
            GameResult::Winner { line, .. } => Some(LineEndpoints {
                from: line.first(),
                to: line.last(),
            }),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn win_positions(&self) -> &WinPositionSet {
        &self.win_positions
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board_size: self.board.size(),
            board: self.board.cells().to_vec(),
            turn: self.turn,
            result: self.result,
            is_game_over: self.result.is_terminal(),
            winning_line: self.winning_line_geometry(),
            headline: self.result.headline(),
        }
    }

    fn evaluate(&self) -> GameResult {
        let won = self
            .win_positions
            .iter()
            .find_map(|line| self.board.line_owner(line).map(|player| (player, *line)));

        match won {
            Some((player, line)) => GameResult::Winner { player, line },
            None if self.board.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Player) {
        self.win_positions = win_positions::cached(board.size());
        self.board = board;
        self.turn = turn;
        self.result = GameResult::InProgress;
    }
}
