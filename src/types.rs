use serde::Serialize;

use crate::win_positions::WinLine;

/// One of the two sides. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Contents of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameResult {
    InProgress,
    Winner { player: Player, line: WinLine },
    Draw,
}

impl GameResult {
    /// `true` once the game has a winner or is drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Banner text shown once the game is over.
    pub fn headline(&self) -> Option<String> {
        match self {
            GameResult::InProgress => None,
            GameResult::Winner { player, .. } => Some(format!("{} wins!", player.symbol())),
            GameResult::Draw => Some("It's a draw!".to_string()),
        }
    }
}

/// First and last board index of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineEndpoints {
    pub from: usize,
    pub to: usize,
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board_size: usize,
    /// Row-major cells, `board_size * board_size` long.
    pub board: Vec<Cell>,
    pub turn: Player,
    pub result: GameResult,
    pub is_game_over: bool,
    /// Contract:
    /// - `Some` only when `result` is a winner.
    /// - `None` while in progress and on a draw.
    pub winning_line: Option<LineEndpoints>,
    pub headline: Option<String>,
}
