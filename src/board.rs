use crate::error::GameError;
use crate::types::{Cell, Player};
use crate::win_positions::WinLine;

pub const MIN_BOARD_SIZE: usize = 3;
/// Largest accepted side. The win-line table holds about `4·N²` entries,
/// so this keeps a game well inside a wasm32 address space.
pub const MAX_BOARD_SIZE: usize = 1024;

/// N×N board stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Marks an empty cell for `player`.
    /// Returns `false` and leaves the board unchanged when the index is out of
    /// range or the cell is already taken.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = player.into();
                true
            }
            _ => false,
        }
    }

    /// Returns the player holding all cells of `line`, if any.
    pub fn line_owner(&self, line: &WinLine) -> Option<Player> {
        let [a, b, c] = line.indices();
        let owner = self.get(a)?.owner()?;
        (self.get(b)? == Cell::from(owner) && self.get(c)? == Cell::from(owner)).then_some(owner)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empties every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    #[cfg(test)]
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }
}

/// Accepts sizes in `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
pub fn validate_size(size: usize) -> Result<(), GameError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidSize { size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(4).unwrap();

        assert_eq!(board.len(), 16);
        assert_eq!(board.empty_count(), 16);
        assert!(!board.is_full());
        assert!(board.cells().iter().all(|cell| *cell == Cell::Empty));
    }

    #[test]
    fn rejects_sizes_outside_range() {
        assert_eq!(Board::new(2), Err(GameError::InvalidSize { size: 2 }));
        assert_eq!(Board::new(0), Err(GameError::InvalidSize { size: 0 }));
        assert_eq!(
            Board::new(MAX_BOARD_SIZE + 1),
            Err(GameError::InvalidSize {
                size: MAX_BOARD_SIZE + 1
            })
        );
        assert_eq!(
            validate_size(usize::MAX),
            Err(GameError::InvalidSize { size: usize::MAX })
        );
        assert_eq!(Board::new(65).unwrap().len(), 65 * 65);
    }

    #[test]
    fn place_only_fills_empty_in_range_cells() {
        let mut board = Board::new(3).unwrap();

        assert!(board.place(4, Player::X));
        assert!(!board.place(4, Player::O));
        assert!(!board.place(9, Player::O));

        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn line_owner_requires_three_identical_marks() {
        use Cell::{Empty as E, O, X};
        let board = Board::from_cells(3, vec![X, X, X, O, O, E, E, E, E]);

        assert_eq!(board.line_owner(&WinLine::new([0, 1, 2])), Some(Player::X));
        assert_eq!(board.line_owner(&WinLine::new([3, 4, 5])), None);
        assert_eq!(board.line_owner(&WinLine::new([0, 3, 6])), None);
        assert_eq!(board.line_owner(&WinLine::new([6, 7, 8])), None);
    }

    #[test]
    fn clear_empties_all_cells() {
        let mut board = Board::new(3).unwrap();
        board.place(0, Player::X);
        board.place(8, Player::O);

        board.clear();

        assert_eq!(board, Board::new(3).unwrap());
    }
}
