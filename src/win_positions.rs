//! Enumeration of winning lines for an N×N board.
//!
//! A win is always exactly [`WIN_LENGTH`] marks in a row. Every board size is
//! handled by the same windowing rule: slide a window of that length over the
//! grid in each of the four directions and keep every placement that stays on
//! the board. On a 3×3 board this produces the eight classic lines.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, instrument};

pub const WIN_LENGTH: usize = 3;

const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Diagonal,
    Direction::AntiDiagonal,
];

static CACHE: Lazy<Mutex<HashMap<usize, Arc<WinPositionSet>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// One candidate three-in-a-row, as row-major board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinLine([usize; WIN_LENGTH]);

impl WinLine {
    pub fn new(indices: [usize; WIN_LENGTH]) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> [usize; WIN_LENGTH] {
        self.0
    }

    pub fn first(&self) -> usize {
        self.0[0]
    }

    pub fn last(&self) -> usize {
        self.0[WIN_LENGTH - 1]
    }
}

/// Direction a window is slid along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// `(row, col)` step between consecutive cells of a line.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// All winning lines of one board size, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPositionSet {
    size: usize,
    lines: Vec<WinLine>,
}

impl WinPositionSet {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn lines(&self) -> &[WinLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WinLine> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a WinPositionSet {
    type Item = &'a WinLine;
    type IntoIter = std::slice::Iter<'a, WinLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Builds every winning line for a `size`×`size` board.
///
/// Order: all horizontal windows, then vertical, diagonal and anti-diagonal;
/// within one direction, by start cell in row-major order. Sizes below
/// [`WIN_LENGTH`] have no room for a line and yield an empty set.
#[instrument]
pub fn generate(size: usize) -> WinPositionSet {
    let lines: Vec<WinLine> = DIRECTIONS
        .iter()
        .flat_map(|&direction| windows(size, direction))
        .collect();

    debug!(lines = lines.len(), "generated win positions");
    WinPositionSet { size, lines }
}

/// Memoized [`generate`], shared across games of the same size.
/// Callers pass a size that already passed `board::validate_size`.
pub(crate) fn cached(size: usize) -> Arc<WinPositionSet> {
    let mut cache = match CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    Arc::clone(
        cache
            .entry(size)
            .or_insert_with(|| Arc::new(generate(size))),
    )
}

fn windows(size: usize, direction: Direction) -> impl Iterator<Item = WinLine> {
    let (dr, dc) = direction.step();
    (0..size * size).filter_map(move |start| {
        let row = (start / size) as isize;
        let col = (start % size) as isize;
        let mut indices = [0usize; WIN_LENGTH];

        for (k, slot) in indices.iter_mut().enumerate() {
            let r = row + dr * k as isize;
            let c = col + dc * k as isize;
            if !in_bounds(r, c, size) {
                return None;
            }
            *slot = (r as usize) * size + c as usize;
        }

        Some(WinLine(indices))
    })
}

fn in_bounds(row: isize, col: isize, size: usize) -> bool {
    (0..size as isize).contains(&row) && (0..size as isize).contains(&col)
}
