//! Mapping between board indices and drawing-surface coordinates.
//!
//! The engine only deals in indices; this is the presentation side of that
//! boundary.

use serde::Serialize;

use crate::error::GameError;
use crate::types::LineEndpoints;

pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the surface the board is drawn on, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, GameError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GameError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Size marks are drawn at; the shorter side of a cell bounds it.
    pub fn cell_size(&self, board_size: usize) -> f64 {
        self.width.min(self.height) / board_size as f64
    }

    /// Width and height of one cell; they differ on a non-square surface.
    pub fn cell_extent(&self, board_size: usize) -> (f64, f64) {
        let n = board_size as f64;
        (self.width / n, self.height / n)
    }

    /// Centre of the cell at `index` on a `board_size`×`board_size` board.
    pub fn cell_center(&self, board_size: usize, index: usize) -> Point {
        let (cell_width, cell_height) = self.cell_extent(board_size);
        let row = (index / board_size) as f64;
        let col = (index % board_size) as f64;
        Point::new(cell_width * (col + 0.5), cell_height * (row + 0.5))
    }

    /// Cell under a pointer position given relative to the surface origin.
    /// Returns `None` outside the surface.
    pub fn cell_at(&self, board_size: usize, x: f64, y: f64) -> Option<usize> {
        if board_size == 0 || !(0.0..self.width).contains(&x) || !(0.0..self.height).contains(&y)
        {
            return None;
        }
        let col = ((x / self.width) * board_size as f64).floor() as usize;
        let row = ((y / self.height) * board_size as f64).floor() as usize;
        // Guard against rounding up to `board_size` right at the far edge.
        Some(row.min(board_size - 1) * board_size + col.min(board_size - 1))
    }

    /// Surface coordinates of a winning line's end cells.
    pub fn line_points(&self, board_size: usize, endpoints: LineEndpoints) -> (Point, Point) {
        (
            self.cell_center(board_size, endpoints.from),
            self.cell_center(board_size, endpoints.to),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
