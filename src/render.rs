//! Draw requests for the board, the marks and the strike-through line.
//!
//! The host turns each [`DrawCommand`] into a vector primitive (SVG, canvas,
//! ...); nothing here touches a drawing API.

use std::f64::consts::FRAC_1_SQRT_2;

use serde::Serialize;

use crate::game::GameEngine;
use crate::geometry::{Point, Viewport};
use crate::types::Cell;

const STROKE_RATIO: f64 = 0.1;
const CIRCLE_RADIUS_RATIO: f64 = 0.3;
const CROSS_LENGTH_RATIO: f64 = 0.6;

/// What a line is for, so the host can pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    Grid,
    Cross,
    Strike,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        width: f64,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f64,
        width: f64,
    },
}

/// Builds the full picture for the current game: grid, marks, then the
/// strike-through line if someone has won.
pub fn scene(engine: &GameEngine, viewport: &Viewport) -> Vec<DrawCommand> {
    let size = engine.size();
    let cell = viewport.cell_size(size);
    let width = cell * STROKE_RATIO;
    let mut commands = grid(size, viewport, width);

    for (index, mark) in engine.board().cells().iter().enumerate() {
        let center = viewport.cell_center(size, index);
        match mark {
            Cell::Empty => {}
            Cell::X => commands.extend(cross(center, cell, width)),
            Cell::O => commands.push(DrawCommand::Circle {
                center,
                radius: cell * CIRCLE_RADIUS_RATIO,
                width,
            }),
        }
    }

    if let Some(endpoints) = engine.winning_line_geometry() {
        let (from, to) = viewport.line_points(size, endpoints);
        commands.push(DrawCommand::Line {
            from,
            to,
            width,
            stroke: Stroke::Strike,
        });
    }

    commands
}

fn grid(size: usize, viewport: &Viewport, width: f64) -> Vec<DrawCommand> {
    let (cell_width, cell_height) = viewport.cell_extent(size);
    let mut lines = Vec::with_capacity(2 * size.saturating_sub(1));

    for i in 1..size {
        let y = i as f64 * cell_height;
        lines.push(DrawCommand::Line {
            from: Point::new(0.0, y),
            to: Point::new(viewport.width(), y),
            width,
            stroke: Stroke::Grid,
        });
    }
    for j in 1..size {
        let x = j as f64 * cell_width;
        lines.push(DrawCommand::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, viewport.height()),
            width,
            stroke: Stroke::Grid,
        });
    }

    lines
}

/// Two diagonal strokes of `CROSS_LENGTH_RATIO * cell` through `center`.
fn cross(center: Point, cell: f64, width: f64) -> [DrawCommand; 2] {
    let offset = cell * CROSS_LENGTH_RATIO / 2.0 * FRAC_1_SQRT_2;
    let segment = |dy: f64| DrawCommand::Line {
        from: Point::new(center.x - offset, center.y - dy),
        to: Point::new(center.x + offset, center.y + dy),
        width,
        stroke: Stroke::Cross,
    };
    [segment(offset), segment(-offset)]
}
