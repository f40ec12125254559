//! file: cell.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:17 Sunday
//! brief: a single grid position

use super::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Direction pointing from `self` towards an orthogonally adjacent `other`.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.offset(direction) == other)
    }
}
