//! file: board.rs
//! author: Jacob Xie
//! date: 2025/12/15 10:20:03 Monday
//! brief: fixed grid the snake lives on

use crate::error::ConfigError;

use super::Cell;

pub const DEFAULT_WIDTH_PX: u32 = 640;
pub const DEFAULT_HEIGHT_PX: u32 = 480;
pub const DEFAULT_STEP_PX: u32 = 20;

/// Narrowest board that fits the three-cell starting snake behind the centre
/// column with at least one cell left over for food.
const MIN_COLUMNS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    columns: i32,
    rows: i32,
    step: u32,
}

impl Board {
    pub fn new(width_px: u32, height_px: u32, step_px: u32) -> Result<Self, ConfigError> {
        if step_px == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if width_px == 0 || height_px == 0 {
            return Err(ConfigError::EmptyBoard {
                width: width_px,
                height: height_px,
            });
        }
        if width_px % step_px != 0 || height_px % step_px != 0 {
            return Err(ConfigError::Misaligned {
                width: width_px,
                height: height_px,
                step: step_px,
            });
        }

        let columns = width_px / step_px;
        let rows = height_px / step_px;
        if columns < MIN_COLUMNS {
            return Err(ConfigError::TooSmall { columns, rows });
        }

        let too_large = ConfigError::TooLarge { columns, rows };
        let (Ok(columns), Ok(rows)) = (i32::try_from(columns), i32::try_from(rows)) else {
            return Err(too_large);
        };
        if columns.checked_mul(rows).is_none() {
            return Err(too_large);
        }

        Ok(Self {
            columns,
            rows,
            step: step_px,
        })
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn width_px(&self) -> u32 {
        self.columns as u32 * self.step
    }

    pub fn height_px(&self) -> u32 {
        self.rows as u32 * self.step
    }

    pub fn cell_count(&self) -> usize {
        // bounded by `Board::new`
        self.columns as usize * self.rows as usize
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.columns).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.columns / 2, self.rows / 2)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| Cell::new(x, y)))
    }

    /// Top-left pixel of `cell`.
    pub fn origin_px(&self, cell: Cell) -> (f32, f32) {
        let step = self.step as f32;
        (cell.x as f32 * step, cell.y as f32 * step)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: (DEFAULT_WIDTH_PX / DEFAULT_STEP_PX) as i32,
            rows: (DEFAULT_HEIGHT_PX / DEFAULT_STEP_PX) as i32,
            step: DEFAULT_STEP_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_canvas() {
        let board = Board::default();
        assert_eq!(board.columns(), 32);
        assert_eq!(board.rows(), 24);
        assert_eq!(board.width_px(), 640);
        assert_eq!(board.height_px(), 480);
        assert_eq!(board, Board::new(640, 480, 20).unwrap());
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(Board::new(640, 480, 0), Err(ConfigError::ZeroStep));
        assert_eq!(
            Board::new(0, 480, 20),
            Err(ConfigError::EmptyBoard {
                width: 0,
                height: 480
            })
        );
        assert_eq!(
            Board::new(650, 480, 20),
            Err(ConfigError::Misaligned {
                width: 650,
                height: 480,
                step: 20
            })
        );
        assert_eq!(
            Board::new(40, 40, 20),
            Err(ConfigError::TooSmall {
                columns: 2,
                rows: 2
            })
        );
    }

    #[test]
    fn rejects_grids_that_overflow() {
        assert_eq!(
            Board::new(u32::MAX, 4, 1),
            Err(ConfigError::TooLarge {
                columns: u32::MAX,
                rows: 4
            })
        );
        assert_eq!(
            Board::new(100_000, 100_000, 1),
            Err(ConfigError::TooLarge {
                columns: 100_000,
                rows: 100_000
            })
        );

        let wide = Board::new(1 << 20, 1 << 10, 1).unwrap();
        assert_eq!(wide.cell_count(), 1 << 30);
    }

    #[test]
    fn bounds_are_half_open() {
        let board = Board::new(100, 60, 20).unwrap();
        assert!(board.in_bounds(Cell::new(0, 0)));
        assert!(board.in_bounds(Cell::new(4, 2)));
        assert!(!board.in_bounds(Cell::new(5, 2)));
        assert!(!board.in_bounds(Cell::new(4, 3)));
        assert!(!board.in_bounds(Cell::new(-1, 0)));
        assert_eq!(board.cells().count(), board.cell_count());
        assert_eq!(board.origin_px(Cell::new(2, 1)), (40.0, 20.0));
    }
}
