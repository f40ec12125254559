//! file: food.rs
//! author: Jacob Xie
//! date: 2025/12/15 10:41:26 Monday
//! brief: random food placement

use std::collections::HashSet;

use log::debug;
use rand::{Rng, seq::SliceRandom};

use super::{Board, Cell};

/// Random draws before falling back to enumerating the free cells.
pub const MAX_FOOD_ATTEMPTS: usize = 1000;

/// Picks a uniformly random cell of `board` that is not in `occupied`.
///
/// Returns `None` only when the board has no free cell left.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    if occupied.len() >= board.cell_count() {
        debug!("no free cell for food, all {} cells occupied", board.cell_count());
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(0..board.columns()),
            rng.gen_range(0..board.rows()),
        );
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }

    debug!(
        "food sampling gave up after {MAX_FOOD_ATTEMPTS} draws, {} of {} cells occupied",
        occupied.len(),
        board.cell_count()
    );
    let free: Vec<Cell> = board.cells().filter(|cell| !occupied.contains(cell)).collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn never_lands_on_occupied_cells() {
        let board = Board::new(100, 100, 20).unwrap();
        let occupied: HashSet<Cell> = board.cells().filter(|cell| cell.x < 4).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let food = place_food(&mut rng, &board, &occupied).unwrap();
            assert!(board.in_bounds(food));
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let board = Board::new(200, 200, 20).unwrap();
        let last = Cell::new(9, 9);
        let occupied: HashSet<Cell> = board.cells().filter(|&cell| cell != last).collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_food(&mut rng, &board, &occupied), Some(last));
    }

    #[test]
    fn full_board_has_no_food() {
        let board = Board::new(80, 40, 20).unwrap();
        let occupied: HashSet<Cell> = board.cells().collect();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place_food(&mut rng, &board, &occupied), None);
    }
}
