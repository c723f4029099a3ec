//! Food placement.

use crate::rng::SimpleRng;
use crate::types::{Position, GRID_CELLS};

/// Random draws tried before falling back to enumerating free cells.
///
/// With a mostly empty grid the first draw almost always succeeds; the
/// fallback only matters once the snake covers most of the board.
pub const MAX_FOOD_ATTEMPTS: usize = 64;

/// Pick a uniformly random cell for which `occupied` returns false.
///
/// Rejection-samples up to [`MAX_FOOD_ATTEMPTS`] times, then picks uniformly
/// among the remaining free cells. Returns `None` only when every cell is
/// occupied, so this always terminates.
///
/// # Examples
///
/// ```
/// use tui_snake_core::{generate_food, SimpleRng};
/// use tui_snake_core::types::Position;
///
/// let mut rng = SimpleRng::new(42);
/// let taken = Position::new(0, 0);
/// let food = generate_food(&mut rng, |p| p == taken).unwrap();
/// assert_ne!(food, taken);
/// assert!(food.in_bounds());
/// ```
pub fn generate_food(
    rng: &mut SimpleRng,
    occupied: impl Fn(Position) -> bool,
) -> Option<Position> {
    for _ in 0..MAX_FOOD_ATTEMPTS {
        let p = Position::from_index(rng.next_range(GRID_CELLS as u32) as usize);
        if !occupied(p) {
            return Some(p);
        }
    }

    let free = (0..GRID_CELLS)
        .map(Position::from_index)
        .filter(|&p| !occupied(p))
        .count();
    if free == 0 {
        return None;
    }

    let pick = rng.next_range(free as u32) as usize;
    (0..GRID_CELLS)
        .map(Position::from_index)
        .filter(|&p| !occupied(p))
        .nth(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn empty_grid_returns_in_bounds_cell() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..100 {
            let p = generate_food(&mut rng, |_| false).unwrap();
            assert!(p.in_bounds());
        }
    }

    #[test]
    fn full_grid_returns_none() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(generate_food(&mut rng, |_| true), None);
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let free = Position::new(GRID_WIDTH as i16 - 1, GRID_HEIGHT as i16 - 1);
        for seed in 1..20 {
            let mut rng = SimpleRng::new(seed);
            assert_eq!(generate_food(&mut rng, |p| p != free), Some(free));
        }
    }

    #[test]
    fn never_returns_an_occupied_cell() {
        // Occupy every cell in the left half.
        let occupied = |p: Position| p.x < GRID_WIDTH as i16 / 2;
        let mut rng = SimpleRng::new(2024);
        for _ in 0..1_000 {
            let p = generate_food(&mut rng, occupied).unwrap();
            assert!(!occupied(p));
        }
    }
}
