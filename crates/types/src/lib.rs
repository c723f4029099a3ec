//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, browser protocol).
//!
//! # Grid Dimensions
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Spawn position**: (10, 7), the grid center
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Fixed interval between snake steps |
//! | `FOOD_SCORE` | 10 | Points awarded per food eaten |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, GRID_HEIGHT, GRID_WIDTH};
//!
//! let start = Position::spawn();
//! assert_eq!(start, Position::new(10, 7));
//!
//! let next = start.step(Direction::Right);
//! assert_eq!(next, Position::new(11, 7));
//! assert!(next.in_bounds());
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 15);
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: u8 = 20;

/// Grid height in cells (15 rows)
pub const GRID_HEIGHT: u8 = 15;

/// Total number of cells on the grid.
pub const GRID_CELLS: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Fixed step interval in milliseconds (one snake move per tick)
pub const TICK_MS: u32 = 200;

/// Points awarded for each food eaten
pub const FOOD_SCORE: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(GRID_WIDTH, 20);
        assert_eq!(GRID_HEIGHT, 15);
        assert_eq!(GRID_CELLS, 300);
        assert_eq!(TICK_MS, 200);
        assert_eq!(FOOD_SCORE, 10);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert!(d.is_opposite(d.opposite()));
        }
    }

    #[test]
    fn step_follows_screen_coordinates() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
        assert_eq!(p.step(Direction::Down), Position::new(5, 6));
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn direction_names_parse_case_insensitively() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("l"), Some(Direction::Left));
        assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
        assert_eq!(Direction::from_str("restart"), None);
        assert_eq!(Direction::from_str(""), None);
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(19, 14).in_bounds());
        assert!(!Position::new(20, 0).in_bounds());
        assert!(!Position::new(0, 15).in_bounds());
        assert!(!Position::new(-1, 3).in_bounds());
        assert!(!Position::new(3, -1).in_bounds());
    }

    #[test]
    fn cell_index_round_trips_for_every_cell() {
        for i in 0..GRID_CELLS {
            let p = Position::from_index(i);
            assert_eq!(p.index(), Some(i));
        }
        assert_eq!(Position::new(-1, 0).index(), None);
    }
}

/// A cell coordinate on the grid.
///
/// Signed so that a step off the left or top edge is representable and can be
/// reported as a wall collision instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Grid center, where every round starts.
    pub const fn spawn() -> Self {
        Self::new(GRID_WIDTH as i16 / 2, GRID_HEIGHT as i16 / 2)
    }

    /// Neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check that the position lies in `[0, W) x [0, H)`.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_WIDTH as i16 && self.y < GRID_HEIGHT as i16
    }

    /// Row-major cell index, or `None` when out of bounds.
    #[inline]
    pub fn index(self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some(self.y as usize * GRID_WIDTH as usize + self.x as usize)
    }

    /// Inverse of [`Position::index`].
    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self::new(
            (i % GRID_WIDTH as usize) as i16,
            (i / GRID_WIDTH as usize) as i16,
        )
    }
}

/// The four steering directions.
///
/// `Up` decreases `y` (row 0 is the top of the screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)`.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Player intents delivered by any front end.
///
/// Steering only records a pending direction; the engine applies it at the
/// next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next tick
    Turn(Direction),
    /// Start a new round (from the waiting state or after game over)
    Start,
}

/// What occupies a single grid cell, as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Head,
    Body,
    Food,
}
