//! Snake body - ordered cells with O(1) occupancy lookups.
//!
//! The head is index 0 and the tail is the last element. The body is kept in a
//! `VecDeque` so both ends move in O(1), mirrored by a flat occupancy grid so
//! collision checks never scan the body.

use std::collections::VecDeque;

use crate::types::{Position, GRID_CELLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    occupied: [bool; GRID_CELLS],
}

impl Snake {
    /// Create a length-1 snake at `head`.
    ///
    /// `head` must be in bounds; the engine only calls this with the spawn cell.
    pub(crate) fn new(head: Position) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(GRID_CELLS),
            occupied: [false; GRID_CELLS],
        };
        snake.push_head(head);
        snake
    }

    /// Build from an explicit head-first list of cells.
    ///
    /// Returns the first offending cell if any segment is out of bounds or
    /// repeated.
    pub(crate) fn from_cells(cells: &[Position]) -> Result<Self, SegmentError> {
        let mut snake = Self {
            body: VecDeque::with_capacity(GRID_CELLS),
            occupied: [false; GRID_CELLS],
        };
        for &p in cells {
            let Some(i) = p.index() else {
                return Err(SegmentError::OutOfBounds(p));
            };
            if snake.occupied[i] {
                return Err(SegmentError::Overlap(p));
            }
            snake.occupied[i] = true;
            snake.body.push_back(p);
        }
        Ok(snake)
    }

    pub fn head(&self) -> Position {
        // Length >= 1 is an invariant of every constructor.
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment (tail included) sits on `p`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.index().map(|i| self.occupied[i]).unwrap_or(false)
    }

    /// Head-to-tail iterator over the segments.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, p: Position) {
        if let Some(i) = p.index() {
            self.occupied[i] = true;
            self.body.push_front(p);
        }
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() <= 1 {
            return None;
        }
        let p = self.body.pop_back()?;
        if let Some(i) = p.index() {
            self.occupied[i] = false;
        }
        Some(p)
    }
}

/// Why an explicit segment list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentError {
    OutOfBounds(Position),
    Overlap(Position),
}
