use crate::game::Phase;
use crate::game_state::Status;
use crate::types::{CellKind, Direction, Position, GRID_HEIGHT, GRID_WIDTH};

pub type CellGrid = [[CellKind; GRID_WIDTH as usize]; GRID_HEIGHT as usize];

/// Copyable view of a session for renderers.
///
/// `cells` is indexed `[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: CellGrid,
    pub head: Position,
    pub food: Position,
    pub direction: Direction,
    pub length: u32,
    pub score: u32,
    pub status: Status,
    pub phase: Phase,
    pub episode_id: u32,
    pub ticks: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[CellKind::Empty; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.head = Position::spawn();
        self.food = Position::new(0, 0);
        self.direction = Direction::Right;
        self.length = 0;
        self.score = 0;
        self.status = Status::Alive;
        self.phase = Phase::Over;
        self.episode_id = 0;
        self.ticks = 0;
    }

    pub fn cell(&self, p: Position) -> CellKind {
        if !p.in_bounds() {
            return CellKind::Empty;
        }
        self.cells[p.y as usize][p.x as usize]
    }

    pub(crate) fn set_cell(&mut self, p: Position, kind: CellKind) {
        if p.in_bounds() {
            self.cells[p.y as usize][p.x as usize] = kind;
        }
    }

    /// Stable 64-bit FNV-1a fingerprint over the visible cells and score.
    ///
    /// Renderers use it to skip redraws when nothing changed.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut h = OFFSET_BASIS;
        let mut feed = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        };
        for row in self.cells.iter() {
            for &c in row.iter() {
                feed(c as u8);
            }
        }
        for b in self.score.to_le_bytes() {
            feed(b);
        }
        feed(self.phase as u8);
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [[CellKind::Empty; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            head: Position::spawn(),
            food: Position::new(0, 0),
            direction: Direction::Right,
            length: 0,
            score: 0,
            status: Status::Alive,
            phase: Phase::Over,
            episode_id: 0,
            ticks: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn snapshot_marks_head_body_and_food() {
        let body = [Position::new(3, 3), Position::new(2, 3), Position::new(1, 3)];
        let state =
            GameState::from_layout(&body, Direction::Right, Position::new(8, 8), 1).unwrap();
        let snap = state.snapshot();

        assert_eq!(snap.cell(Position::new(3, 3)), CellKind::Head);
        assert_eq!(snap.cell(Position::new(2, 3)), CellKind::Body);
        assert_eq!(snap.cell(Position::new(1, 3)), CellKind::Body);
        assert_eq!(snap.cell(Position::new(8, 8)), CellKind::Food);
        assert_eq!(snap.cell(Position::new(0, 0)), CellKind::Empty);
        assert_eq!(snap.length, 3);
    }

    #[test]
    fn fingerprint_changes_when_snake_moves() {
        let mut state = GameState::from_layout(
            &[Position::new(3, 3)],
            Direction::Right,
            Position::new(8, 8),
            1,
        )
        .unwrap();
        let a = state.snapshot().fingerprint();
        assert_eq!(a, state.snapshot().fingerprint());
        state.tick(Direction::Right);
        assert_ne!(a, state.snapshot().fingerprint());
    }
}
