//! Game state module - one round of Snake
//!
//! Holds the snake, food, heading, score and round status, and advances them
//! one step per [`GameState::tick`]. Lifecycle (waiting / running / over) and
//! input buffering live in [`crate::game::Game`].

use std::fmt;

use crate::food::generate_food;
use crate::rng::SimpleRng;
use crate::snake::{SegmentError, Snake};
use crate::types::{Direction, Position, FOOD_SCORE};

/// What the head ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Wall,
    SelfCollision,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::SelfCollision => "self",
        }
    }
}

/// Round status. Anything other than `Alive` freezes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Alive,
    Crashed(Collision),
    /// The snake covers every cell; no food can be placed.
    Won,
}

/// Result of a single [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Head advanced, tail followed.
    Moved,
    /// Head landed on food; the snake grew by one.
    Ate,
    Crashed(Collision),
    Won,
    /// The round had already ended; nothing changed.
    Frozen,
}

/// Rejected explicit layout passed to [`GameState::from_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    EmptySnake,
    SegmentOutOfBounds(Position),
    SegmentOverlap(Position),
    FoodOutOfBounds(Position),
    FoodOnSnake(Position),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptySnake => write!(f, "snake must have at least one segment"),
            LayoutError::SegmentOutOfBounds(p) => {
                write!(f, "segment ({}, {}) is outside the grid", p.x, p.y)
            }
            LayoutError::SegmentOverlap(p) => {
                write!(f, "segment ({}, {}) appears more than once", p.x, p.y)
            }
            LayoutError::FoodOutOfBounds(p) => {
                write!(f, "food ({}, {}) is outside the grid", p.x, p.y)
            }
            LayoutError::FoodOnSnake(p) => write!(f, "food ({}, {}) is on the snake", p.x, p.y),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<SegmentError> for LayoutError {
    fn from(value: SegmentError) -> Self {
        match value {
            SegmentError::OutOfBounds(p) => LayoutError::SegmentOutOfBounds(p),
            SegmentError::Overlap(p) => LayoutError::SegmentOverlap(p),
        }
    }
}

/// One round: snake, food, heading, score and status.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Position,
    direction: Direction,
    score: u32,
    status: Status,
    rng: SimpleRng,
    /// Number of ticks that moved the snake.
    ticks: u32,
}

impl GameState {
    /// Fresh round: length-1 snake at the grid center heading right, score 0,
    /// food on a random free cell.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let snake = Snake::new(Position::spawn());
        // A single segment can never cover the grid.
        let food = generate_food(&mut rng, |p| snake.contains(p)).unwrap_or(Position::new(0, 0));

        Self {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            status: Status::Alive,
            rng,
            ticks: 0,
        }
    }

    /// Build a round from explicit cells (head first).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::GameState;
    /// use tui_snake_core::types::{Direction, Position};
    ///
    /// let body = [Position::new(10, 7)];
    /// let mut state =
    ///     GameState::from_layout(&body, Direction::Right, Position::new(11, 7), 1).unwrap();
    /// state.tick(Direction::Right);
    /// assert_eq!(state.score(), 10);
    /// assert_eq!(state.len(), 2);
    /// ```
    pub fn from_layout(
        body: &[Position],
        direction: Direction,
        food: Position,
        seed: u32,
    ) -> Result<Self, LayoutError> {
        if body.is_empty() {
            return Err(LayoutError::EmptySnake);
        }
        let snake = Snake::from_cells(body)?;
        if !food.in_bounds() {
            return Err(LayoutError::FoodOutOfBounds(food));
        }
        if snake.contains(food) {
            return Err(LayoutError::FoodOnSnake(food));
        }

        Ok(Self {
            snake,
            food,
            direction,
            score: 0,
            status: Status::Alive,
            rng: SimpleRng::new(seed),
            ticks: 0,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// False once the snake has crashed.
    pub fn alive(&self) -> bool {
        !matches!(self.status, Status::Crashed(_))
    }

    /// True while ticks still change the round.
    pub fn is_active(&self) -> bool {
        self.status == Status::Alive
    }

    /// Seed for the next round, drawn from this round's stream.
    pub(crate) fn next_seed(&mut self) -> u32 {
        self.rng.fork_seed()
    }

    /// Advance one step.
    ///
    /// `pending` is ignored when it would reverse the current heading. The
    /// collision check runs against the whole body before the tail moves, so
    /// stepping onto the current tail cell is a crash.
    pub fn tick(&mut self, pending: Direction) -> TickOutcome {
        if self.status != Status::Alive {
            return TickOutcome::Frozen;
        }

        if !pending.is_opposite(self.direction) {
            self.direction = pending;
        }

        let next = self.snake.head().step(self.direction);
        if !next.in_bounds() {
            self.status = Status::Crashed(Collision::Wall);
            return TickOutcome::Crashed(Collision::Wall);
        }
        if self.snake.contains(next) {
            self.status = Status::Crashed(Collision::SelfCollision);
            return TickOutcome::Crashed(Collision::SelfCollision);
        }

        self.snake.push_head(next);
        self.ticks = self.ticks.wrapping_add(1);

        if next != self.food {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += FOOD_SCORE;
        let snake = &self.snake;
        match generate_food(&mut self.rng, |p| snake.contains(p)) {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => {
                self.status = Status::Won;
                TickOutcome::Won
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        use crate::types::CellKind;

        out.clear();
        for p in self.snake.iter().skip(1) {
            out.set_cell(p, CellKind::Body);
        }
        if self.status != Status::Won {
            out.set_cell(self.food, CellKind::Food);
        }
        out.set_cell(self.snake.head(), CellKind::Head);

        out.head = self.snake.head();
        out.food = self.food;
        out.direction = self.direction;
        out.length = self.snake.len() as u32;
        out.score = self.score;
        out.status = self.status;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
