//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Snake rules and the session controller.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Unit tests cover every rule
//! - **Portable**: Drives both the terminal and the browser front end
//!
//! # Module Structure
//!
//! - [`snake`]: ordered body with O(1) occupancy lookups
//! - [`food`]: uniform food placement over free cells
//! - [`game_state`]: one round (snake, food, heading, score, status) and its `tick`
//! - [`game`]: session controller (phase, pending direction, restarts, events)
//! - [`rng`]: small deterministic LCG
//! - [`snapshot`]: copyable view for renderers
//!
//! # Rules
//!
//! - The snake starts with one segment at the grid center, heading right.
//! - Each tick the head moves one cell; a request to reverse is ignored.
//! - Leaving the grid or entering any body cell (the tail included) ends the round.
//! - Eating food adds 10 points and one segment; new food appears on a free cell.
//! - Filling the whole grid wins the round.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Game, Phase};
//! use tui_snake_core::types::Direction;
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.phase(), Phase::Over);
//!
//! game.restart();
//! game.set_pending_direction(Direction::Up);
//! game.tick();
//!
//! assert_eq!(game.state().direction(), Direction::Up);
//! assert!(game.is_running());
//! ```

pub mod food;
pub mod game;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::generate_food;
pub use game::{EndReason, Game, GameEvent, Phase};
pub use game_state::{Collision, GameState, LayoutError, Status, TickOutcome};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::{CellGrid, GameSnapshot};
