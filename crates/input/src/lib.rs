//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and answers the replay prompt.
//! Keys that map to nothing are ignored by callers.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, replay_answer, should_quit};
