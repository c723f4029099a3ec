//! Terminal front end for the snake engine.
//!
//! Rendering goes through a small framebuffer instead of widget layout:
//! `GameView` turns a `core::GameSnapshot` into cells (pure, testable), and
//! `TerminalRenderer` flushes those cells to the terminal.
//!
//! Grid cells are drawn two characters wide so the board looks square.

pub mod fb;
pub mod game_view;
pub mod guard;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameRect, GameView, Overlay, Viewport};
pub use guard::{install_panic_hook, restore_terminal, TerminalGuard};
pub use renderer::{encode_full_into, encode_restore_into, TerminalRenderer};
