//! Browser front end.
//!
//! A small axum server owns one shared [`session::Session`]. A background task
//! ticks it every `TICK_MS`; the page polls the state as JSON and posts
//! direction changes and restarts.

pub mod protocol;
pub mod server;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use protocol::{build_state, DirectionRequest, ErrorCode, ErrorMessage, Notice, StateMessage};
pub use server::{router, run_server, ServerConfig};
pub use session::{run_ticker, Session, SharedSession};
