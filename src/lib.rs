//! Snake (workspace facade crate).
//!
//! Re-exports the member crates as `tui_snake::{core,input,term,types,web}` so
//! both binaries and the integration tests share one import root.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
pub use tui_snake_web as web;
