//! TUI Pong (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pong::{core,input,term,types}` and
//! holds the parts only the binary needs: configuration, the event log and
//! the tick session.

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub mod config;
pub mod event_log;
pub mod session;
