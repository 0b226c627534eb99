//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! pointer positions, and provides a held-key handler for the paddles that
//! works in terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_pong_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerEvent, PointerKind};
