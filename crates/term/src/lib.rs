//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to a
//! crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat the terminal as a canvas: the field is scaled to whatever size it has
//! - Map mouse positions back into field coordinates for drag input

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FieldLayout, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
