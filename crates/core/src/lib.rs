//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong rules: ball motion, paddle collision
//! response, scoring, and the win/reset state machine. It has **zero
//! dependencies** on terminal I/O, so it can be driven by any scheduler and
//! rendered by any frontend through [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`geometry`]: bottom-left anchored boxes and the overlap test
//! - [`ball`]: the ball and its per-tick move
//! - [`paddle`]: paddles, scores, and ball reflection
//! - [`game_state`]: tick order, scoring, serve/reset, drag input
//! - [`snapshot`]: the renderable state query
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{TickSignal, TICK_MS};
//!
//! let mut game = GameState::new();
//! game.serve_default();
//!
//! // Run until somebody scores and the match is decided.
//! let mut ticks = 0;
//! while game.update(TICK_MS) == TickSignal::Continue {
//!     ticks += 1;
//!     assert!(ticks < 10_000);
//! }
//!
//! let snap = game.snapshot();
//! assert!(snap.reset_control);
//! assert!(snap.banner_text().is_some());
//! ```
//!
//! # Timing
//!
//! The ball velocity is a displacement per tick, so the simulation is
//! independent of wall-clock time. The frontend calls
//! [`GameState::update`](game_state::GameState::update) every 16ms.

pub mod ball;
pub mod game_state;
pub mod geometry;
pub mod paddle;
pub mod snapshot;

pub use tui_pong_types as types;

pub use ball::Ball;
pub use game_state::GameState;
pub use geometry::Rect;
pub use paddle::{Bounce, Paddle};
pub use snapshot::{GameSnapshot, PaddleSnapshot};
