//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from core logic, the terminal view,
//! and the event log alike.
//!
//! # Field Geometry
//!
//! The playfield uses widget-style coordinates:
//!
//! - **Origin**: bottom-left corner, `y` grows upward
//! - **Size**: 800 x 600 field units
//! - **Rects**: `pos` is the bottom-left corner; `top = y + h`, `right = x + w`
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SERVE_SPEED` | 4.0 | Horizontal ball speed on serve (units per tick) |
//! | `BOUNCE_SPEEDUP` | 1.1 | Velocity scale on every face hit |
//! | `WIN_SCORE` | 1 | Points needed to win a match |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Side, GameAction, FIELD_WIDTH, FIELD_HEIGHT};
//!
//! assert_eq!(Side::Left.opponent(), Side::Right);
//! assert_eq!(Side::Right.player_number(), 2);
//!
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//!
//! assert_eq!(FIELD_WIDTH, 800.0);
//! assert_eq!(FIELD_HEIGHT, 600.0);
//! ```

pub use glam::DVec2;

/// Playfield width in field units
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height in field units
pub const FIELD_HEIGHT: f64 = 600.0;

/// Ball edge length (the ball is a square box)
pub const BALL_SIZE: f64 = 50.0;

/// Paddle width
pub const PADDLE_WIDTH: f64 = 25.0;

/// Paddle height
pub const PADDLE_HEIGHT: f64 = 200.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Horizontal ball speed on serve, in field units per tick
pub const SERVE_SPEED: f64 = 4.0;

/// Velocity scale applied on each paddle face hit
pub const BOUNCE_SPEEDUP: f64 = 1.1;

/// Score at which a player wins the match
pub const WIN_SCORE: u32 = 1;

/// Distance a keyboard nudge moves a paddle centre
pub const NUDGE_STEP: f64 = 30.0;

/// DAS (Delayed Auto Shift) delay for held paddle keys in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 120;

/// ARR (Auto Repeat Rate) for held paddle keys in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 32;

/// Default serve velocity: toward the right paddle.
pub const SERVE_RIGHT: DVec2 = DVec2::new(SERVE_SPEED, 0.0);

/// Serve velocity toward the left paddle.
pub const SERVE_LEFT: DVec2 = DVec2::new(-SERVE_SPEED, 0.0);


/// One of the two players, identified by the side of the field they defend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other player.
    pub fn opponent(&self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player number as shown on screen (left is player 1).
    pub fn player_number(&self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    /// Win banner text for this player.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pong_types::Side;
    ///
    /// assert_eq!(Side::Left.win_text(), "Player 1 win!");
    /// assert_eq!(Side::Right.win_text(), "Player 2 win!");
    /// ```
    pub fn win_text(&self) -> &'static str {
        match self {
            Side::Left => "Player 1 win!",
            Side::Right => "Player 2 win!",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Match state machine
///
/// - **Playing**: the tick-driven update is active
/// - **Won**: a player reached [`WIN_SCORE`]; ticking is halted and the
///   reset control is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
}

/// Value returned by each tick, telling the scheduler whether to keep
/// calling `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSignal {
    Continue,
    Halt,
}

impl TickSignal {
    pub fn is_halt(&self) -> bool {
        matches!(self, TickSignal::Halt)
    }
}

/// Vertical direction for keyboard paddle nudges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

/// Game actions that can be applied to modify game state
///
/// These come from the terminal frontend: mouse drags, held keys, and the
/// reset control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Pointer drag at field coordinates
    Drag { x: f64, y: f64 },
    /// Move a paddle one step up or down
    Nudge { side: Side, dir: Vertical },
    /// Leave the win screen without touching scores
    Reset,
    /// Clear scores, serve, and resume
    Restart,
    /// Serve again with the default velocity
    Serve,
}

impl GameAction {
    /// Parse a parameterless action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pong_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("reset"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("Serve"), Some(GameAction::Serve));
    /// assert_eq!(GameAction::from_str("drag"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reset" => Some(GameAction::Reset),
            "restart" => Some(GameAction::Restart),
            "serve" => Some(GameAction::Serve),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Drag { .. } => "drag",
            GameAction::Nudge { .. } => "nudge",
            GameAction::Reset => "reset",
            GameAction::Restart => "restart",
            GameAction::Serve => "serve",
        }
    }
}

/// Core-side event emitted during a tick or a state transition.
///
/// Drained by the frontend and written to the event log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoreEvent {
    /// Ball recentred with a new velocity.
    Serve { velocity: DVec2 },
    /// `scorer` got a point; scores after the point.
    Point { scorer: Side, left: u32, right: u32 },
    /// Match over.
    Won { winner: Side, left: u32, right: u32 },
    /// Left the win screen.
    Reset,
}

impl CoreEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreEvent::Serve { .. } => "serve",
            CoreEvent::Point { .. } => "point",
            CoreEvent::Won { .. } => "won",
            CoreEvent::Reset => "reset",
        }
    }
}
