//! The ball: a square box that moves by its velocity once per tick.

use crate::geometry::Rect;
use crate::types::{DVec2, BALL_SIZE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Displacement per tick, in field units.
    pub velocity: DVec2,
}

impl Ball {
    /// A resting ball at the origin.
    pub fn new() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE),
            velocity: DVec2::ZERO,
        }
    }

    /// Move one tick: `pos += velocity`.
    ///
    /// No bounds checking; walls and goals are handled by the game.
    #[inline]
    pub fn advance(&mut self) {
        self.rect.pos += self.velocity;
    }

    pub fn x(&self) -> f64 {
        self.rect.x()
    }

    pub fn y(&self) -> f64 {
        self.rect.y()
    }

    pub fn top(&self) -> f64 {
        self.rect.top()
    }

    pub fn right(&self) -> f64 {
        self.rect.right()
    }

    pub fn center(&self) -> DVec2 {
        self.rect.center()
    }

    pub fn set_center(&mut self, center: DVec2) {
        self.rect.set_center(center);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}
