//! Paddles: fixed horizontal position, draggable vertically, one score each.

use crate::ball::Ball;
use crate::geometry::Rect;
use crate::types::{DVec2, Side, BOUNCE_SPEEDUP, FIELD_WIDTH, PADDLE_HEIGHT, PADDLE_WIDTH};

/// Outcome of [`Paddle::bounce_ball`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    /// No overlap; velocity untouched.
    None,
    /// Edge contact; only the vertical velocity flipped.
    Edge,
    /// Face contact; horizontal reversed, sped up, spin added.
    Face,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    score: u32,
}

impl Paddle {
    /// A paddle at `x`, vertically at the bottom of the field.
    pub fn new(x: f64) -> Self {
        Self {
            rect: Rect::new(x, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            score: 0,
        }
    }

    /// Paddle for the given side of a field `field_width` wide.
    pub fn for_side(side: Side, field_width: f64) -> Self {
        match side {
            Side::Left => Self::new(0.0),
            Side::Right => Self::new(field_width - PADDLE_WIDTH),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub(crate) fn clear_score(&mut self) {
        self.score = 0;
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

    pub fn center_y(&self) -> f64 {
        self.rect.center_y()
    }

    pub fn set_center_y(&mut self, y: f64) {
        self.rect.set_center_y(y);
    }

    /// Reflect the ball if it overlaps this paddle.
    ///
    /// The edge-hit test compares `ball.top` with the paddle's bottom and
    /// `ball.y` with the paddle's `x` using exact equality, so it only fires
    /// on perfectly aligned contacts. Everything else is a face hit: the
    /// horizontal velocity reverses, the whole vector scales by
    /// [`BOUNCE_SPEEDUP`], and the contact offset from the paddle centre
    /// (in half-heights) is added to the vertical component.
    #[allow(clippy::float_cmp)]
    pub fn bounce_ball(&self, ball: &mut Ball) -> Bounce {
        if !self.rect.collides(&ball.rect) {
            return Bounce::None;
        }

        if ball.top() == self.y() || ball.y() == self.x() {
            ball.velocity.y *= -1.0;
            return Bounce::Edge;
        }

        let offset = (ball.center().y - self.center_y()) / (self.rect.height() / 2.0);
        let bounced = DVec2::new(-ball.velocity.x, ball.velocity.y) * BOUNCE_SPEEDUP;
        ball.velocity = DVec2::new(bounced.x, bounced.y + offset);
        Bounce::Face
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::for_side(Side::Left, FIELD_WIDTH)
    }
}
