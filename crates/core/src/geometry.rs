//! Axis-aligned boxes in field coordinates (origin bottom-left, `y` up).

use crate::types::DVec2;

/// A box anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> DVec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: DVec2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn center_y(&self) -> f64 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn set_center_y(&mut self, y: f64) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Inclusive overlap test: boxes that only touch along an edge collide.
    pub fn collides(&self, other: &Rect) -> bool {
        if self.right() < other.x() {
            return false;
        }
        if self.x() > other.right() {
            return false;
        }
        if self.top() < other.y() {
            return false;
        }
        if self.y() > other.top() {
            return false;
        }
        true
    }
}
