//! Game state module - owns the ball and both paddles
//!
//! This module runs the match: per-tick ball motion, paddle and wall bounces,
//! scoring and re-serving, and the `Playing`/`Won` state machine. It also
//! routes pointer drags to the paddles.

use arrayvec::ArrayVec;

use crate::ball::Ball;
use crate::paddle::Paddle;
use crate::snapshot::{GameSnapshot, PaddleSnapshot};
use crate::types::*;

const EVENT_CAPACITY: usize = 16;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    width: f64,
    height: f64,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    phase: Phase,
    /// Win title; `None` while hidden.
    banner: Option<Side>,
    score_labels: bool,
    reset_control: bool,
    /// Ticks run while playing.
    tick: u64,
    elapsed_ms: u64,
    /// Events since the last drain (consumed by the frontend).
    events: ArrayVec<CoreEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a game on the standard field. The ball is at rest until the
    /// first serve.
    pub fn new() -> Self {
        Self::with_field(FIELD_WIDTH, FIELD_HEIGHT)
    }

    pub fn with_field(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ball: Ball::new(),
            left: Paddle::for_side(Side::Left, width),
            right: Paddle::for_side(Side::Right, width),
            phase: Phase::Playing,
            banner: None,
            score_labels: true,
            reset_control: false,
            tick: 0,
            elapsed_ms: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.banner
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field_width = self.width;
        out.field_height = self.height;
        out.ball = self.ball.rect;
        out.ball_velocity = self.ball.velocity;
        out.left = PaddleSnapshot {
            rect: self.left.rect,
            score: self.left.score(),
        };
        out.right = PaddleSnapshot {
            rect: self.right.rect,
            score: self.right.score(),
        };
        out.phase = self.phase;
        out.banner = self.banner;
        out.score_labels = self.score_labels;
        out.reset_control = self.reset_control;
        out.tick = self.tick;
        out.elapsed_ms = self.elapsed_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Drain events produced since the last call.
    pub fn take_events(&mut self) -> ArrayVec<CoreEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: CoreEvent) {
        // Full buffer means nobody is draining; drop rather than grow.
        let _ = self.events.try_push(event);
    }

    /// Put the ball and paddles back in the middle and launch the ball with
    /// `velocity`. Hides the win title.
    pub fn serve_ball(&mut self, velocity: DVec2) {
        self.banner = None;
        let center = self.center();
        self.ball.set_center(center);
        self.ball.velocity = velocity;
        self.left.set_center_y(center.y);
        self.right.set_center_y(center.y);
        self.push_event(CoreEvent::Serve { velocity });
    }

    /// Serve toward the right paddle.
    pub fn serve_default(&mut self) {
        self.serve_ball(SERVE_RIGHT);
    }

    /// Advance the game by one tick.
    ///
    /// Returns [`TickSignal::Halt`] once a player has won; the scheduler
    /// should stop calling until [`reset`](Self::reset) or
    /// [`restart`](Self::restart).
    pub fn update(&mut self, elapsed_ms: u32) -> TickSignal {
        if self.phase == Phase::Won {
            return TickSignal::Halt;
        }

        let left = self.left.score();
        let right = self.right.score();
        if left >= WIN_SCORE || right >= WIN_SCORE {
            let winner = if left > right { Side::Left } else { Side::Right };
            self.phase = Phase::Won;
            self.banner = Some(winner);
            self.score_labels = false;
            self.reset_control = true;
            self.push_event(CoreEvent::Won {
                winner,
                left,
                right,
            });
            return TickSignal::Halt;
        }

        self.tick += 1;
        self.elapsed_ms += elapsed_ms as u64;

        self.ball.advance();

        // Fixed order; only matters if the ball overlaps both paddles.
        self.left.bounce_ball(&mut self.ball);
        self.right.bounce_ball(&mut self.ball);

        // Walls flip the direction but do not pull the ball back in.
        if self.ball.y() < 0.0 || self.ball.top() > self.height {
            self.ball.velocity.y *= -1.0;
        }

        if self.ball.x() < 0.0 {
            self.score_point(Side::Right);
            self.serve_ball(SERVE_RIGHT);
        }
        if self.ball.right() > self.width {
            self.score_point(Side::Left);
            self.serve_ball(SERVE_LEFT);
        }

        TickSignal::Continue
    }

    fn score_point(&mut self, scorer: Side) {
        self.paddle_mut(scorer).add_point();
        self.push_event(CoreEvent::Point {
            scorer,
            left: self.left.score(),
            right: self.right.score(),
        });
    }

    /// Leave the win screen: drop the reset control, show the score labels,
    /// resume ticking.
    ///
    /// Scores and positions are left as they are, so the next tick sees the
    /// same winning score again. Use [`restart`](Self::restart) for a new
    /// match. Returns `false` when not on the win screen.
    pub fn reset(&mut self) -> bool {
        if self.phase != Phase::Won {
            return false;
        }
        self.reset_control = false;
        self.score_labels = true;
        self.phase = Phase::Playing;
        self.push_event(CoreEvent::Reset);
        true
    }

    /// Start a fresh match: zero scores, serve, and leave the win screen.
    pub fn restart(&mut self) {
        self.left.clear_score();
        self.right.clear_score();
        self.serve_default();
        self.reset();
    }

    /// Move a paddle to follow a pointer drag at field coordinates.
    ///
    /// Drags in the left third steer the left paddle, drags in the right
    /// third steer the right one. The bounds check only refuses a paddle
    /// that sticks out of both the top and the bottom, so it does not clamp.
    pub fn drag(&mut self, x: f64, y: f64) -> bool {
        let third = self.width / 3.0;
        let mut moved = false;
        if x < third && self.paddle_in_bounds(Side::Left) {
            self.left.set_center_y(y);
            moved = true;
        }
        if x > self.width - third && self.paddle_in_bounds(Side::Right) {
            self.right.set_center_y(y);
            moved = true;
        }
        moved
    }

    fn paddle_in_bounds(&self, side: Side) -> bool {
        let paddle = self.paddle(side);
        paddle.top() < self.height || paddle.y() > 0.0
    }

    /// Keyboard stand-in for a drag: one step up or down on `side`'s third.
    pub fn nudge(&mut self, side: Side, dir: Vertical) -> bool {
        let step = match dir {
            Vertical::Up => NUDGE_STEP,
            Vertical::Down => -NUDGE_STEP,
        };
        let x = match side {
            Side::Left => 0.0,
            Side::Right => self.width,
        };
        let y = self.paddle(side).center_y() + step;
        self.drag(x, y)
    }

    /// Apply a frontend action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Drag { x, y } => self.drag(x, y),
            GameAction::Nudge { side, dir } => self.nudge(side, dir),
            GameAction::Reset => self.reset(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Serve => {
                if self.phase == Phase::Won {
                    return false;
                }
                self.serve_default();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
