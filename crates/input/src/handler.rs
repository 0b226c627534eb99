//! Held-key paddle handler for terminal environments.
//!
//! Each paddle has its own lane so both players can hold keys at once.
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{GameAction, Side, Vertical, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Repeat state for one paddle.
#[derive(Debug, Clone)]
struct Lane {
    side: Side,
    held: Option<Vertical>,
    last_key_time: Instant,
    das_timer: u32,
    arr_accumulator: u32,
}

impl Lane {
    fn new(side: Side) -> Self {
        Self {
            side,
            held: None,
            last_key_time: Instant::now(),
            das_timer: 0,
            arr_accumulator: 0,
        }
    }

    fn press(&mut self, dir: Vertical) -> Option<GameAction> {
        self.last_key_time = Instant::now();
        if self.held == Some(dir) {
            return None;
        }
        self.held = Some(dir);
        self.das_timer = 0;
        self.arr_accumulator = 0;
        Some(GameAction::Nudge {
            side: self.side,
            dir,
        })
    }

    fn release(&mut self, dir: Vertical) {
        if self.held == Some(dir) {
            self.clear();
        }
    }

    fn clear(&mut self) {
        self.held = None;
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }

    fn update(
        &mut self,
        elapsed_ms: u32,
        das_delay: u32,
        arr_rate: u32,
        release_timeout: Duration,
        out: &mut ArrayVec<GameAction, 32>,
    ) {
        if self.held.is_some() && self.last_key_time.elapsed() > release_timeout {
            self.clear();
        }

        let Some(dir) = self.held else {
            return;
        };

        let prev_das = self.das_timer;
        self.das_timer = self.das_timer.saturating_add(elapsed_ms);
        if self.das_timer < das_delay {
            return;
        }

        let excess = if prev_das < das_delay {
            self.das_timer - das_delay
        } else {
            elapsed_ms
        };
        self.arr_accumulator += excess;

        while self.arr_accumulator >= arr_rate {
            let _ = out.try_push(GameAction::Nudge {
                side: self.side,
                dir,
            });
            self.arr_accumulator -= arr_rate;
        }
    }
}

/// Tracks held paddle keys and turns them into repeated nudges.
///
/// `W`/`S` drive the left paddle, `Up`/`Down` the right one.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: Lane,
    right: Lane,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            left: Lane::new(Side::Left),
            right: Lane::new(Side::Right),
            das_delay,
            arr_rate: arr_rate.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    fn lane_for(code: KeyCode) -> Option<(Side, Vertical)> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some((Side::Left, Vertical::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some((Side::Left, Vertical::Down)),
            KeyCode::Up => Some((Side::Right, Vertical::Up)),
            KeyCode::Down => Some((Side::Right, Vertical::Down)),
            _ => None,
        }
    }

    fn lane_mut(&mut self, side: Side) -> &mut Lane {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Start holding a paddle key. Returns the immediate nudge on the first
    /// press; repeats while held come from [`update`](Self::update).
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let (side, dir) = Self::lane_for(code)?;
        self.lane_mut(side).press(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some((side, dir)) = Self::lane_for(code) {
            self.lane_mut(side).release(dir);
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        let (das, arr) = (self.das_delay, self.arr_rate);
        self.left.update(elapsed_ms, das, arr, timeout, &mut actions);
        self.right.update(elapsed_ms, das, arr, timeout, &mut actions);
        actions
    }

    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
