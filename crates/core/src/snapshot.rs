use crate::geometry::Rect;
use crate::types::{DVec2, Phase, Side, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddleSnapshot {
    pub rect: Rect,
    pub score: u32,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub field_width: f64,
    pub field_height: f64,
    pub ball: Rect,
    pub ball_velocity: DVec2,
    pub left: PaddleSnapshot,
    pub right: PaddleSnapshot,
    pub phase: Phase,
    /// Win title; `None` while hidden.
    pub banner: Option<Side>,
    pub score_labels: bool,
    pub reset_control: bool,
    pub tick: u64,
    pub elapsed_ms: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.field_width = FIELD_WIDTH;
        self.field_height = FIELD_HEIGHT;
        self.ball = Rect::default();
        self.ball_velocity = DVec2::ZERO;
        self.left = PaddleSnapshot::default();
        self.right = PaddleSnapshot::default();
        self.phase = Phase::Playing;
        self.banner = None;
        self.score_labels = true;
        self.reset_control = false;
        self.tick = 0;
        self.elapsed_ms = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn banner_text(&self) -> Option<&'static str> {
        self.banner.map(|side| side.win_text())
    }

    pub fn paddle(&self, side: Side) -> &PaddleSnapshot {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Stable hash of the visible state (positions, scores, overlays).
    ///
    /// Excludes counters so a halted game keeps the same fingerprint.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        for rect in [self.ball, self.left.rect, self.right.rect] {
            h.write_f64(rect.pos.x);
            h.write_f64(rect.pos.y);
            h.write_f64(rect.size.x);
            h.write_f64(rect.size.y);
        }
        h.write_u64(self.left.score as u64);
        h.write_u64(self.right.score as u64);
        h.write_u64(match self.banner {
            None => 0,
            Some(Side::Left) => 1,
            Some(Side::Right) => 2,
        });
        h.write_u64(self.score_labels as u64 | (self.reset_control as u64) << 1);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball: Rect::default(),
            ball_velocity: DVec2::ZERO,
            left: PaddleSnapshot::default(),
            right: PaddleSnapshot::default(),
            phase: Phase::Playing,
            banner: None,
            score_labels: true,
            reset_control: false,
            tick: 0,
            elapsed_ms: 0,
        };
        s.clear();
        s
    }
}

/// 64-bit FNV-1a; `DefaultHasher` output is not stable across releases.
struct Fnv1a {
    state: u64,
}

impl Fnv1a {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }

    fn write_u64(&mut self, v: u64) {
        for b in v.to_le_bytes() {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
