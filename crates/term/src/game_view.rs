//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The field is stretched to fill the viewport below a one-row HUD. Field
//! coordinates are `y`-up, terminal rows are `y`-down, so every conversion
//! goes through [`FieldLayout`] which does the flip in both directions.

use crate::core::{GameSnapshot, Rect};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DVec2, Side};

const HUD_ROWS: u16 = 1;
const MIN_COLS: u16 = 16;
const MIN_ROWS: u16 = 6;

const RESET_LABEL: &str = "[ RESET ]";
const HINT: &str = " W/S  Up/Down  or drag | R restart | Q quit ";

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the field's interior sits on screen and how it scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    /// Top-left interior cell.
    pub origin_x: u16,
    pub origin_y: u16,
    /// Interior size in cells.
    pub cols: u16,
    pub rows: u16,
    field_w: f64,
    field_h: f64,
}

impl FieldLayout {
    /// `None` when the viewport is too small to draw a playable field.
    pub fn compute(field_w: f64, field_h: f64, viewport: Viewport) -> Option<Self> {
        let cols = viewport.width.checked_sub(2)?;
        let rows = viewport.height.checked_sub(HUD_ROWS + 2)?;
        if cols < MIN_COLS || rows < MIN_ROWS || field_w <= 0.0 || field_h <= 0.0 {
            return None;
        }
        Some(Self {
            origin_x: 1,
            origin_y: HUD_ROWS + 1,
            cols,
            rows,
            field_w,
            field_h,
        })
    }

    fn scale(&self) -> (f64, f64) {
        (
            self.cols as f64 / self.field_w,
            self.rows as f64 / self.field_h,
        )
    }

    /// Screen cells covered by `rect` as `(x, y, w, h)`, clipped to the
    /// interior. Anything visible covers at least one cell.
    pub fn rect_cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let (sx, sy) = self.scale();
        let cols = self.cols as f64;
        let rows = self.rows as f64;

        let c0 = (rect.x() * sx).floor();
        let c1 = (rect.right() * sx).ceil().max(c0 + 1.0);
        let r0 = rows - (rect.top() * sy).ceil();
        let r1 = (rows - (rect.y() * sy).floor()).max(r0 + 1.0);

        let c0 = c0.max(0.0);
        let c1 = c1.min(cols);
        let r0 = r0.max(0.0);
        let r1 = r1.min(rows);
        if !(c0 < c1 && r0 < r1) {
            return None;
        }

        Some((
            self.origin_x + c0 as u16,
            self.origin_y + r0 as u16,
            (c1 - c0) as u16,
            (r1 - r0) as u16,
        ))
    }

    /// Field coordinates at the centre of a screen cell, or `None` outside
    /// the interior.
    pub fn cell_to_field(&self, column: u16, row: u16) -> Option<DVec2> {
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let cx = column - self.origin_x;
        let cy = row - self.origin_y;
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        let x = (cx as f64 + 0.5) * self.field_w / self.cols as f64;
        let y = ((self.rows - cy) as f64 - 0.5) * self.field_h / self.rows as f64;
        Some(DVec2::new(x, y))
    }

    fn banner_row(&self) -> u16 {
        self.origin_y + self.rows / 3
    }

    fn reset_row(&self) -> u16 {
        self.origin_y + self.rows * 2 / 3
    }

    fn centered_x(&self, text_w: u16) -> u16 {
        self.origin_x + self.cols.saturating_sub(text_w) / 2
    }
}

/// A lightweight terminal renderer for the Pong game.
#[derive(Debug, Clone)]
pub struct GameView {
    left_color: Rgb,
    right_color: Rgb,
    ball_color: Rgb,
    show_hint: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            left_color: Rgb::new(80, 220, 220),
            right_color: Rgb::new(255, 165, 0),
            ball_color: Rgb::new(240, 220, 80),
            show_hint: true,
        }
    }
}

impl GameView {
    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<FieldLayout> {
        FieldLayout::compute(snap.field_width, snap.field_height, viewport)
    }

    /// Map a terminal cell to field coordinates for drag input.
    pub fn pointer_to_field(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<DVec2> {
        self.layout(snap, viewport)?.cell_to_field(column, row)
    }

    /// Screen span `(x, y, width)` of the reset control when it is shown.
    pub fn reset_button(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<(u16, u16, u16)> {
        if !snap.reset_control {
            return None;
        }
        let layout = self.layout(snap, viewport)?;
        let w = RESET_LABEL.chars().count() as u16;
        Some((layout.centered_x(w), layout.reset_row(), w))
    }

    pub fn hits_reset(&self, snap: &GameSnapshot, viewport: Viewport, column: u16, row: u16) -> bool {
        match self.reset_button(snap, viewport) {
            Some((x, y, w)) => row == y && column >= x && column < x + w,
            None => false,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(layout) = self.layout(snap, viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default().bold());
            return;
        };

        if snap.score_labels {
            self.draw_scores(fb, snap, viewport);
        }

        let bg = CellStyle::fg(Rgb::new(90, 90, 100)).on(FIELD_BG);
        fb.fill_rect(layout.origin_x, layout.origin_y, layout.cols, layout.rows, ' ', bg);
        self.draw_border(fb, &layout);
        self.draw_net(fb, &layout);

        self.draw_rect(fb, &layout, &snap.left.rect, '█', self.left_color);
        self.draw_rect(fb, &layout, &snap.right.rect, '█', self.right_color);
        self.draw_rect(fb, &layout, &snap.ball, '▓', self.ball_color);

        if let Some(text) = snap.banner_text() {
            let w = text.chars().count() as u16;
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).on(FIELD_BG).bold();
            fb.put_str(layout.centered_x(w), layout.banner_row(), text, style);
        }

        if let Some((x, y, _)) = self.reset_button(snap, viewport) {
            let style = CellStyle::fg(Rgb::new(0, 0, 0))
                .on(Rgb::new(220, 220, 220))
                .bold();
            fb.put_str(x, y, RESET_LABEL, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_scores(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let label = CellStyle::default().bold();
        for (side, color) in [(Side::Left, self.left_color), (Side::Right, self.right_color)] {
            let quarter = match side {
                Side::Left => viewport.width / 4,
                Side::Right => viewport.width - viewport.width / 4,
            };
            let x = quarter.saturating_sub(2);
            let x = fb.put_str(x, 0, if side == Side::Left { "P1 " } else { "P2 " }, label);
            fb.put_u32(x, 0, snap.paddle(side).score, CellStyle::fg(color).bold());
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &FieldLayout) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let x = layout.origin_x - 1;
        let y = layout.origin_y - 1;
        let w = layout.cols + 2;
        let h = layout.rows + 2;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }

        let hint_w = HINT.chars().count() as u16;
        if self.show_hint && hint_w + 4 <= w {
            fb.put_str(x + (w - hint_w) / 2, y + h - 1, HINT, style.dim());
        }
    }

    fn draw_net(&self, fb: &mut FrameBuffer, layout: &FieldLayout) {
        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(FIELD_BG).dim();
        let x = layout.origin_x + layout.cols / 2;
        for dy in (0..layout.rows).step_by(2) {
            fb.put_char(x, layout.origin_y + dy, '┊', style);
        }
    }

    fn draw_rect(&self, fb: &mut FrameBuffer, layout: &FieldLayout, rect: &Rect, ch: char, fg: Rgb) {
        if let Some((x, y, w, h)) = layout.rect_cells(rect) {
            fb.fill_rect(x, y, w, h, ch, CellStyle::fg(fg).on(FIELD_BG).bold());
        }
    }
}
