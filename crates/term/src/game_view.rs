//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The simulation works in logical pixels on a 600x600 canvas; this view
//! scales pixels down to character cells. The default 10x20 pixels per cell
//! compensates for the typical terminal glyph aspect ratio and yields a
//! 60x30 cell play field.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH};

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

/// A lightweight terminal renderer for the dodge game.
pub struct GameView {
    /// Logical pixels per terminal column.
    px_per_col: i32,
    /// Logical pixels per terminal row.
    px_per_row: i32,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x20 compensates for typical terminal glyph aspect ratio.
        Self {
            px_per_col: 10,
            px_per_row: 20,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: i32, px_per_row: i32) -> Self {
        assert!(px_per_col > 0 && px_per_row > 0);
        Self {
            px_per_col,
            px_per_row,
        }
    }

    /// Play field size in cells (excluding the border).
    pub fn field_cells(&self) -> (u16, u16) {
        (
            (CANVAS_WIDTH / self.px_per_col) as u16,
            (CANVAS_HEIGHT / self.px_per_row) as u16,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (field_w, field_h) = self.field_cells();
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let canvas = CellStyle {
            fg: Rgb::new(130, 130, 140),
            bg: Rgb::new(110, 110, 120),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let player = CellStyle {
            fg: Rgb::new(80, 120, 220),
            bg: Rgb::new(110, 110, 120),
            bold: true,
            dim: false,
        };
        let obstacle = CellStyle {
            fg: Rgb::new(220, 80, 80),
            bg: Rgb::new(110, 110, 120),
            bold: false,
            dim: false,
        };

        // Canvas background.
        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', canvas);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Obstacles first, player on top (matches the original draw order
        // closely enough; the two never overlap in a live frame anyway).
        for ob in &snap.obstacles {
            self.fill_px_rect(fb, start_x, start_y, ob.rect(), '█', obstacle);
        }
        self.fill_px_rect(fb, start_x, start_y, snap.player.rect(), '█', player);

        // Score panel.
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Terminal state overlay.
        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Fill the cells covered by a logical-pixel rectangle, clipped to the
    /// canvas.
    fn fill_px_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        rect: Rect,
        ch: char,
        style: CellStyle,
    ) {
        let (field_w, field_h) = self.field_cells();

        let clip = |v: i32, max: i32| v.clamp(0, max);
        let x0 = clip(rect.x.div_euclid(self.px_per_col), field_w as i32);
        let y0 = clip(rect.y.div_euclid(self.px_per_row), field_h as i32);
        // Round the far edge up so thin slivers of a partially visible
        // square still show.
        let x1 = clip(
            (rect.x + rect.w + self.px_per_col - 1).div_euclid(self.px_per_col),
            field_w as i32,
        );
        let y1 = clip(
            (rect.y + rect.h + self.px_per_row - 1).div_euclid(self.px_per_row),
            field_h as i32,
        );

        if x1 <= x0 || y1 <= y0 {
            return;
        }

        fb.fill_rect(
            start_x + 1 + x0 as u16,
            start_y + 1 + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
            ch,
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        if snap.game_over {
            fb.put_str(panel_x, y, "OVER", label);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "</>  move", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q    quit", hint);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Obstacle};

    fn row_string(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).unwrap_or_default().ch)
            .collect()
    }

    fn contains_text(fb: &FrameBuffer, text: &str) -> bool {
        (0..fb.height()).any(|y| row_string(fb, y).contains(text))
    }

    #[test]
    fn field_cells_match_default_scale() {
        let view = GameView::default();
        assert_eq!(view.field_cells(), (60, 30));
    }

    #[test]
    fn player_is_drawn_at_scaled_position() {
        let mut state = GameState::new(1);
        state.start();
        let snap = state.snapshot();

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 34));

        // Frame is centered: start_x = (80-62)/2 = 9, start_y = (34-32)/2 = 1.
        // Player spans px x 95..145 -> cells 9..15 (rounded up), y 530..580
        // -> cells 26..29.
        let player_fg = Rgb::new(80, 120, 220);
        let cell = fb.get(9 + 1 + 9, 1 + 1 + 26).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, player_fg);

        // Outside the player's columns there is no player color.
        let off = fb.get(9 + 1 + 20, 1 + 1 + 26).unwrap();
        assert_ne!(off.style.fg, player_fg);
    }

    #[test]
    fn obstacle_above_canvas_is_clipped() {
        let mut state = GameState::new(1);
        state.start();
        state.push_obstacle(Obstacle::new(300, -50));
        let snap = state.snapshot();

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 34));

        let obstacle_fg = Rgb::new(220, 80, 80);
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                assert_ne!(fb.get(x, y).unwrap().style.fg, obstacle_fg);
            }
        }
    }

    #[test]
    fn game_over_overlay_is_drawn() {
        let mut state = GameState::new(1);
        state.start();
        state.end_game();
        let snap = state.snapshot();

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 34));
        assert!(contains_text(&fb, "GAME OVER"));
    }

    #[test]
    fn score_panel_shows_score() {
        let mut state = GameState::new(1);
        state.start();
        for _ in 0..42 {
            state.tick(crate::types::TICK_MS);
        }
        let snap = state.snapshot();

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(90, 34));
        assert!(contains_text(&fb, "SCORE"));
        assert!(contains_text(&fb, "42"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = GameState::new(1);
        let view = GameView::default();
        let _ = view.render(&state.snapshot(), Viewport::new(10, 4));
    }
}
