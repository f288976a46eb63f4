//! GameView: maps a read-only [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It only uses the engine's public accessors, so it
//! can be unit-tested against any game state.

use crate::core::{get_shape, Game, ShapeSource};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, PieceKind};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_GAP: u16 = 2;
const PANEL_MIN_WIDTH: u16 = 10;

/// Board + side panel renderer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the usual glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into<S: ShapeSource>(&self, game: &Game<S>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let frame_w = game.cols() * self.cell_w + 2;
        let frame_h = game.rows() + 2;
        let panel_w = PANEL_GAP + PANEL_MIN_WIDTH;

        let total_w = frame_w + panel_w;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..game.rows() {
            for col in 0..game.cols() {
                let cell = game.cell_at(row as i16, col as i16).unwrap_or_default();
                let (ch, style) = match cell {
                    Cell::Block(kind) => ('█', piece_style(kind)),
                    Cell::Empty => ('·', Style::new(Rgb::new(90, 90, 100), WELL_BG)),
                };
                let x = start_x + 1 + col * self.cell_w;
                fb.fill_rect(x, start_y + 1 + row, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(fb, game, start_x + frame_w + PANEL_GAP, start_y);

        if game.is_game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: ShapeSource>(&self, game: &Game<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::default();
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

    fn draw_side_panel<S: ShapeSource>(&self, fb: &mut FrameBuffer, game: &Game<S>, x: u16, y: u16) {
        let label = Style::default().bold();
        let value = Style::default();

        fb.put_str(x, y, "NEXT", label);
        let next = game.next();
        for (dr, dc) in get_shape(next.kind, next.rotation) {
            let px = x + dc as u16 * self.cell_w;
            let py = y + 1 + dr as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', piece_style(next.kind));
        }

        let mut y = y + 6;
        fb.put_str(x, y, "SCORE", label);
        y += 1;
        fb.put_u32(x, y, game.score(), value);
        y += 2;

        fb.put_str(x, y, "LINES", label);
        y += 1;
        fb.put_u32(x, y, game.lines_cleared(), value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(tx, y + h / 2, text, style);
    }
}

fn piece_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(230, 230, 230),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    };
    Style::new(fg, WELL_BG).bold()
}
