//! GameView: maps a `GameSnapshot` into a framebuffer.
//!
//! Pure; no terminal I/O happens here.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, BOARD_COLUMNS, VISIBLE_ROWS};

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

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: Style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY: Style = Style::new(Rgb::new(70, 70, 80), WELL_BG).dim();
const GHOST: Style = Style::new(Rgb::new(140, 140, 150), WELL_BG).dim();
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

const BLOCK: char = '█';

/// Board origin and frame size inside the viewport
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// Draws the well, the pieces, a side panel and the pause/game-over banners.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell. 2 roughly squares the cells.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Widest cell accepted by [`GameView::new`]
    pub const MAX_CELL_W: u16 = 4;

    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, Self::MAX_CELL_W),
        }
    }

    /// Frame size (border included) in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_COLUMNS as u16 * self.cell_w + 2,
            VISIBLE_ROWS as u16 + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.frame_size();
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            fb.resize(viewport.width, viewport.height);
        }
        fb.fill(Glyph::new(' ', Style::new(VALUE.fg, SCREEN_BG)));

        let layout = self.layout(viewport);
        self.draw_border(fb, layout);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_cell(fb, layout, r as u16, c as u16, piece_glyph(*kind)),
                    None => self.draw_cell(fb, layout, r as u16, c as u16, Glyph::new('·', EMPTY)),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_row) = snap.ghost_row {
                for (r, c) in active.ghost_cells(ghost_row) {
                    self.draw_cell(fb, layout, r as u16, c as u16, Glyph::new('░', GHOST));
                }
            }
            let glyph = piece_glyph(active.kind);
            for (r, c) in active.visible_cells() {
                self.draw_cell(fb, layout, r as u16, c as u16, glyph);
            }
        }

        self.draw_side_panel(fb, snap, layout);

        if snap.game_over {
            self.draw_game_over(fb, layout, snap.lines_cleared);
        } else if snap.paused {
            self.draw_banner(fb, layout, 0, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout) {
        let right = l.x + l.frame_w - 1;
        let bottom = l.y + l.frame_h - 1;
        fb.set(l.x, l.y, Glyph::new('┌', BORDER));
        fb.set(right, l.y, Glyph::new('┐', BORDER));
        fb.set(l.x, bottom, Glyph::new('└', BORDER));
        fb.set(right, bottom, Glyph::new('┘', BORDER));
        fb.rect(l.x + 1, l.y, l.frame_w - 2, 1, Glyph::new('─', BORDER));
        fb.rect(l.x + 1, bottom, l.frame_w - 2, 1, Glyph::new('─', BORDER));
        fb.rect(l.x, l.y + 1, 1, l.frame_h - 2, Glyph::new('│', BORDER));
        fb.rect(right, l.y + 1, 1, l.frame_h - 2, Glyph::new('│', BORDER));
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, l: Layout, row: u16, col: u16, glyph: Glyph) {
        let x = l.x + 1 + col * self.cell_w;
        let y = l.y + 1 + row;
        fb.rect(x, y, self.cell_w, 1, glyph);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: Layout) {
        let x = l.x.saturating_add(l.frame_w).saturating_add(2);
        if x >= fb.width() {
            return;
        }
        let mut y = l.y;

        fb.text(x, y, "LEVEL", LABEL);
        fb.number(x, y + 1, snap.level, VALUE);
        y += 3;

        fb.text(x, y, "LINES", LABEL);
        fb.number(x, y + 1, snap.lines_cleared, VALUE);
        y += 3;

        fb.text(x, y, "HOLD", LABEL);
        match snap.hold {
            Some(kind) => {
                let style = if snap.hold_locked { VALUE.dim() } else { VALUE };
                fb.text(x, y + 1, kind.as_str(), style);
            }
            None => fb.text(x, y + 1, "-", VALUE),
        }
        y += 3;

        fb.text(x, y, "NEXT", LABEL);
        for (i, kind) in snap.next.iter().enumerate() {
            let glyph = piece_glyph(*kind);
            let row = y + 1 + i as u16;
            fb.set(x, row, glyph);
            fb.text(x + 2, row, kind.as_str(), VALUE);
        }
    }

    /// Centered text on the board, `offset` rows below the middle.
    fn draw_banner(&self, fb: &mut FrameBuffer, l: Layout, offset: u16, text: &str) {
        let width = text.chars().count() as u16;
        let x = l.x + l.frame_w.saturating_sub(width) / 2;
        fb.text(x, l.y + l.frame_h / 2 + offset, text, BANNER);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, l: Layout, lines: u32) {
        const SUFFIX: &str = " LINE(S) CLEARED";
        self.draw_banner(fb, l, 0, "GAME OVER");

        let digits = digit_count(lines);
        let width = digits + SUFFIX.len() as u16;
        let x = l.x + l.frame_w.saturating_sub(width) / 2;
        let y = l.y + l.frame_h / 2 + 1;
        let written = fb.number(x, y, lines, BANNER);
        fb.text(x + written, y, SUFFIX, BANNER);
    }
}

fn piece_glyph(kind: PieceKind) -> Glyph {
    Glyph::new(BLOCK, Style::new(kind.color().into(), WELL_BG).bold())
}

fn digit_count(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_000_000_000), 10);
    }

    #[test]
    fn board_is_centered() {
        let view = GameView::default();
        let l = view.layout(Viewport::new(80, 24));
        assert_eq!((l.frame_w, l.frame_h), (22, 22));
        assert_eq!((l.x, l.y), (29, 1));
    }

    #[test]
    fn cell_width_is_clamped() {
        assert_eq!(GameView::new(0).frame_size(), (12, 22));
        assert_eq!(GameView::new(u16::MAX).frame_size(), (42, 22));

        let view = GameView::new(u16::MAX);
        let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
