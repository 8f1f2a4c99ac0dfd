//! GameView: maps a memory `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::glyphs::glyph_for;
use crate::types::{Position, TileState};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame sits in the viewport for a given board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    tile_w: u16,
    tile_h: u16,
    gap: u16,
}

impl BoardLayout {
    /// Top-left terminal cell of a tile
    pub fn tile_origin(&self, pos: Position) -> (u16, u16) {
        let x = self.start_x + 1 + self.gap + pos.col as u16 * (self.tile_w + self.gap);
        let y = self.start_y + 1 + self.gap + pos.row as u16 * (self.tile_h + self.gap);
        (x, y)
    }

    /// Tile under a terminal cell, if any. Gaps and the border hit nothing.
    pub fn tile_at(&self, x: u16, y: u16, rows: u8, cols: u8) -> Option<Position> {
        let col = Self::axis_hit(x, self.start_x + 1 + self.gap, self.tile_w, self.gap)?;
        let row = Self::axis_hit(y, self.start_y + 1 + self.gap, self.tile_h, self.gap)?;
        if row >= rows as u16 || col >= cols as u16 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    fn axis_hit(v: u16, origin: u16, size: u16, gap: u16) -> Option<u16> {
        let rel = v.checked_sub(origin)?;
        let stride = size + gap;
        (rel % stride < size).then_some(rel / stride)
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const FELT: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
const HIDDEN: CellStyle = CellStyle::new(Rgb::new(110, 150, 170), Rgb::new(173, 216, 230));
const REVEALED_BG: Rgb = Rgb::new(55, 55, 70);
const MISMATCH_BG: Rgb = Rgb::new(120, 30, 35);
const MATCHED_BG: Rgb = Rgb::new(25, 60, 35);
const CURSOR: CellStyle = CellStyle::new(Rgb::new(255, 220, 60), Rgb::new(30, 30, 40)).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles (also used for the cursor outline).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 reads roughly square with typical terminal glyph aspect ratio.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, rows: u8, cols: u8, viewport: Viewport) -> BoardLayout {
        let inner_w = cols as u16 * (self.tile_w + self.gap) + self.gap;
        let inner_h = rows as u16 * (self.tile_h + self.gap) + self.gap;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            tile_w: self.tile_w,
            tile_h: self.tile_h,
            gap: self.gap,
        }
    }

    /// Hit-test a terminal cell (e.g. a mouse click) against the board.
    pub fn tile_at(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Position> {
        self.layout(snap.rows, snap.cols, viewport)
            .tile_at(x, y, snap.rows, snap.cols)
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.rows, snap.cols, viewport);

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            FELT,
        );
        fb.draw_box(layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, BORDER);

        for tile in &snap.tiles {
            self.draw_tile(fb, &layout, tile, snap.is_mismatched(tile.position));
        }

        if let Some(pos) = cursor.filter(|&p| snap.tile(p).is_some() && !snap.is_won()) {
            let (x, y) = layout.tile_origin(pos);
            fb.draw_box(
                x.saturating_sub(1),
                y.saturating_sub(1),
                self.tile_w + 2,
                self.tile_h + 2,
                CURSOR,
            );
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.tiles.is_empty() {
            self.draw_overlay_line(fb, &layout, 0, "NO BOARD");
        } else if snap.is_won() {
            self.draw_win_overlay(fb, snap, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<Position>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, tile: &TileSnapshot, mismatched: bool) {
        let (x, y) = layout.tile_origin(tile.position);
        let (cx, cy) = (x + self.tile_w / 2, y + self.tile_h / 2);

        if tile.state == TileState::Hidden {
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', HIDDEN);
            fb.put_char(cx, cy, '?', HIDDEN.dim());
            return;
        }

        let bg = match tile.state {
            TileState::Matched => MATCHED_BG,
            _ if mismatched => MISMATCH_BG,
            _ => REVEALED_BG,
        };
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(VALUE.fg, bg));

        let (ch, fg) = tile.symbol.map(glyph_for).unwrap_or(('?', VALUE.fg));
        let face = CellStyle::new(fg, bg).bold();
        let face = if tile.state == TileState::Matched {
            face.dim()
        } else {
            face
        };
        fb.put_char(cx, cy, ch, face);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "MOVES", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", LABEL);
        y = y.saturating_add(1);
        let w = fb.put_u32(panel_x, y, snap.elapsed_seconds, VALUE);
        fb.put_char(panel_x + w, y, 's', VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", LABEL);
        y = y.saturating_add(1);
        let w = fb.put_u32(panel_x, y, snap.matched_pairs, VALUE);
        fb.put_char(panel_x + w, y, '/', VALUE);
        fb.put_u32(panel_x + w + 1, y, snap.total_pairs, VALUE);
        y = y.saturating_add(2);

        let help = VALUE.dim();
        for line in ["SPACE flip", "R     new game", "Q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_win_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        self.draw_overlay_line(fb, layout, -1, "YOU WON!");

        // "<moves> moves, <secs>s"
        let width = digits(snap.move_count) + 8 + digits(snap.elapsed_seconds) + 1;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        let mut x = layout.start_x + layout.frame_w.saturating_sub(width) / 2;
        let y = layout.start_y + layout.frame_h / 2 + 1;
        x += fb.put_u32(x, y, snap.move_count, style);
        x += fb.put_str(x, y, " moves, ", style);
        x += fb.put_u32(x, y, snap.elapsed_seconds, style);
        fb.put_char(x, y, 's', style);
    }

    fn draw_overlay_line(&self, fb: &mut FrameBuffer, layout: &BoardLayout, dy: i16, text: &str) {
        let mid_y = (layout.start_y + layout.frame_h / 2).saturating_add_signed(dy);
        let text_w = text.chars().count() as u16;
        let x = layout.start_x + layout.frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(4_000_000_000), 10);
    }

    #[test]
    fn test_layout_frame_size() {
        let view = GameView::default();
        // 5 cols * (7 + 1) + 1 = 41 inner, +2 border
        let layout = view.layout(4, 5, Viewport::new(43, 19));
        assert_eq!(layout.frame_w, 43);
        assert_eq!(layout.frame_h, 19);
        assert_eq!(layout.start_x, 0);
        assert_eq!(layout.tile_origin(Position::new(0, 0)), (2, 2));
        assert_eq!(layout.tile_origin(Position::new(1, 2)), (18, 6));
    }

    #[test]
    fn test_tile_at_skips_gaps() {
        let view = GameView::default();
        let layout = view.layout(2, 2, Viewport::new(19, 11));

        assert_eq!(layout.tile_at(2, 2, 2, 2), Some(Position::new(0, 0)));
        assert_eq!(layout.tile_at(8, 4, 2, 2), Some(Position::new(0, 0)));
        // Gap column between tiles
        assert_eq!(layout.tile_at(9, 2, 2, 2), None);
        assert_eq!(layout.tile_at(10, 6, 2, 2), Some(Position::new(1, 1)));
        // Border
        assert_eq!(layout.tile_at(0, 0, 2, 2), None);
        // Past the last column
        assert_eq!(layout.tile_at(18, 2, 2, 2), None);
    }
}
