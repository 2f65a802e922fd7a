//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, Tile, GRID_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// A lightweight terminal renderer for the 8x8 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x2 fits a five-digit label and keeps the board inside 80x24.
        Self {
            cell_w: 6,
            cell_h: 2,
        }
    }
}

impl GameView {
    /// Tiles narrower than 1x1 are clamped.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board size including the border, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), BLACK),
        );

        for (row, values) in snap.cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        let headline = match snap.status.outcome() {
            Outcome::InProgress => None,
            Outcome::Won => Some("YOU WIN"),
            Outcome::Lost => Some("GAME OVER"),
        };
        if let Some(text) = headline {
            let mid_y = start_y + frame_h / 2;
            let overlay = CellStyle::new(WHITE, BLACK).bold();
            put_centered(fb, start_x, frame_w, mid_y.saturating_sub(1), text, overlay);
            put_centered(fb, start_x, frame_w, mid_y, "press r to restart", overlay);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: Tile) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let label_y = py + (self.cell_h - 1) / 2;

        if value == 0 {
            let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(px + (self.cell_w - 1) / 2, label_y, '·', style);
            return;
        }

        let bg = tile_color(value);
        let style = CellStyle::new(label_color(bg), bg).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(value, &mut digits) as u16;
        let label_x = px + self.cell_w.saturating_sub(len) / 2;
        fb.put_u32(label_x, label_y, value, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        let help = CellStyle::new(Rgb::new(120, 120, 130), BLACK);

        let stats = [
            ("MAX", snap.max_tile),
            ("GOAL", snap.win_tile),
            ("MOVES", snap.moves),
            ("EMPTY", snap.empty_count as u32),
        ];
        let mut cy = y;
        for (name, n) in stats {
            fb.put_str(x, cy, name, label);
            fb.put_u32(x, cy + 1, n, value);
            cy += 3;
        }

        for line in ["arrows/wasd: move", "r: restart", "q: quit"] {
            if cy >= viewport.height {
                break;
            }
            fb.put_str(x, cy, line, help);
            cy += 1;
        }
    }
}

/// Tile background by value. Unlisted values (beyond 4096) are gray.
pub fn tile_color(value: Tile) -> Rgb {
    match value {
        2 => Rgb::new(173, 216, 230),
        4 => Rgb::new(100, 149, 237),
        8 => Rgb::new(65, 105, 225),
        16 => Rgb::new(255, 165, 0),
        32 => Rgb::new(255, 140, 0),
        64 => Rgb::new(255, 0, 0),
        128 => Rgb::new(0, 128, 0),
        256 => Rgb::new(144, 238, 144),
        512 => Rgb::new(255, 255, 0),
        1024 => Rgb::new(255, 215, 0),
        2048 => Rgb::new(128, 0, 128),
        4096 => Rgb::new(255, 0, 255),
        _ => Rgb::new(128, 128, 128),
    }
}

/// Black on light tiles, white on dark ones.
fn label_color(bg: Rgb) -> Rgb {
    let luma = 299 * bg.r as u32 + 587 * bg.g as u32 + 114 * bg.b as u32;
    if luma >= 128_000 {
        BLACK
    } else {
        WHITE
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_contrast() {
        assert_eq!(label_color(tile_color(2)), BLACK);
        assert_eq!(label_color(tile_color(512)), BLACK);
        assert_eq!(label_color(tile_color(2048)), WHITE);
        assert_eq!(label_color(tile_color(128)), WHITE);
    }

    #[test]
    fn unknown_values_are_gray() {
        assert_eq!(tile_color(8192), Rgb::new(128, 128, 128));
        assert_eq!(tile_color(3), Rgb::new(128, 128, 128));
    }

    #[test]
    fn frame_size_counts_border() {
        assert_eq!(GameView::default().frame_size(), (50, 18));
        assert_eq!(GameView::new(0, 0).frame_size(), (10, 10));
    }
}
