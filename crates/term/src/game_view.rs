//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Vertical placement of the well inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WELL_BG: Rgb = Rgb::new(20, 20, 28);
const LOCKED_FG: Rgb = Rgb::new(170, 170, 180);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_ghost: true,
        }
    }
}

/// Where the well frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (w, h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        self.draw_border(fb, frame, CellStyle::fg(Rgb::new(200, 200, 200)));

        let locked = CellStyle {
            bg: WELL_BG,
            ..CellStyle::fg(LOCKED_FG)
        };
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                if snap.board[y as usize][x as usize] {
                    self.draw_block(fb, frame, x, y, locked);
                } else {
                    self.draw_empty(fb, frame, x, y);
                }
            }
        }

        if let Some(active) = snap.active {
            if self.show_ghost {
                if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                    let ghost = ActiveSnapshot { y: ghost_y, ..active };
                    let style = CellStyle {
                        bg: WELL_BG,
                        ..CellStyle::fg(Rgb::new(110, 110, 120)).dim()
                    };
                    self.draw_piece(fb, &ghost, |view, fb, x, y| {
                        view.fill_cell(fb, frame, x, y, '░', style)
                    });
                }
            }

            let style = CellStyle {
                bg: WELL_BG,
                ..CellStyle::fg(piece_color(active.kind)).bold()
            };
            self.draw_piece(fb, &active, |view, fb, x, y| {
                view.draw_block(fb, frame, x, y, style)
            });
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        piece: &ActiveSnapshot,
        mut paint: impl FnMut(&Self, &mut FrameBuffer, u16, u16),
    ) {
        for (row, cols) in piece.mask.iter().enumerate() {
            for (col, &filled) in cols.iter().enumerate() {
                if !filled {
                    continue;
                }
                let x = piece.x + col as i8;
                let y = piece.y + row as i8;
                // Rows above the well are not drawn.
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    paint(self, fb, x as u16, y as u16);
                }
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
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

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle {
            bg: WELL_BG,
            ..CellStyle::fg(Rgb::new(70, 70, 80)).dim()
        };
        self.fill_cell(fb, frame, x, y, ' ', style);
        let (px, py) = self.cell_origin(frame, x, y);
        fb.put_char(px, py, '·', style);
    }

    /// Filled cell: `[]` when two columns wide, solid otherwise.
    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, style: CellStyle) {
        if self.cell_w == 2 {
            let (px, py) = self.cell_origin(frame, x, y);
            for dy in 0..self.cell_h {
                fb.put_char(px, py + dy, '[', style);
                fb.put_char(px + 1, py + dy, ']', style);
            }
        } else {
            self.fill_cell(fb, frame, x, y, '█', style);
        }
    }

    fn cell_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut y = frame.y;
        for (name, v) in [("SCORE", snap.score), ("LINES", snap.lines), ("PIECES", snap.pieces)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["A/D  move", "W    rotate", "S    drop", "Q    quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
    }
}

/// Plain-text final message shown after the terminal is restored.
///
/// Quitting is a game over too, so both exits print the same line.
pub fn final_message(snap: &GameSnapshot) -> String {
    format!("Game Over! Final Score: {}", snap.score)
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
    }
}
