//! StageView: maps the `TermHost` shadow state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::host::TermHost;
use crate::types::{Color, STAGE_HEIGHT, STAGE_WIDTH};

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

/// A lightweight terminal view of the stage and counters.
pub struct StageView {
    /// Stage cell width in terminal columns.
    cell_w: u16,
    /// Stage cell height in terminal rows.
    cell_h: u16,
}

impl Default for StageView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl StageView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the host's shadow state into a framebuffer.
    pub fn render(&self, host: &TermHost, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let stage_px_w = (STAGE_WIDTH as u16) * self.cell_w;
        let stage_px_h = (STAGE_HEIGHT as u16) * self.cell_h;

        let start_x = viewport.width.saturating_sub(stage_px_w + PANEL_WIDTH) / 2;
        let start_y = viewport.height.saturating_sub(stage_px_h) / 2;

        for y in 0..STAGE_HEIGHT {
            for x in 0..STAGE_WIDTH {
                let Some(cell) = host.cell((x, y)) else {
                    continue;
                };
                let (ch, style) = if cell.border {
                    ('▒', style_for(Color::BORDER))
                } else if cell.occupied || cell.active {
                    ('█', style_for(cell.color))
                } else {
                    (
                        ' ',
                        CellStyle {
                            fg: Rgb::new(80, 80, 90),
                            bg: Rgb::new(20, 20, 28),
                            bold: false,
                        },
                    )
                };
                fb.fill_rect(
                    start_x + (x as u16) * self.cell_w,
                    start_y + (y as u16) * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    ch,
                    style,
                );
            }
        }

        self.draw_panel(&mut fb, host, start_x + stage_px_w + 2, start_y + 1);

        if host.game_over() {
            self.draw_game_over(&mut fb, start_x, start_y, stage_px_w, stage_px_h);
        }

        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, host: &TermHost, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &host.score().to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &host.level().to_string(), value);
        fb.put_str(x, y + 6, "LINES", label);
        fb.put_str(x, y + 7, &host.lines().to_string(), value);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 80, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let hint = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let msg = "GAME OVER";
        let sub = "r: restart  q: quit";
        let cy = y + h / 2;
        let mx = x + w.saturating_sub(msg.len() as u16) / 2;
        let sx = x + w.saturating_sub(sub.len() as u16) / 2;
        fb.put_str(mx, cy, msg, style);
        fb.put_str(sx, cy + 1, sub, hint);
    }
}

const PANEL_WIDTH: u16 = 10;

fn style_for(color: Color) -> CellStyle {
    let fg = match color {
        Color::CYAN => Rgb::new(0, 240, 240),
        Color::BLUE => Rgb::new(60, 90, 240),
        Color::ORANGE => Rgb::new(240, 160, 0),
        Color::YELLOW => Rgb::new(240, 240, 0),
        Color::GREEN => Rgb::new(0, 230, 80),
        Color::PURPLE => Rgb::new(170, 60, 240),
        Color::RED => Rgb::new(240, 50, 50),
        Color::BORDER => Rgb::new(130, 130, 140),
        _ => Rgb::new(220, 220, 220),
    };
    CellStyle {
        fg,
        bg: Rgb::new(0, 0, 0),
        bold: false,
    }
}
