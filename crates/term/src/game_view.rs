//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSession, Menu};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, Coord, SessionState};

/// Colour stops of the snake body gradient, head first.
pub const RAINBOW: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(148, 0, 211),
];

/// Segments it takes to blend from one stop to the next.
pub const GRADIENT_LENGTH: usize = 25;

const BG: Rgb = Rgb::new(0, 0, 0);
const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const BORDER_WARNING: Rgb = Rgb::new(230, 60, 60);
const FOOD: Rgb = Rgb::new(240, 70, 70);
const WALL: Rgb = Rgb::new(150, 150, 160);
const HEAD: Rgb = Rgb::new(255, 255, 255);
const HIGHLIGHT: Rgb = Rgb::new(250, 220, 90);

/// Body colour for segment `index` (0 is the head).
pub fn segment_color(index: usize) -> Rgb {
    let stop = (index / GRADIENT_LENGTH) % RAINBOW.len();
    let next = (stop + 1) % RAINBOW.len();
    let t = (index % GRADIENT_LENGTH) as f32 / GRADIENT_LENGTH as f32;
    RAINBOW[stop].lerp(RAINBOW[next], t)
}

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

/// Screen position of the bordered play area.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(BORDER, BG)));

        let frame = self.layout(session, viewport);
        let state = session.state();

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::new(BORDER, FIELD_BG),
        );

        let warning = state == SessionState::Play && session.warning_frames() > 0;
        let border = CellStyle::new(if warning { BORDER_WARNING } else { BORDER }, BG);
        draw_border(fb, frame.x, frame.y, frame.w, frame.h, border);

        if matches!(state, SessionState::Menu | SessionState::Exit) {
            if let Some(menu) = session.menu() {
                draw_menu(fb, frame, menu);
            }
            return;
        }

        self.draw_board(fb, frame, session);
        self.draw_snake(fb, frame, session);
        self.draw_side_panel(fb, frame, session, viewport);

        if let Some(menu) = session.menu() {
            draw_menu(fb, frame, menu);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn layout(&self, session: &GameSession, viewport: Viewport) -> Frame {
        let board = session.board();
        let w = board.width().saturating_mul(self.cell_w).saturating_add(2);
        let h = board.height().saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, frame: Frame, session: &GameSession) {
        let board = session.board();
        let empty = CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim();

        for y in 0..board.height() {
            for x in 0..board.width() {
                let (ch, style) = match board.get(Coord::new(x as i32, y as i32)) {
                    CellState::Free => ('·', empty),
                    CellState::Wall => ('█', CellStyle::new(WALL, FIELD_BG)),
                    CellState::Food => ('●', CellStyle::new(FOOD, FIELD_BG).bold()),
                    // Drawn from the segment list so the gradient follows the body.
                    CellState::SnakeBody => continue,
                };
                self.fill_cell(fb, frame, x, y, ch, style);
            }
        }
    }

    fn draw_snake(&self, fb: &mut FrameBuffer, frame: Frame, session: &GameSession) {
        for (i, segment) in session.snake().segments().iter().enumerate() {
            let (Ok(x), Ok(y)) = (u16::try_from(segment.x), u16::try_from(segment.y)) else {
                continue;
            };
            let style = if i == 0 {
                CellStyle::new(HEAD, FIELD_BG).bold()
            } else {
                CellStyle::new(segment_color(i - 1), FIELD_BG)
            };
            self.fill_cell(fb, frame, x, y, '█', style);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        // Cells past u16::MAX clamp to the edge and fall outside the buffer.
        let px = frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        session: &GameSession,
        viewport: Viewport,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let snake = session.snake();

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", session.score()),
            ("LENGTH", snake.len() as u32),
            ("SPEED", snake.speed()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        if session.warning_frames() > 0 && session.state() == SessionState::Play {
            fb.put_str(panel_x, y, "WATCH OUT", CellStyle::new(BORDER_WARNING, BG).bold());
        }
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

/// Boxed menu centered on the play area; may overhang a small board.
fn draw_menu(fb: &mut FrameBuffer, frame: Frame, menu: &Menu) {
    let entries = menu.entries();
    let widest = entries
        .iter()
        .map(|e| e.label.chars().count() + 2)
        .chain(std::iter::once(menu.title().chars().count()))
        .max()
        .unwrap_or(0) as u16;

    let w = widest + 4;
    let h = entries.len() as u16 + 5;
    let x = (frame.x + frame.w / 2).saturating_sub(w / 2);
    let y = (frame.y + frame.h / 2).saturating_sub(h / 2);

    let text = CellStyle::new(Rgb::new(220, 220, 220), BG);
    fb.fill_rect(x, y, w, h, ' ', text);
    draw_border(fb, x, y, w, h, text);
    fb.put_str_centered(x, y + 1, w, menu.title(), text.bold());

    for (i, entry) in entries.iter().enumerate() {
        let row = y + 3 + i as u16;
        if i == menu.selected() {
            let style = CellStyle::new(HIGHLIGHT, BG).bold();
            fb.put_char(x + 2, row, '>', style);
            fb.put_str(x + 4, row, entry.label, style);
        } else {
            fb.put_str(x + 4, row, entry.label, text);
        }
    }
}
