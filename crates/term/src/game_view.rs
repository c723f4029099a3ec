//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, score line, bordered grid, controls line.
//! Each grid cell is two columns wide to compensate for the glyph aspect
//! ratio.

use crate::core::{GameSnapshot, Phase, Status};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, Position, GRID_HEIGHT, GRID_WIDTH};

pub const TITLE: &str = "SNAKE GAME";
pub const CONTROLS: &str = "Controls: W (Up), A (Left), S (Down), D (Right), Q (Quit)";

const CELL_W: u16 = 2;
/// Title, score, and controls rows around the frame.
const CHROME_ROWS: u16 = 3;

const BG: Rgb = Rgb::new(0, 0, 0);
const FIELD_BG: Rgb = Rgb::new(20, 24, 30);

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

/// Text shown over the grid while the session is not running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Fresh session, nothing played yet.
    Intro,
    GameOver { score: u32 },
    Won { score: u32 },
}

impl Overlay {
    pub fn for_snapshot(snap: &GameSnapshot) -> Option<Self> {
        if snap.phase == Phase::Running {
            return None;
        }
        if snap.episode_id == 0 {
            return Some(Overlay::Intro);
        }
        Some(match snap.status {
            Status::Won => Overlay::Won { score: snap.score },
            _ => Overlay::GameOver { score: snap.score },
        })
    }
}

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the Snake game.
#[derive(Debug, Clone)]
pub struct GameView {
    head: CellStyle,
    body: CellStyle,
    food: CellStyle,
    empty: CellStyle,
    border: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            head: CellStyle::plain(Rgb::new(250, 220, 90), FIELD_BG).bold(),
            body: CellStyle::plain(Rgb::new(100, 210, 120), FIELD_BG),
            food: CellStyle::plain(Rgb::new(230, 70, 70), FIELD_BG).bold(),
            empty: CellStyle::plain(Rgb::new(60, 64, 72), FIELD_BG),
            border: CellStyle::plain(Rgb::new(200, 200, 200), BG),
            text: CellStyle::plain(Rgb::new(220, 220, 220), BG),
        }
    }
}

impl GameView {
    /// Frame size (border included) in terminal cells.
    pub fn frame_size() -> (u16, u16) {
        (GRID_WIDTH as u16 * CELL_W + 2, GRID_HEIGHT as u16 + 2)
    }

    /// Position of the bordered grid for a viewport, centered horizontally and
    /// vertically together with the title, score and controls rows.
    pub fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let (w, h) = Self::frame_size();
        let block_h = h + CHROME_ROWS;
        let x = viewport.width.saturating_sub(w) / 2;
        let top = viewport.height.saturating_sub(block_h) / 2;
        FrameRect { x, y: top + 2, w, h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.text.into_cell(' '));

        let frame = self.frame_rect(viewport);

        // Title and score, centered over the frame.
        let title_y = frame.y.saturating_sub(2);
        fb.put_str_centered(frame.x, frame.w, title_y, TITLE, self.text.bold());
        self.draw_score_line(fb, frame, title_y + 1, snap.score);

        self.draw_border(fb, frame);

        for y in 0..GRID_HEIGHT as i16 {
            for x in 0..GRID_WIDTH as i16 {
                let p = Position::new(x, y);
                let (glyph, style) = match snap.cell(p) {
                    CellKind::Head => ("@@", self.head),
                    CellKind::Body => ("oo", self.body),
                    CellKind::Food => ("()", self.food),
                    CellKind::Empty => ("  ", self.empty),
                };
                self.put_cell(fb, frame, p, glyph, style);
            }
        }

        // The controls line is wider than the frame; center it on the viewport.
        fb.put_str_centered(0, viewport.width, frame.y + frame.h, CONTROLS, self.text.dim());

        if let Some(overlay) = Overlay::for_snapshot(snap) {
            self.draw_overlay(fb, frame, overlay);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_score_line(&self, fb: &mut FrameBuffer, frame: FrameRect, y: u16, score: u32) {
        const LABEL: &str = "Score: ";
        let digits = crate::fb::u32_digits(score).len() as u16;
        let len = LABEL.len() as u16 + digits;
        let x = frame.x.saturating_add(frame.w.saturating_sub(len) / 2);
        fb.put_str(x, y, LABEL, self.text);
        fb.put_u32(x + LABEL.len() as u16, y, score, self.text.bold());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect) {
        let FrameRect { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        for dx in 0..w {
            let ch = if dx == 0 || dx == w - 1 { '+' } else { '-' };
            fb.put_char(x + dx, y, ch, self.border);
            fb.put_char(x + dx, y + h - 1, ch, self.border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '|', self.border);
            fb.put_char(x + w - 1, y + dy, '|', self.border);
        }
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        p: Position,
        glyph: &str,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + p.x as u16 * CELL_W;
        let py = frame.y + 1 + p.y as u16;
        fb.put_str(px, py, glyph, style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: FrameRect, overlay: Overlay) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), BG).bold();
        let mid = frame.y + frame.h / 2;

        match overlay {
            Overlay::Intro => {
                self.overlay_line(fb, frame, mid - 1, "WELCOME TO SNAKE", style);
                self.overlay_line(fb, frame, mid + 1, "Press any key to start", style);
            }
            Overlay::GameOver { score } => {
                let label = "GAME OVER! Final Score: ";
                self.overlay_score_line(fb, frame, mid - 1, label, score, style);
                self.overlay_line(fb, frame, mid + 1, "Play again? (y/n)", style);
            }
            Overlay::Won { score } => {
                let label = "YOU WIN! Final Score: ";
                self.overlay_score_line(fb, frame, mid - 1, label, score, style);
                self.overlay_line(fb, frame, mid + 1, "Play again? (y/n)", style);
            }
        }
    }

    fn overlay_line(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        // One blank column of padding on each side so the text stands off the grid.
        let w = text.chars().count() as u16 + 2;
        let x = frame.x.saturating_add(frame.w.saturating_sub(w) / 2);
        fb.fill_rect(x, y, w, 1, ' ', style);
        fb.put_str(x + 1, y, text, style);
    }

    fn overlay_score_line(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        y: u16,
        label: &str,
        score: u32,
        style: CellStyle,
    ) {
        let digits = crate::fb::u32_digits(score).len() as u16;
        let w = label.chars().count() as u16 + digits + 2;
        let x = frame.x.saturating_add(frame.w.saturating_sub(w) / 2);
        fb.fill_rect(x, y, w, 1, ' ', style);
        fb.put_str(x + 1, y, label, style);
        fb.put_u32(x + 1 + label.chars().count() as u16, y, score, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, GameState};
    use crate::types::Direction;

    #[test]
    fn frame_is_centered_in_exact_viewport() {
        let view = GameView::default();
        let (w, h) = GameView::frame_size();
        assert_eq!((w, h), (42, 17));

        let rect = view.frame_rect(Viewport::new(w, h + CHROME_ROWS));
        assert_eq!(rect, FrameRect { x: 0, y: 2, w: 42, h: 17 });
    }

    #[test]
    fn overlay_depends_on_phase_and_history() {
        let mut game = Game::new(3);
        assert_eq!(Overlay::for_snapshot(&game.snapshot()), Some(Overlay::Intro));

        game.restart();
        assert_eq!(Overlay::for_snapshot(&game.snapshot()), None);

        let round = GameState::from_layout(
            &[Position::new(19, 0)],
            Direction::Right,
            Position::new(0, 0),
            1,
        )
        .unwrap();
        game.start_with(round);
        game.tick();
        assert_eq!(
            Overlay::for_snapshot(&game.snapshot()),
            Some(Overlay::GameOver { score: 0 })
        );
    }
}
