//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: the cursor is homed and every row is
//! reprinted. The screen is cleared only when the frame size changes, which
//! avoids flicker on terminals that paint the clear before the new rows.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Switches the terminal's raw mode on (`true`) or off (`false`).
pub type RawModeFn = fn(bool) -> io::Result<()>;

fn crossterm_raw_mode(on: bool) -> io::Result<()> {
    if on {
        terminal::enable_raw_mode()
    } else {
        terminal::disable_raw_mode()
    }
}

pub struct TerminalRenderer {
    out: Box<dyn Write>,
    raw_mode: RawModeFn,
    last_size: Option<(u16, u16)>,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_backend(Box::new(io::stdout()), crossterm_raw_mode)
    }

    /// Renderer over an arbitrary byte sink and raw-mode switch.
    pub fn with_backend(out: Box<dyn Write>, raw_mode: RawModeFn) -> Self {
        Self {
            out,
            raw_mode,
            last_size: None,
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen, and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        (self.raw_mode)(true)?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call more than once.
    ///
    /// Raw mode is released even when writing the restore sequence fails; the
    /// write error is reported first.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.buf.clear();
        let restored = encode_restore_into(&mut self.buf).and_then(|()| self.flush_buf());
        let released = (self.raw_mode)(false);
        self.active = false;

        restored?;
        released?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Force the next draw to clear the screen first.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last_size = None;
    }

    /// Redraw the whole framebuffer.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let size = (fb.width(), fb.height());
        let clear = self.last_size != Some(size);

        self.buf.clear();
        encode_full_into(fb, clear, &mut self.buf)?;
        self.flush_buf()?;
        self.last_size = Some(size);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the sequence that returns the terminal to its normal state.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// Homes the cursor (after clearing the screen when `clear` is set) and prints
/// every row. This builds crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, clear: bool, out: &mut Vec<u8>) -> Result<()> {
    if clear {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
