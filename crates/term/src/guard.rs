//! Scoped raw-mode acquisition.
//!
//! `TerminalGuard` enters raw mode + alternate screen on creation and restores
//! the terminal when dropped, so every return path (including `?` errors and
//! unwinding panics) leaves the user's shell usable. With `panic = "abort"`
//! nothing unwinds, so [`install_panic_hook`] restores the terminal before the
//! panic message is printed.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::sync::Once;

use anyhow::Result;
use crossterm::terminal;

use crate::renderer::{encode_restore_into, TerminalRenderer};

pub struct TerminalGuard {
    renderer: TerminalRenderer,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        if let Err(e) = renderer.enter() {
            // Partially entered: undo whatever succeeded.
            restore_terminal();
            return Err(e);
        }
        Ok(Self { renderer })
    }

    /// Restore explicitly, surfacing any I/O error.
    pub fn release(mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Deref for TerminalGuard {
    type Target = TerminalRenderer;

    fn deref(&self) -> &Self::Target {
        &self.renderer
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.renderer
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.renderer.is_active() {
            if let Err(e) = self.renderer.exit() {
                log::error!("failed to restore terminal: {e}");
            }
        }
    }
}

/// Best-effort restore without a renderer handle. Errors are ignored.
pub fn restore_terminal() {
    let mut buf = Vec::with_capacity(64);
    if encode_restore_into(&mut buf).is_ok() {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(&buf);
        let _ = stdout.flush();
    }
    let _ = terminal::disable_raw_mode();
}

/// Chain a panic hook that restores the terminal first. Idempotent.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            log::error!("panic: {info}");
            previous(info);
        }));
    });
}
