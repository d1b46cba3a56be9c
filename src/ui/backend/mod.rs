//! Rendering and input backends.
//!
//! The frame loop only talks to this trait, so the rest of the crate never
//! mentions crossterm or ratatui.

use crate::core::event::InputEvent;
use crate::ui::core::geom::{Rect, Size};
use crate::ui::core::painter::PaintCmd;
use std::io;
use std::time::Duration;

pub trait Backend {
    /// Renders one frame's paint commands into `area` and pushes it to the display.
    fn flush(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()>;

    /// Waits at most `timeout` for the next input event. `Ok(None)` means idle.
    fn read_event(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>>;

    /// Current terminal geometry.
    fn size(&self) -> io::Result<Size>;

    /// Requests a terminal geometry. Callers treat failures as best-effort.
    fn resize(&mut self, size: Size) -> io::Result<()>;
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
