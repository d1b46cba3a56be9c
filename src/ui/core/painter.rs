//! The per-frame character buffer.
//!
//! Widgets record paint commands here; the screen hands the whole list to the
//! backend on flush and clears it at the start of the next draw pass. Commands
//! that fall outside the terminal are dropped by the backend.

use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    /// Box-drawing glyphs.
    Plain,
    /// `+`, `-` and `|`.
    Ascii,
}

impl BorderKind {
    /// Corner, horizontal and vertical glyphs: `(tl, tr, bl, br, h, v)`.
    pub fn glyphs(self) -> (char, char, char, char, char, char) {
        match self {
            BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
            BorderKind::Ascii => ('+', '+', '+', '+', '-', '|'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    Char {
        pos: Pos,
        ch: char,
        style: Style,
    },
    Text {
        pos: Pos,
        text: String,
        style: Style,
    },
    HLine {
        pos: Pos,
        len: u16,
        ch: char,
        style: Style,
    },
    FillRect {
        rect: Rect,
        style: Style,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn push(&mut self, cmd: PaintCmd) {
        self.cmds.push(cmd);
    }

    pub fn set_at(&mut self, pos: Pos, ch: char, style: Style) {
        self.cmds.push(PaintCmd::Char { pos, ch, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
        });
    }

    pub fn hline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        self.cmds.push(PaintCmd::HLine { pos, len, ch, style });
    }


    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
