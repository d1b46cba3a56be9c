use super::geom::{Pos, Rect, Size};
use super::painter::{BorderKind, Painter};
use super::style::Style;
use crate::core::event::InputEvent;

/// What a widget reports back after seeing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    #[default]
    Ignored,
    Consumed,
    /// Ask the frame loop to stop after this event.
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }

    /// Combines the results of several widgets seeing the same event.
    pub fn merge(self, other: EventResult) -> EventResult {
        match (self, other) {
            (EventResult::Quit, _) | (_, EventResult::Quit) => EventResult::Quit,
            (EventResult::Consumed, _) | (_, EventResult::Consumed) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }
}

/// Per-call context handed to `init`, `update` and `event`.
///
/// The focus flag is owned by the scene; widgets only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetCx {
    index: usize,
    focused: bool,
    screen: Size,
}

impl WidgetCx {
    pub fn new(index: usize, focused: bool, screen: Size) -> Self {
        Self {
            index,
            focused,
            screen,
        }
    }

    /// Position of the widget in the scene.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn screen(&self) -> Size {
        self.screen
    }
}

/// Drawing surface for one `draw` call.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    focused: bool,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, painter: &'a mut Painter, focused: bool) -> Self {
        Self {
            rect,
            painter,
            focused,
        }
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_at(&mut self, pos: Pos, ch: char, style: Style) {
        self.painter.set_at(pos, ch, style);
    }

    pub fn write_at(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.painter.text(pos, text, style);
    }

    pub fn hline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        self.painter.hline(pos, len, ch, style);
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.painter.fill_rect(rect, style);
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.painter.border(rect, style, kind);
    }
}

/// A unit of the scene. Every hook is optional.
///
/// Hooks run in a fixed order each frame: `update`, then `draw`, then at most
/// one `event`. `event` is delivered to every widget whether focused or not,
/// so implementations must check `cx.focused()` themselves.
pub trait Widget {
    /// Runs once, right after the widget is added to a screen. Other widgets
    /// may not have been added yet.
    fn init(&mut self, _cx: &WidgetCx) {}

    fn update(&mut self, _cx: &WidgetCx) {}

    fn draw(&self, _ui: &mut Ui<'_>) {}

    fn event(&mut self, _cx: &WidgetCx, _event: &InputEvent) -> EventResult {
        EventResult::Ignored
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/widget.rs"]
mod tests;
