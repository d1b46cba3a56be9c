//! The scene: widgets in insertion order plus the single focus slot.
//!
//! Insertion order is both the draw order and the focus-cycle order. Widgets
//! are never removed, so a focus index never goes stale.

use super::geom::{Rect, Size};
use super::painter::Painter;
use super::widget::{EventResult, Ui, Widget, WidgetCx};
use crate::core::event::InputEvent;

struct Slot {
    widget: Box<dyn Widget>,
    focused: bool,
}

#[derive(Default)]
pub struct Scene {
    slots: Vec<Slot>,
    focus: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the focused widget, `None` when nothing has focus.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// The focus flag of the widget at `index`; always agrees with `focus()`.
    pub fn is_focused(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.focused)
    }

    pub fn focused_count(&self) -> usize {
        self.slots.iter().filter(|s| s.focused).count()
    }

    /// Advances focus: nothing, then each widget in order, then nothing again.
    pub fn cycle_focus(&mut self) -> Option<usize> {
        let from = self.focus;
        self.focus = next_focus(from, self.slots.len());
        self.project_focus();
        tracing::debug!(?from, to = ?self.focus, "focus cycled");
        self.focus
    }

    /// Adds a widget and runs its `init`. Returns its index.
    pub(crate) fn attach(&mut self, mut widget: Box<dyn Widget>, screen: Size) -> usize {
        let index = self.slots.len();
        let focused = self.focus == Some(index);
        widget.init(&WidgetCx::new(index, focused, screen));
        self.slots.push(Slot { widget, focused });
        index
    }

    /// Writes every widget's focus flag from the focus index.
    pub(crate) fn project_focus(&mut self) {
        let focus = self.focus;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.focused = focus == Some(index);
        }
    }

    pub(crate) fn update_all(&mut self, screen: Size) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.widget
                .update(&WidgetCx::new(index, slot.focused, screen));
        }
    }

    pub(crate) fn draw_all(&self, painter: &mut Painter, area: Rect) {
        for slot in &self.slots {
            slot.widget.draw(&mut Ui::new(area, painter, slot.focused));
        }
    }

    /// Delivers `event` to every widget in order and merges what they report.
    pub(crate) fn dispatch(&mut self, event: &InputEvent, screen: Size) -> EventResult {
        let mut result = EventResult::Ignored;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let cx = WidgetCx::new(index, slot.focused, screen);
            result = result.merge(slot.widget.event(&cx, event));
        }
        result
    }
}

fn next_focus(current: Option<usize>, len: usize) -> Option<usize> {
    let next = current.map_or(0, |i| i + 1);
    (next < len).then_some(next)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/scene.rs"]
mod tests;
