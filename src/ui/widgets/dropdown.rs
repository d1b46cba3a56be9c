//! A titled drop-down list.
//!
//! Unfocused it shows only its underlined title. Focused it opens a box of
//! entries below the title with the cursor entry reversed. Up/Down move the
//! cursor (wrapping), Enter runs the entry's callback.

use crate::core::event::{InputEvent, KeyCode};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::widget::{EventResult, Ui, Widget, WidgetCx};
use unicode_width::UnicodeWidthStr;

/// Box width used when there are no entries.
const EMPTY_WIDTH: usize = 3;

pub type EntryCallback = Box<dyn FnMut() -> EventResult>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    pub title: String,
    pub anchor: Pos,
}

impl DropdownConfig {
    pub fn new(title: impl Into<String>, x: u16, y: u16) -> Self {
        Self {
            title: title.into(),
            anchor: Pos::new(x, y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DropdownStyles {
    closed_title: Style,
    open_title: Style,
    frame: Style,
    entry: Style,
    selected: Style,
}

impl Default for DropdownStyles {
    fn default() -> Self {
        Self {
            closed_title: Style::underlined(),
            open_title: Style::plain(),
            frame: Style::plain(),
            entry: Style::plain(),
            selected: Style::reversed(),
        }
    }
}

struct Entry {
    label: String,
    callback: Option<EntryCallback>,
}

// Applied from the config by `init`.
struct Placement {
    title: String,
    anchor: Pos,
}

pub struct Dropdown {
    config: DropdownConfig,
    placement: Option<Placement>,
    entries: Vec<Entry>,
    selected: usize,
    styles: DropdownStyles,
}

impl Dropdown {
    pub fn new(config: DropdownConfig) -> Self {
        Self {
            config,
            placement: None,
            entries: Vec::new(),
            selected: 0,
            styles: DropdownStyles::default(),
        }
    }

    /// Adds an entry that does nothing when activated.
    pub fn add_entry(&mut self, label: impl Into<String>) -> &mut Self {
        self.entries.push(Entry {
            label: label.into(),
            callback: None,
        });
        self
    }

    pub fn add_entry_with<F>(&mut self, label: impl Into<String>, callback: F) -> &mut Self
    where
        F: FnMut() -> EventResult + 'static,
    {
        self.entries.push(Entry {
            label: label.into(),
            callback: Some(Box::new(callback)),
        });
        self
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
    }

    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Runs the callback of the selected entry. Entries without one are a no-op.
    pub fn activate(&mut self) -> EventResult {
        let Some(entry) = self.entries.get_mut(self.selected) else {
            return EventResult::Ignored;
        };
        match entry.callback.as_mut() {
            Some(callback) => callback(),
            None => EventResult::Consumed,
        }
    }

    fn inner_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.label.width())
            .max()
            .unwrap_or(EMPTY_WIDTH)
    }
}

impl Widget for Dropdown {
    fn init(&mut self, _cx: &WidgetCx) {
        self.placement = Some(Placement {
            title: self.config.title.clone(),
            anchor: self.config.anchor,
        });
        self.selected = 0;
    }

    fn update(&mut self, cx: &WidgetCx) {
        // Reopening always starts at the top.
        if !cx.focused() {
            self.selected = 0;
        }
    }

    fn draw(&self, ui: &mut Ui<'_>) {
        let Some(placement) = &self.placement else {
            return;
        };
        let anchor = placement.anchor;

        if !ui.focused() {
            ui.write_at(anchor, placement.title.as_str(), self.styles.closed_title);
            return;
        }
        ui.write_at(anchor, placement.title.as_str(), self.styles.open_title);

        let w = self.inner_width();
        let rows = u16::try_from(self.entries.len()).unwrap_or(u16::MAX);
        let frame = Rect::new(
            anchor.x,
            anchor.y.saturating_add(1),
            u16::try_from(w).unwrap_or(u16::MAX).saturating_add(2),
            rows.saturating_add(2),
        );
        ui.fill_rect(frame, self.styles.entry);
        ui.border(frame, self.styles.frame, BorderKind::Ascii);

        for (idx, entry) in self.entries.iter().enumerate() {
            let style = if idx == self.selected {
                self.styles.selected
            } else {
                self.styles.entry
            };
            let pad = w.saturating_sub(entry.label.width());
            let text = format!("{}{}", entry.label, " ".repeat(pad));
            let row = anchor.y.saturating_add(2).saturating_add(idx as u16);
            ui.write_at(Pos::new(anchor.x.saturating_add(1), row), text, style);
        }
    }

    fn event(&mut self, cx: &WidgetCx, event: &InputEvent) -> EventResult {
        if !cx.focused() || self.entries.is_empty() {
            return EventResult::Ignored;
        }
        match event.pressed() {
            Some(KeyCode::Up) => {
                self.select_prev();
                EventResult::Consumed
            }
            Some(KeyCode::Down) => {
                self.select_next();
                EventResult::Consumed
            }
            Some(KeyCode::Enter) => self.activate(),
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/dropdown.rs"]
mod tests;
