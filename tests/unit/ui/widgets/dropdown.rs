use super::*;
use crate::core::event::KeyCode;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Size;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Mod;
use std::cell::Cell;
use std::rc::Rc;

const SCREEN: Size = Size::new(40, 12);

fn cx(focused: bool) -> WidgetCx {
    WidgetCx::new(0, focused, SCREEN)
}

fn file_menu(hits: &Rc<Cell<u32>>) -> Dropdown {
    let mut dd = Dropdown::new(DropdownConfig::new("File", 2, 1));
    let hits = hits.clone();
    dd.add_entry_with("Save", move || {
        hits.set(hits.get() + 1);
        EventResult::Consumed
    })
    .add_entry("Open")
    .add_entry("Close");
    dd.init(&cx(false));
    dd
}

fn render(dd: &Dropdown, focused: bool) -> TestBackend {
    let mut painter = Painter::new();
    let area = Rect::from_size(SCREEN);
    dd.draw(&mut Ui::new(area, &mut painter, focused));
    let mut backend = TestBackend::new(SCREEN.width, SCREEN.height);
    backend.flush(area, painter.cmds()).unwrap();
    backend
}

#[test]
fn down_moves_to_next_and_wraps() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    let down = InputEvent::key(KeyCode::Down);
    assert_eq!(dd.event(&cx(true), &down), EventResult::Consumed);
    assert_eq!(dd.selected(), 1);
    dd.event(&cx(true), &down);
    dd.event(&cx(true), &down);
    assert_eq!(dd.selected(), 0);
}

#[test]
fn up_moves_to_previous_and_wraps() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    dd.event(&cx(true), &InputEvent::key(KeyCode::Up));
    assert_eq!(dd.selected(), 2);
    dd.event(&cx(true), &InputEvent::key(KeyCode::Up));
    assert_eq!(dd.selected(), 1);
}

#[test]
fn selection_stays_in_range_for_any_key_sequence() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    // Deterministic pseudo-random walk.
    let mut state = 0x2545_f491_u32;
    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let key = if state % 2 == 0 { KeyCode::Up } else { KeyCode::Down };
        dd.event(&cx(true), &InputEvent::key(key));
        assert!(dd.selected() < dd.len());
    }
}

#[test]
fn unfocused_dropdown_ignores_events() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    assert_eq!(
        dd.event(&cx(false), &InputEvent::key(KeyCode::Down)),
        EventResult::Ignored
    );
    assert_eq!(
        dd.event(&cx(false), &InputEvent::key(KeyCode::Enter)),
        EventResult::Ignored
    );
    assert_eq!(dd.selected(), 0);
    assert_eq!(hits.get(), 0);
}

#[test]
fn enter_runs_selected_callback_only() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    dd.event(&cx(true), &InputEvent::key(KeyCode::Enter));
    assert_eq!(hits.get(), 1);

    dd.event(&cx(true), &InputEvent::key(KeyCode::Down));
    assert_eq!(
        dd.event(&cx(true), &InputEvent::key(KeyCode::Enter)),
        EventResult::Consumed
    );
    assert_eq!(hits.get(), 1);
}

#[test]
fn callback_can_request_quit() {
    let mut dd = Dropdown::new(DropdownConfig::new("App", 0, 0));
    dd.add_entry_with("Exit", || EventResult::Quit);
    dd.init(&cx(false));
    assert_eq!(
        dd.event(&cx(true), &InputEvent::key(KeyCode::Enter)),
        EventResult::Quit
    );
}

#[test]
fn empty_dropdown_never_faults() {
    let mut dd = Dropdown::new(DropdownConfig::new("Empty", 0, 0));
    dd.init(&cx(false));
    for key in [KeyCode::Up, KeyCode::Down, KeyCode::Enter] {
        assert_eq!(dd.event(&cx(true), &InputEvent::key(key)), EventResult::Ignored);
    }
    assert_eq!(dd.selected(), 0);
    assert_eq!(dd.activate(), EventResult::Ignored);

    let backend = render(&dd, true);
    assert_eq!(backend.buffer().row_text(0), "Empty");
    assert_eq!(backend.buffer().row_text(1), "+---+");
    assert_eq!(backend.buffer().row_text(2), "+---+");
}

#[test]
fn update_resets_cursor_only_when_unfocused() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    dd.event(&cx(true), &InputEvent::key(KeyCode::Down));
    dd.update(&cx(true));
    assert_eq!(dd.selected(), 1);
    dd.update(&cx(false));
    assert_eq!(dd.selected(), 0);
}

#[test]
fn closed_dropdown_draws_underlined_title() {
    let hits = Rc::new(Cell::new(0));
    let dd = file_menu(&hits);
    let backend = render(&dd, false);
    let buf = backend.buffer();
    assert_eq!(buf.row_text(1), "  File");
    assert!(buf.cell(2, 1).unwrap().style.mods.contains(Mod::UNDERLINE));
    assert_eq!(buf.row_text(2), "");
}

#[test]
fn open_dropdown_draws_box_with_reversed_cursor() {
    let hits = Rc::new(Cell::new(0));
    let mut dd = file_menu(&hits);
    dd.event(&cx(true), &InputEvent::key(KeyCode::Down));
    let backend = render(&dd, true);
    let buf = backend.buffer();
    assert_eq!(buf.row_text(1), "  File");
    assert!(!buf.cell(2, 1).unwrap().style.mods.contains(Mod::UNDERLINE));
    assert_eq!(buf.row_text(2), "  +-----+");
    assert_eq!(buf.row_text(3), "  |Save |");
    assert_eq!(buf.row_text(4), "  |Open |");
    assert_eq!(buf.row_text(5), "  |Close|");
    assert_eq!(buf.row_text(6), "  +-----+");
    assert!(buf.cell(3, 4).unwrap().style.mods.contains(Mod::REVERSE));
    assert!(!buf.cell(3, 3).unwrap().style.mods.contains(Mod::REVERSE));
}

#[test]
fn nothing_is_drawn_before_init() {
    let dd = Dropdown::new(DropdownConfig::new("Late", 0, 0));
    let mut painter = Painter::new();
    dd.draw(&mut Ui::new(Rect::from_size(SCREEN), &mut painter, true));
    assert!(painter.cmds().is_empty());
}
