use super::*;
use crate::core::event::KeyCode;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::style::Style;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Probe {
    name: &'static str,
    log: Log,
}

impl Widget for Probe {
    fn init(&mut self, cx: &WidgetCx) {
        self.log
            .borrow_mut()
            .push(format!("init {} #{}", self.name, cx.index()));
    }

    fn update(&mut self, cx: &WidgetCx) {
        self.log
            .borrow_mut()
            .push(format!("update {} {}", self.name, cx.focused()));
    }

    fn draw(&self, ui: &mut Ui<'_>) {
        ui.write_at(Pos::new(0, 0), self.name, Style::default());
        self.log
            .borrow_mut()
            .push(format!("draw {} {}", self.name, ui.focused()));
    }

    fn event(&mut self, cx: &WidgetCx, _event: &InputEvent) -> EventResult {
        self.log
            .borrow_mut()
            .push(format!("event {} {}", self.name, cx.focused()));
        if cx.focused() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

fn scene_of(n: usize, log: &Log) -> Scene {
    const NAMES: [&str; 4] = ["a", "b", "c", "d"];
    let mut scene = Scene::new();
    for &name in NAMES.iter().take(n) {
        scene.attach(
            Box::new(Probe {
                name,
                log: log.clone(),
            }),
            Size::new(10, 10),
        );
    }
    scene
}

#[test]
fn cycling_len_plus_one_times_returns_to_start() {
    let log = Log::default();
    for n in 0..=4 {
        for start_steps in 0..=n {
            let mut scene = scene_of(n, &log);
            for _ in 0..start_steps {
                scene.cycle_focus();
            }
            let start = scene.focus();
            for _ in 0..=n {
                scene.cycle_focus();
            }
            assert_eq!(scene.focus(), start, "n={n} start={start:?}");
        }
    }
}

#[test]
fn cycle_visits_each_index_then_none() {
    let log = Log::default();
    let mut scene = scene_of(3, &log);
    assert_eq!(scene.focus(), None);
    assert_eq!(scene.cycle_focus(), Some(0));
    assert_eq!(scene.cycle_focus(), Some(1));
    assert_eq!(scene.cycle_focus(), Some(2));
    assert_eq!(scene.cycle_focus(), None);
    assert_eq!(scene.cycle_focus(), Some(0));
}

#[test]
fn empty_scene_never_gains_focus() {
    let mut scene = Scene::new();
    assert_eq!(scene.cycle_focus(), None);
    assert_eq!(scene.cycle_focus(), None);
    scene.project_focus();
    assert_eq!(scene.focused_count(), 0);
}

#[test]
fn projection_marks_exactly_the_focused_slot() {
    let log = Log::default();
    let mut scene = scene_of(3, &log);
    for _ in 0..8 {
        scene.project_focus();
        match scene.focus() {
            Some(i) => {
                assert_eq!(scene.focused_count(), 1);
                assert!(scene.is_focused(i));
            }
            None => assert_eq!(scene.focused_count(), 0),
        }
        scene.cycle_focus();
    }
}

#[test]
fn focus_flags_follow_cycle_immediately() {
    let log = Log::default();
    let mut scene = scene_of(2, &log);
    scene.cycle_focus();
    assert_eq!(scene.focus(), Some(0));
    assert!(scene.is_focused(0));
    assert_eq!(scene.focused_count(), 1);
    assert!(!scene.is_focused(5));
    scene.project_focus();
    assert!(scene.is_focused(0));

    scene.cycle_focus();
    scene.cycle_focus();
    assert_eq!(scene.focus(), None);
    assert_eq!(scene.focused_count(), 0);
}

#[test]
fn init_runs_once_on_attach_in_order() {
    let log = Log::default();
    let _scene = scene_of(2, &log);
    assert_eq!(&*log.borrow(), &["init a #0", "init b #1"]);
}

#[test]
fn hooks_run_in_scene_order_with_focus() {
    let log = Log::default();
    let mut scene = scene_of(2, &log);
    log.borrow_mut().clear();

    scene.cycle_focus();
    scene.cycle_focus();
    scene.project_focus();
    scene.update_all(Size::new(10, 10));
    let mut painter = Painter::new();
    scene.draw_all(&mut painter, Rect::new(0, 0, 10, 10));
    let result = scene.dispatch(&InputEvent::key(KeyCode::Up), Size::new(10, 10));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        &*log.borrow(),
        &[
            "update a false",
            "update b true",
            "draw a false",
            "draw b true",
            "event a false",
            "event b true",
        ]
    );
    assert_eq!(painter.cmds().len(), 2);
}

#[test]
fn dispatch_reaches_unfocused_widgets() {
    let log = Log::default();
    let mut scene = scene_of(3, &log);
    log.borrow_mut().clear();
    scene.project_focus();
    let result = scene.dispatch(&InputEvent::key(KeyCode::Enter), Size::new(1, 1));
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(log.borrow().len(), 3);
}
