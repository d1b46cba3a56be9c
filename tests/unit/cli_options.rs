use super::*;
use tempfile::tempdir;

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    list.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn flags_override_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("screen.json");
    std::fs::write(&path, r#"{ "fps": 5, "width": 100 }"#).unwrap();

    let config_arg = format!("--config={}", path.display());
    let opts = Options::parse(args(&[&config_arg, "--fps=60", "--height=30"])).unwrap();
    let config = opts.into_config().unwrap();
    assert_eq!(config.fps, 60);
    assert_eq!(config.width, Some(100));
    assert_eq!(config.height, Some(30));
}

#[test]
fn bad_numbers_and_unknown_flags_are_errors() {
    assert!(matches!(
        Options::parse(args(&["--fps=fast"])),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        Options::parse(args(&["--verbose"])),
        Err(Error::Config(_))
    ));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempdir().unwrap();
    let opts = Options {
        config: Some(dir.path().join("absent.json")),
        ..Default::default()
    };
    assert!(matches!(opts.into_config(), Err(Error::Io(_))));
}

#[test]
fn menu_bar_draws_help_on_last_row() {
    let mut painter = scenetui::ui::core::painter::Painter::new();
    let app = MenuBar { focus: Some(1) };
    let mut ui = Ui::new(scenetui::ui::core::Rect::new(0, 0, 80, 24), &mut painter, false);
    app.draw(&mut ui);
    match &painter.cmds()[0] {
        scenetui::ui::core::painter::PaintCmd::Text { pos, text, .. } => {
            assert_eq!(pos.y, 23);
            assert!(text.ends_with("[menu 2]"));
        }
        other => panic!("unexpected paint command {other:?}"),
    }
    match &painter.cmds()[1] {
        scenetui::ui::core::painter::PaintCmd::HLine { pos, len, ch, .. } => {
            assert_eq!((pos.x, pos.y, *len, *ch), (0, 22, 80, '-'));
        }
        other => panic!("unexpected paint command {other:?}"),
    }
}
