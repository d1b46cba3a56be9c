//scenetui/src/main.rs
use scenetui::core::error::{Error, Result};
use scenetui::core::ScreenConfig;
use scenetui::tui::terminal_guard::{install_termination_signals, TerminalGuard};
use scenetui::ui::backend::terminal::TerminalBackend;
use scenetui::ui::backend::Backend;
use scenetui::ui::core::{EventResult, Pos, Scene, Style, Ui};
use scenetui::ui::widgets::{Dropdown, DropdownConfig};
use scenetui::ui::{App, Screen};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;

const HELP: &str = "tab: next menu  up/down: move  enter: select  q: quit";

#[derive(Default)]
struct Options {
    config: Option<PathBuf>,
    fps: Option<u32>,
    width: Option<u16>,
    height: Option<u16>,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut opts = Options::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--config=") {
                opts.config = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--fps=") {
                opts.fps = Some(parse_number(&arg, value)?);
            } else if let Some(value) = arg.strip_prefix("--width=") {
                opts.width = Some(parse_number(&arg, value)?);
            } else if let Some(value) = arg.strip_prefix("--height=") {
                opts.height = Some(parse_number(&arg, value)?);
            } else {
                return Err(Error::Config(format!("unknown argument {arg:?}")));
            }
        }
        Ok(opts)
    }

    fn into_config(self) -> Result<ScreenConfig> {
        let mut config = match &self.config {
            Some(path) => ScreenConfig::load(path)?,
            None => ScreenConfig::load_default()?,
        };
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.width.is_some() {
            config.width = self.width;
        }
        if self.height.is_some() {
            config.height = self.height;
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(arg: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("invalid number in {arg:?}")))
}

/// The two-menu demo scene with a help line at the bottom.
#[derive(Default)]
struct MenuBar {
    focus: Option<usize>,
}

impl App for MenuBar {
    fn init<B: Backend>(&mut self, screen: &mut Screen<B>) {
        let mut file = Dropdown::new(DropdownConfig::new("File", 10, 10));
        file.add_entry_with("Save", || EventResult::Quit)
            .add_entry("Open");
        screen.add_widget(file);

        let mut view = Dropdown::new(DropdownConfig::new("View", 15, 10));
        view.add_entry("Show editor").add_entry("Hide debugger");
        screen.add_widget(view);
    }

    fn update(&mut self, scene: &Scene) {
        self.focus = scene.focus();
    }

    fn draw(&self, ui: &mut Ui<'_>) {
        let Some(y) = ui.rect.bottom().checked_sub(1) else {
            return;
        };
        let status = match self.focus {
            Some(i) => format!("{HELP}  [menu {}]", i + 1),
            None => HELP.to_string(),
        };
        ui.write_at(Pos::new(0, y), status, Style::plain());
        if let Some(rule) = y.checked_sub(1) {
            ui.hline(Pos::new(0, rule), ui.rect.w, '-', Style::plain());
        }
    }
}

fn run() -> Result<()> {
    let config = Options::parse(std::env::args().skip(1))?.into_config()?;

    let guard = TerminalGuard::new()?;
    let backend = TerminalBackend::new(io::stdout())?;
    let mut screen = Screen::new(backend, &config)?;

    #[cfg(unix)]
    install_termination_signals(guard.restorer(), screen.stop_handle())?;

    let outcome = screen.run(&mut MenuBar::default())?;
    tracing::info!(?outcome, "exiting");
    drop(guard);
    Ok(())
}

fn main() -> ExitCode {
    let logging = logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "scenetui failed");
            eprintln!("scenetui: {err}");
            if let Some(logging) = &logging {
                eprintln!("logs: {}", logging.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_options.rs"]
mod tests;
