use crate::core::event::InputEvent;
use crate::tui::crossterm::into_input_event;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

/// Crossterm-driven terminal on stdout. Raw mode and the alternate screen are
/// owned by `tui::terminal_guard::TerminalGuard`, not by this type.
pub struct TerminalBackend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalBackend {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Backend for TerminalBackend {
    fn flush(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = area.intersect(frame.area().into());
            frame.render_widget(PaintWidget { cmds }, area.into());
        })?;
        Ok(())
    }

    fn read_event(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        let event = crossterm::event::read()?;
        // One event per frame; whatever queued up meanwhile is dropped.
        while crossterm::event::poll(Duration::ZERO)? {
            crossterm::event::read()?;
        }
        Ok(into_input_event(event))
    }

    fn size(&self) -> io::Result<Size> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Size::new(width, height))
    }

    fn resize(&mut self, size: Size) -> io::Result<()> {
        crossterm::execute!(
            self.terminal.backend_mut(),
            crossterm::terminal::SetSize(size.width, size.height)
        )?;
        self.terminal.resize(Rect::from_size(size).into())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::Char { pos, ch, style } => set_char(buf, *pos, *ch, *style),
                PaintCmd::Text { pos, text, style } => draw_text(buf, *pos, text, *style),
                PaintCmd::HLine { pos, len, ch, style } => draw_hline(buf, *pos, *len, *ch, *style),
                PaintCmd::FillRect { rect, style } => fill_rect(buf, *rect, *style),
                PaintCmd::Border { rect, style, kind } => draw_border(buf, *rect, *style, *kind),
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

// `Buffer::cell_mut` returns `None` outside the buffer, which is how
// out-of-bounds writes get dropped.
fn set_char(buf: &mut Buffer, pos: Pos, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((pos.x, pos.y)) {
        cell.set_char(ch).set_style(to_ratatui_style(style));
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, style: Style) {
    let style = to_ratatui_style(style);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_style(style);
            }
        }
    }
}

fn draw_hline(buf: &mut Buffer, pos: Pos, len: u16, ch: char, style: Style) {
    let style = to_ratatui_style(style);
    for x in pos.x..pos.x.saturating_add(len) {
        if let Some(cell) = buf.cell_mut((x, pos.y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn draw_vline(buf: &mut Buffer, pos: Pos, len: u16, ch: char, style: Style) {
    let style = to_ratatui_style(style);
    for y in pos.y..pos.y.saturating_add(len) {
        if let Some(cell) = buf.cell_mut((pos.x, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style) {
    let style = to_ratatui_style(style);
    let clip = Rect::from(buf.area);
    let mut x = pos.x;
    let y = pos.y;
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }

        let Some(cell) = buf.cell_mut((x, y)) else {
            break;
        };
        let mut chars = g.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                cell.set_char(ch).set_style(style);
            }
            _ => {
                cell.set_symbol(g).set_style(style);
            }
        }

        for dx in 1..w {
            let Some(cell) = buf.cell_mut((x.saturating_add(dx), y)) else {
                break;
            };
            cell.set_char(' ').set_style(style);
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: Style, kind: BorderKind) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let right = rect.right().saturating_sub(1);
    let bottom = rect.bottom().saturating_sub(1);
    let (tl, tr, bl, br, h, v) = kind.glyphs();

    let inner_w = rect.w.saturating_sub(2);
    let inner_h = rect.h.saturating_sub(2);
    draw_hline(buf, Pos::new(rect.x.saturating_add(1), rect.y), inner_w, h, style);
    draw_hline(buf, Pos::new(rect.x.saturating_add(1), bottom), inner_w, h, style);
    draw_vline(buf, Pos::new(rect.x, rect.y.saturating_add(1)), inner_h, v, style);
    draw_vline(buf, Pos::new(right, rect.y.saturating_add(1)), inner_h, v, style);

    set_char(buf, Pos::new(rect.x, rect.y), tl, style);
    set_char(buf, Pos::new(right, rect.y), tr, style);
    set_char(buf, Pos::new(rect.x, bottom), bl, style);
    set_char(buf, Pos::new(right, bottom), br, style);
}

// Backend-specific tests live under `tests/unit/ui/backend/test.rs` to avoid depending on a tty.
