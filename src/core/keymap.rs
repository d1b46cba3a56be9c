//! Reserved keys handled by the frame loop before widget dispatch.

use super::error::{Error, Result};
use super::event::{InputEvent, Key, KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reserved {
    Quit,
    FocusNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedKeys {
    pub quit: Key,
    pub focus_next: Key,
}

impl Default for ReservedKeys {
    fn default() -> Self {
        Self {
            quit: Key::simple(KeyCode::Char('q')),
            focus_next: Key::simple(KeyCode::Tab),
        }
    }
}

impl ReservedKeys {
    pub fn parse(quit: &str, focus_next: &str) -> Result<Self> {
        let quit = parse_keybinding(quit).ok_or_else(|| Error::InvalidKey(quit.to_string()))?;
        let focus_next = parse_keybinding(focus_next)
            .ok_or_else(|| Error::InvalidKey(focus_next.to_string()))?;
        if quit == focus_next {
            return Err(Error::Config(
                "quit and focus_next keys must differ".to_string(),
            ));
        }
        Ok(Self { quit, focus_next })
    }

    pub fn classify(&self, event: &InputEvent) -> Option<Reserved> {
        let key = event.as_key().filter(|k| k.is_press())?;
        let key = Key::from(*key);
        if key == self.quit {
            Some(Reserved::Quit)
        } else if key == self.focus_next {
            Some(Reserved::FocusNext)
        } else {
            None
        }
    }
}

/// Parses strings like `"q"`, `"tab"`, `"ctrl+q"` or `"shift+f10"`.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" => modifiers |= KeyModifiers::SUPER,
            _ => key_part = Some(part),
        }
    }
    let mut code = parse_key_code(key_part?)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            code = KeyCode::Char(ch.to_ascii_lowercase());
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../../tests/unit/core/keymap.rs"]
mod tests;
