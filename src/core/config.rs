use super::error::{Error, Result};
use super::keymap::ReservedKeys;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "SCENETUI_CONFIG";
pub const DEFAULT_FPS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: String,
    pub focus_next: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            focus_next: "tab".to_string(),
        }
    }
}

/// Screen settings. Missing dimensions are detected from the terminal; when
/// both are given the geometry is fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub fps: u32,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub keys: KeyBindings,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: None,
            height: None,
            keys: KeyBindings::default(),
        }
    }
}

impl ScreenConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the file named by `SCENETUI_CONFIG`, or the defaults when unset.
    pub fn load_default() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(&PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<ReservedKeys> {
        if self.fps == 0 {
            return Err(Error::Config("fps must be greater than zero".to_string()));
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err(Error::Config(
                "width and height must be greater than zero".to_string(),
            ));
        }
        ReservedKeys::parse(&self.keys.quit, &self.keys.focus_next)
    }

    /// How long a frame waits for input.
    pub fn frame_timeout(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    pub fn fixed_size(&self) -> Option<(u16, u16)> {
        Some((self.width?, self.height?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/config.rs"]
mod tests;
