//! Backend-independent building blocks:
//! - event: input events delivered to the scene
//! - keymap: reserved keys and key-string parsing
//! - config: screen configuration
//! - error: crate error type

pub mod config;
pub mod error;
pub mod event;
pub mod keymap;

pub use config::ScreenConfig;
pub use error::{Error, Result};
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use keymap::ReservedKeys;
