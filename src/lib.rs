//! scenetui - a small terminal UI framework.
//!
//! Module layout:
//! - core: input events, reserved keys, configuration, errors
//! - ui: geometry, paint buffer, widgets, scene/focus and the frame loop
//! - tui: crossterm integration (event conversion, terminal guard, signals)

pub mod core;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
