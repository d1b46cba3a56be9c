//! Terminal integration layer (crossterm).
//!
//! Kept apart from `core`/`ui` so the scene and frame loop can run against the
//! headless backend without a terminal.

pub mod crossterm;
pub mod terminal_guard;
