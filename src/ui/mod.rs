//! UI layer: primitives, the scene, the frame loop and the backends it drives.

pub mod backend;
pub mod core;
pub mod screen;
pub mod widgets;

pub use screen::{App, FrameOutcome, Screen, StopHandle};
