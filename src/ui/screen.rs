//! The frame loop.
//!
//! One frame: focus projection, widget updates, app update, buffer clear,
//! widget draws, app draw, flush, optional geometry re-sample, then a bounded
//! wait for a single input event. Everything runs on the calling thread.

use crate::core::config::ScreenConfig;
use crate::core::error::Result;
use crate::core::event::InputEvent;
use crate::core::keymap::{Reserved, ReservedKeys};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Rect, Size};
use crate::ui::core::painter::Painter;
use crate::ui::core::scene::Scene;
use crate::ui::core::widget::{Ui, Widget};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Global behaviour layered on top of the widgets. All hooks are optional.
pub trait App {
    /// Runs once before the first frame; the place to add widgets.
    fn init<B: Backend>(&mut self, _screen: &mut Screen<B>) {}

    /// Runs every frame after the widgets' `update`.
    fn update(&mut self, _scene: &Scene) {}

    /// Runs every frame after the widgets' `draw`.
    fn draw(&self, _ui: &mut Ui<'_>) {}
}

impl App for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The quit key was pressed or a widget asked to quit.
    Quit,
    /// A `StopHandle` was raised.
    Stopped,
}

/// Cross-thread request to end the loop before its next frame.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct Screen<B: Backend> {
    backend: B,
    size: Size,
    // Explicitly configured dimensions never follow the terminal.
    pinned: (Option<u16>, Option<u16>),
    auto_resize: bool,
    timeout: Duration,
    keys: ReservedKeys,
    scene: Scene,
    painter: Painter,
    stop: StopHandle,
    frames: u64,
    initialized: bool,
}

impl<B: Backend> Screen<B> {
    pub fn new(mut backend: B, config: &ScreenConfig) -> Result<Self> {
        let keys = config.validate()?;
        let pinned = (config.width, config.height);
        let auto_resize = config.fixed_size().is_none();

        let size = match config.fixed_size() {
            Some((width, height)) => Size::new(width, height),
            None => {
                let detected = backend.size()?;
                Size::new(
                    pinned.0.unwrap_or(detected.width),
                    pinned.1.unwrap_or(detected.height),
                )
            }
        };

        if pinned.0.is_some() || pinned.1.is_some() {
            request_resize(&mut backend, size);
        }

        tracing::info!(
            width = size.width,
            height = size.height,
            auto_resize,
            fps = config.fps,
            "screen created"
        );

        Ok(Self {
            backend,
            size,
            pinned,
            auto_resize,
            timeout: config.frame_timeout(),
            keys,
            scene: Scene::new(),
            painter: Painter::new(),
            stop: StopHandle::default(),
            frames: 0,
            initialized: false,
        })
    }

    /// Adds a widget to the end of the scene and runs its `init`.
    pub fn add_widget<W: Widget + 'static>(&mut self, widget: W) -> usize {
        self.scene.attach(Box::new(widget), self.size)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn focus(&self) -> Option<usize> {
        self.scene.focus()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    pub fn frame_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs `app.init` (first call only) and then frames until quit or stop.
    pub fn run<A: App>(&mut self, app: &mut A) -> Result<FrameOutcome> {
        self.run_inner(app, None)
    }

    /// Like `run`, but gives up after `max_frames` frames and reports `Continue`.
    pub fn run_frames<A: App>(&mut self, app: &mut A, max_frames: usize) -> Result<FrameOutcome> {
        self.run_inner(app, Some(max_frames))
    }

    fn run_inner<A: App>(&mut self, app: &mut A, max_frames: Option<usize>) -> Result<FrameOutcome> {
        if !self.initialized {
            self.initialized = true;
            app.init(self);
        }
        tracing::info!(widgets = self.scene.len(), "frame loop started");

        let mut ran = 0usize;
        while max_frames.map_or(true, |max| ran < max) {
            ran += 1;
            let outcome = self.cycle(app)?;
            if outcome != FrameOutcome::Continue {
                tracing::info!(?outcome, frames = self.frames, "frame loop finished");
                return Ok(outcome);
            }
        }
        Ok(FrameOutcome::Continue)
    }

    /// Runs a single frame.
    pub fn cycle<A: App>(&mut self, app: &mut A) -> Result<FrameOutcome> {
        if self.stop.is_stopped() {
            return Ok(FrameOutcome::Stopped);
        }
        self.frames += 1;

        self.scene.project_focus();
        self.scene.update_all(self.size);
        app.update(&self.scene);

        self.painter.clear();
        let area = Rect::from_size(self.size);
        self.scene.draw_all(&mut self.painter, area);
        app.draw(&mut Ui::new(area, &mut self.painter, false));
        self.backend.flush(area, self.painter.cmds())?;

        if self.auto_resize {
            self.resample_size();
        }

        match self.backend.read_event(self.timeout)? {
            Some(event) => Ok(self.handle_event(&event)),
            None => Ok(FrameOutcome::Continue),
        }
    }

    fn handle_event(&mut self, event: &InputEvent) -> FrameOutcome {
        match self.keys.classify(event) {
            Some(Reserved::Quit) => FrameOutcome::Quit,
            Some(Reserved::FocusNext) => {
                self.scene.cycle_focus();
                FrameOutcome::Continue
            }
            None => {
                if self.scene.dispatch(event, self.size).is_quit() {
                    FrameOutcome::Quit
                } else {
                    FrameOutcome::Continue
                }
            }
        }
    }

    fn resample_size(&mut self) {
        let detected = match self.backend.size() {
            Ok(size) => size,
            Err(err) => {
                tracing::debug!(error = %err, "terminal size query failed");
                return;
            }
        };
        let size = Size::new(
            self.pinned.0.unwrap_or(detected.width),
            self.pinned.1.unwrap_or(detected.height),
        );
        if size == self.size {
            return;
        }
        if request_resize(&mut self.backend, size) {
            tracing::debug!(from = ?self.size, to = ?size, "screen resized");
            self.size = size;
        }
    }
}

/// Best-effort geometry change; failures keep the previous geometry.
fn request_resize<B: Backend>(backend: &mut B, size: Size) -> bool {
    match backend.resize(size) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, ?size, "terminal resize failed, keeping geometry");
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/screen.rs"]
mod tests;
