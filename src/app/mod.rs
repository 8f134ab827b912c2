//! Winit host driver.
//!
//! [`App`] owns the window event loop and drives an [`Engine`] from it:
//! cursor and resize events are forwarded to the engine's [`Input`] as
//! they arrive, and each `RedrawRequested` runs one engine update followed
//! by the user's frame callback (where a host renderer hooks in). The
//! event loop, the engine, and the input subscription share one lifetime:
//! closing the window exits the loop, and dropping the `App` releases
//! everything exactly once.
//!
//! [`Engine`]: crate::engine::Engine
//! [`Input`]: crate::input::Input

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::engine::{Engine, FrameState};
use crate::errors::Result;
use crate::scene::RigKey;

pub type UpdateFn = Box<dyn FnMut(&mut Engine, FrameState)>;
pub type RigReadyFn = Box<dyn FnMut(&mut Engine, RigKey)>;

pub struct App {
    window: Option<Arc<Window>>,
    pub title: String,
    pub engine: Engine,

    update_fn: Option<UpdateFn>,
    rig_ready_fn: Option<RigReadyFn>,
    start_time: Instant,
    last_loop_time: Instant,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            window: None,
            title: "Anima Engine".into(),
            engine: Engine::new(),
            update_fn: None,
            rig_ready_fn: None,
            start_time: now,
            last_loop_time: now,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Per-frame callback, invoked after the engine update. This is where
    /// a host renderer consumes the posed scene.
    pub fn set_update_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut Engine, FrameState) + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    /// Called once per rig, on the frame its initialization completed
    /// (e.g. to dismiss a loading screen).
    pub fn set_rig_ready_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut Engine, RigKey) + 'static,
    {
        self.rig_ready_fn = Some(Box::new(f));
        self
    }

    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn update(&mut self) {
        let now = Instant::now();
        let total_time = now.duration_since(self.start_time).as_secs_f32();
        let dt = now.duration_since(self.last_loop_time).as_secs_f32();
        self.last_loop_time = now;

        self.engine.update(dt);

        for key in self.engine.take_ready_rigs() {
            if let Some(ref mut rig_ready_fn) = self.rig_ready_fn {
                rig_ready_fn(&mut self.engine, key);
            }
        }

        if let Some(ref mut update_fn) = self.update_fn {
            let state = FrameState {
                time: total_time,
                dt,
                frame_count: self.engine.frame_count(),
            };
            update_fn(&mut self.engine, state);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.engine.resize(size.width, size.height);

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.engine.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.engine.input.handle_cursor_move(position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
