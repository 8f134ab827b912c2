//! Engine Core Module
//!
//! This module contains [`Engine`], the per-scene coordinator of the
//! animation pipeline. It is a pure engine instance without any window
//! management logic, allowing it to be driven by different frontends (the
//! built-in winit [`App`], tests, or any host render loop).
//!
//! # Per-frame pipeline
//!
//! [`Engine::update`] runs exactly once per rendered frame and keeps a
//! fixed internal order:
//!
//! 1. advance elapsed time and the frame counter
//! 2. read the latest normalized pointer target from [`Input`]
//! 3. update every character rig (pointer smoothing, then oscillator
//!    sampling, then joint writes)
//! 4. refresh the scene's world matrices for the host renderer
//!
//! All of it is synchronous on the caller's thread; the only asynchronous
//! entry points are the [`Input`] injection methods, which never touch
//! scene state.
//!
//! [`App`]: crate::app::App
//! [`Input`]: crate::input::Input

use crate::input::Input;
use crate::rig::RigSystem;
use crate::scene::{RigKey, Scene};

/// The per-scene engine instance.
///
/// # Lifecycle
///
/// 1. Create with [`Engine::new`] or [`Engine::default`]
/// 2. Build the skeleton hierarchy in [`Engine::scene`], attach rigs
/// 3. Update each frame with [`Engine::update`]
/// 4. Drain load-completion events with [`Engine::take_ready_rigs`]
pub struct Engine {
    pub scene: Scene,
    pub input: Input,

    time: f32,
    frame_count: u64,

    ready_rigs: Vec<RigKey>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            input: Input::new(),
            time: 0.0,
            frame_count: 0,
            ready_rigs: Vec::new(),
        }
    }

    /// Returns the total elapsed time in seconds since the engine started.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Returns the total number of frames run since startup.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Handles window resize events.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.input.handle_resize(width, height);
    }

    /// Updates the engine state for the current frame.
    ///
    /// This method should be called once per frame before rendering.
    ///
    /// # Arguments
    ///
    /// * `dt` - Delta time since the last frame in seconds
    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.frame_count += 1;

        let pointer_target = self.input.pointer_ndc();
        let ready = RigSystem::update(&mut self.scene, pointer_target, self.time);
        self.ready_rigs.extend(ready);

        self.scene.update_matrix_world();
    }

    /// Drains the rigs that finished initializing since the last call.
    ///
    /// Each rig key is yielded exactly once, on the frame its corrective
    /// pose was applied and its baseline captured. Hosts use this as the
    /// load-completion signal (e.g. to dismiss a loading screen).
    pub fn take_ready_rigs(&mut self) -> Vec<RigKey> {
        std::mem::take(&mut self.ready_rigs)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame timing and state information.
///
/// This struct is passed to user update callbacks each frame,
/// providing essential timing information for animations and logic.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Total elapsed time since the application started (in seconds).
    pub time: f32,
    /// Delta time since the last frame (in seconds).
    pub dt: f32,
    /// Total number of frames run since startup.
    pub frame_count: u64,
}
