use glam::Vec2;

/// Platform-independent pointer input state.
///
/// The host event path (winit, or any embedding) injects raw cursor
/// positions and viewport sizes here; nothing in this type ever touches
/// scene or rig state, so event handlers stay trivially non-blocking.
#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Current cursor position inside the window, in physical pixels.
    pub cursor_position: Vec2,
    /// Window size in physical pixels.
    pub screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        self.cursor_position = Vec2::new(x as f32, y as f32);
    }

    /// Cursor position normalized to [-1, 1] per axis: x grows left to
    /// right, y grows top to bottom. Returns zero while the viewport size
    /// is unknown or degenerate.
    #[must_use]
    pub fn pointer_ndc(&self) -> Vec2 {
        if self.screen_size.x <= 0.0 || self.screen_size.y <= 0.0 {
            return Vec2::ZERO;
        }
        (self.cursor_position / self.screen_size) * 2.0 - Vec2::ONE
    }
}
