use glam::Vec2;

/// Smoothed pointer tracking state.
///
/// `target` holds the latest raw normalized pointer coordinate and is the
/// only field the event path may write. `current` asymptotically follows
/// `target` and is advanced exactly once per frame, before any joint
/// computation that reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFollow {
    /// Latest raw pointer position, [-1, 1] per axis.
    pub target: Vec2,
    /// Exponentially smoothed position, only ever written by [`advance`].
    ///
    /// [`advance`]: PointerFollow::advance
    pub current: Vec2,
}

impl PointerFollow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the latest raw pointer sample. Never touches `current`.
    #[inline]
    pub fn retarget(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Moves `current` toward `target` by the given factor, each axis
    /// independently. With a factor in (0, 1) the motion converges
    /// monotonically and never overshoots.
    #[inline]
    pub fn advance(&mut self, factor: f32) {
        self.current += (self.target - self.current) * factor;
    }
}
