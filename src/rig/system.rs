use glam::Vec2;

use crate::scene::{RigKey, Scene};

/// Rig system.
///
/// Drives updates for all `CharacterRig` components of a scene.
/// Uses the `std::mem::take` technique to avoid borrow conflicts.
pub struct RigSystem;

impl RigSystem {
    /// Updates every rig once for this frame.
    ///
    /// # Arguments
    /// * `scene` - Scene reference
    /// * `pointer_target` - Latest normalized pointer position, [-1, 1]
    /// * `time` - Monotonic elapsed time in seconds
    ///
    /// Returns the keys of rigs that completed initialization during this
    /// call (normally empty; each key appears exactly once over a rig's
    /// lifetime).
    pub fn update(scene: &mut Scene, pointer_target: Vec2, time: f32) -> Vec<RigKey> {
        // Temporarily take the rigs out to avoid borrow conflicts
        let mut rigs = std::mem::take(&mut scene.rigs);

        let mut ready = Vec::new();
        for (key, rig) in &mut rigs {
            if rig.update(scene, pointer_target, time) {
                ready.push(key);
            }
        }

        // Return the rigs after the update
        scene.rigs = rigs;
        ready
    }
}
