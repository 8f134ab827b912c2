use glam::Vec3;
use slotmap::SecondaryMap;

use crate::rig::bones::BoneSet;
use crate::scene::{NodeHandle, Scene};

// --- Static corrective pose ---
// Both upper-arm bones share an identical rest quaternion in the source rig,
// so the SAME signed Y rotation brings both arms down symmetrically.
pub const UPPER_ARM_DROP: f32 = 0.25;
// Slight elbow bend: left arm bent inward, right arm left nearly straight.
// The asymmetry is a deliberate stance choice, not a derived quantity.
pub const ELBOW_BEND_L: f32 = -0.35;
pub const ELBOW_BEND_R: f32 = 0.05;

/// Applies the corrective rotation deltas that move the rest pose into the
/// desired static stance. Must run before [`RestPose::capture`]; empty
/// slots are skipped.
pub fn apply_corrective_pose(scene: &mut Scene, bones: &BoneSet) {
    rotate_y(scene, bones.upperarm_l, UPPER_ARM_DROP);
    rotate_y(scene, bones.upperarm_r, UPPER_ARM_DROP);
    rotate_y(scene, bones.lowerarm_l, ELBOW_BEND_L);
    rotate_y(scene, bones.lowerarm_r, ELBOW_BEND_R);
}

fn rotate_y(scene: &mut Scene, bone: Option<NodeHandle>, delta: f32) {
    let Some(handle) = bone else { return };
    if let Some(node) = scene.get_node_mut(handle) {
        let e = node.transform.rotation_euler();
        node.transform.set_rotation_euler(e.x, e.y + delta, e.z);
    }
}

/// Baseline snapshot of the corrected pose.
///
/// Captured exactly once per rig, after the corrective deltas and before
/// the first per-frame update. Every later joint write is expressed as
/// baseline plus offset, never as a delta on the previous frame's value,
/// so the pose cannot drift.
#[derive(Debug, Clone)]
pub struct RestPose {
    /// Per-joint rotation at capture time, as XYZ Euler angles.
    rotations: SecondaryMap<NodeHandle, Vec3>,
    /// Pelvis local height at capture time (drives the vertical bob).
    pub pelvis_height: f32,
}

impl RestPose {
    /// Snapshots the rotation of every resolved joint, plus the pelvis
    /// local Y position.
    #[must_use]
    pub fn capture(scene: &Scene, bones: &BoneSet) -> Self {
        let mut rotations = SecondaryMap::new();
        for handle in bones.iter_resolved() {
            if let Some(node) = scene.get_node(handle) {
                rotations.insert(handle, node.transform.rotation_euler());
            }
        }

        let pelvis_height = bones
            .pelvis
            .and_then(|h| scene.get_node(h))
            .map_or(0.0, |n| n.transform.position.y);

        Self {
            rotations,
            pelvis_height,
        }
    }

    /// Baseline rotation of one joint, if it was resolved at capture time.
    #[must_use]
    pub fn rotation(&self, handle: NodeHandle) -> Option<Vec3> {
        self.rotations.get(handle).copied()
    }

    /// Number of joints in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }
}
