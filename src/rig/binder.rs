use crate::rig::bones::{
    BoneSet, CALF_L_BONE, CALF_R_BONE, HEAD_BONE, LOWERARM_L_BONE, LOWERARM_R_BONE, NECK_BONE,
    PELVIS_BONE, SPINE_BONES, THIGH_L_BONE, THIGH_R_BONE, UPPERARM_L_BONE, UPPERARM_R_BONE,
};
use crate::scene::{NodeHandle, Scene};

pub struct Binder;

impl Binder {
    /// Resolves the joint slots of the subtree rooted at `root`.
    ///
    /// The traversal is a pre-order walk in document order (children in
    /// insertion order), so repeated spine segments land in the chain in a
    /// stable, deterministic order. A pure function of the hierarchy:
    /// binding the same tree twice yields an identical [`BoneSet`].
    /// Unmatched names are not an error; their slots stay empty.
    #[must_use]
    pub fn bind(scene: &Scene, root: NodeHandle) -> BoneSet {
        let mut bones = BoneSet::default();

        let mut stack: Vec<NodeHandle> = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = scene.get_node(handle) else {
                continue;
            };

            match node.name.as_str() {
                n if SPINE_BONES.contains(&n) => bones.spine.push(handle),
                PELVIS_BONE => bones.pelvis = Some(handle),
                HEAD_BONE => bones.head = Some(handle),
                NECK_BONE => bones.neck = Some(handle),
                UPPERARM_L_BONE => bones.upperarm_l = Some(handle),
                UPPERARM_R_BONE => bones.upperarm_r = Some(handle),
                LOWERARM_L_BONE => bones.lowerarm_l = Some(handle),
                LOWERARM_R_BONE => bones.lowerarm_r = Some(handle),
                THIGH_L_BONE => bones.thigh_l = Some(handle),
                THIGH_R_BONE => bones.thigh_r = Some(handle),
                CALF_L_BONE => bones.calf_l = Some(handle),
                CALF_R_BONE => bones.calf_r = Some(handle),
                _ => {}
            }

            // Reverse push keeps pre-order: first child is popped next
            for &child in node.children().iter().rev() {
                stack.push(child);
            }
        }

        log::debug!(
            "Bound {} joints under rig root ({} spine segments)",
            bones.resolved_count(),
            bones.spine.len()
        );

        bones
    }
}
