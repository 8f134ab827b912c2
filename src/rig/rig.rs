use glam::{Vec2, Vec3};

use crate::rig::binder::Binder;
use crate::rig::bones::BoneSet;
use crate::rig::oscillator::{OscillatorBank, OscillatorFrame};
use crate::rig::pointer::PointerFollow;
use crate::rig::pose::{self, RestPose};
use crate::scene::{NodeHandle, Scene};

/// Tuning values for the per-frame motion.
///
/// Offsets are radians added on top of the baseline Euler angles (the
/// pelvis bob is in scene units). The defaults reproduce the reference
/// character; all of them are plain data and may be changed per rig.
#[derive(Debug, Clone, PartialEq)]
pub struct RigConfig {
    /// Per-frame smoothing factor for the pointer follow, in (0, 1).
    pub pointer_smoothing: f32,
    /// Idle-motion oscillators.
    pub oscillators: OscillatorBank,

    /// Head yaw per unit of smoothed pointer X.
    pub head_follow: f32,
    /// Head pitch per unit of smoothed pointer Y.
    pub head_nod: f32,
    /// Head breathing amplitude.
    pub head_bob: f32,
    /// Neck yaw per unit of smoothed pointer X.
    pub neck_follow: f32,
    /// Neck pitch per unit of smoothed pointer Y.
    pub neck_nod: f32,
    /// Neck breathing amplitude.
    pub neck_bob: f32,

    /// Spine lean amplitude of the root-most segment.
    pub spine_base: f32,
    /// Extra lean amplitude per segment down the chain.
    pub spine_step: f32,
    /// Pelvis vertical bob amplitude, in scene units.
    pub pelvis_bob: f32,
    /// Elbow bend/extend amplitude (same sign on both sides).
    pub arm_swing: f32,
    /// Thigh flex amplitude.
    pub thigh_flex: f32,
    /// Calf flex amplitude, applied opposite to the thighs.
    pub calf_flex: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            pointer_smoothing: 0.03,
            oscillators: OscillatorBank::default(),

            head_follow: 0.15,
            head_nod: 0.10,
            head_bob: 0.015,
            neck_follow: 0.06,
            neck_nod: 0.04,
            neck_bob: 0.008,

            spine_base: 0.006,
            spine_step: 0.003,
            pelvis_bob: 0.003,
            arm_swing: 0.03,
            thigh_flex: 0.008,
            calf_flex: 0.01,
        }
    }
}

/// Per-character animation state.
///
/// Holds everything one animated character needs across frames: the
/// resolved joint slots, the baseline snapshot, the smoothed pointer state
/// and the motion config. Stored per scene, so multiple characters coexist
/// without interference.
///
/// # Lifecycle
///
/// 1. [`CharacterRig::new`] with the skeleton's root handle.
/// 2. Each frame, [`update`] binds the slots until the spine chain is
///    found, then (once) applies the corrective pose and captures the
///    baseline, then projects the idle motion onto the joints.
/// 3. Dropping the rig (or [`Scene::remove_rig`]) stops all writes.
///
/// [`update`]: CharacterRig::update
/// [`Scene::remove_rig`]: crate::scene::Scene::remove_rig
#[derive(Debug, Clone)]
pub struct CharacterRig {
    root: NodeHandle,
    bones: BoneSet,
    /// Baseline of the corrected pose; `Some` is the initialized state.
    rest: Option<RestPose>,
    pointer: PointerFollow,
    pub config: RigConfig,
}

impl CharacterRig {
    #[must_use]
    pub fn new(root: NodeHandle) -> Self {
        Self {
            root,
            bones: BoneSet::default(),
            rest: None,
            pointer: PointerFollow::new(),
            config: RigConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(root: NodeHandle, config: RigConfig) -> Self {
        Self {
            config,
            ..Self::new(root)
        }
    }

    /// Root of the skeleton subtree this rig animates.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    /// Resolved joint slots (empty until the skeleton is found).
    #[inline]
    #[must_use]
    pub fn bones(&self) -> &BoneSet {
        &self.bones
    }

    /// Baseline snapshot, once captured.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> Option<&RestPose> {
        self.rest.as_ref()
    }

    /// Smoothed pointer state.
    #[inline]
    #[must_use]
    pub fn pointer(&self) -> &PointerFollow {
        &self.pointer
    }

    /// Whether the corrective pose has been applied and the baseline
    /// captured.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.rest.is_some()
    }

    /// Runs one frame of the rig.
    ///
    /// `pointer_target` is the latest normalized pointer position and
    /// `time` the monotonic elapsed seconds supplied by the frame driver.
    /// Returns `true` on the single frame where initialization completed
    /// (the load-completion signal).
    pub fn update(&mut self, scene: &mut Scene, pointer_target: Vec2, time: f32) -> bool {
        let just_ready = self.ensure_initialized(scene);

        if self.rest.is_none() {
            return false;
        }

        // Pointer smoothing must finish before any joint math reads it
        self.pointer.retarget(pointer_target);
        self.pointer.advance(self.config.pointer_smoothing);

        let frame = self.config.oscillators.sample(time);
        self.animate(scene, &frame);

        just_ready
    }

    /// Two-phase start-up: bind the slots, then once the spine chain is
    /// present apply the corrective pose and capture the baseline.
    ///
    /// Idempotent by construction: the captured baseline doubles as the
    /// guard, so re-entry never re-applies the correctives or re-captures.
    /// Returns `true` only on the call that performed the initialization.
    fn ensure_initialized(&mut self, scene: &mut Scene) -> bool {
        if self.rest.is_some() {
            return false;
        }

        // Re-bind until the skeleton shows up; binding is pure and cheap.
        self.bones = Binder::bind(scene, self.root);
        if self.bones.spine.is_empty() {
            return false;
        }

        // Correctives strictly before capture: the baseline must reflect
        // the corrected stance, not the raw rest pose.
        pose::apply_corrective_pose(scene, &self.bones);
        self.rest = Some(RestPose::capture(scene, &self.bones));

        log::info!(
            "Character rig initialized: {} joints bound, {} spine segments",
            self.bones.resolved_count(),
            self.bones.spine.len()
        );
        true
    }

    /// Projects the idle motion onto the joints for one frame.
    ///
    /// A pure projection of (baseline, oscillator frame, smoothed
    /// pointer): no internal state, every unlisted axis is restored to its
    /// baseline value, and absent slots are skipped outright.
    fn animate(&self, scene: &mut Scene, frame: &OscillatorFrame) {
        let Some(rest) = &self.rest else { return };
        let p = self.pointer.current;
        let c = &self.config;

        // Head: pointer follow + breathing (X = left/right turn, Y = nod)
        write_rotation(scene, rest, self.bones.head, |r| {
            Vec3::new(
                r.x + p.x * c.head_follow,
                r.y - p.y * c.head_nod + frame.head * c.head_bob,
                r.z,
            )
        });
        write_rotation(scene, rest, self.bones.neck, |r| {
            Vec3::new(
                r.x + p.x * c.neck_follow,
                r.y - p.y * c.neck_nod + frame.head * c.neck_bob,
                r.z,
            )
        });

        // Spine: breathing lean (Z), amplitude growing down the chain
        for (i, &segment) in self.bones.spine.iter().enumerate() {
            let amplitude = c.spine_base + i as f32 * c.spine_step;
            write_rotation(scene, rest, Some(segment), |r| {
                Vec3::new(r.x, r.y, r.z + frame.spine * amplitude)
            });
        }

        // Body vertical bob via the pelvis position
        if let Some(pelvis) = self.bones.pelvis
            && let Some(node) = scene.get_node_mut(pelvis)
        {
            node.transform.position.y = rest.pelvis_height + frame.body * c.pelvis_bob;
        }

        // Elbows: subtle bend/extend, same Y direction on both sides
        write_rotation(scene, rest, self.bones.lowerarm_l, |r| {
            Vec3::new(r.x, r.y + frame.arm * c.arm_swing, r.z)
        });
        write_rotation(scene, rest, self.bones.lowerarm_r, |r| {
            Vec3::new(r.x, r.y + frame.arm * c.arm_swing, r.z)
        });

        // Thighs: subtle flex (Z)
        write_rotation(scene, rest, self.bones.thigh_l, |r| {
            Vec3::new(r.x, r.y, r.z + frame.leg * c.thigh_flex)
        });
        write_rotation(scene, rest, self.bones.thigh_r, |r| {
            Vec3::new(r.x, r.y, r.z + frame.leg * c.thigh_flex)
        });

        // Calves compensate against the thighs
        write_rotation(scene, rest, self.bones.calf_l, |r| {
            Vec3::new(r.x, r.y, r.z - frame.leg * c.calf_flex)
        });
        write_rotation(scene, rest, self.bones.calf_r, |r| {
            Vec3::new(r.x, r.y, r.z - frame.leg * c.calf_flex)
        });
    }
}

/// Writes one joint's rotation as baseline plus offset.
///
/// Skips the write if the slot is empty, the joint was missing at capture
/// time, or the node has since been removed from the scene.
fn write_rotation(
    scene: &mut Scene,
    rest: &RestPose,
    bone: Option<NodeHandle>,
    offset: impl FnOnce(Vec3) -> Vec3,
) {
    let Some(handle) = bone else { return };
    let Some(r) = rest.rotation(handle) else {
        return;
    };
    if let Some(node) = scene.get_node_mut(handle) {
        let e = offset(r);
        node.transform.set_rotation_euler(e.x, e.y, e.z);
    }
}
