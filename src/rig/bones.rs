use smallvec::SmallVec;

use crate::scene::NodeHandle;

/// Bone names the binder matches against, following the source rig's
/// naming convention. Spine segments are ordered root-most first.
pub const SPINE_BONES: [&str; 3] = ["spine_03", "spine_04", "spine_05"];
pub const PELVIS_BONE: &str = "pelvis";
pub const HEAD_BONE: &str = "head";
pub const NECK_BONE: &str = "neck_01";
pub const UPPERARM_L_BONE: &str = "upperarm_l";
pub const UPPERARM_R_BONE: &str = "upperarm_r";
pub const LOWERARM_L_BONE: &str = "lowerarm_l";
pub const LOWERARM_R_BONE: &str = "lowerarm_r";
pub const THIGH_L_BONE: &str = "thigh_l";
pub const THIGH_R_BONE: &str = "thigh_r";
pub const CALF_L_BONE: &str = "calf_l";
pub const CALF_R_BONE: &str = "calf_r";

/// Resolved joint slots of one character.
///
/// Every slot is optional: a skeleton missing a bone simply leaves the slot
/// empty, and every operation referencing an empty slot is skipped. The
/// spine chain keeps the document order in which its segments were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoneSet {
    pub spine: SmallVec<[NodeHandle; 4]>,
    pub pelvis: Option<NodeHandle>,
    pub head: Option<NodeHandle>,
    pub neck: Option<NodeHandle>,
    pub upperarm_l: Option<NodeHandle>,
    pub upperarm_r: Option<NodeHandle>,
    pub lowerarm_l: Option<NodeHandle>,
    pub lowerarm_r: Option<NodeHandle>,
    pub thigh_l: Option<NodeHandle>,
    pub thigh_r: Option<NodeHandle>,
    pub calf_l: Option<NodeHandle>,
    pub calf_r: Option<NodeHandle>,
}

impl BoneSet {
    /// Number of resolved joints, spine segments included.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        let singles = [
            self.pelvis,
            self.head,
            self.neck,
            self.upperarm_l,
            self.upperarm_r,
            self.lowerarm_l,
            self.lowerarm_r,
            self.thigh_l,
            self.thigh_r,
            self.calf_l,
            self.calf_r,
        ];
        self.spine.len() + singles.iter().filter(|s| s.is_some()).count()
    }

    /// Iterates over every resolved joint handle, spine first.
    pub fn iter_resolved(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.spine.iter().copied().chain(
            [
                self.pelvis,
                self.head,
                self.neck,
                self.upperarm_l,
                self.upperarm_r,
                self.lowerarm_l,
                self.lowerarm_r,
                self.thigh_l,
                self.thigh_r,
                self.calf_l,
                self.calf_r,
            ]
            .into_iter()
            .flatten(),
        )
    }
}
