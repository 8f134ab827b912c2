//! Scene graph module.
//!
//! Manages the node hierarchy the animation core reads and writes:
//! - Node: a named scene node (parent/child links and a transform)
//! - Transform: TRS component (position, rotation, scale)
//! - Scene: node container plus the character rig pool
//! - `TransformSystem`: decoupled world-matrix update

pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use scene::{NodeBuilder, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] stored in a [`Scene`].
    pub struct NodeHandle;
    /// Handle to a [`crate::rig::CharacterRig`] stored in a [`Scene`].
    pub struct RigKey;
}
