use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;
use slotmap::SlotMap;

use crate::errors::{AnimaError, Result};
use crate::rig::CharacterRig;
use crate::scene::node::Node;
use crate::scene::transform_system;
use crate::scene::{NodeHandle, RigKey};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Scene graph container.
///
/// `Scene` is a pure data layer: it stores the node hierarchy and the
/// per-character rig pool. The host builds the skeleton hierarchy here
/// (typically from a loaded model), attaches rigs to it, and reads the
/// mutated transforms back out each frame to draw.
pub struct Scene {
    pub id: u32,

    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // ==== Component pools ====
    /// Character rigs animating joints of this scene's hierarchy.
    pub rigs: SlotMap<RigKey, CharacterRig>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),

            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            rigs: SlotMap::with_key(),
        }
    }

    /// Starts building a node with the fluent builder.
    pub fn build_node(&'_ mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Creates an empty unnamed node at the root.
    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::new())
    }

    /// Creates an empty named node at the root.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::with_name(name))
    }

    /// Adds a node to the scene (placed at the root by default).
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, child: Node, parent_handle: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        // Wire up the parent/child relationship
        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent_handle);
        }

        handle
    }

    /// Removes a node (recursively removing all of its children).
    pub fn remove_node(&mut self, handle: NodeHandle) {
        // 1. Take the children list first to avoid borrow conflicts
        let children = if let Some(node) = self.nodes.get(handle) {
            node.children.clone()
        } else {
            return;
        };

        // 2. Recursively remove children
        for child in children {
            self.remove_node(child);
        }

        // 3. Unlink from the parent (or the root list)
        let parent_opt = self.nodes.get(handle).and_then(|n| n.parent);

        if let Some(parent_handle) = parent_opt {
            if let Some(parent) = self.nodes.get_mut(parent_handle)
                && let Some(pos) = parent.children.iter().position(|&x| x == handle)
            {
                parent.children.remove(pos);
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(pos);
        }

        // 4. Drop the node data
        self.nodes.remove(handle);
    }

    /// Core logic: establish a parent/child relationship (attach).
    pub fn attach(&mut self, child_handle: NodeHandle, parent_handle: NodeHandle) {
        if child_handle == parent_handle {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        // 1. Detach from old
        let old_parent = self.nodes.get(child_handle).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child_handle)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child_handle) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new
        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(child_handle);
        } else {
            log::error!("Parent node not found during attach!");
            // Put the child back on the root list so it is not lost
            self.root_nodes.push(child_handle);
            return;
        }

        // 3. Update the child
        if let Some(c) = self.nodes.get_mut(child_handle) {
            c.parent = Some(parent_handle);
            c.transform.mark_dirty(); // force a matrix refresh under the new parent
        }
    }

    /// Read-only node access.
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    /// Mutable node access (for modifying TRS).
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Node name lookup.
    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: &str) {
        if let Some(node) = self.nodes.get_mut(handle) {
            name.clone_into(&mut node.name);
        }
    }

    // ========================================================================
    // Rig management
    // ========================================================================

    /// Attaches a character rig to the subtree rooted at `root`.
    ///
    /// Joint resolution and pose initialization happen lazily on the first
    /// frame that finds the expected spine chain under `root`, so the host
    /// may attach the rig before the skeleton has finished loading.
    pub fn add_rig(&mut self, root: NodeHandle) -> Result<RigKey> {
        if !self.nodes.contains_key(root) {
            return Err(AnimaError::NodeNotFound(root));
        }
        Ok(self.rigs.insert(CharacterRig::new(root)))
    }

    /// Removes a rig. Its joints stop animating immediately; their current
    /// pose is left in place.
    pub fn remove_rig(&mut self, key: RigKey) -> Option<CharacterRig> {
        self.rigs.remove(key)
    }

    #[must_use]
    pub fn get_rig(&self, key: RigKey) -> Option<&CharacterRig> {
        self.rigs.get(key)
    }

    pub fn get_rig_mut(&mut self, key: RigKey) -> Option<&mut CharacterRig> {
        self.rigs.get_mut(key)
    }

    // ========================================================================
    // Matrix update pipeline
    // ========================================================================

    /// Updates the world matrices of the whole scene.
    ///
    /// Must run after the rigs have written joint transforms for the frame
    /// and before the host reads the pose out to draw.
    pub fn update_matrix_world(&mut self) {
        // Iterative version avoids stack overflow on deep hierarchies
        transform_system::update_hierarchy_iterative(&mut self.nodes, &self.root_nodes);
    }
}

pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node, // staged node data being built
    parent: Option<NodeHandle>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::with_name(name),
            parent: None,
        }
    }

    // === Chained configuration ===

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    /// Rotation from Euler angles (XYZ order, radians).
    #[must_use]
    pub fn with_rotation_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.set_rotation_euler(x, y, z);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, s: f32) -> Self {
        self.node.transform.scale = Vec3::splat(s);
        self
    }

    /// Sets the parent node.
    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    // === Finisher ===

    /// Finishes the build, inserts the node into the scene and returns its
    /// handle.
    pub fn build(self) -> NodeHandle {
        let handle = self.scene.nodes.insert(self.node);

        if let Some(parent_handle) = self.parent {
            self.scene.attach(handle, parent_handle);
        } else {
            self.scene.root_nodes.push(handle);
        }

        handle
    }
}
