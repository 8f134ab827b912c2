//! Transform System
//!
//! Hierarchical world-matrix update for the scene graph, decoupled from
//! `Scene` to avoid borrow conflicts: the pass only borrows the node
//! storage and the root list.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Updates the world matrices of the whole hierarchy.
///
/// Uses an explicit work stack instead of recursion, avoiding stack
/// overflow on deep hierarchies and repeated borrow overhead. Children are
/// pushed in reverse so they are processed in document order.
///
/// # Arguments
/// * `nodes` - Mutable reference to the node storage
/// * `roots` - Root node handles
pub fn update_hierarchy_iterative(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    // Work stack: (node handle, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root_handle in roots.iter().rev() {
        stack.push((root_handle, Affine3A::IDENTITY, false));
    }

    while let Some((node_handle, parent_world_matrix, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        // 1. Update the local matrix
        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        // 2. Update the world matrix
        if world_needs_update {
            let new_world = parent_world_matrix * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        // 3. Collect child info before re-borrowing
        let current_world = node.transform.world_matrix;
        let children_count = node.children.len();

        // 4. Push children in reverse to preserve processing order
        for i in (0..children_count).rev() {
            if let Some(node) = nodes.get(node_handle)
                && let Some(&child_handle) = node.children.get(i)
            {
                stack.push((child_handle, current_world, world_needs_update));
            }
        }
    }
}
