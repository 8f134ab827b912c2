//! Transform and TransformSystem tests
//!
//! Tests for:
//! - Transform TRS operations and dirty checking
//! - Euler angle round-trip conversions
//! - Hierarchical matrix propagation through the scene

use anima::scene::scene::Scene;
use anima::scene::transform::Transform;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Transform Unit Tests
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call should always return true (force_update starts true)
    assert!(t.update_local_matrix());

    // Second call without changes should return false
    assert!(!t.update_local_matrix());

    // Changing position should trigger a new update
    t.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(t.update_local_matrix());

    // No change again
    assert!(!t.update_local_matrix());

    // Changing rotation
    t.rotation = Quat::from_rotation_y(FRAC_PI_2);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    // Changing scale
    t.scale = Vec3::splat(2.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());
}

#[test]
fn transform_mark_dirty_forces_update() {
    let mut t = Transform::new();
    t.update_local_matrix();
    assert!(!t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix(), "mark_dirty must force a rebuild");
}

#[test]
fn transform_local_matrix_reflects_trs() {
    let mut t = Transform::new();
    t.position = Vec3::new(10.0, 20.0, 30.0);
    t.scale = Vec3::splat(2.0);
    t.update_local_matrix();

    let mat = Mat4::from(*t.local_matrix());
    // The translation column should reflect position
    let translation = mat.w_axis.truncate();
    assert!(vec3_approx(translation, Vec3::new(10.0, 20.0, 30.0)));
}

#[test]
fn transform_euler_roundtrip() {
    let mut t = Transform::new();
    let (x, y, z) = (0.3, 0.7, 1.2);
    t.set_rotation_euler(x, y, z);

    let euler = t.rotation_euler();
    assert!(approx_eq(euler.x, x));
    assert!(approx_eq(euler.y, y));
    assert!(approx_eq(euler.z, z));
}

#[test]
fn transform_euler_with_order() {
    let mut t = Transform::new();
    t.set_rotation_euler_with_order(0.5, 0.3, 0.1, EulerRot::YXZ);

    // Verify rotation is not identity (was actually set)
    let q = t.rotation;
    assert!((q.length() - 1.0).abs() < 1e-4);
    assert_ne!(q, Quat::IDENTITY);
}

#[test]
fn transform_small_euler_additions_are_stable() {
    // The rig writes baseline + offset through the Euler helpers every
    // frame; the round trip must not wander for small angles.
    let mut t = Transform::new();
    for i in 0..1000 {
        let offset = (i as f32 * 0.01).sin() * 0.05;
        t.set_rotation_euler(0.1 + offset, 0.2, 0.3);
    }
    t.set_rotation_euler(0.1, 0.2, 0.3);
    let euler = t.rotation_euler();
    assert!(vec3_approx(euler, Vec3::new(0.1, 0.2, 0.3)));
}

// ============================================================================
// Hierarchical Propagation
// ============================================================================

#[test]
fn world_matrix_chains_through_hierarchy() {
    let mut scene = Scene::new();
    let root = scene.build_node("root").with_position(1.0, 0.0, 0.0).build();
    let child = scene
        .build_node("child")
        .with_position(0.0, 2.0, 0.0)
        .with_parent(root)
        .build();
    let grandchild = scene
        .build_node("grandchild")
        .with_position(0.0, 0.0, 3.0)
        .with_parent(child)
        .build();

    scene.update_matrix_world();

    let world: Vec3 = scene
        .get_node(grandchild)
        .unwrap()
        .world_matrix()
        .translation
        .into();
    assert!(vec3_approx(world, Vec3::new(1.0, 2.0, 3.0)));

    // The Mat4 view a host renderer uploads must agree
    let mat = scene
        .get_node(grandchild)
        .unwrap()
        .transform
        .world_matrix_as_mat4();
    assert!(vec3_approx(mat.w_axis.truncate(), world));
}

#[test]
fn world_matrix_applies_parent_rotation() {
    let mut scene = Scene::new();
    let root = scene
        .build_node("root")
        .with_rotation_euler(0.0, 0.0, FRAC_PI_2)
        .build();
    let child = scene
        .build_node("child")
        .with_position(1.0, 0.0, 0.0)
        .with_parent(root)
        .build();

    scene.update_matrix_world();

    // +X in the parent's frame becomes +Y in the world
    let world: Vec3 = scene
        .get_node(child)
        .unwrap()
        .world_matrix()
        .translation
        .into();
    assert!(vec3_approx(world, Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn world_matrix_updates_after_joint_write() {
    let mut scene = Scene::new();
    let root = scene.build_node("root").build();
    let child = scene
        .build_node("child")
        .with_position(0.0, 1.0, 0.0)
        .with_parent(root)
        .build();

    scene.update_matrix_world();

    // Move the parent the way a rig moves the pelvis, then re-propagate
    scene.get_node_mut(root).unwrap().transform.position.y = 0.5;
    scene.update_matrix_world();

    let world: Vec3 = scene
        .get_node(child)
        .unwrap()
        .world_matrix()
        .translation
        .into();
    assert!(vec3_approx(world, Vec3::new(0.0, 1.5, 0.0)));
}

#[test]
fn clean_subtree_skips_matrix_rebuild_but_stays_correct() {
    let mut scene = Scene::new();
    let root = scene.build_node("root").with_position(2.0, 0.0, 0.0).build();
    let child = scene
        .build_node("child")
        .with_position(0.0, 1.0, 0.0)
        .with_parent(root)
        .build();

    scene.update_matrix_world();
    // A second pass with nothing dirty must leave the same result
    scene.update_matrix_world();

    let world: Vec3 = scene
        .get_node(child)
        .unwrap()
        .world_matrix()
        .translation
        .into();
    assert!(vec3_approx(world, Vec3::new(2.0, 1.0, 0.0)));
}
