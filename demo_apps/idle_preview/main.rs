//! Idle-motion preview.
//!
//! Builds a placeholder humanoid skeleton procedurally (standing in for a
//! loaded character model), attaches a character rig, and runs the winit
//! driver. There is no renderer attached; the animated pose is sampled and
//! logged periodically instead. Move the pointer across the window to see
//! the head-follow values react.

use anima::{App, NodeHandle, Scene};

/// Stand-in for a loaded skeleton: same bone names and topology as the
/// reference character rig.
fn build_humanoid(scene: &mut Scene) -> NodeHandle {
    let root = scene.build_node("armature").build();
    let pelvis = scene
        .build_node("pelvis")
        .with_position(0.0, 0.95, 0.0)
        .with_parent(root)
        .build();

    // Torso chain
    let spine_03 = scene
        .build_node("spine_03")
        .with_position(0.0, 0.12, 0.0)
        .with_parent(pelvis)
        .build();
    let spine_04 = scene
        .build_node("spine_04")
        .with_position(0.0, 0.14, 0.0)
        .with_parent(spine_03)
        .build();
    let spine_05 = scene
        .build_node("spine_05")
        .with_position(0.0, 0.14, 0.0)
        .with_parent(spine_04)
        .build();
    let neck = scene
        .build_node("neck_01")
        .with_position(0.0, 0.12, 0.0)
        .with_parent(spine_05)
        .build();
    scene
        .build_node("head")
        .with_position(0.0, 0.10, 0.0)
        .with_parent(neck)
        .build();

    // Arms
    for (upper, lower, x) in [
        ("upperarm_l", "lowerarm_l", -0.18),
        ("upperarm_r", "lowerarm_r", 0.18),
    ] {
        let upperarm = scene
            .build_node(upper)
            .with_position(x, 0.05, 0.0)
            .with_parent(spine_05)
            .build();
        scene
            .build_node(lower)
            .with_position(x.signum() * 0.28, 0.0, 0.0)
            .with_parent(upperarm)
            .build();
    }

    // Legs
    for (thigh, calf, x) in [("thigh_l", "calf_l", -0.10), ("thigh_r", "calf_r", 0.10)] {
        let thigh = scene
            .build_node(thigh)
            .with_position(x, -0.05, 0.0)
            .with_parent(pelvis)
            .build();
        scene
            .build_node(calf)
            .with_position(0.0, -0.45, 0.0)
            .with_parent(thigh)
            .build();
    }

    root
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new().with_title("anima — idle preview");

    let root = build_humanoid(&mut app.engine.scene);
    let rig_key = app.engine.scene.add_rig(root)?;

    app.set_rig_ready_fn(|_, key| {
        log::info!("Rig {key:?} ready, idle motion running");
    });

    app.set_update_fn(move |engine, state| {
        // Sample the pose roughly twice a second in place of a renderer
        if state.frame_count % 30 != 0 {
            return;
        }
        let Some(rig) = engine.scene.get_rig(rig_key) else {
            return;
        };
        if let Some(head) = rig.bones().head
            && let Some(node) = engine.scene.get_node(head)
        {
            let e = node.transform.rotation_euler();
            log::info!(
                "t={:6.2}s  head turn {:+.3}  nod {:+.3}  pointer {:+.2},{:+.2}",
                state.time,
                e.x,
                e.y,
                rig.pointer().current.x,
                rig.pointer().current.y,
            );
        }
    });

    app.run()?;
    Ok(())
}
