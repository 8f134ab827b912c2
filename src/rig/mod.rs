//! Character rig module.
//!
//! Procedural secondary motion for an articulated skeleton:
//! - `BoneSet`: named joint slots resolved from the scene hierarchy
//! - Binder: resolves the slots by exact bone name, in document order
//! - `RestPose`: the baseline snapshot taken after the corrective pose
//! - `PointerFollow`: exponentially smoothed pointer tracking
//! - `OscillatorBank`: detuned sine signals driving the idle motion
//! - `CharacterRig`: per-character state and the per-frame joint update
//! - `RigSystem`: drives all rigs of a scene once per frame

pub mod binder;
pub mod bones;
pub mod oscillator;
pub mod pointer;
pub mod pose;
pub mod rig;
pub mod system;

pub use binder::Binder;
pub use bones::BoneSet;
pub use oscillator::{Oscillator, OscillatorBank, OscillatorFrame};
pub use pointer::PointerFollow;
pub use pose::RestPose;
pub use rig::{CharacterRig, RigConfig};
pub use system::RigSystem;
