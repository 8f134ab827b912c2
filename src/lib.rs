#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod engine;
pub mod errors;
pub mod input;
pub mod rig;
pub mod scene;

#[cfg(feature = "winit")]
pub mod app;

pub use engine::{Engine, FrameState};
pub use errors::AnimaError;
pub use input::Input;
pub use rig::{
    Binder, BoneSet, CharacterRig, Oscillator, OscillatorBank, OscillatorFrame, PointerFollow,
    RestPose, RigConfig, RigSystem,
};
pub use scene::{Node, NodeBuilder, NodeHandle, RigKey, Scene, Transform};

#[cfg(feature = "winit")]
pub use app::App;
