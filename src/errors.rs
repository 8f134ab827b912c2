//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`AnimaError`] covers the boundary failure modes:
//! attaching a rig to a node that does not exist, and host event-loop
//! failures. Missing skeleton joints are deliberately *not* errors — an
//! unmatched joint slot stays empty and every operation referencing it is
//! skipped (see [`crate::rig`]).
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, AnimaError>`.

use thiserror::Error;

use crate::scene::NodeHandle;

/// The main error type for the Anima engine.
#[derive(Error, Debug)]
pub enum AnimaError {
    /// A node handle was used that is not (or no longer) part of the scene.
    #[error("Node not found in scene: {0:?}")]
    NodeNotFound(NodeHandle),

    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, AnimaError>`.
pub type Result<T> = std::result::Result<T, AnimaError>;
