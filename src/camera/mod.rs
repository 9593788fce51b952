//! Camera Module
//!
//! Provides the terrain-anchored RTS camera: mutable state with validating
//! setters, per-frame input translation, scripted anchor moves, and the pure
//! transform solver that derives eye/target from the current state.

pub mod animation;
pub mod controller;
pub mod solver;
pub mod state;
pub mod translate;

pub use animation::MoveAnimation;
pub use controller::RtsCameraController;
pub use solver::{CameraTransform, SolverConstants, solve_transform};
pub use state::{CameraState, MIN_ZOOM};
pub use translate::InputTranslator;
