//! RTS Camera Library
//!
//! A terrain-anchored camera controller for real-time-strategy style 3D
//! viewports. Player input and scripted transitions are converted, once per
//! frame, into a world-space eye position and look target parameterized by
//! normalized zoom/pitch factors.
//!
//! This library is window-system and renderer agnostic - it only manages
//! camera state and math. Raw input polling, terrain height sampling and
//! renderer consumption of the resulting view matrix live with the caller.
//!
//! # Modules
//!
//! - [`camera`] - Camera state, input translation, scripted moves and the
//!   per-frame transform solver
//! - [`input`] - Platform-agnostic per-frame input snapshot and key/button
//!   trackers
//! - [`config`] - Startup constants and input gains, serde round-trippable
//! - [`error`] - Crate error type
//!
//! # Coordinate convention
//!
//! The world is Z-up: the ground plane is Z = 0 and `Vec3::Z` is world up.
//! The camera's look direction always lies in the ground plane; pitch and
//! zoom are normalized factors applied by the solver, not stored angles.
//!
//! # Example
//!
//! ```
//! use rts_camera::{CameraConfig, FrameInput, RtsCameraController};
//!
//! let mut controller = RtsCameraController::new(CameraConfig::default());
//!
//! // Per frame: feed the input snapshot and the current time in seconds.
//! let input = FrameInput {
//!     pan_forward: 1.0,
//!     ..FrameInput::default()
//! };
//! let transform = controller.update(&input, 0.016);
//!
//! // Hand eye/target/up (or the prebuilt view matrix) to the renderer.
//! assert!(transform.eye.z > 0.0);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;

// Re-export the common types at crate level for convenience
pub use camera::{CameraState, CameraTransform, MoveAnimation, RtsCameraController};
pub use config::CameraConfig;
pub use error::CameraError;
pub use input::{FrameInput, PanKeys, RotateButton};
