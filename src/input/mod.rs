//! Input Module
//!
//! Provides the platform-agnostic input surface the camera consumes each
//! frame. This module is decoupled from any specific windowing system (like
//! winit): the host event loop feeds raw key/button transitions into the
//! trackers here, and once per frame collapses them into a [`FrameInput`]
//! snapshot for the controller.
//!
//! # Example
//!
//! ```rust
//! use rts_camera::input::{FrameInput, PanKeys, RotateButton};
//!
//! let mut pan = PanKeys::default();
//! let mut rotate = RotateButton::new();
//!
//! // Event loop: record key/button state changes.
//! pan.forward = true;
//! rotate.set_held(true);
//!
//! // Update loop: snapshot once per frame.
//! let input = FrameInput::from_trackers(&mut rotate, &pan, (0.02, 0.0), 0.0);
//! assert_eq!(input.pan_forward, 1.0);
//! assert!(input.rotate_just_pressed);
//! ```

pub mod frame;

// Re-export commonly used types at module level
pub use frame::{FrameInput, PanKeys, RotateButton};
