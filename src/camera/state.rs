//! Camera State Module
//!
//! The mutable camera parameters and their validating setters. Every setter
//! is a single-field mutation: normalization happens on the way in, and no
//! setter touches any other field.

use glam::{Vec3, Vec3Swizzles};

use crate::error::CameraError;

/// Zoom floor; keeps the solved camera height away from terrain level.
pub const MIN_ZOOM: f32 = 0.01;

/// Mutable camera parameters.
///
/// Invariants, upheld by the setters:
/// - `look_direction` is always unit length with zero Z component
/// - `zoom >= MIN_ZOOM` after any mutation
///
/// `pitch` is deliberately not clamped: out-of-range values produce
/// geometrically unusual but well-defined transforms, and whether to restrict
/// them is a product decision the setter does not make.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    look_direction: Vec3,
    pitch: f32,
    zoom: f32,
    terrain_anchor: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            look_direction: Vec3::X,
            pitch: 1.0, // Default viewing angle
            zoom: 1.0,  // Default camera height
            terrain_anchor: Vec3::ZERO,
        }
    }
}

impl CameraState {
    /// Create a state looking along `(cos yaw, sin yaw, 0)` with default
    /// pitch/zoom and the anchor at the origin.
    pub fn with_yaw(yaw_radians: f32) -> Self {
        Self {
            look_direction: Vec3::new(yaw_radians.cos(), yaw_radians.sin(), 0.0),
            ..Default::default()
        }
    }

    /// The current look direction: unit length, zero Z.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        self.look_direction
    }

    /// Set the look direction from an arbitrary vector.
    ///
    /// The vector is projected onto the ground plane (Z = 0) and normalized.
    /// Fails without mutating state if the projection is zero length, e.g.
    /// for a straight-down vector.
    pub fn set_look_direction(&mut self, v: Vec3) -> Result<(), CameraError> {
        let flat = v.xy();
        let len = flat.length();
        if len <= f32::EPSILON {
            return Err(CameraError::DegenerateLookDirection);
        }
        self.look_direction = (flat / len).extend(0.0);
        Ok(())
    }

    /// Normalized pitch factor: 0 = top-down, 1 = configured default angle.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Store a pitch factor verbatim. No clamping at this layer.
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    /// Normalized zoom factor: 1 = default camera height, toward 0 = near
    /// terrain level.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Store a zoom factor, floor-clamped to [`MIN_ZOOM`].
    #[inline]
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
    }

    /// The world point the camera orbits around.
    #[inline]
    pub fn terrain_anchor(&self) -> Vec3 {
        self.terrain_anchor
    }

    /// Store the terrain anchor verbatim.
    #[inline]
    pub fn set_terrain_anchor(&mut self, anchor: Vec3) {
        self.terrain_anchor = anchor;
    }
}
