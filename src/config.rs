//! Camera Configuration Module
//!
//! Startup constants and input gains for the camera controller. The config
//! is read once at controller construction; the derived constants
//! (`pitch_angle`, default height, initial look direction) are computed from
//! it rather than looked up from any global content store.

use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Startup configuration for the RTS camera.
///
/// All fields are plain data so the config can travel through serde (JSON
/// settings files, editor panels). Speeds are gains applied to
/// already-normalized per-frame input deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera height above the terrain at zoom = 1.0.
    pub max_height: f32,
    /// Default viewing pitch in degrees, measured from the horizon.
    /// The solver's full pitch angle is `90 - pitch_degrees`, in radians.
    pub pitch_degrees: f32,
    /// Initial yaw in radians; the initial look direction is
    /// `(cos yaw, sin yaw, 0)`.
    pub yaw_radians: f32,
    /// Yaw radians per unit of horizontal mouse delta while rotating.
    pub rotation_speed: f32,
    /// Zoom factor change per unit of wheel delta.
    pub zoom_speed: f32,
    /// Anchor movement per unit of pan axis input, before zoom scaling.
    pub pan_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_height: 50.0,     // 50m above terrain at default zoom
            pitch_degrees: 35.0,  // Classic RTS down-angle
            yaw_radians: 0.0,     // Looking along +X
            rotation_speed: 2.0,  // Radians per normalized mouse unit
            zoom_speed: 0.1,      // Wheel notches are +/-1.0
            pan_speed: 1.0,       // Scaled by zoom at apply time
        }
    }
}

impl CameraConfig {
    /// Parse a config from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CameraError> {
        let cfg = serde_json::from_str(json)?;
        Ok(cfg)
    }

    /// The full pitch angle in radians, derived from the configured
    /// pitch in degrees: `90 - pitch_degrees`.
    pub fn pitch_angle(&self) -> f32 {
        (90.0 - self.pitch_degrees).to_radians()
    }
}
