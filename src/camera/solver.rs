//! Transform Solver Module
//!
//! The pure per-frame derivation of eye position and look target from the
//! camera state. The eye is found by casting a ray from the terrain anchor
//! backward along the camera-to-terrain direction and intersecting it with
//! the horizontal plane at the zoom-derived height.

use glam::{Mat4, Vec3};

use super::state::CameraState;

/// Below this the backward ray counts as parallel to the height plane.
const PARALLEL_EPS: f32 = 1e-6;

/// Constants derived once at startup from the camera config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConstants {
    /// Full pitch angle in radians (90 degrees minus the configured pitch).
    pub pitch_angle: f32,
    /// Camera height above terrain at zoom = 1.
    pub default_height: f32,
}

/// One frame's solved view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// World-space camera position.
    pub eye: Vec3,
    /// World-space point the camera looks at.
    pub target: Vec3,
    /// World up (always `Vec3::Z` under this crate's convention).
    pub up: Vec3,
}

impl CameraTransform {
    /// Right-handed view matrix for the renderer.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Solve the view transform for the current state.
///
/// The position solve snaps pitch values strictly inside the dead zone
/// between top-down and the full pitch angle to the full angle, so every
/// normalized pitch in (0, 1) frames the anchor from the same eye position.
/// The emitted look direction uses the raw, unsnapped pitch - the two
/// intentionally diverge inside the dead zone.
///
/// When the backward ray is parallel to the height plane (`pitch` exactly 0,
/// or an out-of-range pitch landing on a flat angle) the intersection is
/// undefined; the eye then falls back to straight above the anchor at the
/// solve height, which keeps the solve pure instead of holding stale state.
pub fn solve_transform(constants: &SolverConstants, state: &CameraState) -> CameraTransform {
    let look = state.look_direction();
    let yaw = look.y.atan2(look.x);

    // lerp(0, -pitch_angle, pitch) and lerp(0, default_height, zoom)
    let pitch_rad = -constants.pitch_angle * state.pitch();
    let height = constants.default_height * state.zoom();

    // Dead-zone snap, position solve only. Exclusive at both ends: 0 and
    // angles at/past the full pitch pass through unclamped.
    let clamped_pitch = if pitch_rad > -constants.pitch_angle && pitch_rad < 0.0 {
        -constants.pitch_angle
    } else {
        pitch_rad
    };

    // Unit camera-to-terrain direction from (yaw, clamped pitch)
    let dir = Vec3::new(yaw.cos(), yaw.sin(), clamped_pitch.sin()).normalize();

    let anchor = state.terrain_anchor();
    let eye = if dir.z.abs() < PARALLEL_EPS {
        // Parallel ray: top-down framing at the solve height
        anchor + Vec3::Z * height
    } else {
        // Intersect anchor - dir * t with the plane z = height
        let t = (anchor.z - height) / dir.z;
        anchor - dir * t
    };

    // Final look direction from the unsnapped pitch
    let look_vec = Vec3::new(yaw.cos(), yaw.sin(), pitch_rad.sin()).normalize();

    CameraTransform {
        eye,
        target: eye + look_vec,
        up: Vec3::Z,
    }
}
