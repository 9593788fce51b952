//! Input Translation Module
//!
//! Converts one frame's normalized input into camera state mutations:
//! rotate (yaw around the vertical axis), zoom (wheel), and pan (anchor
//! movement in the ground plane). Pure shaping - no windowing types here.

use glam::Vec3;

use crate::input::FrameInput;

use super::state::CameraState;

/// Per-frame input shaping with configured gains.
#[derive(Debug, Clone, Copy)]
pub struct InputTranslator {
    /// Yaw radians per unit of horizontal mouse delta.
    pub rotation_speed: f32,
    /// Zoom factor change per wheel notch.
    pub zoom_speed: f32,
    /// Anchor movement per pan axis unit, before zoom scaling.
    pub pan_speed: f32,
}

impl InputTranslator {
    /// Apply one frame of input to the state.
    ///
    /// Rotation is suppressed on the very frame the rotate button goes down;
    /// it starts on the next frame the button is still held. Zoom applies
    /// every frame. Pan speed scales with the current zoom so panning covers
    /// more ground when zoomed out.
    pub fn apply(&self, state: &mut CameraState, input: &FrameInput) {
        if input.rotate_held && !input.rotate_just_pressed {
            self.rotate(state, input.mouse_delta.0);
        }

        self.zoom(state, input.wheel_delta);
        self.pan(state, input.pan_forward, input.pan_right);
    }

    /// Rotate the look direction by the horizontal mouse delta.
    fn rotate(&self, state: &mut CameraState, delta_x: f32) {
        let look = state.look_direction();
        let mut yaw = look.y.atan2(look.x);
        yaw -= delta_x * self.rotation_speed;

        // (cos, sin, 0) is unit with zero Z by construction, so the direct
        // store cannot violate the look-direction invariant
        let rotated = Vec3::new(yaw.cos(), yaw.sin(), 0.0);
        // Unreachable: cos/sin of a finite yaw never project to zero
        let _ = state.set_look_direction(rotated);
    }

    /// Adjust zoom from the wheel delta, sign-inverted so wheel-up zooms in.
    fn zoom(&self, state: &mut CameraState, wheel_delta: f32) {
        state.set_zoom(state.zoom() + (-wheel_delta) * self.zoom_speed);
    }

    /// Move the anchor in the ground plane along the look/right axes.
    fn pan(&self, state: &mut CameraState, forward: f32, right: f32) {
        if forward == 0.0 && right == 0.0 {
            return;
        }

        let speed = self.pan_speed * state.zoom();
        let look = state.look_direction();
        // Local right axis of the look rotation under the Z-up convention
        let right_dir = look.cross(Vec3::Z);

        let anchor = state.terrain_anchor() + look * forward * speed + right_dir * right * speed;
        state.set_terrain_anchor(anchor);
    }
}
