//! Camera Controller Module
//!
//! Ties the camera pieces together: owns the mutable state, the single
//! scripted-move slot and the player-input toggle, and runs the per-frame
//! pipeline (input translation, move advance, transform solve). Intended for
//! exclusive ownership by one driving loop on one thread; nothing in here
//! blocks or spawns.

use glam::Vec3;

use crate::config::CameraConfig;
use crate::error::CameraError;
use crate::input::FrameInput;

use super::animation::MoveAnimation;
use super::solver::{CameraTransform, SolverConstants, solve_transform};
use super::state::CameraState;
use super::translate::InputTranslator;

/// Terrain-anchored RTS camera controller.
///
/// Call [`update`] once per simulation/render tick. The returned transform
/// is what the renderer should assume for the frame.
///
/// [`update`]: RtsCameraController::update
#[derive(Debug, Clone)]
pub struct RtsCameraController {
    state: CameraState,
    constants: SolverConstants,
    translator: InputTranslator,
    animation: Option<MoveAnimation>,
    player_input_enabled: bool,
}

impl Default for RtsCameraController {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl RtsCameraController {
    /// Create a controller from startup configuration.
    ///
    /// The derived constants (full pitch angle, default height, initial look
    /// direction) are computed here once; the config is not retained.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            state: CameraState::with_yaw(config.yaw_radians),
            constants: SolverConstants {
                pitch_angle: config.pitch_angle(),
                default_height: config.max_height,
            },
            translator: InputTranslator {
                rotation_speed: config.rotation_speed,
                zoom_speed: config.zoom_speed,
                pan_speed: config.pan_speed,
            },
            animation: None,
            player_input_enabled: true,
        }
    }

    /// Run one frame: apply input (if enabled), advance any scripted move,
    /// and solve the view transform.
    ///
    /// `now` is the caller's clock in seconds, on the same time base as the
    /// start times passed to [`start_animation`].
    ///
    /// [`start_animation`]: RtsCameraController::start_animation
    pub fn update(&mut self, input: &FrameInput, now: f32) -> CameraTransform {
        if self.player_input_enabled {
            self.translator.apply(&mut self.state, input);
        }

        if let Some(animation) = &mut self.animation {
            animation.advance(&mut self.state, now);
            if animation.is_finished() {
                log::debug!("camera move finished at t={now}");
                self.animation = None;
            }
        }

        solve_transform(&self.constants, &self.state)
    }

    /// Solve the view transform for the current state without advancing
    /// anything.
    pub fn solve(&self) -> CameraTransform {
        solve_transform(&self.constants, &self.state)
    }

    // === Scripted moves ===

    /// Start a scripted move of the terrain anchor toward `end_position`.
    ///
    /// Any running move is cancelled and discarded outright - there is no
    /// queue and no completion notification for the replaced move.
    pub fn start_animation(&mut self, end_position: Vec3, now: f32, duration: f32) {
        if self.animation.is_some() {
            log::debug!("replacing running camera move");
        }
        log::debug!(
            "camera move to ({}, {}, {}) over {duration}s",
            end_position.x,
            end_position.y,
            end_position.z
        );
        self.animation = Some(MoveAnimation::start(&self.state, end_position, now, duration));
    }

    /// End the current scripted move immediately, leaving the anchor
    /// wherever the last advance put it. No-op when no move is running.
    pub fn end_animation(&mut self) {
        if let Some(animation) = &mut self.animation {
            animation.end();
            log::debug!("camera move ended early");
            self.animation = None;
        }
    }

    /// The currently running scripted move, if any.
    pub fn current_animation(&self) -> Option<&MoveAnimation> {
        self.animation.as_ref()
    }

    // === Player input toggle ===

    /// Suspend or resume manual control, e.g. during scripted sequences.
    pub fn set_player_input_enabled(&mut self, enabled: bool) {
        if enabled != self.player_input_enabled {
            log::debug!("player camera input {}", if enabled { "enabled" } else { "disabled" });
        }
        self.player_input_enabled = enabled;
    }

    /// Whether manual control is currently applied during `update`.
    pub fn is_player_input_enabled(&self) -> bool {
        self.player_input_enabled
    }

    // === State access ===

    /// Read-only view of the camera state.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Normalized pitch factor.
    pub fn pitch(&self) -> f32 {
        self.state.pitch()
    }

    /// Set the normalized pitch factor (stored verbatim).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.state.set_pitch(pitch);
    }

    /// Normalized zoom factor.
    pub fn zoom(&self) -> f32 {
        self.state.zoom()
    }

    /// Set the normalized zoom factor (floor-clamped).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.state.set_zoom(zoom);
    }

    /// The world point the camera is framed around.
    pub fn terrain_position(&self) -> Vec3 {
        self.state.terrain_anchor()
    }

    /// Move the terrain anchor directly.
    pub fn set_terrain_position(&mut self, position: Vec3) {
        self.state.set_terrain_anchor(position);
    }

    /// The current ground-plane look direction.
    pub fn look_direction(&self) -> Vec3 {
        self.state.look_direction()
    }

    /// Set the look direction from an arbitrary vector; fails if the
    /// ground-plane projection is degenerate.
    pub fn set_look_direction(&mut self, direction: Vec3) -> Result<(), CameraError> {
        self.state.set_look_direction(direction)
    }

    /// Full pitch angle in radians, derived at construction.
    pub fn pitch_angle(&self) -> f32 {
        self.constants.pitch_angle
    }

    /// Camera height above terrain at zoom = 1, derived at construction.
    pub fn default_height(&self) -> f32 {
        self.constants.default_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_derived_from_config() {
        let controller = RtsCameraController::new(CameraConfig {
            max_height: 80.0,
            pitch_degrees: 30.0,
            yaw_radians: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        });

        assert_eq!(controller.default_height(), 80.0);
        assert!((controller.pitch_angle() - 60.0_f32.to_radians()).abs() < 1e-6);
        let look = controller.look_direction();
        assert!(look.x.abs() < 1e-6);
        assert!((look.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_suspended_during_scripted_sequences() {
        let mut controller = RtsCameraController::default();
        controller.set_player_input_enabled(false);

        let input = FrameInput {
            pan_forward: 1.0,
            wheel_delta: 1.0,
            ..Default::default()
        };
        controller.update(&input, 0.0);

        assert_eq!(controller.terrain_position(), Vec3::ZERO);
        assert_eq!(controller.zoom(), 1.0);

        controller.set_player_input_enabled(true);
        controller.update(&input, 0.016);
        assert!(controller.terrain_position().length() > 0.0);
    }

    #[test]
    fn test_start_replaces_running_animation() {
        let mut controller = RtsCameraController::default();
        let a = Vec3::new(10.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 10.0, 0.0);

        controller.start_animation(a, 0.0, 10.0);
        controller.start_animation(b, 0.0, 10.0);

        let current = controller.current_animation().unwrap();
        assert_eq!(current.end_position(), b);

        // Advancing moves toward B, not A
        controller.update(&FrameInput::default(), 5.0);
        let anchor = controller.terrain_position();
        assert!(anchor.y > 0.0);
        assert!(anchor.x.abs() < 1e-5);
    }

    #[test]
    fn test_finished_animation_detaches() {
        let mut controller = RtsCameraController::default();
        let end = Vec3::new(5.0, 5.0, 0.0);
        controller.start_animation(end, 0.0, 1.0);

        controller.update(&FrameInput::default(), 2.0);
        assert!(controller.current_animation().is_none());
        assert!((controller.terrain_position() - end).length() < 1e-5);
    }

    #[test]
    fn test_end_animation_is_noop_when_absent() {
        let mut controller = RtsCameraController::default();
        controller.end_animation();
        assert!(controller.current_animation().is_none());

        controller.start_animation(Vec3::X, 0.0, 1.0);
        controller.end_animation();
        assert!(controller.current_animation().is_none());
        // A second end after detach is still fine
        controller.end_animation();
    }

    #[test]
    fn test_animation_overrides_anchor_not_framing() {
        let mut controller = RtsCameraController::default();
        controller.set_zoom(0.5);
        controller.set_pitch(0.7);
        controller.start_animation(Vec3::new(10.0, 0.0, 0.0), 0.0, 2.0);

        controller.update(&FrameInput::default(), 1.0);
        // The move drives the anchor only
        assert_eq!(controller.zoom(), 0.5);
        assert_eq!(controller.pitch(), 0.7);
        assert!(controller.terrain_position().x > 0.0);
    }

    #[test]
    fn test_update_returns_solved_transform() {
        let mut controller = RtsCameraController::default();
        let transform = controller.update(&FrameInput::default(), 0.0);
        assert!((transform.eye.z - controller.default_height()).abs() < 1e-3);
        assert_eq!(transform.up, Vec3::Z);
    }
}
