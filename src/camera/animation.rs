//! Scripted Camera Move Module
//!
//! A single bounded transition that carries the terrain anchor from one
//! point to another over a fixed duration. At most one move is logically
//! active at a time; starting a new one discards the old one outright, with
//! no queuing and no completion notification.

use glam::Vec3;

use super::state::CameraState;

/// One scripted anchor transition.
///
/// The look direction, pitch and zoom at start time are frozen into the
/// animation so a caller can restore the pre-move framing afterwards; they
/// are not reapplied to the state while the move runs. The move drives the
/// anchor only - the viewing angle stays whatever the state says.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveAnimation {
    start_position: Vec3,
    end_position: Vec3,
    look_direction: Vec3,
    pitch: f32,
    zoom: f32,
    start_time: f32,
    duration: f32,
    finished: bool,
}

impl MoveAnimation {
    /// Start a move toward `end_position`, freezing the current framing.
    ///
    /// `start_time` and `duration` are in seconds on the caller's clock.
    pub fn start(state: &CameraState, end_position: Vec3, start_time: f32, duration: f32) -> Self {
        Self {
            start_position: state.terrain_anchor(),
            end_position,
            look_direction: state.look_direction(),
            pitch: state.pitch(),
            zoom: state.zoom(),
            start_time,
            duration,
            finished: false,
        }
    }

    /// Advance the move to time `now`, writing the interpolated anchor into
    /// `state`. Marks the move finished once the duration has elapsed.
    ///
    /// Does nothing when already finished.
    pub fn advance(&mut self, state: &mut CameraState, now: f32) {
        if self.finished {
            return;
        }

        // Zero or negative duration completes immediately
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
        };

        state.set_terrain_anchor(self.start_position.lerp(self.end_position, t));

        if t >= 1.0 {
            self.finished = true;
        }
    }

    /// Mark the move finished regardless of elapsed time. Idempotent.
    pub fn end(&mut self) {
        self.finished = true;
    }

    /// Whether the move has run to completion or been ended.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Anchor the move started from.
    #[inline]
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    /// Anchor the move ends at.
    #[inline]
    pub fn end_position(&self) -> Vec3 {
        self.end_position
    }

    /// Look direction frozen at start time.
    #[inline]
    pub fn frozen_look_direction(&self) -> Vec3 {
        self.look_direction
    }

    /// Pitch factor frozen at start time.
    #[inline]
    pub fn frozen_pitch(&self) -> f32 {
        self.pitch
    }

    /// Zoom factor frozen at start time.
    #[inline]
    pub fn frozen_zoom(&self) -> f32 {
        self.zoom
    }
}
