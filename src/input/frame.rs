//! Per-Frame Input Snapshot
//!
//! Contains the trackers that turn raw key/button transitions into the
//! normalized per-frame values the camera consumes: two signed pan axes,
//! a wheel delta, and the rotate button with its press-edge flag.

/// Digital directional key states for panning.
///
/// Each opposite pair collapses into one signed axis; holding both keys of a
/// pair cancels to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PanKeys {
    /// Create a new pan key state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward axis: +1 forward, -1 backward, 0 when neither or both.
    pub fn forward_axis(&self) -> f32 {
        (if self.forward { 1.0 } else { 0.0 }) - (if self.backward { 1.0 } else { 0.0 })
    }

    /// Right axis: +1 right, -1 left, 0 when neither or both.
    pub fn right_axis(&self) -> f32 {
        (if self.right { 1.0 } else { 0.0 }) - (if self.left { 1.0 } else { 0.0 })
    }

    /// Reset all keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-frame tracker for the primary rotate button.
///
/// The host event loop reports raw down/up transitions via [`set_held`];
/// once per frame [`frame_state`] returns the current held flag together
/// with whether this is the first frame the button is down. The camera uses
/// that edge to suppress rotation on the press frame itself.
///
/// [`set_held`]: RotateButton::set_held
/// [`frame_state`]: RotateButton::frame_state
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateButton {
    held: bool,
    held_last_frame: bool,
}

impl RotateButton {
    /// Create a new tracker with the button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the raw button state from the event loop.
    #[inline]
    pub fn set_held(&mut self, pressed: bool) {
        self.held = pressed;
    }

    /// Whether the button is currently down.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Consume one frame: returns `(held, just_pressed)` and advances the
    /// previous-frame record. Call exactly once per frame.
    pub fn frame_state(&mut self) -> (bool, bool) {
        let just_pressed = self.held && !self.held_last_frame;
        self.held_last_frame = self.held;
        (self.held, just_pressed)
    }

    /// Reset to released with no press edge pending.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One frame's normalized input, as consumed by the camera controller.
///
/// All values are already shaped by the host: mouse deltas are normalized
/// per-frame axis movements, the wheel delta is in notches, and the pan axes
/// are signed [-1, 1] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Mouse movement this frame (x, y). Only x drives rotation.
    pub mouse_delta: (f32, f32),
    /// Wheel/zoom axis delta this frame. Positive = wheel up.
    pub wheel_delta: f32,
    /// Whether the primary rotate button is down this frame.
    pub rotate_held: bool,
    /// Whether the rotate button went down on this very frame.
    pub rotate_just_pressed: bool,
    /// Signed forward/backward pan axis.
    pub pan_forward: f32,
    /// Signed right/left pan axis.
    pub pan_right: f32,
}

impl FrameInput {
    /// Build a frame snapshot from the trackers.
    ///
    /// Advances the rotate button's per-frame edge state, so call this once
    /// per frame.
    pub fn from_trackers(
        rotate: &mut RotateButton,
        pan: &PanKeys,
        mouse_delta: (f32, f32),
        wheel_delta: f32,
    ) -> Self {
        let (rotate_held, rotate_just_pressed) = rotate.frame_state();
        Self {
            mouse_delta,
            wheel_delta,
            rotate_held,
            rotate_just_pressed,
            pan_forward: pan.forward_axis(),
            pan_right: pan.right_axis(),
        }
    }
}
