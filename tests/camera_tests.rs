//! Camera Tests - State Invariants, Input Shaping and Transform Solving
//!
//! Integration tests over the public surface: validated setters, the
//! scripted-move slot, the rotate debounce, and the per-frame solve.

use glam::Vec3;
use rts_camera::{CameraConfig, CameraState, FrameInput, PanKeys, RotateButton, RtsCameraController};

fn controller() -> RtsCameraController {
    RtsCameraController::new(CameraConfig::default())
}

// ============================================================================
// CameraState Invariants
// ============================================================================

#[test]
fn test_look_direction_always_unit_with_zero_z() {
    let mut state = CameraState::default();
    let samples = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-2.0, 3.0, 5.0),
        Vec3::new(0.001, -0.001, 90.0),
        Vec3::new(-7.0, -7.0, -7.0),
    ];
    for v in samples {
        state.set_look_direction(v).unwrap();
        let look = state.look_direction();
        assert_eq!(look.z, 0.0, "look direction must stay in the ground plane");
        assert!((look.length() - 1.0).abs() < 1e-5, "look must be unit length");
    }
}

#[test]
fn test_zoom_never_below_floor() {
    let mut state = CameraState::default();
    for z in [1.0, 0.5, 0.01, 0.0, -1.0, f32::MIN] {
        state.set_zoom(z);
        assert!(state.zoom() >= 0.01, "zoom {z} violated the floor");
    }
}

// ============================================================================
// Scripted Move Slot
// ============================================================================

#[test]
fn test_second_start_discards_first() {
    let mut cam = controller();
    let a = Vec3::new(100.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 100.0, 0.0);

    cam.start_animation(a, 0.0, 10.0);
    cam.start_animation(b, 0.0, 10.0);

    assert_eq!(cam.current_animation().unwrap().end_position(), b);

    // A full advance to the end lands on B, never on A
    cam.update(&FrameInput::default(), 20.0);
    assert!((cam.terrain_position() - b).length() < 1e-4);
    assert!(cam.current_animation().is_none());
}

#[test]
fn test_end_animation_holds_current_anchor() {
    let mut cam = controller();
    cam.start_animation(Vec3::new(10.0, 0.0, 0.0), 0.0, 2.0);

    cam.update(&FrameInput::default(), 1.0);
    let midway = cam.terrain_position();
    assert!(midway.x > 0.0 && midway.x < 10.0);

    cam.end_animation();
    cam.update(&FrameInput::default(), 1.5);
    // Anchor stays where the last advance put it
    assert!((cam.terrain_position() - midway).length() < 1e-5);
}

// ============================================================================
// Input Translation
// ============================================================================

#[test]
fn test_rotate_round_trip_restores_look() {
    let mut cam = controller();
    let before = cam.look_direction();

    let held = |dx: f32| FrameInput {
        mouse_delta: (dx, 0.0),
        rotate_held: true,
        rotate_just_pressed: false,
        ..Default::default()
    };

    cam.update(&held(0.25), 0.0);
    assert!((cam.look_direction() - before).length() > 1e-3);

    cam.update(&held(-0.25), 0.016);
    assert!((cam.look_direction() - before).length() < 1e-5);
}

#[test]
fn test_rotate_debounce_skips_press_frame() {
    let mut cam = controller();
    let mut button = RotateButton::new();
    let pan = PanKeys::new();
    let before = cam.look_direction();

    // Frame 1: button goes down - no rotation yet
    button.set_held(true);
    let input = FrameInput::from_trackers(&mut button, &pan, (0.5, 0.0), 0.0);
    cam.update(&input, 0.0);
    assert_eq!(cam.look_direction(), before);

    // Frame 2: still held - rotation applies
    let input = FrameInput::from_trackers(&mut button, &pan, (0.5, 0.0), 0.0);
    cam.update(&input, 0.016);
    assert!((cam.look_direction() - before).length() > 1e-3);
}

#[test]
fn test_pan_moves_anchor_by_look_times_speed() {
    let cfg = CameraConfig::default();
    let mut cam = RtsCameraController::new(cfg);
    cam.set_zoom(0.5);
    let look = cam.look_direction();

    let input = FrameInput {
        pan_forward: 1.0,
        ..Default::default()
    };
    cam.update(&input, 0.0);

    let expected = look * cfg.pan_speed * 0.5;
    assert!((cam.terrain_position() - expected).length() < 1e-6);
}

#[test]
fn test_opposite_pan_keys_cancel() {
    let mut cam = controller();
    let mut button = RotateButton::new();
    let mut pan = PanKeys::new();
    pan.forward = true;
    pan.backward = true;
    pan.left = true;
    pan.right = true;

    let input = FrameInput::from_trackers(&mut button, &pan, (0.0, 0.0), 0.0);
    cam.update(&input, 0.0);
    assert_eq!(cam.terrain_position(), Vec3::ZERO);
}

#[test]
fn test_wheel_zoom_every_frame_even_while_rotating() {
    let mut cam = controller();
    let input = FrameInput {
        wheel_delta: -1.0, // Wheel down = zoom out
        rotate_held: true,
        rotate_just_pressed: true, // Press frame suppresses rotate, not zoom
        ..Default::default()
    };
    cam.update(&input, 0.0);
    assert!(cam.zoom() > 1.0);
}

// ============================================================================
// Transform Solve
// ============================================================================

#[test]
fn test_default_pitch_and_zoom_hit_configured_height() {
    let mut cam = controller();
    cam.set_pitch(1.0);
    cam.set_zoom(1.0);

    let transform = cam.update(&FrameInput::default(), 0.0);
    assert!((transform.eye.z - cam.default_height()).abs() < 1e-3);

    // At pitch = 1 the position solve uses the full pitch angle: the look
    // ray from the eye passes through the anchor
    let to_anchor = (cam.terrain_position() - transform.eye).normalize();
    let look = (transform.target - transform.eye).normalize();
    assert!((to_anchor - look).length() < 1e-4);
}

#[test]
fn test_dead_zone_pitches_share_eye_but_not_target() {
    let mut a = controller();
    a.set_pitch(0.25);
    let mut b = controller();
    b.set_pitch(0.75);

    let ta = a.solve();
    let tb = b.solve();

    assert!((ta.eye - tb.eye).length() < 1e-4);
    assert!((ta.target - tb.target).length() > 1e-4);
}

#[test]
fn test_animation_does_not_touch_framing_mid_flight() {
    let mut cam = controller();
    cam.set_pitch(0.9);
    cam.set_zoom(0.3);
    let look = cam.look_direction();

    cam.start_animation(Vec3::new(50.0, 50.0, 0.0), 0.0, 4.0);
    cam.update(&FrameInput::default(), 2.0);

    assert_eq!(cam.pitch(), 0.9);
    assert_eq!(cam.zoom(), 0.3);
    assert_eq!(cam.look_direction(), look);
}

#[test]
fn test_view_matrix_faces_anchor() {
    let mut cam = controller();
    cam.set_terrain_position(Vec3::new(30.0, -10.0, 0.0));
    let transform = cam.solve();
    let view = transform.view_matrix();

    // The anchor must project in front of the camera (negative view-space Z)
    let anchor_in_view = view.transform_point3(cam.terrain_position());
    assert!(anchor_in_view.z < 0.0);
}

#[test]
fn test_config_from_json_drives_controller() {
    let cfg = CameraConfig::from_json_str(r#"{"max_height": 200.0, "pitch_degrees": 45.0}"#)
        .expect("valid config json");
    let cam = RtsCameraController::new(cfg);

    assert_eq!(cam.default_height(), 200.0);
    assert!((cam.pitch_angle() - 45.0_f32.to_radians()).abs() < 1e-6);

    let transform = cam.solve();
    assert!((transform.eye.z - 200.0).abs() < 1e-2);
}
