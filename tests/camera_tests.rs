// Host-side tests for the camera rig and its eased transitions.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use constants::*;
use glam::{Vec2, Vec3};

fn approx(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-4
}

#[test]
fn ease_out_cubic_endpoints_and_clamp() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-3.0), 0.0);
    assert_eq!(ease_out_cubic(7.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
}

#[test]
fn ease_out_cubic_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn auto_orbit_advances_angle_and_bobs() {
    let mut rig = CameraRig::default();
    rig.step(16.0, 0.016);
    assert!((rig.orbit_angle - ORBIT_STEP_PER_TICK).abs() < 1e-7);
    let expected = rig.orbit_position(0.016);
    assert!(approx(rig.eye, expected));
    assert_eq!(rig.look_at, FOCAL_POINT);
    let horizontal = Vec2::new(rig.eye.x, rig.eye.z).length();
    assert!((horizontal - ORBIT_RADIUS).abs() < 1e-4);
}

#[test]
fn paused_orbit_holds_still() {
    let mut rig = CameraRig::default();
    rig.auto_orbit = false;
    rig.step(16.0, 0.016);
    assert_eq!(rig.orbit_angle, 0.0);
    assert_eq!(rig.eye, INITIAL_EYE);
}

#[test]
fn zoom_starts_at_current_eye_and_lands_exactly() {
    let mut rig = CameraRig::default();
    let start = rig.eye;
    rig.begin_zoom(1000.0);
    rig.step(1000.0, 1.0);
    assert!(approx(rig.eye, start));
    assert_eq!(rig.look_at, ZOOM_FOCAL_POINT);

    rig.step(1000.0 + ZOOM_DURATION_MS, 2.2);
    assert_eq!(rig.eye, ZOOM_TARGET);
    assert_eq!(rig.mode, CameraMode::Docked);
}

#[test]
fn zoom_approaches_target_monotonically() {
    let mut rig = CameraRig::default();
    rig.begin_zoom(0.0);
    let mut prev = rig.eye.distance(ZOOM_TARGET);
    let mut t = 0.0;
    while rig.is_zooming() {
        t += 16.0;
        rig.step(t, (t / 1000.0) as f32);
        let d = rig.eye.distance(ZOOM_TARGET);
        assert!(d <= prev + 1e-5);
        prev = d;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn docked_camera_does_not_move() {
    let mut rig = CameraRig::default();
    rig.begin_zoom(0.0);
    rig.step(ZOOM_DURATION_MS, 1.2);
    rig.step(ZOOM_DURATION_MS + 5000.0, 6.2);
    assert_eq!(rig.eye, ZOOM_TARGET);
}

#[test]
fn return_ends_on_unbobbed_orbit_and_resumes() {
    let mut rig = CameraRig::default();
    rig.orbit_angle = 0.7;
    rig.auto_orbit = false;
    rig.begin_zoom(0.0);
    rig.step(ZOOM_DURATION_MS, 1.2);

    rig.begin_return(3000.0);
    rig.step(3000.0 + RETURN_DURATION_MS * 0.5, 3.7);
    assert!(rig.is_returning());
    assert_eq!(rig.look_at, FOCAL_POINT);

    rig.step(3000.0 + RETURN_DURATION_MS, 4.4);
    assert!(rig.is_orbiting());
    assert!(rig.auto_orbit);
    let expected = Vec3::new(0.7f32.cos() * ORBIT_RADIUS, ORBIT_HEIGHT, 0.7f32.sin() * ORBIT_RADIUS);
    assert!(approx(rig.eye, expected));
}

#[test]
fn retargeting_mid_tween_starts_from_current_eye() {
    let mut rig = CameraRig::default();
    rig.begin_zoom(0.0);
    rig.step(600.0, 0.6);
    let mid = rig.eye;
    rig.begin_return(600.0);
    match rig.mode {
        CameraMode::Returning { from, .. } => assert_eq!(from, mid),
        other => panic!("unexpected mode {:?}", other),
    }
}

#[test]
fn drag_rotates_and_keeps_height() {
    let mut rig = CameraRig::default();
    rig.eye.y = 4.15;
    rig.drag_by(100.0);
    assert!((rig.orbit_angle + 100.0 * DRAG_RADIANS_PER_PX).abs() < 1e-6);
    assert_eq!(rig.eye.y, 4.15);
    let horizontal = Vec2::new(rig.eye.x, rig.eye.z).length();
    assert!((horizontal - ORBIT_RADIUS).abs() < 1e-4);
}

#[test]
fn centre_ray_points_at_target() {
    let cam = CameraRig::default().camera(16.0 / 9.0);
    let (origin, dir) = cam.ray_through_ndc(Vec2::ZERO);
    assert_eq!(origin, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!(dir.dot(expected) > 0.9999);
}
