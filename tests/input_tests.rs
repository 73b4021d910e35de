// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

fn rect() -> SurfaceRect {
    SurfaceRect {
        left: 10.0,
        top: 20.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn surface_ndc_maps_corners_and_centre() {
    let r = rect();
    assert_eq!(surface_ndc(10.0, 20.0, r), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(surface_ndc(210.0, 120.0, r), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(surface_ndc(110.0, 70.0, r), Some(Vec2::new(0.0, 0.0)));
}

#[test]
fn surface_ndc_rejects_empty_surface() {
    let r = SurfaceRect {
        width: 0.0,
        ..rect()
    };
    assert!(surface_ndc(5.0, 5.0, r).is_none());
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn ray_sphere_from_inside_hits_far_side() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_unnormalized_direction_scales_t() {
    // Doubling the direction halves the parameter at the same hit point.
    let t = ray_sphere(Vec3::ZERO, Vec3::Z * 2.0, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 1.5).abs() < 1e-5);
}

#[test]
fn unit_box_slab_test() {
    let t = ray_unit_box(Vec3::new(0.0, 0.0, 3.0), -Vec3::Z).unwrap();
    assert!((t - 2.5).abs() < 1e-5);
    assert!(ray_unit_box(Vec3::new(0.8, 0.0, 3.0), -Vec3::Z).is_none());
    // axis-parallel ray outside the slab
    assert!(ray_unit_box(Vec3::new(0.0, 2.0, 3.0), -Vec3::Z).is_none());
}

#[test]
fn unit_cylinder_side_and_cap() {
    let side = ray_unit_cylinder(Vec3::new(3.0, 0.0, 0.0), -Vec3::X).unwrap();
    assert!((side - 2.5).abs() < 1e-5);
    let cap = ray_unit_cylinder(Vec3::new(0.1, 4.0, 0.1), -Vec3::Y).unwrap();
    assert!((cap - 3.5).abs() < 1e-5);
    assert!(ray_unit_cylinder(Vec3::new(0.0, 2.0, 3.0), -Vec3::Z).is_none());
}

#[test]
fn unit_plane_bounds() {
    assert!(ray_unit_plane(Vec3::new(0.2, 0.2, 1.0), -Vec3::Z).is_some());
    assert!(ray_unit_plane(Vec3::new(0.7, 0.0, 1.0), -Vec3::Z).is_none());
    assert!(ray_unit_plane(Vec3::new(0.0, 0.0, 1.0), Vec3::X).is_none());
}

#[test]
fn small_movement_is_a_click() {
    let mut d = DragTracker::default();
    d.press(100.0);
    assert_eq!(d.move_to(102.0), Some(2.0));
    assert_eq!(d.move_to(103.0), Some(1.0));
    assert!(d.release());
    assert!(!d.is_drag());
    assert!(!d.take_click_suppression());
}

#[test]
fn drag_suppresses_exactly_one_click() {
    let mut d = DragTracker::default();
    d.press(100.0);
    d.move_to(96.5);
    assert!(d.is_drag());
    assert!(d.release());
    assert!(d.take_click_suppression());
    assert!(!d.take_click_suppression());
}

#[test]
fn threshold_uses_distance_from_press_point() {
    let mut d = DragTracker::default();
    d.press(0.0);
    d.move_to(2.0);
    d.move_to(4.0);
    assert!(d.is_drag());
}

#[test]
fn moves_without_press_are_ignored() {
    let mut d = DragTracker::default();
    assert_eq!(d.move_to(50.0), None);
    assert!(!d.release());
}

#[test]
fn new_press_clears_stale_suppression() {
    let mut d = DragTracker::default();
    d.press(0.0);
    d.move_to(10.0);
    d.release();
    d.press(0.0);
    assert!(!d.take_click_suppression());
}
