// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    for ms in [
        ZOOM_DURATION_MS,
        RETURN_DURATION_MS,
        MESSAGE_OPEN_DELAY_MS,
        MESSAGE_COLLAPSE_DELAY_MS,
        WISH_VISIBLE_MS,
        BALLOON_RESET_DELAY_MS,
        ORBIT_RESUME_DELAY_MS,
        LOADING_FADE_DELAY_MS,
        LOADING_HIDE_DELAY_MS,
    ] {
        assert!(ms > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn message_opens_once_zoom_has_landed() {
    assert!(MESSAGE_OPEN_DELAY_MS >= ZOOM_DURATION_MS);
}

#[test]
fn initial_eye_starts_at_orbit_height() {
    let r = (INITIAL_EYE.x * INITIAL_EYE.x + INITIAL_EYE.z * INITIAL_EYE.z).sqrt();
    // The first orbit tick pulls the camera in onto the circle.
    assert!(r >= ORBIT_RADIUS);
    assert_eq!(INITIAL_EYE.y, ORBIT_HEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_planes_are_ordered() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fades_complete_within_lifetimes() {
    assert!(FLAME_SMOOTHING > 0.0 && FLAME_SMOOTHING < 1.0);
    assert!(SPARKLE_FADE_PER_TICK > 0.0);
    assert!(BALLOON_FADE_PER_TICK > 0.0);
    assert!(BALLOON_RELEASE_SPEED_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pool_sizes_match_scene() {
    assert_eq!(CANDLE_COUNT, 5);
    assert_eq!(BALLOON_COUNT, 9);
    assert_eq!(SPARKLE_COUNT, 60);
    assert_eq!(BURST_COUNT, 180);
}
