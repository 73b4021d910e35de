// Scene timing and motion tuning constants.
//
// Durations are in milliseconds unless the name says otherwise. Per-tick
// values are applied once per display refresh.
use glam::Vec3;

// Orbit camera
pub const ORBIT_RADIUS: f32 = 8.0;
pub const ORBIT_HEIGHT: f32 = 4.0;
pub const ORBIT_STEP_PER_TICK: f32 = 0.12 * 0.01;
pub const ORBIT_BOB_AMPLITUDE: f32 = 0.2;
pub const ORBIT_BOB_RATE: f32 = 0.5; // rad/s
pub const FOCAL_POINT: Vec3 = Vec3::new(0.0, 1.5, 0.0);
pub const INITIAL_EYE: Vec3 = Vec3::new(8.0, 4.0, 8.0);

// Zoom to gift / return to orbit
pub const ZOOM_TARGET: Vec3 = Vec3::new(3.0, 2.2, 3.0);
pub const ZOOM_FOCAL_POINT: Vec3 = Vec3::new(0.4, 1.2, 1.0);
pub const ZOOM_DURATION_MS: f64 = 1200.0;
pub const RETURN_DURATION_MS: f64 = 1400.0;

// Projection
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 120.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Deferred actions
pub const MESSAGE_OPEN_DELAY_MS: f64 = 1200.0;
pub const MESSAGE_COLLAPSE_DELAY_MS: f64 = 350.0;
pub const WISH_VISIBLE_MS: f64 = 2200.0;
pub const BALLOON_RESET_DELAY_MS: f64 = 4500.0;
pub const ORBIT_RESUME_DELAY_MS: f64 = 350.0;
pub const LOADING_FADE_DELAY_MS: f64 = 1500.0;
pub const LOADING_HIDE_DELAY_MS: f64 = 600.0;

// Pointer drag
pub const DRAG_THRESHOLD_PX: f32 = 3.0;
pub const DRAG_RADIANS_PER_PX: f32 = 0.002;

// Candles
pub const CANDLE_COUNT: usize = 5;
pub const FLAME_SMOOTHING: f32 = 0.2;
pub const FLAME_HIDE_THRESHOLD: f32 = 0.02;

// Cake sparkles
pub const SPARKLE_COUNT: usize = 60;
pub const SPARKLE_LIFETIME_SEC: f32 = 1.6;
pub const SPARKLE_FADE_PER_TICK: f32 = 0.02;

// Gift burst
pub const BURST_COUNT: usize = 180;
pub const BURST_LIFETIME_SEC: f32 = 2.2;
pub const BURST_TICK_FACTOR: f32 = 0.02;

// Balloons
pub const BALLOON_COUNT: usize = 9;
pub const BALLOON_BOB_AMPLITUDE: f32 = 0.35;
pub const BALLOON_RISE_BASE: f32 = 0.04;
pub const BALLOON_RISE_SPEED_FACTOR: f32 = 0.03;
pub const BALLOON_DRIFT: f32 = 0.01;
pub const BALLOON_FADE_PER_TICK: f32 = 0.01;
pub const BALLOON_RELEASE_SPEED_MIN: f32 = 0.6;
pub const BALLOON_RELEASE_SPEED_SPAN: f32 = 0.6;

// Ambient motion
pub const STAR_COUNT: usize = 400;
pub const STAR_ROTATION_PER_TICK: f32 = 0.0004;
pub const LIGHT_ORBIT_RATE: f32 = 0.7; // rad/s
pub const LIGHT_ORBIT_RADIUS: f32 = 2.0;
pub const LIGHT_HEIGHT: f32 = 3.5;
pub const LIGHT_BOB_RATE: f32 = 0.5; // rad/s
pub const LIGHT_BOB_AMPLITUDE: f32 = 0.5;
