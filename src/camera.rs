use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Compute a world-space ray through a point in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`; the direction is normalized.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }
}

/// Cubic ease-out: fast start, slow finish. `t` is clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraMode {
    Orbiting,
    ZoomingIn { start_ms: f64, from: Vec3 },
    /// Parked at the zoom target while the message overlay is up.
    Docked,
    Returning { start_ms: f64, from: Vec3, to: Vec3 },
}

/// Orbit camera with eased transitions to and from the gift viewpoint.
///
/// Exactly one `CameraMode` is active at a time. A new transition overwrites
/// the tween state of the previous one.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub orbit_angle: f32,
    /// Cleared while the viewer drags the orbit by hand.
    pub auto_orbit: bool,
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Orbiting,
            orbit_angle: 0.0,
            auto_orbit: true,
            eye: INITIAL_EYE,
            look_at: FOCAL_POINT,
        }
    }
}

impl CameraRig {
    pub fn is_orbiting(&self) -> bool {
        matches!(self.mode, CameraMode::Orbiting)
    }

    pub fn is_zooming(&self) -> bool {
        matches!(self.mode, CameraMode::ZoomingIn { .. })
    }

    pub fn is_returning(&self) -> bool {
        matches!(self.mode, CameraMode::Returning { .. })
    }

    /// Point on the orbit circle at the current angle, bobbing with `elapsed_s`.
    pub fn orbit_position(&self, elapsed_s: f32) -> Vec3 {
        let bob = (elapsed_s * ORBIT_BOB_RATE).sin() * ORBIT_BOB_AMPLITUDE;
        Vec3::new(
            self.orbit_angle.cos() * ORBIT_RADIUS,
            ORBIT_HEIGHT + bob,
            self.orbit_angle.sin() * ORBIT_RADIUS,
        )
    }

    pub fn begin_zoom(&mut self, now_ms: f64) {
        self.mode = CameraMode::ZoomingIn {
            start_ms: now_ms,
            from: self.eye,
        };
    }

    /// Ease from wherever the camera is now back to the un-bobbed orbit point.
    pub fn begin_return(&mut self, now_ms: f64) {
        let to = Vec3::new(
            self.orbit_angle.cos() * ORBIT_RADIUS,
            ORBIT_HEIGHT,
            self.orbit_angle.sin() * ORBIT_RADIUS,
        );
        self.mode = CameraMode::Returning {
            start_ms: now_ms,
            from: self.eye,
            to,
        };
    }

    /// Rotate the orbit by a horizontal pointer delta, keeping the current height.
    pub fn drag_by(&mut self, dx_px: f32) {
        self.orbit_angle -= dx_px * DRAG_RADIANS_PER_PX;
        self.eye = Vec3::new(
            self.orbit_angle.cos() * ORBIT_RADIUS,
            self.eye.y,
            self.orbit_angle.sin() * ORBIT_RADIUS,
        );
        self.look_at = FOCAL_POINT;
    }

    pub fn step(&mut self, now_ms: f64, elapsed_s: f32) {
        match self.mode {
            CameraMode::Orbiting => {
                if self.auto_orbit {
                    self.orbit_angle += ORBIT_STEP_PER_TICK;
                    self.eye = self.orbit_position(elapsed_s);
                    self.look_at = FOCAL_POINT;
                }
            }
            CameraMode::ZoomingIn { start_ms, from } => {
                let t = tween_progress(now_ms, start_ms, ZOOM_DURATION_MS);
                self.look_at = ZOOM_FOCAL_POINT;
                if t >= 1.0 {
                    self.eye = ZOOM_TARGET;
                    self.mode = CameraMode::Docked;
                } else {
                    self.eye = from.lerp(ZOOM_TARGET, ease_out_cubic(t));
                }
            }
            CameraMode::Docked => {}
            CameraMode::Returning { start_ms, from, to } => {
                let t = tween_progress(now_ms, start_ms, RETURN_DURATION_MS);
                self.look_at = FOCAL_POINT;
                if t >= 1.0 {
                    self.eye = to;
                    self.mode = CameraMode::Orbiting;
                    self.auto_orbit = true;
                } else {
                    self.eye = from.lerp(to, ease_out_cubic(t));
                }
            }
        }
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: self.look_at,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

#[inline]
fn tween_progress(now_ms: f64, start_ms: f64, duration_ms: f64) -> f32 {
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0) as f32
}
