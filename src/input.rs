use crate::constants::DRAG_THRESHOLD_PX;
use glam::{Vec2, Vec3};

/// Client-space rectangle of the render surface (CSS pixels).
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space pointer position to normalized device coordinates.
///
/// x grows to the right and y grows upward, both in [-1, 1] across the surface.
#[inline]
pub fn surface_ndc(client_x: f32, client_y: f32, rect: SurfaceRect) -> Option<Vec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = ((client_x - rect.left) / rect.width) * 2.0 - 1.0;
    let y = -((client_y - rect.top) / rect.height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

// ---------------- Ray tests against unit primitives ----------------
// All primitives are centred on the origin with unit extent:
// box [-0.5, 0.5]^3, sphere radius 0.5, cylinder radius 0.5 along Y with
// height 1, plane [-0.5, 0.5]^2 at z = 0. The ray direction need not be
// normalized, so `t` stays valid after an affine transform to local space.

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 || a <= 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = (-b - sq) / a;
    let t1 = (-b + sq) / a;
    if t0 >= 0.0 {
        Some(t0)
    } else {
        (t1 >= 0.0).then_some(t1)
    }
}

#[inline]
pub fn ray_unit_sphere(ro: Vec3, rd: Vec3) -> Option<f32> {
    ray_sphere(ro, rd, Vec3::ZERO, 0.5)
}

/// Slab test against the unit box.
pub fn ray_unit_box(ro: Vec3, rd: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ro[axis];
        let d = rd[axis];
        if d.abs() < 1e-8 {
            if !(-0.5..=0.5).contains(&o) {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-0.5 - o) * inv;
        let mut t1 = (0.5 - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Capped cylinder of radius 0.5 spanning y in [-0.5, 0.5].
pub fn ray_unit_cylinder(ro: Vec3, rd: Vec3) -> Option<f32> {
    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    // side
    let a = rd.x * rd.x + rd.z * rd.z;
    if a > 1e-12 {
        let b = ro.x * rd.x + ro.z * rd.z;
        let c = ro.x * ro.x + ro.z * ro.z - 0.25;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            for t in [(-b - sq) / a, (-b + sq) / a] {
                let y = ro.y + rd.y * t;
                if (-0.5..=0.5).contains(&y) {
                    consider(t);
                }
            }
        }
    }

    // caps
    if rd.y.abs() > 1e-8 {
        for cap_y in [-0.5_f32, 0.5] {
            let t = (cap_y - ro.y) / rd.y;
            let x = ro.x + rd.x * t;
            let z = ro.z + rd.z * t;
            if x * x + z * z <= 0.25 {
                consider(t);
            }
        }
    }
    best
}

pub fn ray_unit_plane(ro: Vec3, rd: Vec3) -> Option<f32> {
    if rd.z.abs() < 1e-8 {
        return None;
    }
    let t = -ro.z / rd.z;
    if t < 0.0 {
        return None;
    }
    let p = ro + rd * t;
    ((-0.5..=0.5).contains(&p.x) && (-0.5..=0.5).contains(&p.y)).then_some(t)
}

// ---------------- Drag vs click ----------------

/// Tracks a press-move-release gesture on fine-pointer devices.
///
/// Once the pointer strays more than `DRAG_THRESHOLD_PX` from the press point
/// the gesture is a drag, and the click the browser synthesizes afterwards is
/// suppressed exactly once.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragTracker {
    pub active: bool,
    press_x: f32,
    last_x: f32,
    suppress_click: bool,
}

impl DragTracker {
    pub fn press(&mut self, x: f32) {
        self.active = true;
        self.press_x = x;
        self.last_x = x;
        self.suppress_click = false;
    }

    /// Horizontal delta since the previous move, or `None` when not pressed.
    pub fn move_to(&mut self, x: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        if (x - self.press_x).abs() > DRAG_THRESHOLD_PX {
            self.suppress_click = true;
        }
        Some(dx)
    }

    /// Ends the gesture. Returns whether a gesture was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_drag(&self) -> bool {
        self.suppress_click
    }

    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::replace(&mut self.suppress_click, false)
    }
}
