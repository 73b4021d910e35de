use crate::constants::*;
use crate::core::room::{seconds, Room};
use glam::{Quat, Vec3};

impl Room {
    /// Advance the scene to `now_ms` (milliseconds since start): fire due
    /// timers, then move the camera, balloons, flames, particles and ambient
    /// decorations by one tick.
    pub fn advance(&mut self, now_ms: f64) {
        for kind in self.timers.take_due(now_ms) {
            self.on_timer(kind, now_ms);
        }

        let elapsed = seconds(now_ms);
        self.rig.step(now_ms, elapsed);

        for balloon in &self.balloons {
            balloon.step(&mut self.scene, elapsed, &mut self.rng);
        }
        for flame in &self.flames {
            flame.step(&mut self.scene);
        }
        self.sparkles.step(&mut self.scene, elapsed);
        self.burst.step(&mut self.scene, elapsed);

        self.step_ambient(elapsed);
    }

    fn step_ambient(&mut self, elapsed: f32) {
        let stars = self.scene.node_mut(self.handles.starfield);
        stars.rotation = Quat::from_rotation_y(STAR_ROTATION_PER_TICK) * stars.rotation;

        if let Some(light) = self.scene.lights.get_mut(self.handles.moving_light) {
            light.position = moving_light_position(elapsed);
        }
    }
}

/// Where the circling light sits `elapsed_s` seconds after start.
pub fn moving_light_position(elapsed_s: f32) -> Vec3 {
    let a = elapsed_s * LIGHT_ORBIT_RATE;
    Vec3::new(
        a.cos() * LIGHT_ORBIT_RADIUS,
        LIGHT_HEIGHT + (elapsed_s * LIGHT_BOB_RATE).sin() * LIGHT_BOB_AMPLITUDE,
        a.sin() * LIGHT_ORBIT_RADIUS,
    )
}
