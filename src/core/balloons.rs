use crate::constants::*;
use crate::core::scene::{NodeId, Scene};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// A floating balloon. Recycled in place after a release instead of destroyed.
#[derive(Clone, Copy, Debug)]
pub struct Balloon {
    pub node: NodeId,
    pub base_y: f32,
    pub float_speed: f32,
    pub offset: f32,
    pub released: bool,
    pub release_speed: f32,
}

impl Balloon {
    pub fn new<R: Rng>(node: NodeId, scene: &mut Scene, rng: &mut R) -> Self {
        let mut balloon = Self {
            node,
            base_y: 0.0,
            float_speed: 0.0,
            offset: 0.0,
            released: false,
            release_speed: 0.0,
        };
        balloon.reset(scene, rng);
        balloon
    }

    /// Pick a fresh random floating spot and restore full opacity.
    pub fn reset<R: Rng>(&mut self, scene: &mut Scene, rng: &mut R) {
        let x = (rng.gen::<f32>() - 0.5) * 6.0;
        let z = (rng.gen::<f32>() - 0.5) * 6.0;
        self.base_y = 3.0 + rng.gen::<f32>() * 2.0;
        self.float_speed = 0.8 + rng.gen::<f32>() * 0.8;
        self.offset = rng.gen::<f32>() * TAU;
        self.released = false;
        self.release_speed = 0.0;

        let node = scene.node_mut(self.node);
        node.translation = Vec3::new(x, self.base_y, z);
        node.material.opacity = 1.0;
    }

    /// Returns false if the balloon was already on its way up.
    pub fn release<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        self.release_speed = BALLOON_RELEASE_SPEED_MIN + rng.gen::<f32>() * BALLOON_RELEASE_SPEED_SPAN;
        true
    }

    pub fn step<R: Rng>(&self, scene: &mut Scene, elapsed_s: f32, rng: &mut R) {
        let node = scene.node_mut(self.node);
        if self.released {
            node.translation.y += BALLOON_RISE_BASE + self.release_speed * BALLOON_RISE_SPEED_FACTOR;
            node.translation.x += (rng.gen::<f32>() - 0.5) * BALLOON_DRIFT;
            node.translation.z += (rng.gen::<f32>() - 0.5) * BALLOON_DRIFT;
            node.material.opacity = (node.material.opacity - BALLOON_FADE_PER_TICK).max(0.0);
        } else {
            node.translation.y =
                self.base_y + (elapsed_s * self.float_speed + self.offset).sin() * BALLOON_BOB_AMPLITUDE;
        }
    }
}
