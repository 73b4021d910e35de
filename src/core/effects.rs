use crate::constants::*;
use crate::core::scene::{NodeId, Scene};
use glam::Vec3;
use rand::Rng;

/// Candle flame that eases its displayed scale toward a lit/unlit target.
#[derive(Clone, Copy, Debug)]
pub struct Flame {
    pub node: NodeId,
    pub target_scale: f32,
}

impl Flame {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            target_scale: 1.0,
        }
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.target_scale = if lit { 1.0 } else { 0.0 };
    }

    pub fn step(&self, scene: &mut Scene) {
        let node = scene.node_mut(self.node);
        let next = node.scale + (self.target_scale - node.scale) * FLAME_SMOOTHING;
        node.scale = next;
        node.visible = next > FLAME_HIDE_THRESHOLD;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BurstParticle {
    pub node: NodeId,
    pub direction: Vec3,
    pub speed: f32,
}

/// Fixed pool of confetti particles thrown out of the gift box.
///
/// The pool is sized once at construction; `reset` reinitialises every
/// particle's position, direction and speed in place.
#[derive(Clone, Debug)]
pub struct BurstPool {
    pub group: NodeId,
    pub particles: Vec<BurstParticle>,
    pub active: bool,
    pub start_s: f32,
}

impl BurstPool {
    pub fn new(group: NodeId, nodes: &[NodeId]) -> Self {
        let particles = nodes
            .iter()
            .map(|&node| BurstParticle {
                node,
                direction: Vec3::Y,
                speed: 0.0,
            })
            .collect();
        Self {
            group,
            particles,
            active: false,
            start_s: 0.0,
        }
    }

    pub fn reset<R: Rng>(&mut self, scene: &mut Scene, origin: Vec3, rng: &mut R) {
        for p in &mut self.particles {
            scene.node_mut(p.node).translation = origin;
            p.direction = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0,
                rng.gen::<f32>() * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            )
            .try_normalize()
            .unwrap_or(Vec3::Y);
            p.speed = 2.0 + rng.gen::<f32>() * 2.0;
        }
    }

    pub fn trigger<R: Rng>(&mut self, scene: &mut Scene, origin: Vec3, now_s: f32, rng: &mut R) {
        self.reset(scene, origin, rng);
        scene.node_mut(self.group).visible = true;
        self.active = true;
        self.start_s = now_s;
    }

    pub fn step(&mut self, scene: &mut Scene, now_s: f32) {
        if !self.active {
            return;
        }
        for p in &self.particles {
            scene.node_mut(p.node).translation += p.direction * (p.speed * BURST_TICK_FACTOR);
        }
        if now_s - self.start_s > BURST_LIFETIME_SEC {
            self.active = false;
            scene.node_mut(self.group).visible = false;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Sparkle {
    pub node: NodeId,
    pub velocity: Vec3,
}

/// Fixed pool of sparkles that rise off the cake on every candle toggle.
#[derive(Clone, Debug)]
pub struct SparklePool {
    pub group: NodeId,
    pub sparkles: Vec<Sparkle>,
    pub active: bool,
    pub start_s: f32,
}

impl SparklePool {
    pub fn new(group: NodeId, nodes: &[NodeId]) -> Self {
        let sparkles = nodes
            .iter()
            .map(|&node| Sparkle {
                node,
                velocity: Vec3::ZERO,
            })
            .collect();
        Self {
            group,
            sparkles,
            active: false,
            start_s: 0.0,
        }
    }

    /// Restart the burst: every sparkle gets a fresh position, velocity and full opacity.
    pub fn trigger<R: Rng>(&mut self, scene: &mut Scene, now_s: f32, rng: &mut R) {
        scene.node_mut(self.group).visible = true;
        self.active = true;
        self.start_s = now_s;
        for s in &mut self.sparkles {
            let node = scene.node_mut(s.node);
            node.translation = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 1.2,
                1.6 + rng.gen::<f32>() * 0.4,
                (rng.gen::<f32>() - 0.5) * 1.2,
            );
            node.material.opacity = 1.0;
            node.material.transparent = true;
            s.velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 0.2,
                0.05 + rng.gen::<f32>() * 0.08,
                (rng.gen::<f32>() - 0.5) * 0.2,
            );
        }
    }

    pub fn step(&mut self, scene: &mut Scene, now_s: f32) {
        if !self.active {
            return;
        }
        for s in &self.sparkles {
            let node = scene.node_mut(s.node);
            node.translation += s.velocity;
            node.material.opacity = (node.material.opacity - SPARKLE_FADE_PER_TICK).max(0.0);
        }
        if now_s - self.start_s > SPARKLE_LIFETIME_SEC {
            self.active = false;
            scene.node_mut(self.group).visible = false;
        }
    }
}
