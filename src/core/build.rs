use crate::core::room::RoomConfig;
use crate::core::scene::{hex, Interaction, Light, Material, MeshKind, NodeId, Scene};
use glam::{Quat, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

const ROOM_SIZE: f32 = 14.0;
const WALL_HEIGHT: f32 = ROOM_SIZE * 0.7;

pub const GIFT_POSITION: Vec3 = Vec3::new(2.0, 0.45, 1.4);
pub const BALLOON_PALETTE: [u32; 5] = [0xff6b6b, 0xffd93d, 0x7cf7d4, 0x7ab8ff, 0xd987ff];

/// Nodes and lights the animation driver and controller touch after startup.
#[derive(Clone, Debug)]
pub struct SceneHandles {
    pub gift: NodeId,
    pub cake: NodeId,
    pub flames: Vec<NodeId>,
    pub balloons: Vec<NodeId>,
    pub burst_group: NodeId,
    pub burst: Vec<NodeId>,
    pub sparkle_group: NodeId,
    pub sparkles: Vec<NodeId>,
    pub starfield: NodeId,
    pub moving_light: usize,
}

pub fn build_scene<R: Rng>(config: &RoomConfig, rng: &mut R) -> (Scene, SceneHandles) {
    let mut scene = Scene::new(hex(0x02010a));
    let moving_light = add_lights(&mut scene);
    add_room(&mut scene);
    let starfield = add_starfield(&mut scene, config.star_count, rng);
    let (cake, flames) = add_cake(&mut scene, config.candle_count);
    let balloons = add_balloons(&mut scene, config.balloon_count);
    let gift = add_gift_box(&mut scene);
    let (burst_group, burst) = add_burst_pool(&mut scene, config.burst_count, rng);
    let (sparkle_group, sparkles) = add_sparkle_pool(&mut scene, config.sparkle_count);
    add_photo_corner(&mut scene, &config.photo_caption);

    log::info!(
        "[scene] built {} nodes, {} lights",
        scene.nodes.len(),
        scene.lights.len()
    );

    let handles = SceneHandles {
        gift,
        cake,
        flames,
        balloons,
        burst_group,
        burst,
        sparkle_group,
        sparkles,
        starfield,
        moving_light,
    };
    (scene, handles)
}

fn scaled(rgb: [f32; 3], k: f32) -> [f32; 3] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k]
}

/// Returns the index of the light that circles the room.
fn add_lights(scene: &mut Scene) -> usize {
    scene.ambient = scaled(hex(0xfdf2ff), 0.7);
    scene.add_light(
        Light::point(Vec3::new(6.0, 9.0, 6.0), hex(0xfff9e8), 1.2, 40.0).aimed_at(
            Vec3::ZERO,
            FRAC_PI_4,
            0.35,
        ),
    );
    scene.add_light(Light::point(Vec3::new(0.5, 2.4, 0.6), hex(0xff8dd6), 1.3, 18.0));
    scene.add_light(Light::point(Vec3::new(-2.5, 3.5, -1.2), hex(0x7ab8ff), 1.2, 18.0));
    scene.add_light(Light::point(Vec3::new(0.0, 4.0, 0.0), hex(0xfff6b3), 0.6, 9.0))
}

fn add_room(scene: &mut Scene) {
    let floor = scene.add_mesh(
        None,
        MeshKind::Plane,
        Vec3::new(ROOM_SIZE, ROOM_SIZE, 1.0),
        Material::lit(hex(0x1b1a2f)),
    );
    scene.node_mut(floor).rotation = Quat::from_rotation_x(-FRAC_PI_2);

    let wall = Material::lit(hex(0x0a0613)).with_gradient(hex(0x1a1440));
    let wall_size = Vec3::new(ROOM_SIZE, WALL_HEIGHT, 1.0);

    let back = scene.add_mesh(None, MeshKind::Plane, wall_size, wall);
    scene.node_mut(back).translation = Vec3::new(0.0, WALL_HEIGHT / 2.0, -ROOM_SIZE / 2.0);

    let side = scene.add_mesh(None, MeshKind::Plane, wall_size, wall);
    let n = scene.node_mut(side);
    n.rotation = Quat::from_rotation_y(FRAC_PI_2);
    n.translation = Vec3::new(-ROOM_SIZE / 2.0, WALL_HEIGHT / 2.0, 0.0);

    let ceiling = scene.add_mesh(
        None,
        MeshKind::Plane,
        Vec3::new(ROOM_SIZE, ROOM_SIZE, 1.0),
        Material::lit(hex(0x211b4a)),
    );
    let n = scene.node_mut(ceiling);
    n.rotation = Quat::from_rotation_x(FRAC_PI_2);
    n.translation = Vec3::new(0.0, WALL_HEIGHT, 0.0);
}

fn add_starfield<R: Rng>(scene: &mut Scene, count: usize, rng: &mut R) -> NodeId {
    let group = scene.add_group(None, Vec3::ZERO);
    let star = Material::unlit([1.0, 1.0, 1.0]).with_opacity(0.7);
    for _ in 0..count {
        let id = scene.add_mesh(Some(group), MeshKind::Sphere, Vec3::splat(0.08), star);
        scene.node_mut(id).translation = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 40.0,
            2.0 + rng.gen::<f32>() * 15.0,
            -10.0 - rng.gen::<f32>() * 25.0,
        );
    }
    group
}

/// Cake layers, candles and flames under one tagged group.
fn add_cake(scene: &mut Scene, candles: usize) -> (NodeId, Vec<NodeId>) {
    let cake = scene.add_group(None, Vec3::new(0.0, 0.4, 0.0));

    let base = scene.add_mesh(
        Some(cake),
        MeshKind::Cylinder,
        Vec3::new(3.2, 0.7, 3.2),
        Material::lit(hex(0xffc6d7)),
    );
    scene.tag(base, Interaction::Cake);

    let top = scene.add_mesh(
        Some(cake),
        MeshKind::Cylinder,
        Vec3::new(2.0, 0.5, 2.0),
        Material::lit(hex(0xffffff)),
    );
    scene.node_mut(top).translation.y = 0.6;
    scene.tag(top, Interaction::Cake);

    let mut flames = Vec::with_capacity(candles);
    for i in 0..candles {
        let angle = (i as f32 / candles as f32) * TAU;
        let at = Vec3::new(angle.cos() * 0.55, 1.1, angle.sin() * 0.55);

        let candle = scene.add_mesh(
            Some(cake),
            MeshKind::Cylinder,
            Vec3::new(0.16, 0.65, 0.16),
            Material::lit(hex(0xfff1a8)),
        );
        scene.node_mut(candle).translation = at;
        scene.tag(candle, Interaction::Cake);

        let flame = scene.add_mesh(
            Some(cake),
            MeshKind::Sphere,
            Vec3::splat(0.18),
            Material::unlit(hex(0xffdd66)),
        );
        scene.node_mut(flame).translation = at + Vec3::new(0.0, 0.4, 0.0);
        scene.tag(flame, Interaction::Cake);
        flames.push(flame);
    }
    (cake, flames)
}

/// Balloon meshes only; placement comes from `Balloon::reset`.
fn add_balloons(scene: &mut Scene, count: usize) -> Vec<NodeId> {
    (0..count)
        .map(|i| {
            let color = hex(BALLOON_PALETTE[i % BALLOON_PALETTE.len()]);
            scene.add_mesh(
                None,
                MeshKind::Sphere,
                Vec3::splat(0.9),
                Material::lit(color).with_emissive(0.25).with_opacity(1.0),
            )
        })
        .collect()
}

fn add_gift_box(scene: &mut Scene) -> NodeId {
    let gift = scene.add_mesh(
        None,
        MeshKind::Box,
        Vec3::new(1.05, 0.85, 1.05),
        Material::lit(hex(0xa86bff)),
    );
    scene.node_mut(gift).translation = GIFT_POSITION;
    scene.tag(gift, Interaction::Gift);

    let ribbon = Material::lit(hex(0xffd1f3));
    for size in [Vec3::new(1.15, 0.08, 0.18), Vec3::new(0.18, 0.08, 1.15)] {
        let r = scene.add_mesh(Some(gift), MeshKind::Box, size, ribbon);
        scene.node_mut(r).translation.y = 0.5;
        scene.tag(r, Interaction::Gift);
    }
    gift
}

fn add_burst_pool<R: Rng>(scene: &mut Scene, count: usize, rng: &mut R) -> (NodeId, Vec<NodeId>) {
    let group = scene.add_group(None, Vec3::ZERO);
    scene.node_mut(group).visible = false;
    let particles = (0..count)
        .map(|_| {
            let color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];
            let id = scene.add_mesh(
                Some(group),
                MeshKind::Sphere,
                Vec3::splat(0.12),
                Material::unlit(color),
            );
            scene.node_mut(id).translation = GIFT_POSITION;
            id
        })
        .collect();
    (group, particles)
}

fn add_sparkle_pool(scene: &mut Scene, count: usize) -> (NodeId, Vec<NodeId>) {
    let group = scene.add_group(None, Vec3::ZERO);
    scene.node_mut(group).visible = false;
    let sparkle = Material::unlit(hex(0xfff6a0)).with_opacity(1.0);
    let sparkles = (0..count)
        .map(|_| scene.add_mesh(Some(group), MeshKind::Sphere, Vec3::splat(0.08), sparkle))
        .collect();
    (group, sparkles)
}

fn add_photo_corner(scene: &mut Scene, caption_text: &str) {
    let tilt = Quat::from_rotation_y(PI / 16.0);

    let frame_group = scene.add_group(None, Vec3::new(-2.8, 2.4, -5.8));
    scene.node_mut(frame_group).rotation = tilt;
    scene.add_mesh(
        Some(frame_group),
        MeshKind::Box,
        Vec3::new(2.2, 1.5, 0.08),
        Material::lit(hex(0xf8d7ff)),
    );
    let photo = scene.add_mesh(
        Some(frame_group),
        MeshKind::Plane,
        Vec3::new(1.9, 1.2, 1.0),
        Material::lit(hex(0xffffff)),
    );
    scene.node_mut(photo).translation.z = 0.045;

    scene.caption = Some(caption_text.to_string());
    let caption = scene.add_mesh(
        None,
        MeshKind::Plane,
        Vec3::new(2.4, 0.7, 1.0),
        Material::textured([1.0, 1.0, 1.0]),
    );
    let n = scene.node_mut(caption);
    n.translation = Vec3::new(-2.5, 1.2, -5.7);
    n.rotation = tilt;
}
