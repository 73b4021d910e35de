// Host-side tests for CPU-side render preparation: unit meshes and instance batching.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}
mod render {
    pub mod instances {
        include!("../src/render/instances.rs");
    }
    pub mod mesh {
        include!("../src/render/mesh.rs");
    }
}

use crate::core::scene::{hex, Light, Material, MeshKind, Scene, SpotCone};
use crate::render::instances::collect_instances;
use crate::render::mesh::{mesh_for, MeshData};
use glam::Vec3;
use std::f32::consts::FRAC_PI_4;

fn assert_well_formed(m: &MeshData) {
    assert!(!m.vertices.is_empty());
    assert_eq!(m.indices.len() % 3, 0);
    for &i in &m.indices {
        assert!((i as usize) < m.vertices.len());
    }
    for v in &m.vertices {
        for c in v.position {
            assert!((-0.5 - 1e-5..=0.5 + 1e-5).contains(&c));
        }
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn unit_meshes_fit_the_unit_cube() {
    for kind in MeshKind::ALL {
        assert_well_formed(&mesh_for(kind));
    }
}

#[test]
fn sphere_vertices_sit_on_radius() {
    for v in mesh_for(MeshKind::Sphere).vertices {
        assert!((Vec3::from_array(v.position).length() - 0.5).abs() < 1e-5);
    }
}

#[test]
fn box_normals_point_outward() {
    for v in mesh_for(MeshKind::Box).vertices {
        let p = Vec3::from_array(v.position);
        assert!(p.dot(Vec3::from_array(v.normal)) > 0.0);
    }
}

#[test]
fn plane_is_flat_and_faces_z() {
    let m = mesh_for(MeshKind::Plane);
    assert_eq!(m.indices.len(), 6);
    for v in m.vertices {
        assert_eq!(v.position[2], 0.0);
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

fn sample_scene() -> Scene {
    let mut s = Scene::new(hex(0x000000));
    let group = s.add_group(None, Vec3::new(0.0, 1.0, 0.0));
    s.add_mesh(Some(group), MeshKind::Box, Vec3::ONE, Material::lit(hex(0xff0000)));
    s.add_mesh(Some(group), MeshKind::Sphere, Vec3::ONE, Material::lit(hex(0x00ff00)));
    let near = s.add_mesh(
        None,
        MeshKind::Sphere,
        Vec3::ONE,
        Material::unlit(hex(0xffffff)).with_opacity(0.5),
    );
    s.node_mut(near).translation = Vec3::new(0.0, 0.0, 8.0);
    let far = s.add_mesh(
        None,
        MeshKind::Sphere,
        Vec3::ONE,
        Material::unlit(hex(0x0000ff)).with_opacity(0.5),
    );
    s.node_mut(far).translation = Vec3::new(0.0, 0.0, -8.0);
    s
}

#[test]
fn opaque_batches_precede_transparent_ones() {
    let list = collect_instances(&sample_scene(), Vec3::new(0.0, 0.0, 10.0));
    assert_eq!(list.instances.len(), 4);
    let flags: Vec<bool> = list.batches.iter().map(|b| b.transparent).collect();
    assert_eq!(flags, vec![false, false, true]);
    let covered: u32 = list.batches.iter().map(|b| b.range.end - b.range.start).sum();
    assert_eq!(covered, 4);
}

#[test]
fn transparent_instances_sort_back_to_front() {
    let list = collect_instances(&sample_scene(), Vec3::new(0.0, 0.0, 10.0));
    let batch = list.batches.last().unwrap();
    let first = &list.instances[batch.range.start as usize];
    let second = &list.instances[batch.range.start as usize + 1];
    // column 3 of the model matrix is the translation
    assert_eq!(first.model[3][2], -8.0);
    assert_eq!(second.model[3][2], 8.0);
    assert_eq!(first.color[3], 0.5);
    assert_eq!(first.flags[0], 1.0);
}

#[test]
fn hidden_subtrees_are_skipped() {
    let mut s = sample_scene();
    s.nodes[0].visible = false;
    let list = collect_instances(&s, Vec3::ZERO);
    assert_eq!(list.instances.len(), 2);
    assert!(list.batches.iter().all(|b| b.transparent));
}

#[test]
fn child_inherits_parent_translation_but_not_size() {
    let mut s = Scene::new(hex(0x000000));
    let parent = s.add_mesh(None, MeshKind::Box, Vec3::splat(4.0), Material::default());
    s.node_mut(parent).translation = Vec3::new(1.0, 2.0, 3.0);
    let child = s.add_mesh(Some(parent), MeshKind::Box, Vec3::ONE, Material::default());
    s.node_mut(child).translation = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(s.world_position(child), Vec3::new(1.0, 3.0, 3.0));

    let list = collect_instances(&s, Vec3::ZERO);
    let child_raw = &list.instances[1];
    assert_eq!(child_raw.model[0][0], 1.0);
    assert_eq!(child_raw.model[3][1], 3.0);
}

#[test]
fn gradient_material_carries_bottom_colour() {
    let mut s = Scene::new(hex(0x000000));
    s.add_mesh(
        None,
        MeshKind::Plane,
        Vec3::ONE,
        Material::lit([1.0, 0.0, 0.0]).with_gradient([0.0, 0.0, 1.0]).with_emissive(0.3),
    );
    let list = collect_instances(&s, Vec3::ZERO);
    let raw = &list.instances[0];
    assert_eq!(&raw.color[..3], &[1.0, 0.0, 0.0]);
    assert_eq!(raw.bottom, [0.0, 0.0, 1.0, 0.3]);
}

#[test]
fn srgb_hex_is_linearised() {
    assert_eq!(hex(0xffffff), [1.0, 1.0, 1.0]);
    assert_eq!(hex(0x000000), [0.0, 0.0, 0.0]);
    let mid = hex(0x808080)[0];
    assert!(mid > 0.2 && mid < 0.23);
}

#[test]
fn textured_material_is_flagged_and_blended() {
    let mut s = Scene::new(hex(0x000000));
    s.add_mesh(None, MeshKind::Plane, Vec3::ONE, Material::textured([1.0, 1.0, 1.0]));
    let list = collect_instances(&s, Vec3::ZERO);
    assert_eq!(list.batches.len(), 1);
    assert!(list.batches[0].transparent);
    assert_eq!(list.instances[0].flags, [1.0, 1.0, 0.0, 0.0]);
    assert_eq!(list.instances[0].color[3], 1.0);
}

#[test]
fn spot_cone_is_full_inside_zero_outside_and_soft_between() {
    let from = Vec3::new(0.0, 10.0, 0.0);
    let cone = SpotCone::aimed(from, Vec3::ZERO, FRAC_PI_4, 0.35);
    assert!((cone.cos_inner - (FRAC_PI_4 * 0.65).cos()).abs() < 1e-6);

    // straight down the axis and well inside the inner cone
    assert_eq!(cone.attenuation(from, Vec3::ZERO), 1.0);
    assert_eq!(cone.attenuation(from, Vec3::new(2.0, 0.0, 0.0)), 1.0);
    // 60 degrees off axis
    assert_eq!(cone.attenuation(from, Vec3::new(10.0 * 3f32.sqrt(), 0.0, 0.0)), 0.0);
    // behind the light
    assert_eq!(cone.attenuation(from, Vec3::new(0.0, 20.0, 0.0)), 0.0);
    // 37 degrees off axis falls in the penumbra
    let mid = cone.attenuation(from, Vec3::new(10.0 * 37f32.to_radians().tan(), 0.0, 0.0));
    assert!(mid > 0.0 && mid < 1.0, "{mid}");
}

#[test]
fn omni_light_has_no_cone() {
    let light = Light::point(Vec3::Y, hex(0xffffff), 1.0, 10.0);
    assert_eq!(light.spot_factor(Vec3::new(0.0, 50.0, 0.0)), 1.0);
    let spot = light.aimed_at(Vec3::ZERO, FRAC_PI_4, 0.0);
    assert_eq!(spot.spot_factor(Vec3::new(0.0, 50.0, 0.0)), 0.0);
    assert_eq!(spot.spot_factor(Vec3::ZERO), 1.0);
}
