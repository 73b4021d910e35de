use crate::core::scene::{MeshKind, Scene};
use glam::{Mat3, Mat4, Vec3};
use std::ops::Range;

/// Per-instance data consumed by the scene shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
    /// rgb at the top edge + opacity
    pub color: [f32; 4],
    /// rgb at the bottom edge + emissive strength
    pub bottom: [f32; 4],
    /// x: unlit, y: textured
    pub flags: [f32; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawBatch {
    pub mesh: MeshKind,
    pub transparent: bool,
    pub range: Range<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct InstanceList {
    pub instances: Vec<InstanceRaw>,
    /// Opaque batches first, then transparent ones.
    pub batches: Vec<DrawBatch>,
}

fn normal_matrix(model: &Mat4) -> [[f32; 4]; 3] {
    let m3 = Mat3::from_mat4(*model);
    let n = if m3.determinant().abs() > 1e-12 {
        m3.inverse().transpose()
    } else {
        Mat3::IDENTITY
    };
    [
        n.x_axis.extend(0.0).to_array(),
        n.y_axis.extend(0.0).to_array(),
        n.z_axis.extend(0.0).to_array(),
    ]
}

/// Flatten the visible part of the scene into instanced draw batches.
///
/// Relies on parents being created before their children, so a single
/// forward pass resolves world transforms and inherited visibility.
/// Transparent instances are sorted back to front within each mesh batch.
pub fn collect_instances(scene: &Scene, eye: Vec3) -> InstanceList {
    let n = scene.nodes.len();
    let mut world: Vec<Mat4> = Vec::with_capacity(n);
    let mut visible: Vec<bool> = Vec::with_capacity(n);
    for node in &scene.nodes {
        let (parent_world, parent_visible) = match node.parent {
            Some(p) => (world[p.0], visible[p.0]),
            None => (Mat4::IDENTITY, true),
        };
        world.push(parent_world * node.local_matrix());
        visible.push(parent_visible && node.visible);
    }

    let mut opaque: [Vec<InstanceRaw>; 4] = Default::default();
    let mut transparent: [Vec<(f32, InstanceRaw)>; 4] = Default::default();
    for (i, node) in scene.nodes.iter().enumerate() {
        let Some(mesh) = node.mesh else { continue };
        if !visible[i] {
            continue;
        }
        let model = world[i] * Mat4::from_scale(node.size);
        let mat = &node.material;
        let bottom = mat.gradient_bottom.unwrap_or(mat.color);
        let raw = InstanceRaw {
            model: model.to_cols_array_2d(),
            normal: normal_matrix(&model),
            color: [mat.color[0], mat.color[1], mat.color[2], mat.opacity],
            bottom: [bottom[0], bottom[1], bottom[2], mat.emissive],
            flags: [flag(mat.unlit), flag(mat.textured), 0.0, 0.0],
        };
        if mat.transparent {
            let d = model.transform_point3(Vec3::ZERO).distance_squared(eye);
            transparent[mesh.index()].push((d, raw));
        } else {
            opaque[mesh.index()].push(raw);
        }
    }

    let mut list = InstanceList::default();
    for kind in MeshKind::ALL {
        push_batch(&mut list, kind, false, opaque[kind.index()].drain(..));
    }
    for kind in MeshKind::ALL {
        let bucket = &mut transparent[kind.index()];
        bucket.sort_by(|a, b| b.0.total_cmp(&a.0));
        push_batch(&mut list, kind, true, bucket.drain(..).map(|(_, raw)| raw));
    }
    list
}

#[inline]
fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

fn push_batch(
    list: &mut InstanceList,
    mesh: MeshKind,
    transparent: bool,
    instances: impl Iterator<Item = InstanceRaw>,
) {
    let start = list.instances.len() as u32;
    list.instances.extend(instances);
    let end = list.instances.len() as u32;
    if end > start {
        list.batches.push(DrawBatch {
            mesh,
            transparent,
            range: start..end,
        });
    }
}
