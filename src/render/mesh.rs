use crate::core::scene::MeshKind;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// CPU-side geometry for one unit primitive.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: [f32; 3], normal: [f32; 3]) -> u16 {
        self.vertices.push(Vertex { position, normal });
        (self.vertices.len() - 1) as u16
    }

    fn quad(&mut self, a: u16, b: u16, c: u16, d: u16) {
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
}

pub fn mesh_for(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Box => unit_box(),
        MeshKind::Sphere => unit_sphere(20, 14),
        MeshKind::Cylinder => unit_cylinder(32),
        MeshKind::Plane => unit_plane(),
    }
}

/// Axis-aligned cube spanning [-0.5, 0.5] with flat per-face normals.
pub fn unit_box() -> MeshData {
    let mut m = MeshData::default();
    // (normal, tangent u, tangent v) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| {
            [
                0.5 * n[0] + 0.5 * su * u[0] + 0.5 * sv * v[0],
                0.5 * n[1] + 0.5 * su * u[1] + 0.5 * sv * v[1],
                0.5 * n[2] + 0.5 * su * u[2] + 0.5 * sv * v[2],
            ]
        };
        let a = m.push(corner(-1.0, -1.0), n);
        let b = m.push(corner(1.0, -1.0), n);
        let c = m.push(corner(1.0, 1.0), n);
        let d = m.push(corner(-1.0, 1.0), n);
        m.quad(a, b, c, d);
    }
    m
}

/// UV sphere of radius 0.5.
pub fn unit_sphere(segments: u16, rings: u16) -> MeshData {
    let mut m = MeshData::default();
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let n = [phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()];
            m.push([n[0] * 0.5, n[1] * 0.5, n[2] * 0.5], n);
        }
    }
    let stride = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            m.quad(a, a + 1, b + 1, b);
        }
    }
    m
}

/// Capped cylinder of radius 0.5 along Y, height 1.
pub fn unit_cylinder(segments: u16) -> MeshData {
    let mut m = MeshData::default();
    for s in 0..=segments {
        let theta = TAU * s as f32 / segments as f32;
        let (x, z) = (theta.cos(), theta.sin());
        m.push([x * 0.5, -0.5, z * 0.5], [x, 0.0, z]);
        m.push([x * 0.5, 0.5, z * 0.5], [x, 0.0, z]);
    }
    for s in 0..segments {
        let a = s * 2;
        m.quad(a, a + 1, a + 3, a + 2);
    }
    for (y, ny) in [(-0.5_f32, -1.0_f32), (0.5, 1.0)] {
        let center = m.push([0.0, y, 0.0], [0.0, ny, 0.0]);
        let first = m.vertices.len() as u16;
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            m.push([theta.cos() * 0.5, y, theta.sin() * 0.5], [0.0, ny, 0.0]);
        }
        for s in 0..segments {
            m.indices
                .extend_from_slice(&[center, first + s, first + s + 1]);
        }
    }
    m
}

/// Unit quad in the XY plane facing +Z.
pub fn unit_plane() -> MeshData {
    let mut m = MeshData::default();
    let n = [0.0, 0.0, 1.0];
    let a = m.push([-0.5, -0.5, 0.0], n);
    let b = m.push([0.5, -0.5, 0.0], n);
    let c = m.push([0.5, 0.5, 0.0], n);
    let d = m.push([-0.5, 0.5, 0.0], n);
    m.quad(a, b, c, d);
    m
}
