use crate::input::{ray_unit_box, ray_unit_cylinder, ray_unit_plane, ray_unit_sphere};
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Unit primitives shared by every mesh node; `Node::size` stretches them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Box,
    Sphere,
    Cylinder,
    Plane,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Box,
        MeshKind::Sphere,
        MeshKind::Cylinder,
        MeshKind::Plane,
    ];

    pub fn index(self) -> usize {
        match self {
            MeshKind::Box => 0,
            MeshKind::Sphere => 1,
            MeshKind::Cylinder => 2,
            MeshKind::Plane => 3,
        }
    }
}

/// What a viewer's click on a tagged object means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    Gift,
    Cake,
}

/// Linear-space RGB from a 0xRRGGBB sRGB literal.
pub fn hex(rgb: u32) -> [f32; 3] {
    let c = |shift: u32| srgb_to_linear(((rgb >> shift) & 0xff) as f32 / 255.0);
    [c(16), c(8), c(0)]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    /// Color at the bottom edge of the mesh; `color` is used at the top.
    pub gradient_bottom: Option<[f32; 3]>,
    pub emissive: f32,
    pub opacity: f32,
    pub unlit: bool,
    pub transparent: bool,
    /// Modulate by the caption texture; implies unlit.
    pub textured: bool,
}

impl Material {
    pub fn lit(color: [f32; 3]) -> Self {
        Self {
            color,
            gradient_bottom: None,
            emissive: 0.0,
            opacity: 1.0,
            unlit: false,
            transparent: false,
            textured: false,
        }
    }

    pub fn unlit(color: [f32; 3]) -> Self {
        Self {
            unlit: true,
            ..Self::lit(color)
        }
    }

    /// Alpha-blended, unlit surface showing the caption texture.
    pub fn textured(color: [f32; 3]) -> Self {
        Self {
            textured: true,
            ..Self::unlit(color).with_opacity(1.0)
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn with_gradient(mut self, bottom: [f32; 3]) -> Self {
        self.gradient_bottom = Some(bottom);
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::lit([1.0, 1.0, 1.0])
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<NodeId>,
    /// `None` for pure grouping nodes.
    pub mesh: Option<MeshKind>,
    pub translation: Vec3,
    pub rotation: Quat,
    /// Geometry extent; not inherited by children.
    pub size: Vec3,
    /// Uniform animated scale; inherited by children.
    pub scale: f32,
    pub material: Material,
    pub visible: bool,
}

impl Node {
    fn new(parent: Option<NodeId>, mesh: Option<MeshKind>, size: Vec3, material: Material) -> Self {
        Self {
            parent,
            mesh,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            size,
            scale: 1.0,
            material,
            visible: true,
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.translation)
    }
}

/// Cone that restricts a light to the directions around its aim, with a
/// smooth penumbra at the rim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotCone {
    /// Unit vector from the light toward its target.
    pub direction: Vec3,
    pub cos_outer: f32,
    pub cos_inner: f32,
}

impl SpotCone {
    /// `angle` is the cone half-angle; `penumbra` in [0, 1] is the softened
    /// fraction of it.
    pub fn aimed(from: Vec3, at: Vec3, angle: f32, penumbra: f32) -> Self {
        Self {
            direction: (at - from).try_normalize().unwrap_or(Vec3::NEG_Y),
            cos_outer: angle.cos(),
            cos_inner: (angle * (1.0 - penumbra.clamp(0.0, 1.0))).cos(),
        }
    }

    /// 0 outside the cone, 1 inside the inner cone, smoothstep in between.
    pub fn attenuation(&self, light_pos: Vec3, point: Vec3) -> f32 {
        let Some(to_point) = (point - light_pos).try_normalize() else {
            return 1.0;
        };
        smoothstep(self.cos_outer, self.cos_inner, self.direction.dot(to_point))
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 - edge0 <= f32::EPSILON {
        return if x >= edge1 { 1.0 } else { 0.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Point light with linear range falloff, optionally narrowed to a cone.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    pub spot: Option<SpotCone>,
}

impl Light {
    pub fn point(position: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
            spot: None,
        }
    }

    pub fn aimed_at(mut self, target: Vec3, angle: f32, penumbra: f32) -> Self {
        self.spot = Some(SpotCone::aimed(self.position, target, angle, penumbra));
        self
    }

    /// Cone factor for `point`; always 1 for an omni light.
    pub fn spot_factor(&self, point: Vec3) -> f32 {
        self.spot
            .map_or(1.0, |cone| cone.attenuation(self.position, point))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub interaction: Interaction,
    pub distance: f32,
}

/// Retained scene graph: a flat node arena with parent links.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<Node>,
    pub lights: Vec<Light>,
    pub ambient: [f32; 3],
    pub background: [f32; 3],
    /// Text drawn into the texture sampled by `Material::textured` surfaces.
    pub caption: Option<String>,
    pick_tags: FnvHashMap<NodeId, Interaction>,
}

impl Scene {
    pub fn new(background: [f32; 3]) -> Self {
        Self {
            background,
            ..Default::default()
        }
    }

    pub fn add_group(&mut self, parent: Option<NodeId>, translation: Vec3) -> NodeId {
        let mut node = Node::new(parent, None, Vec3::ONE, Material::default());
        node.translation = translation;
        self.push(node)
    }

    pub fn add_mesh(
        &mut self,
        parent: Option<NodeId>,
        mesh: MeshKind,
        size: Vec3,
        material: Material,
    ) -> NodeId {
        self.push(Node::new(parent, Some(mesh), size, material))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Parent-chain transform excluding the node's own geometry size.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.local_matrix();
        match node.parent {
            Some(p) => self.world_matrix(p) * local,
            None => local,
        }
    }

    /// Transform applied to the unit primitive when drawing or picking.
    pub fn draw_matrix(&self, id: NodeId) -> Mat4 {
        self.world_matrix(id) * Mat4::from_scale(self.node(id).size)
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// A node is drawn only if it and every ancestor are visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = self.node(c);
            if !node.visible {
                return false;
            }
            cur = node.parent;
        }
        true
    }

    /// Mark a mesh node as clickable with the given meaning.
    pub fn tag(&mut self, id: NodeId, interaction: Interaction) {
        self.pick_tags.insert(id, interaction);
    }

    /// Intersect a world-space ray with every tagged, visible mesh.
    /// Hits are ordered nearest first.
    pub fn raycast(&self, origin: Vec3, dir: Vec3) -> SmallVec<[Hit; 8]> {
        let mut hits: SmallVec<[Hit; 8]> = SmallVec::new();
        for (&id, &interaction) in &self.pick_tags {
            let Some(mesh) = self.node(id).mesh else {
                continue;
            };
            if !self.is_visible(id) {
                continue;
            }
            let inv = self.draw_matrix(id).inverse();
            let ro = inv.transform_point3(origin);
            let rd = inv.transform_vector3(dir);
            let t = match mesh {
                MeshKind::Box => ray_unit_box(ro, rd),
                MeshKind::Sphere => ray_unit_sphere(ro, rd),
                MeshKind::Cylinder => ray_unit_cylinder(ro, rd),
                MeshKind::Plane => ray_unit_plane(ro, rd),
            };
            if let Some(distance) = t {
                hits.push(Hit {
                    node: id,
                    interaction,
                    distance,
                });
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.node.cmp(&b.node)));
        hits
    }
}
