use super::color::Color;
use super::constants::*;
use fnv::FnvHashMap;
use std::fmt;

/// The parts of the model the scene binds a material to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshRole {
    Baked,
    PoleLightA,
    PoleLightB,
    PortalLight,
}

impl MeshRole {
    pub const ALL: [MeshRole; 4] = [
        MeshRole::Baked,
        MeshRole::PoleLightA,
        MeshRole::PoleLightB,
        MeshRole::PortalLight,
    ];

    /// Node name carrying this role in the exported model.
    pub fn node_name(self) -> &'static str {
        match self {
            MeshRole::Baked => BAKED_MESH_NAME,
            MeshRole::PoleLightA => POLE_LIGHT_A_MESH_NAME,
            MeshRole::PoleLightB => POLE_LIGHT_B_MESH_NAME,
            MeshRole::PortalLight => PORTAL_LIGHT_MESH_NAME,
        }
    }

    pub fn material(self) -> Material {
        match self {
            MeshRole::Baked => Material::Baked,
            MeshRole::PoleLightA | MeshRole::PoleLightB => Material::PoleLight,
            MeshRole::PortalLight => Material::Portal,
        }
    }
}

impl fmt::Display for MeshRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MeshRole::Baked => "baked scene",
            MeshRole::PoleLightA => "pole light A",
            MeshRole::PoleLightB => "pole light B",
            MeshRole::PortalLight => "portal light",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    /// Lightmap texture, fogged.
    Baked,
    /// Flat emissive color, fogged.
    PoleLight,
    /// Animated noise between the two portal colors.
    Portal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("model has no `{name}` node for the {role} mesh")]
    MissingMesh { role: MeshRole, name: &'static str },
    #[error("mesh `{name}` has no vertex positions")]
    EmptyMesh { name: String },
}

/// One mesh handle per role, resolved from the model's named nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMeshes<T> {
    pub baked: T,
    pub pole_light_a: T,
    pub pole_light_b: T,
    pub portal_light: T,
}

impl<T> SceneMeshes<T> {
    /// Pick the mesh for every role out of `(name, mesh)` pairs.
    ///
    /// The first node with a matching name wins. Any role without a node
    /// fails the whole lookup; no placeholder is substituted.
    pub fn resolve<I>(named: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = (String, T)>,
    {
        let mut by_name: FnvHashMap<String, T> = FnvHashMap::default();
        for (name, mesh) in named {
            by_name.entry(name).or_insert(mesh);
        }
        let mut take = |role: MeshRole| {
            by_name
                .remove(role.node_name())
                .ok_or(SceneError::MissingMesh {
                    role,
                    name: role.node_name(),
                })
        };
        Ok(Self {
            baked: take(MeshRole::Baked)?,
            pole_light_a: take(MeshRole::PoleLightA)?,
            pole_light_b: take(MeshRole::PoleLightB)?,
            portal_light: take(MeshRole::PortalLight)?,
        })
    }

    pub fn get(&self, role: MeshRole) -> &T {
        match role {
            MeshRole::Baked => &self.baked,
            MeshRole::PoleLightA => &self.pole_light_a,
            MeshRole::PoleLightB => &self.pole_light_b,
            MeshRole::PortalLight => &self.portal_light,
        }
    }

    /// Material binding for every role, in [`MeshRole::ALL`] order.
    pub fn assign_materials(&self) -> [(MeshRole, Material, &T); 4] {
        MeshRole::ALL.map(|role| (role, role.material(), self.get(role)))
    }
}

/// CPU-side material and environment parameters read by the renderer each frame.
///
/// Debug settings write here through their change handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialParams {
    pub pole_light_color: Color,
    pub portal_center_color: Color,
    pub portal_border_color: Color,
    pub fireflies_size: f32,
    pub clear_color: Color,
    pub fog_color: Color,
    pub fog_near: f32,
    pub fog_far: f32,
    pub pixel_ratio: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            pole_light_color: Color::from_hex(POLE_LIGHT_COLOR),
            portal_center_color: Color::from_hex(PORTAL_CENTER_COLOR),
            portal_border_color: Color::from_hex(PORTAL_BORDER_COLOR),
            fireflies_size: FIREFLIES_SIZE,
            clear_color: Color::from_hex(CLEAR_COLOR),
            fog_color: Color::from_hex(FOG_COLOR),
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
            pixel_ratio: 1.0,
        }
    }
}

/// Device pixel ratio capped at [`MAX_PIXEL_RATIO`].
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}
