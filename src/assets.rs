use anyhow::{anyhow, bail, Context};
use glam::{Mat4, Vec3};

/// Triangle mesh flattened out of one root node of the model, in scene space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }
}

/// Decoded RGBA8 image, rows top to bottom.
#[derive(Clone, Debug)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode a binary or embedded glTF model into one [`MeshData`] per root node
/// of its default scene.
///
/// Each root node's mesh and the meshes of its descendants are merged, with
/// node transforms applied. Non-triangle primitives are skipped. Missing UVs
/// are filled with zeros; non-indexed primitives get sequential indices.
pub fn decode_model(bytes: &[u8]) -> anyhow::Result<Vec<MeshData>> {
    // Draco-compressed meshes fail here: the model must be exported without it
    let (document, buffers, _images) =
        gltf::import_slice(bytes).context("failed to decode glTF model")?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| anyhow!("glTF model has no scene"))?;

    let mut meshes = Vec::new();
    for node in scene.nodes() {
        let mut mesh = MeshData {
            name: node.name().unwrap_or_default().to_string(),
            ..Default::default()
        };
        append_node(&node, Mat4::IDENTITY, &buffers, &mut mesh)
            .with_context(|| format!("failed to read mesh `{}`", mesh.name))?;
        meshes.push(mesh);
    }
    Ok(meshes)
}

fn append_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut MeshData,
) -> anyhow::Result<()> {
    let transform = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "[assets] skipping {:?} primitive in `{}`",
                    primitive.mode(),
                    out.name
                );
                continue;
            }
            let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let positions: Vec<[f32; 3]> = match reader.read_positions() {
                Some(p) => p.collect(),
                None => continue,
            };
            let base = out.positions.len() as u32;
            let count = positions.len();
            out.positions.extend(
                positions
                    .into_iter()
                    .map(|p| transform.transform_point3(Vec3::from_array(p)).to_array()),
            );
            if let Some(uvs) = reader.read_tex_coords(0) {
                out.uvs.extend(uvs.into_f32().take(count));
            }
            // Keep uvs aligned with positions even when a primitive has none
            out.uvs.resize(out.positions.len(), [0.0, 0.0]);
            match reader.read_indices() {
                Some(indices) => {
                    for i in indices.into_u32() {
                        if i as usize >= count {
                            bail!("index {} out of range for {} vertices", i, count);
                        }
                        out.indices.push(base + i);
                    }
                }
                None => out.indices.extend(base..base + count as u32),
            }
        }
    }
    for child in node.children() {
        append_node(&child, transform, buffers, out)?;
    }
    Ok(())
}

/// Decode the baked lightmap (any format enabled on the `image` crate) to RGBA8.
pub fn decode_texture(bytes: &[u8]) -> anyhow::Result<TextureData> {
    let image = image::load_from_memory(bytes)
        .context("failed to decode baked texture")?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(TextureData {
        width,
        height,
        rgba: image.into_raw(),
    })
}
