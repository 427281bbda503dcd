// Host-side tests for model decoding and mesh role lookup on decoded nodes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod assets {
    include!("../src/assets.rs");
}
mod core {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::assets::*;
use crate::core::scene::*;

/// One triangle, indexed, with UVs; instanced by a node per `(name, translation)`.
fn triangle_glb(nodes: &[(&str, [f32; 3])]) -> Vec<u8> {
    let mut bin = Vec::new();
    for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for uv in [[0.0f32, 0.0], [1.0, 0.0], [0.0, 1.0]] {
        for c in uv {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in [0u16, 1, 2] {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    let bin_len = bin.len();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let node_json: Vec<String> = nodes
        .iter()
        .map(|(name, t)| {
            format!(
                r#"{{"name":"{}","mesh":0,"translation":[{},{},{}]}}"#,
                name, t[0], t[1], t[2]
            )
        })
        .collect();
    let scene_nodes: Vec<String> = (0..nodes.len()).map(|i| i.to_string()).collect();
    let json = format!(
        r#"{{
  "asset": {{"version": "2.0"}},
  "scene": 0,
  "scenes": [{{"nodes": [{scene_nodes}]}}],
  "nodes": [{nodes}],
  "meshes": [{{"primitives": [{{"attributes": {{"POSITION": 0, "TEXCOORD_0": 1}}, "indices": 2}}]}}],
  "buffers": [{{"byteLength": {bin_len}}}],
  "bufferViews": [
    {{"buffer": 0, "byteOffset": 0, "byteLength": 36, "target": 34962}},
    {{"buffer": 0, "byteOffset": 36, "byteLength": 24, "target": 34962}},
    {{"buffer": 0, "byteOffset": 60, "byteLength": 6, "target": 34963}}
  ],
  "accessors": [
    {{"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3", "min": [0, 0, 0], "max": [1, 1, 0]}},
    {{"bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC2"}},
    {{"bufferView": 2, "componentType": 5123, "count": 3, "type": "SCALAR"}}
  ]
}}"#,
        scene_nodes = scene_nodes.join(","),
        nodes = node_json.join(","),
        bin_len = bin_len,
    );
    let mut json = json.into_bytes();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&json);
    glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"BIN\0");
    glb.extend_from_slice(&bin);
    glb
}

#[test]
fn decodes_one_mesh_per_root_node() {
    let glb = triangle_glb(&[("bakednomaterial", [0.0, 0.0, 0.0]), ("Circle", [0.0, 2.0, 0.0])]);
    let meshes = decode_model(&glb).expect("valid model");
    assert_eq!(meshes.len(), 2);

    let baked = &meshes[0];
    assert_eq!(baked.name, "bakednomaterial");
    assert_eq!(baked.positions, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(baked.uvs, vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    assert_eq!(baked.indices, vec![0, 1, 2]);
    assert!(!baked.is_empty());

    let portal = &meshes[1];
    assert_eq!(portal.name, "Circle");
    assert_eq!(portal.positions[0], [0.0, 2.0, 0.0]);
    assert_eq!(portal.positions[2], [0.0, 3.0, 0.0]);
}

#[test]
fn decoded_model_without_pole_lights_fails_lookup() {
    let glb = triangle_glb(&[("bakednomaterial", [0.0, 0.0, 0.0]), ("Circle", [0.0, 2.0, 0.0])]);
    let meshes = decode_model(&glb).unwrap();
    let err = SceneMeshes::resolve(meshes.into_iter().map(|m| (m.name.clone(), m))).unwrap_err();
    assert_eq!(
        err,
        SceneError::MissingMesh {
            role: MeshRole::PoleLightA,
            name: "poteau002",
        }
    );
}

#[test]
fn decoded_full_model_resolves() {
    let glb = triangle_glb(&[
        ("bakednomaterial", [0.0, 0.0, 0.0]),
        ("poteau002", [1.0, 0.0, 0.0]),
        ("poteau005", [-1.0, 0.0, 0.0]),
        ("Circle", [0.0, 2.0, 0.0]),
    ]);
    let meshes = decode_model(&glb).unwrap();
    let scene = SceneMeshes::resolve(meshes.into_iter().map(|m| (m.name.clone(), m))).unwrap();
    assert_eq!(scene.pole_light_a.positions[0], [1.0, 0.0, 0.0]);
    assert_eq!(scene.pole_light_b.positions[0], [-1.0, 0.0, 0.0]);
    for (_, material, mesh) in scene.assign_materials() {
        assert!(!mesh.is_empty());
        if mesh.name == "Circle" {
            assert_eq!(material, Material::Portal);
        }
    }
}

#[test]
fn rejects_garbage_bytes() {
    let err = decode_model(b"not a model").unwrap_err();
    assert!(err.to_string().contains("glTF"));
}

#[test]
fn rejects_garbage_texture() {
    assert!(decode_texture(&[0xff, 0xd8, 0x00, 0x01]).is_err());
}
