// Host-side tests for mesh role lookup and material parameters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
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

use crate::core::color::Color;
use crate::core::scene::*;

fn named(names: &[(&str, u32)]) -> Vec<(String, u32)> {
    names.iter().map(|(n, id)| (n.to_string(), *id)).collect()
}

fn full_model() -> Vec<(String, u32)> {
    named(&[
        ("bakednomaterial", 1),
        ("poteau002", 2),
        ("poteau005", 3),
        ("Circle", 4),
    ])
}

#[test]
fn resolves_every_role() {
    let meshes = SceneMeshes::resolve(full_model()).expect("all roles present");
    assert_eq!(meshes.baked, 1);
    assert_eq!(meshes.pole_light_a, 2);
    assert_eq!(meshes.pole_light_b, 3);
    assert_eq!(meshes.portal_light, 4);
}

#[test]
fn missing_portal_mesh_fails_the_lookup() {
    let model = named(&[
        ("bakednomaterial", 1),
        ("poteau002", 2),
        ("poteau005", 3),
    ]);
    let err = SceneMeshes::resolve(model).unwrap_err();
    assert_eq!(
        err,
        SceneError::MissingMesh {
            role: MeshRole::PortalLight,
            name: "Circle",
        }
    );
    assert!(err.to_string().contains("`Circle`"));
    assert!(err.to_string().contains("portal light"));
}

#[test]
fn empty_model_reports_the_first_role() {
    let err = SceneMeshes::<u32>::resolve(Vec::new()).unwrap_err();
    assert_eq!(
        err,
        SceneError::MissingMesh {
            role: MeshRole::Baked,
            name: "bakednomaterial",
        }
    );
}

#[test]
fn first_matching_node_wins() {
    let mut model = full_model();
    model.push(("Circle".to_string(), 99));
    model.insert(0, ("poteau005".to_string(), 30));
    let meshes = SceneMeshes::resolve(model).unwrap();
    assert_eq!(meshes.pole_light_b, 30);
    assert_eq!(meshes.portal_light, 4);
}

#[test]
fn unrelated_nodes_are_ignored() {
    let mut model = full_model();
    model.push(("Camera".to_string(), 7));
    model.push(("circle".to_string(), 8));
    let meshes = SceneMeshes::resolve(model).unwrap();
    assert_eq!(meshes.portal_light, 4);
}

#[test]
fn materials_follow_roles() {
    let meshes = SceneMeshes::resolve(full_model()).unwrap();
    let assigned = meshes.assign_materials();
    assert_eq!(assigned[0], (MeshRole::Baked, Material::Baked, &1));
    assert_eq!(assigned[1], (MeshRole::PoleLightA, Material::PoleLight, &2));
    assert_eq!(assigned[2], (MeshRole::PoleLightB, Material::PoleLight, &3));
    assert_eq!(assigned[3], (MeshRole::PortalLight, Material::Portal, &4));
    for (role, _, mesh) in assigned {
        assert_eq!(meshes.get(role), mesh);
    }
}

#[test]
fn default_material_params() {
    let params = MaterialParams::default();
    assert_eq!(params.pole_light_color, Color::from_hex(0xffffe5));
    assert_eq!(params.portal_center_color, Color::from_hex(0xebd6ff));
    assert_eq!(params.portal_border_color, Color::from_hex(0xfdecfe));
    assert_eq!(params.clear_color, Color::from_hex(0x1b1631));
    assert_eq!(params.fog_color, Color::from_hex(0x39247f));
    assert_eq!(params.fireflies_size, 70.0);
    assert!(params.fog_near < params.fog_far);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(3.0), 2.0);
    assert_eq!(clamp_pixel_ratio(0.0), 1.0);
    assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
}
