// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_consistent() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEGREES > 0.0 && CAMERA_FOVY_DEGREES < 180.0);
    let eye = glam::Vec3::from_array(CAMERA_EYE);
    let target = glam::Vec3::from_array(CAMERA_TARGET);
    let distance = eye.distance(target);
    assert!(distance >= ORBIT_MIN_DISTANCE && distance <= ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MAX_DISTANCE < CAMERA_ZFAR);
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fireflies_constants_are_consistent() {
    assert!(FIREFLIES_COUNT <= FIREFLIES_MAX_COUNT);
    assert!(FIREFLIES_SIZE >= FIREFLIES_SIZE_MIN && FIREFLIES_SIZE <= FIREFLIES_SIZE_MAX);
    assert!(FIREFLIES_SIZE_STEP > 0.0);
    assert!(FIREFLIES_EXTENT > 0.0 && FIREFLIES_HEIGHT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fog_and_display_constants() {
    assert!(FOG_NEAR < FOG_FAR);
    assert!(FOG_FAR < CAMERA_ZFAR);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
fn mesh_names_are_distinct() {
    let names = [
        BAKED_MESH_NAME,
        POLE_LIGHT_A_MESH_NAME,
        POLE_LIGHT_B_MESH_NAME,
        PORTAL_LIGHT_MESH_NAME,
    ];
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
