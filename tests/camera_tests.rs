// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use camera::*;
use constants::*;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn settings(damping_factor: Option<f32>) -> OrbitSettings {
    OrbitSettings {
        fovy_degrees: CAMERA_FOVY_DEGREES,
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
        min_distance: ORBIT_MIN_DISTANCE,
        max_distance: ORBIT_MAX_DISTANCE,
        damping_factor,
        rotate_speed: ORBIT_ROTATE_SPEED,
        zoom_speed: ORBIT_ZOOM_SPEED,
        pan_speed: ORBIT_PAN_SPEED,
    }
}

fn make_camera(damping_factor: Option<f32>) -> OrbitCamera {
    OrbitCamera::new(
        Vec3::from_array(CAMERA_EYE),
        Vec3::from_array(CAMERA_TARGET),
        16.0 / 9.0,
        settings(damping_factor),
    )
}

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn starts_at_the_configured_eye() {
    let camera = make_camera(Some(ORBIT_DAMPING_FACTOR));
    assert!(approx(camera.distance(), 6.0, 1e-5));
    assert!(approx(camera.azimuth(), FRAC_PI_4, 1e-5));
    assert!(approx(camera.polar_angle(), (2.0_f32 / 6.0).acos(), 1e-5));
    assert!(camera.eye().distance(Vec3::new(4.0, 2.0, 4.0)) < 1e-4);
    assert_eq!(camera.target(), Vec3::ZERO);
}

#[test]
fn view_looks_down_negative_z_at_the_target() {
    let camera = make_camera(None);
    let p = camera.view_matrix().transform_point3(camera.target());
    assert!(approx(p.x, 0.0, 1e-4));
    assert!(approx(p.y, 0.0, 1e-4));
    assert!(approx(p.z, -6.0, 1e-4));
}

#[test]
fn zoom_out_is_clamped_to_max_distance() {
    let mut camera = make_camera(Some(ORBIT_DAMPING_FACTOR));
    for _ in 0..100 {
        camera.zoom(1.0);
        camera.update();
    }
    assert!(approx(camera.distance(), ORBIT_MAX_DISTANCE, 1e-5));
}

#[test]
fn zoom_in_stays_positive() {
    let mut camera = make_camera(None);
    for _ in 0..1000 {
        camera.zoom(-1.0);
        camera.update();
    }
    assert!(camera.distance() > 0.0);
    assert!(camera.eye().is_finite());
}

#[test]
fn single_zoom_step_scales_distance() {
    let mut camera = make_camera(None);
    camera.zoom(-1.0);
    camera.update();
    assert!(approx(camera.distance(), 6.0 * 0.95, 1e-4));
    camera.zoom(0.0);
    camera.update();
    assert!(approx(camera.distance(), 6.0 * 0.95, 1e-4));
}

#[test]
fn damped_rotation_converges_to_the_full_drag() {
    let mut camera = make_camera(Some(ORBIT_DAMPING_FACTOR));
    let start = camera.azimuth();
    // A quarter-height drag turns a quarter of a full circle
    camera.rotate(100.0, 0.0, 400.0);
    camera.update();
    let first = start - camera.azimuth();
    assert!(first > 0.0 && first < FRAC_PI_2);
    for _ in 0..400 {
        camera.update();
    }
    assert!(approx(start - camera.azimuth(), FRAC_PI_2, 1e-3));
}

#[test]
fn undamped_rotation_applies_at_once() {
    let mut camera = make_camera(None);
    let start = camera.azimuth();
    camera.rotate(100.0, 0.0, 400.0);
    camera.update();
    assert!(approx(start - camera.azimuth(), FRAC_PI_2, 1e-5));
    camera.update();
    assert!(approx(start - camera.azimuth(), FRAC_PI_2, 1e-5));
}

#[test]
fn polar_angle_stays_off_the_poles() {
    let mut camera = make_camera(None);
    camera.rotate(0.0, 10_000.0, 100.0);
    camera.update();
    assert!(camera.polar_angle() > 0.0 && camera.polar_angle() < PI);
    camera.rotate(0.0, -100_000.0, 100.0);
    camera.update();
    assert!(camera.polar_angle() > 0.0 && camera.polar_angle() < PI);
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn pan_moves_target_and_keeps_distance() {
    let mut camera = make_camera(None);
    camera.pan(50.0, 20.0, 600.0);
    camera.update();
    assert!(camera.target().length() > 0.0);
    assert!(approx(camera.distance(), 6.0, 1e-4));
    assert!(approx(camera.eye().distance(camera.target()), 6.0, 1e-4));
}

#[test]
fn invalid_aspect_is_ignored() {
    let mut camera = make_camera(None);
    let before = camera.projection_matrix();
    camera.set_aspect(0.0);
    camera.set_aspect(f32::NAN);
    assert_eq!(camera.projection_matrix(), before);
    camera.set_aspect(1.0);
    assert_ne!(camera.projection_matrix(), before);
}
