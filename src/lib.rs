#![cfg(target_arch = "wasm32")]
use crate::camera::{OrbitCamera, OrbitSettings};
use crate::constants::*;
use crate::core::{
    AnimationClock, AnimationScalars, DebugSettings, FireflyField, FrameAnimator, MaterialParams,
    SceneConfig, SceneError, SceneMeshes, BAKED_TEXTURE_PATH, FIREFLIES_EXTENT, FIREFLIES_HEIGHT,
    MODEL_PATH,
};
use anyhow::Context;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, materials: &Rc<RefCell<MaterialParams>>) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let materials_resize = materials.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let ratio = dom::pixel_ratio() as f32;
        let mut params = materials_resize.borrow_mut();
        if params.pixel_ratio != ratio {
            log::info!("[resize] pixel ratio {} -> {}", params.pixel_ratio, ratio);
            params.pixel_ratio = ratio;
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Route every debug setting into the material parameters the renderer reads.
fn bind_settings(settings: &mut DebugSettings, materials: &Rc<RefCell<MaterialParams>>) {
    let m = materials.clone();
    settings
        .fireflies_size
        .on_change(move |v| m.borrow_mut().fireflies_size = *v);
    let m = materials.clone();
    settings
        .portal_center_color
        .on_change(move |c| m.borrow_mut().portal_center_color = *c);
    let m = materials.clone();
    settings
        .portal_border_color
        .on_change(move |c| m.borrow_mut().portal_border_color = *c);
    let m = materials.clone();
    settings
        .clear_color
        .on_change(move |c| m.borrow_mut().clear_color = *c);
}

fn build_fireflies(config: &SceneConfig) -> FireflyField {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            FireflyField::generate(config.fireflies_count, FIREFLIES_EXTENT, FIREFLIES_HEIGHT, &mut rng)
        }
        None => FireflyField::generate(
            config.fireflies_count,
            FIREFLIES_EXTENT,
            FIREFLIES_HEIGHT,
            &mut rand::thread_rng(),
        ),
    }
}

fn build_camera(canvas: &web::HtmlCanvasElement) -> OrbitCamera {
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    OrbitCamera::new(
        Vec3::from_array(CAMERA_EYE),
        Vec3::from_array(CAMERA_TARGET),
        aspect,
        OrbitSettings {
            fovy_degrees: CAMERA_FOVY_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping_factor: Some(ORBIT_DAMPING_FACTOR),
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
        },
    )
}

/// Fetch and decode the model and lightmap, bind each role's mesh and upload it.
async fn load_scene(gpu: &mut render::GpuState<'static>) -> anyhow::Result<()> {
    let model_bytes = dom::fetch_bytes(MODEL_PATH)
        .await
        .with_context(|| format!("loading {}", MODEL_PATH))?;
    let texture_bytes = dom::fetch_bytes(BAKED_TEXTURE_PATH)
        .await
        .with_context(|| format!("loading {}", BAKED_TEXTURE_PATH))?;
    let meshes = assets::decode_model(&model_bytes)?;
    let lightmap = assets::decode_texture(&texture_bytes)?;
    log::info!(
        "[assets] model nodes={} lightmap={}x{}",
        meshes.len(),
        lightmap.width,
        lightmap.height
    );

    let scene = SceneMeshes::resolve(meshes.into_iter().map(|m| (m.name.clone(), m)))?;
    let assigned = scene.assign_materials();
    for (role, _, mesh) in &assigned {
        if mesh.is_empty() {
            return Err(SceneError::EmptyMesh {
                name: mesh.name.clone(),
            })
            .with_context(|| format!("binding the {} mesh", role));
        }
    }
    let uploads: Vec<_> = assigned
        .iter()
        .map(|(_, material, mesh)| (*material, *mesh))
        .collect();
    gpu.upload_model(&uploads, &lightmap);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no `{}` element", CANVAS_SELECTOR))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let config = SceneConfig::from_query(&dom::query_string());
    log::info!(
        "[config] fireflies={} seed={:?} debug={}",
        config.fireflies_count,
        config.seed,
        config.show_debug_panel
    );

    // Materials and their settings exist before any asset arrives
    let materials = Rc::new(RefCell::new(MaterialParams {
        pixel_ratio: dom::pixel_ratio() as f32,
        ..MaterialParams::default()
    }));
    let mut settings = DebugSettings::default();
    bind_settings(&mut settings, &materials);
    let settings = Rc::new(RefCell::new(settings));

    wire_canvas_resize(&canvas, &materials);

    let initial_params = materials.borrow().clone();
    let mut gpu = frame::init_gpu(&canvas, &initial_params)
        .await
        .context("WebGPU init")?;
    load_scene(&mut gpu).await?;

    let field = build_fireflies(&config);
    log::info!("[fireflies] count={}", field.len());
    gpu.upload_fireflies(&field);

    let camera = Rc::new(RefCell::new(build_camera(&canvas)));
    events::wire_orbit_controls(&canvas, camera.clone());

    if config.show_debug_panel {
        panel::mount(&document, settings)?;
        events::wire_panel_toggle_h(&document);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        canvas,
        camera,
        materials,
        animator: FrameAnimator::new(AnimationClock::start()),
        scalars: AnimationScalars::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
