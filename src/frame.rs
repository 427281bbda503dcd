use crate::camera::OrbitCamera;
use crate::core::{AnimationScalars, FrameAnimator, MaterialParams};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub materials: Rc<RefCell<MaterialParams>>,

    pub animator: FrameAnimator,
    pub scalars: AnimationScalars,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.animator.tick(&mut self.scalars);

        let (width, height) = (self.canvas.width(), self.canvas.height());
        self.gpu.resize_if_needed(width, height);

        let (view, projection) = {
            let mut camera = self.camera.borrow_mut();
            if height > 0 {
                camera.set_aspect(width as f32 / height as f32);
            }
            camera.update();
            (camera.view_matrix(), camera.projection_matrix())
        };

        let params = self.materials.borrow();
        let inputs = render::FrameInputs {
            view,
            projection,
            scalars: self.scalars,
            params: &params,
        };
        if let Err(e) = self.gpu.render(&inputs) {
            log::error!("render error: {:?}", e);
        }

        if self.animator.ticks() == 1 {
            log::info!("[frame] first frame at t={:.3}s", self.animator.elapsed());
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    params: &MaterialParams,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, params).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
