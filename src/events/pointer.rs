use crate::camera::OrbitCamera;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag: Rc<RefCell<DragState>>,
}

/// Orbit camera input: drag to rotate, secondary or shift+drag to pan, wheel to zoom.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let w = OrbitWiring {
        canvas: canvas.clone(),
        camera,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    suppress_context_menu(&w.canvas);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // One drag at a time; a second finger or button does not steal it
        if w.drag.borrow().active() {
            return;
        }
        let modifier = ev.shift_key() || ev.ctrl_key() || ev.meta_key();
        let Some(mode) = input::drag_mode_for(ev.button(), modifier) else {
            return;
        };
        w.drag.borrow_mut().begin(
            mode,
            ev.pointer_id(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let motion = w.drag.borrow_mut().motion(
            ev.pointer_id(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        let Some((mode, dx, dy)) = motion else {
            return;
        };
        let height = w.canvas.client_height() as f32;
        let mut camera = w.camera.borrow_mut();
        match mode {
            input::DragMode::Rotate => camera.rotate(dx, dy, height),
            input::DragMode::Pan => camera.pan(dx, dy, height),
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag.borrow_mut().end(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        _ = canvas_for_listener
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let direction = input::wheel_direction(ev.delta_y());
        if direction != 0.0 {
            w.camera.borrow_mut().zoom(direction);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn suppress_context_menu(canvas: &web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
