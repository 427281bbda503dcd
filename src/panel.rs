use crate::constants::{DEBUG_PANEL_ID, DEBUG_PANEL_WIDTH_PX};
use crate::core::{Color, DebugSettings, FIREFLIES_SIZE_MAX, FIREFLIES_SIZE_MIN, FIREFLIES_SIZE_STEP};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:0;right:15px;z-index:10;\
    background:rgba(31,31,31,0.92);color:#ebebeb;font:11px system-ui;\
    padding:6px 8px;border-radius:0 0 4px 4px;";
const ROW_STYLE: &str = "display:flex;align-items:center;gap:8px;height:24px;";
const LABEL_STYLE: &str = "flex:0 0 40%;overflow:hidden;text-overflow:ellipsis;white-space:nowrap;";

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Build the debug panel and bind each control to its setting slot.
///
/// Controls write through [`crate::core::Setting::set`], so the slot's
/// clamp and change handlers run exactly as for any other writer.
pub fn mount(document: &web::Document, settings: Rc<RefCell<DebugSettings>>) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("no document body"))?;
    let panel = document.create_element("div").map_err(js_err)?;
    panel.set_id(DEBUG_PANEL_ID);
    panel
        .set_attribute(
            "style",
            &format!("{}width:{}px;", PANEL_STYLE, DEBUG_PANEL_WIDTH_PX),
        )
        .map_err(js_err)?;

    let (size_name, size_value, center, border, clear) = {
        let s = settings.borrow();
        (
            s.fireflies_size.name(),
            *s.fireflies_size.get(),
            (s.portal_center_color.name(), *s.portal_center_color.get()),
            (s.portal_border_color.name(), *s.portal_border_color.get()),
            (s.clear_color.name(), *s.clear_color.get()),
        )
    };

    let size_settings = settings.clone();
    add_range_row(document, &panel, size_name, size_value, move |v| {
        size_settings.borrow_mut().fireflies_size.set(v);
        *size_settings.borrow().fireflies_size.get()
    })?;

    let center_settings = settings.clone();
    add_color_row(document, &panel, center.0, center.1, move |c| {
        center_settings.borrow_mut().portal_center_color.set(c)
    })?;
    let border_settings = settings.clone();
    add_color_row(document, &panel, border.0, border.1, move |c| {
        border_settings.borrow_mut().portal_border_color.set(c)
    })?;
    let clear_settings = settings;
    add_color_row(document, &panel, clear.0, clear.1, move |c| {
        clear_settings.borrow_mut().clear_color.set(c)
    })?;

    body.append_child(&panel).map_err(js_err)?;
    log::info!("[panel] mounted (press h to toggle)");
    Ok(())
}

fn add_row(
    document: &web::Document,
    panel: &web::Element,
    name: &str,
) -> anyhow::Result<web::Element> {
    let row = document.create_element("div").map_err(js_err)?;
    row.set_attribute("style", ROW_STYLE).map_err(js_err)?;
    let label = document.create_element("label").map_err(js_err)?;
    label.set_attribute("style", LABEL_STYLE).map_err(js_err)?;
    label.set_text_content(Some(name));
    row.append_child(&label).map_err(js_err)?;
    panel.append_child(&row).map_err(js_err)?;
    Ok(row)
}

fn create_input(document: &web::Document, kind: &str) -> anyhow::Result<web::HtmlInputElement> {
    let input = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    input.set_type(kind);
    Ok(input)
}

/// Slider plus numeric readout. `on_input` returns the value actually stored.
fn add_range_row(
    document: &web::Document,
    panel: &web::Element,
    name: &str,
    value: f32,
    mut on_input: impl FnMut(f32) -> f32 + 'static,
) -> anyhow::Result<()> {
    let row = add_row(document, panel, name)?;
    let input = create_input(document, "range")?;
    input.set_min(&FIREFLIES_SIZE_MIN.to_string());
    input.set_max(&FIREFLIES_SIZE_MAX.to_string());
    input.set_step(&FIREFLIES_SIZE_STEP.to_string());
    input.set_value(&value.to_string());
    input
        .set_attribute("style", "flex:1 1 auto;")
        .map_err(js_err)?;
    let readout = document.create_element("span").map_err(js_err)?;
    readout.set_text_content(Some(&format!("{:.1}", value)));
    row.append_child(&input).map_err(js_err)?;
    row.append_child(&readout).map_err(js_err)?;

    let input_for_cb = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        match input_for_cb.value().parse::<f32>() {
            Ok(v) if v.is_finite() => {
                let stored = on_input(v);
                readout.set_text_content(Some(&format!("{:.1}", stored)));
            }
            _ => log::warn!("[panel] ignoring non-numeric size {:?}", input_for_cb.value()),
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn add_color_row(
    document: &web::Document,
    panel: &web::Element,
    name: &str,
    value: Color,
    mut on_input: impl FnMut(Color) + 'static,
) -> anyhow::Result<()> {
    let row = add_row(document, panel, name)?;
    let input = create_input(document, "color")?;
    input.set_value(&value.to_string());
    row.append_child(&input).map_err(js_err)?;

    let input_for_cb = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        match Color::parse_hex(&input_for_cb.value()) {
            Some(c) => on_input(c),
            None => log::warn!("[panel] ignoring invalid color {:?}", input_for_cb.value()),
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn panel_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(DEBUG_PANEL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = panel_element(document) {
        el.set_hidden(false);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = panel_element(document) {
        el.set_hidden(true);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    panel_element(document).map(|el| el.hidden()).unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
