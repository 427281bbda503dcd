use crate::core::clamp_pixel_ratio;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `min(devicePixelRatio, 2)`.
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| clamp_pixel_ratio(w.device_pixel_ratio()))
        .unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS size times the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// `location.search` of the page, empty when unavailable.
pub fn query_string() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Fetch a same-origin asset as raw bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {} failed: {:?}", url, e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("fetch {} returned {:?}", url, e))?;
    if !response.ok() {
        return Err(anyhow!("fetch {} failed with HTTP {}", url, response.status()));
    }
    let promise = response
        .array_buffer()
        .map_err(|e| anyhow!("read body of {}: {:?}", url, e))?;
    let buffer = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("read body of {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
