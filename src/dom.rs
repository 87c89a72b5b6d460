use crate::input;
use portfolio_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport(window: &web::Window) -> Viewport {
    input::viewport_from_inner(
        window.inner_width().ok().and_then(|v| v.as_f64()),
        window.inner_height().ok().and_then(|v| v.as_f64()),
    )
}

/// Raw value of a CSS custom property on `<html>`, if the page defines one.
pub fn css_token(window: &web::Window, name: &str) -> Option<String> {
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    style
        .get_property_value(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// `offsetTop`/`offsetHeight` of the element with `id`.
pub fn section_geometry(document: &web::Document, id: &str) -> Option<(f32, f32)> {
    let el = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    Some((el.offset_top() as f32, el.offset_height() as f32))
}
