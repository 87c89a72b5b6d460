#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod render;
mod scroll;

use frame::WebAnimator;
use portfolio_core::LoopState;
use scroll::SectionWatch;

#[inline]
fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:?}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    Ok(())
}

/// Interactive particle background bound to one canvas.
///
/// Create it when the page mounts and call `unmount` (or `free`) when it
/// goes away; each instance owns its own particles and listeners.
#[wasm_bindgen]
pub struct FluidBackground {
    animator: Rc<RefCell<WebAnimator>>,
}

#[wasm_bindgen]
impl FluidBackground {
    pub fn mount(canvas: web::HtmlCanvasElement) -> Result<FluidBackground, JsValue> {
        let animator = frame::mount(&canvas).map_err(js_err)?;
        Ok(FluidBackground { animator })
    }

    /// Mount on the canvas with `id`, or `#wave-background` when omitted.
    pub fn mount_by_id(id: Option<String>) -> Result<FluidBackground, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let id = id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
        let canvas = dom::canvas_by_id(&document, &id).map_err(js_err)?;
        Self::mount(canvas)
    }

    pub fn is_running(&self) -> bool {
        self.animator
            .try_borrow()
            .map(|a| a.state() == LoopState::Running)
            .unwrap_or(false)
    }

    pub fn particle_count(&self) -> usize {
        self.animator
            .try_borrow()
            .ok()
            .and_then(|a| a.scene().map(|s| s.field.len()))
            .unwrap_or(0)
    }

    /// Stop the loop and remove every listener. Safe to call repeatedly.
    pub fn unmount(&self) {
        match self.animator.try_borrow_mut() {
            Ok(mut a) => a.unmount(),
            Err(_) => log::warn!("[fluid] unmount while a frame is running"),
        }
    }
}

impl Drop for FluidBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Tracks which page section is on screen and reveals `[data-reveal]`
/// elements as they scroll into view.
#[wasm_bindgen]
pub struct SectionTracker {
    watch: Rc<RefCell<SectionWatch>>,
}

#[wasm_bindgen]
impl SectionTracker {
    #[wasm_bindgen(constructor)]
    pub fn new(section_ids: Vec<String>) -> Result<SectionTracker, JsValue> {
        let watch = SectionWatch::attach(&section_ids).map_err(js_err)?;
        Ok(SectionTracker { watch })
    }

    pub fn active_section(&self) -> Option<String> {
        self.watch
            .borrow()
            .tracker
            .active_section()
            .map(str::to_owned)
    }

    pub fn direction(&self) -> String {
        self.watch.borrow().tracker.direction().as_str().to_string()
    }

    pub fn scroll_y(&self) -> f64 {
        self.watch.borrow().tracker.scroll_y() as f64
    }

    pub fn is_scrolled(&self) -> bool {
        self.watch.borrow().tracker.is_scrolled()
    }

    /// Smooth-scroll to a registered section. `false` if the id is unknown.
    pub fn scroll_to(&self, id: &str) -> bool {
        self.watch.borrow().scroll_to(id)
    }

    pub fn dispose(&self) {
        if let Ok(mut w) = self.watch.try_borrow_mut() {
            w.detach();
        }
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.dispose();
    }
}
