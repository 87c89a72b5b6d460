use crate::constants::*;
use crate::dom;
use portfolio_core::{visible_ratio, RevealTracker, ScrollTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll/resize wiring around [`ScrollTracker`] and [`RevealTracker`].
pub struct SectionWatch {
    window: web::Window,
    document: web::Document,
    pub(crate) tracker: ScrollTracker,
    reveal: RevealTracker,
    on_scroll: Option<Closure<dyn FnMut()>>,
    on_resize: Option<Closure<dyn FnMut()>>,
    listening: bool,
}

impl SectionWatch {
    pub fn attach(section_ids: &[String]) -> anyhow::Result<Rc<RefCell<SectionWatch>>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let mut tracker = ScrollTracker::new(scroll_y(&window));
        for id in section_ids {
            match dom::section_geometry(&document, id) {
                Some((top, height)) => {
                    tracker.register_section(id, top, height);
                }
                None => log::warn!("[sections] #{id} not found"),
            }
        }
        let watch = Rc::new(RefCell::new(SectionWatch {
            window: window.clone(),
            document,
            tracker,
            reveal: RevealTracker::default(),
            on_scroll: None,
            on_resize: None,
            listening: false,
        }));

        let weak = Rc::downgrade(&watch);
        let on_scroll = Closure::wrap(Box::new(move || {
            if let Some(rc) = weak.upgrade() {
                if let Ok(mut w) = rc.try_borrow_mut() {
                    w.update();
                }
            }
        }) as Box<dyn FnMut()>);
        let weak = Rc::downgrade(&watch);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(rc) = weak.upgrade() {
                if let Ok(mut w) = rc.try_borrow_mut() {
                    w.refresh_sections();
                    w.update();
                }
            }
        }) as Box<dyn FnMut()>);

        {
            let mut w = watch.borrow_mut();
            let added = window
                .add_event_listener_with_callback(SCROLL_EVENT, on_scroll.as_ref().unchecked_ref())
                .and_then(|_| {
                    window.add_event_listener_with_callback(
                        RESIZE_EVENT,
                        on_resize.as_ref().unchecked_ref(),
                    )
                });
            w.on_scroll = Some(on_scroll);
            w.on_resize = Some(on_resize);
            w.listening = true;
            if let Err(e) = added {
                w.detach();
                return Err(anyhow::anyhow!("could not listen for scroll: {:?}", e));
            }
            w.update();
        }
        log::info!("[sections] tracking {} sections", section_ids.len());
        Ok(watch)
    }

    /// Re-read scroll position, pick the active section and reveal anything
    /// that came into view.
    pub fn update(&mut self) {
        let height = dom::viewport(&self.window).height;
        let before = self.tracker.active_section().map(str::to_owned);
        self.tracker.on_scroll(scroll_y(&self.window), height);
        let after = self.tracker.active_section();
        if after != before.as_deref() {
            if let (Some(id), Some(root)) = (after, self.document.document_element()) {
                _ = root.set_attribute(ACTIVE_SECTION_ATTR, id);
            }
        }
        self.reveal_visible(height);
    }

    fn reveal_visible(&mut self, viewport_height: f32) {
        let Ok(nodes) = self.document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let key = match el.get_attribute(REVEAL_KEY_ATTR) {
                Some(k) if !k.is_empty() => k,
                _ => el.id(),
            };
            if key.is_empty() {
                continue;
            }
            let rect = el.get_bounding_client_rect();
            let ratio = visible_ratio(rect.top() as f32, rect.height() as f32, viewport_height);
            if self.reveal.observe(&key, ratio) {
                _ = el.class_list().add_1(REVEALED_CLASS);
            }
        }
    }

    pub fn refresh_sections(&mut self) {
        let ids: Vec<String> = self.tracker.sections().iter().map(|s| s.id.clone()).collect();
        for id in ids {
            if let Some((top, height)) = dom::section_geometry(&self.document, &id) {
                self.tracker.refresh(&id, top, height);
            }
        }
    }

    pub fn scroll_to(&self, id: &str) -> bool {
        let Some(top) = self.tracker.scroll_target(id) else {
            return false;
        };
        let opts = web::ScrollToOptions::new();
        opts.set_top(top as f64);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
        true
    }

    /// Remove both listeners. Idempotent.
    pub fn detach(&mut self) {
        if !self.listening {
            return;
        }
        if let Some(f) = &self.on_scroll {
            _ = self
                .window
                .remove_event_listener_with_callback(SCROLL_EVENT, f.as_ref().unchecked_ref());
        }
        if let Some(f) = &self.on_resize {
            _ = self
                .window
                .remove_event_listener_with_callback(RESIZE_EVENT, f.as_ref().unchecked_ref());
        }
        self.listening = false;
        log::info!("[sections] detached");
    }
}

#[inline]
fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}
