use crate::dom;
use crate::events;
use crate::host::{FrameCallback, WebHost};
use crate::render::CanvasSurface;
use instant::Instant;
use portfolio_core::{Animator, FieldConfig, Theme};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub type WebAnimator = Animator<WebHost, CanvasSurface>;

/// Wire callbacks, resolve the theme and start the background on `canvas`.
///
/// A canvas without a 2D context yields an inert animator rather than an error.
pub fn mount(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Rc<RefCell<WebAnimator>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let animator = Rc::new(RefCell::new(Animator::new(
        WebHost::new(window.clone()),
        FieldConfig::default(),
    )));
    let weak = Rc::downgrade(&animator);
    let callbacks = events::build_input_callbacks(&weak, &window);
    {
        let mut a = animator.borrow_mut();
        let host = a.host_mut();
        host.pointer_move = Some(callbacks.pointer_move);
        host.touch_move = Some(callbacks.touch_move);
        host.touch_end = Some(callbacks.touch_end);
        host.resize = Some(callbacks.resize);
        host.frame = Some(frame_callback(&weak));
    }

    let surface = CanvasSurface::from_canvas(canvas);
    let viewport = dom::viewport(&window);
    let theme = Theme::resolve(|token| dom::css_token(&window, token));
    let seed: u64 = rand::random();
    if !animator
        .borrow_mut()
        .mount(surface, viewport, theme, seed)
    {
        log::warn!("[fluid] background not started");
    }
    Ok(animator)
}

fn frame_callback(animator: &Weak<RefCell<WebAnimator>>) -> FrameCallback {
    let w = animator.clone();
    let started = Instant::now();
    Closure::wrap(Box::new(move |_timestamp: f64| {
        let Some(rc) = w.upgrade() else {
            return;
        };
        let Ok(mut a) = rc.try_borrow_mut() else {
            log::warn!("[fluid] frame skipped: animator busy");
            return;
        };
        a.on_frame(started.elapsed().as_secs_f64());
    }) as Box<dyn FnMut(f64)>)
}
