use crate::dom;
use crate::frame::WebAnimator;
use crate::host::{PointerCallback, ResizeCallback, TouchCallback};
use crate::input;
use portfolio_core::InputEvent;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Append `ev` to the animator's queue. Handlers never touch scene state.
fn enqueue(animator: &Weak<RefCell<WebAnimator>>, ev: InputEvent) {
    let Some(rc) = animator.upgrade() else {
        return;
    };
    match rc.try_borrow_mut() {
        Ok(mut a) => a.push_input(ev),
        Err(_) => log::warn!("[input] animator busy; dropped {:?}", ev),
    };
}

/// Build the four window callbacks; the caller hands them to the host.
pub fn build_input_callbacks(
    animator: &Weak<RefCell<WebAnimator>>,
    window: &web::Window,
) -> InputCallbacks {
    let w = animator.clone();
    let pointer_move: PointerCallback = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        enqueue(&w, InputEvent::PointerMove(input::mouse_point(&ev)));
    }) as Box<dyn FnMut(_)>);

    let w = animator.clone();
    let touch_move: TouchCallback = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = input::touch_points(&ev.touches());
        enqueue(&w, InputEvent::TouchMove(touches));
    }) as Box<dyn FnMut(_)>);

    let w = animator.clone();
    let touch_end: TouchCallback = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let ids = input::touch_ids(&ev.changed_touches());
        enqueue(&w, InputEvent::TouchEnd(ids));
    }) as Box<dyn FnMut(_)>);

    let w = animator.clone();
    let window = window.clone();
    let resize: ResizeCallback = Closure::wrap(Box::new(move || {
        enqueue(&w, InputEvent::Resize(dom::viewport(&window)));
    }) as Box<dyn FnMut()>);

    InputCallbacks {
        pointer_move,
        touch_move,
        touch_end,
        resize,
    }
}

pub struct InputCallbacks {
    pub pointer_move: PointerCallback,
    pub touch_move: TouchCallback,
    pub touch_end: TouchCallback,
    pub resize: ResizeCallback,
}
