use portfolio_core::{Host, HostError, ListenerKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PointerCallback = Closure<dyn FnMut(web::MouseEvent)>;
pub type TouchCallback = Closure<dyn FnMut(web::TouchEvent)>;
pub type ResizeCallback = Closure<dyn FnMut()>;
pub type FrameCallback = Closure<dyn FnMut(f64)>;

/// Browser window as a [`Host`]. Callbacks are installed once after the
/// animator exists; they stay alive for the host's lifetime so listener
/// removal always finds the same function object.
pub struct WebHost {
    window: web::Window,
    pub(crate) pointer_move: Option<PointerCallback>,
    pub(crate) touch_move: Option<TouchCallback>,
    pub(crate) touch_end: Option<TouchCallback>,
    pub(crate) resize: Option<ResizeCallback>,
    pub(crate) frame: Option<FrameCallback>,
}

impl WebHost {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            pointer_move: None,
            touch_move: None,
            touch_end: None,
            resize: None,
            frame: None,
        }
    }

    fn listener(&self, kind: ListenerKind) -> Option<&js_sys::Function> {
        match kind {
            ListenerKind::PointerMove => self.pointer_move.as_ref().map(|c| c.as_ref().unchecked_ref()),
            ListenerKind::TouchMove => self.touch_move.as_ref().map(|c| c.as_ref().unchecked_ref()),
            ListenerKind::TouchEnd => self.touch_end.as_ref().map(|c| c.as_ref().unchecked_ref()),
            ListenerKind::Resize => self.resize.as_ref().map(|c| c.as_ref().unchecked_ref()),
        }
    }
}

impl Host for WebHost {
    type Frame = i32;

    fn listen(&mut self, kind: ListenerKind) -> Result<(), HostError> {
        let f = self.listener(kind).ok_or(HostError::Unavailable)?;
        self.window
            .add_event_listener_with_callback(kind.event_name(), f)
            .map_err(|e| HostError::Listen(kind.event_name(), format!("{:?}", e)))
    }

    fn unlisten(&mut self, kind: ListenerKind) {
        if let Some(f) = self.listener(kind) {
            _ = self
                .window
                .remove_event_listener_with_callback(kind.event_name(), f);
        }
    }

    fn request_frame(&mut self) -> Option<i32> {
        let f = self.frame.as_ref()?;
        match self.window.request_animation_frame(f.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, frame: i32) {
        _ = self.window.cancel_animation_frame(frame);
    }
}
