//! Mount/teardown and frame scheduling for one background instance.
//!
//! [`Animator`] owns the scheduling decision; [`FluidScene::tick`] stays a
//! plain function of its inputs. The host (browser window, test double)
//! only registers listeners and hands out frame callbacks.

use crate::color::Theme;
use crate::field::{FieldConfig, Viewport};
use crate::input::{InputEvent, InputQueue};
use crate::scene::{FluidScene, FrameStats};
use crate::surface::DrawSurface;
use smallvec::SmallVec;
use thiserror::Error;

/// Window events the background listens to while mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    TouchMove,
    TouchEnd,
    Resize,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::PointerMove,
        ListenerKind::TouchMove,
        ListenerKind::TouchEnd,
        ListenerKind::Resize,
    ];

    /// DOM event name.
    pub fn event_name(&self) -> &'static str {
        match self {
            ListenerKind::PointerMove => "mousemove",
            ListenerKind::TouchMove => "touchmove",
            ListenerKind::TouchEnd => "touchend",
            ListenerKind::Resize => "resize",
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("could not register `{0}` listener: {1}")]
    Listen(&'static str, String),
    #[error("host is unavailable")]
    Unavailable,
}

/// Platform services the animator needs.
pub trait Host {
    type Frame: Copy;

    fn listen(&mut self, kind: ListenerKind) -> Result<(), HostError>;
    fn unlisten(&mut self, kind: ListenerKind);
    /// Schedule one call to the frame callback. `None` if scheduling failed.
    fn request_frame(&mut self) -> Option<Self::Frame>;
    fn cancel_frame(&mut self, frame: Self::Frame);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

pub struct Animator<H: Host, S: DrawSurface> {
    host: H,
    surface: Option<S>,
    scene: Option<FluidScene>,
    queue: InputQueue,
    pending: Option<H::Frame>,
    listening: SmallVec<[ListenerKind; 4]>,
    state: LoopState,
    config: FieldConfig,
}

impl<H: Host, S: DrawSurface> Animator<H, S> {
    pub fn new(host: H, config: FieldConfig) -> Self {
        Self {
            host,
            surface: None,
            scene: None,
            queue: InputQueue::new(),
            pending: None,
            listening: SmallVec::new(),
            state: LoopState::Stopped,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn scene(&self) -> Option<&FluidScene> {
        self.scene.as_ref()
    }

    #[inline]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Seed the scene, register listeners and schedule the first frame.
    ///
    /// Without a surface the background stays inert and `false` is returned.
    /// A listener that fails to register, or a first frame the host refuses,
    /// unwinds the partial setup.
    pub fn mount(&mut self, surface: Option<S>, viewport: Viewport, theme: Theme, seed: u64) -> bool {
        if self.state == LoopState::Running {
            self.unmount();
        }
        let Some(mut surface) = surface else {
            log::warn!("[fluid] no drawing context; background disabled");
            return false;
        };

        for kind in ListenerKind::ALL {
            match self.host.listen(kind) {
                Ok(()) => self.listening.push(kind),
                Err(e) => {
                    log::warn!("[fluid] {e}");
                    self.unmount();
                    return false;
                }
            }
        }

        surface.resize(viewport.width.max(0.0) as u32, viewport.height.max(0.0) as u32);
        let scene = FluidScene::new(viewport, theme, self.config.clone(), seed);
        log::info!(
            "[fluid] mounted {}x{} with {} particles",
            viewport.width,
            viewport.height,
            scene.field.len()
        );
        self.scene = Some(scene);
        self.surface = Some(surface);
        self.queue.clear();
        self.state = LoopState::Running;
        self.schedule();
        if self.state != LoopState::Running {
            self.unmount();
            return false;
        }
        true
    }

    /// Queue an input record for the next frame. Dropped while stopped.
    pub fn push_input(&mut self, ev: InputEvent) {
        if self.state == LoopState::Running {
            self.queue.push(ev);
        }
    }

    /// Frame callback: drain input, tick, reschedule.
    pub fn on_frame(&mut self, time_sec: f64) -> Option<FrameStats> {
        self.pending = None;
        if self.state != LoopState::Running {
            return None;
        }
        let (Some(scene), Some(surface)) = (self.scene.as_mut(), self.surface.as_mut()) else {
            return None;
        };
        let stats = scene.tick(self.queue.drain(), time_sec, surface);
        if stats.reseeded {
            log::debug!("[fluid] reseeded {} particles", stats.particles_drawn);
        }
        self.schedule();
        Some(stats)
    }

    /// Ask the host for the next frame. A refusal ends the loop: the state
    /// drops to `Stopped` so callers do not report a dead loop as running.
    fn schedule(&mut self) {
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("[fluid] could not schedule a frame; loop stopped");
            self.state = LoopState::Stopped;
        }
    }

    /// Cancel the pending frame and remove every listener that was added.
    /// Safe to call any number of times, including after a failed mount.
    pub fn unmount(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.host.cancel_frame(frame);
        }
        for kind in self.listening.drain(..) {
            self.host.unlisten(kind);
        }
        if self.state == LoopState::Running {
            log::info!("[fluid] unmounted");
        }
        self.state = LoopState::Stopped;
        self.scene = None;
        self.surface = None;
        self.queue.clear();
    }
}
