//! Input records produced by host event handlers and the pointer state they
//! feed. Handlers only append to an [`InputQueue`]; the scene drains it at the
//! start of each frame so a handler firing mid-frame cannot tear state.

use crate::field::Viewport;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::collections::VecDeque;

pub type TouchId = i32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub pos: Vec2,
}

pub type TouchList = SmallVec<[TouchPoint; 4]>;
pub type TouchIds = SmallVec<[TouchId; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove(Vec2),
    /// Every contact currently on the surface, in event order.
    TouchMove(TouchList),
    /// Contacts that lifted.
    TouchEnd(TouchIds),
    Resize(Viewport),
}

#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, ev: InputEvent) {
        self.pending.push_back(ev);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Remove and yield every pending event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }
}

/// Where the primary pointer is now, where it was last frame, and every
/// active touch contact.
#[derive(Clone, Debug, Default)]
pub struct PointerState {
    pub current: Vec2,
    pub previous: Vec2,
    pub touches: FnvHashMap<TouchId, Vec2>,
}

impl PointerState {
    /// Apply one pointer or touch record. Resize records are ignored here.
    pub fn apply(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMove(p) => self.current = *p,
            InputEvent::TouchMove(list) => {
                for t in list {
                    self.touches.insert(t.id, t.pos);
                }
                if let Some(first) = list.first() {
                    self.current = first.pos;
                }
            }
            InputEvent::TouchEnd(ids) => {
                for id in ids {
                    self.touches.remove(id);
                }
            }
            InputEvent::Resize(_) => {}
        }
    }

    /// Distance the primary pointer travelled since the previous frame.
    #[inline]
    pub fn movement(&self) -> f32 {
        self.current.distance(self.previous)
    }

    /// Close out the frame: the current position becomes the previous one.
    #[inline]
    pub fn commit(&mut self) {
        self.previous = self.current;
    }

    /// Active touch positions in ascending id order so frames are reproducible.
    pub fn touch_positions(&self) -> SmallVec<[Vec2; 4]> {
        let mut ids: SmallVec<[TouchId; 4]> = self.touches.keys().copied().collect();
        ids.sort_unstable();
        ids.iter().filter_map(|id| self.touches.get(id).copied()).collect()
    }
}
