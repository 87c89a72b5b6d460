//! Page section tracking: which section sits under the middle of the
//! viewport, which way the page is scrolling, and one-shot reveal latches
//! for elements entering view.

use crate::constants::{REVEAL_THRESHOLD, SCROLLED_THRESHOLD};
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    scroll_y: f32,
    direction: ScrollDirection,
    active: Option<usize>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollTracker {
    pub fn new(initial_scroll_y: f32) -> Self {
        Self {
            sections: Vec::new(),
            scroll_y: initial_scroll_y,
            direction: ScrollDirection::Down,
            active: None,
        }
    }

    /// Add a section. Returns `false` if the id is already registered.
    pub fn register_section(&mut self, id: &str, top: f32, height: f32) -> bool {
        if self.sections.iter().any(|s| s.id == id) {
            return false;
        }
        self.sections.push(Section {
            id: id.to_string(),
            top,
            height,
        });
        true
    }

    /// Update a section's geometry after layout changed.
    pub fn refresh(&mut self, id: &str, top: f32, height: f32) {
        if let Some(s) = self.sections.iter_mut().find(|s| s.id == id) {
            s.top = top;
            s.height = height;
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Record a new scroll offset and recompute direction and active section.
    ///
    /// The active section is the first one containing the viewport midline;
    /// when none does the previous answer is kept.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) {
        self.direction = if scroll_y > self.scroll_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.scroll_y = scroll_y;
        let middle = scroll_y + viewport_height / 2.0;
        if let Some(i) = self.sections.iter().position(|s| s.contains(middle)) {
            self.active = Some(i);
        }
    }

    #[inline]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.sections.get(i))
            .map(|s| s.id.as_str())
    }

    /// Offset to scroll to so that `id` starts at the top of the viewport.
    pub fn scroll_target(&self, id: &str) -> Option<f32> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }
}

/// Fraction of an element's height inside the viewport, given its top edge
/// relative to the viewport.
pub fn visible_ratio(top: f32, height: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Reveal-once latches keyed by element id.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f32,
    revealed: FnvHashSet<String>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: FnvHashSet::default(),
        }
    }

    /// Feed the element's current visible fraction. Returns `true` only on
    /// the observation that first crosses the threshold.
    pub fn observe(&mut self, id: &str, ratio: f32) -> bool {
        if self.is_revealed(id) {
            return false;
        }
        if ratio >= self.threshold {
            self.revealed.insert(id.to_string());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
