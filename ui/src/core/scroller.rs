//! Smooth in-page scrolling driven by host frame callbacks.
//!
//! Each call to [`SmoothScroller::animate_scroll_to`] starts a new animation
//! and supersedes whatever was running. Animations share a generation counter:
//! a frame whose id no longer matches the counter writes nothing and stops
//! rescheduling, so two animations never fight over the scroll offset.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::easing::{ease_in_out_cubic, progress};
use super::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Height kept clear above the target (the fixed header).
    pub header_offset: f64,
    pub duration_ms: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            duration_ms: 1200.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmoothScroller {
    config: ScrollerConfig,
    generation: Rc<Cell<u64>>,
}

/// Handle to one animation. Dropping it does not stop the animation.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    id: u64,
    generation: Rc<Cell<u64>>,
    finished: Rc<Cell<bool>>,
    target: f64,
}

impl AnimationHandle {
    /// Scroll offset the animation ends on.
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        !self.finished.get() && self.generation.get() == self.id
    }

    pub fn cancel(&self) {
        if self.is_active() {
            self.generation.set(self.id.wrapping_add(1));
        }
    }
}

impl SmoothScroller {
    pub fn new(config: ScrollerConfig) -> Self {
        Self {
            config,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn target_position(&self, target_top_offset: f64) -> f64 {
        target_top_offset - self.config.header_offset
    }

    /// Animate from the host's current offset with the configured duration.
    pub fn scroll_to<H: Host + 'static>(
        &self,
        host: &Rc<H>,
        target_top_offset: f64,
    ) -> AnimationHandle {
        let start_y = host.scroll_y();
        self.animate_scroll_to(host, target_top_offset, start_y, self.config.duration_ms)
    }

    pub fn animate_scroll_to<H: Host + 'static>(
        &self,
        host: &Rc<H>,
        target_top_offset: f64,
        start_y: f64,
        duration_ms: f64,
    ) -> AnimationHandle {
        let id = self.generation.get().wrapping_add(1);
        self.generation.set(id);

        let target = self.target_position(target_top_offset);
        let finished = Rc::new(Cell::new(false));
        tracing::debug!(id, start_y, target, duration_ms, "smooth scroll started");

        Animation {
            id,
            generation: self.generation.clone(),
            finished: finished.clone(),
            host: host.clone(),
            start_y,
            distance: target - start_y,
            target,
            duration_ms,
            started_at: None,
        }
        .schedule();

        AnimationHandle {
            id,
            generation: self.generation.clone(),
            finished,
            target,
        }
    }

    /// Stop whatever animation is in flight.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

struct Animation<H: Host + 'static> {
    id: u64,
    generation: Rc<Cell<u64>>,
    finished: Rc<Cell<bool>>,
    host: Rc<H>,
    start_y: f64,
    distance: f64,
    target: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl<H: Host + 'static> Animation<H> {
    fn schedule(self) {
        let host = self.host.clone();
        host.request_frame(Box::new(move |now| self.step(now)));
    }

    fn step(mut self, now: f64) {
        if self.generation.get() != self.id {
            tracing::debug!(id = self.id, "smooth scroll superseded");
            return;
        }

        let started_at = *self.started_at.get_or_insert(now);
        let t = progress(now - started_at, self.duration_ms);
        if t >= 1.0 {
            self.host.set_scroll_y(self.target);
            self.finished.set(true);
            return;
        }

        self.host
            .set_scroll_y(self.start_y + self.distance * ease_in_out_cubic(t));
        self.schedule();
    }
}
