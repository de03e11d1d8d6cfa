//! Per-frame coalescing of scroll notifications.
//!
//! Browsers fire `scroll` far more often than they paint. The coalescer keeps
//! at most one frame request outstanding: every notification that arrives
//! while a frame is pending is absorbed, and the work runs once per frame
//! against whatever the host reports at that moment (last value wins).

use std::cell::Cell;
use std::rc::Rc;

use super::host::{FrameId, Host};

pub struct FrameCoalescer<H: Host + 'static> {
    host: Rc<H>,
    pending: Rc<Cell<Option<FrameId>>>,
}

impl<H: Host + 'static> Clone for FrameCoalescer<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<H: Host + 'static> FrameCoalescer<H> {
    pub fn new(host: Rc<H>) -> Self {
        Self {
            host,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Schedule `work` for the next frame unless a frame is already pending.
    /// Returns `true` when a new frame was requested.
    pub fn notify<F>(&self, work: F) -> bool
    where
        F: FnOnce(f64) + 'static,
    {
        if self.pending.get().is_some() {
            return false;
        }

        let pending = self.pending.clone();
        let id = self.host.request_frame(Box::new(move |now| {
            pending.set(None);
            work(now);
        }));
        self.pending.set(Some(id));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Drop the outstanding frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
    }
}
