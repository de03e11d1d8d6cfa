//! Host capabilities the navbar core consumes from the rendering layer.
//!
//! The core never touches a DOM directly. Everything it needs (reading and
//! writing the scroll offset, measuring anchors, frame scheduling, scroll
//! notifications and background scroll suppression) goes through [`Host`].
//!
//! Two implementations ship with the crate:
//! - `BrowserHost` (wasm32 only, see `core::platform`) backed by `web-sys`.
//! - [`HeadlessHost`] – an in-memory host with a manually pumped frame queue.
//!   Native / SSR renders use it, and so do the tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::tracker::Measurement;

/// Callback run once before the next repaint; receives the frame timestamp in ms.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Listener invoked for every raw scroll notification.
pub type ScrollListener = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub trait Host {
    /// Current global vertical scroll offset.
    fn scroll_y(&self) -> f64;

    fn set_scroll_y(&self, y: f64);

    /// Position and extent of a named anchor, or `None` when it is not rendered.
    fn measure(&self, anchor: &str) -> Option<Measurement>;

    fn request_frame(&self, callback: FrameCallback) -> FrameId;

    /// Cancelling an unknown or already fired frame is a no-op.
    fn cancel_frame(&self, id: FrameId);

    fn listen_scroll(&self, listener: ScrollListener) -> ListenerId;

    fn unlisten_scroll(&self, id: ListenerId);

    /// Suppress (or restore) background scrolling while the mobile menu is open.
    fn set_scroll_lock(&self, locked: bool);
}

/// In-memory host. Frames only run when pumped with [`HeadlessHost::run_frame`]
/// or [`HeadlessHost::run_until_idle`].
#[derive(Default)]
pub struct HeadlessHost {
    scroll_y: Cell<f64>,
    scroll_locked: Cell<bool>,
    clock_ms: Cell<f64>,
    next_id: Cell<u64>,
    layout: RefCell<HashMap<String, Measurement>>,
    frames: RefCell<Vec<(FrameId, FrameCallback)>>,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    writes: RefCell<Vec<f64>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or move) an anchor in the fake layout.
    pub fn set_layout(&self, anchor: &str, top_offset: f64, height: f64) {
        self.layout.borrow_mut().insert(
            anchor.to_string(),
            Measurement {
                top_offset,
                height,
            },
        );
    }

    pub fn remove_layout(&self, anchor: &str) {
        self.layout.borrow_mut().remove(anchor);
    }

    /// Simulate the user scrolling: move the offset and notify every listener.
    pub fn scroll_by_user(&self, y: f64) {
        self.scroll_y.set(y);
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Run every frame queued so far with the given timestamp. Frames requested
    /// while running are queued for the next pump. Returns how many ran.
    pub fn run_frame(&self, timestamp_ms: f64) -> usize {
        self.clock_ms.set(timestamp_ms);
        let due = std::mem::take(&mut *self.frames.borrow_mut());
        let count = due.len();
        for (_, callback) in due {
            callback(timestamp_ms);
        }
        count
    }

    /// Advance the clock by `step_ms` and run the queued frames.
    pub fn advance(&self, step_ms: f64) -> usize {
        self.run_frame(self.clock_ms.get() + step_ms)
    }

    /// Pump frames at a fixed cadence until the queue drains or `max_frames`
    /// pumps have happened. Returns the number of pumps.
    pub fn run_until_idle(&self, step_ms: f64, max_frames: usize) -> usize {
        let mut pumps = 0;
        while pumps < max_frames && self.pending_frames() > 0 {
            self.advance(step_ms);
            pumps += 1;
        }
        pumps
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }

    /// Every offset written through [`Host::set_scroll_y`], oldest first.
    pub fn scroll_writes(&self) -> Vec<f64> {
        self.writes.borrow().clone()
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);
        id
    }
}

impl Host for HeadlessHost {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
        self.writes.borrow_mut().push(y);
    }

    fn measure(&self, anchor: &str) -> Option<Measurement> {
        self.layout.borrow().get(anchor).copied()
    }

    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let id = FrameId(self.next_id());
        self.frames.borrow_mut().push((id, callback));
        id
    }

    fn cancel_frame(&self, id: FrameId) {
        self.frames.borrow_mut().retain(|(queued, _)| *queued != id);
    }

    fn listen_scroll(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unlisten_scroll(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(known, _)| *known != id);
    }

    fn set_scroll_lock(&self, locked: bool) {
        self.scroll_locked.set(locked);
    }
}
