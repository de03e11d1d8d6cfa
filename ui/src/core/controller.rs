//! Per-navbar composition of the tracker, scroller and menu over one host.
//!
//! A `NavController` is owned by a single navbar instance. `attach` wires the
//! host's scroll notifications through a [`FrameCoalescer`] into the tracker
//! and pushes every evaluated state to the caller; `teardown` undoes all of it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::config::SiteConfig;
use super::frame::FrameCoalescer;
use super::host::{Host, ListenerId};
use super::menu::{Menu, MenuState};
use super::nav::NavItems;
use super::scroller::{AnimationHandle, SmoothScroller};
use super::tracker::{ScrollState, ScrollTracker};

pub struct NavController<H: Host + 'static> {
    host: Rc<H>,
    items: Rc<NavItems>,
    tracker: Rc<RefCell<ScrollTracker>>,
    scroller: SmoothScroller,
    menu: Cell<Menu>,
    frames: FrameCoalescer<H>,
    listener: Cell<Option<ListenerId>>,
}

impl<H: Host + 'static> NavController<H> {
    pub fn new(host: Rc<H>, config: &SiteConfig) -> Self {
        Self {
            frames: FrameCoalescer::new(host.clone()),
            host,
            tracker: Rc::new(RefCell::new(ScrollTracker::new(
                &config.items,
                config.tracker,
            ))),
            items: Rc::new(config.items.clone()),
            scroller: SmoothScroller::new(config.scroller),
            menu: Cell::new(Menu::default()),
            listener: Cell::new(None),
        }
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn items(&self) -> &NavItems {
        &self.items
    }

    /// Start listening for scroll notifications. Each frame with pending
    /// notifications evaluates once and hands the new state to `on_change`.
    /// Also evaluates immediately so the initial offset is reflected.
    /// Attaching twice is a no-op.
    pub fn attach<F>(&self, on_change: F) -> ScrollState
    where
        F: Fn(ScrollState) + 'static,
    {
        if self.listener.get().is_some() {
            return self.state();
        }

        let on_change = Rc::new(on_change);
        let host = self.host.clone();
        let items = self.items.clone();
        let tracker = self.tracker.clone();
        let frames = self.frames.clone();

        let id = self.host.listen_scroll(Rc::new(move || {
            let host = host.clone();
            let items = items.clone();
            let tracker = tracker.clone();
            let on_change = on_change.clone();
            frames.notify(move |_| {
                let state = evaluate(&*host, &items, &tracker);
                on_change(state);
            });
        }));
        self.listener.set(Some(id));
        tracing::debug!(items = self.items.len(), "navbar attached");

        self.evaluate_now()
    }

    pub fn is_attached(&self) -> bool {
        self.listener.get().is_some()
    }

    /// Evaluate against the host's current offset right away.
    pub fn evaluate_now(&self) -> ScrollState {
        evaluate(&*self.host, &self.items, &self.tracker)
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state().clone()
    }

    pub fn menu(&self) -> MenuState {
        self.menu.get().state()
    }

    pub fn toggle_menu(&self) -> MenuState {
        let mut menu = self.menu.get();
        let state = menu.toggle();
        self.menu.set(menu);
        self.host.set_scroll_lock(state.is_open());
        state
    }

    /// Smooth-scroll to the anchor of `id` and close the menu. When the anchor
    /// is not rendered nothing happens and `None` is returned.
    pub fn navigate_to(&self, id: &str) -> Option<AnimationHandle> {
        let Some(target) = self.host.measure(id) else {
            tracing::debug!(anchor = id, "navigation target not rendered");
            return None;
        };

        let handle = self.scroller.scroll_to(&self.host, target.top_offset);

        let mut menu = self.menu.get();
        if menu.select() {
            self.host.set_scroll_lock(false);
        }
        self.menu.set(menu);
        Some(handle)
    }

    /// Remove the scroll listener, drop the pending frame, stop any animation
    /// and release the scroll lock. Safe to call more than once.
    pub fn teardown(&self) {
        if let Some(id) = self.listener.take() {
            self.host.unlisten_scroll(id);
            tracing::debug!("navbar detached");
        }
        self.frames.cancel();
        self.scroller.cancel();
        self.menu.set(Menu::default());
        self.host.set_scroll_lock(false);
    }
}

impl<H: Host + 'static> Drop for NavController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn evaluate<H: Host>(host: &H, items: &NavItems, tracker: &RefCell<ScrollTracker>) -> ScrollState {
    let y = host.scroll_y();
    tracker
        .borrow_mut()
        .evaluate(y, items, |id| host.measure(id))
        .clone()
}
