//! Platform glue: which [`Host`](super::host::Host) the navbar runs on.
//!
//! On wasm32 the navbar drives the real page through `web-sys`. Everywhere
//! else (SSR, native test runs) it falls back to the in-memory
//! [`HeadlessHost`](super::host::HeadlessHost), which simply never scrolls.

#[cfg(target_arch = "wasm32")]
pub type DefaultHost = browser::BrowserHost;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultHost = super::host::HeadlessHost;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHost;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, HtmlElement};

    use crate::core::host::{FrameCallback, FrameId, Host, ListenerId, ScrollListener};
    use crate::core::tracker::Measurement;

    struct PendingFrame {
        handle: i32,
        // Keeps the JS callback alive until it fires or is cancelled.
        _closure: Closure<dyn FnMut(f64)>,
    }

    /// Host backed by the browser window and document.
    ///
    /// A closure cannot be freed while it is running, so fired frames only
    /// record their id; the closures are released on the next request or
    /// cancellation.
    #[derive(Default)]
    pub struct BrowserHost {
        next_id: Cell<u64>,
        frames: RefCell<HashMap<u64, PendingFrame>>,
        fired: Rc<RefCell<Vec<u64>>>,
        listeners: RefCell<HashMap<u64, Closure<dyn FnMut(web_sys::Event)>>>,
    }

    impl BrowserHost {
        pub fn new() -> Self {
            Self::default()
        }

        fn next_id(&self) -> u64 {
            let id = self.next_id.get().wrapping_add(1);
            self.next_id.set(id);
            id
        }

        fn release_fired(&self) {
            let fired = std::mem::take(&mut *self.fired.borrow_mut());
            if fired.is_empty() {
                return;
            }
            let mut frames = self.frames.borrow_mut();
            for id in fired {
                frames.remove(&id);
            }
        }
    }

    impl Host for BrowserHost {
        fn scroll_y(&self) -> f64 {
            web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0)
        }

        fn set_scroll_y(&self, y: f64) {
            match web_sys::window() {
                Some(window) => window.scroll_to_with_x_and_y(0.0, y),
                None => tracing::warn!("no window; cannot scroll"),
            }
        }

        fn measure(&self, anchor: &str) -> Option<Measurement> {
            let element = web_sys::window()?
                .document()?
                .get_element_by_id(anchor)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(Measurement {
                top_offset: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        }

        fn request_frame(&self, callback: FrameCallback) -> FrameId {
            self.release_fired();

            let id = self.next_id();
            let Some(window) = web_sys::window() else {
                tracing::warn!("no window; dropping frame request");
                return FrameId(id);
            };

            let fired = self.fired.clone();
            let closure = Closure::once(move |timestamp: f64| {
                fired.borrow_mut().push(id);
                callback(timestamp);
            });

            match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                Ok(handle) => {
                    self.frames.borrow_mut().insert(
                        id,
                        PendingFrame {
                            handle,
                            _closure: closure,
                        },
                    );
                }
                Err(err) => tracing::warn!(?err, "requestAnimationFrame failed"),
            }
            FrameId(id)
        }

        fn cancel_frame(&self, id: FrameId) {
            self.release_fired();
            if let Some(frame) = self.frames.borrow_mut().remove(&id.0) {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(frame.handle);
                }
            }
        }

        fn listen_scroll(&self, listener: ScrollListener) -> ListenerId {
            let id = self.next_id();
            let Some(window) = web_sys::window() else {
                tracing::warn!("no window; scroll listener not installed");
                return ListenerId(id);
            };

            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                listener();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(true);

            match window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(()) => {
                    self.listeners.borrow_mut().insert(id, closure);
                }
                Err(err) => tracing::warn!(?err, "failed to add scroll listener"),
            }
            ListenerId(id)
        }

        fn unlisten_scroll(&self, id: ListenerId) {
            let Some(closure) = self.listeners.borrow_mut().remove(&id.0) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }

        fn set_scroll_lock(&self, locked: bool) {
            let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            else {
                return;
            };

            let style = body.style();
            let result = if locked {
                style
                    .set_property("overflow", "hidden")
                    .and_then(|_| style.set_property("padding-right", "0px"))
            } else {
                style
                    .set_property("overflow", "unset")
                    .and_then(|_| style.remove_property("padding-right").map(|_| ()))
            };
            if let Err(err) = result {
                tracing::warn!(?err, locked, "failed to toggle body scroll lock");
            }
        }
    }

    impl Drop for BrowserHost {
        fn drop(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            for (_, frame) in self.frames.borrow_mut().drain() {
                let _ = window.cancel_animation_frame(frame.handle);
            }
            for (_, closure) in self.listeners.borrow_mut().drain() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }
    }
}
