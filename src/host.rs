use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Key name the escape listener dispatches on.
pub const ESCAPE_KEY: &str = "Escape";

/// Identifier for a registered escape-key listener.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(pub u64);

/// Identifier for a scheduled one-shot timer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerId(pub u64);

/// Host-environment capability covering the document-level state the dialog
/// touches: the scroll lock, the escape-key listener registry and one-shot
/// timers. The widget never reaches for globals directly; everything goes
/// through this trait so tests can substitute a recording fake.
pub trait HostEnv {
    /// Suppress background scrolling. Acquisitions nest; the document style
    /// is restored when the depth returns to zero.
    fn lock_scroll(&self);

    /// Release one scroll-lock acquisition. Releasing with no acquisition
    /// outstanding is harmless.
    fn unlock_scroll(&self);

    /// Register an escape-key listener. `notify` fires once per Escape press
    /// until the listener is removed.
    fn listen_escape(&self, notify: Rc<dyn Fn()>) -> ListenerId;

    fn unlisten_escape(&self, id: ListenerId);

    /// Schedule `action` to run once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> TimerId;

    /// Cancel a scheduled action. Cancelling after it fired is a no-op.
    fn cancel(&self, id: TimerId);
}

/// Holds the scroll lock for its lifetime; the release runs on drop, so it
/// happens on every exit path including component teardown.
pub struct ScrollLockGuard {
    env: Rc<dyn HostEnv>,
}

impl ScrollLockGuard {
    pub fn acquire(env: Rc<dyn HostEnv>) -> Self {
        env.lock_scroll();
        Self { env }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.env.unlock_scroll();
    }
}

/// Keeps an escape-key listener registered for its lifetime. Construction
/// and drop form the matched add/remove pair, so re-renders cannot leak
/// duplicate listeners.
pub struct EscapeListenerGuard {
    env: Rc<dyn HostEnv>,
    id: ListenerId,
}

impl EscapeListenerGuard {
    pub fn register(env: Rc<dyn HostEnv>, notify: Rc<dyn Fn()>) -> Self {
        let id = env.listen_escape(notify);
        Self { env, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for EscapeListenerGuard {
    fn drop(&mut self) {
        self.env.unlisten_escape(self.id);
    }
}

/// A scheduled one-shot action that is cancelled if the guard is dropped
/// before it fires.
pub struct DeferredFocusGuard {
    env: Rc<dyn HostEnv>,
    id: TimerId,
}

impl DeferredFocusGuard {
    pub fn schedule(env: Rc<dyn HostEnv>, delay_ms: u32, action: Box<dyn FnOnce()>) -> Self {
        let id = env.schedule(delay_ms, action);
        Self { env, id }
    }
}

impl Drop for DeferredFocusGuard {
    fn drop(&mut self) {
        self.env.cancel(self.id);
    }
}

/// Cloneable prop wrapper around a host environment. Equality is identity,
/// which keeps prop diffing stable across renders.
#[derive(Clone)]
pub struct HostHandle(Rc<dyn HostEnv>);

impl HostHandle {
    pub fn new(env: Rc<dyn HostEnv>) -> Self {
        Self(env)
    }

    pub fn env(&self) -> Rc<dyn HostEnv> {
        Rc::clone(&self.0)
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

struct DomHostInner {
    scroll_depth: Cell<u32>,
    next_id: Cell<u64>,
    key_listeners: RefCell<HashMap<u64, Closure<dyn FnMut(web_sys::KeyboardEvent)>>>,
    timers: RefCell<HashMap<u64, i32>>,
}

impl DomHostInner {
    fn bump_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

/// Browser implementation of [`HostEnv`] backed by `web-sys`.
///
/// The scroll lock is depth-counted so overlapping dialog instances restore
/// the document style only when the last one releases. All DOM fallibility
/// (missing window, document or body) degrades to a no-op.
pub struct DomHost {
    inner: Rc<DomHostInner>,
}

thread_local! {
    static SHARED_HOST: Rc<DomHost> = Rc::new(DomHost::new());
}

impl DomHost {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(DomHostInner {
                scroll_depth: Cell::new(0),
                next_id: Cell::new(0),
                key_listeners: RefCell::new(HashMap::new()),
                timers: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// The process-wide instance. All dialog instances must share one host
    /// so the scroll-lock depth spans them.
    pub fn shared() -> Rc<dyn HostEnv> {
        SHARED_HOST.with(|host| Rc::clone(host) as Rc<dyn HostEnv>)
    }

    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.body()
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }
}

impl Default for DomHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnv for DomHost {
    fn lock_scroll(&self) {
        let depth = self.inner.scroll_depth.get();
        self.inner.scroll_depth.set(depth + 1);
        if depth == 0 {
            if let Some(body) = Self::body() {
                let _ = body.style().set_property("overflow", "hidden");
            }
        }
    }

    fn unlock_scroll(&self) {
        let depth = self.inner.scroll_depth.get();
        if depth == 0 {
            return;
        }
        self.inner.scroll_depth.set(depth - 1);
        if depth == 1 {
            if let Some(body) = Self::body() {
                let _ = body.style().remove_property("overflow");
            }
        }
    }

    fn listen_escape(&self, notify: Rc<dyn Fn()>) -> ListenerId {
        let id = self.inner.bump_id();
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == ESCAPE_KEY {
                    notify();
                }
            },
        );
        if let Some(document) = Self::document() {
            let _ = document
                .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
        }
        self.inner.key_listeners.borrow_mut().insert(id, callback);
        ListenerId(id)
    }

    fn unlisten_escape(&self, id: ListenerId) {
        if let Some(callback) = self.inner.key_listeners.borrow_mut().remove(&id.0) {
            if let Some(document) = Self::document() {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> TimerId {
        let id = self.inner.bump_id();
        let inner = Rc::clone(&self.inner);
        let callback = Closure::once_into_js(move || {
            inner.timers.borrow_mut().remove(&id);
            action();
        });
        let Some(window) = web_sys::window() else {
            return TimerId(id);
        };
        if let Ok(handle) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms as i32,
            )
        {
            self.inner.timers.borrow_mut().insert(id, handle);
        }
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        if let Some(handle) = self.inner.timers.borrow_mut().remove(&id.0) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}
