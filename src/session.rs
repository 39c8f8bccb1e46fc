use std::cell::Cell;
use std::rc::Rc;

use crate::focus::FocusStrategy;
use crate::host::{DeferredFocusGuard, EscapeListenerGuard, HostEnv, ScrollLockGuard};

/// Which dismiss paths are currently enabled. The explicit close control is
/// not represented here; it always dismisses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DismissFlags {
    pub escape: bool,
    pub backdrop: bool,
}

impl Default for DismissFlags {
    fn default() -> Self {
        Self {
            escape: true,
            backdrop: true,
        }
    }
}

/// Everything one open cycle owns: the scroll lock, the escape-key listener
/// and the deferred initial-focus action. Dropping the session releases all
/// three, which ties resource release to unmount of the open subtree.
pub struct DialogSession {
    flags: Rc<Cell<DismissFlags>>,
    notify: Rc<dyn Fn()>,
    _scroll: ScrollLockGuard,
    _escape: EscapeListenerGuard,
    _focus: DeferredFocusGuard,
}

impl DialogSession {
    /// Acquire the open-cycle resources. The escape listener is registered
    /// exactly once here; it reads the current flags at dispatch time, so
    /// flag changes never require re-registration. The focus action runs
    /// after `focus_delay_ms` unless the session is dropped first.
    pub fn open(
        host: Rc<dyn HostEnv>,
        focus: Rc<dyn FocusStrategy>,
        region_id: String,
        focus_delay_ms: u32,
        flags: DismissFlags,
        notify: Rc<dyn Fn()>,
    ) -> Self {
        let flags = Rc::new(Cell::new(flags));
        let scroll = ScrollLockGuard::acquire(Rc::clone(&host));
        let escape = {
            let flags = Rc::clone(&flags);
            let notify = Rc::clone(&notify);
            EscapeListenerGuard::register(
                Rc::clone(&host),
                Rc::new(move || {
                    if flags.get().escape {
                        notify();
                    }
                }),
            )
        };
        let deferred = DeferredFocusGuard::schedule(
            host,
            focus_delay_ms,
            Box::new(move || {
                focus.focus_first(&region_id);
            }),
        );
        Self {
            flags,
            notify,
            _scroll: scroll,
            _escape: escape,
            _focus: deferred,
        }
    }

    /// Refresh the dismiss flags; called on every render so mid-open prop
    /// changes take effect immediately.
    pub fn set_flags(&self, flags: DismissFlags) {
        self.flags.set(flags);
    }

    /// A click that landed on the backdrop itself (panel clicks stop
    /// propagation and never arrive here).
    pub fn backdrop_clicked(&self) {
        if self.flags.get().backdrop {
            (self.notify)();
        }
    }

    /// The explicit close control; dismisses regardless of the flags.
    pub fn close_clicked(&self) {
        (self.notify)();
    }
}
