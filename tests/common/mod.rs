use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dialog_overlay::{DialogSession, DismissFlags, FocusStrategy, HostEnv, ListenerId, TimerId};

/// Recording host environment standing in for the browser document.
pub struct FakeHost {
    lock_depth: Cell<u32>,
    pub locks_acquired: Cell<u32>,
    pub locks_released: Cell<u32>,
    next_id: Cell<u64>,
    listeners: RefCell<HashMap<u64, Rc<dyn Fn()>>>,
    timers: RefCell<HashMap<u64, Box<dyn FnOnce()>>>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            lock_depth: Cell::new(0),
            locks_acquired: Cell::new(0),
            locks_released: Cell::new(0),
            next_id: Cell::new(0),
            listeners: RefCell::new(HashMap::new()),
            timers: RefCell::new(HashMap::new()),
        })
    }

    pub fn scroll_locked(&self) -> bool {
        self.lock_depth.get() > 0
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Simulate the user pressing Escape: dispatch to every registered
    /// listener, the way the document would.
    pub fn press_escape(&self) {
        let notifies: Vec<Rc<dyn Fn()>> = self.listeners.borrow().values().cloned().collect();
        for notify in notifies {
            notify();
        }
    }

    /// Run every timer that is still scheduled.
    pub fn fire_timers(&self) {
        let due: Vec<Box<dyn FnOnce()>> = self
            .timers
            .borrow_mut()
            .drain()
            .map(|(_, action)| action)
            .collect();
        for action in due {
            action();
        }
    }
}

impl HostEnv for FakeHost {
    fn lock_scroll(&self) {
        self.lock_depth.set(self.lock_depth.get() + 1);
        self.locks_acquired.set(self.locks_acquired.get() + 1);
    }

    fn unlock_scroll(&self) {
        if self.lock_depth.get() > 0 {
            self.lock_depth.set(self.lock_depth.get() - 1);
        }
        self.locks_released.set(self.locks_released.get() + 1);
    }

    fn listen_escape(&self, notify: Rc<dyn Fn()>) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().insert(id, notify);
        ListenerId(id)
    }

    fn unlisten_escape(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(&id.0);
    }

    fn schedule(&self, _delay_ms: u32, action: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.timers.borrow_mut().insert(id, action);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        self.timers.borrow_mut().remove(&id.0);
    }
}

/// Focus strategy that records the regions it was asked to focus.
pub struct FakeFocus {
    pub calls: RefCell<Vec<String>>,
    pub target_available: Cell<bool>,
}

impl FakeFocus {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            target_available: Cell::new(true),
        })
    }
}

impl FocusStrategy for FakeFocus {
    fn focus_first(&self, region_id: &str) -> bool {
        self.calls.borrow_mut().push(region_id.to_string());
        self.target_available.get()
    }
}

/// A dismiss callback plus the counter it bumps on every invocation.
pub fn dismiss_counter() -> (Rc<dyn Fn()>, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0u32));
    let bump = Rc::clone(&count);
    (Rc::new(move || bump.set(bump.get() + 1)), count)
}

/// Open a session against the fakes with the given flags; returns the
/// session and its dismiss counter.
pub fn open_session(
    host: &Rc<FakeHost>,
    focus: &Rc<FakeFocus>,
    flags: DismissFlags,
) -> (DialogSession, Rc<Cell<u32>>) {
    let (notify, count) = dismiss_counter();
    let session = DialogSession::open(
        Rc::clone(host) as Rc<dyn HostEnv>,
        Rc::clone(focus) as Rc<dyn FocusStrategy>,
        "overlay-content-test".to_string(),
        100,
        flags,
        notify,
    );
    (session, count)
}
