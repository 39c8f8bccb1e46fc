pub mod components;
pub mod focus;
pub mod host;
pub mod model;
pub mod session;

// Re-export the widget surface at the crate root for convenient importing
pub use crate::components::{DEFAULT_FOCUS_DELAY_MS, Dialog};
pub use crate::focus::{DomFocus, FOCUSABLE_SELECTOR, FocusHandle, FocusStrategy};
pub use crate::host::{
    DeferredFocusGuard, DomHost, ESCAPE_KEY, EscapeListenerGuard, HostEnv, HostHandle, ListenerId,
    ScrollLockGuard, TimerId,
};
pub use crate::model::{PanelModel, PanelSize, Presentation};
pub use crate::session::{DialogSession, DismissFlags};
