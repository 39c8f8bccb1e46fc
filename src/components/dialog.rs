use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::focus::{DomFocus, FocusHandle};
use crate::host::{DomHost, HostHandle};
use crate::model::{PanelModel, PanelSize, Presentation};
use crate::session::{DialogSession, DismissFlags};

/// Delay before moving focus into the panel, leaving the host a beat to
/// mount the subtree. Override per instance via `focus_delay_ms`.
pub const DEFAULT_FOCUS_DELAY_MS: u32 = 100;

/// Counter for unique content-region ids across dialog instances
static REGION_COUNTER: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn Dialog(
    /// Whether the overlay is shown. The widget never closes itself; it only
    /// asks the caller to close via `on_dismiss`.
    open: bool,
    on_dismiss: EventHandler<()>,
    children: Element,
    /// Extra classes appended to the panel node.
    #[props(default)] class: String,
    #[props(default = true)] dismiss_on_escape: bool,
    #[props(default = true)] dismiss_on_backdrop: bool,
    #[props(default)] size: PanelSize,
    #[props(default = DEFAULT_FOCUS_DELAY_MS)] focus_delay_ms: u32,
    footer: Option<Element>,
    title: Option<String>,
    /// Substitute host environment, used by embedders and tests.
    host: Option<HostHandle>,
    /// Substitute focus strategy.
    focus: Option<FocusHandle>,
) -> Element {
    match Presentation::resolve(open, title, size, class, footer.is_some()) {
        Presentation::Closed => rsx! {},
        Presentation::Open(panel) => {
            let host = host.unwrap_or_else(|| HostHandle::new(DomHost::shared()));
            let focus = focus.unwrap_or_else(|| FocusHandle::new(DomFocus::shared()));
            let footer = footer.unwrap_or_else(|| rsx! {});
            rsx! {
                ActiveOverlay {
                    panel,
                    on_dismiss,
                    dismiss_on_escape,
                    dismiss_on_backdrop,
                    focus_delay_ms,
                    footer,
                    host,
                    focus,
                    {children}
                }
            }
        }
    }
}

/// The mounted overlay. It only exists while the dialog is open, so the
/// session created on mount is dropped, and every resource released,
/// exactly when the open subtree unmounts.
#[component]
fn ActiveOverlay(
    panel: PanelModel,
    on_dismiss: EventHandler<()>,
    dismiss_on_escape: bool,
    dismiss_on_backdrop: bool,
    focus_delay_ms: u32,
    footer: Element,
    host: HostHandle,
    focus: FocusHandle,
    children: Element,
) -> Element {
    let region_id = use_hook(|| {
        let n = REGION_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("overlay-content-{}", n)
    });

    // Mirror the dismiss handler so the listener registered on mount always
    // calls the callback from the latest render
    let dismiss_cell = use_hook(|| Rc::new(Cell::new(on_dismiss)));
    dismiss_cell.set(on_dismiss);

    let flags = DismissFlags {
        escape: dismiss_on_escape,
        backdrop: dismiss_on_backdrop,
    };

    let session = use_hook(|| {
        let notify = {
            let cell = Rc::clone(&dismiss_cell);
            Rc::new(move || cell.get().call(())) as Rc<dyn Fn()>
        };
        Rc::new(DialogSession::open(
            host.env(),
            focus.strategy(),
            region_id.clone(),
            focus_delay_ms,
            flags,
            notify,
        ))
    });
    session.set_flags(flags);

    let backdrop_session = Rc::clone(&session);
    let close_session = Rc::clone(&session);

    rsx! {
        div {
            class: "overlay",
            role: "dialog",
            aria_modal: "true",
            onclick: move |_| backdrop_session.backdrop_clicked(),
            div {
                class: "{panel.panel_class()}",
                onclick: move |e| e.stop_propagation(),
                button {
                    class: "overlay-close",
                    aria_label: "Close",
                    onclick: move |_| close_session.close_clicked(),
                    "×"
                }
                {panel.title().map(|title| rsx! {
                    h2 { class: "overlay-title", "{title}" }
                })}
                div { class: "overlay-content", id: "{region_id}", {children} }
                if panel.has_footer() {
                    div { class: "overlay-footer", {footer} }
                }
            }
        }
    }
}
