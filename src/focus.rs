use std::rc::Rc;

use wasm_bindgen::JsCast;

/// Selector matching the elements eligible for initial focus: interactive
/// tags plus anything with a non-negative explicit tab index.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Capability for moving input focus into the panel's content region.
pub trait FocusStrategy {
    /// Focus the first focusable element inside the element with id
    /// `region_id`. Returns whether anything received focus; a region with
    /// no focusable descendant is a no-op, not an error.
    fn focus_first(&self, region_id: &str) -> bool;
}

/// DOM traversal implementation: query the region subtree for the first
/// interactive element and focus it.
#[derive(Default)]
pub struct DomFocus;

thread_local! {
    static SHARED_FOCUS: Rc<DomFocus> = Rc::new(DomFocus);
}

impl DomFocus {
    /// The process-wide instance used when no strategy is injected.
    pub fn shared() -> Rc<dyn FocusStrategy> {
        SHARED_FOCUS.with(|focus| Rc::clone(focus) as Rc<dyn FocusStrategy>)
    }
}

impl FocusStrategy for DomFocus {
    fn focus_first(&self, region_id: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(region) = document.get_element_by_id(region_id) else {
            return false;
        };
        let Ok(Some(element)) = region.query_selector(FOCUSABLE_SELECTOR) else {
            return false;
        };
        match element.dyn_into::<web_sys::HtmlElement>() {
            Ok(element) => element.focus().is_ok(),
            Err(_) => false,
        }
    }
}

/// Cloneable prop wrapper around a focus strategy (identity equality).
#[derive(Clone)]
pub struct FocusHandle(Rc<dyn FocusStrategy>);

impl FocusHandle {
    pub fn new(strategy: Rc<dyn FocusStrategy>) -> Self {
        Self(strategy)
    }

    pub fn strategy(&self) -> Rc<dyn FocusStrategy> {
        Rc::clone(&self.0)
    }
}

impl PartialEq for FocusHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
