//! DOM implementations of the host and hit-test seams.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};
use zeta_ui::constants::INDEX_ATTRIBUTE;
use zeta_ui::{HitTest, Host};

/// Focus and scroll position of the live document.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Host for DomHost {
    type Focus = Element;

    fn focused(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn scroll_offset(&self) -> i32 {
        let window_offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .map(|y| y.round() as i32)
            .unwrap_or(0);
        if window_offset != 0 {
            return window_offset;
        }
        self.document
            .document_element()
            .map(|root| root.scroll_top())
            .unwrap_or(0)
    }
}

/// An event target, classified by the regions it sits inside.
pub struct DomTarget(pub Element);

impl DomTarget {
    /// The element an event was dispatched to.
    pub fn of(event: &Event) -> Option<Self> {
        event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(Self)
    }
}

impl HitTest for DomTarget {
    fn within(&self, selector: &str) -> bool {
        matches!(self.0.closest(selector), Ok(Some(_)))
    }

    fn index_within(&self, selector: &str) -> Option<usize> {
        self.0
            .closest(selector)
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(INDEX_ATTRIBUTE))
            .and_then(|index| index.parse().ok())
    }
}
