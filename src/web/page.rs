//! The fixed page structure the site binds to.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};
use zeta_ui::constants::{ACTIVE_CLASS, modal};

use super::js_error;
use crate::constants::page;
use crate::error::SiteError;
use crate::filter::FilterBar;

/// Elements looked up once at mount. Any of them may be missing; the
/// matching feature is then inert.
pub struct Page {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub grid: Option<Element>,
    pub chips: Vec<Element>,
    pub modal: Option<Element>,
    /// Whether the modal has a content panel to click outside of
    pub has_panel: bool,
    pub contact_form: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav: Option<Element>,
    pub nav_links: Vec<Element>,
    pub embeds: Option<Element>,
}

impl Page {
    pub fn read() -> Result<Self, SiteError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SiteError::js("no document"))?;

        let modal = document.get_element_by_id(page::MODAL);
        let has_panel = match &modal {
            Some(m) => m.query_selector(modal::PANEL).map_err(js_error)?.is_some(),
            None => false,
        };

        Ok(Self {
            body: document.body(),
            grid: document.get_element_by_id(page::GRID),
            chips: query_all(&document, page::CHIPS)?,
            modal,
            has_panel,
            contact_form: document.get_element_by_id(page::CONTACT_FORM),
            nav_toggle: document.query_selector(page::NAV_TOGGLE).map_err(js_error)?,
            nav: document.query_selector(page::NAV).map_err(js_error)?,
            nav_links: query_all(&document, &format!("{} a", page::NAV))?,
            embeds: document.get_element_by_id(page::EMBEDS),
            document,
        })
    }

    /// Chip keys in page order, plus whichever chip the markup marks active.
    pub fn filter_bar(&self) -> FilterBar {
        let keys: Vec<Option<String>> = self
            .chips
            .iter()
            .map(|chip| chip.get_attribute(page::FILTER_ATTRIBUTE))
            .collect();
        let active = self
            .chips
            .iter()
            .position(|chip| chip.class_list().contains(ACTIVE_CLASS));
        FilterBar::new(keys.iter().map(|k| k.as_deref()), active)
    }

    /// The element with `id`, when it exists.
    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(
    root: &impl AsRef<web_sys::Node>,
    selector: &str,
) -> Result<Vec<Element>, SiteError> {
    let root: &web_sys::Node = root.as_ref();
    let list = if let Some(element) = root.dyn_ref::<Element>() {
        element.query_selector_all(selector)
    } else if let Some(document) = root.dyn_ref::<Document>() {
        document.query_selector_all(selector)
    } else {
        return Ok(Vec::new());
    }
    .map_err(js_error)?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
