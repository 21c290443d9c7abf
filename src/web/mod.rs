//! Browser binding.
//!
//! Reads the page structure and the globals the page defines, turns DOM
//! events into [`Message`]s and applies the returned [`Effect`]s.

mod apply;
mod bind;
mod host;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use zeta_ui::Application;

use crate::constants::globals;
use crate::error::SiteError;
use crate::message::{Effect, Message};
use crate::{ProjectStore, SiteApp, SiteConfig};

use host::DomHost;
use page::Page;

/// Convert a thrown JS value into a site error.
pub(crate) fn js_error(value: JsValue) -> SiteError {
    SiteError::js(format!("{:?}", value))
}

/// The mounted site: app state, the page it drives and the host it reads.
pub struct Runtime {
    app: RefCell<SiteApp<Element>>,
    page: Page,
    host: DomHost,
}

impl Runtime {
    /// Run one message through the app, then apply its effects.
    ///
    /// The app borrow ends before any effect touches the page.
    pub fn dispatch(&self, message: Message) {
        let effects = match self.app.try_borrow_mut() {
            Ok(mut app) => app.update(message, &self.host),
            Err(_) => {
                log::warn!("⚠️  Dropped {:?} while an update was running", message);
                return;
            }
        };
        self.apply_all(effects);
    }

    fn apply_all(&self, effects: Vec<Effect<Element>>) {
        for effect in effects {
            apply::apply(&self.page, effect);
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

/// JSON text of `window[name]`, when the page defines it.
fn read_global(name: &str) -> Result<Option<String>, SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::js("no window"))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).map_err(js_error)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&value).map_err(js_error)?;
    Ok(json.as_string())
}

/// Site configuration from `window.__SITE_CONFIG__`, defaults when absent or invalid.
pub fn load_config() -> SiteConfig {
    match read_global(globals::SITE_CONFIG) {
        Ok(Some(json)) => SiteConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("⚠️  Ignoring site config: {}", e);
            SiteConfig::default()
        }),
        Ok(None) => SiteConfig::default(),
        Err(e) => {
            log::warn!("⚠️  Could not read site config: {}", e);
            SiteConfig::default()
        }
    }
}

/// Project records from `window.__PROJECTS__`, empty when absent or invalid.
pub fn load_store() -> ProjectStore {
    match read_global(globals::PROJECTS) {
        Ok(Some(json)) => ProjectStore::from_json(&json).unwrap_or_else(|e| {
            log::error!("❌ Could not load projects: {}", e);
            ProjectStore::default()
        }),
        Ok(None) => {
            log::info!("📁 No project data on this page");
            ProjectStore::default()
        }
        Err(e) => {
            log::error!("❌ Could not read projects: {}", e);
            ProjectStore::default()
        }
    }
}

/// Mount now, or once the document has finished parsing.
pub fn when_ready(config: SiteConfig) -> Result<(), SiteError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::js("no document"))?;

    if document.ready_state() != "loading" {
        return mount(config);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = mount(config) {
            log::error!("❌ Site failed to mount: {}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(js_error)
}

/// Build the app from the page, render the grid and embeds, wire the listeners.
pub fn mount(config: SiteConfig) -> Result<(), SiteError> {
    let page = Page::read()?;
    let store = load_store();
    log::info!("📁 {} projects loaded", store.len());

    let mut app = SiteApp::new(config, store, page.filter_bar());
    if page.modal.is_none() {
        log::debug!("No project modal on this page");
        app = app.without_modal();
    }
    let initial = app.init();
    let embeds = app.embed_cells();

    let runtime = Rc::new(Runtime {
        app: RefCell::new(app),
        host: DomHost::new(page.document.clone()),
        page,
    });
    runtime.apply_all(initial);
    apply::render_embeds(&runtime.page, &embeds);
    bind::bind(&runtime)?;

    log::info!("✅ Site ready");
    Ok(())
}
