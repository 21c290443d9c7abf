//! Event listeners. Each one turns a DOM event into a message.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, FormData, HtmlFormElement, KeyboardEvent};
use zeta_ui::constants::card;
use zeta_ui::{CarouselHit, HitTest, Key, ModalHit};

use super::host::DomTarget;
use super::{Runtime, js_error};
use crate::contact::ContactForm;
use crate::error::SiteError;
use crate::message::Message;

/// Register `handler` for `kind` events on `target` for the page's lifetime.
fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Wire every listener the page has a target for.
pub fn bind(runtime: &Rc<Runtime>) -> Result<(), SiteError> {
    let page = runtime.page();

    if let Some(grid) = &page.grid {
        bind_grid(runtime, grid)?;
    }
    for (index, chip) in page.chips.iter().enumerate() {
        let rt = runtime.clone();
        listen(chip, "click", move |_| rt.dispatch(Message::ChipSelected(index)))?;
    }
    if let Some(overlay) = &page.modal {
        bind_modal(runtime, overlay, page.has_panel)?;
    }
    if let Some(form) = &page.contact_form {
        bind_contact(runtime, form)?;
    }
    if let Some(toggle) = &page.nav_toggle {
        let rt = runtime.clone();
        listen(toggle, "click", move |_| rt.dispatch(Message::NavToggled))?;
    }
    for link in &page.nav_links {
        let rt = runtime.clone();
        listen(link, "click", move |_| rt.dispatch(Message::NavLinkClicked))?;
    }

    let window = web_sys::window().ok_or_else(|| SiteError::js("no window"))?;
    let rt = runtime.clone();
    listen(&window, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| Key::from_dom(&e.key())) {
            rt.dispatch(Message::KeyPressed(key));
        }
    })?;

    log::debug!("Listeners bound");
    Ok(())
}

/// Cards are re-rendered on every filter change, so the grid delegates.
fn bind_grid(runtime: &Rc<Runtime>, grid: &Element) -> Result<(), SiteError> {
    let rt = runtime.clone();
    listen(grid, "click", move |event| {
        let Some(target) = DomTarget::of(&event) else {
            return;
        };
        let Some(card) = target.index_within(card::CARD) else {
            return;
        };
        let hit = CarouselHit::classify(&target);
        rt.dispatch(Message::CardClicked { card, hit });
    })?;

    let rt = runtime.clone();
    listen(grid, "keydown", move |event| {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(target) = DomTarget::of(&event) else {
            return;
        };
        let Some(card) = target.index_within(card::CARD) else {
            return;
        };
        let key = Key::from_dom(&keyboard.key());
        let hit = CarouselHit::classify(&target);
        // Space would scroll the page instead of opening the card
        if key.activates() && !hit.is_inside() {
            event.prevent_default();
        }
        rt.dispatch(Message::CardKey { card, key, hit });
    })
}

fn bind_modal(runtime: &Rc<Runtime>, overlay: &Element, has_panel: bool) -> Result<(), SiteError> {
    let rt = runtime.clone();
    listen(overlay, "click", move |event| {
        let Some(target) = DomTarget::of(&event) else {
            return;
        };
        let hit = ModalHit::classify_in(&target, has_panel);
        rt.dispatch(Message::ModalClicked(hit));
    })
}

fn bind_contact(runtime: &Rc<Runtime>, form: &Element) -> Result<(), SiteError> {
    let rt = runtime.clone();
    listen(form, "submit", move |event| {
        event.prevent_default();
        let Some(form) = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        match FormData::new_with_form(&form) {
            Ok(data) => {
                let field = |name: &str| data.get(name).as_string().unwrap_or_default();
                let contact = ContactForm::new(&field("name"), &field("email"), &field("message"));
                rt.dispatch(Message::ContactSubmitted(contact));
            }
            Err(e) => log::warn!("⚠️  Could not read contact form: {:?}", e),
        }
    })
}
