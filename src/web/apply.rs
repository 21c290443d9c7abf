//! Effect application: the only place the page is mutated.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement};
use zeta_ui::BodyLock;
use zeta_ui::constants::{
    ACTIVE_CLASS, INDEX_ATTRIBUTE, OPEN_CLASS, SCROLL_LOCK_CLASS, SCROLL_LOCK_PROPERTIES, card,
    modal,
};

use super::page::{Page, query_all};
use super::js_error;
use crate::constants::{globals, page as ids};
use crate::embeds::{EmbedCell, needs_processing};
use crate::error::SiteError;
use crate::message::Effect;
use crate::views::markup::{embeds_html, grid_html, thumbs_html};
use crate::views::{DetailView, MainImage};

/// Apply one effect, logging instead of failing.
pub fn apply(page: &Page, effect: Effect<Element>) {
    let name = effect_name(&effect);
    if let Err(e) = try_apply(page, effect) {
        log::warn!("⚠️  Could not apply {}: {}", name, e);
    }
}

fn effect_name(effect: &Effect<Element>) -> &'static str {
    match effect {
        Effect::RenderGrid(_) => "RenderGrid",
        Effect::ActivateChip(_) => "ActivateChip",
        Effect::SetCarouselActive { .. } => "SetCarouselActive",
        Effect::PopulateModal(_) => "PopulateModal",
        Effect::SelectThumbnail { .. } => "SelectThumbnail",
        Effect::ShowModal => "ShowModal",
        Effect::LockScroll(_) => "LockScroll",
        Effect::FocusModal => "FocusModal",
        Effect::HideModal => "HideModal",
        Effect::UnlockScroll { .. } => "UnlockScroll",
        Effect::RestoreFocus(_) => "RestoreFocus",
        Effect::Navigate(_) => "Navigate",
        Effect::SetNavOpen(_) => "SetNavOpen",
    }
}

fn try_apply(page: &Page, effect: Effect<Element>) -> Result<(), SiteError> {
    match effect {
        Effect::RenderGrid(cards) => {
            if let Some(grid) = &page.grid {
                grid.set_inner_html(&grid_html(&cards));
                log::debug!("Rendered {} cards", cards.len());
            }
        }
        Effect::ActivateChip(index) => {
            for (i, chip) in page.chips.iter().enumerate() {
                set_class(chip, ACTIVE_CLASS, i == index)?;
            }
        }
        Effect::SetCarouselActive { card: index, active } => {
            if let Some(element) = card_element(page, index)? {
                mark_only(&query_all(&element, card::IMAGE)?, active)?;
                mark_only(&query_all(&element, card::INDICATOR)?, active)?;
            }
        }
        Effect::PopulateModal(detail) => populate_modal(page, &detail),
        Effect::SelectThumbnail { index, image } => {
            set_main_image(page, &image);
            if let Some(strip) = page.by_id(ids::MODAL_THUMBS) {
                mark_only(&query_all(&strip, modal::THUMB)?, index)?;
            }
        }
        Effect::ShowModal => {
            if let Some(overlay) = &page.modal {
                set_class(overlay, OPEN_CLASS, true)?;
                overlay.set_attribute("aria-hidden", "false").map_err(js_error)?;
            }
        }
        Effect::LockScroll(lock) => lock_scroll(page, &lock)?,
        Effect::FocusModal => {
            if let Some(overlay) = &page.modal {
                let target = overlay
                    .query_selector(modal::CLOSE)
                    .map_err(js_error)?
                    .unwrap_or_else(|| overlay.clone());
                focus(&target)?;
            }
        }
        Effect::HideModal => {
            if let Some(overlay) = &page.modal {
                set_class(overlay, OPEN_CLASS, false)?;
                overlay.set_attribute("aria-hidden", "true").map_err(js_error)?;
            }
        }
        Effect::UnlockScroll { offset } => unlock_scroll(page, offset)?,
        Effect::RestoreFocus(element) => focus(&element)?,
        Effect::Navigate(url) => {
            let window = web_sys::window().ok_or_else(|| SiteError::js("no window"))?;
            window.location().set_href(&url).map_err(js_error)?;
        }
        Effect::SetNavOpen(open) => {
            if let Some(nav) = &page.nav {
                set_class(nav, OPEN_CLASS, open)?;
            }
            if let Some(toggle) = &page.nav_toggle {
                toggle
                    .set_attribute("aria-expanded", if open { "true" } else { "false" })
                    .map_err(js_error)?;
            }
        }
    }
    Ok(())
}

fn set_class(element: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(js_error)
}

/// Make `active` the only element of the group carrying the active class.
fn mark_only(group: &[Element], active: usize) -> Result<(), SiteError> {
    for (i, element) in group.iter().enumerate() {
        set_class(element, ACTIVE_CLASS, i == active)?;
    }
    Ok(())
}

fn card_element(page: &Page, index: usize) -> Result<Option<Element>, SiteError> {
    let Some(grid) = &page.grid else {
        return Ok(None);
    };
    let selector = format!(r#"{}[{}="{}"]"#, card::CARD, INDEX_ATTRIBUTE, index);
    grid.query_selector(&selector).map_err(js_error)
}

fn focus(element: &Element) -> Result<(), SiteError> {
    match element.dyn_ref::<HtmlElement>() {
        Some(element) => element.focus().map_err(js_error),
        None => Ok(()),
    }
}

fn set_text(page: &Page, id: &str, text: &str) {
    if let Some(element) = page.by_id(id) {
        element.set_text_content(Some(text));
    }
}

fn set_main_image(page: &Page, image: &MainImage) {
    if let Some(img) = page
        .by_id(ids::MODAL_MAIN_IMAGE)
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        img.set_src(&image.src);
        img.set_alt(&image.alt);
    }
}

fn populate_modal(page: &Page, detail: &DetailView) {
    set_text(page, ids::MODAL_TITLE, &detail.title);
    set_text(page, ids::MODAL_CATEGORY, &detail.category);
    set_text(page, ids::MODAL_META, &detail.meta);
    set_text(page, ids::MODAL_DESCRIPTION, &detail.description);
    set_main_image(page, &detail.main_image);
    if let Some(strip) = page.by_id(ids::MODAL_THUMBS) {
        strip.set_inner_html(&thumbs_html(&detail.thumbs));
    }
}

fn lock_scroll(page: &Page, lock: &BodyLock) -> Result<(), SiteError> {
    let Some(body) = &page.body else {
        return Ok(());
    };
    let style = body.style();
    for (property, value) in lock.styles() {
        style.set_property(property, &value).map_err(js_error)?;
    }
    set_class(body, SCROLL_LOCK_CLASS, true)
}

fn unlock_scroll(page: &Page, offset: i32) -> Result<(), SiteError> {
    if let Some(body) = &page.body {
        let style = body.style();
        for property in SCROLL_LOCK_PROPERTIES {
            style.remove_property(property).map_err(js_error)?;
        }
        set_class(body, SCROLL_LOCK_CLASS, false)?;
    }
    let window = web_sys::window().ok_or_else(|| SiteError::js("no window"))?;
    window.scroll_to_with_x_and_y(0.0, f64::from(offset));
    Ok(())
}

/// Fill the embed grid, then let the embed script process it when loaded.
pub fn render_embeds(page: &Page, cells: &[EmbedCell]) {
    let Some(container) = &page.embeds else {
        return;
    };
    container.set_inner_html(&embeds_html(cells));
    if needs_processing(cells)
        && let Err(e) = process_embeds()
    {
        log::debug!("Embed script not run: {}", e);
    }
}

/// Call `window.instgrm.Embeds.process()` if the script is present.
fn process_embeds() -> Result<(), SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::js("no window"))?;
    let script = js_sys::Reflect::get(&window, &JsValue::from_str(globals::EMBED_SCRIPT))
        .map_err(js_error)?;
    if script.is_undefined() || script.is_null() {
        return Err(SiteError::js("embed script not loaded"));
    }
    let embeds = js_sys::Reflect::get(&script, &JsValue::from_str("Embeds")).map_err(js_error)?;
    let process = js_sys::Reflect::get(&embeds, &JsValue::from_str("process"))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(js_error)?;
    process.call0(&embeds).map_err(js_error)?;
    log::debug!("📷 Embed script processed the grid");
    Ok(())
}
